//! CLI Command Implementations
//!
//! Each command writes its output to the supplied writer.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use log::info;
use serde::Serialize;

use super::Commands;
use crate::config::{OutputFormat, Settings};
use crate::error::{Result, WeightlabError};
use crate::trainer::render::{render_levels, render_response, render_setup};
use crate::trainer::{Labels, TestResponse, Trainer};

/// Resolved settings plus the trainer they configure
pub struct Context {
    pub settings: Settings,
    pub trainer: Trainer<'static>,
}

impl Context {
    pub fn new(settings: Settings) -> Result<Self> {
        let trainer = Trainer::builtin(settings.language)?;
        Ok(Self { settings, trainer })
    }

    fn labels(&self) -> Labels {
        Labels::for_language(self.trainer.language())
    }
}

/// Run one subcommand
pub fn dispatch<W: Write>(ctx: &Context, cmd: Commands, out: &mut W) -> Result<()> {
    match cmd {
        Commands::Levels => list_levels(ctx, out),
        Commands::Setup { level } => show_setup(ctx, level, out),
        Commands::Test { level, weights } => test_weights(ctx, level, &weights, out),
        Commands::Submit { file } => submit(ctx, file.as_deref(), out),
    }
}

/// List all levels.
pub fn list_levels<W: Write>(ctx: &Context, out: &mut W) -> Result<()> {
    let levels = ctx.trainer.list_levels();

    match ctx.settings.output {
        OutputFormat::Json => write_json(ctx, out, &levels),
        OutputFormat::Text => {
            write!(out, "{}", render_levels(&levels, &ctx.labels()))?;
            Ok(())
        }
    }
}

/// Show the training setup of a level.
pub fn show_setup<W: Write>(ctx: &Context, level: u32, out: &mut W) -> Result<()> {
    info!("Showing setup for level {}", level);
    let setup = ctx.trainer.training_setup(level)?;

    match ctx.settings.output {
        OutputFormat::Json => write_json(ctx, out, &setup),
        OutputFormat::Text => {
            write!(out, "{}", render_setup(&setup, &ctx.labels()))?;
            Ok(())
        }
    }
}

/// Test weights given on the command line.
pub fn test_weights<W: Write>(
    ctx: &Context,
    level: u32,
    weights: &[f64],
    out: &mut W,
) -> Result<()> {
    let response = ctx.trainer.submit_test(level, weights)?;
    write_response(ctx, &response, out)
}

/// Evaluate a JSON request read from a file or stdin.
pub fn submit<W: Write>(ctx: &Context, file: Option<&Path>, out: &mut W) -> Result<()> {
    let body = match file {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let response = ctx.trainer.submit_json(&body)?;
    write_response(ctx, &response, out)
}

/// Print a rejected request the way the current output format expects
pub fn report_error<W: Write>(ctx: &Context, err: &WeightlabError, out: &mut W) -> Result<()> {
    let response = ctx.trainer.error_response(err);
    match ctx.settings.output {
        OutputFormat::Json => write_json(ctx, out, &response),
        OutputFormat::Text => {
            writeln!(out, "{} ({})", response.message, err)?;
            Ok(())
        }
    }
}

fn write_response<W: Write>(ctx: &Context, response: &TestResponse, out: &mut W) -> Result<()> {
    match ctx.settings.output {
        OutputFormat::Json => write_json(ctx, out, response),
        OutputFormat::Text => {
            write!(out, "{}", render_response(response, &ctx.labels()))?;
            Ok(())
        }
    }
}

fn write_json<W, T>(ctx: &Context, out: &mut W, value: &T) -> Result<()>
where
    W: Write,
    T: Serialize + ?Sized,
{
    if ctx.settings.pretty_json {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}
