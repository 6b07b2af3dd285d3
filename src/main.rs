//! Weightlab CLI
//!
//! Command-line interface for the Weightlab level exercises.

use std::io;
use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser;
use env_logger::Env;
use log::info;

use weightlab::cli::commands::{self, Context};
use weightlab::cli::Cli;
use weightlab::Settings;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut settings =
        Settings::resolve(cli.config.as_deref()).context("failed to load settings")?;
    cli.apply(&mut settings);

    // Initialize logger
    env_logger::Builder::from_env(Env::default().default_filter_or(settings.log_filter.as_str()))
        .init();

    info!("Weightlab v{}", env!("CARGO_PKG_VERSION"));

    let Some(cmd) = cli.command else {
        println!("Weightlab v{}", env!("CARGO_PKG_VERSION"));
        println!("Use --help for available commands");
        return Ok(ExitCode::SUCCESS);
    };

    let ctx = Context::new(settings).context("failed to build level catalog")?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match commands::dispatch(&ctx, cmd, &mut out) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) if err.is_recoverable() => {
            commands::report_error(&ctx, &err, &mut out)?;
            Ok(ExitCode::from(2))
        }
        Err(err) => Err(err.into()),
    }
}
