//! CLI Module
//!
//! Command-line interface for the Weightlab level exercises.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{Language, OutputFormat, Settings};

/// Weightlab - tune the weights of a single neuron, level by level
#[derive(Parser, Debug)]
#[command(name = "weightlab")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Settings file (JSON)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Message language (en, ru)
    #[arg(long, global = true)]
    pub lang: Option<Language>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Apply command-line flags on top of resolved settings
    pub fn apply(&self, settings: &mut Settings) {
        if self.verbose {
            settings.log_filter = "debug".to_string();
        }
        if self.json {
            settings.output = OutputFormat::Json;
        }
        if let Some(lang) = self.lang {
            settings.language = lang;
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all levels
    #[command(name = "levels")]
    Levels,

    /// Show a level with its zero weights and target truth table
    #[command(name = "setup")]
    Setup {
        /// Level number
        level: u32,
    },

    /// Test weights on a level
    #[command(name = "test")]
    Test {
        /// Level number
        level: u32,

        /// Weights, in order
        #[arg(allow_negative_numbers = true)]
        weights: Vec<f64>,
    },

    /// Evaluate a JSON test request ({"level": .., "weights": [..]})
    #[command(name = "submit")]
    Submit {
        /// Request file; reads stdin when omitted
        file: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_negative_weights() {
        let cli = Cli::try_parse_from(["weightlab", "test", "1", "2", "-1.5"]).unwrap();
        match cli.command {
            Some(Commands::Test { level, weights }) => {
                assert_eq!(level, 1);
                assert_eq!(weights, vec![2.0, -1.5]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_flags_override_settings() {
        let cli = Cli::try_parse_from(["weightlab", "--json", "--lang", "ru", "levels"]).unwrap();
        let mut settings = Settings::default();
        cli.apply(&mut settings);

        assert_eq!(settings.output, OutputFormat::Json);
        assert_eq!(settings.language, Language::Ru);
        assert_eq!(settings.log_filter, "info");
    }
}
