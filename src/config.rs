//! Runtime settings.
//!
//! Settings come from three layers, each overriding the previous one:
//! built-in defaults, an optional JSON file, then `WEIGHTLAB_*` environment
//! variables. The CLI applies its own flags on top.

use std::env;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WeightlabError};

/// Environment variable overriding the log filter.
pub const ENV_LOG: &str = "WEIGHTLAB_LOG";

/// Environment variable overriding the output format.
pub const ENV_OUTPUT: &str = "WEIGHTLAB_OUTPUT";

/// Environment variable overriding the message language.
pub const ENV_LANG: &str = "WEIGHTLAB_LANG";

/// Default `env_logger` filter.
const DEFAULT_LOG_FILTER: &str = "info";

/// Language used for user-facing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    En,
    Ru,
}

impl FromStr for Language {
    type Err = WeightlabError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "ru" | "russian" => Ok(Language::Ru),
            other => Err(WeightlabError::Config {
                reason: format!("unsupported language '{}' (expected en or ru)", other),
            }),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::En => write!(f, "en"),
            Language::Ru => write!(f, "ru"),
        }
    }
}

/// How CLI results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = WeightlabError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(WeightlabError::Config {
                reason: format!("unsupported output format '{}' (expected text or json)", other),
            }),
        }
    }
}

/// Weightlab runtime settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// `env_logger` filter directive, e.g. "info" or "weightlab=debug"
    pub log_filter: String,

    /// Output format for CLI results
    pub output: OutputFormat,

    /// Pretty-print JSON output
    pub pretty_json: bool,

    /// Language of result and error messages
    pub language: Language,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            output: OutputFormat::Text,
            pretty_json: true,
            language: Language::En,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file. Missing fields keep their defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| WeightlabError::Config {
            reason: format!("cannot read {}: {}", path.display(), e),
        })?;
        let settings = serde_json::from_str(&contents)?;
        Ok(settings)
    }

    /// Resolve settings: optional file first, then the environment.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        let settings = match path {
            Some(p) => Self::load_from_file(p)?,
            None => Self::default(),
        };
        settings.with_env_overrides()
    }

    /// Apply `WEIGHTLAB_*` environment variables.
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides(|key| env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(filter) = lookup(ENV_LOG) {
            self.log_filter = filter;
        }
        if let Some(output) = lookup(ENV_OUTPUT) {
            self.output = output.parse()?;
        }
        if let Some(lang) = lookup(ENV_LANG) {
            self.language = lang.parse()?;
        }
        Ok(self)
    }
}
