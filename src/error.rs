//! Error handling for Weightlab
//!
//! Every rejected request maps to one of these variants. Collaborators
//! (request handlers, the CLI) use `status_code` and `friendly_message`
//! to turn them into responses.

use thiserror::Error;

use crate::config::Language;

/// Result type alias for Weightlab operations
pub type Result<T> = std::result::Result<T, WeightlabError>;

/// Main error type for Weightlab operations
#[derive(Error, Debug)]
pub enum WeightlabError {
    // Request Errors
    #[error("Level not found: {level}")]
    LevelNotFound { level: u32 },

    #[error("Invalid weight count for level {level}: expected {expected}, got {actual}")]
    InvalidWeightCount {
        level: u32,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid weight at position {index}: {value} is not a finite number")]
    InvalidWeight { index: usize, value: f64 },

    #[error("Invalid request: {reason}")]
    InvalidRequest { reason: String },

    // Defects
    #[error("Unknown level in scoring engine: {level}")]
    UnknownLevel { level: u32 },

    #[error("Invalid level catalog: {reason}")]
    InvalidCatalog { reason: String },

    // Configuration Errors
    #[error("Configuration error: {reason}")]
    Config { reason: String },

    // I/O Errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl WeightlabError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            WeightlabError::LevelNotFound { .. } => "LEVEL_NOT_FOUND",
            WeightlabError::InvalidWeightCount { .. } => "INVALID_WEIGHT_COUNT",
            WeightlabError::InvalidWeight { .. } => "INVALID_WEIGHT",
            WeightlabError::InvalidRequest { .. } => "INVALID_REQUEST",
            WeightlabError::UnknownLevel { .. } => "UNKNOWN_LEVEL",
            WeightlabError::InvalidCatalog { .. } => "INVALID_CATALOG",
            WeightlabError::Config { .. } => "CONFIG_ERROR",
            WeightlabError::Io(_) => "IO_ERROR",
            WeightlabError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Check if this error is caused by the caller's input
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            WeightlabError::LevelNotFound { .. }
                | WeightlabError::InvalidWeightCount { .. }
                | WeightlabError::InvalidWeight { .. }
                | WeightlabError::InvalidRequest { .. }
                | WeightlabError::Serialization(_)
        )
    }

    /// HTTP-equivalent status a request layer should answer with
    pub fn status_code(&self) -> u16 {
        if self.is_recoverable() {
            400
        } else {
            500
        }
    }

    /// Get a user-friendly message for this error
    pub fn friendly_message(&self, language: Language) -> String {
        match (self, language) {
            (WeightlabError::LevelNotFound { .. }, Language::En) => "invalid level".to_string(),
            (WeightlabError::LevelNotFound { .. }, Language::Ru) => "Неверный уровень".to_string(),
            (WeightlabError::InvalidWeightCount { .. }, Language::En) => {
                "incorrect number of weights".to_string()
            }
            (WeightlabError::InvalidWeightCount { .. }, Language::Ru) => {
                "Неверное количество весов".to_string()
            }
            (WeightlabError::InvalidWeight { index, .. }, Language::En) => {
                format!("weight {} must be a finite number", index + 1)
            }
            (WeightlabError::InvalidWeight { index, .. }, Language::Ru) => {
                format!("Вес {} должен быть конечным числом", index + 1)
            }
            _ => self.to_string(),
        }
    }
}
