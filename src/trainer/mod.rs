//! Trainer Module
//!
//! The operations a request layer calls:
//! - `list_levels`: level-selection view
//! - `training_setup`: weight-adjustment view
//! - `submit_test`: evaluate submitted weights

mod messages;
pub mod render;
mod response;

pub use messages::{result_message, Labels};
pub use response::{
    ErrorResponse, LevelDetails, LevelSummary, TestRequest, TestResponse, TrainingSetup,
};

use log::{info, warn};

use crate::config::Language;
use crate::engine::Evaluator;
use crate::error::{Result, WeightlabError};
use crate::levels::LevelCatalog;

/// Front door for the level exercises
#[derive(Debug, Clone, Copy)]
pub struct Trainer<'c> {
    evaluator: Evaluator<'c>,
    language: Language,
}

impl Trainer<'static> {
    /// Trainer over the process-wide built-in catalog
    pub fn builtin(language: Language) -> Result<Self> {
        Ok(Self::new(LevelCatalog::global()?, language))
    }
}

impl<'c> Trainer<'c> {
    pub fn new(catalog: &'c LevelCatalog, language: Language) -> Self {
        Self {
            evaluator: Evaluator::new(catalog),
            language,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn catalog(&self) -> &'c LevelCatalog {
        self.evaluator.catalog()
    }

    /// Summaries of all levels in display order
    pub fn list_levels(&self) -> Vec<LevelSummary<'c>> {
        self.catalog().levels().iter().map(LevelSummary::from).collect()
    }

    /// Level details, zero weights and the target truth table.
    ///
    /// `LevelNotFound` tells the caller to fall back to the level listing.
    pub fn training_setup(&self, level_id: u32) -> Result<TrainingSetup<'c>> {
        let level = self.catalog().get(level_id)?;
        Ok(TrainingSetup {
            level: LevelDetails::from(level),
            weights: level.zero_weights(),
            training_examples: self.evaluator.training_examples(level_id)?,
        })
    }

    /// Evaluate submitted weights on a level
    pub fn submit_test(&self, level_id: u32, weights: &[f64]) -> Result<TestResponse> {
        let result = self
            .evaluator
            .evaluate(level_id, weights)
            .inspect_err(|e| warn!("Rejected test for level {}: {}", level_id, e))?;

        info!(
            "Level {} tested: {}/{} correct",
            level_id, result.correct_count, result.total_count
        );

        let message = result_message(self.language, result.correct_count, result.total_count);
        Ok(TestResponse::from_result(result, message))
    }

    pub fn submit_request(&self, request: &TestRequest) -> Result<TestResponse> {
        self.submit_test(request.level, &request.weights)
    }

    /// Parse a JSON `TestRequest` body and evaluate it
    pub fn submit_json(&self, body: &str) -> Result<TestResponse> {
        let request: TestRequest = serde_json::from_str(body)
            .inspect_err(|e| warn!("Malformed test request: {}", e))?;
        self.submit_request(&request)
    }

    /// Map an error to the response a request layer sends back
    pub fn error_response(&self, err: &WeightlabError) -> ErrorResponse {
        ErrorResponse {
            code: err.error_code().to_string(),
            status: err.status_code(),
            message: err.friendly_message(self.language),
        }
    }
}
