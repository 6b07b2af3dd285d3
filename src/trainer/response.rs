//! Request and response types exchanged with the request layer.
//!
//! All types serialize as camelCase JSON.

use serde::{Deserialize, Serialize};

use crate::engine::{EvaluationExample, EvaluationResult, TrainingExample};
use crate::levels::{ActivationInfo, Level, LevelFormula};

/// Entry of the level-selection view
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelSummary<'a> {
    pub id: u32,
    pub title: &'a str,
    pub description: &'a str,
    pub product_name: &'a str,
    pub input_labels: &'a [String],
}

impl<'a> From<&'a Level> for LevelSummary<'a> {
    fn from(level: &'a Level) -> Self {
        Self {
            id: level.id,
            title: &level.title,
            description: &level.description,
            product_name: &level.product_name,
            input_labels: &level.input_labels,
        }
    }
}

/// Level as shown to the player. Leaves out the canonical weights.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelDetails<'a> {
    pub id: u32,
    pub title: &'a str,
    pub description: &'a str,
    pub product_name: &'a str,
    pub input_labels: &'a [String],
    pub formula: LevelFormula,
    pub activation: &'a ActivationInfo,
    pub has_bias: bool,
    pub bias: f64,
    pub threshold: f64,
    /// Length of the weight vector a submission must carry
    pub weight_count: usize,
}

impl<'a> From<&'a Level> for LevelDetails<'a> {
    fn from(level: &'a Level) -> Self {
        Self {
            id: level.id,
            title: &level.title,
            description: &level.description,
            product_name: &level.product_name,
            input_labels: &level.input_labels,
            formula: level.formula,
            activation: &level.activation,
            has_bias: level.has_bias,
            bias: level.bias,
            threshold: level.threshold,
            weight_count: level.weight_count(),
        }
    }
}

/// Everything the weight-adjustment view needs
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingSetup<'a> {
    pub level: LevelDetails<'a>,
    /// Starting weights, all zero
    pub weights: Vec<f64>,
    /// Target truth table in enumeration order
    pub training_examples: Vec<TrainingExample>,
}

/// Body of a test submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestRequest {
    pub level: u32,
    #[serde(default)]
    pub weights: Vec<f64>,
}

/// Successful test response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResponse {
    pub is_correct: bool,
    pub correct_count: usize,
    pub total_count: usize,
    pub message: String,
    pub results: Vec<EvaluationExample>,
}

impl TestResponse {
    pub fn from_result(result: EvaluationResult, message: String) -> Self {
        Self {
            is_correct: result.is_correct,
            correct_count: result.correct_count,
            total_count: result.total_count,
            message,
            results: result.examples,
        }
    }
}

/// Rejected request, as a request layer would report it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub code: String,
    /// HTTP-equivalent status
    pub status: u16,
    pub message: String,
}
