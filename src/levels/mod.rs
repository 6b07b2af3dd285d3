//! Level Catalog Module
//!
//! Static level definitions:
//! - `Level`: metadata, formula, threshold and canonical weights
//! - `LevelFormula`: the closed set of scoring formulas
//! - `LevelCatalog`: validated, process-wide list of levels

mod catalog;
mod formula;

pub use catalog::LevelCatalog;
pub use formula::LevelFormula;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Display-only description of a level's activation function
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivationInfo {
    /// Short name shown above the formula
    pub name: String,
    /// Formula text, may span several lines
    pub formula: String,
    /// What the function does, in one paragraph
    pub description: String,
    /// Textbook name of the function
    pub scientific_name: String,
    /// Longer teaching explanation
    pub explanation: String,
}

/// One decision level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Level {
    /// Level number, starting at 1
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Product the buy/don't-buy decision is about
    pub product_name: String,
    /// One label per boolean input, in input order
    pub input_labels: Vec<String>,
    pub formula: LevelFormula,
    pub activation: ActivationInfo,
    /// Levels never use a bias term; kept for display
    pub has_bias: bool,
    pub bias: f64,
    /// Sums at or above this value decide "1"
    pub threshold: f64,
    /// Weights that produce the expected outputs
    pub canonical_weights: Vec<f64>,
}

impl Level {
    /// Number of boolean inputs
    pub fn input_count(&self) -> usize {
        self.input_labels.len()
    }

    /// Number of weights a submission must carry
    pub fn weight_count(&self) -> usize {
        self.formula.weight_count()
    }

    /// Weighted sum for one input row
    pub fn score(&self, inputs: &[u8], weights: &[f64]) -> Result<f64> {
        self.formula.score(self.id, inputs, weights)
    }

    /// Zero-initialized weight vector of the required length
    pub fn zero_weights(&self) -> Vec<f64> {
        vec![0.0; self.weight_count()]
    }
}
