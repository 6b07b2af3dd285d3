//! Evaluator
//!
//! Runs a weight vector against every input row of a level and compares
//! the decisions with those of the level's canonical weights.

use log::debug;
use serde::{Deserialize, Serialize};

use super::activation::activate;
use super::inputs::{enumerate_inputs, InputRow};
use crate::error::{Result, WeightlabError};
use crate::levels::{Level, LevelCatalog};

/// Input row with the decision the canonical weights produce
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingExample {
    pub inputs: InputRow,
    pub expected_output: u8,
}

/// Input row evaluated with submitted weights
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationExample {
    pub inputs: InputRow,
    pub expected_output: u8,
    pub actual_output: u8,
    /// Weighted sum under the submitted weights
    pub sum: f64,
}

impl EvaluationExample {
    pub fn is_correct(&self) -> bool {
        self.expected_output == self.actual_output
    }
}

/// Outcome of one test run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    pub level: u32,
    /// One entry per input row, in enumeration order
    pub examples: Vec<EvaluationExample>,
    pub correct_count: usize,
    pub total_count: usize,
    /// Every row decided as expected
    pub is_correct: bool,
}

/// Evaluates weight vectors against a level catalog
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'c> {
    catalog: &'c LevelCatalog,
}

impl<'c> Evaluator<'c> {
    pub fn new(catalog: &'c LevelCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'c LevelCatalog {
        self.catalog
    }

    /// Target truth table of a level
    pub fn training_examples(&self, level_id: u32) -> Result<Vec<TrainingExample>> {
        let level = self.catalog.get(level_id)?;
        expected_table(level)
    }

    /// Evaluate `weights` on level `level_id`.
    ///
    /// Validates the weight vector up front; on error nothing is computed.
    pub fn evaluate(&self, level_id: u32, weights: &[f64]) -> Result<EvaluationResult> {
        let level = self.catalog.get(level_id)?;
        validate_weights(level, weights)?;

        let mut examples = Vec::with_capacity(1usize << level.input_count());
        for target in expected_table(level)? {
            let sum = level.score(target.inputs.as_slice(), weights)?;
            examples.push(EvaluationExample {
                actual_output: activate(sum, level.threshold),
                expected_output: target.expected_output,
                inputs: target.inputs,
                sum,
            });
        }

        let correct_count = examples.iter().filter(|e| e.is_correct()).count();
        let total_count = examples.len();

        debug!(
            "Level {} weights {:?}: {}/{} correct",
            level.id, weights, correct_count, total_count
        );

        Ok(EvaluationResult {
            level: level.id,
            examples,
            correct_count,
            total_count,
            is_correct: correct_count == total_count,
        })
    }
}

/// Check length and finiteness of a submitted weight vector
fn validate_weights(level: &Level, weights: &[f64]) -> Result<()> {
    if weights.len() != level.weight_count() {
        return Err(WeightlabError::InvalidWeightCount {
            level: level.id,
            expected: level.weight_count(),
            actual: weights.len(),
        });
    }
    if let Some((index, &value)) = weights.iter().enumerate().find(|(_, w)| !w.is_finite()) {
        return Err(WeightlabError::InvalidWeight { index, value });
    }
    Ok(())
}

fn expected_table(level: &Level) -> Result<Vec<TrainingExample>> {
    enumerate_inputs(level.input_count())?
        .map(|inputs| -> Result<TrainingExample> {
            let sum = level.score(inputs.as_slice(), &level.canonical_weights)?;
            Ok(TrainingExample {
                expected_output: activate(sum, level.threshold),
                inputs,
            })
        })
        .collect()
}
