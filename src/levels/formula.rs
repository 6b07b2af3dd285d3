//! Level formulas
//!
//! The closed set of scoring formulas. Each variant knows its input arity,
//! its weight count and how to turn an input row plus weights into a sum.

use serde::{Deserialize, Serialize};

use crate::error::{Result, WeightlabError};

/// Scoring formula of a level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelFormula {
    /// `S = x1*w1 - x2*w2`
    Difference,
    /// `S = x1*w1 + x2*w2 + x3*w3`
    Majority,
    /// `S = (x1 XOR x2)*w1 + (x3 AND x4)*w2`
    NonlinearLogic,
}

impl LevelFormula {
    /// Number of boolean inputs the formula reads
    pub fn input_count(&self) -> usize {
        match self {
            LevelFormula::Difference => 2,
            LevelFormula::Majority => 3,
            LevelFormula::NonlinearLogic => 4,
        }
    }

    /// Number of weights the formula consumes.
    ///
    /// Not always the input count: `NonlinearLogic` weights its two derived
    /// terms, not its four raw inputs.
    pub fn weight_count(&self) -> usize {
        match self {
            LevelFormula::Difference => 2,
            LevelFormula::Majority => 3,
            LevelFormula::NonlinearLogic => 2,
        }
    }

    /// Compute the weighted sum for one input row.
    ///
    /// Fails with `InvalidRequest` when the row length is wrong or a value
    /// is not 0/1, and with
    /// `InvalidWeightCount` (tagged with `level`) when the weight vector is.
    pub fn score(&self, level: u32, inputs: &[u8], weights: &[f64]) -> Result<f64> {
        if inputs.len() != self.input_count() {
            return Err(WeightlabError::InvalidRequest {
                reason: format!(
                    "level {} expects {} inputs, got {}",
                    level,
                    self.input_count(),
                    inputs.len()
                ),
            });
        }
        if let Some(j) = inputs.iter().position(|&b| b > 1) {
            return Err(WeightlabError::InvalidRequest {
                reason: format!(
                    "level {} input {} is {}, inputs must be 0 or 1",
                    level,
                    j + 1,
                    inputs[j]
                ),
            });
        }
        if weights.len() != self.weight_count() {
            return Err(WeightlabError::InvalidWeightCount {
                level,
                expected: self.weight_count(),
                actual: weights.len(),
            });
        }

        Ok(self.weighted_sum(inputs, weights))
    }

    /// Formula body. Row must already be a valid 0/1 row of the right length.
    fn weighted_sum(&self, x: &[u8], w: &[f64]) -> f64 {
        let bit = |i: usize| f64::from(x[i]);
        match self {
            LevelFormula::Difference => bit(0) * w[0] - bit(1) * w[1],
            LevelFormula::Majority => (0..3).map(|i| bit(i) * w[i]).sum(),
            LevelFormula::NonlinearLogic => {
                let xor_term = f64::from(u8::from(x[0] != x[1]));
                let and_term = bit(2) * bit(3);
                xor_term * w[0] + and_term * w[1]
            }
        }
    }
}
