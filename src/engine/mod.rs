//! Evaluation Engine Module
//!
//! Core evaluation pipeline including:
//! - Truth-table input enumeration
//! - Weighted-sum scoring by level id
//! - Threshold activation
//! - Expected vs. actual evaluation

pub mod activation;
pub mod evaluator;
pub mod inputs;
pub mod scoring;

pub use activation::activate;
pub use evaluator::{EvaluationExample, EvaluationResult, Evaluator, TrainingExample};
pub use inputs::{enumerate_inputs, InputRow, InputRows, MAX_ARITY};
pub use scoring::score;
