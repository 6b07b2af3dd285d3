//! Weightlab - Single Neuron Weight Tuning Exercises
//!
//! A fixed catalog of decision levels, each a small boolean-input,
//! boolean-output threshold unit. Users pick weights, Weightlab checks them
//! against every input combination.
//!
//! # Architecture
//!
//! - `levels`: immutable level catalog and the closed set of formulas
//! - `engine`: input enumeration, scoring, activation, evaluation
//! - `trainer`: the list / setup / test operations a request layer calls
//! - `cli`: command-line front end

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod levels;
pub mod trainer;

pub use config::{Language, OutputFormat, Settings};
pub use error::{Result, WeightlabError};
pub use levels::{Level, LevelCatalog, LevelFormula};
pub use trainer::{LevelDetails, TestRequest, TestResponse, Trainer};
