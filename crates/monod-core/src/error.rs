// File: crates/monod-core/src/error.rs
// Summary: Input errors raised while turning raw text into kinetic parameters.

use std::fmt;

use thiserror::Error;

/// Which of the two kinetic parameters an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Parameter {
    MuMax,
    Ks,
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parameter::MuMax => f.write_str("μ_max"),
            Parameter::Ks => f.write_str("K_s"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParameterError {
    #[error("{parameter}: '{raw}' is not a number")]
    Parse { parameter: Parameter, raw: String },

    #[error("{parameter} must be a positive finite number, got {value}")]
    Validation { parameter: Parameter, value: f64 },
}

impl ParameterError {
    pub fn parameter(&self) -> Parameter {
        match self {
            ParameterError::Parse { parameter, .. } | ParameterError::Validation { parameter, .. } => *parameter,
        }
    }

    /// Fixed message shown to the person at the prompt.
    pub fn user_message(&self) -> &'static str {
        match self {
            ParameterError::Parse { .. } => "Error: Invalid input. Please enter numerical values only.",
            ParameterError::Validation { .. } => "Error: Parameters must be positive numbers. Please try again.",
        }
    }
}
