//! Error types.
//!
//! The planner core is infallible for validated input. Errors arise only
//! at the boundary: clock parsing, configuration loading, and validation.

use std::path::PathBuf;

use crate::validation::ValidationError;

/// Malformed clock-string input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClockError {
    /// The text did not split into exactly `HH` and `MM`.
    #[error("invalid clock '{input}': expected HH:MM, found {found} part(s)")]
    PartCount { input: String, found: usize },

    /// One of the two parts is not an integer.
    #[error("invalid clock '{input}': '{part}' is not an integer")]
    NotAnInteger { input: String, part: String },

    /// `hours * 60 + minutes` overflows.
    #[error("invalid clock '{input}': value out of range")]
    OutOfRange { input: String },
}

/// Top-level error for loading and validating planner input.
#[derive(Debug, thiserror::Error)]
pub enum PlannerError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid planner input ({} error(s)): {}", .0.len(), join_messages(.0))]
    Validation(Vec<ValidationError>),
}

impl From<Vec<ValidationError>> for PlannerError {
    fn from(errors: Vec<ValidationError>) -> Self {
        PlannerError::Validation(errors)
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
