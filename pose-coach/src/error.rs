//! Error types for the coaching core
//!
//! Only construction-time and input-decoding problems are errors. Degenerate
//! geometry and empty captures are absorbed by the pipeline itself.

use thiserror::Error;

/// Result alias used across the crate
pub type CoachResult<T> = Result<T, CoachError>;

/// Errors raised while building criteria or decoding detector output
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum CoachError {
    /// Flat landmark buffer does not hold a whole pose
    #[error("invalid landmark data length: {actual} (expected {expected})")]
    InvalidLandmarkCount {
        /// Accepted lengths, joined for display
        expected: String,
        /// Length actually received
        actual: usize,
    },

    /// Exercise name not present in the catalog
    #[error("unknown exercise: '{0}'")]
    UnknownExercise(String),

    /// Angle tolerance below zero
    #[error("angle tolerance must be non-negative, got {tolerance}")]
    NegativeTolerance {
        /// Offending tolerance in degrees
        tolerance: f64,
    },

    /// A repetition needs at least two canonical poses to alternate between
    #[error("repetition exercises need at least 2 canonical poses, got {count}")]
    TooFewPoses {
        /// Number of poses supplied
        count: usize,
    },

    /// Configuration value out of range
    #[error("invalid configuration: {message}")]
    InvalidConfig {
        /// What was wrong
        message: String,
    },
}

impl CoachError {
    /// Creates a new configuration error.
    #[must_use]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoachError::TooFewPoses { count: 1 };
        assert_eq!(
            err.to_string(),
            "repetition exercises need at least 2 canonical poses, got 1"
        );

        let err = CoachError::UnknownExercise("tree pose".into());
        assert_eq!(err.to_string(), "unknown exercise: 'tree pose'");

        let err = CoachError::invalid_config("window_size must be at least 1");
        assert!(err.to_string().contains("window_size"));
    }
}
