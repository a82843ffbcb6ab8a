//! Crate error type.
//!
//! Errors are raised only while building a colony or a distance model.
//! Once constructed, colony operations absorb degenerate input through
//! fallbacks and never fail.

use thiserror::Error;

/// Construction-time validation failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AcoError {
    #[error("at least 2 cities are required, got {count}")]
    TooFewCities { count: usize },

    #[error("distance matrix row {row} has {len} entries, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("distance matrix is asymmetric at ({i}, {j}): {forward} != {backward}")]
    Asymmetric {
        i: usize,
        j: usize,
        forward: f64,
        backward: f64,
    },

    #[error("invalid distance {value} at ({i}, {j})")]
    InvalidDistance { i: usize, j: usize, value: f64 },

    #[error("diagonal entry {index} must be 0, got {value}")]
    NonZeroDiagonal { index: usize, value: f64 },

    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

impl AcoError {
    pub(crate) fn parameter(name: &'static str, reason: impl Into<String>) -> Self {
        AcoError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Shorthand result type for fallible constructors.
pub type AcoResult<T> = Result<T, AcoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = AcoError::TooFewCities { count: 1 };
        assert_eq!(err.to_string(), "at least 2 cities are required, got 1");

        let err = AcoError::parameter("rho", "must be in (0, 1), got 1.5");
        assert_eq!(
            err.to_string(),
            "invalid parameter `rho`: must be in (0, 1), got 1.5"
        );
    }
}
