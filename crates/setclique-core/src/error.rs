//! Error types for setclique

use thiserror::Error;

/// Main error type for setclique operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetError {
    /// A constructor or function received an out-of-range or malformed argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Two set finders disagreed on the same collection
    #[error("Consistency failure: {candidate} disagrees with {reference} on trial {trial}")]
    ConsistencyFailure {
        reference: String,
        candidate: String,
        trial: usize,
    },

    /// Error in run configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SetError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        SetError::InvalidArgument(msg.into())
    }
}

/// Result type alias for setclique operations
pub type Result<T> = std::result::Result<T, SetError>;

/// Parses a textual set size.
///
/// Negative and zero sizes are accepted here; finders treat them as
/// "no sets".
///
/// # Example
///
/// ```
/// use setclique_core::{parse_set_size, SetError};
///
/// assert_eq!(parse_set_size(" -1 ").unwrap(), -1);
/// assert!(matches!(parse_set_size("Wrong type"), Err(SetError::InvalidArgument(_))));
/// ```
pub fn parse_set_size(s: &str) -> Result<i64> {
    s.trim()
        .parse::<i64>()
        .map_err(|_| SetError::invalid(format!("set size should be an integer, got {s:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = SetError::invalid("card count 20 exceeds deck size 9");
        assert_eq!(
            err.to_string(),
            "Invalid argument: card count 20 exceeds deck size 9"
        );

        let err = SetError::ConsistencyFailure {
            reference: "brute_force".to_string(),
            candidate: "clique".to_string(),
            trial: 3,
        };
        assert_eq!(
            err.to_string(),
            "Consistency failure: clique disagrees with brute_force on trial 3"
        );
    }

    #[test]
    fn test_parse_set_size() {
        assert_eq!(parse_set_size("3"), Ok(3));
        assert_eq!(parse_set_size("0"), Ok(0));
        assert!(parse_set_size("2.5").is_err());
        assert!(parse_set_size("").is_err());
    }
}
