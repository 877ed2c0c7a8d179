//! Errors for inputs outside an algorithm's domain.

use thiserror::Error;

/// Raised only for genuinely invalid inputs. Functions with an unchecked
/// precondition document it instead of returning one of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProblemError {
    #[error("{operation} requires a non-empty input")]
    EmptyInput { operation: &'static str },

    #[error("k = {k} is out of range for {len} elements (expected 1..={len})")]
    KOutOfRange { k: usize, len: usize },

    #[error("invalid interval [{start}, {end}]: start is greater than end")]
    InvalidInterval { start: i64, end: i64 },
}

pub type Result<T> = std::result::Result<T, ProblemError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ProblemError::EmptyInput {
                operation: "max_subarray_sum"
            }
            .to_string(),
            "max_subarray_sum requires a non-empty input"
        );
        assert_eq!(
            ProblemError::KOutOfRange { k: 0, len: 3 }.to_string(),
            "k = 0 is out of range for 3 elements (expected 1..=3)"
        );
    }
}
