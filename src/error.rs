//! Error types shared by the optimizer.

use thiserror::Error;

/// Errors surfaced by a CGA run.
///
/// Ties, saturation of the probability vector, exhaustion of the iteration
/// budget and cancellation are ordinary outcomes reported on the result,
/// not errors.
#[derive(Error, Debug)]
pub enum CgaError {
    /// A configuration value violates a precondition. Raised before any
    /// sampling takes place.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The fitness function failed. The run is abandoned, not retried.
    #[error("fitness evaluation failed: {0}")]
    Evaluation(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A candidate does not match the probability vector length.
    #[error("candidate length mismatch: expected {expected}, got {actual}")]
    CandidateLength { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, CgaError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_display_invalid_argument() {
        let err = CgaError::InvalidArgument("num_bits must be at least 1".into());
        assert_eq!(err.to_string(), "invalid argument: num_bits must be at least 1");
    }

    #[test]
    fn test_evaluation_keeps_source() {
        let inner = std::io::Error::new(std::io::ErrorKind::Other, "disk gone");
        let err = CgaError::Evaluation(Box::new(inner));
        assert!(err.to_string().contains("disk gone"));
        assert!(err.source().is_some());
    }
}
