//! Core trait for the Compact Genetic Algorithm.

use std::convert::Infallible;

/// Defines a CGA problem over fixed-length bit-strings.
///
/// The user implements only evaluation. The CGA framework handles
/// sampling, competition and the probability vector update.
///
/// # Maximization
///
/// Unlike the other runners in this crate, the CGA maximizes: the
/// candidate with the strictly greater cost wins.
///
/// # Examples
///
/// ```
/// use u_cga::cga::CgaProblem;
///
/// /// Counts positions matching a hidden pattern.
/// struct Pattern(Vec<bool>);
///
/// impl CgaProblem for Pattern {
///     type Error = std::convert::Infallible;
///
///     fn evaluate(&self, candidate: &[bool]) -> Result<usize, Self::Error> {
///         Ok(candidate.iter().zip(&self.0).filter(|(a, b)| a == b).count())
///     }
/// }
/// ```
///
/// # References
///
/// Harik, Lobo & Goldberg (1999)
pub trait CgaProblem: Send + Sync {
    /// Failure raised by [`evaluate`](CgaProblem::evaluate).
    ///
    /// Use [`Infallible`] when evaluation cannot fail.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Computes the cost of a candidate. Higher is better.
    ///
    /// `candidate.len()` equals [`super::CgaConfig::num_bits`]. Should be a
    /// pure function of the bit pattern.
    fn evaluate(&self, candidate: &[bool]) -> Result<usize, Self::Error>;

    /// Provides a starting probability vector.
    ///
    /// Override to warm-start the search. Entries are clamped to `[0, 1]`;
    /// a vector of the wrong length is ignored. The default returns `None`
    /// (every position starts at 0.5).
    fn seed_probabilities(&self) -> Option<Vec<f64>> {
        None
    }

    /// Called at the end of each iteration with the best cost so far.
    fn on_iteration(&self, _iteration: usize, _best_cost: usize) {}
}

/// The OneMax benchmark: cost is the number of `true` bits.
///
/// The optimum equals the bit-length.
#[derive(Debug, Clone, Copy, Default)]
pub struct OneMax;

impl CgaProblem for OneMax {
    type Error = Infallible;

    fn evaluate(&self, candidate: &[bool]) -> Result<usize, Infallible> {
        Ok(candidate.iter().filter(|&&bit| bit).count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_onemax_counts_ones() {
        assert_eq!(OneMax.evaluate(&[true, false, true, true]), Ok(3));
        assert_eq!(OneMax.evaluate(&[false; 8]), Ok(0));
        assert_eq!(OneMax.evaluate(&[true; 8]), Ok(8));
    }

    #[test]
    fn test_default_hooks() {
        assert!(OneMax.seed_probabilities().is_none());
        OneMax.on_iteration(0, 0);
    }
}
