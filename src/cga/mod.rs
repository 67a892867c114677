//! Compact Genetic Algorithm (CGA).
//!
//! A population-free evolutionary optimizer. Instead of storing individuals,
//! the CGA keeps one probability per bit position. Each iteration samples two
//! candidates from that vector, lets them compete on cost, and shifts every
//! disagreeing position by `1 / population_size` toward the winner. The run
//! ends when the iteration budget is spent or the vector saturates at 0/1.
//!
//! # Quick start
//!
//! ```
//! use u_cga::cga::search;
//!
//! let result = search(8, 500, 16).unwrap();
//! assert!(result.cost <= 8);
//! assert_eq!(result.bits.len(), 8);
//! ```
//!
//! # References
//!
//! - Harik, Lobo & Goldberg (1999), "The compact genetic algorithm",
//!   *IEEE Trans. Evolutionary Computation* 3(4), 287–297
//! - Brownlee (2011), *Clever Algorithms: Nature-Inspired Programming Recipes*

mod config;
mod runner;
mod types;
mod vector;

pub use config::CgaConfig;
pub use runner::{CgaResult, CgaRunner, ScoredCandidate};
pub use types::{CgaProblem, OneMax};
pub use vector::ProbabilityVector;

use crate::error::Result;

/// Runs the CGA on OneMax with a fresh random seed.
///
/// `population_size` only sets the update step `1 / population_size`.
/// Fails with [`CgaError::InvalidArgument`](crate::error::CgaError::InvalidArgument)
/// when `num_bits` or `max_iterations` is zero or `population_size < 2`.
pub fn search(num_bits: usize, max_iterations: usize, population_size: usize) -> Result<CgaResult> {
    let config = CgaConfig::new(num_bits)
        .with_max_iterations(max_iterations)
        .with_population_size(population_size);
    CgaRunner::run(&OneMax, &config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CgaError;

    #[test]
    fn test_search_rejects_bad_arguments() {
        assert!(matches!(search(0, 10, 10), Err(CgaError::InvalidArgument(_))));
        assert!(matches!(search(10, 0, 10), Err(CgaError::InvalidArgument(_))));
        assert!(matches!(search(10, 10, 1), Err(CgaError::InvalidArgument(_))));
    }

    #[test]
    fn test_search_single_bit() {
        let result = search(1, 200, 20).unwrap();
        assert_eq!(result.cost, 1);
        assert_eq!(result.bits, vec![true]);
        assert!(result.converged);
    }

    #[test]
    fn test_search_unbounded_budget() {
        let result = search(1, usize::MAX, 2).unwrap();
        assert!(result.converged);
        assert_eq!(result.cost, 1);
        assert_eq!(result.cost_history.len(), result.iterations);
    }

    #[test]
    fn test_runner_large_budget_stops_on_saturation() {
        let config = CgaConfig::new(8)
            .with_max_iterations(usize::MAX / 2)
            .with_population_size(8)
            .with_seed(42);
        let result = CgaRunner::run(&OneMax, &config).unwrap();
        assert!(result.converged);
        assert!(result.iterations < 100_000);
    }

    #[test]
    fn test_search_single_iteration() {
        let result = search(20, 1, 20).unwrap();
        assert_eq!(result.iterations, 1);
        assert_eq!(result.evaluations, 2);
        assert_eq!(result.iteration_found, 0);
        assert!(result.probabilities.iter().all(|&p| (0.0..=1.0).contains(&p)));
    }
}
