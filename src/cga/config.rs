//! CGA configuration.

use crate::error::{CgaError, Result};

/// Configuration for the Compact Genetic Algorithm.
///
/// `population_size` is never materialized: it only sets the step size
/// `1 / population_size` by which the probability vector moves toward each
/// winner. Larger values mean slower, more reliable convergence.
///
/// # Examples
///
/// ```
/// use u_cga::cga::CgaConfig;
///
/// let config = CgaConfig::new(64)
///     .with_max_iterations(2_000)
///     .with_population_size(128)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CgaConfig {
    /// Number of bits per candidate.
    pub num_bits: usize,

    /// Hard iteration budget. Each iteration evaluates two candidates.
    pub max_iterations: usize,

    /// Virtual population size; the update step is `1 / population_size`.
    pub population_size: usize,

    /// A position counts as converged when its probability is `<= epsilon`
    /// or `>= 1 - epsilon`. Must be in `[0, 0.5)`.
    pub saturation_epsilon: f64,

    /// Stop as soon as the best cost reaches this value.
    ///
    /// For OneMax the optimum is `num_bits`. `None` disables the check.
    pub target_cost: Option<usize>,

    /// Record a snapshot of the probability vector after every iteration.
    pub record_history: bool,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl CgaConfig {
    /// Creates a new configuration for candidates of `num_bits` bits.
    pub fn new(num_bits: usize) -> Self {
        Self {
            num_bits,
            max_iterations: 200,
            population_size: 20,
            saturation_epsilon: 1e-9,
            target_cost: None,
            record_history: false,
            seed: None,
        }
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets how close to 0 or 1 every probability must be for the run to
    /// stop as converged. `0.0` demands exact saturation.
    pub fn with_saturation_epsilon(mut self, epsilon: f64) -> Self {
        self.saturation_epsilon = epsilon;
        self
    }

    /// Stops the run once the best cost is at least `cost`, even if the
    /// vector has not saturated.
    pub fn with_target_cost(mut self, cost: usize) -> Self {
        self.target_cost = Some(cost);
        self
    }

    pub fn with_record_history(mut self, record: bool) -> Self {
        self.record_history = record;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Step applied to a probability when winner and loser disagree.
    pub fn step(&self) -> f64 {
        1.0 / self.population_size as f64
    }

    /// Whether `iterations_run` iterations use up the budget.
    pub fn budget_exhausted(&self, iterations_run: usize) -> bool {
        iterations_run >= self.max_iterations
    }

    /// Whether `best_cost` meets the configured target, if any.
    pub fn target_reached(&self, best_cost: usize) -> bool {
        self.target_cost.is_some_and(|target| best_cost >= target)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.num_bits == 0 {
            return Err(CgaError::InvalidArgument(
                "num_bits must be at least 1".into(),
            ));
        }
        if self.max_iterations == 0 {
            return Err(CgaError::InvalidArgument(
                "max_iterations must be at least 1".into(),
            ));
        }
        if self.population_size < 2 {
            return Err(CgaError::InvalidArgument(format!(
                "population_size must be at least 2, got {}",
                self.population_size
            )));
        }
        if !(0.0..0.5).contains(&self.saturation_epsilon) {
            return Err(CgaError::InvalidArgument(format!(
                "saturation_epsilon must be in [0, 0.5), got {}",
                self.saturation_epsilon
            )));
        }
        Ok(())
    }
}
