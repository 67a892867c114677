//! CGA sample-compete-update loop.

use super::config::CgaConfig;
use super::types::CgaProblem;
use super::vector::ProbabilityVector;
use crate::error::{CgaError, Result};
use crate::random::rng_from;
use rand::Rng;
use std::cmp::Ordering as CostOrdering;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A candidate bit-string paired with its evaluated cost.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredCandidate {
    pub bits: Vec<bool>,
    pub cost: usize,
}

impl ScoredCandidate {
    fn evaluate<P: CgaProblem>(problem: &P, bits: Vec<bool>) -> Result<Self> {
        let cost = problem
            .evaluate(&bits)
            .map_err(|e| CgaError::Evaluation(Box::new(e)))?;
        Ok(Self { bits, cost })
    }
}

/// Result of a CGA run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CgaResult {
    /// Cost of the best candidate.
    pub cost: usize,

    /// The best candidate found.
    pub bits: Vec<bool>,

    /// Zero-based iteration at which the best candidate was first sampled.
    pub iteration_found: usize,

    /// Number of iterations executed.
    pub iterations: usize,

    /// Number of fitness evaluations (two per iteration).
    pub evaluations: usize,

    /// Whether the run stopped because the probability vector saturated.
    pub converged: bool,

    /// Whether the run stopped because the target cost was reached.
    pub target_reached: bool,

    /// Whether cancelled externally.
    pub cancelled: bool,

    /// Best cost after each iteration.
    pub cost_history: Vec<usize>,

    /// Probability vector when the run stopped.
    pub probabilities: Vec<f64>,

    /// Probability vector after each iteration. Empty unless
    /// [`CgaConfig::record_history`] is set.
    pub probability_history: Vec<Vec<f64>>,
}

/// Outcome of a single iteration.
struct Competition {
    /// The winner, or the first candidate on a tie.
    contender: ScoredCandidate,
    winner_found: bool,
}

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stop {
    TargetReached,
    Saturated,
    BudgetExhausted,
    Cancelled,
}

/// Executes the Compact Genetic Algorithm.
pub struct CgaRunner;

impl CgaRunner {
    /// Runs CGA optimization.
    pub fn run<P: CgaProblem>(problem: &P, config: &CgaConfig) -> Result<CgaResult> {
        Self::run_with_cancel(problem, config, None)
    }

    /// Runs CGA with an optional cancellation token.
    ///
    /// The flag is polled between iterations; the first iteration always
    /// completes so the result carries a scored candidate.
    pub fn run_with_cancel<P: CgaProblem>(
        problem: &P,
        config: &CgaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<CgaResult> {
        let mut rng = rng_from(config.seed);
        Self::run_with_rng(problem, config, &mut rng, cancel)
    }

    /// Runs CGA drawing all randomness from `rng`.
    ///
    /// `config.seed` is ignored. Two runs with identically seeded
    /// generators produce identical trajectories.
    pub fn run_with_rng<P: CgaProblem, R: Rng>(
        problem: &P,
        config: &CgaConfig,
        rng: &mut R,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<CgaResult> {
        config.validate()?;

        let mut vector = initial_vector(problem, config.num_bits);
        let step = config.step();
        let mut cost_history = Vec::new();
        let mut probability_history = Vec::new();

        let mut best: Option<ScoredCandidate> = None;
        let mut iteration_found = 0usize;
        let mut iterations = 0usize;

        let (best, stop) = loop {
            let iteration = iterations;
            let Competition {
                contender,
                winner_found,
            } = compete(problem, &mut vector, step, rng)?;

            log::debug!(
                "cga iteration={} contender={} best={:?} winner={}",
                iteration,
                contender.cost,
                best.as_ref().map(|b| b.cost),
                winner_found
            );

            let current = match best.take() {
                Some(previous) if previous.cost >= contender.cost => previous,
                _ => {
                    iteration_found = iteration;
                    contender
                }
            };
            iterations += 1;

            record(config, &vector, current.cost, &mut cost_history, &mut probability_history);
            problem.on_iteration(iteration, current.cost);

            if let Some(stop) = stop_reason(config, &vector, current.cost, iterations, cancel.as_deref()) {
                break (current, stop);
            }
            best = Some(current);
        };

        let converged = stop == Stop::Saturated;
        let target_reached = stop == Stop::TargetReached;
        let cancelled = stop == Stop::Cancelled;

        log::info!(
            "cga finished: cost={} found_at={} iterations={} stop={:?}",
            best.cost,
            iteration_found,
            iterations,
            stop
        );

        Ok(CgaResult {
            cost: best.cost,
            bits: best.bits,
            iteration_found,
            iterations,
            evaluations: iterations.saturating_mul(2),
            converged,
            target_reached,
            cancelled,
            cost_history,
            probabilities: vector.into_inner(),
            probability_history,
        })
    }
}

fn initial_vector<P: CgaProblem>(problem: &P, num_bits: usize) -> ProbabilityVector {
    match problem.seed_probabilities() {
        Some(p) if p.len() == num_bits => ProbabilityVector::from_probabilities(p),
        Some(p) => {
            log::warn!(
                "ignoring seed probabilities of length {} (expected {})",
                p.len(),
                num_bits
            );
            ProbabilityVector::new(num_bits)
        }
        None => ProbabilityVector::new(num_bits),
    }
}

/// Samples two candidates, evaluates them and moves the vector toward the
/// winner. A tie leaves the vector untouched.
fn compete<P: CgaProblem, R: Rng>(
    problem: &P,
    vector: &mut ProbabilityVector,
    step: f64,
    rng: &mut R,
) -> Result<Competition> {
    let (bits1, bits2) = vector.sample_pair(rng);
    let first = ScoredCandidate::evaluate(problem, bits1)?;
    let second = ScoredCandidate::evaluate(problem, bits2)?;

    let (contender, winner_found) = match first.cost.cmp(&second.cost) {
        CostOrdering::Greater => {
            vector.update(&first.bits, &second.bits, step)?;
            (first, true)
        }
        CostOrdering::Less => {
            vector.update(&second.bits, &first.bits, step)?;
            (second, true)
        }
        CostOrdering::Equal => (first, false),
    };

    Ok(Competition {
        contender,
        winner_found,
    })
}

/// Termination policy, evaluated after every iteration. The cancel flag is
/// only consulted once the other checks pass.
fn stop_reason(
    config: &CgaConfig,
    vector: &ProbabilityVector,
    best_cost: usize,
    iterations_run: usize,
    cancel: Option<&AtomicBool>,
) -> Option<Stop> {
    if config.target_reached(best_cost) {
        Some(Stop::TargetReached)
    } else if vector.is_saturated(config.saturation_epsilon) {
        Some(Stop::Saturated)
    } else if config.budget_exhausted(iterations_run) {
        Some(Stop::BudgetExhausted)
    } else if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
        Some(Stop::Cancelled)
    } else {
        None
    }
}

fn record(
    config: &CgaConfig,
    vector: &ProbabilityVector,
    best_cost: usize,
    cost_history: &mut Vec<usize>,
    probability_history: &mut Vec<Vec<f64>>,
) {
    cost_history.push(best_cost);
    if config.record_history {
        probability_history.push(vector.as_slice().to_vec());
    }
}
