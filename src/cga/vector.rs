//! The probability vector that stands in for a population.

use crate::error::{CgaError, Result};
use rand::Rng;

/// Per-position probability that a sampled gene is `true`.
///
/// The length is fixed at construction and every entry stays in
/// `[0.0, 1.0]` across updates.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProbabilityVector {
    probabilities: Vec<f64>,
}

impl ProbabilityVector {
    /// Creates a vector of `len` unbiased positions (all 0.5).
    pub fn new(len: usize) -> Self {
        Self {
            probabilities: vec![0.5; len],
        }
    }

    /// Creates a vector from explicit values, clamped to `[0, 1]`.
    ///
    /// NaN entries fall back to 0.5.
    pub fn from_probabilities(values: Vec<f64>) -> Self {
        let probabilities = values
            .into_iter()
            .map(|p| if p.is_nan() { 0.5 } else { p.clamp(0.0, 1.0) })
            .collect();
        Self { probabilities }
    }

    pub fn len(&self) -> usize {
        self.probabilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probabilities.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.probabilities
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.probabilities
    }

    /// Samples one candidate; position i is `true` with probability `self[i]`.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Vec<bool> {
        self.probabilities
            .iter()
            .map(|&p| rng.random::<f64>() < p)
            .collect()
    }

    /// Samples two independent candidates, drawing both bits of a position
    /// before moving to the next one.
    pub fn sample_pair<R: Rng>(&self, rng: &mut R) -> (Vec<bool>, Vec<bool>) {
        let mut first = Vec::with_capacity(self.len());
        let mut second = Vec::with_capacity(self.len());
        for &p in &self.probabilities {
            first.push(rng.random::<f64>() < p);
            second.push(rng.random::<f64>() < p);
        }
        (first, second)
    }

    /// Shifts each position where `winner` and `loser` disagree by `step`
    /// toward the winner's bit, then clamps to `[0, 1]`.
    ///
    /// Returns the number of positions that were adjusted.
    pub fn update(&mut self, winner: &[bool], loser: &[bool], step: f64) -> Result<usize> {
        for candidate in [winner, loser] {
            if candidate.len() != self.len() {
                return Err(CgaError::CandidateLength {
                    expected: self.len(),
                    actual: candidate.len(),
                });
            }
        }

        let mut adjusted = 0;
        for ((p, &w), &l) in self.probabilities.iter_mut().zip(winner).zip(loser) {
            if w == l {
                continue;
            }
            let delta = if w { step } else { -step };
            *p = (*p + delta).clamp(0.0, 1.0);
            adjusted += 1;
        }
        Ok(adjusted)
    }

    /// Whether every position has collapsed to within `epsilon` of 0 or 1.
    pub fn is_saturated(&self, epsilon: f64) -> bool {
        self.probabilities
            .iter()
            .all(|&p| p <= epsilon || p >= 1.0 - epsilon)
    }
}

impl std::ops::Index<usize> for ProbabilityVector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.probabilities[index]
    }
}
