//! Compact Genetic Algorithm for fixed-length bit-strings.
//!
//! - **CGA**: a population-free evolutionary optimizer. A single probability
//!   vector summarizes the population; two candidates sampled from it
//!   compete each iteration and the vector moves toward the winner.
//!
//! # Architecture
//!
//! Like the other U-Engine algorithm crates, this one contains no
//! domain-specific concepts. Problems plug in through
//! [`cga::CgaProblem`]; [`cga::OneMax`] is provided as the reference
//! benchmark.

pub mod cga;
pub mod error;
pub mod random;

pub use error::{CgaError, Result};
