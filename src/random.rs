//! Seeded random number generation.

use rand::rngs::SmallRng;
use rand::SeedableRng;

/// The generator used when the caller does not inject one.
pub type CgaRng = SmallRng;

/// Creates a deterministic generator from `seed`.
pub fn create_rng(seed: u64) -> CgaRng {
    SmallRng::seed_from_u64(seed)
}

/// Creates a generator from `seed`, or from a fresh random seed when `None`.
pub fn rng_from(seed: Option<u64>) -> CgaRng {
    match seed {
        Some(seed) => create_rng(seed),
        None => create_rng(rand::random()),
    }
}
