//! Random number source used by the sampler's callers.
//!
//! The sampler itself never owns a generator; every sampling call borrows
//! one. This module only builds reproducible or entropy-seeded generators.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Generator type handed out by [`rng_from_seed`].
pub type SamplerRng = StdRng;

/// Build a generator from an optional seed, falling back to OS entropy.
pub fn rng_from_seed(seed: Option<u64>) -> SamplerRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
