//! Randomness source for factor initialization.
//!
//! Randomness is always injected: callers either pass their own `Rng` or
//! build one here from an optional seed. Nothing reads ambient global
//! random state.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

/// Build a random number generator given (or not) a seed.
///
/// * `Some(seed)` - deterministic, two runs with the same seed match
/// * `None` - seeded from operating system entropy
pub fn build_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            debug!("Using seeded rng (seed = {})", seed);
            StdRng::seed_from_u64(seed)
        }
        None => {
            debug!("Using entropy-seeded rng");
            StdRng::from_os_rng()
        }
    }
}
