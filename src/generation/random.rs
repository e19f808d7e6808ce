//! Random generator construction

use crate::io::error::{GeneratorError, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

/// Build the generator used for a run
///
/// A fixed seed gives reproducible output; otherwise the generator is
/// seeded once from the operating system entropy source.
///
/// # Errors
///
/// Returns [`GeneratorError::Entropy`] if the entropy source cannot be read
pub fn seeded_rng(seed: Option<u64>) -> Result<StdRng> {
    if let Some(seed) = seed {
        debug!(seed, "seeding generator from fixed seed");
        return Ok(StdRng::seed_from_u64(seed));
    }

    debug!("seeding generator from OS entropy");
    StdRng::try_from_os_rng().map_err(|error| GeneratorError::Entropy {
        reason: error.to_string(),
    })
}
