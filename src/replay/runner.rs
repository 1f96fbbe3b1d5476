use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::Serialize;
use tracing::{info, warn};

use crate::{error::Result, replay::Step, set::BitSet};

/// Outcome of a single replayed [`Step`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepRecord {
    pub step: String,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// The set serialized after the step, whether it succeeded or not.
    pub bits: String,
}

/// Applies `steps` in order, recording the set after each one.
///
/// A failing step is recorded and the replay carries on with the next one.
pub fn replay(bitset: &mut BitSet, steps: &[Step]) -> Vec<StepRecord> {
    steps
        .iter()
        .map(|&step| {
            let outcome = step.apply(bitset);
            if let Err(err) = &outcome {
                warn!(%step, %err, "step failed");
            }
            StepRecord {
                step: step.to_string(),
                ok: outcome.is_ok(),
                error: outcome.err().map(|err| err.to_string()),
                bits: bitset.to_string(),
            }
        })
        .collect()
}

/// Overwrites every bit of `bitset` with a coin flip drawn from a generator seeded with `seed`.
pub fn fill_random(bitset: &mut BitSet, seed: u64) -> Result<()> {
    let mut rng = StdRng::seed_from_u64(seed);
    for index in 0..bitset.len() {
        let bit = if rng.random_bool(0.5) { 1 } else { 0 };
        bitset.set_bit_at(index, bit)?;
    }
    info!(seed, ones = bitset.count_ones(), "filled bit set with random bits");
    Ok(())
}
