use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::config::{RANGE_OFFSET, RANGE_SIZE};

/// Builds a fresh generator owned by the caller.
///
/// Every call with the same seed yields a generator producing the same
/// sequence, so seeding twice within the same clock second repeats the value.
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Draws one sample from the generator's native `u32` range.
pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.gen()
}

/// Maps a raw sample into `[1, 100]` by remainder.
///
/// The remainder mapping is slightly biased towards low values since
/// `u32::MAX + 1` is not a multiple of 100.
pub fn map_to_range(sample: u32) -> u32 {
    sample % RANGE_SIZE + RANGE_OFFSET
}

pub fn sample_in_range<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    let sample = draw(rng);
    log::debug!("raw sample {sample}");
    map_to_range(sample)
}
