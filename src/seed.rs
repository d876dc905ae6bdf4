//! Sources the emitter can take its seed from.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Supplies the seed for a single generator.
pub trait SeedSource {
    fn seed(&self) -> u64;
}

/// Whole seconds since the Unix epoch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallClock;

impl SeedSource for WallClock {
    fn seed(&self) -> u64 {
        let now = SystemTime::now().duration_since(UNIX_EPOCH);
        match now.as_ref().map(Duration::as_secs) {
            Ok(secs) => secs,
            Err(e) => {
                log::warn!("system clock reads before the epoch ({e}), seeding with 0");
                0
            }
        }
    }
}

/// A constant seed, for reproducible runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSeed(pub u64);

impl SeedSource for FixedSeed {
    fn seed(&self) -> u64 {
        self.0
    }
}

impl<F> SeedSource for F
where
    F: Fn() -> u64,
{
    fn seed(&self) -> u64 {
        self()
    }
}
