/// Text printed in front of the value.
pub const LABEL: &str = "Random number: ";

/// Number of distinct values the emitter can print.
pub const RANGE_SIZE: u32 = 100;

/// Smallest printable value.
pub const RANGE_OFFSET: u32 = 1;
