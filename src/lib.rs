pub mod config;
pub mod emitter;
pub mod io;
pub mod logging;
pub mod macros;
pub mod rand;
pub mod seed;

pub use emitter::{emit_from, Emitter};
pub use seed::{FixedSeed, SeedSource, WallClock};
