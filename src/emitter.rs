use std::{error::Error, io::Write};

use rand::Rng;

use crate::{config::LABEL, io::write_line, seed::SeedSource};

/// One-shot emitter: seed a generator, draw once, print the value.
///
/// The generator is built fresh on each call and dropped afterwards, so
/// nothing outlives a single emission.
#[derive(Debug, Clone)]
pub struct Emitter<S> {
    source: S,
}

impl<S: SeedSource> Emitter<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// The value this emitter would print, in `[1, 100]`.
    pub fn value(&self) -> u32 {
        let seed = self.source.seed();
        log::debug!("seeding generator with {seed}");
        let mut rng = crate::rand::seeded(seed);
        crate::rand::sample_in_range(&mut rng)
    }

    /// Prints `Random number: <value>` as a single line to `out`.
    pub fn emit<W: Write + ?Sized>(&self, out: &mut W) -> Result<u32, Box<dyn Error>> {
        let value = self.value();
        print_value(out, value)?;
        Ok(value)
    }
}

/// Draws from a caller-owned generator instead of seeding one.
pub fn emit_from<R, W>(rng: &mut R, out: &mut W) -> Result<u32, Box<dyn Error>>
where
    R: Rng + ?Sized,
    W: Write + ?Sized,
{
    let value = crate::rand::sample_in_range(rng);
    print_value(out, value)?;
    Ok(value)
}

fn print_value<W: Write + ?Sized>(out: &mut W, value: u32) -> Result<(), Box<dyn Error>> {
    log::info!("emitting {value}");
    write_line(out, &format!("{LABEL}{value}"))
}
