use std::{error::Error, io};

use randnum::{Emitter, WallClock};

randnum::entrypoint!(run);

// Command-line arguments are never read.
fn run() -> Result<(), Box<dyn Error>> {
    Emitter::new(WallClock).emit(&mut io::stdout().lock())?;
    Ok(())
}
