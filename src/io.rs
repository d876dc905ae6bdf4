use std::{error::Error, io::Write};

/// Write `s` followed by a newline, then flush.
pub fn write_line<W: Write + ?Sized>(out: &mut W, s: &str) -> Result<(), Box<dyn Error>> {
    out.write_all(s.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}
