//! Print the script as-is; the "copy" sink.

use std::io::{self, Write};

pub fn emit<W: Write>(script: &str, out: &mut W) -> io::Result<()> {
    out.write_all(script.as_bytes())?;
    out.flush()
}
