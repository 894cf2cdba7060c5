//! JSON output on stdout. Logs go to stderr.

use std::io::Write;

use serde::Serialize;

use crate::error::Result;

/// Print `value` as pretty JSON followed by a newline.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
