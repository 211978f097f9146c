//! Greeter: writes one greeting line for a name.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::greeting::greeting_line;

/// Write `Hello, <name>!` followed by a newline to `out`.
///
/// Fails only when `out` rejects the write.
pub fn greet<W: Write>(out: &mut W, name: &str) -> Result<()> {
    debug!(name_len = name.len(), "greeting");
    writeln!(out, "{}", greeting_line(name)).context("write greeting")?;
    Ok(())
}
