//! Parity reporter: writes one even/odd line per integer in `[0, bound)`.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::parity::parity_lines;

/// Write the parity line of every integer in `[0, bound)` to `out`.
///
/// Lines are written in increasing order. A `bound` of zero or less writes
/// nothing. The first failed write aborts the report.
pub fn report_parity<W: Write>(out: &mut W, bound: i64) -> Result<()> {
    debug!(bound, "reporting parity");
    for line in parity_lines(bound) {
        writeln!(out, "{line}").with_context(|| format!("write parity line `{line}`"))?;
    }
    Ok(())
}
