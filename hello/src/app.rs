//! Orchestration for the `hello` binary: greet, then report parity.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::HelloConfig;
use crate::greet::greet;
use crate::report::report_parity;

/// Run both operations against `out` in program order, then flush.
pub fn run<W: Write>(out: &mut W, config: &HelloConfig) -> Result<()> {
    greet(out, &config.name)?;
    report_parity(out, config.bound)?;
    out.flush().context("flush output")?;
    info!(bound = config.bound, "run complete");
    Ok(())
}
