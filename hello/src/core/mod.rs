//! Deterministic, pure logic shared by the greeter and the parity reporter.
//!
//! Core modules must be free of I/O side effects. They build the exact text
//! of each output line and leave writing to the callers.

pub mod greeting;
pub mod parity;
