//! Console greeter and parity reporter.
//!
//! The crate keeps formatting and classification separate from output:
//!
//! - **[`core`]**: Pure, deterministic logic (greeting text, even/odd
//!   classification). No I/O, fully testable in isolation.
//! - **[`greet`]** and **[`report`]**: The two operations, writing lines to any
//!   [`std::io::Write`] sink.
//!
//! [`app`] composes both operations in program order for the `hello` binary.

pub mod app;
pub mod config;
pub mod core;
pub mod exit_codes;
pub mod greet;
pub mod logging;
pub mod report;
#[cfg(test)]
pub mod test_support;
