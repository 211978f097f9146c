//! Even/odd classification of integers.

use std::fmt;

/// Parity of a single integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    /// Classify `value`: even when divisible by 2 with no remainder.
    pub fn of(value: i64) -> Self {
        if value % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Parity::Even => "even",
            Parity::Odd => "odd",
        }
    }
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Format the report line for `value`, e.g. `even: 4`.
pub fn parity_line(value: i64) -> String {
    format!("{}: {}", Parity::of(value), value)
}

/// Report lines for every integer in `[0, bound)`, in increasing order.
///
/// Yields nothing when `bound <= 0`.
pub fn parity_lines(bound: i64) -> impl Iterator<Item = String> {
    (0..bound).map(parity_line)
}
