//! Greeting text.

/// Build the greeting for `name`, without a line terminator.
///
/// Any string is accepted, including the empty string.
pub fn greeting_line(name: &str) -> String {
    format!("Hello, {name}!")
}
