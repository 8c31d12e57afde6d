//! Formatted output for generated code.
//!
//! Thin wrappers over `Display`: a scalar renders as itself, a slice as
//! bracketed, space-separated `[a b c]`.

use std::fmt::Display;

use crate::string;

/// Render any displayable value as a string.
pub fn to_string<T: Display>(value: T) -> String {
    value.to_string()
}

/// Render a slice as `[a b c]`.
pub fn list_to_string<T: Display>(values: &[T]) -> String {
    let elems: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", string::join(&elems, " "))
}

/// Write a value to stdout without a trailing newline.
pub fn write<T: Display>(value: T) {
    print!("{value}");
}

/// Write a value to stdout followed by a newline.
pub fn print<T: Display>(value: T) {
    println!("{value}");
}
