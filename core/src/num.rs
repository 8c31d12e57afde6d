//! Numeric helpers for generated code.

/// The integers in the half-open range `[start, end)`, in order.
///
/// Empty when `start >= end`.
pub fn range(start: i64, end: i64) -> Vec<i64> {
    (start..end).collect()
}

/// Uniform random draw in `[0, 1)`.
pub fn random() -> f64 {
    fastrand::f64()
}

/// Square root of `n`. NaN for negative input.
pub fn sqrt(n: f64) -> f64 {
    n.sqrt()
}
