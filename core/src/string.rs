//! String primitives for generated code.
//!
//! # Design
//! Every operation is a free function taking `&str` and returning owned
//! values, so call sites need no shared state and no lifetimes cross the
//! call boundary. Positions and counts are character-based throughout:
//! `find` reports an offset that `substr` accepts, and neither can land
//! inside a UTF-8 sequence.

/// Number of characters in `s`.
pub fn len(s: &str) -> usize {
    s.chars().count()
}

/// Character at position `n`, if `n` is in range.
pub fn at(s: &str, n: usize) -> Option<char> {
    s.chars().nth(n)
}

/// `s` repeated `n` times.
pub fn repeat(s: &str, n: usize) -> String {
    s.repeat(n)
}

/// Whether `needle` occurs anywhere in `s`.
pub fn contains(s: &str, needle: &str) -> bool {
    s.contains(needle)
}

/// Up to `size` characters of `s` starting at character `start`.
///
/// Out-of-range positions clamp: a `start` past the end yields the empty
/// string, and `size` is cut to whatever remains.
pub fn substr(s: &str, start: usize, size: usize) -> String {
    s.chars().skip(start).take(size).collect()
}

/// `s` with its characters in reverse order.
pub fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}

/// Character offset of the first occurrence of `needle` in `s`.
pub fn find(s: &str, needle: &str) -> Option<usize> {
    s.find(needle).map(|pos| s[..pos].chars().count())
}

/// Split `s` on every occurrence of `delim`.
///
/// The remainder after the last delimiter is always pushed, so a delimiter
/// that never occurs yields the whole input as a single segment, and a
/// trailing delimiter yields a trailing empty segment:
/// `split("a::b", "::")` is `["a", "b"]`, `split("abc", "::")` is `["abc"]`,
/// `split("a::", "::")` is `["a", ""]`. An empty `delim` is treated as
/// never occurring.
pub fn split(s: &str, delim: &str) -> Vec<String> {
    if delim.is_empty() {
        return vec![s.to_string()];
    }
    let mut out = Vec::new();
    let mut rest = s;
    while let Some(pos) = rest.find(delim) {
        out.push(rest[..pos].to_string());
        rest = &rest[pos + delim.len()..];
    }
    out.push(rest.to_string());
    out
}

/// Concatenate `parts` with `delim` between consecutive elements.
pub fn join(parts: &[String], delim: &str) -> String {
    parts.join(delim)
}

/// `s` with every occurrence of `from` replaced by `to`.
///
/// An empty `from` returns the input unchanged.
pub fn replace(s: &str, from: &str, to: &str) -> String {
    if from.is_empty() {
        return s.to_string();
    }
    s.replace(from, to)
}
