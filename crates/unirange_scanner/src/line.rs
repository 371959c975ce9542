//! Matching a single data line.

use regex::Regex;
use std::sync::OnceLock;
use unirange_core::CodePoint;

/// The outcome of matching one line against the entry pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineMatch<'a> {
    /// A well-formed entry.
    CodePoint(CodePoint),
    /// The hex digits do not fit in a code point.
    Overflow(&'a str),
    /// The line does not start with `U+<hex><whitespace>`.
    Malformed,
}

fn entry_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // The terminator is already stripped, so end of line also ends the digits.
    PATTERN.get_or_init(|| {
        Regex::new(r"^U\+([0-9A-Fa-f]+)(?:\s|$)").expect("entry pattern compiles")
    })
}

/// Match one line (without its terminator).
pub fn parse_line(line: &str) -> LineMatch<'_> {
    let Some(caps) = entry_pattern().captures(line) else {
        return LineMatch::Malformed;
    };
    let Some(digits) = caps.get(1) else {
        return LineMatch::Malformed;
    };
    let digits = digits.as_str();
    match CodePoint::from_str_radix(digits, 16) {
        Ok(cp) => LineMatch::CodePoint(cp),
        Err(_) => LineMatch::Overflow(digits),
    }
}
