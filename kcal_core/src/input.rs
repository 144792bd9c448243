//! Parse-or-default handling for raw control values.
//!
//! Malformed numbers are never an error: they are replaced by the documented
//! defaults before any calculation runs.

pub const DEFAULT_WEIGHT_KG: f64 = 75.0;
pub const DEFAULT_SPEED_KMH: f64 = 8.0;
pub const DEFAULT_INCLINE_PERCENT: f64 = 0.0;
pub const DEFAULT_DURATION_MINUTES: u32 = 30;

/// Parse a numeric control value. Non-finite results count as unparseable.
pub fn parse_number(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Use `value` unless it is absent, non-finite or zero.
///
/// Zero is treated as "not entered", so a blank-then-zero weight field still
/// produces a sensible estimate.
pub fn nonzero_finite_or(value: Option<f64>, default: f64) -> f64 {
    match value {
        Some(v) if v.is_finite() && v != 0.0 => v,
        _ => default,
    }
}

/// [`parse_number`] followed by [`nonzero_finite_or`]
pub fn number_or(text: &str, default: f64) -> f64 {
    nonzero_finite_or(parse_number(text), default)
}

/// Longest session a projection will build (one day)
pub const MAX_DURATION_MINUTES: u32 = 1440;

/// Parse a duration in whole minutes from the leading integer of `text`.
///
/// Reads an optional sign and the digits that follow it and ignores the rest,
/// so `"12.7"` and `"12 min"` are both 12 and `"1e3"` is 1. Anything outside
/// `1..=MAX_DURATION_MINUTES`, or without leading digits, falls back to
/// [`DEFAULT_DURATION_MINUTES`].
pub fn parse_duration(text: &str) -> u32 {
    let trimmed = text.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());

    match unsigned[..digits_end].parse::<u32>() {
        Ok(minutes) if !negative && is_valid_duration(minutes) => minutes,
        _ => DEFAULT_DURATION_MINUTES,
    }
}

/// Whether `minutes` is a duration a projection accepts
pub fn is_valid_duration(minutes: u32) -> bool {
    (1..=MAX_DURATION_MINUTES).contains(&minutes)
}
