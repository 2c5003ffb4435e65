//! Numeric coercion of loosely formatted cells.
//!
//! Cells copied from web tables carry footnote marks, ordinal suffixes and
//! stray whitespace. Everything that is not part of a number is dropped
//! before parsing; anything still unparseable becomes `None`.

/// Keeps digits, `.` and `-`, then parses. Non-finite values are `None`.
pub fn parse_number(value: &str) -> Option<f64> {
    let digits: String = value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Parses a classified position: a positive whole number.
///
/// `"Ret"`, `""` and `"0"` are all unclassified.
pub fn parse_position(value: &str) -> Option<u32> {
    parse_number(value)
        .filter(|n| *n >= 1.0 && n.fract() == 0.0 && *n <= f64::from(u32::MAX))
        .map(|n| n as u32)
}

/// Parses a non-negative whole count such as grid slot or laps completed.
pub fn parse_count(value: &str) -> Option<u32> {
    parse_number(value)
        .filter(|n| *n >= 0.0 && n.fract() == 0.0 && *n <= f64::from(u32::MAX))
        .map(|n| n as u32)
}

/// Parses points, defaulting to zero for missing or negative values.
pub fn parse_points(value: &str) -> f64 {
    parse_number(value)
        .filter(|n| *n >= 0.0)
        .map(f64::abs)
        .unwrap_or(0.0)
}
