//! Conversion between display text and numbers

/// Formats a value for the display.
///
/// Uses the shortest decimal that parses back to the same `f64`, with no
/// exponent and no digit grouping. Negative zero and non-finite values
/// both render as `"0"`.
#[must_use]
pub fn format_numeral(value: f64) -> String {
    if !value.is_finite() || value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}

/// Parses display text into a number.
///
/// Display text is valid by construction; anything that still fails to
/// parse, or overflows to infinity, reads as `0`.
#[must_use]
pub fn parse_numeral(text: &str) -> f64 {
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}
