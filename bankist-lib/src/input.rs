//! Coercion of raw form fields into numbers
//!
//! Fields are read as text. An empty field counts as zero, surrounding
//! whitespace is ignored, and anything that isn't a finite decimal number is
//! not a number at all.

/// Read a field as a number
#[must_use]
pub fn number(field: &str) -> Option<f64> {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Read a field as a whole amount
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
pub fn amount(field: &str) -> Option<i64> {
    let value = number(field)?;
    if value.fract() != 0.0 || value.abs() > 9_007_199_254_740_992.0 {
        return None;
    }
    Some(value as i64)
}

/// Whether a field holds exactly the given pin
#[must_use]
#[allow(clippy::float_cmp)]
pub fn matches_pin(field: &str, pin: u32) -> bool {
    number(field).map_or(false, |value| value == f64::from(pin))
}
