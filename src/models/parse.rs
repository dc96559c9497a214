use crate::error::{Result, TrackerError};

/// Parse the leading integer of a calorie string, truncating any fraction.
///
/// Accepts an optional sign followed by digits; trailing text is ignored,
/// so `"89.7"` and `"89 kcal"` both yield 89. Values beyond the `i64` range
/// saturate.
pub fn parse_calories(text: &str) -> Option<i64> {
    let trimmed = text.trim();
    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }

    // A run of ASCII digits only fails to parse on overflow.
    let saturated = if sign < 0 { i64::MIN } else { i64::MAX };
    Some(
        rest[..digits_end]
            .parse::<i64>()
            .map(|n| sign * n)
            .unwrap_or(saturated),
    )
}

/// Parse a biometric measurement (weight, height or age).
///
/// Zero and negative values are accepted; only non-numeric text is rejected.
pub fn parse_measurement(text: &str) -> Result<f64> {
    parse_finite(text, "measurement")
}

/// Parse a quantity multiplier against a food's reference unit.
///
/// Fractional, zero and negative quantities are accepted.
pub fn parse_quantity(text: &str) -> Result<f64> {
    parse_finite(text, "quantity")
}

fn parse_finite(text: &str, what: &str) -> Result<f64> {
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| TrackerError::InvalidInput(format!("Invalid {}: '{}'", what, text.trim())))?;

    if !value.is_finite() {
        return Err(TrackerError::InvalidInput(format!(
            "Invalid {}: '{}'",
            what,
            text.trim()
        )));
    }

    Ok(value)
}
