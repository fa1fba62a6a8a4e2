use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum QuantityParseError {
    #[error("empty quantity")]
    Empty,

    #[error("invalid number: {0}")]
    InvalidNumber(String),

    #[error("denominator cannot be zero: {0}")]
    ZeroDenominator(String),

    #[error("negative quantities are not allowed: {0}")]
    Negative(String),
}

/// Parse a numeric quantity string into a float.
///
/// Supports formats:
/// - Whole numbers and decimals: "2", "2.5"
/// - Pure fractions: "1/2"
/// - Mixed numbers: "1 1/2"
///
/// # Arguments
/// * `text` - The quantity string to parse
///
/// # Returns
/// * Ok(f64) - Parsed non-negative quantity
/// * Err(QuantityParseError) - Parse error
pub fn parse_quantity(text: &str) -> Result<f64, QuantityParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(QuantityParseError::Empty);
    }

    // Mixed numbers: "1 1/2"
    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    if parts.len() == 2 && parts[1].contains('/') {
        let whole: f64 = parts[0]
            .parse()
            .map_err(|_| QuantityParseError::InvalidNumber(parts[0].to_string()))?;
        if whole < 0.0 {
            return Err(QuantityParseError::Negative(trimmed.to_string()));
        }
        return Ok(whole + parse_simple_fraction(parts[1])?);
    }

    // Pure fractions: "1/2"
    if trimmed.contains('/') {
        return parse_simple_fraction(trimmed);
    }

    // Decimals and whole numbers
    let value: f64 = trimmed
        .parse()
        .map_err(|_| QuantityParseError::InvalidNumber(trimmed.to_string()))?;
    if value < 0.0 {
        return Err(QuantityParseError::Negative(trimmed.to_string()));
    }

    Ok(value)
}

fn parse_simple_fraction(text: &str) -> Result<f64, QuantityParseError> {
    let (numer, denom) = text
        .split_once('/')
        .ok_or_else(|| QuantityParseError::InvalidNumber(text.to_string()))?;

    let numer: f64 = numer
        .trim()
        .parse()
        .map_err(|_| QuantityParseError::InvalidNumber(text.to_string()))?;
    let denom: f64 = denom
        .trim()
        .parse()
        .map_err(|_| QuantityParseError::InvalidNumber(text.to_string()))?;

    if denom == 0.0 {
        return Err(QuantityParseError::ZeroDenominator(text.to_string()));
    }
    if numer < 0.0 || denom < 0.0 {
        return Err(QuantityParseError::Negative(text.to_string()));
    }

    Ok(numer / denom)
}

/// Format a quantity as a human-friendly string.
///
/// Whole numbers render bare ("2"). Other values render as the closest
/// fraction with denominator 16 or less when that fraction reconstructs the
/// value within 0.01 ("1 1/2", "3/4"), and otherwise as a two-decimal string
/// with trailing zeros stripped ("2.35").
pub fn format_quantity(quantity: f64) -> String {
    if quantity.fract() == 0.0 && quantity.abs() < i64::MAX as f64 {
        return format!("{}", quantity as i64);
    }

    // Closest fraction with denominator <= 16
    let mut best: Option<(i64, i64, f64)> = None;
    for denom in 1..=16i64 {
        let numer = (quantity * denom as f64).round() as i64;
        let error = (quantity - numer as f64 / denom as f64).abs();
        if best.is_none_or(|(_, _, best_error)| error < best_error) {
            best = Some((numer, denom, error));
        }
    }

    if let Some((numer, denom, error)) = best {
        if error < 0.01 {
            let gcd = gcd(numer, denom);
            let (numer, denom) = (numer / gcd, denom / gcd);

            if numer > denom {
                let whole = numer / denom;
                let remainder = numer % denom;
                if remainder == 0 {
                    return format!("{}", whole);
                }
                return format!("{} {}/{}", whole, remainder, denom);
            }
            return format!("{}/{}", numer, denom);
        }
    }

    format!("{:.2}", quantity)
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a.max(1)
}
