use std::fmt;

/// Smallest and largest decimal exponent printed in plain notation.
const MIN_PLAIN_EXPONENT: i32 = -4;
const MAX_PLAIN_EXPONENT: i32 = 6;

pub(crate) const INVALID_SYNTAX: &str = "invalid syntax";
pub(crate) const OUT_OF_RANGE: &str = "value out of range";

/// A computed bill amount.
///
/// Renders with the shortest digits that round-trip the `f32`. Magnitudes
/// below `1e-4` or at or above `1e6` switch to exponent notation with a signed,
/// two-digit exponent (`1e+06`). Non-finite values print as `+Inf`, `-Inf`
/// and `NaN`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Amount(f32);

impl Amount {
    pub fn new(value: f32) -> Amount {
        Amount(value)
    }

    pub fn value(&self) -> f32 {
        self.0
    }
}

/// Parses a 32-bit amount, returning the reason on failure.
///
/// Accepts decimal literals, `inf`/`infinity`/`nan`, and hexadecimal floats
/// with a binary exponent (`0x1p4`, `-0x1.8P-1`). Finite literals too large
/// for an `f32` are rejected rather than rounded to infinity.
pub(crate) fn parse_amount(raw: &str) -> Result<f32, &'static str> {
    let value = match raw.parse::<f32>() {
        Ok(value) => value,
        Err(_) => parse_hex_float(raw).ok_or(INVALID_SYNTAX)? as f32,
    };

    if value.is_infinite() && !names_infinity(raw) {
        return Err(OUT_OF_RANGE);
    }
    Ok(value)
}

fn names_infinity(raw: &str) -> bool {
    let unsigned = raw.trim_start_matches(['+', '-']).to_ascii_lowercase();
    unsigned == "inf" || unsigned == "infinity"
}

// [+-]0x<hex digits>[.<hex digits>]p[+-]<decimal exponent>
fn parse_hex_float(raw: &str) -> Option<f64> {
    let (negative, rest) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };
    let rest = rest
        .strip_prefix("0x")
        .or_else(|| rest.strip_prefix("0X"))?;
    let (mantissa, exponent) = rest.split_once(['p', 'P'])?;
    let exponent = exponent.parse::<i32>().ok()?;
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }

    let mut value = 0f64;
    for c in int_part.chars().chain(frac_part.chars()) {
        value = value * 16.0 + f64::from(c.to_digit(16)?);
    }
    if value != 0.0 {
        let frac_bits = i32::try_from(frac_part.len()).ok()?.checked_mul(4)?;
        value *= 2f64.powi(exponent.checked_sub(frac_bits)?);
    }
    Some(if negative { -value } else { value })
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value.is_nan() {
            return f.write_str("NaN");
        }
        if value.is_infinite() {
            return f.write_str(if value > 0.0 { "+Inf" } else { "-Inf" });
        }
        if value == 0.0 {
            return write!(f, "{}", value);
        }

        let scientific = format!("{:e}", value);
        let Some((mantissa, exponent)) = scientific.split_once('e') else {
            return write!(f, "{}", value);
        };
        let Ok(exponent) = exponent.parse::<i32>() else {
            return write!(f, "{}", value);
        };

        if (MIN_PLAIN_EXPONENT..MAX_PLAIN_EXPONENT).contains(&exponent) {
            write!(f, "{}", value)
        } else {
            let sign = if exponent < 0 { '-' } else { '+' };
            write!(f, "{}e{}{:02}", mantissa, sign, exponent.abs())
        }
    }
}
