//! Conversion between operand strings and `f64` values.
//!
//! Operands are kept as strings so partially typed input ("12.", "-") survives
//! between key presses. These helpers turn them into numbers for arithmetic and
//! turn results back into operand strings.

/// Parse the longest numeric prefix of `input`.
///
/// Accepts leading whitespace, an optional sign, then either `Infinity` or a
/// decimal mantissa (`12`, `12.`, `.5`, `1.5`) with an optional exponent.
/// Trailing garbage after the prefix is ignored. Returns `None` when no digits
/// are found, so `""`, `"-"` and `"."` do not parse.
pub fn parse_numeral(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    if s[end..].starts_with("Infinity") {
        let negative = bytes.first() == Some(&b'-');
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        end += 1 + frac_digits;
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    // Only consume the exponent if it carries at least one digit
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse::<f64>().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Render a computed value as an operand string.
///
/// Uses the shortest representation that round-trips, never exponent
/// notation. Negative zero becomes `"0"`.
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if value == 0.0 {
        "0".to_string()
    } else {
        format!("{}", value)
    }
}
