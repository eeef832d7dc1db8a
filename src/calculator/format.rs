//! Display formatting for operand strings.

use super::numeral::parse_numeral;

/// Format an operand string for display.
///
/// The integer part is parsed and grouped with thousand separators. The
/// fractional part, if any, is re-appended exactly as typed so in-progress
/// input like `"1234."` shows as `"1,234."`. An integer part that does not
/// parse (for example the empty string) displays as nothing.
pub fn format_number(numeral: &str) -> String {
    let (integer, fraction) = match numeral.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (numeral, None),
    };

    let integer_display = format_integer(integer).unwrap_or_default();

    match fraction {
        Some(fraction) => format!("{}.{}", integer_display, fraction),
        None => integer_display,
    }
}

/// Group the integer part of an operand, or `None` if it is not a number.
fn format_integer(integer: &str) -> Option<String> {
    let value = parse_numeral(integer)?.round();

    if value.is_infinite() {
        let symbol = if value.is_sign_positive() { "∞" } else { "-∞" };
        return Some(symbol.to_string());
    }

    // Keep the sign of negative zero, "-0." is a legitimate in-progress entry
    let grouped = format_with_separators(&format!("{}", value.abs()));
    if value.is_sign_negative() {
        Some(format!("-{}", grouped))
    } else {
        Some(grouped)
    }
}

/// Insert a thousand separator every three digits of a digit string.
fn format_with_separators(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result.chars().rev().collect()
}
