//! Helpers for converting between user-entered currency text and numbers.
//!
//! [string_to_currency_format] is used to display an amount while the user is
//! typing it, and [string_to_numeric] turns the submitted text back into a
//! number that can be stored.

/// Format `amount` for display as a currency amount, e.g. "1234.5" becomes
/// "1,234.5".
///
/// Every character that is not an ASCII digit or a period is removed, commas
/// are inserted between groups of thousands in the integer part, and the
/// fractional part is truncated (not rounded) to two digits.
///
/// Only the first period is treated as the decimal point. When the input
/// contains more than one period and the first fractional segment has at
/// most two digits, the remaining segments are kept as literal text, e.g.
/// "1.2.3" is returned unchanged. When the first fractional segment is
/// longer than two digits, it is truncated and the remaining segments are
/// dropped, e.g. "1.234.5" becomes "1.23".
///
/// This function never fails: empty input, or input without any digits,
/// produces an empty or minimal string.
pub fn string_to_currency_format(amount: &str) -> String {
    let value: String = amount
        .chars()
        .filter(|char| char.is_ascii_digit() || *char == '.')
        .collect();

    let mut parts = value.split('.');
    let integer_part = group_thousands(parts.next().unwrap_or_default());
    let remaining_parts: Vec<&str> = parts.collect();

    match remaining_parts.first() {
        // The fractional part only contains ASCII digits so slicing by bytes is safe.
        Some(fraction) if fraction.len() > 2 => format!("{integer_part}.{}", &fraction[..2]),
        _ => std::iter::once(integer_part.as_str())
            .chain(remaining_parts)
            .collect::<Vec<_>>()
            .join("."),
    }
}

/// Insert a comma before every group of three digits, counting from the right.
fn group_thousands(digits: &str) -> String {
    let digit_count = digits.len();
    let mut grouped = String::with_capacity(digit_count + digit_count / 3);

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digit_count - index) % 3 == 0 {
            grouped.push(',');
        }

        grouped.push(digit);
    }

    grouped
}

/// Convert currency text, e.g. "1,234.56", into a number rounded to two
/// decimal places.
///
/// Commas are removed before the longest valid number at the start of the
/// text is parsed, so "12.5abc" gives `12.5`. The parsed value is rounded to
/// the nearest hundredth, with halfway cases rounded away from zero.
///
/// Returns [f64::NAN] if the text does not start with a valid number. Callers
/// must check for this with [f64::is_nan] before using the result.
pub fn string_to_numeric(amount: &str) -> f64 {
    let without_commas = amount.replace(',', "");

    match parse_leading_float(&without_commas) {
        Some(value) => (value * 100.0).round() / 100.0,
        None => f64::NAN,
    }
}

/// Parse the longest prefix of `text` that forms a valid decimal number.
///
/// Leading whitespace, including the byte order mark U+FEFF, is skipped.
/// The number may have a sign, a single decimal point, and an exponent (only
/// if the exponent has digits). The word "Infinity" is accepted after an
/// optional sign.
fn parse_leading_float(text: &str) -> Option<f64> {
    let text = text.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}');
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    if text[end..].starts_with("Infinity") {
        let infinity = if bytes[0] == b'-' {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };

        return Some(infinity);
    }

    let integer_digits = count_digits(&bytes[end..]);
    end += integer_digits;

    let mut fraction_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction_digits = count_digits(&bytes[end + 1..]);

        if integer_digits > 0 || fraction_digits > 0 {
            end += 1 + fraction_digits;
        }
    }

    if integer_digits == 0 && fraction_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent_end = end + 1;

        if matches!(bytes.get(exponent_end), Some(b'+' | b'-')) {
            exponent_end += 1;
        }

        let exponent_digits = count_digits(&bytes[exponent_end..]);

        if exponent_digits > 0 {
            end = exponent_end + exponent_digits;
        }
    }

    text[..end].parse().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|byte| byte.is_ascii_digit()).count()
}
