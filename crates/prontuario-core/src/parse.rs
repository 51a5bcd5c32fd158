//! Lenient number parsing for values typed into chart fields.
//!
//! Chart entry is incremental, so a half-typed or empty field is not an
//! error. Every parser here returns `None` for input it cannot read and
//! leaves the decision of what "absent" means to the caller.

/// Parse a decimal number written with either `,` or `.` as separator.
///
/// Leading whitespace is ignored and the longest numeric prefix is read,
/// so `"38 °C"` yields `38.0`, `"37,8"` yields `37.8` and `"4e2"` yields
/// `400.0`. Returns `None` when the input has no leading digits or the
/// value is not finite.
pub fn decimal(raw: &str) -> Option<f64> {
    let normalized = raw.trim().replace(',', ".");
    let bytes = normalized.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_start = end;
    end = skip_digits(bytes, end);
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = skip_digits(bytes, end + 1);
        let frac_digits = frac_end - (end + 1);
        if frac_digits > 0 || digits > 0 {
            end = frac_end;
            digits += frac_digits;
        }
    }

    if digits == 0 {
        return None;
    }

    let mut number = normalized[..end].trim_end_matches('.').to_string();

    // Exponent only counts when at least one digit follows it.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_end = skip_digits(bytes, exp_end);
        if exp_digits_end > exp_end {
            number.push_str(&normalized[end..exp_digits_end]);
        }
    }

    number.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Strip every non-digit character and parse what remains as an unsigned
/// integer. `"120mmHg"` yields `120`; `"abc"` and `""` yield `None`.
/// Digit strings too long for `u32` saturate at `u32::MAX`.
pub fn digits_only(raw: &str) -> Option<u32> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    Some(digits.parse().unwrap_or(u32::MAX))
}

fn skip_digits(bytes: &[u8], mut pos: usize) -> usize {
    while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
        pos += 1;
    }
    pos
}
