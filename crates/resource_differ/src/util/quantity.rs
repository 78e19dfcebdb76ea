//! Kubernetes resource quantities (`500m`, `1Gi`, `1e3`) reduced to a single
//! comparable number.

enum Scale {
    Binary(u32),
    Decimal(i64),
}

fn parse_suffix(suffix: &str) -> Option<Scale> {
    let scale = match suffix {
        "" => Scale::Decimal(0),
        "n" => Scale::Decimal(-9),
        "u" => Scale::Decimal(-6),
        "m" => Scale::Decimal(-3),
        "k" => Scale::Decimal(3),
        "M" => Scale::Decimal(6),
        "G" => Scale::Decimal(9),
        "T" => Scale::Decimal(12),
        "P" => Scale::Decimal(15),
        "E" => Scale::Decimal(18),
        "Ki" => Scale::Binary(10),
        "Mi" => Scale::Binary(20),
        "Gi" => Scale::Binary(30),
        "Ti" => Scale::Binary(40),
        "Pi" => Scale::Binary(50),
        "Ei" => Scale::Binary(60),
        _ => {
            let exponent = suffix.strip_prefix(['e', 'E'])?;
            Scale::Decimal(exponent.parse::<i64>().ok()?)
        }
    };
    Some(scale)
}

fn scale10(value: i128, exponent: i64) -> Option<i128> {
    if value == 0 {
        return Some(0);
    }
    let factor = 10i128.checked_pow(u32::try_from(exponent.unsigned_abs()).ok()?)?;
    if exponent >= 0 {
        value.checked_mul(factor)
    } else if value % factor == 0 {
        Some(value / factor)
    } else {
        None
    }
}

/// Parses a Kubernetes resource quantity into an exact count of nano-units.
///
/// Returns `None` when the input is not a valid quantity, when the value does not
/// fit in an `i128`, or when it is not a whole number of nano-units.
pub fn parse_quantity(input: &str) -> Option<i128> {
    let s = input.trim();
    let (negative, s) = match s.as_bytes().first()? {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };

    let number_len = s
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(s.len());
    let (number, suffix) = s.split_at(number_len);
    let (int_part, frac_part) = number.split_once('.').unwrap_or((number, ""));
    if (int_part.is_empty() && frac_part.is_empty()) || frac_part.contains('.') {
        return None;
    }

    let mut digits: i128 = 0;
    for c in int_part.chars().chain(frac_part.chars()) {
        let digit = i128::from(c.to_digit(10)?);
        digits = digits.checked_mul(10)?.checked_add(digit)?;
    }

    let frac_len = i64::try_from(frac_part.len()).ok()?;
    let nanos = match parse_suffix(suffix)? {
        Scale::Binary(power) => scale10(digits.checked_mul(1i128 << power)?, 9 - frac_len)?,
        Scale::Decimal(exponent) => scale10(digits, exponent.checked_add(9)?.checked_sub(frac_len)?)?,
    };

    Some(if negative { -nanos } else { nanos })
}

/// Canonical string form used for comparisons only, never written back to a resource.
pub fn canonical_quantity(input: &str) -> Option<String> {
    parse_quantity(input).map(|nanos| format!("{nanos}n"))
}
