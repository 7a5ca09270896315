//! Display formatting shared by the JSON result cards and the PDF report.
//!
//! Figures match what browsers print for the same values: currency rounds
//! the shortest decimal text, other numbers round the exact binary value.

/// Currency text in US dollars: `$1,234`, or `$3.50` for amounts in `(0, 5)`.
///
/// Rounds the shortest decimal text of `value`, so `1.005` becomes `$1.01`
/// even though the nearest double sits just below the midpoint.
pub fn format_currency(value: f64) -> String {
    let value = finite_or_zero(value);
    let decimals = if value > 0.0 && value < 5.0 { 2 } else { 0 };
    let fixed = round_decimal_text(&value.abs().to_string(), decimals);
    format!("{}${}", sign_for(value, &fixed), group_thousands(&fixed))
}

/// Compact number text: `1.5B`, `1.5M`, `1.5K`, `0.50`, `7.5`, `42`.
pub fn format_number(value: f64) -> String {
    let value = finite_or_zero(value);
    if value >= 1e9 {
        format!("{}B", to_fixed(value / 1e9, 1))
    } else if value >= 1e6 {
        format!("{}M", to_fixed(value / 1e6, 1))
    } else if value >= 1e3 {
        format!("{}K", to_fixed(value / 1e3, 1))
    } else if value > 0.0 && value < 1.0 {
        to_fixed(value, 2)
    } else if value > 0.0 && value < 10.0 {
        to_fixed(value, 1)
    } else {
        to_fixed(value, 0)
    }
}

/// Leverage ratio text, e.g. `5.0×`.
pub fn format_ratio(value: f64) -> String {
    format!("{}×", to_fixed(finite_or_zero(value), 1))
}

/// Whole-percent reduction from `before` to `after`, e.g. `80`.
///
/// A zero (or non-finite) `before` has nothing to reduce and yields `0`.
pub fn format_percent_reduction(before: f64, after: f64) -> String {
    if before == 0.0 || !before.is_finite() {
        return "0".to_string();
    }
    to_fixed(finite_or_zero(100.0 - after / before * 100.0), 0)
}

/// Fixed-point text with `decimals` places.
///
/// Rounds the exact binary value, so `1.45` (stored as `1.4499…`) gives
/// `1.4`. Exact midpoints such as `7.25` round away from zero.
pub fn to_fixed(value: f64, decimals: usize) -> String {
    let fixed = if is_exact_midpoint(value, decimals) {
        round_decimal_text(&format!("{:.*}", decimals + 1, value.abs()), decimals)
    } else {
        format!("{:.*}", decimals, value.abs())
    };
    format!("{}{fixed}", sign_for(value, &fixed))
}

/// `-` for negative values that still show a nonzero digit; never `-0`.
fn sign_for(value: f64, fixed: &str) -> &'static str {
    if value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        "-"
    } else {
        ""
    }
}

/// Whether `value * 10^decimals` lies exactly halfway between two integers.
///
/// With `value = m * 2^e` (`m` holding `t` trailing zero bits) that product
/// is `n + 0.5` exactly when `t + decimals + 1 + e == 0`.
fn is_exact_midpoint(value: f64, decimals: usize) -> bool {
    if value == 0.0 || !value.is_finite() {
        return false;
    }
    let bits = value.abs().to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i64;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mantissa, exponent) = if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), biased - 1075)
    };
    i64::from(mantissa.trailing_zeros()) + decimals as i64 + 1 + exponent == 0
}

/// Round a non-negative plain decimal string (`"1.005"`, `"42"`) to
/// `decimals` places, half up on the digit that follows.
fn round_decimal_text(text: &str, decimals: usize) -> String {
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text, ""));
    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(decimals))
        .collect();

    if frac_part.as_bytes().get(decimals).is_some_and(|&d| d >= b'5') {
        let mut carried = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carried = false;
                break;
            }
        }
        if carried {
            digits.insert(0, b'1');
        }
    }

    let int_len = digits.len() - decimals;
    let mut out = String::with_capacity(digits.len() + 1);
    out.extend(digits[..int_len].iter().map(|&d| d as char));
    if decimals > 0 {
        out.push('.');
        out.extend(digits[int_len..].iter().map(|&d| d as char));
    }
    out
}

/// Insert `,` separators into the integer part of a plain decimal string.
fn group_thousands(fixed: &str) -> String {
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (fixed, None),
    };

    let digits = int_part.len();
    let mut grouped = String::with_capacity(digits + digits / 3 + 4);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
