use super::error::{ERROR_MARKER, Result};

/// Format a line outcome for display: the number, or `Err`.
pub fn format_result(value: Result<f64>) -> String {
    match value {
        Ok(n) => format_number(n),
        Err(_) => ERROR_MARKER.to_string(),
    }
}

/// Format a number for display.
///
/// - whole numbers in i32 or i64 range: `100`, `2000000000`
/// - larger whole numbers: `1.23e+15`
/// - everything else: two decimals, ties away from zero (`3.33`)
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 {
        if n >= i32::MIN as f64 && n <= i32::MAX as f64 {
            (n as i32).to_string()
        } else if n >= i64::MIN as f64 && n < i64::MAX as f64 {
            (n as i64).to_string()
        } else {
            format_scientific(n)
        }
    } else {
        format_fixed(n)
    }
}

/// Two decimals, rounding half away from zero on the shortest decimal
/// representation of `n` (so `2.675` gives `2.68`).
fn format_fixed(n: f64) -> String {
    let repr = n.abs().to_string();
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));

    let mut digits: Vec<u8> = int_part.bytes().collect();
    let frac = frac_part.as_bytes();
    digits.extend((0..2).map(|i| frac.get(i).copied().unwrap_or(b'0')));

    if frac.get(2).is_some_and(|d| *d >= b'5') {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - 2;
    let mut out = String::with_capacity(digits.len() + 2);
    if n.is_sign_negative() {
        out.push('-');
    }
    out.push_str(&String::from_utf8_lossy(&digits[..split]));
    out.push('.');
    out.push_str(&String::from_utf8_lossy(&digits[split..]));
    out
}

/// `d.dde±XX`: two fractional digits, signed exponent of at least two digits.
fn format_scientific(n: f64) -> String {
    let raw = format!("{:.2e}", n);
    let Some((mantissa, exponent)) = raw.split_once('e') else {
        return raw;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return raw;
    };
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{}e{}{:02}", mantissa, sign, exponent.unsigned_abs())
}
