//! Numeric literals: evaluating source text and rendering numbers for display.
//!
//! [`parse_literal`] accepts the literal forms a script can write: decimal
//! (`987`, `3.14`, `.5`), scientific (`2.99E8`, `6.62607004e-34`) and the
//! prefixed integer forms `0x`, `0o` and `0b`. Unlike [`crate::parse`] it is
//! strict: the whole text must be one literal.
//!
//! The legacy form `0100` is rejected with `AmbiguousOctal`. Depending on the
//! language version it means either 64 or 100, so the base must be stated with
//! a `0o` prefix or by calling `parse("100", 8)`.
//!
//! [`format_number`] renders an `f64` the way a script console prints it: no
//! trailing `.0`, plain notation for decimal exponents in `[-7, 21)`, and
//! `d.ddde±n` outside that range.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PrimitiveError, Result};
use crate::radix::Radix;

/// How a literal was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LiteralKind {
    Decimal,
    Binary,
    Octal,
    Hexadecimal,
    /// Decimal with an exponent part.
    Scientific,
}

impl LiteralKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            LiteralKind::Decimal => "decimal",
            LiteralKind::Binary => "binary",
            LiteralKind::Octal => "octal",
            LiteralKind::Hexadecimal => "hexadecimal",
            LiteralKind::Scientific => "scientific",
        }
    }
}

impl fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An evaluated numeric literal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Literal {
    pub value: f64,
    pub kind: LiteralKind,
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_number(self.value))
    }
}

/// Evaluate numeric literal source text.
///
/// Surrounding whitespace is ignored and a single leading `-` is accepted.
///
/// # Errors
/// - `PrimitiveError::AmbiguousOctal` for a `0` followed by further digits (`0100`).
/// - `PrimitiveError::InvalidLiteral` for anything else that is not a literal.
pub fn parse_literal(text: &str) -> Result<Literal> {
    let trimmed = text.trim();
    let (negative, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let literal = if let Some((radix, digits)) = split_radix_prefix(body) {
        let value = prefixed_value(radix, digits).ok_or_else(|| invalid(text))?;
        let kind = match radix {
            Radix::Binary => LiteralKind::Binary,
            Radix::Octal => LiteralKind::Octal,
            _ => LiteralKind::Hexadecimal,
        };
        Literal { value, kind }
    } else if is_legacy_octal(body) {
        debug!(input = text, "rejecting legacy octal literal");
        return Err(PrimitiveError::AmbiguousOctal(text.to_string()));
    } else {
        let has_exponent = scan_decimal(body).ok_or_else(|| invalid(text))?;
        let value: f64 = body.parse().map_err(|_| invalid(text))?;
        let kind = if has_exponent {
            LiteralKind::Scientific
        } else {
            LiteralKind::Decimal
        };
        Literal { value, kind }
    };

    Ok(if negative {
        Literal {
            value: -literal.value,
            ..literal
        }
    } else {
        literal
    })
}

fn invalid(text: &str) -> PrimitiveError {
    debug!(input = text, "rejecting malformed numeric literal");
    PrimitiveError::InvalidLiteral(text.to_string())
}

fn split_radix_prefix(body: &str) -> Option<(Radix, &str)> {
    let (prefix, digits) = body.split_at_checked(2)?;
    let radix = match prefix {
        "0x" | "0X" => Radix::Hexadecimal,
        "0o" | "0O" => Radix::Octal,
        "0b" | "0B" => Radix::Binary,
        _ => return None,
    };
    Some((radix, digits))
}

/// Value of a prefixed integer literal; `None` unless every character is a digit.
/// Accumulates in `f64` so oversized literals lose precision instead of failing.
fn prefixed_value(radix: Radix, digits: &str) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    let base = f64::from(radix.value());
    digits.chars().try_fold(0.0, |acc, ch| {
        radix
            .digit_value(ch)
            .map(|digit| acc * base + f64::from(digit))
    })
}

fn is_legacy_octal(body: &str) -> bool {
    let mut bytes = body.bytes();
    bytes.next() == Some(b'0') && bytes.next().is_some_and(|b| b.is_ascii_digit())
}

/// Check `digits[.digits][(e|E)[+|-]digits]` with at least one mantissa digit.
/// Returns whether an exponent part is present.
fn scan_decimal(s: &str) -> Option<bool> {
    let bytes = s.as_bytes();
    let count_digits = |from: usize| {
        bytes[from..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let int_digits = count_digits(0);
    let mut i = int_digits;
    let mut frac_digits = 0;
    if bytes.get(i) == Some(&b'.') {
        i += 1;
        frac_digits = count_digits(i);
        i += frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    let mut has_exponent = false;
    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let exp_digits = count_digits(i);
        if exp_digits == 0 {
            return None;
        }
        i += exp_digits;
        has_exponent = true;
    }

    (i == bytes.len()).then_some(has_exponent)
}

/// Render a number the way a script console prints it.
///
/// ```
/// use primitives_core::format_number;
///
/// assert_eq!(format_number(2.99e8), "299000000");
/// assert_eq!(format_number(6.62607004e-34), "6.62607004e-34");
/// assert_eq!(format_number(-0.0), "0");
/// ```
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "2.99e8".
    let scientific = format!("{:e}", n.abs());
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let exponent: i32 = exponent.parse().unwrap_or(0);

    // Value is 0.DIGITS × 10^point.
    let k = digits.len() as i32;
    let point = exponent + 1;

    let mut out = String::new();
    if n < 0.0 {
        out.push('-');
    }
    if k <= point && point <= 21 {
        out.push_str(&digits);
        out.push_str(&"0".repeat((point - k) as usize));
    } else if 0 < point && point <= 21 {
        let (whole, frac) = digits.split_at(point as usize);
        out.push_str(whole);
        out.push('.');
        out.push_str(frac);
    } else if -6 < point && point <= 0 {
        out.push_str("0.");
        out.push_str(&"0".repeat((-point) as usize));
        out.push_str(&digits);
    } else {
        let (first, rest) = digits.split_at(1);
        out.push_str(first);
        if !rest.is_empty() {
            out.push('.');
            out.push_str(rest);
        }
        let shown = point - 1;
        out.push('e');
        out.push(if shown < 0 { '-' } else { '+' });
        out.push_str(&shown.abs().to_string());
    }
    out
}
