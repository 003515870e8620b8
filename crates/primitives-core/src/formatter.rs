//! Integer ↔ text conversion in base 2, 8, 10 or 16.
//!
//! [`format`] behaves like `Number.prototype.toString(radix)` restricted to integers,
//! and [`parse`] like `parseInt(text, radix)`: a lenient prefix parse that consumes
//! the longest run of valid digits and ignores whatever follows.
//!
//! # Example
//! ```
//! use primitives_core::{format, parse};
//!
//! assert_eq!(format(1024, 16).unwrap(), "400");
//! assert_eq!(parse("CAFE", 16).unwrap(), 51966);
//! assert_eq!(parse("12px", 10).unwrap(), 12);
//! ```

use tracing::debug;

use crate::error::{PrimitiveError, Result};
use crate::radix::Radix;

/// Render `value` in the given base.
///
/// # Errors
/// Returns `PrimitiveError::InvalidRadix` if `radix` is not 2, 8, 10 or 16.
pub fn format(value: i64, radix: u32) -> Result<String> {
    Ok(Radix::try_from(radix)?.format(value))
}

/// Parse the leading digits of `text` in the given base.
///
/// # Errors
/// - `PrimitiveError::InvalidRadix` if `radix` is not 2, 8, 10 or 16.
/// - `PrimitiveError::NotANumber` if no valid digit starts the input.
/// - `PrimitiveError::Overflow` if the digits do not fit in an `i64`.
pub fn parse(text: &str, radix: u32) -> Result<i64> {
    Radix::try_from(radix)?.parse(text)
}

impl Radix {
    /// Digits of `value` in this base, lowercase, with a leading `-` for negatives.
    pub fn format(self, value: i64) -> String {
        let base = u64::from(self.value());
        // unsigned_abs keeps i64::MIN representable.
        let mut magnitude = value.unsigned_abs();
        if magnitude == 0 {
            return "0".to_string();
        }

        let mut reversed = Vec::with_capacity(65);
        while magnitude > 0 {
            reversed.push(self.digit_char((magnitude % base) as u32));
            magnitude /= base;
        }
        if value < 0 {
            reversed.push('-');
        }
        reversed.into_iter().rev().collect()
    }

    /// Lenient parse of `text` in this base.
    ///
    /// Leading whitespace is skipped, then one optional `+`/`-`, then (base 16 only)
    /// an optional `0x`/`0X`. Digits are consumed until the first character that is
    /// not a digit in this base; the remainder is ignored. There is no octal
    /// inference from a leading `0`: `"0100"` in base 10 is 100.
    pub fn parse(self, text: &str) -> Result<i64> {
        let body = text.trim_start();
        let (negative, body) = split_sign(body);
        let body = match self {
            Radix::Hexadecimal => strip_hex_prefix(body),
            _ => body,
        };

        let base = u64::from(self.value());
        let mut magnitude: u64 = 0;
        let mut consumed = 0;
        for ch in body.chars() {
            let Some(digit) = self.digit_value(ch) else {
                break;
            };
            magnitude = magnitude
                .checked_mul(base)
                .and_then(|m| m.checked_add(u64::from(digit)))
                .ok_or_else(|| self.overflow(text))?;
            consumed += ch.len_utf8();
        }

        if consumed == 0 {
            return Err(PrimitiveError::NotANumber {
                input: text.to_string(),
                radix: self,
            });
        }
        if consumed < body.len() {
            debug!(
                input = text,
                radix = self.value(),
                ignored = &body[consumed..],
                "parse stopped at first non-digit"
            );
        }

        if negative {
            // -(2^63) is the one magnitude that only fits as a negative number.
            if magnitude == i64::MIN.unsigned_abs() {
                return Ok(i64::MIN);
            }
            i64::try_from(magnitude)
                .map(|m| -m)
                .map_err(|_| self.overflow(text))
        } else {
            i64::try_from(magnitude).map_err(|_| self.overflow(text))
        }
    }

    fn overflow(self, text: &str) -> PrimitiveError {
        PrimitiveError::Overflow {
            input: text.to_string(),
            radix: self,
        }
    }
}

fn split_sign(s: &str) -> (bool, &str) {
    if let Some(rest) = s.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = s.strip_prefix('+') {
        (false, rest)
    } else {
        (false, s)
    }
}

fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}
