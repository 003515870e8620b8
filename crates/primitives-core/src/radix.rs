//! The set of bases supported by the formatter: 2, 8, 10 and 16.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::PrimitiveError;

/// A numeric base. Any integer outside {2, 8, 10, 16} is rejected at construction,
/// so every function taking a `Radix` is total with respect to the base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Radix {
    Binary,
    Octal,
    #[default]
    Decimal,
    Hexadecimal,
}

impl Radix {
    /// All supported bases in ascending order.
    pub const ALL: [Radix; 4] = [
        Radix::Binary,
        Radix::Octal,
        Radix::Decimal,
        Radix::Hexadecimal,
    ];

    /// The base as an integer.
    pub const fn value(self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Octal => 8,
            Radix::Decimal => 10,
            Radix::Hexadecimal => 16,
        }
    }

    /// Value of `ch` as a digit in this base, or `None` if it is not one.
    /// Letters are accepted in either case.
    pub fn digit_value(self, ch: char) -> Option<u32> {
        ch.to_digit(self.value())
    }

    /// Lowercase digit character for `digit`, which must be below the base.
    pub(crate) fn digit_char(self, digit: u32) -> char {
        debug_assert!(digit < self.value());
        char::from_digit(digit, self.value()).unwrap_or('?')
    }
}

impl TryFrom<u32> for Radix {
    type Error = PrimitiveError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(Radix::Binary),
            8 => Ok(Radix::Octal),
            10 => Ok(Radix::Decimal),
            16 => Ok(Radix::Hexadecimal),
            other => Err(PrimitiveError::InvalidRadix(other)),
        }
    }
}

impl From<Radix> for u32 {
    fn from(radix: Radix) -> Self {
        radix.value()
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
