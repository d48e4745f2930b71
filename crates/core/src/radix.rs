//! Positional-notation decoding for values written in an arbitrary base.
//!
//! Digits `0`–`9` carry their decimal value and ASCII letters continue the
//! sequence case-insensitively (`a`/`A` = 10, ..., `z`/`Z` = 35), so any base
//! from 2 to 36 can be decoded.
//!
//! Decoding uses Horner's method: characters are consumed most significant
//! first and the running value is updated as `value * base + digit`.
//!
//! # Example
//!
//! ```
//! use polyfit_core::radix::decode;
//!
//! assert_eq!(decode("111", 2).unwrap(), 7);
//! assert_eq!(decode("ff", 16).unwrap(), 255);
//! ```

use thiserror::Error;

/// Smallest supported base.
pub const MIN_BASE: u32 = 2;

/// Largest supported base (ten digits plus twenty-six letters).
pub const MAX_BASE: u32 = 36;

/// Errors that can occur while decoding a digit string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("cannot decode an empty string")]
    Empty,

    #[error("base {base} is outside the supported range 2..=36")]
    InvalidBase { base: u32 },

    #[error("character {ch:?} at position {position} is not a digit or letter")]
    InvalidCharacter { ch: char, position: usize },

    #[error("digit {ch:?} has value {digit}, which is not valid in base {base}")]
    DigitOutOfRange { ch: char, digit: u32, base: u32 },

    #[error("decoded value does not fit in 64 bits")]
    Overflow,
}

/// Returns the digit value of a character, independent of any base.
///
/// Returns `None` for characters that are neither ASCII digits nor ASCII
/// letters.
#[must_use]
pub fn digit_value(ch: char) -> Option<u32> {
    match ch {
        '0'..='9' => Some(u32::from(ch) - u32::from('0')),
        'a'..='z' => Some(u32::from(ch) - u32::from('a') + 10),
        'A'..='Z' => Some(u32::from(ch) - u32::from('A') + 10),
        _ => None,
    }
}

/// Decodes `value`, written in the given `base`, into an integer.
///
/// # Errors
///
/// Returns an error if the string is empty, the base is outside
/// [`MIN_BASE`]..=[`MAX_BASE`], a character is not a digit or letter, a
/// digit is not valid for the base, or the result overflows `u64`.
pub fn decode(value: &str, base: u32) -> Result<u64, DecodeError> {
    if !(MIN_BASE..=MAX_BASE).contains(&base) {
        return Err(DecodeError::InvalidBase { base });
    }
    if value.is_empty() {
        return Err(DecodeError::Empty);
    }

    value
        .chars()
        .enumerate()
        .try_fold(0_u64, |acc, (position, ch)| {
            let digit =
                digit_value(ch).ok_or(DecodeError::InvalidCharacter { ch, position })?;
            if digit >= base {
                return Err(DecodeError::DigitOutOfRange { ch, digit, base });
            }

            acc.checked_mul(u64::from(base))
                .and_then(|shifted| shifted.checked_add(u64::from(digit)))
                .ok_or(DecodeError::Overflow)
        })
}

/// A value still written in its source base.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct EncodedValue {
    pub base: u32,
    pub value: String,
}

impl EncodedValue {
    /// Creates an encoded value from its base and digit string.
    pub fn new(base: u32, value: impl Into<String>) -> Self {
        Self {
            base,
            value: value.into(),
        }
    }

    /// Decodes the value into an integer.
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`decode`].
    pub fn decode(&self) -> Result<u64, DecodeError> {
        decode(&self.value, self.base)
    }
}
