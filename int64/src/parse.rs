//! Hex and bit-string parsing. Decimal parsing is not provided.

use crate::error::ParseError;
use crate::Int64;

const MAX_HEX_DIGITS: usize = 16;
const MAX_BIT_DIGITS: usize = 64;

/// Fold `digits` MSB-first into an `Int64`. `radix` must be a power of two.
fn parse_radix(digits: &str, radix: u32, max: usize) -> Result<Int64, ParseError> {
    if digits.is_empty() {
        return Err(ParseError::Empty);
    }
    let len = digits.chars().count();
    if len > max {
        return Err(ParseError::TooLong { len, max });
    }
    let bits_per_digit = radix.trailing_zeros();
    let mut value = Int64::ZERO;
    for (position, digit) in digits.chars().enumerate() {
        let d = digit
            .to_digit(radix)
            .ok_or(ParseError::InvalidDigit { digit, position })?;
        value = value.shift_left_by(bits_per_digit).or(Int64::from(d));
    }
    Ok(value)
}

impl Int64 {
    /// Parse up to 16 hex digits (either case), with an optional `0x` or `0X` prefix.
    ///
    /// ```
    /// use int64::Int64;
    ///
    /// let v = Int64::from_hex_str("0xDEADbeef00000001").unwrap();
    /// assert_eq!(v.to_limbs(), (0xDEAD_BEEF, 1));
    /// assert!(Int64::from_hex_str("12345678123456789").is_err());
    /// ```
    pub fn from_hex_str(s: &str) -> Result<Int64, ParseError> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        parse_radix(digits, 16, MAX_HEX_DIGITS).inspect_err(|err| {
            tracing::trace!(input = s, %err, "rejected hex Int64");
        })
    }

    /// Parse up to 64 `'0'`/`'1'` characters, most significant bit first.
    pub fn from_bit_str(s: &str) -> Result<Int64, ParseError> {
        parse_radix(s, 2, MAX_BIT_DIGITS).inspect_err(|err| {
            tracing::trace!(input = s, %err, "rejected bit-string Int64");
        })
    }

    /// Rebuild a value from the output of [`Int64::to_bits`].
    pub fn from_bits(bits: &[bool; 64]) -> Int64 {
        bits.iter().fold(Int64::ZERO, |acc, &bit| {
            acc.shift_left_by(1).or(Int64::from(u32::from(bit)))
        })
    }
}
