//! Decimal, hexadecimal and bit rendering.

use std::fmt;

use crate::value::{LIMB_BITS, LIMB_RADIX};
use crate::Int64;

/// Longest unsigned decimal rendering: `18446744073709551615`.
const MAX_DECIMAL_DIGITS: usize = 20;

impl Int64 {
    /// Unsigned decimal string, no leading zeros.
    ///
    /// Digits come off the bottom one at a time. Each step folds
    /// `high mod 10` into the low limb as `combined = (high mod 10) * 2^32 + low`,
    /// which stays below `10 * 2^32`, so no intermediate ever needs the full
    /// 64-bit magnitude.
    ///
    /// ```
    /// use int64::Int64;
    ///
    /// assert_eq!(Int64::from_limbs(0x8000_0000, 0).to_unsigned_string(), "9223372036854775808");
    /// assert_eq!(Int64::ZERO.to_unsigned_string(), "0");
    /// ```
    pub fn to_unsigned_string(self) -> String {
        let mut high = u64::from(self.high);
        let mut low = u64::from(self.low);
        let mut digits = Vec::with_capacity(MAX_DECIMAL_DIGITS);
        while high != 0 || low >= 10 {
            let combined = (high % 10) * LIMB_RADIX + low;
            digits.push((combined % 10) as u8);
            low = combined / 10;
            high /= 10;
        }
        digits.push(low as u8);
        digits.iter().rev().map(|&d| char::from(b'0' + d)).collect()
    }

    /// Signed decimal string of the two's-complement view.
    ///
    /// ```
    /// use int64::Int64;
    ///
    /// assert_eq!(Int64::MAX_UNSIGNED.to_signed_string(), "-1");
    /// assert_eq!(Int64::MIN_SIGNED.to_signed_string(), "-9223372036854775808");
    /// ```
    pub fn to_signed_string(self) -> String {
        if self.is_negative() {
            format!("-{}", self.negate().to_unsigned_string())
        } else {
            self.to_unsigned_string()
        }
    }

    /// Exactly 16 lowercase hex digits, high limb first.
    pub fn to_hex(self) -> String {
        format!("{:08x}{:08x}", self.high, self.low)
    }

    /// Exactly 64 `'0'`/`'1'` characters, most significant bit first.
    pub fn to_bit_string(self) -> String {
        format!("{:032b}{:032b}", self.high, self.low)
    }

    /// The 64 bits, most significant bit of `high` first through least
    /// significant bit of `low` last.
    pub fn to_bits(self) -> [bool; 64] {
        let mut bits = [false; 64];
        for (i, bit) in bits.iter_mut().enumerate() {
            let i = i as u32;
            *bit = if i < LIMB_BITS {
                (self.high >> (LIMB_BITS - 1 - i)) & 1 == 1
            } else {
                (self.low >> (2 * LIMB_BITS - 1 - i)) & 1 == 1
            };
        }
        bits
    }
}

// ============================================================================
// Trait impls
// ============================================================================

impl fmt::Display for Int64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            f.pad_integral(false, "", &self.negate().to_unsigned_string())
        } else {
            f.pad_integral(true, "", &self.to_unsigned_string())
        }
    }
}

impl fmt::Debug for Int64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Int64(0x{})", self.to_hex())
    }
}

impl fmt::LowerHex for Int64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0x", &self.to_hex())
    }
}

impl fmt::Binary for Int64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0b", &self.to_bit_string())
    }
}
