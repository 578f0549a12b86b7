//! Limb-wise logical operations.

use std::ops::{BitAnd, BitOr, BitXor, Not};

use crate::Int64;

impl Int64 {
    /// Bitwise AND.
    #[inline]
    pub const fn and(self, other: Int64) -> Int64 {
        Int64::from_limbs(self.high & other.high, self.low & other.low)
    }

    /// Bitwise OR.
    #[inline]
    pub const fn or(self, other: Int64) -> Int64 {
        Int64::from_limbs(self.high | other.high, self.low | other.low)
    }

    /// Bitwise XOR.
    ///
    /// ```
    /// use int64::Int64;
    ///
    /// let v = Int64::from_limbs(0xDEAD_BEEF, 0xBAAA_AAAD).xor(Int64::from(42i64));
    /// assert_eq!(v.to_hex(), "deadbeefbaaaaa87");
    /// ```
    #[inline]
    pub const fn xor(self, other: Int64) -> Int64 {
        Int64::from_limbs(self.high ^ other.high, self.low ^ other.low)
    }

    /// Bitwise NOT of both limbs.
    #[inline]
    pub const fn complement(self) -> Int64 {
        Int64::from_limbs(!self.high, !self.low)
    }
}

impl BitAnd for Int64 {
    type Output = Int64;

    fn bitand(self, rhs: Int64) -> Int64 {
        self.and(rhs)
    }
}

impl BitOr for Int64 {
    type Output = Int64;

    fn bitor(self, rhs: Int64) -> Int64 {
        self.or(rhs)
    }
}

impl BitXor for Int64 {
    type Output = Int64;

    fn bitxor(self, rhs: Int64) -> Int64 {
        self.xor(rhs)
    }
}

impl Not for Int64 {
    type Output = Int64;

    fn not(self) -> Int64 {
        self.complement()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_and() {
        let a = Int64::from_limbs(0xFF00_FF00, 0x0000_FFFF);
        let b = Int64::from_limbs(0x0F0F_0F0F, 0xFFFF_0000);
        assert_eq!(a.and(b), Int64::from_limbs(0x0F00_0F00, 0));
        assert_eq!(a & b, a.and(b));
    }

    #[test]
    fn test_or() {
        let a = Int64::from_limbs(0xF000_0000, 0x0000_000F);
        let b = Int64::from_limbs(0x0000_000F, 0xF000_0000);
        assert_eq!(a.or(b), Int64::from_limbs(0xF000_000F, 0xF000_000F));
        assert_eq!(a | b, a.or(b));
    }

    #[test]
    fn test_xor_self_is_zero() {
        let a = Int64::from_limbs(0x1234_5678, 0x9ABC_DEF0);
        assert!(a.xor(a).is_zero());
        assert_eq!(a ^ Int64::ZERO, a);
    }

    #[test]
    fn test_complement() {
        assert_eq!(Int64::ZERO.complement(), Int64::MAX_UNSIGNED);
        assert_eq!(
            Int64::from_limbs(0x0000_FFFF, 0xAAAA_AAAA).complement(),
            Int64::from_limbs(0xFFFF_0000, 0x5555_5555)
        );
        assert_eq!(!!Int64::ONE, Int64::ONE);
    }
}
