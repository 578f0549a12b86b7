//! Carry-propagating addition and borrow-propagating subtraction, mod 2^64.

use std::ops::{Add, Neg, Sub};

use crate::value::LIMB_BITS;
use crate::Int64;

// ============================================================================
// Low-level helpers
// ============================================================================

/// Add with carry: (result, carry) = a + b + carry_in
#[inline(always)]
const fn adc(a: u32, b: u32, carry: u32) -> (u32, u32) {
    let tmp = a as u64 + b as u64 + carry as u64;
    (tmp as u32, (tmp >> LIMB_BITS) as u32)
}

/// Subtract with borrow: (result, borrow) = a - b - borrow_in
#[inline(always)]
const fn sbb(a: u32, b: u32, borrow: u32) -> (u32, u32) {
    let tmp = (a as u64).wrapping_sub(b as u64).wrapping_sub(borrow as u64);
    (tmp as u32, (tmp >> 63) as u32) // borrow is 0 or 1
}

// ============================================================================
// Int64 arithmetic
// ============================================================================

impl Int64 {
    /// Wrapping addition. A carry out of the high limb is discarded.
    ///
    /// ```
    /// use int64::Int64;
    ///
    /// let sum = Int64::from(42i64).add(Int64::from(10i64));
    /// assert_eq!(sum.to_unsigned_string(), "52");
    /// assert_eq!(Int64::MAX_UNSIGNED.add(Int64::ONE), Int64::ZERO);
    /// ```
    pub const fn add(self, other: Int64) -> Int64 {
        let (low, carry) = adc(self.low, other.low, 0);
        let (high, _) = adc(self.high, other.high, carry);
        Int64::from_limbs(high, low)
    }

    /// Wrapping subtraction. A borrow out of the high limb is discarded.
    ///
    /// ```
    /// use int64::Int64;
    ///
    /// let diff = Int64::from(10i64).subtract(Int64::from(42i64));
    /// assert_eq!(diff.to_signed_string(), "-32");
    /// ```
    pub const fn subtract(self, other: Int64) -> Int64 {
        let (low, borrow) = sbb(self.low, other.low, 0);
        let (high, _) = sbb(self.high, other.high, borrow);
        Int64::from_limbs(high, low)
    }

    /// Two's-complement negation: complement, then add one.
    /// `MIN_SIGNED` negates to itself.
    #[inline]
    pub const fn negate(self) -> Int64 {
        self.complement().add(Int64::ONE)
    }
}

impl Add for Int64 {
    type Output = Int64;

    fn add(self, rhs: Int64) -> Int64 {
        Int64::add(self, rhs)
    }
}

impl Sub for Int64 {
    type Output = Int64;

    fn sub(self, rhs: Int64) -> Int64 {
        self.subtract(rhs)
    }
}

impl Neg for Int64 {
    type Output = Int64;

    fn neg(self) -> Int64 {
        self.negate()
    }
}
