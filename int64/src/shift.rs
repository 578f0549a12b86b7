//! Logical shifts and rotations that move bits across the limb boundary.
//!
//! Every 32-bit shift below uses an amount in `1..32`. Amounts of 0, 32 and
//! 64 or more are handled as identity, limb move/swap or zero before any
//! limb is shifted, since a 32-bit shift by 32 is not defined.

use std::ops::{Shl, Shr};

use crate::value::LIMB_BITS;
use crate::Int64;

/// Top `32 - n` bits of `upper` shifted up, filled with the top `n` bits of
/// `lower`: `(upper << n) | (lower >> (32 - n))`.
#[inline(always)]
const fn funnel(upper: u32, lower: u32, n: u32) -> u32 {
    debug_assert!(n > 0 && n < LIMB_BITS);
    (upper << n) | (lower >> (LIMB_BITS - n))
}

impl Int64 {
    /// Shift left by `n` bits, filling with zeros. `n >= 64` yields zero.
    ///
    /// ```
    /// use int64::Int64;
    ///
    /// assert_eq!(Int64::ONE.shift_left_by(40).to_limbs(), (1 << 8, 0));
    /// ```
    pub const fn shift_left_by(self, n: u32) -> Int64 {
        match n {
            0 => self,
            1..=31 => Int64::from_limbs(funnel(self.high, self.low, n), self.low << n),
            32 => Int64::from_limbs(self.low, 0),
            33..=63 => Int64::from_limbs(self.low << (n - LIMB_BITS), 0),
            _ => Int64::ZERO,
        }
    }

    /// Logical shift right by `n` bits, zero-filling from the top.
    /// `n >= 64` yields zero.
    ///
    /// ```
    /// use int64::Int64;
    ///
    /// let v = Int64::from_limbs(0xCAFE_BABE, 0xFFFF_FFFF);
    /// assert_eq!(v.shift_right_zf_by(32), Int64::from_limbs(0, 0xCAFE_BABE));
    /// ```
    pub const fn shift_right_zf_by(self, n: u32) -> Int64 {
        match n {
            0 => self,
            1..=31 => Int64::from_limbs(
                self.high >> n,
                funnel(self.high, self.low, LIMB_BITS - n),
            ),
            32 => Int64::from_limbs(0, self.high),
            33..=63 => Int64::from_limbs(0, self.high >> (n - LIMB_BITS)),
            _ => Int64::ZERO,
        }
    }

    /// Rotate left by `n mod 64` bits.
    pub const fn rotate_left_by(self, n: u32) -> Int64 {
        let Int64 { high, low } = self;
        match n % 64 {
            0 => self,
            32 => Int64::from_limbs(low, high),
            n if n < LIMB_BITS => Int64::from_limbs(funnel(high, low, n), funnel(low, high, n)),
            n => {
                let m = n - LIMB_BITS;
                Int64::from_limbs(funnel(low, high, m), funnel(high, low, m))
            }
        }
    }

    /// Rotate right by `n mod 64` bits.
    pub const fn rotate_right_by(self, n: u32) -> Int64 {
        let Int64 { high, low } = self;
        match n % 64 {
            0 => self,
            32 => Int64::from_limbs(low, high),
            n if n < LIMB_BITS => {
                let k = LIMB_BITS - n;
                Int64::from_limbs(funnel(low, high, k), funnel(high, low, k))
            }
            n => {
                let k = LIMB_BITS - (n - LIMB_BITS);
                Int64::from_limbs(funnel(high, low, k), funnel(low, high, k))
            }
        }
    }
}

impl Shl<u32> for Int64 {
    type Output = Int64;

    fn shl(self, n: u32) -> Int64 {
        self.shift_left_by(n)
    }
}

impl Shr<u32> for Int64 {
    type Output = Int64;

    fn shr(self, n: u32) -> Int64 {
        self.shift_right_zf_by(n)
    }
}
