//! The `Int64` value type: two unsigned 32-bit limbs, `high` and `low`.
//!
//! The represented unsigned magnitude is `high * 2^32 + low`. The same bits
//! read as two's complement give the signed view; signedness is only a choice
//! of rendering or comparison function, never a property of the value.

/// Mask selecting one limb's worth of bits from a wider integer.
pub(crate) const LIMB_MASK: u64 = 0xFFFF_FFFF;

/// `2^32`, the weight of the high limb.
pub(crate) const LIMB_RADIX: u64 = 1 << 32;

/// Bit width of one limb.
pub(crate) const LIMB_BITS: u32 = 32;

/// Sign bit of the high limb.
pub(crate) const SIGN_BIT: u32 = 0x8000_0000;

/// A 64-bit integer stored as two 32-bit limbs.
///
/// Immutable value semantics: every operation returns a new `Int64`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Int64 {
    pub(crate) high: u32,
    pub(crate) low: u32,
}

impl Int64 {
    /// Zero in both views.
    pub const ZERO: Int64 = Int64::from_limbs(0, 0);
    /// One in both views.
    pub const ONE: Int64 = Int64::from_limbs(0, 1);
    /// All 64 bits set: `2^64 - 1` unsigned, `-1` signed.
    pub const MAX_UNSIGNED: Int64 = Int64::from_limbs(u32::MAX, u32::MAX);
    /// Largest signed value: `2^63 - 1`.
    pub const MAX_SIGNED: Int64 = Int64::from_limbs(0x7FFF_FFFF, u32::MAX);
    /// Smallest signed value: `-2^63`, only the sign bit set.
    pub const MIN_SIGNED: Int64 = Int64::from_limbs(SIGN_BIT, 0);

    /// Build from explicit high and low limbs, stored verbatim.
    ///
    /// ```
    /// use int64::Int64;
    ///
    /// let v = Int64::from_limbs(0xDEAD_BEEF, 0xBAAA_AAAD);
    /// assert_eq!(v.to_hex(), "deadbeefbaaaaaad");
    /// ```
    #[inline]
    pub const fn from_limbs(high: u32, low: u32) -> Self {
        Self { high, low }
    }

    /// Build from two parts that may carry bits above 32; each part is masked
    /// down to its low 32 bits rather than rejected.
    #[inline]
    pub const fn from_wrapping_limbs(high: u64, low: u64) -> Self {
        Self::from_limbs((high & LIMB_MASK) as u32, (low & LIMB_MASK) as u32)
    }

    /// Build from a signed host integer.
    ///
    /// Non-negative values split into `low = n mod 2^32` and
    /// `high = (n - low) / 2^32`. Negative values take the same split of
    /// `|n|` and then apply two's-complement negation, so the borrow into the
    /// high limb follows the arithmetic engine's carry rules.
    ///
    /// Hosts that only represent integers exactly up to `2^53 - 1` cannot
    /// promise exact results beyond that range; with `i64` as the host type
    /// every input is exact.
    ///
    /// ```
    /// use int64::Int64;
    ///
    /// assert_eq!(Int64::from_signed_integer(42).to_limbs(), (0, 42));
    /// assert_eq!(Int64::from_signed_integer(-1), Int64::MAX_UNSIGNED);
    /// ```
    pub fn from_signed_integer(n: i64) -> Self {
        let magnitude = n.unsigned_abs();
        let low = magnitude & LIMB_MASK;
        let high = (magnitude - low) / LIMB_RADIX;
        let value = Self::from_limbs(high as u32, low as u32);
        if n < 0 {
            value.negate()
        } else {
            value
        }
    }

    #[inline]
    pub const fn high(self) -> u32 {
        self.high
    }

    #[inline]
    pub const fn low(self) -> u32 {
        self.low
    }

    /// The `(high, low)` limb pair.
    #[inline]
    pub const fn to_limbs(self) -> (u32, u32) {
        (self.high, self.low)
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.high == 0 && self.low == 0
    }

    /// Whether the two's-complement view is negative (top bit set).
    #[inline]
    pub const fn is_negative(self) -> bool {
        self.high & SIGN_BIT != 0
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<(u32, u32)> for Int64 {
    fn from((high, low): (u32, u32)) -> Self {
        Self::from_limbs(high, low)
    }
}

impl From<u32> for Int64 {
    fn from(v: u32) -> Self {
        Self::from_limbs(0, v)
    }
}

impl From<i32> for Int64 {
    fn from(v: i32) -> Self {
        Self::from_signed_integer(i64::from(v))
    }
}

impl From<i64> for Int64 {
    fn from(v: i64) -> Self {
        Self::from_signed_integer(v)
    }
}

impl From<u64> for Int64 {
    fn from(v: u64) -> Self {
        Self::from_wrapping_limbs(v >> LIMB_BITS, v)
    }
}

impl From<Int64> for u64 {
    fn from(v: Int64) -> Self {
        (u64::from(v.high) << LIMB_BITS) | u64::from(v.low)
    }
}

impl From<Int64> for i64 {
    fn from(v: Int64) -> Self {
        u64::from(v) as i64
    }
}

// ============================================================================
// Tests
// ============================================================================
