//! Unsigned and signed total orderings.
//!
//! `Int64` deliberately has no `Ord` impl: the same bits order differently
//! under the two views, so callers pick one.

use std::cmp::Ordering;

use crate::Int64;

impl Int64 {
    /// Compare as unsigned magnitudes: high limb first, low limb on a tie.
    pub fn unsigned_cmp(self, other: Int64) -> Ordering {
        self.high
            .cmp(&other.high)
            .then_with(|| self.low.cmp(&other.low))
    }

    /// Compare as two's-complement signed values.
    ///
    /// ```
    /// use std::cmp::Ordering;
    /// use int64::Int64;
    ///
    /// let minus_one = Int64::from(-1i64);
    /// assert_eq!(minus_one.signed_cmp(Int64::ONE), Ordering::Less);
    /// assert_eq!(minus_one.unsigned_cmp(Int64::ONE), Ordering::Greater);
    /// ```
    pub fn signed_cmp(self, other: Int64) -> Ordering {
        match (self.is_negative(), other.is_negative()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => self.unsigned_cmp(other),
        }
    }
}
