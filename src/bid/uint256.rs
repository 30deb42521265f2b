#[cfg(test)]
use core::cmp::Ordering;

/// A 256-bit unsigned integer.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[allow(non_camel_case_types)]
pub(super) struct u256 {
    lo: u128,
    hi: u128,
}

impl u256 {
    /// Creates a `u256` from its high and low halves.
    pub const fn from_parts(hi: u128, lo: u128) -> Self {
        Self { lo, hi }
    }

    /// Returns the integer as 64-bit words, least significant
    /// first.
    pub const fn to_words(self) -> [u64; 4] {
        [
            self.lo as u64,
            (self.lo >> 64) as u64,
            self.hi as u64,
            (self.hi >> 64) as u64,
        ]
    }
}

#[cfg(test)]
impl u256 {
    /// Compares `self` and `other`.
    pub fn const_cmp(self, other: Self) -> Ordering {
        match self.hi.cmp(&other.hi) {
            Ordering::Equal => self.lo.cmp(&other.lo),
            ord => ord,
        }
    }

    /// Returns the minimum number of bits required to represent
    /// the integer.
    ///
    /// It returns 0 for zero.
    pub fn bitlen(self) -> u32 {
        if self.hi != 0 {
            256 - self.hi.leading_zeros()
        } else {
            128 - self.lo.leading_zeros()
        }
    }

    /// Returns `ceil(self / 2)`.
    ///
    /// Cannot overflow for the values under test.
    pub fn half_round_up(self) -> Self {
        let lo = self.lo.wrapping_add(1);
        let hi = self.hi + u128::from(lo == 0);
        Self {
            lo: (lo >> 1) | (hi << 127),
            hi: hi >> 1,
        }
    }
}
