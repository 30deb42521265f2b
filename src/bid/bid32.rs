use core::{fmt, mem::size_of};

use crate::util::const_assert;

/// A 32-bit decimal floating point number.
///
/// (–1)^sign * coefficient * 10^exp
#[derive(Copy, Clone, Eq, PartialEq)]
#[repr(transparent)]
pub struct Bid32(
    /// ## Form 1
    ///
    /// s 00eeeeee (0)ttt tttttttttt tttttttttt
    /// s 01eeeeee (0)ttt tttttttttt tttttttttt
    /// s 10eeeeee (0)ttt tttttttttt tttttttttt
    ///
    /// ## Form 2
    ///
    /// s 1100eeeeee (100)t tttttttttt tttttttttt
    /// s 1101eeeeee (100)t tttttttttt tttttttttt
    /// s 1110eeeeee (100)t tttttttttt tttttttttt
    u32,
);
const_assert!(size_of::<Bid32>() == 32 / 8);

// Layout and limits.
impl Bid32 {
    /// The storage width in bits.
    const K: u32 = (size_of::<Bid32>() * 8) as u32;
    /// The size of the sign bit in bits.
    const S: u32 = 1;
    /// The width of the exponent continuation in bits.
    const W: u32 = Self::K / 16 + 4;
    /// The width of the trailing significand in bits.
    const T: u32 = 15 * (Self::K / 16) - 10;
    /// The number of digits of precision.
    pub(crate) const P: u32 = 9 * (Self::K / 32) - 2;

    /// The bias added to the encoded exponent in order to
    /// convert it to the "actual" exponent.
    pub(crate) const BIAS: i16 = Self::EMAX + (Self::P as i16) - 2;
    /// The maximum value of the biased encoded exponent.
    pub(crate) const LIMIT: u16 = (3 << Self::W) - 1;
    /// The maximum allowed adjusted exponent.
    pub(crate) const EMAX: i16 = 3 << (Self::W - 1);
    /// The minimum allowed adjusted exponent for a normal value.
    pub(crate) const EMIN: i16 = 1 - Self::EMAX;
    /// The minimum allowed unbiased exponent.
    pub(crate) const ETINY: i16 = Self::EMIN - (Self::P as i16 - 1);
    /// The largest allowed coefficient.
    pub(crate) const MAX_COEFF: u32 = 10u32.pow(Self::P) - 1;

    const SIGN_SHIFT: u32 = Self::K - Self::S;
    const SIGN_MASK: u32 = 1 << Self::SIGN_SHIFT;

    // Top N bits of the combination field.
    //
    // - Top 4 set: inf
    // - Top 5 set: qnan
    // - Top 6 set: snan
    const COMB_TOP2: u32 = 0x3 << (Self::SIGN_SHIFT - 2);
    const COMB_TOP4: u32 = 0xf << (Self::SIGN_SHIFT - 4);
    const COMB_TOP5: u32 = 0x1f << (Self::SIGN_SHIFT - 5);
    const COMB_TOP6: u32 = 0x3f << (Self::SIGN_SHIFT - 6);

    /// The number of bits in the exponent.
    const EXP_BITS: u32 = Self::W + 2;
    /// Masks only the used bits in an exponent.
    const EXP_MASK: u16 = (1 << Self::EXP_BITS) - 1;

    /// The shift and mask for a form one exponent.
    const FORM1_EXP_SHIFT: u32 = Self::SIGN_SHIFT - Self::EXP_BITS;
    const FORM1_EXP_MASK: u32 = (Self::EXP_MASK as u32) << Self::FORM1_EXP_SHIFT;
    /// The shift and mask for a form two exponent.
    const FORM2_EXP_SHIFT: u32 = Self::FORM1_EXP_SHIFT - 2;
    const FORM2_EXP_MASK: u32 = Self::FORM1_EXP_MASK >> 2;

    /// Gathers the bits in a form one coefficient.
    const FORM1_COEFF_MASK: u32 = (1 << (3 + Self::T)) - 1;
    /// Gathers the explicit bits in a form two coefficient.
    const FORM2_COEFF_MASK: u32 = (1 << (1 + Self::T)) - 1;
    /// The implicit bits in a form two coefficient.
    const FORM2_IMPLICIT_COEFF_BITS: u32 = 0x8 << Self::T;

    /// Masks a NaN's payload.
    pub(crate) const PAYLOAD_MASK: u32 = (1 << Self::T) - 1;
    /// The maximum allowed NaN payload.
    pub(crate) const PAYLOAD_MAX: u32 = 999_999;
}

// To/from reprs.
impl Bid32 {
    /// Creates a `Bid32` from its raw bits.
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Returns the raw bits.
    pub const fn to_bits(self) -> u32 {
        self.0
    }

    /// Creates a `Bid32` from its sign, unbiased exponent, and
    /// coefficient.
    ///
    /// The exponent must be in [[`ETINY`][Self::ETINY],
    /// [`EMAX`][Self::EMAX] - ([`P`][Self::P] - 1)] and the
    /// coefficient at most [`MAX_COEFF`][Self::MAX_COEFF]; the
    /// encoding is exact, never rounded.
    pub const fn from_parts(sign: bool, exp: i16, coeff: u32) -> Self {
        debug_assert!(coeff <= Self::MAX_COEFF);
        debug_assert!(exp >= Self::ETINY);
        debug_assert!(exp <= Self::EMAX - (Self::P as i16) + 1);

        // `exp` is in [ETINY, EMAX-P+1], so the biased exponent
        // cannot be negative.
        #[allow(clippy::cast_sign_loss)]
        let biased = (exp + Self::BIAS) as u32;

        let mut bits = (sign as u32) << Self::SIGN_SHIFT;
        if coeff <= Self::FORM1_COEFF_MASK {
            bits |= biased << Self::FORM1_EXP_SHIFT;
            bits |= coeff;
        } else {
            bits |= Self::COMB_TOP2;
            bits |= biased << Self::FORM2_EXP_SHIFT;
            bits |= coeff & Self::FORM2_COEFF_MASK;
        }
        Self(bits)
    }

    /// Creates a `Bid32` from `coeff` and `exp`.
    ///
    /// The result is always exact.
    pub const fn new(coeff: i32, exp: i16) -> Self {
        Self::from_parts(coeff < 0, exp, coeff.unsigned_abs())
    }

    /// Creates an infinity with `sign`.
    pub const fn inf(sign: bool) -> Self {
        let mut bits = (sign as u32) << Self::SIGN_SHIFT;
        bits |= Self::COMB_TOP4;
        Self(bits)
    }

    /// Creates a quiet NaN with `sign` and a diagnostic
    /// `payload`.
    pub const fn nan(sign: bool, payload: u32) -> Self {
        debug_assert!(payload <= Self::PAYLOAD_MAX);

        let mut bits = (sign as u32) << Self::SIGN_SHIFT;
        bits |= Self::COMB_TOP5;
        bits |= payload & Self::PAYLOAD_MASK;
        Self(bits)
    }

    /// Creates a signaling NaN with `sign` and a diagnostic
    /// `payload`.
    pub const fn snan(sign: bool, payload: u32) -> Self {
        debug_assert!(payload <= Self::PAYLOAD_MAX);

        let mut bits = (sign as u32) << Self::SIGN_SHIFT;
        bits |= Self::COMB_TOP6;
        bits |= payload & Self::PAYLOAD_MASK;
        Self(bits)
    }
}

// Classification.
impl Bid32 {
    /// Reports whether the sign bit is set.
    pub const fn signbit(self) -> bool {
        (self.0 & Self::SIGN_MASK) != 0
    }

    /// Reports whether the number is encoded in the first form,
    /// with a small coefficient.
    const fn is_form1(self) -> bool {
        self.0 & Self::COMB_TOP2 != Self::COMB_TOP2
    }

    /// Reports whether the number is infinite or NaN.
    const fn is_special(self) -> bool {
        self.0 & Self::COMB_TOP4 == Self::COMB_TOP4
    }

    /// Reports whether the number is neither infinite nor NaN.
    pub const fn is_finite(self) -> bool {
        !self.is_special()
    }

    /// Reports whether the number is either positive or negative
    /// infinity.
    pub const fn is_infinite(self) -> bool {
        self.0 & Self::COMB_TOP5 == Self::COMB_TOP4
    }

    /// Reports whether the number is a NaN.
    pub const fn is_nan(self) -> bool {
        self.0 & Self::COMB_TOP5 == Self::COMB_TOP5
    }

    /// Reports whether the number is a signaling NaN.
    pub const fn is_snan(self) -> bool {
        self.0 & Self::COMB_TOP6 == Self::COMB_TOP6
    }
}

// Field accessors.
impl Bid32 {
    /// Returns the biased exponent.
    ///
    /// The result is in [0, [`LIMIT`][Self::LIMIT]].
    pub(crate) const fn biased_exp(self) -> u16 {
        // The exponent only has meaning for finite numbers.
        debug_assert!(self.is_finite());

        let exp = if self.is_form1() {
            ((self.0 & Self::FORM1_EXP_MASK) >> Self::FORM1_EXP_SHIFT) as u16
        } else {
            ((self.0 & Self::FORM2_EXP_MASK) >> Self::FORM2_EXP_SHIFT) as u16
        };
        debug_assert!(exp <= Self::LIMIT);

        exp
    }

    /// Returns the unbiased exponent.
    ///
    /// The result is in [[`ETINY`][Self::ETINY],
    /// [`EMAX`][Self::EMAX]].
    pub(crate) const fn unbiased_exp(self) -> i16 {
        const_assert!(Bid32::LIMIT.checked_add_signed(Bid32::BIAS).is_some());

        // `self.biased_exp()` is in [0, LIMIT] and `LIMIT + BIAS
        // <= u16::MAX`, so neither the cast nor the subtraction
        // can wrap.
        #[allow(clippy::cast_possible_wrap)]
        let exp = (self.biased_exp() as i16) - Self::BIAS;
        exp
    }

    /// Returns the full coefficient.
    ///
    /// NB: This may be out of range.
    const fn raw_coeff(self) -> u32 {
        // The coefficient only has meaning for finite numbers.
        debug_assert!(self.is_finite());

        if self.is_form1() {
            self.0 & Self::FORM1_COEFF_MASK
        } else {
            Self::FORM2_IMPLICIT_COEFF_BITS | (self.0 & Self::FORM2_COEFF_MASK)
        }
    }

    /// Returns the full coefficient.
    ///
    /// Out-of-range coefficients decode as zero, per IEEE
    /// 754-2008 3.2(c)(2).
    pub(crate) const fn coeff(self) -> u32 {
        // The coefficient only has meaning for finite numbers.
        debug_assert!(self.is_finite());

        let coeff = self.raw_coeff();
        if coeff > Self::MAX_COEFF {
            0
        } else {
            coeff
        }
    }

    /// Returns a NaN's diagnostic information.
    ///
    /// Out-of-range payloads decode as zero.
    pub(crate) const fn payload(self) -> u32 {
        // The payload only has meaning for NaNs.
        debug_assert!(self.is_nan());

        let payload = self.0 & Self::PAYLOAD_MASK;
        if payload > Self::PAYLOAD_MAX {
            0
        } else {
            payload
        }
    }
}

impl fmt::Debug for Bid32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bid32({:#010x})", self.0)
    }
}
