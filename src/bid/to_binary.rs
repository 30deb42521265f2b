//! Decimal to binary conversions.
//!
//! The conversion is a pure function of the input and the
//! tables: normalize the decimal coefficient, multiply by
//! a 256-bit reciprocal of the decimal scale factor chosen by
//! a per-exponent breakpoint, then round the 320-bit product
//! with one 128-bit comparison. No step divides and no step
//! rounds except the final boundary comparison.

use super::{arith, tables, Bid32};
use crate::ctx::{Condition, RoundingMode};

/// Binary32 encoding helpers.
mod binary32 {
    /// The number of bits in the significand, including the
    /// implicit bit.
    pub(super) const SIG_BITS: u32 = f32::MANTISSA_DIGITS;
    /// The all-ones biased exponent, reserved for infinities
    /// and NaNs.
    pub(super) const EXP_LIMIT: u32 = 0xff;

    const SIGN_SHIFT: u32 = 31;
    const EXP_SHIFT: u32 = SIG_BITS - 1;
    const SIG_MASK: u32 = (1 << EXP_SHIFT) - 1;
    const QUIET_BIT: u32 = 1 << (EXP_SHIFT - 1);

    /// Packs an already-rounded finite value.
    ///
    /// The implicit significand bit, if any, is stripped here.
    pub(super) const fn pack(sign: bool, exp: u32, sig: u32) -> u32 {
        debug_assert!(exp < EXP_LIMIT);

        ((sign as u32) << SIGN_SHIFT) | (exp << EXP_SHIFT) | (sig & SIG_MASK)
    }

    /// Returns a signed zero.
    pub(super) const fn zero(sign: bool) -> u32 {
        (sign as u32) << SIGN_SHIFT
    }

    /// Returns a signed infinity.
    pub(super) const fn inf(sign: bool) -> u32 {
        ((sign as u32) << SIGN_SHIFT) | (EXP_LIMIT << EXP_SHIFT)
    }

    /// Returns a quiet NaN carrying `payload`.
    pub(super) const fn nan(sign: bool, payload: u32) -> u32 {
        debug_assert!(payload < QUIET_BIT);

        inf(sign) | QUIET_BIT | payload
    }
}

impl Bid32 {
    /// Converts the number to the nearest binary32 value,
    /// rounding ties to even.
    ///
    /// Every input maps to exactly one output: values too large
    /// for binary32 become infinities, values too small become
    /// signed zeros, and NaN payloads are carried over (capped
    /// at the decimal32 payload range).
    pub fn to_f32(self) -> f32 {
        let (bits, _) = self.to_binary32(RoundingMode::ToNearestEven);
        f32::from_bits(bits)
    }

    /// Converts the number to binary32 using `mode`, also
    /// returning the conditions the conversion raised.
    #[allow(
        clippy::cast_sign_loss,
        clippy::cast_possible_wrap,
        reason = "Exponents are clamped into range before each cast"
    )]
    #[allow(
        clippy::indexing_slicing,
        reason = "The table index is clamped to [0, NUM_ENTRIES)"
    )]
    pub(crate) const fn to_binary32(self, mode: RoundingMode) -> (u32, Condition) {
        let sign = self.signbit();

        if self.is_nan() {
            let cond = if self.is_snan() {
                Condition::INVALID_OPERATION
            } else {
                Condition::empty()
            };
            return (binary32::nan(sign, self.payload()), cond);
        }
        if self.is_infinite() {
            return (binary32::inf(sign), Condition::empty());
        }

        // Non-canonical coefficients decode as zero, so this
        // also catches them.
        let coeff = self.coeff();
        if coeff == 0 {
            return (binary32::zero(sign), Condition::empty());
        }

        let mut e = self.unbiased_exp() as i32;

        // Trivial overflow: 10^39 exceeds binary32's finite
        // range even for a coefficient of 1.
        if e >= tables::MAX_EXP {
            return (
                binary32::inf(sign),
                Condition::OVERFLOW.union(Condition::INEXACT),
            );
        }
        // Trivial underflow: clamp, keeping the tables small.
        // Anything below 10^-80 only feeds the sticky bits,
        // which saturate.
        if e < tables::MIN_EXP {
            e = tables::MIN_EXP;
        }

        // Normalize the coefficient to [2^23, 2^24), then shift
        // a further 25 bits so the top word of the 128-bit
        // normalized form carries the whole coefficient:
        // 2^112 <= c << 64 < 2^113.
        let k = binary32::SIG_BITS - arith::bitlen(coeff);
        let ch = (coeff as u64) << (k + 25);

        // Select the reciprocal by the binade the value falls
        // in. Above the breakpoint the binary exponent is one
        // larger.
        let i = (e + tables::EXP_BIAS) as usize;
        let mut e_out = tables::EXPONENTS[i] as i32 - k as i32;
        let r = if (ch as u128) << 64 <= tables::BREAKPOINTS[i] {
            tables::MULTIPLIERS_LO[i]
        } else {
            e_out += 1;
            tables::MULTIPLIERS_HI[i]
        };

        // 64 x 256 -> 320-bit reciprocal multiplication, widened
        // one word to leave room for the underflow shift.
        let [p0, p1, p2, p3, p4] = arith::mul64x256(ch, r);
        let mut z = [0, p0, p1, p2, p3, p4];

        // Compensate a subnormal exponent by shifting the
        // product instead, cut off at precision + 2 bits: any
        // further shift only moves bits that are already sticky.
        if e_out < 1 {
            let mut d = 1 - e_out;
            if d > 26 {
                d = 26;
            }
            e_out = 1;
            z = arith::srl384(z, d as u32);
        }

        let [_, _, _, z3, z4, z5] = z;
        let mut sig = z5;

        // One comparison decides the rounding: the boundary
        // encodes both the half-ULP test and the tie break for
        // the significand's parity.
        let frac = ((z4 as u128) << 64) | (z3 as u128);
        let idx = mode.tab_base() | ((sign as usize) << 1) | ((sig & 1) as usize);
        if frac > tables::ROUND_BOUNDS[idx] {
            sig += 1;
        }
        // The increment can spill into the next binade.
        if sig == 1 << binary32::SIG_BITS {
            sig = 1 << (binary32::SIG_BITS - 1);
            e_out += 1;
        }

        // Overflow after rounding always becomes infinity,
        // never the largest finite value.
        if e_out >= binary32::EXP_LIMIT as i32 {
            return (
                binary32::inf(sign),
                Condition::OVERFLOW.union(Condition::INEXACT),
            );
        }

        let tiny = sig < 1 << (binary32::SIG_BITS - 1);

        let mut cond = Condition::empty();
        if z4 != 0 || z3 != 0 {
            cond = cond.union(Condition::INEXACT);
            if tiny {
                cond = cond.union(Condition::UNDERFLOW);
            }
        }

        // Subnormals keep a zero exponent field and no implicit
        // bit.
        let bits = if tiny {
            binary32::pack(sign, 0, sig as u32)
        } else {
            binary32::pack(sign, e_out as u32, sig as u32)
        };
        (bits, cond)
    }
}

impl From<Bid32> for f32 {
    fn from(d: Bid32) -> Self {
        d.to_f32()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::cast_possible_wrap)]

    use rand::{thread_rng, Rng};

    use super::*;
    use crate::ctx::Ctx;

    /// Converts via Rust's own correctly rounded decimal
    /// parser, which shares nothing with the reciprocal tables.
    fn oracle(sign: bool, coeff: u32, exp: i16) -> u32 {
        let s = if sign {
            format!("-{coeff}e{exp}")
        } else {
            format!("{coeff}e{exp}")
        };
        let f: f32 = s.parse().unwrap();
        f.to_bits()
    }

    fn convert(sign: bool, coeff: u32, exp: i16) -> u32 {
        Bid32::from_parts(sign, exp, coeff).to_f32().to_bits()
    }

    /// A spread of coefficients that exercises both encoding
    /// forms, the breakpoint boundaries, and the normalization
    /// shift.
    fn coeffs() -> Vec<u32> {
        let mut cs = Vec::new();
        cs.extend(0..=100);
        cs.extend((Bid32::MAX_COEFF - 20)..=Bid32::MAX_COEFF);
        for i in 0..Bid32::P {
            cs.push(10u32.pow(i));
            cs.push(10u32.pow(i + 1) - 1);
        }
        for i in 1..24 {
            cs.push(1 << i);
            cs.push((1 << i) - 1);
            cs.push((1 << i) + 1);
        }
        let mut rng = thread_rng();
        for _ in 0..200 {
            cs.push(rng.gen_range(1..=Bid32::MAX_COEFF));
        }
        cs
    }

    #[test]
    fn test_oracle_sweep() {
        for exp in Bid32::ETINY..=(Bid32::EMAX - (Bid32::P as i16) + 1) {
            for &coeff in &coeffs() {
                for sign in [false, true] {
                    let got = convert(sign, coeff, exp);
                    let want = oracle(sign, coeff, exp);
                    assert_eq!(got, want, "{sign} {coeff}e{exp}");
                }
            }
        }
    }

    #[test]
    fn test_oracle_random() {
        let mut rng = thread_rng();
        for _ in 0..50_000 {
            let coeff = rng.gen_range(0..=Bid32::MAX_COEFF);
            let exp = rng.gen_range(Bid32::ETINY..=(Bid32::EMAX - (Bid32::P as i16) + 1));
            let sign = rng.gen();
            let got = convert(sign, coeff, exp);
            let want = oracle(sign, coeff, exp);
            assert_eq!(got, want, "{sign} {coeff}e{exp}");
        }
    }

    // NB: This takes a few minutes.
    #[test]
    #[cfg(feature = "slow-tests")]
    fn test_oracle_exhaustive_coeff() {
        for exp in [-46i16, -45, -1, 0, 1, 32] {
            for coeff in 0..=Bid32::MAX_COEFF {
                let got = convert(false, coeff, exp);
                let want = oracle(false, coeff, exp);
                assert_eq!(got, want, "{coeff}e{exp}");
            }
        }
    }

    #[test]
    fn test_known_values() {
        // Verified against exact rational arithmetic.
        let cases: &[(bool, u32, i16, u32)] = &[
            (false, 1, 0, 0x3f800000),
            (false, 1, -1, 0x3dcccccd),
            (false, 3141593, -6, 0x40490fdc),
            (false, 1, 38, 0x7e967699),
            (false, 2097152, 0, 0x4a000000),
            (false, 8388608, 0, 0x4b000000),
            (false, 3402823, 32, 0x7f7ffffd),
            (false, 3402824, 32, 0x7f800000),
            (false, 1, -45, 0x00000001),
            (false, 1401298, -51, 0x00000001),
            (false, 7, -46, 0x00000000),
            (false, 1, -101, 0x00000000),
            (false, 9999999, -101, 0x00000000),
            // Form two encodings (coefficient >= 2^23).
            (false, 8388759, -89, 0x00000000),
            (false, 9999999, 90, 0x7f800000),
            (true, 1, 0, 0xbf800000),
        ];
        for &(sign, coeff, exp, want) in cases {
            assert_eq!(convert(sign, coeff, exp), want, "{sign} {coeff}e{exp}");
        }
    }

    #[test]
    fn test_zero() {
        assert_eq!(convert(false, 0, 0), 0x00000000);
        assert_eq!(convert(true, 0, 0), 0x80000000);
        // Zero keeps its sign at every exponent.
        assert_eq!(convert(true, 0, 90), 0x80000000);
        assert_eq!(convert(false, 0, -101), 0x00000000);
    }

    #[test]
    fn test_non_canonical_is_zero() {
        // Form two can encode coefficients above MAX_COEFF;
        // they must convert like zero.
        let bits = Bid32::from_parts(true, 0, Bid32::MAX_COEFF).to_bits();
        let d = Bid32::from_bits(bits | 0x001fffff);
        assert_eq!(d.to_f32().to_bits(), 0x80000000);
    }

    #[test]
    fn test_infinity() {
        assert_eq!(Bid32::inf(false).to_f32().to_bits(), 0x7f800000);
        assert_eq!(Bid32::inf(true).to_f32().to_bits(), 0xff800000);
    }

    #[test]
    fn test_nan_payload() {
        let f = Bid32::nan(false, 1234).to_f32();
        assert!(f.is_nan());
        assert_eq!(f.to_bits(), 0x7fc00000 | 1234);

        let f = Bid32::nan(true, 999_999).to_f32();
        assert!(f.is_nan());
        assert_eq!(f.to_bits(), 0xffc00000 | 999_999);

        // Payloads beyond the decimal32 coefficient range are
        // rejected, not truncated.
        let d = Bid32::from_bits(Bid32::nan(false, 0).to_bits() | 0xfffff);
        assert_eq!(d.to_f32().to_bits(), 0x7fc00000);
    }

    #[test]
    fn test_snan_signals() {
        let mut ctx = Ctx::new();
        let f = ctx.to_f32(Bid32::snan(false, 7));
        assert!(f.is_nan());
        assert_eq!(f.to_bits(), 0x7fc00000 | 7);
        assert_eq!(ctx.conditions(), Condition::INVALID_OPERATION);
    }

    #[test]
    fn test_redundant_encodings() {
        // Trailing zeros in the coefficient and a smaller
        // exponent encode the same value and must convert to
        // the same result.
        for exp in (Bid32::ETINY + 1)..=(Bid32::EMAX - (Bid32::P as i16) + 1) {
            for coeff in [1u32, 2, 7, 10, 123, 999_999] {
                let got = convert(false, coeff * 10, exp - 1);
                let want = convert(false, coeff, exp);
                assert_eq!(got, want, "{coeff}e{exp}");
            }
        }
    }

    #[test]
    fn test_monotonic() {
        // Positive finite binary32 values order like their
        // bits, so within one decade the results must be
        // non-decreasing in the coefficient.
        for exp in Bid32::ETINY..=(Bid32::EMAX - (Bid32::P as i16) + 1) {
            let mut cs = coeffs();
            cs.sort_unstable();
            let mut prev = 0;
            for &coeff in &cs {
                let got = convert(false, coeff, exp);
                assert!(got >= prev, "{coeff}e{exp}: {got:#x} < {prev:#x}");
                prev = got;
            }
        }
        // And across decades for a fixed coefficient.
        let mut prev = 0;
        for exp in Bid32::ETINY..=(Bid32::EMAX - (Bid32::P as i16) + 1) {
            let got = convert(false, 1, exp);
            assert!(got >= prev, "1e{exp}");
            prev = got;
        }
    }

    #[test]
    fn test_rounding_modes() {
        // 0.1 is inexact in binary: nearest rounds up, the
        // directed modes split by sign.
        let cases: &[(RoundingMode, bool, u32)] = &[
            (RoundingMode::ToNearestEven, false, 0x3dcccccd),
            (RoundingMode::ToNearestAway, false, 0x3dcccccd),
            (RoundingMode::ToZero, false, 0x3dcccccc),
            (RoundingMode::ToNegativeInf, false, 0x3dcccccc),
            (RoundingMode::ToPositiveInf, false, 0x3dcccccd),
            (RoundingMode::ToNearestEven, true, 0xbdcccccd),
            (RoundingMode::ToZero, true, 0xbdcccccc),
            (RoundingMode::ToNegativeInf, true, 0xbdcccccd),
            (RoundingMode::ToPositiveInf, true, 0xbdcccccc),
        ];
        for &(mode, sign, want) in cases {
            let mut ctx = Ctx::new().with_rounding_mode(mode);
            let got = ctx.to_f32(Bid32::from_parts(sign, -1, 1)).to_bits();
            assert_eq!(got, want, "{mode:?} {sign}");
            assert!(ctx.conditions().contains(Condition::INEXACT));
        }
    }

    #[test]
    fn test_rounding_mode_order() {
        // Floor <= nearest <= ceiling, and truncation never
        // grows the magnitude.
        let mut rng = thread_rng();
        for _ in 0..20_000 {
            let coeff = rng.gen_range(1..=Bid32::MAX_COEFF);
            let exp = rng.gen_range(Bid32::ETINY..=(Bid32::EMAX - (Bid32::P as i16) + 1));
            let sign = rng.gen();
            let d = Bid32::from_parts(sign, exp, coeff);

            let at = |mode| {
                Ctx::new()
                    .with_rounding_mode(mode)
                    .to_f32(d)
            };
            let ne = at(RoundingMode::ToNearestEven);
            let dn = at(RoundingMode::ToNegativeInf);
            let up = at(RoundingMode::ToPositiveInf);
            let tz = at(RoundingMode::ToZero);
            assert!(dn <= ne && ne <= up, "{d:?}: {dn} {ne} {up}");
            assert!(tz.abs() <= ne.abs(), "{d:?}: {tz} {ne}");
        }
    }

    #[test]
    fn test_exact_conversions_raise_nothing() {
        // Powers of two and short decimals convert exactly; no
        // conditions may be raised.
        for (coeff, exp) in [(1, 0), (8388608, 0), (5, -1), (25, -2), (125, -3), (75, 1)] {
            let mut ctx = Ctx::new();
            ctx.to_f32(Bid32::from_parts(false, exp, coeff));
            assert!(ctx.conditions().is_empty(), "{coeff}e{exp}");
        }
    }

    #[test]
    fn test_overflow_conditions() {
        for (coeff, exp) in [(9_999_999, 90), (1, 39), (3402824, 32)] {
            let mut ctx = Ctx::new();
            let f = ctx.to_f32(Bid32::from_parts(false, exp, coeff));
            assert!(f.is_infinite(), "{coeff}e{exp}");
            assert_eq!(
                ctx.conditions(),
                Condition::OVERFLOW | Condition::INEXACT,
                "{coeff}e{exp}"
            );
        }
    }

    #[test]
    fn test_underflow_conditions() {
        // Subnormal and inexact.
        for (coeff, exp, want) in [(1, -45, 0x1u32), (7, -46, 0x0), (1, -101, 0x0)] {
            let mut ctx = Ctx::new();
            let f = ctx.to_f32(Bid32::from_parts(false, exp, coeff));
            assert_eq!(f.to_bits(), want, "{coeff}e{exp}");
            assert_eq!(
                ctx.conditions(),
                Condition::UNDERFLOW | Condition::INEXACT,
                "{coeff}e{exp}"
            );
        }

        // Rounding away from zero bumps a deep underflow to the
        // smallest subnormal instead of zero.
        let mut ctx = Ctx::new().with_rounding_mode(RoundingMode::ToPositiveInf);
        let f = ctx.to_f32(Bid32::from_parts(false, -101, 1));
        assert_eq!(f.to_bits(), 0x00000001);
    }

    #[test]
    fn test_from_impl() {
        let d = Bid32::new(1500, -3);
        assert_eq!(f32::from(d), 1.5f32);
    }
}
