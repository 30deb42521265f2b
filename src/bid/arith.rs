use super::uint256::u256;

/// Returns `x * y` as `(lo, hi)`.
///
/// The product is exact.
pub(super) const fn widening_mul(x: u64, y: u64) -> (u64, u64) {
    // The result is contained in the larger type.
    let wide = (x as u128) * (y as u128);
    (wide as u64, (wide >> 64) as u64)
}

/// Returns `x + y + carry` as `(sum, carry_out)`.
///
/// `carry` must be 0 or 1, so the sum cannot overflow.
pub(super) const fn carrying_add(x: u64, y: u64, carry: bool) -> (u64, bool) {
    let (sum, c1) = x.overflowing_add(y);
    let (sum, c2) = sum.overflowing_add(carry as u64);
    (sum, c1 | c2)
}

/// Returns the exact 320-bit product `x * y` as 64-bit words,
/// least significant first.
///
/// Four widening products, one per word of `y`, are threaded
/// together with carry-propagating adds. Only one carry bit can
/// come out of each column since the high half of a widening
/// product is at most `2^64 - 2`.
pub(super) const fn mul64x256(x: u64, y: u256) -> [u64; 5] {
    let [y0, y1, y2, y3] = y.to_words();

    let (w0, h0) = widening_mul(x, y0);
    let (l1, h1) = widening_mul(x, y1);
    let (l2, h2) = widening_mul(x, y2);
    let (l3, h3) = widening_mul(x, y3);

    let (w1, c) = carrying_add(h0, l1, false);
    let (w2, c) = carrying_add(h1, l2, c);
    let (w3, c) = carrying_add(h2, l3, c);
    let w4 = h3 + (c as u64);

    [w0, w1, w2, w3, w4]
}

/// Logically shifts the 384-bit value `z` (least significant
/// word first) right by `n` bits.
///
/// `n` must be less than 64; callers decompose larger shifts.
pub(super) const fn srl384(z: [u64; 6], n: u32) -> [u64; 6] {
    debug_assert!(n < 64);

    if n == 0 {
        return z;
    }
    let [z0, z1, z2, z3, z4, z5] = z;
    [
        (z0 >> n) | (z1 << (64 - n)),
        (z1 >> n) | (z2 << (64 - n)),
        (z2 >> n) | (z3 << (64 - n)),
        (z3 >> n) | (z4 << (64 - n)),
        (z4 >> n) | (z5 << (64 - n)),
        z5 >> n,
    ]
}

/// Returns the minimum number of bits required to represent `x`.
///
/// It returns 0 for `x == 0`.
pub(super) const fn bitlen(x: u32) -> u32 {
    u32::BITS - x.leading_zeros()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::indexing_slicing)]

    use rand::{random, thread_rng, Rng};

    use super::*;

    /// Returns `x * y` split into 128-bit halves.
    fn widening_mul128(x: u128, y: u128) -> (u128, u128) {
        const MASK: u128 = (1 << 64) - 1;
        let x0 = x & MASK;
        let x1 = x >> 64;
        let y0 = y & MASK;
        let y1 = y >> 64;
        let w0 = x0 * y0;
        let t = x1 * y0 + (w0 >> 64);
        let w1 = (t & MASK) + x0 * y1;
        let w2 = t >> 64;
        let hi = x1 * y1 + w2 + (w1 >> 64);
        let lo = (w1 << 64) | (w0 & MASK);
        (lo, hi)
    }

    #[test]
    fn test_widening_mul() {
        let cases = [
            (0, 0),
            (1, u64::MAX),
            (u64::MAX, u64::MAX),
            (1 << 63, 2),
            (0x9999999, 0xdeadbeef),
        ];
        for (x, y) in cases {
            let (lo, hi) = widening_mul(x, y);
            let want = u128::from(x) * u128::from(y);
            assert_eq!((u128::from(hi) << 64) | u128::from(lo), want, "{x} {y}");
        }
        for _ in 0..100_000 {
            let (x, y) = (random::<u64>(), random::<u64>());
            let (lo, hi) = widening_mul(x, y);
            let want = u128::from(x) * u128::from(y);
            assert_eq!((u128::from(hi) << 64) | u128::from(lo), want, "{x} {y}");
        }
    }

    #[test]
    fn test_carrying_add() {
        for _ in 0..100_000 {
            let (x, y) = (random::<u64>(), random::<u64>());
            for carry in [false, true] {
                let (sum, c) = carrying_add(x, y, carry);
                let want = u128::from(x) + u128::from(y) + u128::from(carry);
                assert_eq!(
                    (u128::from(c) << 64) | u128::from(sum),
                    want,
                    "{x} {y} {carry}"
                );
            }
        }
    }

    #[test]
    fn test_mul64x256() {
        let mut rng = thread_rng();
        for _ in 0..100_000 {
            let x = rng.gen::<u64>();
            let hi = rng.gen::<u128>();
            let lo = rng.gen::<u128>();

            let got = mul64x256(x, u256::from_parts(hi, lo));

            // x*y = x*lo + (x*hi << 128), computed with an
            // independent 128x128 multiply and summed as five
            // explicit words.
            let (p_lo, p_hi) = widening_mul128(u128::from(x), lo);
            let (q_lo, q_hi) = widening_mul128(u128::from(x), hi);
            debug_assert_eq!(p_hi >> 64, 0);
            debug_assert_eq!(q_hi >> 64, 0);
            let a = [p_lo as u64, (p_lo >> 64) as u64, p_hi as u64, 0, 0];
            let b = [0, 0, q_lo as u64, (q_lo >> 64) as u64, q_hi as u64];
            let mut want = [0u64; 5];
            let mut carry = false;
            for i in 0..5 {
                let (w, c) = carrying_add(a[i], b[i], carry);
                want[i] = w;
                carry = c;
            }
            assert!(!carry);
            assert_eq!(got, want, "{x} {hi} {lo}");
        }
    }

    #[test]
    fn test_srl384() {
        let mut rng = thread_rng();
        for _ in 0..100_000 {
            let z: [u64; 6] = rng.gen();
            let n = rng.gen_range(0..64);

            let got = srl384(z, n);

            // Reference shift over 128-bit lanes.
            let v0 = u128::from(z[0]) | (u128::from(z[1]) << 64);
            let v1 = u128::from(z[2]) | (u128::from(z[3]) << 64);
            let v2 = u128::from(z[4]) | (u128::from(z[5]) << 64);
            let (r0, r1, r2) = if n == 0 {
                (v0, v1, v2)
            } else {
                (
                    (v0 >> n) | (v1 << (128 - n)),
                    (v1 >> n) | (v2 << (128 - n)),
                    v2 >> n,
                )
            };
            let want = [
                r0 as u64,
                (r0 >> 64) as u64,
                r1 as u64,
                (r1 >> 64) as u64,
                r2 as u64,
                (r2 >> 64) as u64,
            ];
            assert_eq!(got, want, "{z:?} >> {n}");
        }
    }

    #[test]
    fn test_bitlen() {
        assert_eq!(bitlen(0), 0);
        for i in 0..32 {
            assert_eq!(bitlen(1 << i), i + 1);
        }
        assert_eq!(bitlen(u32::MAX), 32);
    }
}
