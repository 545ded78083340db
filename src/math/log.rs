/*
 * // Copyright (c) Radzivon Bartoshyk 7/2025. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::dekker::Dekker;
use crate::double::{Double, FRAC_MASK};
use crate::math::common::{horner_bits, rounding_variants};
use crate::math::log_tables::{LOG_NEG_LOG_R, LOG_R};
use crate::rounding::{QuickBound, RoundingMode, quick_round, round_td};
use crate::triple_double::TripleDouble;

pub(crate) const LN2_TD: TripleDouble =
    TripleDouble::from_bit_pair((0x3907b57a079a1934, 0x3c7abc9e3b39803f, 0x3fe62e42fefa39ef));
// ln(2) truncated to 42 bits, so that E * LN2_HI is exact
const LN2_HI: Double = Double::from_bits(0x3fe62e42fefa3800);
const LN2_LO: Double = Double::from_bits(0x3d2ef35793c76730);

const LOG_QUICK: QuickBound = QuickBound::from_bits(0x3c00000000000000, 0x3ff0100000000001);

/// `x = 2^e * m`, `z = m * r - 1` exactly, `r` read from bin `index`.
#[derive(Copy, Clone, Debug)]
pub(crate) struct LogReduction {
    pub(crate) e: i32,
    pub(crate) index: usize,
    pub(crate) z: Dekker,
}

/// Reduces a positive finite non-zero `x`.
#[inline]
pub(crate) fn log_reduce(x: Double) -> LogReduction {
    let (x, mut e) = if x.is_subnormal() {
        (x * Double::pow2(52), -52)
    } else {
        (x, 0)
    };
    let bits = x.to_bits();
    e += x.biased_exponent() - 1023;
    let mut m_bits = (bits & FRAC_MASK) | 0x3ff0_0000_0000_0000;
    let index = ((m_bits >> 44) & 0xff) as usize;
    // mantissas above ~1.41 are halved, keeping |log(m)| small
    if index >= 106 {
        m_bits -= 1 << 52;
        e += 1;
    }
    let m = Double::from_bits(m_bits);
    let p = Dekker::from_exact_mult(m, Double::from_bits(LOG_R[index]));
    let z = Dekker::from_full_exact_add(p.hi - 1.0, p.lo);
    LogReduction { e, index, z }
}

/// `log1p(z) - z + z^2/2` divided by `z^3`, double precision.
static LOG1P_QUICK_POLY: [u64; 6] = [
    0x3fd5555555555555,
    0xbfd0000000000000,
    0x3fc999999999999a,
    0xbfc5555555555555,
    0x3fc2492492492492,
    0xbfc0000000000000,
];

/// Quick `log1p(z)` for `|z| < 2^-8`, relative error ~2^-66.
#[inline]
pub(crate) fn log1p_quick_poly(z: Dekker) -> Dekker {
    let q = horner_bits(z.hi, &LOG1P_QUICK_POLY);
    let sq = Dekker::from_exact_mult(z.hi, z.hi);
    let z2 = Dekker::new(sq.lo + (z.hi + z.hi) * z.lo, sq.hi);
    let q = q * (z.hi * z2.hi);
    let s = Dekker::add_cond(z, Dekker::new(z2.lo * -0.5, z2.hi * -0.5));
    Dekker::add_cond(s, Dekker::from_double(q))
}

/// Coefficients 4..16 of `log1p`, double-double.
static LOG1P_ACCURATE_POLY: [(u64, u64); 13] = [
    (0x0000000000000000, 0xbfd0000000000000),
    (0xbc6999999999999a, 0x3fc999999999999a),
    (0xbc65555555555555, 0xbfc5555555555555),
    (0x3c62492492492492, 0x3fc2492492492492),
    (0x0000000000000000, 0xbfc0000000000000),
    (0x3c5c71c71c71c71c, 0x3fbc71c71c71c71c),
    (0x3c5999999999999a, 0xbfb999999999999a),
    (0xbc4745d1745d1746, 0x3fb745d1745d1746),
    (0xbc55555555555555, 0xbfb5555555555555),
    (0xbc53b13b13b13b14, 0x3fb3b13b13b13b14),
    (0xbc52492492492492, 0xbfb2492492492492),
    (0x3c31111111111111, 0x3fb1111111111111),
    (0x0000000000000000, 0xbfb0000000000000),
];

const ONE_THIRD_TD: TripleDouble =
    TripleDouble::from_bit_pair((0x3915555555555555, 0x3c75555555555555, 0x3fd5555555555555));

/// Triple-double `log1p(z)` for `|z| < 2^-8`.
pub(crate) fn log1p_accurate_poly(z: Dekker) -> TripleDouble {
    let mut p = Dekker::from_bits(LOG1P_ACCURATE_POLY[12].0, LOG1P_ACCURATE_POLY[12].1);
    for &(lo, hi) in LOG1P_ACCURATE_POLY[..12].iter().rev() {
        p = Dekker::mul_add(Dekker::from_bits(lo, hi), z, p);
    }
    let mut s = TripleDouble::add(ONE_THIRD_TD, TripleDouble::from_quick_mult_dd(z, p));
    s = TripleDouble::add_f64(Double::from_f64(-0.5), TripleDouble::quick_mult_dd(s, z));
    s = TripleDouble::add_f64(Double::ONE, TripleDouble::quick_mult_dd(s, z));
    TripleDouble::quick_mult_dd(s, z)
}

/// Double-double natural logarithm of a positive finite `x`.
pub(crate) fn log_dd(x: Double) -> Dekker {
    let red = log_reduce(x);
    let s = log1p_quick_poly(red.z);
    let log_r = TripleDouble::from_bit_pair(LOG_NEG_LOG_R[red.index]);
    let e = Double::from_s32(red.e);
    let t = Dekker::add_cond(
        Dekker::new(e * LN2_LO, e * LN2_HI),
        Dekker::new(log_r.mid, log_r.hi),
    );
    Dekker::add_cond(t, s)
}

/// Triple-double natural logarithm of a positive finite `x`, relative
/// error below 2^-140.
pub(crate) fn log_td(x: Double) -> TripleDouble {
    let red = log_reduce(x);
    let lp = log1p_accurate_poly(red.z);
    let log_r = TripleDouble::from_bit_pair(LOG_NEG_LOG_R[red.index]);
    if red.e != 0 {
        let el = TripleDouble::quick_mult_f64(LN2_TD, Double::from_s32(red.e));
        TripleDouble::add(TripleDouble::add(el, log_r), lp)
    } else if red.index == 0 || red.index == 255 {
        lp
    } else {
        TripleDouble::add(log_r, lp)
    }
}

/// Shared special cases of the logarithms: NaN, zero, negative, infinity
/// and the exact `log(1) = +0`.
#[inline]
pub(crate) fn log_special(x: Double) -> Option<Double> {
    if x.is_nan() {
        return Some(x + x);
    }
    if x.is_zero() {
        return Some(Double::NEG_INFINITY);
    }
    if x.is_sign_negative() {
        return Some(Double::NAN);
    }
    if x.is_infinite() {
        return Some(x);
    }
    if x == Double::ONE {
        return Some(Double::ZERO);
    }
    None
}

/// Natural logarithm, correctly rounded in the requested direction.
pub fn log(x: Double, mode: RoundingMode) -> Double {
    if let Some(special) = log_special(x) {
        return special;
    }
    if let Some(r) = quick_round(mode, log_dd(x), LOG_QUICK) {
        return r;
    }
    trace_tier!("log", "accurate");
    round_td(mode, log_td(x))
}

rounding_variants!(log, log_rn, log_ru, log_rd, log_rz, "natural logarithm");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::common::tests::{check_brackets, check_modes};
    use rand::Rng;

    #[test]
    fn test_log_specials() {
        assert_eq!(log_rn(Double::ONE).to_bits(), 0);
        assert_eq!(log_rd(Double::ONE).to_bits(), 0);
        assert_eq!(log_rn(Double::ZERO), Double::NEG_INFINITY);
        assert_eq!(log_rn(Double::NEG_ZERO), Double::NEG_INFINITY);
        assert!(log_rn(Double::from_f64(-1.0)).is_nan());
        assert!(log_ru(Double::NAN).is_nan());
        assert_eq!(log_rz(Double::INFINITY), Double::INFINITY);
    }

    #[test]
    fn test_log_reduce() {
        let red = log_reduce(Double::from_f64(1.0));
        assert_eq!((red.e, red.index), (0, 0));
        assert!(red.z.hi.is_zero());
        // a mantissa above the split point moves to the next binade
        let red = log_reduce(Double::from_f64(1.9));
        assert_eq!(red.e, 1);
        let red = log_reduce(Double::MIN_SUBNORMAL);
        assert_eq!((red.e, red.index), (-1074, 0));
    }

    #[test]
    fn test_log_reference() {
        check_modes(
            "log",
            log,
            &[
            (0x3fb999999999999a, 0xc0026bb1bbb55515, 0xc0026bb1bbb55515, 0xc0026bb1bbb55516, 0xc0026bb1bbb55515),
            (0x3fe0000000000000, 0xbfe62e42fefa39ef, 0xbfe62e42fefa39ef, 0xbfe62e42fefa39f0, 0xbfe62e42fefa39ef),
            (0x4000000000000000, 0x3fe62e42fefa39ef, 0x3fe62e42fefa39f0, 0x3fe62e42fefa39ef, 0x3fe62e42fefa39ef),
            (0x4008000000000000, 0x3ff193ea7aad030b, 0x3ff193ea7aad030b, 0x3ff193ea7aad030a, 0x3ff193ea7aad030a),
            (0x4024000000000000, 0x40026bb1bbb55516, 0x40026bb1bbb55516, 0x40026bb1bbb55515, 0x40026bb1bbb55515),
            (0x01a56e1fc2f8f359, 0xc085963447f87fb5, 0xc085963447f87fb5, 0xc085963447f87fb6, 0xc085963447f87fb5),
            (0x7e37e43c8800759c, 0x4085963447f87fb5, 0x4085963447f87fb6, 0x4085963447f87fb5, 0x4085963447f87fb5),
            (0x3ff000001ad7f29b, 0x3e7ad7f2847b6492, 0x3e7ad7f2847b6493, 0x3e7ad7f2847b6492, 0x3e7ad7f2847b6492),
            (0x3fefffffca501acb, 0xbe7ad7f2b1049b9f, 0xbe7ad7f2b1049b9f, 0xbe7ad7f2b1049ba0, 0xbe7ad7f2b1049b9f),
            (0x0000000000000001, 0xc0874385446d71c3, 0xc0874385446d71c3, 0xc0874385446d71c4, 0xc0874385446d71c3),
            (0x7fefffffffffffff, 0x40862e42fefa39ef, 0x40862e42fefa39f0, 0x40862e42fefa39ef, 0x40862e42fefa39ef),
            (0x405edd2f1a9fbe77, 0x401343774f3e2362, 0x401343774f3e2363, 0x401343774f3e2362, 0x401343774f3e2362),
            ],
        );
    }

    #[test]
    fn test_log_brackets() {
        let mut rng = rand::rng();
        for _ in 0..3000 {
            let bits: u64 = rng.random_range(1..0x7ff0_0000_0000_0000);
            check_brackets("log", log, Double::from_bits(bits));
        }
    }
}
