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
use crate::arith::round_even;
use crate::dekker::Dekker;
use crate::double::{Double, shift_right_sticky128};
use crate::math::exp::{INV_LN2_4096, LN2_4096_HI, LN2_4096_LO, exp_accurate, exp_quick};
use crate::math::log::{log_dd, log_td};
use crate::rounding::{QuickBound, RoundingMode, quick_round, round_scaled};
use crate::triple_double::TripleDouble;

// bounds on the quick phase, for |y * ln(x)| below 16 and below 512
const POW_QUICK: QuickBound = QuickBound::from_bits(0x3c20000000000000, 0x3ff0400000000001);
const POW_QUICK_WIDE: QuickBound = QuickBound::from_bits(0x3c60000000000000, 0x3ff4000000000001);

#[inline]
fn is_odd_integer(y: Double) -> bool {
    y.is_integer() && y.abs() < Double::pow2(53) && y.to_s64() & 1 != 0
}

/// Odd integer `m` and exponent `e` with `x = m * 2^e`, for a positive finite `x`.
#[inline]
fn odd_decompose(x: Double) -> (u64, i32) {
    let (sig, lsb) = x.decompose();
    let tz = sig.trailing_zeros();
    (sig >> tz, lsb + tz as i32)
}

/// `x^y` for results the evaluation tiers cannot separate from a rounding
/// boundary: exactly representable values and midpoints between two doubles.
///
/// Covers `y = n / 2^k` with `k <= 5` when `x^(1 / 2^k)` is itself exact,
/// and the integer power of that root fits in 128 bits.
fn pow_exact_rn(ax: Double, y: Double) -> Option<Double> {
    let mut k = 0;
    let mut scaled = y;
    while !scaled.is_integer() {
        k += 1;
        if k > 5 {
            return None;
        }
        scaled = scaled * 2.0;
    }
    let (mut m, mut e) = odd_decompose(ax);
    for _ in 0..k {
        if e & 1 != 0 {
            return None;
        }
        let r = Double::from_u64(m).sqrt().to_s64() as u64;
        if r * r != m {
            return None;
        }
        m = r;
        e /= 2;
    }
    if scaled.abs() >= Double::pow2(31) {
        return None;
    }
    let n = scaled.to_s64();
    if m == 1 {
        let k = (e as i64 * n).clamp(-4000, 4000) as i32;
        return Some(Double::ONE.ldexp_mode(k, RoundingMode::Nearest));
    }
    if n < 0 {
        return None;
    }
    let mut p: u128 = 1;
    for _ in 0..n {
        p = p.checked_mul(m as u128)?;
    }
    // value = p * 2^(e * n), packed as mant * 2^(exp - 55)
    let width = 128 - p.leading_zeros();
    let shift = width.saturating_sub(62);
    let mant = shift_right_sticky128(p, shift) as u64;
    let exp = (e as i64 * n + shift as i64 + 55).clamp(-4000, 4000) as i32;
    Some(Double::round_pack_mode(0, exp, mant, RoundingMode::Nearest))
}

/// `|x|^y` for positive finite `ax`, `ax != 1` and finite non-zero `y`.
fn pow_core(ax: Double, y: Double) -> Double {
    let p = Dekker::mult_d(y, log_dd(ax));
    if p.hi > Double::from_f64(710.0) {
        return Double::INFINITY;
    }
    if p.hi < Double::from_f64(-746.0) {
        return Double::ZERO;
    }

    let magnitude = p.hi.abs();
    if magnitude < Double::from_f64(512.0) {
        let bound = if magnitude < Double::from_f64(16.0) {
            POW_QUICK
        } else {
            POW_QUICK_WIDE
        };
        let kd = round_even(p.hi * INV_LN2_4096);
        let r_hi = p.hi - kd * LN2_4096_HI;
        let m = Dekker::from_exact_mult(kd, LN2_4096_LO.hi);
        let c = kd * LN2_4096_LO.mid;
        let r = Dekker::add_cond(
            Dekker::from_full_exact_add(r_hi, p.lo),
            Dekker::new(-(m.lo + c), -m.hi),
        );
        let (e, v) = exp_quick(kd.to_s32(), r);
        if e > -1020 && e < 1020 {
            if let Some(v) = quick_round(RoundingMode::Nearest, v, bound) {
                return v.ldexp(e);
            }
        }
    }

    if let Some(v) = pow_exact_rn(ax, y) {
        trace_tier!("pow", "exact");
        return v;
    }

    trace_tier!("pow", "accurate");
    let p = TripleDouble::quick_mult_f64(log_td(ax), y).renormalize();
    let kd = round_even(p.hi * INV_LN2_4096);
    let r_hi = p.hi - kd * LN2_4096_HI;
    let r = TripleDouble::add_cond(
        TripleDouble::from_double(r_hi),
        TripleDouble::from_dd(Dekker::new(p.lo, p.mid)),
    );
    let r = TripleDouble::add_cond(r, -TripleDouble::quick_mult_f64(LN2_4096_LO, kd));
    let (e, t) = exp_accurate(kd.to_s32(), r);
    round_scaled(RoundingMode::Nearest, t, e)
}

/// `x^y` correctly rounded to nearest, with the special values of C99 Annex F.
pub fn pow_rn(x: Double, y: Double) -> Double {
    // pow(x, ±0) = 1 for any x, even a NaN; pow(1, y) = 1 for any y
    if y.is_zero() || x == Double::ONE {
        return Double::ONE;
    }
    if x.is_nan() || y.is_nan() {
        return x + y;
    }
    let y_odd = is_odd_integer(y);
    if x.is_zero() {
        if y.is_sign_negative() {
            return if y_odd {
                Double::INFINITY.copysign(x)
            } else {
                Double::INFINITY
            };
        }
        return if y_odd { x } else { Double::ZERO };
    }
    if y.is_infinite() {
        if x == Double::NEG_ONE {
            return Double::ONE;
        }
        return if (x.abs() < Double::ONE) == y.is_sign_negative() {
            Double::INFINITY
        } else {
            Double::ZERO
        };
    }
    if x.is_infinite() {
        let v = if y.is_sign_negative() {
            Double::ZERO
        } else {
            Double::INFINITY
        };
        return if x.is_sign_negative() && y_odd { -v } else { v };
    }
    // negative base needs an integer exponent
    if x.is_sign_negative() && !y.is_integer() {
        return Double::NAN;
    }

    if y == Double::ONE {
        return x;
    }
    if y == Double::from_f64(2.0) {
        return x * x;
    }
    if y == Double::NEG_ONE {
        return Double::ONE / x;
    }
    if y == Double::from_f64(0.5) {
        return x.sqrt();
    }

    let v = pow_core(x.abs(), y);
    if x.is_sign_negative() && y_odd { -v } else { v }
}

impl Double {
    /// `self^y` correctly rounded to nearest.
    #[inline]
    pub fn pow(self, y: Double) -> Double {
        pow_rn(self, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn d(v: f64) -> Double {
        Double::from_f64(v)
    }

    #[test]
    fn test_pow_specials() {
        assert_eq!(pow_rn(Double::NAN, Double::ZERO), Double::ONE);
        assert_eq!(pow_rn(Double::ONE, Double::NAN), Double::ONE);
        assert!(pow_rn(Double::NAN, Double::ONE).is_nan());
        assert!(pow_rn(d(2.0), Double::NAN).is_nan());
        assert_eq!(pow_rn(Double::NEG_ZERO, d(-3.0)), Double::NEG_INFINITY);
        assert_eq!(pow_rn(Double::NEG_ZERO, d(-2.0)), Double::INFINITY);
        assert_eq!(pow_rn(Double::ZERO, d(-0.5)), Double::INFINITY);
        assert_eq!(pow_rn(Double::NEG_ZERO, d(3.0)).to_bits(), Double::NEG_ZERO.to_bits());
        assert_eq!(pow_rn(Double::NEG_ZERO, d(4.0)).to_bits(), 0);
        assert_eq!(pow_rn(Double::NEG_ZERO, Double::NEG_INFINITY), Double::INFINITY);
        assert_eq!(pow_rn(Double::NEG_ONE, Double::INFINITY), Double::ONE);
        assert_eq!(pow_rn(d(0.5), Double::NEG_INFINITY), Double::INFINITY);
        assert_eq!(pow_rn(d(0.5), Double::INFINITY).to_bits(), 0);
        assert_eq!(pow_rn(d(-2.0), Double::NEG_INFINITY).to_bits(), 0);
        assert_eq!(pow_rn(d(-2.0), Double::INFINITY), Double::INFINITY);
        assert_eq!(pow_rn(Double::NEG_INFINITY, d(-3.0)).to_bits(), Double::NEG_ZERO.to_bits());
        assert_eq!(pow_rn(Double::NEG_INFINITY, d(-2.5)).to_bits(), 0);
        assert_eq!(pow_rn(Double::NEG_INFINITY, d(3.0)), Double::NEG_INFINITY);
        assert_eq!(pow_rn(Double::NEG_INFINITY, d(0.5)), Double::INFINITY);
        assert_eq!(pow_rn(Double::INFINITY, d(-1.0)).to_bits(), 0);
        assert!(pow_rn(d(-2.0), d(0.5)).is_nan());
        assert!(pow_rn(d(-8.0), d(1.0 / 3.0)).is_nan());
    }

    #[test]
    fn test_pow_shortcuts() {
        let x = d(134217727.0);
        // x^2 is a midpoint, ties to even
        assert_eq!(pow_rn(x, d(2.0)).to_f64(), 134217727.0f64 * 134217727.0);
        assert_eq!(pow_rn(d(3.0), Double::NEG_ONE).to_f64(), 1.0 / 3.0);
        assert_eq!(pow_rn(d(2.0), d(0.5)).to_f64(), std::f64::consts::SQRT_2);
        assert_eq!(pow_rn(d(-7.5), Double::ONE).to_f64(), -7.5);
    }

    #[test]
    fn test_pow_exact_cases() {
        assert_eq!(pow_exact_rn(d(262143.0), d(3.0)), Some(Double::from_bits(0x434fffe800060000)));
        assert_eq!(pow_exact_rn(d(49.0), d(1.5)), Some(d(343.0)));
        assert_eq!(pow_exact_rn(d(0.0625), d(0.25)), Some(d(0.5)));
        assert_eq!(pow_exact_rn(d(2.0), d(-1075.0)).map(|v| v.to_bits()), Some(0));
        assert_eq!(pow_exact_rn(d(3.0), d(0.5)), None);
        assert_eq!(pow_exact_rn(d(3.0), d(-2.0)), None);
        assert_eq!(pow_exact_rn(d(3.0), d(0.1)), None);
        assert_eq!(pow_exact_rn(d(3.0), d(100.0)), None);
        for (x, n) in [(3u64, 20), (5, 22), (7, 18), (11, 15)] {
            let expected = x.pow(n as u32) as f64;
            assert_eq!(pow_rn(Double::from_u64(x), Double::from_s32(n)).to_f64(), expected);
        }
        assert_eq!(pow_rn(d(-3.0), d(3.0)).to_f64(), -27.0);
        assert_eq!(pow_rn(d(-3.0), d(4.0)).to_f64(), 81.0);
        assert_eq!(pow_rn(d(2.0), d(-1074.0)), Double::MIN_SUBNORMAL);
        assert_eq!(pow_rn(d(2.0), d(1024.0)), Double::INFINITY);
        assert_eq!(pow_rn(d(4.0), d(0.25)).to_f64(), std::f64::consts::SQRT_2);
    }

    #[test]
    fn test_pow_reference() {
        let cases: [(u64, u64, u64); 18] = [
            (0x4008000000000000, 0x4040800000000000, 0x4333bfefa65abb83),
            (0x410ffff800000000, 0x4008000000000000, 0x434fffe800060000),
            (0x4024000000000000, 0x4036000000000000, 0x4480f0cf064dd592),
            (0x4024000000000000, 0x4037000000000000, 0x44b52d02c7e14af6),
            (0x4024000000000000, 0xc008000000000000, 0x3f50624dd2f1a9fc),
            (0x3fe0000000000000, 0x4090ca0000000000, 0x0000000000000001),
            (0x4048800000000000, 0x3ff8000000000000, 0x4075700000000000),
            (0x7e37e43c8800759c, 0x3ff07ae147ae147b, 0x7ff0000000000000),
            (0x01a56e1fc2f8f359, 0x3ff199999999999a, 0x0000000000000000),
            (0x4008000000000000, 0x4059000000000000, 0x49d69194f299cdda),
            (0x4014000000000000, 0xc074a00000000000, 0x100b2a7d0c4970bc),
            (0x4004000000000000, 0x3fd3333333333333, 0x3ff50fe6c94a6e58),
            (0x3feccccccccccccd, 0x408f440000000000, 0x366e4af7aa00d59f),
            (0xc008000000000000, 0x4014000000000000, 0xc06e600000000000),
            (0xbff8000000000000, 0xc01c000000000000, 0xbfadf75680feb65f),
            (0x3ff000001ad7f29b, 0x41cdcd6500000000, 0x48f349445c228792),
            (0x401d000000000000, 0xc028400000000000, 0x3dc459af5d8a57eb),
            (0x40934a456d5cfaad, 0x3f894855da272863, 0x3ff1783c618f013e),
        ];
        for (x, y, expected) in cases {
            let (x, y) = (Double::from_bits(x), Double::from_bits(y));
            assert_eq!(
                pow_rn(x, y).to_bits(),
                expected,
                "pow({:e}, {:e})",
                x.to_f64(),
                y.to_f64()
            );
        }
    }

    #[test]
    fn test_pow_close_to_native() {
        let mut rng = rand::rng();
        for _ in 0..2000 {
            let x = rng.random_range(0.01..100.0f64);
            let y = rng.random_range(-8.0..8.0f64);
            let got = pow_rn(d(x), d(y)).to_f64();
            let native = x.powf(y);
            assert!(
                (got - native).abs() <= native * 4.0 * f64::EPSILON,
                "pow({x}, {y}) = {got}, native {native}"
            );
        }
    }
}
