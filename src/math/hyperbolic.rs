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
use crate::double::{Double, overflow_value};
use crate::math::common::{horner_bits, rounding_variants};
use crate::math::exp::{exp_dd, exp_td};
use crate::rounding::{
    QuickBound, RoundingMode, quick_round, round_perturbed, round_scaled, round_td,
};
use crate::triple_double::TripleDouble;

const HYPERBOLIC_QUICK: QuickBound =
    QuickBound::from_bits(0x3c30000000000000, 0x3ff0800000000001);
const SINH_POLY_QUICK: QuickBound =
    QuickBound::from_bits(0x3c10000000000000, 0x3ff0200000000001);

const SINH_C3: TripleDouble =
    TripleDouble::from_bit_pair((0x3905555555555555, 0x3c65555555555555, 0x3fc5555555555555));
const SINH_C5: TripleDouble =
    TripleDouble::from_bit_pair((0x3881111111111111, 0x3c01111111111111, 0x3f81111111111111));

/// `1/(2k+1)!` for `k` in `2..=5`.
static SINH_QUICK_POLY: [u64; 4] = [
    0x3f81111111111111,
    0x3f2a01a01a01a01a,
    0x3ec71de3a556c734,
    0x3e5ae64567f544e4,
];

/// `1/(2k+1)!` for `k` in `3..=10`.
static SINH_ACCURATE_POLY: [(u64, u64); 8] = [
    (0x3b6a01a01a01a01a, 0x3f2a01a01a01a01a),
    (0xbb6c154f8ddc6c00, 0x3ec71de3a556c734),
    (0xbafc062e06d1f209, 0x3e5ae64567f544e4),
    (0x3a8f28e0cc748ebe, 0x3de6124613a86d09),
    (0x39e1d8656b0ee8cb, 0x3d6ae7f3e733b81f),
    (0x398ac981465ddc6c, 0x3ce952c77030ad4a),
    (0x38f2650f61dbdcb4, 0x3c62f49b46814157),
    (0xb87d043ae40c4647, 0x3bd71b8ef6dcf572),
];

#[inline]
fn scale_dd(v: Dekker, s: Double) -> Dekker {
    Dekker::new(v.lo * s, v.hi * s)
}

#[inline]
fn scale_td(v: TripleDouble, s: Double) -> TripleDouble {
    TripleDouble::new(v.lo * s, v.mid * s, v.hi * s)
}

/// `exp(x) / 2` for `45 < x < 711`, where `exp(-x)` is below the final
/// precision.
fn half_exp(x: Double, mode: RoundingMode, name: &'static str) -> Double {
    let (e, y) = exp_dd(x);
    if e < 1020 {
        if let Some(r) = quick_round(mode, y, HYPERBOLIC_QUICK) {
            return r.ldexp(e - 1);
        }
    }
    trace_tier!(name, "accurate");
    let (e, t) = exp_td(x);
    round_scaled(mode, t, e - 1)
}

/// `(exp(x) + sign * exp(-x)) / 2` for `0 < x <= 45`.
fn exp_pair(x: Double, negate_second: bool, mode: RoundingMode, name: &'static str) -> Double {
    let sign = if negate_second { -0.5 } else { 0.5 };
    let (e1, y1) = exp_dd(x);
    let (e2, y2) = exp_dd(-x);
    let y = Dekker::add(
        scale_dd(y1, Double::pow2(e1 - 1)),
        scale_dd(y2, Double::pow2(e2) * sign),
    );
    if let Some(r) = quick_round(mode, y, HYPERBOLIC_QUICK) {
        return r;
    }
    trace_tier!(name, "accurate");
    let (e1, t1) = exp_td(x);
    let (e2, t2) = exp_td(-x);
    round_td(
        mode,
        TripleDouble::add(
            scale_td(t1, Double::pow2(e1 - 1)),
            scale_td(t2, Double::pow2(e2) * sign),
        ),
    )
}

/// Hyperbolic cosine, correctly rounded in the requested direction.
pub fn cosh(x: Double, mode: RoundingMode) -> Double {
    if x.is_nan() {
        return x + x;
    }
    let ax = x.abs();
    if ax.is_infinite() {
        return ax;
    }
    if ax.is_zero() {
        return Double::ONE;
    }
    if ax < Double::pow2(-26) {
        return round_perturbed(Double::ONE, true, mode);
    }
    if ax > Double::from_f64(711.0) {
        return overflow_value(0, mode);
    }
    if ax > Double::from_f64(45.0) {
        return half_exp(ax, mode, "cosh");
    }
    exp_pair(ax, false, mode, "cosh")
}

/// sinh for `2^-26 <= x < 0.125`.
fn sinh_small(x: Double, mode: RoundingMode) -> Double {
    let x2 = Dekker::from_exact_mult(x, x);
    let p = horner_bits(x2.hi, &SINH_QUICK_POLY);
    let s = Dekker::add_d(SINH_C3.to_dd(), x2.hi * p);
    let s = Dekker::mult(Dekker::mult_d(x, x2), s);
    let y = Dekker::add(Dekker::from_double(x), s);
    if let Some(r) = quick_round(mode, y, SINH_POLY_QUICK) {
        return r;
    }
    trace_tier!("sinh", "accurate");
    let mut p = Dekker::from_bits(SINH_ACCURATE_POLY[7].0, SINH_ACCURATE_POLY[7].1);
    for &(lo, hi) in SINH_ACCURATE_POLY[..7].iter().rev() {
        p = Dekker::mul_add(Dekker::from_bits(lo, hi), x2, p);
    }
    let mut acc = TripleDouble::from_dd(p);
    acc = TripleDouble::add(SINH_C5, TripleDouble::quick_mult_dd(acc, x2));
    acc = TripleDouble::add(SINH_C3, TripleDouble::quick_mult_dd(acc, x2));
    acc = TripleDouble::quick_mult_dd(acc, x2);
    acc = TripleDouble::quick_mult_f64(acc, x);
    round_td(mode, TripleDouble::add_f64(x, acc))
}

fn sinh_positive(x: Double, mode: RoundingMode) -> Double {
    if x < Double::pow2(-26) {
        // x + x^3/6 lies just above x
        return round_perturbed(x, true, mode);
    }
    if x > Double::from_f64(711.0) {
        return overflow_value(0, mode);
    }
    if x < Double::from_f64(0.125) {
        return sinh_small(x, mode);
    }
    if x > Double::from_f64(45.0) {
        return half_exp(x, mode, "sinh");
    }
    exp_pair(x, true, mode, "sinh")
}

/// Hyperbolic sine, correctly rounded in the requested direction.
pub fn sinh(x: Double, mode: RoundingMode) -> Double {
    if x.is_nan() {
        return x + x;
    }
    if x.is_infinite() || x.is_zero() {
        return x;
    }
    let negative = x.is_sign_negative();
    let r = sinh_positive(x.abs(), mode.mirrored(negative));
    if negative { -r } else { r }
}

rounding_variants!(cosh, cosh_rn, cosh_ru, cosh_rd, cosh_rz, "hyperbolic cosine");
rounding_variants!(sinh, sinh_rn, sinh_ru, sinh_rd, sinh_rz, "hyperbolic sine");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hyperbolic_specials() {
        for mode in RoundingMode::ALL {
            assert_eq!(cosh(Double::ZERO, mode), Double::ONE);
            assert_eq!(cosh(Double::NEG_ZERO, mode), Double::ONE);
            assert_eq!(sinh(Double::NEG_ZERO, mode).to_bits(), Double::NEG_ZERO.to_bits());
        }
        assert_eq!(cosh_rn(Double::NEG_INFINITY), Double::INFINITY);
        assert_eq!(sinh_rn(Double::NEG_INFINITY), Double::NEG_INFINITY);
        assert_eq!(sinh_rn(Double::from_f64(-800.0)), Double::NEG_INFINITY);
        assert_eq!(sinh_rz(Double::from_f64(-800.0)), Double::MIN);
        assert_eq!(cosh_rd(Double::from_f64(-800.0)), Double::MAX);
    }

    #[test]
    fn test_hyperbolic_tiny() {
        let x = Double::from_f64(-1e-10);
        assert_eq!(cosh_rn(x), Double::ONE);
        assert_eq!(cosh_ru(x), Double::ONE.next_up());
        assert_eq!(cosh_rz(x), Double::ONE);
        assert_eq!(sinh_rn(x), x);
        assert_eq!(sinh_rd(x), x.next_down());
        assert_eq!(sinh_ru(x), x);
        assert_eq!(sinh_rz(x), x);
    }

    #[test]
    fn test_hyperbolic_odd_even() {
        for v in [0.01, 0.3, 1.5, 20.0, 100.0] {
            let x = Double::from_f64(v);
            assert_eq!(cosh_rn(x), cosh_rn(-x));
            assert_eq!(sinh_rn(-x), -sinh_rn(x));
            assert_eq!(sinh_ru(-x), -sinh_rd(x));
        }
    }

    #[test]
    fn test_sinh_reference() {
        use crate::math::common::tests::check_modes;
        check_modes(
            "sinh",
            sinh,
            &[
            (0x3ee4f8b588e368f1, 0x3ee4f8b588e4e940, 0x3ee4f8b588e4e940, 0x3ee4f8b588e4e93f, 0x3ee4f8b588e4e93f),
            (0xbee4f8b588e368f1, 0xbee4f8b588e4e940, 0xbee4f8b588e4e93f, 0xbee4f8b588e4e940, 0xbee4f8b588e4e93f),
            (0x3fe0000000000000, 0x3fe0acd00fe63b97, 0x3fe0acd00fe63b97, 0x3fe0acd00fe63b96, 0x3fe0acd00fe63b96),
            (0xbfe0000000000000, 0xbfe0acd00fe63b97, 0xbfe0acd00fe63b96, 0xbfe0acd00fe63b97, 0xbfe0acd00fe63b96),
            (0x3ff0000000000000, 0x3ff2cd9fc44eb982, 0x3ff2cd9fc44eb983, 0x3ff2cd9fc44eb982, 0x3ff2cd9fc44eb982),
            (0x4008000000000000, 0x40240926e70949ae, 0x40240926e70949ae, 0x40240926e70949ad, 0x40240926e70949ad),
            (0x4085e00000000000, 0x7efd945df4f8ec8e, 0x7efd945df4f8ec8f, 0x7efd945df4f8ec8e, 0x7efd945df4f8ec8e),
            (0xc03e000000000000, 0xc29370470aec28ed, 0xc29370470aec28ec, 0xc29370470aec28ed, 0xc29370470aec28ec),
            (0x3eb0000000000000, 0x3eb00000000002ab, 0x3eb00000000002ab, 0x3eb00000000002aa, 0x3eb00000000002aa),
            (0x3fc0000000000000, 0x3fc00aaccd00d2f1, 0x3fc00aaccd00d2f1, 0x3fc00aaccd00d2f0, 0x3fc00aaccd00d2f0),
            ],
        );
    }

    #[test]
    fn test_cosh_reference() {
        use crate::math::common::tests::check_modes;
        check_modes(
            "cosh",
            cosh,
            &[
            (0x3ee4f8b588e368f1, 0x3ff0000000036f9c, 0x3ff0000000036f9c, 0x3ff0000000036f9b, 0x3ff0000000036f9b),
            (0xbee4f8b588e368f1, 0x3ff0000000036f9c, 0x3ff0000000036f9c, 0x3ff0000000036f9b, 0x3ff0000000036f9b),
            (0x3fe0000000000000, 0x3ff20ac1862ae8d0, 0x3ff20ac1862ae8d1, 0x3ff20ac1862ae8d0, 0x3ff20ac1862ae8d0),
            (0xbfe0000000000000, 0x3ff20ac1862ae8d0, 0x3ff20ac1862ae8d1, 0x3ff20ac1862ae8d0, 0x3ff20ac1862ae8d0),
            (0x3ff0000000000000, 0x3ff8b07551d9f550, 0x3ff8b07551d9f551, 0x3ff8b07551d9f550, 0x3ff8b07551d9f550),
            (0x4008000000000000, 0x402422a497d6185e, 0x402422a497d6185f, 0x402422a497d6185e, 0x402422a497d6185e),
            (0x4085e00000000000, 0x7efd945df4f8ec8e, 0x7efd945df4f8ec8f, 0x7efd945df4f8ec8e, 0x7efd945df4f8ec8e),
            (0xc03e000000000000, 0x429370470aec28ed, 0x429370470aec28ed, 0x429370470aec28ec, 0x429370470aec28ec),
            (0x3eb0000000000000, 0x3ff0000000000800, 0x3ff0000000000801, 0x3ff0000000000800, 0x3ff0000000000800),
            (0x3fc0000000000000, 0x3ff0200aac16db6f, 0x3ff0200aac16db6f, 0x3ff0200aac16db6e, 0x3ff0200aac16db6e),
            ],
        );
    }
}
