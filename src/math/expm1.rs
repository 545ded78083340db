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
use crate::double::Double;
use crate::math::common::{horner_bits, rounding_variants};
use crate::math::exp::{exp, exp_accurate, exp_quick, exp_reduce};
use crate::rounding::{QuickBound, RoundingMode, quick_round, round_perturbed, round_td};
use crate::triple_double::TripleDouble;

const EXPM1_POLY_QUICK: QuickBound =
    QuickBound::from_bits(0x3c10000000000000, 0x3ff0200000000001);
const EXPM1_QUICK: QuickBound = QuickBound::from_bits(0x3c60000000000000, 0x3ff4000000000001);

/// `1/k!` for `k` in `3..=9`.
static EXPM1_QUICK_POLY: [u64; 7] = [
    0x3fc5555555555555,
    0x3fa5555555555555,
    0x3f81111111111111,
    0x3f56c16c16c16c17,
    0x3f2a01a01a01a01a,
    0x3efa01a01a01a01a,
    0x3ec71de3a556c734,
];

/// `1/k!` for `k` in `3..=16`.
static EXPM1_ACCURATE_POLY: [(u64, u64); 14] = [
    (0x3c65555555555555, 0x3fc5555555555555),
    (0x3c45555555555555, 0x3fa5555555555555),
    (0x3c01111111111111, 0x3f81111111111111),
    (0xbbef49f49f49f49f, 0x3f56c16c16c16c17),
    (0x3b6a01a01a01a01a, 0x3f2a01a01a01a01a),
    (0x3b3a01a01a01a01a, 0x3efa01a01a01a01a),
    (0xbb6c154f8ddc6c00, 0x3ec71de3a556c734),
    (0x3b3cbbc05b4fa99a, 0x3e927e4fb7789f5c),
    (0xbafc062e06d1f209, 0x3e5ae64567f544e4),
    (0xbac2aec959e14c06, 0x3e21eed8eff8d898),
    (0x3a8f28e0cc748ebe, 0x3de6124613a86d09),
    (0x3a305d6f8a2efd1f, 0x3da93974a8c07c9d),
    (0x39e1d8656b0ee8cb, 0x3d6ae7f3e733b81f),
    (0x39a1d8656b0ee8cb, 0x3d2ae7f3e733b81f),
];

/// Taylor expansion for `2^-54 <= |x| < 2^-5`.
fn expm1_small(x: Double, mode: RoundingMode) -> Double {
    let x2 = Dekker::from_exact_mult(x, x);
    let q = horner_bits(x, &EXPM1_QUICK_POLY) * (x * x2.hi);
    let h2 = Dekker::new(x2.lo * 0.5, x2.hi * 0.5);
    let s = Dekker::from_exact_add(x, h2.hi);
    let y = Dekker::add(s, Dekker::new(q, h2.lo));
    if let Some(r) = quick_round(mode, y, EXPM1_POLY_QUICK) {
        return r;
    }
    trace_tier!("expm1", "accurate");
    let xd = Dekker::from_double(x);
    let mut p = Dekker::from_bits(EXPM1_ACCURATE_POLY[13].0, EXPM1_ACCURATE_POLY[13].1);
    for &(lo, hi) in EXPM1_ACCURATE_POLY[..13].iter().rev() {
        p = Dekker::mul_add(Dekker::from_bits(lo, hi), xd, p);
    }
    let x3 = TripleDouble::from_quick_mult_dd_f64(x2, x);
    let cubic = TripleDouble::quick_mult_dd(x3, p);
    let t = TripleDouble::from_f64_dd_add(x, h2);
    round_td(mode, TripleDouble::add(t, cubic))
}

/// `exp(x) - 1`, correctly rounded in the requested direction.
pub fn expm1(x: Double, mode: RoundingMode) -> Double {
    if x.is_nan() {
        return x + x;
    }
    if x.is_infinite() {
        return if x.is_sign_negative() { Double::NEG_ONE } else { x };
    }
    if x.is_zero() {
        return x;
    }
    let ax = x.abs();
    if ax < Double::pow2(-54) {
        // x + x^2/2 lies just above x
        return round_perturbed(x, true, mode);
    }
    if x <= Double::from_f64(-38.0) {
        // exp(x) < 2^-54
        return round_perturbed(Double::NEG_ONE, true, mode);
    }
    if x > Double::from_f64(709.0) {
        return exp(x, mode);
    }
    if ax < Double::pow2(-5) {
        return expm1_small(x, mode);
    }
    let red = exp_reduce(x);
    let (e, y) = exp_quick(red.k, red.r);
    let scale = Double::pow2(e);
    let y = Dekker::add_cond(
        Dekker::new(y.lo * scale, y.hi * scale),
        Dekker::from_double(Double::NEG_ONE),
    );
    if let Some(r) = quick_round(mode, y, EXPM1_QUICK) {
        return r;
    }
    trace_tier!("expm1", "accurate");
    let (e, t) = exp_accurate(red.k, red.r_td());
    let scale = Double::pow2(e);
    let t = TripleDouble::new(t.lo * scale, t.mid * scale, t.hi * scale);
    round_td(
        mode,
        TripleDouble::add_cond(t, TripleDouble::from_double(Double::NEG_ONE)),
    )
}

rounding_variants!(expm1, expm1_rn, expm1_ru, expm1_rd, expm1_rz, "exp(x) - 1");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expm1_specials() {
        assert_eq!(expm1_rn(Double::NEG_ZERO).to_bits(), Double::NEG_ZERO.to_bits());
        assert_eq!(expm1_rn(Double::NEG_INFINITY), Double::NEG_ONE);
        assert_eq!(expm1_rn(Double::INFINITY), Double::INFINITY);
        assert!(expm1_rd(Double::NAN).is_nan());
    }

    #[test]
    fn test_expm1_saturation() {
        let x = Double::from_f64(-40.0);
        assert_eq!(expm1_rn(x), Double::NEG_ONE);
        assert_eq!(expm1_rd(x), Double::NEG_ONE);
        assert_eq!(expm1_ru(x), Double::NEG_ONE.next_up());
        assert_eq!(expm1_rz(x), Double::NEG_ONE.next_up());
        let x = Double::from_f64(-1e-300);
        assert_eq!(expm1_rn(x), x);
        assert_eq!(expm1_ru(x), x.next_up());
        assert_eq!(expm1_rz(x), x.next_up());
        assert_eq!(expm1_rd(x), x);
    }

    #[test]
    fn test_expm1_reference() {
        use crate::math::common::tests::check_modes;
        check_modes(
            "expm1",
            expm1,
            &[
            (0x3ddb7cdfd9d7bdbb, 0x3ddb7cdfd9dda4e3, 0x3ddb7cdfd9dda4e4, 0x3ddb7cdfd9dda4e3, 0x3ddb7cdfd9dda4e3),
            (0xbddb7cdfd9d7bdbb, 0xbddb7cdfd9d1d693, 0xbddb7cdfd9d1d692, 0xbddb7cdfd9d1d693, 0xbddb7cdfd9d1d692),
            (0x3fe0000000000000, 0x3fe4c2531c3c0d38, 0x3fe4c2531c3c0d38, 0x3fe4c2531c3c0d37, 0x3fe4c2531c3c0d37),
            (0xbfe0000000000000, 0xbfd92e9a0720d3ec, 0xbfd92e9a0720d3ec, 0xbfd92e9a0720d3ed, 0xbfd92e9a0720d3ec),
            (0x3f50624dd2f1a9fc, 0x3f506466dfb8cf3a, 0x3f506466dfb8cf3b, 0x3f506466dfb8cf3a, 0x3f506466dfb8cf3a),
            (0x4008000000000000, 0x403315e5bf6fb106, 0x403315e5bf6fb106, 0x403315e5bf6fb105, 0x403315e5bf6fb105),
            (0x4085e00000000000, 0x7f0d945df4f8ec8e, 0x7f0d945df4f8ec8f, 0x7f0d945df4f8ec8e, 0x7f0d945df4f8ec8e),
            (0xc03e000000000000, 0xbfeffffffffffcb5, 0xbfeffffffffffcb5, 0xbfeffffffffffcb6, 0xbfeffffffffffcb5),
            (0x3e10000000000000, 0x3e10000000200000, 0x3e10000000200001, 0x3e10000000200000, 0x3e10000000200000),
            (0x3fc0000000000000, 0x3fc10b022db7ae68, 0x3fc10b022db7ae68, 0x3fc10b022db7ae67, 0x3fc10b022db7ae67),
            ],
        );
    }
}
