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
use crate::double::{Double, overflow_value, underflow_value};
use crate::math::common::rounding_variants;
use crate::math::exp_tables::{EXP2_HI_TABLE, EXP2_LO_TABLE};
use crate::rounding::{QuickBound, RoundingMode, quick_round, round_perturbed, round_scaled};
use crate::triple_double::TripleDouble;

// 4096 / ln(2)
pub(crate) const INV_LN2_4096: Double = Double::from_bits(0x40b71547652b82fe);
// ln(2) / 4096 = LN2_4096_HI + LN2_4096_LO, the first part on 30 bits
pub(crate) const LN2_4096_HI: Double = Double::from_bits(0x3f262e42fe800000);
pub(crate) const LN2_4096_LO: TripleDouble =
    TripleDouble::from_bit_pair((0xb66979b31ace93a5, 0xb9e8cff81a12a17e, 0x3d4e8e7bcd5e4f1e));

const EXP_QUICK: QuickBound = QuickBound::from_bits(0x3c10000000000000, 0x3ff0200000000001);

/// `x = k * ln(2) / 4096 + r`, `|r| <= ln(2) / 8192`.
#[derive(Copy, Clone, Debug)]
pub(crate) struct ExpReduction {
    pub(crate) k: i32,
    kd: Double,
    r_hi: Double,
    pub(crate) r: Dekker,
}

impl ExpReduction {
    /// Reduced argument to triple-double accuracy.
    pub(crate) fn r_td(&self) -> TripleDouble {
        let lo = TripleDouble::quick_mult_f64(LN2_4096_LO, self.kd);
        TripleDouble::add_cond(TripleDouble::from_double(self.r_hi), -lo)
    }
}

/// Reduces `|x| < 750`.
#[inline]
pub(crate) fn exp_reduce(x: Double) -> ExpReduction {
    let kd = round_even(x * INV_LN2_4096);
    // exact: kd fits 23 bits and the high part of ln(2)/4096 has 30
    let r_hi = x - kd * LN2_4096_HI;
    let m = Dekker::from_exact_mult(kd, LN2_4096_LO.hi);
    let c = kd * LN2_4096_LO.mid;
    let r = Dekker::add_cond(Dekker::from_double(r_hi), Dekker::new(-(m.lo + c), -m.hi));
    ExpReduction {
        k: kd.to_s32(),
        kd,
        r_hi,
        r,
    }
}

/// `k = 4096 * e + 64 * i + j`.
#[inline]
fn exp_split(k: i32) -> (i32, usize, usize) {
    (k >> 12, ((k >> 6) & 63) as usize, (k & 63) as usize)
}

static EXP_QUICK_POLY: [u64; 3] = [0x3fe0000000000000, 0x3fc5555555555555, 0x3fa5555555555555];

/// Returns `e` and `y` with `exp(k * ln(2) / 4096 + r) ~ 2^e * y`,
/// `y` within `[0.7, 1.5]` and relative error below 2^-70.
pub(crate) fn exp_quick(k: i32, r: Dekker) -> (i32, Dekker) {
    let q = Double::from_bits(EXP_QUICK_POLY[0])
        + r.hi
            * (Double::from_bits(EXP_QUICK_POLY[1]) + r.hi * Double::from_bits(EXP_QUICK_POLY[2]));
    let q = q * (r.hi * r.hi);
    let s = Dekker::add_d(r, q);
    let er = Dekker::add(Dekker::from_double(Double::ONE), s);
    let (e, i, j) = exp_split(k);
    let hi = TripleDouble::from_bit_pair(EXP2_HI_TABLE[i]).to_dd();
    let lo = TripleDouble::from_bit_pair(EXP2_LO_TABLE[j]).to_dd();
    (e, Dekker::mult(Dekker::mult(hi, lo), er))
}

/// `1/k!` for `k` in `2..=8`.
static EXP_ACCURATE_POLY: [(u64, u64); 7] = [
    (0x0000000000000000, 0x3fe0000000000000),
    (0x3c65555555555555, 0x3fc5555555555555),
    (0x3c45555555555555, 0x3fa5555555555555),
    (0x3c01111111111111, 0x3f81111111111111),
    (0xbbef49f49f49f49f, 0x3f56c16c16c16c17),
    (0x3b6a01a01a01a01a, 0x3f2a01a01a01a01a),
    (0x3b3a01a01a01a01a, 0x3efa01a01a01a01a),
];

/// `exp(r)` for `|r| <= ln(2) / 8192`.
fn exp_poly_td(r: TripleDouble) -> TripleDouble {
    let rd = r.to_dd();
    let mut p = Dekker::from_bits(EXP_ACCURATE_POLY[6].0, EXP_ACCURATE_POLY[6].1);
    for &(lo, hi) in EXP_ACCURATE_POLY[..6].iter().rev() {
        p = Dekker::mul_add(Dekker::from_bits(lo, hi), rd, p);
    }
    let q = Dekker::mult(Dekker::square(rd), p);
    let t = TripleDouble::add_f64(Double::ONE, r);
    TripleDouble::add(t, TripleDouble::from_dd(q))
}

/// Triple-double counterpart of [exp_quick].
pub(crate) fn exp_accurate(k: i32, r: TripleDouble) -> (i32, TripleDouble) {
    let er = exp_poly_td(r);
    let (e, i, j) = exp_split(k);
    let t = TripleDouble::quick_mult(
        TripleDouble::from_bit_pair(EXP2_HI_TABLE[i]),
        TripleDouble::from_bit_pair(EXP2_LO_TABLE[j]),
    );
    (e, TripleDouble::quick_mult(t, er))
}

/// `exp(x) = 2^e * y` in triple-double, for `|x| < 750`.
pub(crate) fn exp_td(x: Double) -> (i32, TripleDouble) {
    let red = exp_reduce(x);
    exp_accurate(red.k, red.r_td())
}

/// `exp(x) = 2^e * y` in double-double, for `|x| < 750`.
pub(crate) fn exp_dd(x: Double) -> (i32, Dekker) {
    let red = exp_reduce(x);
    exp_quick(red.k, red.r)
}

/// Exponential, correctly rounded in the requested direction.
pub fn exp(x: Double, mode: RoundingMode) -> Double {
    if x.is_nan() {
        return x + x;
    }
    if x.is_infinite() {
        return if x.is_sign_negative() { Double::ZERO } else { x };
    }
    if x.is_zero() {
        return Double::ONE;
    }
    if x.abs() < Double::pow2(-54) {
        return round_perturbed(Double::ONE, x.is_sign_positive(), mode);
    }
    if x > Double::from_f64(710.0) {
        return overflow_value(0, mode);
    }
    if x < Double::from_f64(-746.0) {
        return underflow_value(0, mode);
    }
    let red = exp_reduce(x);
    let (e, y) = exp_quick(red.k, red.r);
    if e > -1020 && e < 1020 {
        if let Some(r) = quick_round(mode, y, EXP_QUICK) {
            return r.ldexp(e);
        }
    }
    trace_tier!("exp", "accurate");
    let (e, t) = exp_accurate(red.k, red.r_td());
    round_scaled(mode, t, e)
}

rounding_variants!(exp, exp_rn, exp_ru, exp_rd, exp_rz, "exponential");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exp_specials() {
        for mode in RoundingMode::ALL {
            assert_eq!(exp(Double::ZERO, mode), Double::ONE);
            assert_eq!(exp(Double::NEG_ZERO, mode), Double::ONE);
        }
        assert_eq!(exp_rn(Double::NEG_INFINITY).to_bits(), 0);
        assert_eq!(exp_rn(Double::INFINITY), Double::INFINITY);
        assert!(exp_rn(Double::NAN).is_nan());
        assert_eq!(exp_rn(Double::from_f64(800.0)), Double::INFINITY);
        assert_eq!(exp_rz(Double::from_f64(800.0)), Double::MAX);
        assert_eq!(exp_rn(Double::from_f64(-800.0)).to_bits(), 0);
        assert_eq!(exp_ru(Double::from_f64(-800.0)), Double::MIN_SUBNORMAL);
    }

    #[test]
    fn test_exp_tiny() {
        let x = Double::from_f64(1e-17);
        assert_eq!(exp_rn(x), Double::ONE);
        assert_eq!(exp_ru(x), Double::ONE.next_up());
        assert_eq!(exp_rd(x), Double::ONE);
        assert_eq!(exp_rd(-x), Double::ONE.next_down());
        assert_eq!(exp_rz(-x), Double::ONE.next_down());
    }

    #[test]
    fn test_exp_reduce() {
        let red = exp_reduce(Double::from_f64(1.0));
        assert_eq!(red.k, 5909);
        assert!(red.r.hi.abs() < Double::from_f64(0.0000847));
        let (e, y) = exp_dd(Double::from_f64(1.0));
        assert_eq!(e, 1);
        assert_eq!(y.hi.to_f64(), std::f64::consts::E / 2.0);
    }

    #[test]
    fn test_exp_reference() {
        use crate::math::common::tests::check_modes;
        check_modes(
            "exp",
            exp,
            &[
            (0x3ff0000000000000, 0x4005bf0a8b145769, 0x4005bf0a8b14576a, 0x4005bf0a8b145769, 0x4005bf0a8b145769),
            (0xbff0000000000000, 0x3fd78b56362cef38, 0x3fd78b56362cef38, 0x3fd78b56362cef37, 0x3fd78b56362cef37),
            (0x3fe0000000000000, 0x3ffa61298e1e069c, 0x3ffa61298e1e069c, 0x3ffa61298e1e069b, 0x3ffa61298e1e069b),
            (0x4024000000000000, 0x40d5829dcf950560, 0x40d5829dcf950560, 0x40d5829dcf95055f, 0x40d5829dcf95055f),
            (0xc024000000000000, 0x3f07cd79b5647c9b, 0x3f07cd79b5647c9b, 0x3f07cd79b5647c9a, 0x3f07cd79b5647c9a),
            (0x4085e00000000000, 0x7f0d945df4f8ec8e, 0x7f0d945df4f8ec8f, 0x7f0d945df4f8ec8e, 0x7f0d945df4f8ec8e),
            (0xc085e00000000000, 0x00d14f2b0fb9307f, 0x00d14f2b0fb93080, 0x00d14f2b0fb9307f, 0x00d14f2b0fb9307f),
            (0xc087200000000000, 0x0000000000000055, 0x0000000000000055, 0x0000000000000054, 0x0000000000000054),
            (0x3ddb7cdfd9d7bdbb, 0x3ff000000006df38, 0x3ff000000006df38, 0x3ff000000006df37, 0x3ff000000006df37),
            (0x40862e3d70a3d70a, 0x7fefe9ce5c4c52b4, 0x7fefe9ce5c4c52b5, 0x7fefe9ce5c4c52b4, 0x7fefe9ce5c4c52b4),
            (0x400a666666666666, 0x403b1cd5e7807b7b, 0x403b1cd5e7807b7b, 0x403b1cd5e7807b7a, 0x403b1cd5e7807b7a),
            ],
        );
    }
}
