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
use crate::double::Double;
use crate::math::common::horner_bits;
use crate::math::trigo_tables::{COS_TABLE, SIN_TABLE};
use crate::rounding::{QuickBound, RoundingMode, quick_round, try_round_td};
use crate::scs::{Scs, rem_pio2_scs, rem_pio256_scs};
use crate::triple_double::TripleDouble;

// 256/π
const INV_PIO256: Double = Double::from_bits(0x40545f306dc9c883);
// π/256 = C1 + C2 + C3 + C4, C1 and C2 on 26 bits
const PIO256_C1: Double = Double::from_bits(0x3f8921fb50000000);
const PIO256_C2: Double = Double::from_bits(0x3de110b460000000);
const PIO256_C3: Double = Double::from_bits(0x3c21a62633145c07);
const PIO256_C4: Double = Double::from_bits(0xb8af1976b7ed8fbc);

/// Cody-Waite reduction stays exact in its first two steps below this.
pub(crate) const CODY_WAITE_LIMIT: Double = Double::from_bits(0x4130000000000000);

const TRIG_QUICK: QuickBound = QuickBound::from_bits(0x3c10000000000000, 0x3ff0200000000001);
const TAN_QUICK: QuickBound = QuickBound::from_bits(0x3c20000000000000, 0x3ff0400000000001);
/// Relative error of the triple-double evaluation.
pub(crate) const TRIG_ACCURATE_EPS: Double = Double::from_bits(0x3870000000000000);

/// `-1/3!, 1/5!, -1/7!`
static SIN_QUICK_POLY: [u64; 3] = [0xbfc5555555555555, 0x3f81111111111111, 0xbf2a01a01a01a01a];
/// `-1/2!, 1/4!, -1/6!`
static COS_QUICK_POLY: [u64; 3] = [0xbfe0000000000000, 0x3fa5555555555555, 0xbf56c16c16c16c17];

/// `(-1)^k / (2k+1)!` for `k` in `3..=6`.
static SIN_ACCURATE_POLY: [(u64, u64); 4] = [
    (0xbb6a01a01a01a01a, 0xbf2a01a01a01a01a),
    (0xbb6c154f8ddc6c00, 0x3ec71de3a556c734),
    (0x3afc062e06d1f209, 0xbe5ae64567f544e4),
    (0x3a8f28e0cc748ebe, 0x3de6124613a86d09),
];
/// `(-1)^k / (2k)!` for `k` in `3..=6`.
static COS_ACCURATE_POLY: [(u64, u64); 4] = [
    (0x3bef49f49f49f49f, 0xbf56c16c16c16c17),
    (0x3b3a01a01a01a01a, 0x3efa01a01a01a01a),
    (0xbb3cbbc05b4fa99a, 0xbe927e4fb7789f5c),
    (0xbac2aec959e14c06, 0x3e21eed8eff8d898),
];
const SIN_C3: TripleDouble =
    TripleDouble::from_bit_pair((0xb905555555555555, 0xbc65555555555555, 0xbfc5555555555555));
const SIN_C5: TripleDouble =
    TripleDouble::from_bit_pair((0x3881111111111111, 0x3c01111111111111, 0x3f81111111111111));
const COS_C4: TripleDouble =
    TripleDouble::from_bit_pair((0x38e5555555555555, 0x3c45555555555555, 0x3fa5555555555555));

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum TrigFunction {
    Sin,
    Cos,
    Tan,
}

impl TrigFunction {
    const fn name(self) -> &'static str {
        match self {
            TrigFunction::Sin => "sin",
            TrigFunction::Cos => "cos",
            TrigFunction::Tan => "tan",
        }
    }
}

/// `x = k * π/256 + y` with `k` taken modulo 512.
#[derive(Copy, Clone, Debug)]
pub(crate) struct TrigReduction {
    pub(crate) k: i32,
    pub(crate) y: TripleDouble,
}

impl TrigReduction {
    /// The table angle is a multiple of π/2, where sine or cosine vanishes.
    #[inline]
    pub(crate) fn on_axis(&self) -> bool {
        self.k & 127 == 0
    }
}

/// Four-part Cody-Waite reduction for `|x| < 2^20`, absolute error
/// around `2^-136`.
pub(crate) fn reduce_cody_waite(x: Double) -> TrigReduction {
    let kd = round_even(x * INV_PIO256);
    let t1 = x - kd * PIO256_C1;
    let t2 = Dekker::from_full_exact_add(t1, -(kd * PIO256_C2));
    let kc3 = Dekker::from_exact_mult(kd, PIO256_C3);
    let y = TripleDouble::add_cond(TripleDouble::from_dd(t2), TripleDouble::from_dd(kc3.neg()));
    let y = TripleDouble::add_cond(y, TripleDouble::from_double(-(kd * PIO256_C4)));
    TrigReduction {
        k: kd.to_s32() & 511,
        y: y.renormalize(),
    }
}

/// Leading three doubles of a multi-precision value.
pub(crate) fn scs_to_td(v: &Scs) -> TripleDouble {
    let hi = v.to_double();
    let r = Scs::sub(v, &Scs::from_double(hi));
    let mid = r.to_double();
    let r = Scs::sub(&r, &Scs::from_double(mid));
    TripleDouble::new(r.to_double(), mid, hi)
}

/// Reduction good for any finite `x`, relative error of `y` about `2^-150`.
pub(crate) fn reduce_scs(x: Double) -> TrigReduction {
    let (k, y) = rem_pio256_scs(x);
    TrigReduction { k, y: scs_to_td(&y) }
}

/// `sin(kπ/256)` and `cos(kπ/256)` for `k` in `0..512`.
pub(crate) fn table_sincos(k: i32) -> (TripleDouble, TripleDouble) {
    let quadrant = (k >> 7) & 3;
    let j = (k & 127) as usize;
    let (s, c) = if j <= 64 {
        (SIN_TABLE[j], COS_TABLE[j])
    } else {
        (COS_TABLE[128 - j], SIN_TABLE[128 - j])
    };
    let (s, c) = (TripleDouble::from_bit_pair(s), TripleDouble::from_bit_pair(c));
    match quadrant {
        0 => (s, c),
        1 => (c, -s),
        2 => (-s, -c),
        _ => (-c, s),
    }
}

/// Double-double `sin(a + y)` and `cos(a + y)` with `a = kπ/256`.
pub(crate) fn sincos_quick(k: i32, y: Dekker) -> (Dekker, Dekker) {
    let (s, c) = table_sincos(k);
    let (s, c) = (s.to_dd(), c.to_dd());
    let y2 = y.hi * y.hi;
    // sin(y) = y * (1 + ts), cos(y) = 1 + tc
    let ts = y2 * horner_bits(y2, &SIN_QUICK_POLY);
    let tc = y2 * horner_bits(y2, &COS_QUICK_POLY);

    let cy = Dekker::mult(c, y);
    let sin = Dekker::add_d(Dekker::add_cond(s, cy), s.hi * tc + (c.hi * y.hi) * ts);
    let sy = Dekker::mult(s, y);
    let cos = Dekker::add_d(Dekker::add_cond(c, sy.neg()), c.hi * tc - (s.hi * y.hi) * ts);
    (sin, cos)
}

fn dd_poly(x: Dekker, coeffs: &[(u64, u64)]) -> Dekker {
    let (lo, hi) = coeffs[coeffs.len() - 1];
    let mut p = Dekker::from_bits(lo, hi);
    for &(lo, hi) in coeffs.iter().rev().skip(1) {
        p = Dekker::mul_add(Dekker::from_bits(lo, hi), x, p);
    }
    p
}

/// Triple-double counterpart of [sincos_quick].
pub(crate) fn sincos_accurate(k: i32, y: TripleDouble) -> (TripleDouble, TripleDouble) {
    let (s, c) = table_sincos(k);
    let y2 = TripleDouble::quick_square(y);
    let y2d = y2.to_dd();

    let p = TripleDouble::from_dd(dd_poly(y2d, &SIN_ACCURATE_POLY));
    let p = TripleDouble::add(SIN_C5, TripleDouble::quick_mult(p, y2));
    let p = TripleDouble::add(SIN_C3, TripleDouble::quick_mult(p, y2));
    let p = TripleDouble::add_f64(Double::ONE, TripleDouble::quick_mult(p, y2));
    let sin_y = TripleDouble::quick_mult(p, y);

    let q = TripleDouble::from_dd(dd_poly(y2d, &COS_ACCURATE_POLY));
    let q = TripleDouble::add(COS_C4, TripleDouble::quick_mult(q, y2));
    let q = TripleDouble::add_f64(Double::from_f64(-0.5), TripleDouble::quick_mult(q, y2));
    let cos_y = TripleDouble::add_f64(Double::ONE, TripleDouble::quick_mult(q, y2));

    let sin = TripleDouble::add_cond(
        TripleDouble::quick_mult(s, cos_y),
        TripleDouble::quick_mult(c, sin_y),
    );
    let cos = TripleDouble::add_cond(
        TripleDouble::quick_mult(c, cos_y),
        -TripleDouble::quick_mult(s, sin_y),
    );
    (sin, cos)
}

/// Taylor series of `sin(y)` and `cos(y)` for `|y| <= π/4`.
fn sincos_scs(y: &Scs) -> (Scs, Scs) {
    let one = Scs::from_double(Double::ONE);
    let y2 = Scs::square(y);
    let mut acc = one;
    for k in (1..=22u32).rev() {
        acc = Scs::sub(&one, &Scs::div_int(&Scs::mul(&y2, &acc), (2 * k) * (2 * k + 1)));
    }
    let sin = Scs::mul(y, &acc);
    let mut acc = one;
    for k in (1..=22u32).rev() {
        acc = Scs::sub(&one, &Scs::div_int(&Scs::mul(&y2, &acc), (2 * k - 1) * (2 * k)));
    }
    (sin, acc)
}

/// Last resort evaluation on a quadrant reduction carried in
/// multi-precision throughout.
fn trig_scs(x: Double, func: TrigFunction, mode: RoundingMode) -> Double {
    let (n, y) = rem_pio2_scs(x);
    let (sin, cos) = sincos_scs(&y);
    let r = match (func, n) {
        (TrigFunction::Sin, 0) | (TrigFunction::Cos, 3) => sin,
        (TrigFunction::Sin, 1) | (TrigFunction::Cos, 0) => cos,
        (TrigFunction::Sin, 2) | (TrigFunction::Cos, 1) => -sin,
        (TrigFunction::Sin, _) | (TrigFunction::Cos, _) => -cos,
        (TrigFunction::Tan, n) if n & 1 == 0 => Scs::div(&sin, &cos),
        (TrigFunction::Tan, _) => -Scs::div(&cos, &sin),
    };
    r.to_double_mode(mode)
}

/// Sine, cosine or tangent of a finite `x` past the tiny argument range.
pub(crate) fn trig_reduced(x: Double, func: TrigFunction, mode: RoundingMode) -> Double {
    let large = x.abs() >= CODY_WAITE_LIMIT;
    let mut red = if large {
        reduce_scs(x)
    } else {
        reduce_cody_waite(x)
    };
    // next to a zero or a pole the Cody-Waite remainder may lack bits
    let near_axis = !large && red.on_axis() && red.k != 0;

    if !near_axis || red.y.hi.abs() > Double::pow2(-60) {
        let (sin, cos) = sincos_quick(red.k, red.y.to_dd());
        let (v, bound) = match func {
            TrigFunction::Sin => (sin, TRIG_QUICK),
            TrigFunction::Cos => (cos, TRIG_QUICK),
            TrigFunction::Tan => (Dekker::div(sin, cos), TAN_QUICK),
        };
        if let Some(r) = quick_round(mode, v, bound) {
            return r;
        }
    }

    trace_tier!(func.name(), "accurate");
    if near_axis && red.y.hi.abs() < Double::pow2(-11) {
        red = reduce_scs(x);
    }
    let (sin, cos) = sincos_accurate(red.k, red.y);
    let v = match func {
        TrigFunction::Sin => sin,
        TrigFunction::Cos => cos,
        TrigFunction::Tan => TripleDouble::quick_mult(sin, cos.recip()),
    };
    if let Some(r) = try_round_td(mode, v, TRIG_ACCURATE_EPS) {
        return r;
    }

    trace_tier!(func.name(), "scs");
    trig_scs(x, func, mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::common::tests::check_modes;

    #[test]
    fn test_table_quadrants() {
        // k = 128 is π/2
        let (s, c) = table_sincos(128);
        assert_eq!(s.hi, Double::ONE);
        assert!(c.hi.is_zero());
        let (s, c) = table_sincos(256 + 64);
        assert!(s.hi < Double::ZERO && c.hi < Double::ZERO);
        assert_eq!(s.hi, c.hi);
        let (s, c) = table_sincos(100);
        let (s2, c2) = table_sincos(28);
        assert_eq!(s.hi, c2.hi);
        assert_eq!(c.hi, s2.hi);
    }

    #[test]
    fn test_cody_waite() {
        let red = reduce_cody_waite(Double::from_f64(1.0));
        assert_eq!(red.k, 81);
        let pi = reduce_cody_waite(Double::from_f64(std::f64::consts::PI));
        assert_eq!(pi.k, 256);
        // fl(π) - π
        assert_eq!(pi.y.hi.to_bits(), 0xbca1a62633145c07);
        let neg = reduce_cody_waite(Double::from_f64(-1.0));
        assert_eq!(neg.k, 512 - 81);
        assert_eq!(neg.y.hi, -red.y.hi);
    }

    #[test]
    fn test_reductions_agree() {
        for x in [3.0, 100.5, 12345.678, -987654.321, 1048575.0] {
            let x = Double::from_f64(x);
            let a = reduce_cody_waite(x);
            let b = reduce_scs(x);
            assert_eq!(a.k, b.k, "{x:?}");
            assert_eq!(a.y.hi, b.y.hi, "{x:?}");
        }
    }

    // small, next to multiples of π/2, and past 2^1000
    static SIN_CASES: &[(u64, u64, u64, u64, u64)] = &[
        (0x3fe0000000000000, 0x3fdeaee8744b05f0, 0x3fdeaee8744b05f0, 0x3fdeaee8744b05ef, 0x3fdeaee8744b05ef),
        (0x3ee4f8b588e368f1, 0x3ee4f8b588e1e8a2, 0x3ee4f8b588e1e8a3, 0x3ee4f8b588e1e8a2, 0x3ee4f8b588e1e8a2),
        (0xc000000000000000, 0xbfed18f6ead1b446, 0xbfed18f6ead1b445, 0xbfed18f6ead1b446, 0xbfed18f6ead1b445),
        (0x3ff921fb54442d18, 0x3ff0000000000000, 0x3ff0000000000000, 0x3fefffffffffffff, 0x3fefffffffffffff),
        (0x400921fb54442d18, 0x3ca1a62633145c07, 0x3ca1a62633145c07, 0x3ca1a62633145c06, 0x3ca1a62633145c06),
        (0x4012d97c7f3321d2, 0xbff0000000000000, 0xbfefffffffffffff, 0xbff0000000000000, 0xbfefffffffffffff),
        (0xc01921fb54442d18, 0x3cb1a62633145c07, 0x3cb1a62633145c07, 0x3cb1a62633145c06, 0x3cb1a62633145c06),
        (0x7e70000000000000, 0xbfc460b8ae1c886e, 0xbfc460b8ae1c886e, 0xbfc460b8ae1c886f, 0xbfc460b8ae1c886e),
        (0x7506ac5b262ca1ff, 0x3ff0000000000000, 0x3ff0000000000000, 0x3fefffffffffffff, 0x3fefffffffffffff),
        (0xfe37e43c8800759c, 0x3fea2c16b010e385, 0x3fea2c16b010e386, 0x3fea2c16b010e385, 0x3fea2c16b010e385),
    ];

    static COS_CASES: &[(u64, u64, u64, u64, u64)] = &[
        (0x3fe0000000000000, 0x3fec1528065b7d50, 0x3fec1528065b7d50, 0x3fec1528065b7d4f, 0x3fec1528065b7d4f),
        (0x3ee4f8b588e368f1, 0x3feffffffff920c8, 0x3feffffffff920c9, 0x3feffffffff920c8, 0x3feffffffff920c8),
        (0xc000000000000000, 0xbfdaa22657537205, 0xbfdaa22657537204, 0xbfdaa22657537205, 0xbfdaa22657537204),
        (0x3ff921fb54442d18, 0x3c91a62633145c07, 0x3c91a62633145c07, 0x3c91a62633145c06, 0x3c91a62633145c06),
        (0x400921fb54442d18, 0xbff0000000000000, 0xbfefffffffffffff, 0xbff0000000000000, 0xbfefffffffffffff),
        (0x4012d97c7f3321d2, 0xbcaa79394c9e8a0a, 0xbcaa79394c9e8a0a, 0xbcaa79394c9e8a0b, 0xbcaa79394c9e8a0a),
        (0xc01921fb54442d18, 0x3ff0000000000000, 0x3ff0000000000000, 0x3fefffffffffffff, 0x3fefffffffffffff),
        (0x7e70000000000000, 0x3fef9785160c8815, 0x3fef9785160c8816, 0x3fef9785160c8815, 0x3fef9785160c8815),
        (0x7506ac5b262ca1ff, 0xbc214ae72e6ba22f, 0xbc214ae72e6ba22e, 0xbc214ae72e6ba22f, 0xbc214ae72e6ba22e),
        (0xfe37e43c8800759c, 0xbfe2699022adc4c1, 0xbfe2699022adc4c0, 0xbfe2699022adc4c1, 0xbfe2699022adc4c0),
    ];

    static TAN_CASES: &[(u64, u64, u64, u64, u64)] = &[
        (0x3fe0000000000000, 0x3fe17b4f5bf3474a, 0x3fe17b4f5bf3474b, 0x3fe17b4f5bf3474a, 0x3fe17b4f5bf3474a),
        (0x3ee4f8b588e368f1, 0x3ee4f8b588e6698e, 0x3ee4f8b588e6698f, 0x3ee4f8b588e6698e, 0x3ee4f8b588e6698e),
        (0xc000000000000000, 0x40017af62e0950f8, 0x40017af62e0950f9, 0x40017af62e0950f8, 0x40017af62e0950f8),
        (0x3ff921fb54442d18, 0x434d02967c31cdb5, 0x434d02967c31cdb5, 0x434d02967c31cdb4, 0x434d02967c31cdb4),
        (0x400921fb54442d18, 0xbca1a62633145c07, 0xbca1a62633145c06, 0xbca1a62633145c07, 0xbca1a62633145c06),
        (0x4012d97c7f3321d2, 0x4333570efd768923, 0x4333570efd768924, 0x4333570efd768923, 0x4333570efd768923),
        (0xc01921fb54442d18, 0x3cb1a62633145c07, 0x3cb1a62633145c07, 0x3cb1a62633145c06, 0x3cb1a62633145c06),
        (0x7e70000000000000, 0xbfc4a41d560c08cc, 0xbfc4a41d560c08cb, 0xbfc4a41d560c08cc, 0xbfc4a41d560c08cb),
        (0x7506ac5b262ca1ff, 0xc3bd9ba9a7975636, 0xc3bd9ba9a7975635, 0xc3bd9ba9a7975636, 0xc3bd9ba9a7975635),
        (0xfe37e43c8800759c, 0xbff6be411f37ac77, 0xbff6be411f37ac76, 0xbff6be411f37ac77, 0xbff6be411f37ac76),
    ];

    #[test]
    fn test_scs_tier_reference() {
        for (func, cases) in [
            (TrigFunction::Sin, SIN_CASES),
            (TrigFunction::Cos, COS_CASES),
            (TrigFunction::Tan, TAN_CASES),
        ] {
            check_modes(func.name(), |x, mode| trig_scs(x, func, mode), cases);
        }
    }
}
