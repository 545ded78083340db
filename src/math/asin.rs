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
use crate::math::asin_tables::{ASIN_POLY_DD, ASIN_POLY_TD};
use crate::math::common::{fmla, horner_bits, rounding_variants};
use crate::math::sqrt::sqrt_td;
use crate::rounding::{QuickBound, RoundingMode, quick_round, round_perturbed, round_td};
use crate::triple_double::TripleDouble;

pub(crate) const PIO2_TD: TripleDouble =
    TripleDouble::from_bit_pair((0xb91f1976b7ed8fbc, 0x3c91a62633145c07, 0x3ff921fb54442d18));

pub(crate) const ASIN_QUICK: QuickBound =
    QuickBound::from_bits(0x3c20000000000000, 0x3ff0400000000001);

/// `(2k)! / (4^k (k!)^2 (2k+1))`, the odd series of asin, `k` in `1..=10`.
static ASIN_ODD_QUICK: [u64; 10] = [
    0x3fc5555555555555,
    0x3fb3333333333333,
    0x3fa6db6db6db6db7,
    0x3f9f1c71c71c71c7,
    0x3f96e8ba2e8ba2e9,
    0x3f91c4ec4ec4ec4f,
    0x3f8c99999999999a,
    0x3f87a87878787878,
    0x3f83fde50d79435e,
    0x3f812ef3cf3cf3cf,
];
const ASIN_ODD_C3: TripleDouble =
    TripleDouble::from_bit_pair((0x3905555555555555, 0x3c65555555555555, 0x3fc5555555555555));
const ASIN_ODD_C5: TripleDouble =
    TripleDouble::from_bit_pair((0xb8e999999999999a, 0x3c4999999999999a, 0x3fb3333333333333));
/// Orders 7 to 21 of the odd series.
static ASIN_ODD_DD: [(u64, u64); 8] = [
    (0xbc32492492492492, 0x3fa6db6db6db6db7),
    (0x3c1c71c71c71c71c, 0x3f9f1c71c71c71c7),
    (0xbc31745d1745d174, 0x3f96e8ba2e8ba2e9),
    (0xbc2d89d89d89d89e, 0x3f91c4ec4ec4ec4f),
    (0xbc2999999999999a, 0x3f8c99999999999a),
    (0x3c2e1e1e1e1e1e1e, 0x3f87a87878787878),
    (0x3c2435e50d79435e, 0x3f83fde50d79435e),
    (0x3c1e79e79e79e79e, 0x3f812ef3cf3cf3cf),
];

fn dd_horner(x: Dekker, coeffs: &[(u64, u64)]) -> Dekker {
    let (lo, hi) = coeffs[coeffs.len() - 1];
    let mut p = Dekker::from_bits(lo, hi);
    for &(lo, hi) in coeffs.iter().rev().skip(1) {
        p = Dekker::mul_add(Dekker::from_bits(lo, hi), x, p);
    }
    p
}

#[inline]
fn interval_of(s: Double) -> usize {
    ((s * 64.0).to_s32() as usize).min(31)
}

#[inline]
fn midpoint(i: usize) -> Double {
    Double::from_s32(2 * i as i32 + 1) * Double::pow2(-7)
}

/// `asin(s)` for `s` in `[0, 0.5]`, double-double.
pub(crate) fn asin_core_quick(s: Dekker) -> Dekker {
    let i = interval_of(s.hi);
    if i == 0 {
        let u = s.hi * s.hi;
        let q = horner_bits(u, &ASIN_ODD_QUICK) * u;
        return Dekker::add_d(s, s.hi * q);
    }
    let z = Dekker::add_cond(s, Dekker::from_double(-midpoint(i)));
    let td = &ASIN_POLY_TD[i - 1];
    let dd = &ASIN_POLY_DD[i - 1];
    let coeff_hi = |k: usize| {
        if k < 8 {
            Double::from_bits(td[k].2)
        } else {
            Double::from_bits(dd[k - 8].1)
        }
    };
    let mut p = Double::ZERO;
    for k in (3..12).rev() {
        p = fmla(z.hi, p, coeff_hi(k));
    }
    let mut acc = Dekker::from_double(p);
    for c in td[..3].iter().rev() {
        acc = Dekker::mul_add(TripleDouble::from_bit_pair(*c).to_dd(), z, acc);
    }
    acc
}

/// Triple-double counterpart of [asin_core_quick], relative error below 2^-130.
pub(crate) fn asin_core_accurate(s: TripleDouble) -> TripleDouble {
    let i = interval_of(s.hi);
    if i == 0 {
        let u = TripleDouble::quick_square(s);
        let p = TripleDouble::from_dd(dd_horner(u.to_dd(), &ASIN_ODD_DD));
        let p = TripleDouble::add_cond(ASIN_ODD_C5, TripleDouble::quick_mult(p, u));
        let p = TripleDouble::add_cond(ASIN_ODD_C3, TripleDouble::quick_mult(p, u));
        let p = TripleDouble::add_f64(Double::ONE, TripleDouble::quick_mult(p, u));
        return TripleDouble::quick_mult(p, s);
    }
    let z = TripleDouble::add_cond(s, TripleDouble::from_double(-midpoint(i)));
    let mut acc = TripleDouble::from_dd(dd_horner(z.to_dd(), &ASIN_POLY_DD[i - 1]));
    for &c in ASIN_POLY_TD[i - 1].iter().rev() {
        acc = TripleDouble::add_cond(TripleDouble::from_bit_pair(c), TripleDouble::quick_mult(acc, z));
    }
    acc
}

/// `|x| = 1 - 2s^2` for `0.5 < |x| < 1`, so that `asin(|x|) = π/2 - 2 asin(s)`.
pub(crate) fn half_angle(ax: Double) -> TripleDouble {
    sqrt_td((Double::ONE - ax) * 0.5)
}

#[inline]
pub(crate) fn twice(t: TripleDouble) -> TripleDouble {
    TripleDouble::new(t.lo * 2.0, t.mid * 2.0, t.hi * 2.0)
}

#[inline]
pub(crate) fn twice_dd(t: Dekker) -> Dekker {
    Dekker::new(t.lo * 2.0, t.hi * 2.0)
}

/// Arcsine, correctly rounded in the requested direction.
pub fn asin(x: Double, mode: RoundingMode) -> Double {
    if x.is_nan() {
        return x + x;
    }
    let ax = x.abs();
    if ax > Double::ONE {
        return Double::NAN;
    }
    if x.is_zero() {
        return x;
    }
    let negative = x.is_sign_negative();
    if ax == Double::ONE {
        return round_td(mode, if negative { -PIO2_TD } else { PIO2_TD });
    }
    // asin(x) - x ~ x^3 / 6
    if ax < Double::pow2(-27) {
        return round_perturbed(x, !negative, mode);
    }

    let sign = |d: Dekker| if negative { d.neg() } else { d };
    let half = (ax > Double::from_f64(0.5)).then(|| half_angle(ax));
    let quick = match half {
        None => asin_core_quick(Dekker::from_double(ax)),
        Some(s) => {
            let a = twice_dd(asin_core_quick(s.to_dd()));
            Dekker::add_cond(PIO2_TD.to_dd(), a.neg())
        }
    };
    if let Some(r) = quick_round(mode, sign(quick), ASIN_QUICK) {
        return r;
    }

    trace_tier!("asin", "accurate");
    let v = match half {
        None => asin_core_accurate(TripleDouble::from_double(ax)),
        Some(s) => TripleDouble::add_cond(PIO2_TD, -twice(asin_core_accurate(s))),
    };
    round_td(mode, if negative { -v } else { v })
}

rounding_variants!(asin, asin_rn, asin_ru, asin_rd, asin_rz, "arcsine");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::common::tests::{check_brackets, check_modes};
    use rand::Rng;

    #[test]
    fn test_asin_specials() {
        assert!(asin_rn(Double::from_f64(1.5)).is_nan());
        assert!(asin_rn(Double::NEG_INFINITY).is_nan());
        assert!(asin_rd(Double::NAN).is_nan());
        assert_eq!(asin_rn(Double::NEG_ZERO).to_bits(), Double::NEG_ZERO.to_bits());
        let pio2 = Double::from_bits(0x3ff921fb54442d18);
        assert_eq!(asin_rn(Double::ONE), pio2);
        assert_eq!(asin_ru(Double::ONE), pio2.next_up());
        assert_eq!(asin_rd(Double::ONE), pio2);
        assert_eq!(asin_rd(Double::NEG_ONE), -pio2.next_up());
        assert_eq!(asin_rz(Double::NEG_ONE), -pio2);
    }

    #[test]
    fn test_asin_tiny() {
        let x = Double::from_f64(1e-9);
        assert_eq!(asin_rn(x), x);
        assert_eq!(asin_ru(x), x.next_up());
        assert_eq!(asin_rz(x), x);
        assert_eq!(asin_rd(-x), (-x).next_down());
        assert_eq!(asin_rz(-x), -x);
    }

    #[test]
    fn test_asin_reference() {
        check_modes(
            "asin",
            asin,
            &[
            (0x3fb999999999999a, 0x3fb9a49276037884, 0x3fb9a49276037885, 0x3fb9a49276037884, 0x3fb9a49276037884),
            (0xbfd3333333333333, 0xbfd380159e14f6ff, 0xbfd380159e14f6fe, 0xbfd380159e14f6ff, 0xbfd380159e14f6fe),
            (0x3fe0000000000000, 0x3fe0c152382d7366, 0x3fe0c152382d7366, 0x3fe0c152382d7365, 0x3fe0c152382d7365),
            (0xbfe0000000000000, 0xbfe0c152382d7366, 0xbfe0c152382d7365, 0xbfe0c152382d7366, 0xbfe0c152382d7365),
            (0x3fe6666666666666, 0x3fe8d00e692afd95, 0x3fe8d00e692afd96, 0x3fe8d00e692afd95, 0x3fe8d00e692afd95),
            (0xbfefae147ae147ae, 0xbff6de3c6f33d51d, 0xbff6de3c6f33d51d, 0xbff6de3c6f33d51e, 0xbff6de3c6f33d51d),
            (0x3feffffde7210be9, 0x3ff91c306b2c13ad, 0x3ff91c306b2c13ad, 0x3ff91c306b2c13ac, 0x3ff91c306b2c13ac),
            (0x3f90000000000000, 0x3f90002aabdde94c, 0x3f90002aabdde94d, 0x3f90002aabdde94c, 0x3f90002aabdde94c),
            (0x3fc99999999a199a, 0x3fc9c618aa4b64e1, 0x3fc9c618aa4b64e1, 0x3fc9c618aa4b64e0, 0x3fc9c618aa4b64e0),
            (0x3ee4f8b588e368f1, 0x3ee4f8b588e4e940, 0x3ee4f8b588e4e940, 0x3ee4f8b588e4e93f, 0x3ee4f8b588e4e93f),
            (0x3e601b2b29a4692b, 0x3e601b2b29a4692c, 0x3e601b2b29a4692c, 0x3e601b2b29a4692b, 0x3e601b2b29a4692b),
            (0x3fdfffffffffffff, 0x3fe0c152382d7365, 0x3fe0c152382d7365, 0x3fe0c152382d7364, 0x3fe0c152382d7364),
            (0x3fefffffffffffff, 0x3ff921fb50442d18, 0x3ff921fb50442d19, 0x3ff921fb50442d18, 0x3ff921fb50442d18),
            (0xbfe3333333333333, 0xbfe4978fa3269ee1, 0xbfe4978fa3269ee0, 0xbfe4978fa3269ee1, 0xbfe4978fa3269ee0),
            ],
        );
    }

    #[test]
    fn test_asin_brackets() {
        let mut rng = rand::rng();
        for _ in 0..3000 {
            let x = Double::from_f64(rng.random_range(-1.0..1.0));
            check_brackets("asin", asin, x);
            assert_eq!(asin_rn(-x), -asin_rn(x));
        }
    }
}
