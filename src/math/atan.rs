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
use crate::math::asin::PIO2_TD;
use crate::math::atan_tables::{ATAN_SCS_WORDS, ATAN_TABLE};
use crate::math::common::{horner_bits, rounding_variants};
use crate::rounding::{QuickBound, RoundingMode, quick_round, round_perturbed, round_td, try_round_td};
use crate::scs::Scs;
use crate::scs::tables::PIO2_SCS;
use crate::triple_double::TripleDouble;

const ATAN_QUICK: QuickBound = QuickBound::from_bits(0x3c20000000000000, 0x3ff0400000000001);
const ATAN_ACCURATE_EPS: Double = Double::from_bits(0x3870000000000000);

/// `-1/3, 1/5, -1/7, 1/9`
static ATAN_QUICK_POLY: [u64; 4] = [
    0xbfd5555555555555,
    0x3fc999999999999a,
    0xbfc2492492492492,
    0x3fbc71c71c71c71c,
];
const ATAN_C3: TripleDouble =
    TripleDouble::from_bit_pair((0xb915555555555555, 0xbc75555555555555, 0xbfd5555555555555));
const ATAN_C5: TripleDouble =
    TripleDouble::from_bit_pair((0x390999999999999a, 0xbc6999999999999a, 0x3fc999999999999a));
/// `(-1)^k / (2k + 1)` for `k` in `3..10`.
static ATAN_ACCURATE_DD: [(u64, u64); 7] = [
    (0xbc62492492492492, 0xbfc2492492492492),
    (0x3c5c71c71c71c71c, 0x3fbc71c71c71c71c),
    (0x3c4745d1745d1746, 0xbfb745d1745d1746),
    (0xbc53b13b13b13b14, 0x3fb3b13b13b13b14),
    (0xbc31111111111111, 0xbfb1111111111111),
    (0x3c2e1e1e1e1e1e1e, 0x3fae1e1e1e1e1e1e),
    (0xbc4af286bca1af28, 0xbfaaf286bca1af28),
];

/// `|x|` written as `atan(|x|) = atan(b) + atan(n / d)` with `b = i / 64`,
/// or for `|x| > 1` as `π/2 - atan(b) - atan(n / d)` with `b ~ 1 / |x|`.
/// Both `n` and `d` are exact.
struct AtanReduction {
    i: usize,
    inverted: bool,
    n: TripleDouble,
    d: TripleDouble,
}

fn reduce(ax: Double) -> AtanReduction {
    if ax <= Double::ONE {
        let i = round_even(ax * 64.0).to_s32();
        let b = Double::from_s32(i) * Double::pow2(-6);
        let p = Dekker::from_exact_mult(ax, b);
        AtanReduction {
            i: i as usize,
            inverted: false,
            n: TripleDouble::from_double(ax - b),
            d: TripleDouble::from_f64_dd_add(Double::ONE, p),
        }
    } else {
        let i = round_even(Double::from_s32(64) / ax).to_s32();
        let b = Double::from_s32(i) * Double::pow2(-6);
        let p = Dekker::from_exact_mult(b, ax);
        let t = Double::ONE - p.hi;
        AtanReduction {
            i: i as usize,
            inverted: true,
            n: TripleDouble::from_dd(Dekker::from_full_exact_add(t, -p.lo)),
            d: TripleDouble::from_dd(Dekker::from_full_exact_add(ax, b)),
        }
    }
}

impl AtanReduction {
    fn combine_dd(&self, a: Dekker) -> Dekker {
        let a = if self.i != 0 {
            let (lo, mid, hi) = ATAN_TABLE[self.i];
            Dekker::add_cond(TripleDouble::from_bit_pair((lo, mid, hi)).to_dd(), a)
        } else {
            a
        };
        if self.inverted {
            Dekker::add_cond(PIO2_TD.to_dd(), a.neg())
        } else {
            a
        }
    }

    fn combine_td(&self, a: TripleDouble) -> TripleDouble {
        let a = if self.i != 0 {
            TripleDouble::add_cond(TripleDouble::from_bit_pair(ATAN_TABLE[self.i]), a)
        } else {
            a
        };
        if self.inverted {
            TripleDouble::add_cond(PIO2_TD, -a)
        } else {
            a
        }
    }
}

/// `atan(u)` for `|u| <= 2^-7`, or `|u| < 2^-6` when the table offset is zero.
fn atan_small_quick(u: Dekker) -> Dekker {
    let u2 = u.hi * u.hi;
    let q = u2 * horner_bits(u2, &ATAN_QUICK_POLY);
    Dekker::add_d(u, u.hi * q)
}

fn atan_small_accurate(u: TripleDouble) -> TripleDouble {
    let u2 = TripleDouble::quick_mult(u, u);
    let x = u2.to_dd();
    let (lo, hi) = ATAN_ACCURATE_DD[ATAN_ACCURATE_DD.len() - 1];
    let mut p = Dekker::from_bits(lo, hi);
    for &(lo, hi) in ATAN_ACCURATE_DD.iter().rev().skip(1) {
        p = Dekker::mul_add(Dekker::from_bits(lo, hi), x, p);
    }
    let acc = TripleDouble::from_dd(p);
    let acc = TripleDouble::add_cond(ATAN_C5, TripleDouble::quick_mult(acc, u2));
    let acc = TripleDouble::add_cond(ATAN_C3, TripleDouble::quick_mult(acc, u2));
    let acc = TripleDouble::quick_mult(acc, u2);
    TripleDouble::add_cond(u, TripleDouble::quick_mult(acc, u))
}

/// Multi-precision evaluation, used when the triple-double result cannot
/// be rounded with certainty.
fn atan_scs(ax: Double, r: &AtanReduction) -> Scs {
    let x = Scs::from_double(ax);
    let one = Scs::from_double(Double::ONE);
    let u = if r.i != 0 {
        let b = Scs::from_double(Double::from_s32(r.i as i32) * Double::pow2(-6));
        if r.inverted {
            Scs::div(&Scs::sub(&one, &Scs::mul(&b, &x)), &Scs::add(&x, &b))
        } else {
            Scs::div(&Scs::sub(&x, &b), &Scs::add(&one, &Scs::mul(&x, &b)))
        }
    } else if r.inverted {
        Scs::inv(&x)
    } else {
        x
    };
    let u2 = Scs::square(&u);
    let mut acc = Scs::div_int(&one, 33);
    for k in (0..16u32).rev() {
        acc = Scs::sub(&Scs::div_int(&one, 2 * k + 1), &Scs::mul(&u2, &acc));
    }
    let mut a = Scs::mul(&u, &acc);
    if r.i != 0 {
        let offset = Scs {
            h_word: ATAN_SCS_WORDS[r.i - 1],
            exception: Double::ONE,
            index: -1,
            sign: 1,
        };
        a = Scs::add(&offset, &a);
    }
    if r.inverted {
        a = Scs::sub(&PIO2_SCS, &a);
    }
    a
}

/// Arctangent, correctly rounded in the requested direction.
pub fn atan(x: Double, mode: RoundingMode) -> Double {
    if x.is_nan() {
        return x + x;
    }
    if x.is_zero() {
        return x;
    }
    let negative = x.is_sign_negative();
    let ax = x.abs();
    if ax >= Double::pow2(54) {
        // π/2 - 1/|x|, the cubic term is far below the last digit
        let v = TripleDouble::add_cond(PIO2_TD, TripleDouble::from_double(-(Double::ONE / ax)));
        return round_td(mode, if negative { -v } else { v });
    }
    // atan(x) - x ~ -x^3 / 3
    if ax < Double::pow2(-27) {
        return round_perturbed(x, negative, mode);
    }

    let r = reduce(ax);
    let u = Dekker::div(r.n.to_dd(), r.d.renormalize().to_dd());
    let quick = r.combine_dd(atan_small_quick(u));
    if let Some(v) = quick_round(mode, if negative { quick.neg() } else { quick }, ATAN_QUICK) {
        return v;
    }

    trace_tier!("atan", "accurate");
    let u = TripleDouble::quick_mult(r.n, r.d.renormalize().recip());
    let v = r.combine_td(atan_small_accurate(u));
    if let Some(v) = try_round_td(mode, if negative { -v } else { v }, ATAN_ACCURATE_EPS) {
        return v;
    }

    trace_tier!("atan", "scs");
    let a = atan_scs(ax, &r);
    (if negative { -a } else { a }).to_double_mode(mode)
}

rounding_variants!(atan, atan_rn, atan_ru, atan_rd, atan_rz, "arctangent");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::common::tests::{check_brackets, check_modes};
    use rand::Rng;

    #[test]
    fn test_atan_specials() {
        assert!(atan_rn(Double::NAN).is_nan());
        assert_eq!(atan_rn(Double::NEG_ZERO).to_bits(), Double::NEG_ZERO.to_bits());
        assert_eq!(atan_ru(Double::ZERO).to_bits(), 0);
        let pio2 = Double::from_bits(0x3ff921fb54442d18);
        assert_eq!(atan_rn(Double::INFINITY), pio2);
        assert_eq!(atan_ru(Double::INFINITY), pio2.next_up());
        assert_eq!(atan_rd(Double::INFINITY), pio2);
        assert_eq!(atan_rn(Double::NEG_INFINITY), -pio2);
        assert_eq!(atan_rd(Double::NEG_INFINITY), -pio2.next_up());
        assert_eq!(atan_rn(Double::MAX), pio2);
        assert_eq!(atan_rz(Double::MIN), -pio2);
    }

    #[test]
    fn test_atan_tiny() {
        let x = Double::from_f64(1e-9);
        assert_eq!(atan_rn(x), x);
        assert_eq!(atan_ru(x), x);
        assert_eq!(atan_rd(x), x.next_down());
        assert_eq!(atan_rz(x), x.next_down());
        assert_eq!(atan_ru(-x), (-x).next_up());
        assert_eq!(atan_rd(-x), -x);
        assert_eq!(atan_rn(Double::MIN_SUBNORMAL), Double::MIN_SUBNORMAL);
        assert_eq!(atan_rd(Double::MIN_SUBNORMAL), Double::ZERO);
    }

    #[test]
    fn test_atan_reference() {
        check_modes(
            "atan",
            atan,
            &[
            (0x3fb999999999999a, 0x3fb983e282e2cc4d, 0x3fb983e282e2cc4d, 0x3fb983e282e2cc4c, 0x3fb983e282e2cc4c),
            (0xbfd3333333333333, 0xbfd2a73a661eaf06, 0xbfd2a73a661eaf05, 0xbfd2a73a661eaf06, 0xbfd2a73a661eaf05),
            (0x3fe0000000000000, 0x3fddac670561bb4f, 0x3fddac670561bb50, 0x3fddac670561bb4f, 0x3fddac670561bb4f),
            (0x3ff0000000000000, 0x3fe921fb54442d18, 0x3fe921fb54442d19, 0x3fe921fb54442d18, 0x3fe921fb54442d18),
            (0xbff0000000000000, 0xbfe921fb54442d18, 0xbfe921fb54442d18, 0xbfe921fb54442d19, 0xbfe921fb54442d18),
            (0x3fe6666666666666, 0x3fe38b112d7bd4ad, 0x3fe38b112d7bd4ae, 0x3fe38b112d7bd4ad, 0x3fe38b112d7bd4ad),
            (0x3ff8000000000000, 0x3fef730bd281f69b, 0x3fef730bd281f69c, 0x3fef730bd281f69b, 0x3fef730bd281f69b),
            (0xc008000000000000, 0xbff3fc176b7a8560, 0xbff3fc176b7a855f, 0xbff3fc176b7a8560, 0xbff3fc176b7a855f),
            (0x4024000000000000, 0x3ff789bd2c160054, 0x3ff789bd2c160054, 0x3ff789bd2c160053, 0x3ff789bd2c160053),
            (0x4202a05f20000000, 0x3ff921fb543d4de0, 0x3ff921fb543d4de1, 0x3ff921fb543d4de0, 0x3ff921fb543d4de0),
            (0xc30c6bf526340000, 0xbff921fb54442d14, 0xbff921fb54442d13, 0xbff921fb54442d14, 0xbff921fb54442d13),
            (0x3e601b2b29a4692b, 0x3e601b2b29a4692a, 0x3e601b2b29a4692a, 0x3e601b2b29a46929, 0x3e601b2b29a46929),
            (0x3f80000000000000, 0x3f7fffd555bbba97, 0x3f7fffd555bbba98, 0x3f7fffd555bbba97, 0x3f7fffd555bbba97),
            (0x3fdf800000000000, 0x3fdd45aec9ec862b, 0x3fdd45aec9ec862c, 0x3fdd45aec9ec862b, 0x3fdd45aec9ec862b),
            (0x43b0000000000000, 0x3ff921fb54442d18, 0x3ff921fb54442d19, 0x3ff921fb54442d18, 0x3ff921fb54442d18),
            (0x405edd2f1a9fbe77, 0x3ff900cdfeb560b4, 0x3ff900cdfeb560b4, 0x3ff900cdfeb560b3, 0x3ff900cdfeb560b3),
            ],
        );
    }

    #[test]
    fn test_atan_scs_agrees() {
        for v in [0.1, 0.75, 1.0, 1.3, 5.0, 1e6, 1e-3] {
            let ax = Double::from_f64(v);
            let r = reduce(ax);
            let a = atan_scs(ax, &r);
            assert_eq!(a.to_double_mode(RoundingMode::Nearest), atan_rn(ax), "atan({v})");
            assert_eq!(a.to_double_mode(RoundingMode::Upward), atan_ru(ax), "atan({v})");
        }
    }

    #[test]
    fn test_atan_brackets() {
        let mut rng = rand::rng();
        for _ in 0..3000 {
            let x = Double::from_f64(rng.random_range(-4.0..4.0));
            check_brackets("atan", atan, x);
            assert_eq!(atan_rn(-x), -atan_rn(x));
            let y = Double::from_f64(rng.random_range(-1e12..1e12));
            check_brackets("atan", atan, y);
        }
    }
}
