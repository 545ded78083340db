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
use crate::rounding::{RoundingMode, round_td};
use crate::triple_double::TripleDouble;

/// Reciprocal square root estimate refined by five Newton steps.
#[inline]
fn rsqrt_seed(m: Double) -> Double {
    let mut r = Double::from_bits(0x5fe6eb50c7b537a9u64.wrapping_sub(m.to_bits() >> 1));
    let hm = m * 0.5;
    for _ in 0..5 {
        r = r * (1.5 - hm * r * r);
    }
    r
}

/// Square root of `m` in `[1, 4)` as a triple-double.
pub(crate) fn sqrt13(m: Double) -> TripleDouble {
    let r = rsqrt_seed(m);
    let s0 = m * r;
    let p = Dekker::from_exact_mult(s0, s0);
    let eh = (m - p.hi) - p.lo;
    let hr = r * 0.5;
    let s1 = Dekker::from_exact_add(s0, eh * hr);
    // m - s1^2 refines the double-double guess one more time
    let q = TripleDouble::from_quick_mult_dd(s1, s1);
    let d = Dekker::add_cond(
        Dekker::new(Double::ZERO, m - q.hi),
        Dekker::new(-q.lo, -q.mid),
    );
    let c = Dekker::mult_d(hr, d);
    TripleDouble::from_dd_add(s1, c)
}

/// Splits a positive finite `x` into `m * 4^e`, `1 <= m < 4`.
#[inline]
fn reduce(x: Double) -> (Double, i32) {
    let (x, bias) = if x.is_subnormal() {
        (x * Double::pow2(54), -27)
    } else {
        (x, 0)
    };
    let e = x.exponent();
    let half = e.div_euclid(2);
    let odd = (e - 2 * half) as u64;
    let m = Double::from_bits((x.to_bits() & FRAC_MASK) | ((1023 + odd) << 52));
    (m, half + bias)
}

/// Triple-double square root of a positive finite non-zero value.
pub(crate) fn sqrt_td(x: Double) -> TripleDouble {
    let (m, e) = reduce(x);
    let t = sqrt13(m);
    TripleDouble::new(t.lo.ldexp(e), t.mid.ldexp(e), t.hi.ldexp(e))
}

/// Correctly rounded square root, round to nearest.
pub fn sqrt(x: Double) -> Double {
    if x.is_nan() {
        return x + x;
    }
    if x.is_zero() || x == Double::INFINITY {
        return x;
    }
    if x.is_sign_negative() {
        return Double::NAN;
    }
    let (m, e) = reduce(x);
    round_td(RoundingMode::Nearest, sqrt13(m)).ldexp(e)
}

impl Double {
    /// Correctly rounded square root, round to nearest.
    #[inline]
    pub fn sqrt(self) -> Double {
        sqrt(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_sqrt_specials() {
        assert!(sqrt(Double::from_s32(-1)).is_nan());
        assert!(sqrt(Double::NAN).is_nan());
        assert!(sqrt(Double::NEG_INFINITY).is_nan());
        assert_eq!(sqrt(Double::INFINITY), Double::INFINITY);
        assert_eq!(sqrt(Double::NEG_ZERO).to_bits(), Double::NEG_ZERO.to_bits());
        assert_eq!(sqrt(Double::ZERO).to_bits(), 0);
    }

    #[test]
    fn test_sqrt_exact() {
        for k in 1..2000u64 {
            let v = Double::from_u64(k * k);
            assert_eq!(sqrt(v), Double::from_u64(k));
        }
        assert_eq!(sqrt(Double::from_f64(0.25)).to_f64(), 0.5);
        assert_eq!(sqrt(Double::MIN_SUBNORMAL).to_bits(), 0x1e60000000000000);
        let big = 94906265.0f64;
        assert_eq!(sqrt(Double::from_f64(big * big)).to_f64(), big);
    }

    #[test]
    fn test_sqrt_matches_native() {
        let mut rng = rand::rng();
        for _ in 0..20000 {
            let bits: u64 = rng.random_range(1..0x7ff0_0000_0000_0000);
            let x = f64::from_bits(bits);
            assert_eq!(
                sqrt(Double::from_f64(x)).to_bits(),
                x.sqrt().to_bits(),
                "sqrt({x:e})"
            );
        }
        for bits in [1u64, 2, 3, 0x000f_ffff_ffff_ffff, 0x0010_0000_0000_0000, 0x7fef_ffff_ffff_ffff] {
            let x = f64::from_bits(bits);
            assert_eq!(sqrt(Double::from_f64(x)).to_bits(), x.sqrt().to_bits());
        }
    }

    #[test]
    fn test_sqrt_td() {
        let t = sqrt_td(Double::from_f64(2.0));
        assert_eq!(t.hi.to_bits(), 0x3ff6a09e667f3bcd);
        assert_eq!(t.mid.to_bits(), 0xbc9bdd3413b26456);
    }
}
