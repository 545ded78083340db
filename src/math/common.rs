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
use crate::double::Double;

/// `c + a * b` on two separate roundings.
#[inline(always)]
pub(crate) fn fmla(a: Double, b: Double, c: Double) -> Double {
    c + a * b
}

/// Horner evaluation of `coeffs[0] + x * (coeffs[1] + ...)`, coefficients
/// given as raw bit patterns, lowest degree first.
#[inline]
pub(crate) fn horner_bits(x: Double, coeffs: &[u64]) -> Double {
    let mut acc = Double::ZERO;
    for (i, &c) in coeffs.iter().rev().enumerate() {
        acc = if i == 0 {
            Double::from_bits(c)
        } else {
            fmla(x, acc, Double::from_bits(c))
        };
    }
    acc
}

/// Generates the four fixed-direction entry points of a function from its
/// mode-parameterised implementation.
macro_rules! rounding_variants {
    ($entry:ident, $rn:ident, $ru:ident, $rd:ident, $rz:ident, $what:literal) => {
        #[doc = concat!("Correctly rounded ", $what, ", rounded to nearest.")]
        #[inline]
        pub fn $rn(x: $crate::double::Double) -> $crate::double::Double {
            $entry(x, $crate::rounding::RoundingMode::Nearest)
        }

        #[doc = concat!("Correctly rounded ", $what, ", rounded upwards.")]
        #[inline]
        pub fn $ru(x: $crate::double::Double) -> $crate::double::Double {
            $entry(x, $crate::rounding::RoundingMode::Upward)
        }

        #[doc = concat!("Correctly rounded ", $what, ", rounded downwards.")]
        #[inline]
        pub fn $rd(x: $crate::double::Double) -> $crate::double::Double {
            $entry(x, $crate::rounding::RoundingMode::Downward)
        }

        #[doc = concat!("Correctly rounded ", $what, ", rounded towards zero.")]
        #[inline]
        pub fn $rz(x: $crate::double::Double) -> $crate::double::Double {
            $entry(x, $crate::rounding::RoundingMode::TowardZero)
        }
    };
}

pub(crate) use rounding_variants;

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::rounding::RoundingMode;

    /// Checks a function against reference results given as
    /// `(x, rn, ru, rd, rz)` bit patterns.
    pub(crate) fn check_modes(
        name: &str,
        f: impl Fn(Double, RoundingMode) -> Double,
        cases: &[(u64, u64, u64, u64, u64)],
    ) {
        for &(x, rn, ru, rd, rz) in cases {
            let x = Double::from_bits(x);
            for (mode, expected) in RoundingMode::ALL.into_iter().zip([rn, ru, rd, rz]) {
                let got = f(x, mode);
                assert_eq!(
                    got.to_bits(),
                    expected,
                    "{name}({x:?}) in {mode}: got {got:?}, expected {:?}",
                    Double::from_bits(expected)
                );
            }
        }
    }

    /// `rd <= rn <= ru`, the directed results at most one ulp apart and
    /// `rz` equal to the one of smaller magnitude.
    pub(crate) fn check_brackets(name: &str, f: impl Fn(Double, RoundingMode) -> Double, x: Double) {
        let rn = f(x, RoundingMode::Nearest);
        let ru = f(x, RoundingMode::Upward);
        let rd = f(x, RoundingMode::Downward);
        let rz = f(x, RoundingMode::TowardZero);
        if rn.is_nan() {
            assert!(ru.is_nan() && rd.is_nan() && rz.is_nan(), "{name}({x:?})");
            return;
        }
        assert!(rd <= rn && rn <= ru, "{name}({x:?}): {rd:?} {rn:?} {ru:?}");
        assert!(
            ru == rd || rd.next_up() == ru,
            "{name}({x:?}): {rd:?} {ru:?} more than one ulp apart"
        );
        let expected_rz = if rd.is_sign_negative() && !rd.is_zero() { ru } else { rd };
        assert_eq!(rz.to_bits(), expected_rz.to_bits(), "{name}({x:?}) rz");
    }

    #[test]
    fn test_horner_bits() {
        // 1 + 2x + 3x^2 at x = 2
        let c = [1f64.to_bits(), 2f64.to_bits(), 3f64.to_bits()];
        assert_eq!(horner_bits(Double::from_f64(2.0), &c).to_f64(), 17.0);
        assert_eq!(fmla(Double::from_f64(2.0), Double::from_f64(3.0), Double::ONE).to_f64(), 7.0);
    }
}
