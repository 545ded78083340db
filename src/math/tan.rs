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
use crate::math::common::rounding_variants;
use crate::math::trigo::{TrigFunction, trig_reduced};
use crate::rounding::{RoundingMode, round_perturbed};

/// Tangent, correctly rounded in the requested direction.
pub fn tan(x: Double, mode: RoundingMode) -> Double {
    if x.is_nan() || x.is_infinite() {
        return x - x;
    }
    if x.is_zero() {
        return x;
    }
    // tan(x) - x ~ x^3 / 3, same sign as x
    if x.abs() < Double::pow2(-27) {
        return round_perturbed(x, x.is_sign_positive(), mode);
    }
    trig_reduced(x, TrigFunction::Tan, mode)
}

rounding_variants!(tan, tan_rn, tan_ru, tan_rd, tan_rz, "tangent");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::common::tests::{check_brackets, check_modes};
    use rand::Rng;

    #[test]
    fn test_tan_specials() {
        assert!(tan_rn(Double::NAN).is_nan());
        assert!(tan_rz(Double::NEG_INFINITY).is_nan());
        for mode in RoundingMode::ALL {
            assert_eq!(tan(Double::NEG_ZERO, mode).to_bits(), Double::NEG_ZERO.to_bits());
        }
        let x = Double::from_f64(3e-9);
        assert_eq!(tan_rn(x), x);
        assert_eq!(tan_ru(x), x.next_up());
        assert_eq!(tan_rd(x), x);
        assert_eq!(tan_rd(-x), (-x).next_down());
        assert_eq!(tan_rz(-x), -x);
    }

    #[test]
    fn test_tan_reference() {
        check_modes(
            "tan",
            tan,
            &[
            (0x3fe0000000000000, 0x3fe17b4f5bf3474a, 0x3fe17b4f5bf3474b, 0x3fe17b4f5bf3474a, 0x3fe17b4f5bf3474a),
            (0x3ff0000000000000, 0x3ff8eb245cbee3a6, 0x3ff8eb245cbee3a6, 0x3ff8eb245cbee3a5, 0x3ff8eb245cbee3a5),
            (0x4000000000000000, 0xc0017af62e0950f8, 0xc0017af62e0950f8, 0xc0017af62e0950f9, 0xc0017af62e0950f8),
            (0x4008000000000000, 0xbfc23ef71254b86f, 0xbfc23ef71254b86f, 0xbfc23ef71254b870, 0xbfc23ef71254b86f),
            (0xbfe6666666666666, 0xbfeaf406c2fc78ae, 0xbfeaf406c2fc78ad, 0xbfeaf406c2fc78ae, 0xbfeaf406c2fc78ad),
            (0x4024000000000000, 0x3fe4bf5f34be3782, 0x3fe4bf5f34be3783, 0x3fe4bf5f34be3782, 0x3fe4bf5f34be3782),
            (0x3ee4f8b588e368f1, 0x3ee4f8b588e6698e, 0x3ee4f8b588e6698f, 0x3ee4f8b588e6698e, 0x3ee4f8b588e6698e),
            (0x400921fb54442d18, 0xbca1a62633145c07, 0xbca1a62633145c06, 0xbca1a62633145c07, 0xbca1a62633145c06),
            (0x3ff921fb54442d18, 0x434d02967c31cdb5, 0x434d02967c31cdb5, 0x434d02967c31cdb4, 0x434d02967c31cdb4),
            (0x412e848100000000, 0x3fc25b28c37e452e, 0x3fc25b28c37e452f, 0x3fc25b28c37e452e, 0x3fc25b28c37e452e),
            (0x40fe240c9fbe76c9, 0xc03353a85fe8d6d5, 0xc03353a85fe8d6d5, 0xc03353a85fe8d6d6, 0xc03353a85fe8d6d5),
            (0x4480f0cf064dd592, 0xbffa0f79c1b6b257, 0xbffa0f79c1b6b257, 0xbffa0f79c1b6b258, 0xbffa0f79c1b6b257),
            (0x7506ac5b262ca1ff, 0xc3bd9ba9a7975636, 0xc3bd9ba9a7975635, 0xc3bd9ba9a7975636, 0xc3bd9ba9a7975635),
            (0xfe37e43c8800759c, 0xbff6be411f37ac77, 0xbff6be411f37ac76, 0xbff6be411f37ac77, 0xbff6be411f37ac76),
            ],
        );
    }

    #[test]
    fn test_tan_brackets() {
        let mut rng = rand::rng();
        for _ in 0..2000 {
            let x = Double::from_f64(rng.random_range(-10.0..10.0));
            assert_eq!(tan_rn(-x), -tan_rn(x));
            check_brackets("tan", tan, x);
        }
    }
}
