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
use crate::math::exp::{exp_accurate, exp_quick};
use crate::math::log::LN2_TD;
use crate::rounding::{QuickBound, RoundingMode, quick_round, round_perturbed, round_scaled};
use crate::triple_double::TripleDouble;

const EXP2_QUICK: QuickBound = QuickBound::from_bits(0x3c10000000000000, 0x3ff0200000000001);

/// `2^x`, correctly rounded in the requested direction.
pub fn exp2(x: Double, mode: RoundingMode) -> Double {
    if x.is_nan() {
        return x + x;
    }
    if x.is_infinite() {
        return if x.is_sign_negative() { Double::ZERO } else { x };
    }
    if x.is_zero() {
        return Double::ONE;
    }
    if x >= Double::from_f64(1024.0) {
        return overflow_value(0, mode);
    }
    if x < Double::from_f64(-1080.0) {
        return underflow_value(0, mode);
    }
    if x.is_integer() {
        return Double::ONE.ldexp_mode(x.to_s32(), mode);
    }
    if x.abs() < Double::pow2(-54) {
        return round_perturbed(Double::ONE, x.is_sign_positive(), mode);
    }
    // x = k / 4096 + f, exact since |x| < 2^11
    let kd = round_even(x * 4096.0);
    let k = kd.to_s32();
    let f = x - kd * Double::pow2(-12);
    let (e, y) = exp_quick(k, Dekker::mult_d(f, LN2_TD.to_dd()));
    if e > -1020 && e < 1020 {
        if let Some(r) = quick_round(mode, y, EXP2_QUICK) {
            return r.ldexp(e);
        }
    }
    trace_tier!("exp2", "accurate");
    let (e, t) = exp_accurate(k, TripleDouble::quick_mult_f64(LN2_TD, f));
    round_scaled(mode, t, e)
}

rounding_variants!(exp2, exp2_rn, exp2_ru, exp2_rd, exp2_rz, "base 2 exponential");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exp2_integers() {
        for k in -1074..1024 {
            for mode in RoundingMode::ALL {
                assert_eq!(exp2(Double::from_s32(k), mode), Double::ONE.ldexp(k));
            }
        }
        assert_eq!(exp2_rn(Double::from_f64(-1075.0)).to_bits(), 0);
        assert_eq!(exp2_ru(Double::from_f64(-1075.0)).to_bits(), 1);
        assert_eq!(exp2_rn(Double::from_f64(1024.0)), Double::INFINITY);
        assert_eq!(exp2_rd(Double::from_f64(1024.0)), Double::MAX);
    }

    #[test]
    fn test_exp2_halves() {
        assert_eq!(exp2_rn(Double::from_f64(0.5)).to_f64(), std::f64::consts::SQRT_2);
        assert_eq!(exp2_rn(Double::from_f64(-0.5)).to_f64(), std::f64::consts::FRAC_1_SQRT_2);
        // the nearest double lies above sqrt(2)
        assert_eq!(exp2_ru(Double::from_f64(0.5)).to_f64(), std::f64::consts::SQRT_2);
        assert_eq!(
            exp2_rd(Double::from_f64(0.5)).to_bits(),
            std::f64::consts::SQRT_2.to_bits() - 1
        );
    }

    #[test]
    fn test_exp2_reference() {
        use crate::math::common::tests::check_modes;
        check_modes(
            "exp2",
            exp2,
            &[
            (0x3fb999999999999a, 0x3ff125fbee250664, 0x3ff125fbee250665, 0x3ff125fbee250664, 0x3ff125fbee250664),
            (0xbfb999999999999a, 0x3feddb680117ab12, 0x3feddb680117ab13, 0x3feddb680117ab12, 0x3feddb680117ab12),
            (0x402499999999999a, 0x4093b2c47bff832c, 0x4093b2c47bff832c, 0x4093b2c47bff832b, 0x4093b2c47bff832b),
            (0xc090ca0000000000, 0x0000000000000001, 0x0000000000000001, 0x0000000000000000, 0x0000000000000000),
            (0x408fff3333333333, 0x7feddb680117aa8e, 0x7feddb680117aa8e, 0x7feddb680117aa8d, 0x7feddb680117aa8d),
            (0x3ddb7cdfd9d7bdbb, 0x3ff000000004c366, 0x3ff000000004c366, 0x3ff000000004c365, 0x3ff000000004c365),
            (0x400a666666666666, 0x4023b2c47bff8328, 0x4023b2c47bff8329, 0x4023b2c47bff8328, 0x4023b2c47bff8328),
            (0xc08ff5999999999a, 0x0009d9623dffc13d, 0x0009d9623dffc13e, 0x0009d9623dffc13d, 0x0009d9623dffc13d),
            ],
        );
    }
}
