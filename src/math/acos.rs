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
use crate::math::asin::{
    ASIN_QUICK, PIO2_TD, asin_core_accurate, asin_core_quick, half_angle, twice, twice_dd,
};
use crate::math::common::rounding_variants;
use crate::math::sinpi::PI_TD;
use crate::rounding::{RoundingMode, quick_round, round_td};
use crate::triple_double::TripleDouble;

/// Arccosine, correctly rounded in the requested direction.
///
/// The result is never negative, so rounding towards zero matches
/// rounding downwards.
pub fn acos(x: Double, mode: RoundingMode) -> Double {
    if x.is_nan() {
        return x + x;
    }
    let ax = x.abs();
    if ax > Double::ONE {
        return Double::NAN;
    }
    if x == Double::ONE {
        return Double::ZERO;
    }
    if x == Double::NEG_ONE {
        return round_td(mode, PI_TD);
    }
    let negative = x.is_sign_negative();
    // x^3/6 is far below the triple-double precision of π/2 - x
    if ax < Double::pow2(-55) {
        return round_td(mode, TripleDouble::add_cond(PIO2_TD, TripleDouble::from_double(-x)));
    }

    let half = (ax > Double::from_f64(0.5)).then(|| half_angle(ax));
    let quick = match half {
        None => {
            let a = asin_core_quick(Dekker::from_double(ax));
            let a = if negative { a } else { a.neg() };
            Dekker::add_cond(PIO2_TD.to_dd(), a)
        }
        Some(s) => {
            let a = twice_dd(asin_core_quick(s.to_dd()));
            if negative {
                Dekker::add_cond(PI_TD.to_dd(), a.neg())
            } else {
                a
            }
        }
    };
    if let Some(r) = quick_round(mode, quick, ASIN_QUICK) {
        return r;
    }

    trace_tier!("acos", "accurate");
    let v = match half {
        None => {
            let a = asin_core_accurate(TripleDouble::from_double(ax));
            TripleDouble::add_cond(PIO2_TD, if negative { a } else { -a })
        }
        Some(s) => {
            let a = twice(asin_core_accurate(s));
            if negative {
                TripleDouble::add_cond(PI_TD, -a)
            } else {
                a
            }
        }
    };
    round_td(mode, v)
}

rounding_variants!(acos, acos_rn, acos_ru, acos_rd, acos_rz, "arccosine");
