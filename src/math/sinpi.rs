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
use crate::arith::{floor, round_even};
use crate::dekker::Dekker;
use crate::double::Double;
use crate::math::common::rounding_variants;
use crate::math::trigo::{TrigFunction, sincos_accurate, sincos_quick, table_sincos};
use crate::rounding::{QuickBound, RoundingMode, quick_round, round_perturbed, round_scaled, round_td};
use crate::triple_double::TripleDouble;

pub(crate) const PI_TD: TripleDouble =
    TripleDouble::from_bit_pair((0xb92f1976b7ed8fbc, 0x3ca1a62633145c07, 0x400921fb54442d18));

const TRIGPI_QUICK: QuickBound = QuickBound::from_bits(0x3c10000000000000, 0x3ff0200000000001);
const TANPI_QUICK: QuickBound = QuickBound::from_bits(0x3c20000000000000, 0x3ff0400000000001);

/// Below this `sin(πx)` and `tan(πx)` agree with `πx` far past any
/// precision in use, and `πx` is computed on a scaled copy of `x`.
const TINY: Double = Double::from_bits(0x0170000000000000);

fn pi_times_tiny(x: Double, mode: RoundingMode) -> Double {
    let t = TripleDouble::quick_mult_f64(PI_TD, x.ldexp(200));
    round_scaled(mode, t, -200)
}

/// `x = k/256 + y` exactly, `k` modulo 512, for non-integer `|x| < 2^52`.
fn reduce_pi(x: Double) -> (i32, Double) {
    let kd = round_even(x * 256.0);
    let y = x - kd * Double::pow2(-8);
    ((kd.to_s64() & 511) as i32, y)
}

fn tan_of(sin: TripleDouble, cos: TripleDouble) -> TripleDouble {
    TripleDouble::quick_mult(sin, cos.recip())
}

fn trigpi_reduced(x: Double, func: TrigFunction, mode: RoundingMode) -> Double {
    let (k, y) = reduce_pi(x);
    if y.is_zero() {
        let (s, c) = table_sincos(k);
        return round_td(
            mode,
            match func {
                TrigFunction::Sin => s,
                TrigFunction::Cos => c,
                TrigFunction::Tan => tan_of(s, c),
            },
        );
    }
    // π * y carries no reduction error, so the accurate phase is final
    let py = TripleDouble::quick_mult_f64(PI_TD, y);
    let (sin, cos) = sincos_quick(k, py.to_dd());
    let quick = match func {
        TrigFunction::Sin => quick_round(mode, sin, TRIGPI_QUICK),
        TrigFunction::Cos => quick_round(mode, cos, TRIGPI_QUICK),
        TrigFunction::Tan => quick_round(mode, Dekker::div(sin, cos), TANPI_QUICK),
    };
    if let Some(r) = quick {
        return r;
    }
    trace_tier!("trigpi", "accurate");
    let (sin, cos) = sincos_accurate(k, py);
    round_td(
        mode,
        match func {
            TrigFunction::Sin => sin,
            TrigFunction::Cos => cos,
            TrigFunction::Tan => tan_of(sin, cos),
        },
    )
}

/// Parity of an integral `|x|`, everything from `2^53` up is even.
fn is_odd_integer(ax: Double) -> bool {
    ax < Double::pow2(53) && ax.to_s64() & 1 == 1
}

/// `sin(πx)`, correctly rounded in the requested direction.
pub fn sinpi(x: Double, mode: RoundingMode) -> Double {
    if x.is_nan() || x.is_infinite() {
        return x - x;
    }
    if x.is_integer() {
        return Double::zero(x.is_sign_negative());
    }
    if x.abs() < TINY {
        return pi_times_tiny(x, mode);
    }
    trigpi_reduced(x, TrigFunction::Sin, mode)
}

/// `cos(πx)`, correctly rounded in the requested direction.
pub fn cospi(x: Double, mode: RoundingMode) -> Double {
    if x.is_nan() || x.is_infinite() {
        return x - x;
    }
    let ax = x.abs();
    if ax.is_integer() {
        return if is_odd_integer(ax) {
            Double::NEG_ONE
        } else {
            Double::ONE
        };
    }
    if (ax * 2.0).is_integer() {
        return Double::ZERO;
    }
    // 1 - (πx)^2 / 2 is within a quarter ulp of 1
    if ax < Double::pow2(-29) {
        return round_perturbed(Double::ONE, false, mode);
    }
    trigpi_reduced(x, TrigFunction::Cos, mode)
}

/// `tan(πx)`, correctly rounded in the requested direction.
///
/// Integers give a zero signed by the parity, half-integers give a pole
/// that is `+Inf` after an even integer and `-Inf` after an odd one.
pub fn tanpi(x: Double, mode: RoundingMode) -> Double {
    if x.is_nan() || x.is_infinite() {
        return x - x;
    }
    let ax = x.abs();
    if ax.is_integer() {
        return Double::zero(x.is_sign_negative() != is_odd_integer(ax));
    }
    let x4 = x * 4.0;
    if x4.is_integer() {
        return match x4.to_s64().rem_euclid(4) {
            1 => Double::ONE,
            3 => Double::NEG_ONE,
            _ => {
                if floor(x).to_s64() & 1 == 1 {
                    Double::NEG_INFINITY
                } else {
                    Double::INFINITY
                }
            }
        };
    }
    if ax < TINY {
        return pi_times_tiny(x, mode);
    }
    trigpi_reduced(x, TrigFunction::Tan, mode)
}

rounding_variants!(sinpi, sinpi_rn, sinpi_ru, sinpi_rd, sinpi_rz, "sine of π times the argument");
rounding_variants!(cospi, cospi_rn, cospi_ru, cospi_rd, cospi_rz, "cosine of π times the argument");
rounding_variants!(tanpi, tanpi_rn, tanpi_ru, tanpi_rd, tanpi_rz, "tangent of π times the argument");
