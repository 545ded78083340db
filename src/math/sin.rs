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

/// Sine, correctly rounded in the requested direction.
pub fn sin(x: Double, mode: RoundingMode) -> Double {
    if x.is_nan() || x.is_infinite() {
        return x - x;
    }
    if x.is_zero() {
        return x;
    }
    // |sin(x) - x| < |x| * 2^-54
    if x.abs() < Double::pow2(-26) {
        return round_perturbed(x, x.is_sign_negative(), mode);
    }
    trig_reduced(x, TrigFunction::Sin, mode)
}

/// Cosine, correctly rounded in the requested direction.
pub fn cos(x: Double, mode: RoundingMode) -> Double {
    if x.is_nan() || x.is_infinite() {
        return x - x;
    }
    if x.is_zero() {
        return Double::ONE;
    }
    if x.abs() < Double::pow2(-27) {
        return round_perturbed(Double::ONE, false, mode);
    }
    trig_reduced(x, TrigFunction::Cos, mode)
}

rounding_variants!(sin, sin_rn, sin_ru, sin_rd, sin_rz, "sine");
rounding_variants!(cos, cos_rn, cos_ru, cos_rd, cos_rz, "cosine");
