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
#![allow(clippy::approx_constant)]
mod acos;
mod asin;
mod asin_tables;
mod atan;
mod atan_tables;
mod common;
mod exp;
mod exp2;
mod exp_tables;
mod expm1;
mod hyperbolic;
mod log;
mod log10;
mod log1p;
mod log2;
mod log_tables;
mod pow;
mod sin;
mod sinpi;
mod sqrt;
mod tan;
mod trigo;
mod trigo_tables;

pub use acos::{acos, acos_rd, acos_rn, acos_ru, acos_rz};
pub use asin::{asin, asin_rd, asin_rn, asin_ru, asin_rz};
pub use atan::{atan, atan_rd, atan_rn, atan_ru, atan_rz};
pub use exp::{exp, exp_rd, exp_rn, exp_ru, exp_rz};
pub use exp2::{exp2, exp2_rd, exp2_rn, exp2_ru, exp2_rz};
pub use expm1::{expm1, expm1_rd, expm1_rn, expm1_ru, expm1_rz};
pub use hyperbolic::{cosh, cosh_rd, cosh_rn, cosh_ru, cosh_rz, sinh, sinh_rd, sinh_rn, sinh_ru, sinh_rz};
pub use log::{log, log_rd, log_rn, log_ru, log_rz};
pub use log1p::{log1p, log1p_rd, log1p_rn, log1p_ru, log1p_rz};
pub use log2::{log2, log2_rd, log2_rn, log2_ru, log2_rz};
pub use log10::{log10, log10_rd, log10_rn, log10_ru, log10_rz};
pub use pow::pow_rn;
pub use sin::{cos, cos_rd, cos_rn, cos_ru, cos_rz, sin, sin_rd, sin_rn, sin_ru, sin_rz};
pub use sinpi::{
    cospi, cospi_rd, cospi_rn, cospi_ru, cospi_rz, sinpi, sinpi_rd, sinpi_rn, sinpi_ru, sinpi_rz,
    tanpi, tanpi_rd, tanpi_rn, tanpi_ru, tanpi_rz,
};
pub use sqrt::sqrt;
pub use tan::{tan, tan_rd, tan_rn, tan_ru, tan_rz};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::double::Double;
    use rand::Rng;

    type Pair = (&'static str, fn(Double) -> Double, fn(f64) -> f64);

    fn same_bits(a: f64, b: f64) -> bool {
        a.is_nan() && b.is_nan() || a.to_bits() == b.to_bits()
    }

    #[test]
    fn test_nearest_agrees_with_pxfm() {
        let pairs: [(Pair, f64, f64); 18] = [
            (("log", log_rn, pxfm::f_log), 1e-3, 1e3),
            (("log2", log2_rn, pxfm::f_log2), 1e-3, 1e3),
            (("log10", log10_rn, pxfm::f_log10), 1e-3, 1e3),
            (("log1p", log1p_rn, pxfm::f_log1p), -0.9, 10.0),
            (("exp", exp_rn, pxfm::f_exp), -700.0, 700.0),
            (("exp2", exp2_rn, pxfm::f_exp2), -1000.0, 1000.0),
            (("expm1", expm1_rn, pxfm::f_expm1), -5.0, 5.0),
            (("sin", sin_rn, pxfm::f_sin), -100.0, 100.0),
            (("cos", cos_rn, pxfm::f_cos), -100.0, 100.0),
            (("tan", tan_rn, pxfm::f_tan), -10.0, 10.0),
            (("sinpi", sinpi_rn, pxfm::f_sinpi), -50.0, 50.0),
            (("cospi", cospi_rn, pxfm::f_cospi), -50.0, 50.0),
            (("tanpi", tanpi_rn, pxfm::f_tanpi), -0.49, 0.49),
            (("asin", asin_rn, pxfm::f_asin), -1.0, 1.0),
            (("acos", acos_rn, pxfm::f_acos), -1.0, 1.0),
            (("atan", atan_rn, pxfm::f_atan), -50.0, 50.0),
            (("sinh", sinh_rn, pxfm::f_sinh), -20.0, 20.0),
            (("cosh", cosh_rn, pxfm::f_cosh), -20.0, 20.0),
        ];
        let mut rng = rand::rng();
        for ((name, soft, oracle), lo, hi) in pairs {
            for _ in 0..500 {
                let x: f64 = rng.random_range(lo..hi);
                let got = soft(Double::from_f64(x)).to_f64();
                let expected = oracle(x);
                assert!(
                    same_bits(got, expected),
                    "{name}({x:e}) = {got:e}, pxfm gives {expected:e}"
                );
            }
        }
    }

    #[test]
    fn test_pow_agrees_with_pxfm() {
        let mut rng = rand::rng();
        for _ in 0..2000 {
            let x: f64 = rng.random_range(1e-3..1e3);
            let y: f64 = rng.random_range(-20.0..20.0);
            let got = pow_rn(Double::from_f64(x), Double::from_f64(y)).to_f64();
            let expected = pxfm::f_pow(x, y);
            assert!(
                same_bits(got, expected),
                "pow({x:e}, {y:e}) = {got:e}, pxfm gives {expected:e}"
            );
        }
    }
}
