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
use crate::math::common::rounding_variants;
use crate::math::log::{log_dd, log_td, log1p_accurate_poly, log1p_quick_poly};
use crate::rounding::{QuickBound, RoundingMode, quick_round, round_perturbed, round_td};
use crate::triple_double::TripleDouble;

const LOG1P_QUICK: QuickBound = QuickBound::from_bits(0x3c10000000000000, 0x3ff0200000000001);

/// `log(1 + x)`, correctly rounded in the requested direction.
pub fn log1p(x: Double, mode: RoundingMode) -> Double {
    if x.is_nan() {
        return x + x;
    }
    if x == Double::NEG_ONE {
        return Double::NEG_INFINITY;
    }
    if x < Double::NEG_ONE {
        return Double::NAN;
    }
    if x.is_infinite() || x.is_zero() {
        return x;
    }
    let ax = x.abs();
    if ax < Double::pow2(-54) {
        // x - x^2/2 lies just below x
        return round_perturbed(x, false, mode);
    }
    if ax < Double::pow2(-8) {
        let z = Dekker::from_double(x);
        if let Some(r) = quick_round(mode, log1p_quick_poly(z), LOG1P_QUICK) {
            return r;
        }
        trace_tier!("log1p", "accurate");
        return round_td(mode, log1p_accurate_poly(z));
    }
    // log(1 + x) = log(sh) + log1p(sl / sh) with |sl / sh| < 2^-53
    let s = Dekker::from_full_exact_add(Double::ONE, x);
    let t = if s.hi > Double::pow2(900) {
        Dekker::div(
            Dekker::from_double(s.lo.ldexp(-600)),
            Dekker::from_double(s.hi.ldexp(-600)),
        )
    } else {
        Dekker::div(Dekker::from_double(s.lo), Dekker::from_double(s.hi))
    };
    let y = Dekker::add_cond(log_dd(s.hi), t);
    if let Some(r) = quick_round(mode, y, LOG1P_QUICK) {
        return r;
    }
    trace_tier!("log1p", "accurate");
    let corr = Dekker::from_exact_add(t.hi, t.hi * -0.5 * t.hi + t.lo);
    round_td(
        mode,
        TripleDouble::add(log_td(s.hi), TripleDouble::from_dd(corr)),
    )
}

rounding_variants!(log1p, log1p_rn, log1p_ru, log1p_rd, log1p_rz, "log(1 + x)");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log1p_specials() {
        assert_eq!(log1p_rn(Double::NEG_ZERO).to_bits(), Double::NEG_ZERO.to_bits());
        assert_eq!(log1p_rd(Double::ZERO).to_bits(), 0);
        assert_eq!(log1p_rn(Double::NEG_ONE), Double::NEG_INFINITY);
        assert!(log1p_rn(Double::from_f64(-1.5)).is_nan());
        assert!(log1p_rn(Double::NEG_INFINITY).is_nan());
        assert_eq!(log1p_ru(Double::INFINITY), Double::INFINITY);
    }

    #[test]
    fn test_log1p_tiny() {
        let x = Double::from_f64(1e-20);
        assert_eq!(log1p_rn(x), x);
        assert_eq!(log1p_ru(x), x);
        assert_eq!(log1p_rd(x), x.next_down());
        assert_eq!(log1p_rz(x), x.next_down());
        let x = Double::from_f64(-1e-20);
        assert_eq!(log1p_ru(x), x);
        assert_eq!(log1p_rd(x), x.next_down());
        assert_eq!(log1p_rz(x), x);
        let x = Double::MIN_SUBNORMAL;
        assert_eq!(log1p_rd(x).to_bits(), 0);
    }

    #[test]
    fn test_log1p_reference() {
        use crate::math::common::tests::check_modes;
        check_modes(
            "log1p",
            log1p,
            &[
            (0x3ddb7cdfd9d7bdbb, 0x3ddb7cdfd9d1d693, 0x3ddb7cdfd9d1d693, 0x3ddb7cdfd9d1d692, 0x3ddb7cdfd9d1d692),
            (0xbddb7cdfd9d7bdbb, 0xbddb7cdfd9dda4e3, 0xbddb7cdfd9dda4e3, 0xbddb7cdfd9dda4e4, 0xbddb7cdfd9dda4e3),
            (0x3fe0000000000000, 0x3fd9f323ecbf984c, 0x3fd9f323ecbf984c, 0x3fd9f323ecbf984b, 0x3fd9f323ecbf984b),
            (0xbfe0000000000000, 0xbfe62e42fefa39ef, 0xbfe62e42fefa39ef, 0xbfe62e42fefa39f0, 0xbfe62e42fefa39ef),
            (0x3f50624dd2f1a9fc, 0x3f5060354f8c3ebf, 0x3f5060354f8c3ec0, 0x3f5060354f8c3ebf, 0x3f5060354f8c3ebf),
            (0x4008000000000000, 0x3ff62e42fefa39ef, 0x3ff62e42fefa39f0, 0x3ff62e42fefa39ef, 0x3ff62e42fefa39ef),
            (0x7e37e43c8800759c, 0x4085963447f87fb5, 0x4085963447f87fb6, 0x4085963447f87fb5, 0x4085963447f87fb5),
            (0xbfefffffca501acb, 0xc0301e3b8440ed2f, 0xc0301e3b8440ed2e, 0xc0301e3b8440ed2f, 0xc0301e3b8440ed2e),
            (0x3e10000000000000, 0x3e0fffffffc00000, 0x3e0fffffffc00001, 0x3e0fffffffc00000, 0x3e0fffffffc00000),
            (0x3fc0000000000000, 0x3fbe27076e2af2e6, 0x3fbe27076e2af2e6, 0x3fbe27076e2af2e5, 0x3fbe27076e2af2e5),
            ],
        );
    }
}
