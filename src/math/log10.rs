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
use crate::math::log::{log_dd, log_special, log_td};
use crate::rounding::{QuickBound, RoundingMode, quick_round, round_td};
use crate::triple_double::TripleDouble;

const INV_LN10_TD: TripleDouble =
    TripleDouble::from_bit_pair((0x38fee191f71a3012, 0x3c695355baaafad3, 0x3fdbcb7b1526e50e));

const LOG10_QUICK: QuickBound = QuickBound::from_bits(0x3c10000000000000, 0x3ff0200000000001);

/// Powers of ten exactly representable in binary64.
static POW10: [u64; 23] = [
    0x3ff0000000000000, 0x4024000000000000, 0x4059000000000000, 0x408f400000000000,
    0x40c3880000000000, 0x40f86a0000000000, 0x412e848000000000, 0x416312d000000000,
    0x4197d78400000000, 0x41cdcd6500000000, 0x4202a05f20000000, 0x42374876e8000000,
    0x426d1a94a2000000, 0x42a2309ce5400000, 0x42d6bcc41e900000, 0x430c6bf526340000,
    0x4341c37937e08000, 0x4376345785d8a000, 0x43abc16d674ec800, 0x43e158e460913d00,
    0x4415af1d78b58c40, 0x444b1ae4d6e2ef50, 0x4480f0cf064dd592,
];

/// Base 10 logarithm, correctly rounded in the requested direction.
pub fn log10(x: Double, mode: RoundingMode) -> Double {
    if let Some(special) = log_special(x) {
        return special;
    }
    if let Some(k) = POW10.iter().position(|&p| p == x.to_bits()) {
        return Double::from_s32(k as i32);
    }
    let y = Dekker::mult(log_dd(x), INV_LN10_TD.to_dd());
    if let Some(r) = quick_round(mode, y, LOG10_QUICK) {
        return r;
    }
    trace_tier!("log10", "accurate");
    round_td(mode, TripleDouble::quick_mult(log_td(x), INV_LN10_TD))
}

rounding_variants!(log10, log10_rn, log10_ru, log10_rd, log10_rz, "base 10 logarithm");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log10_exact() {
        for (k, &p) in POW10.iter().enumerate() {
            for mode in RoundingMode::ALL {
                assert_eq!(log10(Double::from_bits(p), mode).to_f64(), k as f64);
            }
        }
        assert_eq!(log10_rn(Double::from_f64(1e23)).to_f64(), 23.0);
        assert!(log10_rn(Double::NEG_INFINITY).is_nan());
    }

    #[test]
    fn test_log10_reference() {
        use crate::math::common::tests::check_modes;
        check_modes(
            "log10",
            log10,
            &[
            (0x3fb999999999999a, 0xbff0000000000000, 0xbfefffffffffffff, 0xbff0000000000000, 0xbfefffffffffffff),
            (0x4008000000000000, 0x3fde8927964fd5fd, 0x3fde8927964fd5fe, 0x3fde8927964fd5fd, 0x3fde8927964fd5fd),
            (0x4000000000000000, 0x3fd34413509f79ff, 0x3fd34413509f79ff, 0x3fd34413509f79fe, 0x3fd34413509f79fe),
            (0x01a56e1fc2f8f359, 0xc072c00000000000, 0xc072bfffffffffff, 0xc072c00000000000, 0xc072bfffffffffff),
            (0x7e37e43c8800759c, 0x4072c00000000000, 0x4072c00000000001, 0x4072c00000000000, 0x4072c00000000000),
            (0x3ff000001ad7f29b, 0x3e6750e5ca0b1098, 0x3e6750e5ca0b1098, 0x3e6750e5ca0b1097, 0x3e6750e5ca0b1097),
            (0x0000000000000001, 0xc07434e6420f4374, 0xc07434e6420f4373, 0xc07434e6420f4374, 0xc07434e6420f4373),
            (0x401c000000000000, 0x3feb0b0b0b78cc3f, 0x3feb0b0b0b78cc40, 0x3feb0b0b0b78cc3f, 0x3feb0b0b0b78cc3f),
            (0x3fd3333333333333, 0xbfe0bb6c34d81502, 0xbfe0bb6c34d81501, 0xbfe0bb6c34d81502, 0xbfe0bb6c34d81501),
            (0x4480f0cf064dd592, 0x4036000000000000, 0x4036000000000000, 0x4036000000000000, 0x4036000000000000),
            ],
        );
    }
}
