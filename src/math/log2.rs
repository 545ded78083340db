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

const INV_LN2_TD: TripleDouble =
    TripleDouble::from_bit_pair((0xb9160bb8a5442ab9, 0x3c7777d0ffda0d24, 0x3ff71547652b82fe));

const LOG2_QUICK: QuickBound = QuickBound::from_bits(0x3c10000000000000, 0x3ff0200000000001);

/// `k` when `x = 2^k` exactly.
#[inline]
fn exact_power_of_two(x: Double) -> Option<i32> {
    let (sig, lsb) = x.decompose();
    if sig.is_power_of_two() {
        return Some(lsb + sig.trailing_zeros() as i32);
    }
    None
}

/// Base 2 logarithm, correctly rounded in the requested direction.
pub fn log2(x: Double, mode: RoundingMode) -> Double {
    if let Some(special) = log_special(x) {
        return special;
    }
    if let Some(k) = exact_power_of_two(x) {
        return Double::from_s32(k);
    }
    let y = Dekker::mult(log_dd(x), INV_LN2_TD.to_dd());
    if let Some(r) = quick_round(mode, y, LOG2_QUICK) {
        return r;
    }
    trace_tier!("log2", "accurate");
    round_td(mode, TripleDouble::quick_mult(log_td(x), INV_LN2_TD))
}

rounding_variants!(log2, log2_rn, log2_ru, log2_rd, log2_rz, "base 2 logarithm");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log2_exact() {
        for k in -1074..1024 {
            let x = Double::ONE.ldexp(k);
            for mode in RoundingMode::ALL {
                assert_eq!(log2(x, mode), Double::from_s32(k), "log2(2^{k})");
            }
        }
        assert_eq!(log2_rd(Double::ONE).to_bits(), 0);
        assert!(log2_rn(Double::from_f64(-0.5)).is_nan());
    }

    #[test]
    fn test_log2_reference() {
        use crate::math::common::tests::check_modes;
        check_modes(
            "log2",
            log2,
            &[
            (0x3fb999999999999a, 0xc00a934f0979a371, 0xc00a934f0979a371, 0xc00a934f0979a372, 0xc00a934f0979a371),
            (0x4008000000000000, 0x3ff95c01a39fbd68, 0x3ff95c01a39fbd69, 0x3ff95c01a39fbd68, 0x3ff95c01a39fbd68),
            (0x4024000000000000, 0x400a934f0979a371, 0x400a934f0979a372, 0x400a934f0979a371, 0x400a934f0979a371),
            (0x01a56e1fc2f8f359, 0xc08f24a09f1a8b89, 0xc08f24a09f1a8b88, 0xc08f24a09f1a8b89, 0xc08f24a09f1a8b88),
            (0x7e37e43c8800759c, 0x408f24a09f1a8b89, 0x408f24a09f1a8b89, 0x408f24a09f1a8b88, 0x408f24a09f1a8b88),
            (0x3ff000001ad7f29b, 0x3e835d0fea5fccb7, 0x3e835d0fea5fccb8, 0x3e835d0fea5fccb7, 0x3e835d0fea5fccb7),
            (0x0000000000000001, 0xc090c80000000000, 0xc090c80000000000, 0xc090c80000000000, 0xc090c80000000000),
            (0x401c000000000000, 0x400675767f54042d, 0x400675767f54042d, 0x400675767f54042c, 0x400675767f54042c),
            (0x3fd3333333333333, 0xbffbca9c6f53897b, 0xbffbca9c6f53897a, 0xbffbca9c6f53897b, 0xbffbca9c6f53897a),
            ],
        );
    }
}
