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
use crate::double::{Double, shift_right_sticky128};
use crate::rounding::RoundingMode;
use crate::scs::{SCS_MASK, SCS_NB_BITS, SCS_NB_WORDS, Scs};

impl Scs {
    /// Exact conversion, every finite double fits in three limbs.
    pub fn from_double(x: Double) -> Scs {
        if x.is_zero() || !x.is_finite() {
            return Scs::from_exception(x);
        }
        let (sig, lsb) = x.abs().decompose();
        let top = lsb + 63 - sig.leading_zeros() as i32;
        let index = top.div_euclid(SCS_NB_BITS as i32);
        let mut h_word = [0u32; SCS_NB_WORDS];
        for (i, w) in h_word.iter_mut().enumerate() {
            let shift = SCS_NB_BITS as i32 * (index - i as i32) - lsb;
            let limb = if shift >= 0 {
                sig.checked_shr(shift as u32).unwrap_or(0)
            } else {
                sig.checked_shl((-shift) as u32).unwrap_or(0)
            };
            *w = (limb & SCS_MASK) as u32;
        }
        Scs {
            h_word,
            exception: Double::ONE,
            index,
            sign: if x.is_sign_negative() { -1 } else { 1 },
        }
    }

    pub fn from_s32(n: i32) -> Scs {
        Scs::from_double(Double::from_s32(n))
    }

    /// Correctly rounded conversion in the requested direction.
    ///
    /// The four leading limbs always hold more than 90 significant bits,
    /// everything below them only decides the sticky bit.
    pub fn to_double_mode(&self, mode: RoundingMode) -> Double {
        if !self.is_regular() {
            return self.exception;
        }
        let negative = self.sign < 0;
        let mut acc = 0u128;
        for &w in &self.h_word[..4] {
            acc = (acc << SCS_NB_BITS) | w as u128;
        }
        if acc == 0 {
            return Double::zero(negative);
        }
        let sticky = self.h_word[4..].iter().any(|&w| w != 0);
        let width = 128 - acc.leading_zeros() as i32;
        let shift = (width - 64).max(0);
        let mut mant = shift_right_sticky128(acc, shift as u32) as u64;
        if sticky {
            mant |= 1;
        }
        let exp = SCS_NB_BITS as i32 * (self.index - 3) + shift;
        Double::round_pack_mode(negative as u32, exp + 55, mant, mode)
    }

    /// Nearest double.
    #[inline]
    pub fn to_double(&self) -> Double {
        self.to_double_mode(RoundingMode::Nearest)
    }

    #[inline]
    pub fn get_d_pinf(&self) -> Double {
        self.to_double_mode(RoundingMode::Upward)
    }

    #[inline]
    pub fn get_d_minf(&self) -> Double {
        self.to_double_mode(RoundingMode::Downward)
    }

    #[inline]
    pub fn get_d_zero(&self) -> Double {
        self.to_double_mode(RoundingMode::TowardZero)
    }
}
