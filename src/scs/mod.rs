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
//! Software carry-save multi-precision numbers: eight limbs of 30 bits
//! each, giving a little under 240 bits of precision.
//!
//! Used as the last resort stage of trigonometric and inverse tangent
//! evaluation, where neither double-double nor triple-double arithmetic
//! has a certified error bound.
mod convert;
mod ops;
mod rem_pio;
pub(crate) mod tables;

use crate::double::Double;

pub use rem_pio::{rem_pio2_scs, rem_pio256_scs};

pub(crate) const SCS_NB_WORDS: usize = 8;
pub(crate) const SCS_NB_BITS: u32 = 30;
pub(crate) const SCS_RADIX: u64 = 1 << SCS_NB_BITS;
pub(crate) const SCS_MASK: u64 = SCS_RADIX - 1;

/// `(-1)^sign * Σ h_word[i] * 2^(30 * (index - i))`.
///
/// A regular number has `exception == 1` and a non-zero leading limb.
/// Zeros, infinities and NaN keep the limbs cleared and carry their
/// value in `exception`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Scs {
    pub(crate) h_word: [u32; SCS_NB_WORDS],
    pub(crate) exception: Double,
    pub(crate) index: i32,
    pub(crate) sign: i32,
}

impl Scs {
    /// Signed zero.
    pub const fn zero(negative: bool) -> Scs {
        Scs::from_exception(Double::zero(negative))
    }

    /// Holder for a value without a limb representation.
    #[inline]
    pub(crate) const fn from_exception(value: Double) -> Scs {
        Scs {
            h_word: [0; SCS_NB_WORDS],
            exception: value,
            index: 0,
            sign: if value.is_sign_negative() { -1 } else { 1 },
        }
    }

    #[inline]
    pub const fn is_regular(&self) -> bool {
        self.exception.to_bits() == Double::ONE.to_bits()
    }

    /// Leading limb index, meaningful for regular values only.
    #[inline]
    pub const fn index(&self) -> i32 {
        self.index
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.sign < 0
    }

    /// The value a non-regular number stands for, `±1` for regular ones.
    #[inline]
    pub(crate) fn exception_value(&self) -> Double {
        if self.is_regular() {
            if self.sign < 0 {
                Double::NEG_ONE
            } else {
                Double::ONE
            }
        } else {
            self.exception
        }
    }
}

impl std::ops::Neg for Scs {
    type Output = Scs;

    #[inline]
    fn neg(self) -> Scs {
        Scs {
            sign: -self.sign,
            exception: if self.is_regular() {
                self.exception
            } else {
                -self.exception
            },
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_and_negation() {
        let z = Scs::zero(false);
        assert!(!z.is_regular());
        assert!(!z.is_negative());
        let nz = -z;
        assert!(nz.is_negative());
        assert_eq!(nz.exception.to_bits(), Double::NEG_ZERO.to_bits());
        let one = Scs::from_double(Double::ONE);
        assert!(one.is_regular());
        let m = -one;
        assert!(m.is_regular());
        assert!(m.is_negative());
        assert_eq!(m.to_double().to_bits(), Double::NEG_ONE.to_bits());
    }
}
