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
use crate::scs::tables::{D256_OVER_PI_DIGITS, PIO2_SCS, PIO256_SCS, TWO_OVER_PI_DIGITS};
use crate::scs::{SCS_MASK, SCS_NB_BITS, SCS_NB_WORDS, SCS_RADIX, Scs};

const FRAC_WORDS: usize = 11;

/// Payne-Hanek style reduction: `x = n * p + y` with `|y| <= p/2` where
/// `p = 2π / (mask + 1)`, and `n` returned modulo `mask + 1`.
///
/// Only the digits of `c/π` that land between the units place and
/// `2^(-330)` are multiplied in, the rest either contribute multiples of
/// the period or vanish below the working precision.
fn rem_pio(x: Double, digits: &[u32], mask: i32, period: &Scs) -> (i32, Scs) {
    let sx = Scs::from_double(x.abs());
    if !sx.is_regular() {
        return (0, Scs::from_exception(x - x));
    }
    let mut acc = [0u64; FRAC_WORDS + 1];
    for (t, slot) in acc.iter_mut().enumerate() {
        for i in 0..3 {
            let k = sx.index - i as i32 + t as i32;
            if k >= 0 && (k as usize) < digits.len() {
                *slot += sx.h_word[i] as u64 * digits[k as usize] as u64;
            }
        }
    }
    for t in (1..=FRAC_WORDS).rev() {
        acc[t - 1] += acc[t] >> SCS_NB_BITS;
        acc[t] &= SCS_MASK;
    }
    let mut n = (acc[0] & mask as u64) as i32;
    let mut frac = [0u64; FRAC_WORDS];
    frac.copy_from_slice(&acc[1..]);
    let mut sign = 1;
    if frac[0] >= SCS_RADIX / 2 {
        // fraction above one half, take the distance to the next integer
        n = (n + 1) & mask;
        let mut borrow = 0u64;
        for f in frac.iter_mut().rev() {
            let v = SCS_RADIX - *f - borrow;
            if v == SCS_RADIX {
                *f = 0;
                borrow = 0;
            } else {
                *f = v;
                borrow = 1;
            }
        }
        sign = -1;
    }
    let lead = frac.iter().take_while(|&&w| w == 0).count();
    let mut y = if lead == FRAC_WORDS {
        Scs::zero(false)
    } else {
        let mut h_word = [0u32; SCS_NB_WORDS];
        for (w, &f) in h_word.iter_mut().zip(frac[lead..].iter()) {
            *w = f as u32;
        }
        let f = Scs {
            h_word,
            exception: Double::ONE,
            index: -1 - lead as i32,
            sign,
        };
        Scs::mul(&f, period)
    };
    if x.is_sign_negative() {
        n = (-n) & mask;
        y = -y;
    }
    (n, y)
}

/// Reduces `x` modulo `π/2`, returning the quadrant `n mod 4` and
/// `y = x - n * π/2` in `[-π/4, π/4]`.
pub fn rem_pio2_scs(x: Double) -> (i32, Scs) {
    rem_pio(x, &TWO_OVER_PI_DIGITS, 3, &PIO2_SCS)
}

/// Reduces `x` modulo `π/256`, returning `n mod 512` and
/// `y = x - n * π/256` in `[-π/512, π/512]`.
pub fn rem_pio256_scs(x: Double) -> (i32, Scs) {
    rem_pio(x, &D256_OVER_PI_DIGITS, 511, &PIO256_SCS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rem_pio2() {
        let cases: [(u64, i32, u64); 5] = [
            (0x4480f0cf064dd592, 3, 0x3fe19eab99633cd8),
            (0x7506ac5b262ca1ff, 1, 0x3c214ae72e6ba22f),
            (0xfe37e43c8800759c, 1, 0x3fe39e51e3b9d3d4),
            (0x414a666666666666, 0, 0xbfc29300ba5e73de),
            (0x412e848100000000, 0, 0x3fc23b565e1298cf),
        ];
        for (x, n, y) in cases {
            let (rn, ry) = rem_pio2_scs(Double::from_bits(x));
            assert_eq!(rn, n, "{x:#x}");
            assert_eq!(ry.to_double().to_bits(), y, "{x:#x}");
        }
    }

    #[test]
    fn test_rem_pio256() {
        let cases: [(u64, i32, u64); 5] = [
            (0x4480f0cf064dd592, 429, 0xbf5a723bb965ba48),
            (0x7506ac5b262ca1ff, 128, 0x3c214ae72e6ba22f),
            (0xfe37e43c8800759c, 178, 0xbf40e9d86dbd9c4c),
            (0x414a666666666666, 500, 0x3f619ef1352b7d2a),
            (0x412e848100000000, 12, 0xbf73c4c424112064),
        ];
        for (x, n, y) in cases {
            let (rn, ry) = rem_pio256_scs(Double::from_bits(x));
            assert_eq!(rn, n, "{x:#x}");
            assert_eq!(ry.to_double().to_bits(), y, "{x:#x}");
        }
    }

    #[test]
    fn test_small_arguments() {
        // below π/4 nothing is subtracted
        let x = Double::from_f64(0.5);
        let (n, y) = rem_pio2_scs(x);
        assert_eq!(n, 0);
        assert_eq!(y.to_double().to_bits(), x.to_bits());
        let (n, y) = rem_pio2_scs(-x);
        assert_eq!(n, 0);
        assert_eq!(y.to_double().to_bits(), (-x).to_bits());
        let (n, y) = rem_pio2_scs(Double::from_f64(3.0));
        assert_eq!(n, 2);
        assert_eq!(y.to_double().to_bits(), 0xbfc21fb54442d184);
    }
}
