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
use crate::err::SoftFloatError;
use crate::rounding::RoundingMode;

pub(crate) const SIGN_MASK: u64 = 0x8000_0000_0000_0000;
pub(crate) const EXP_MASK: u64 = 0x7ff0_0000_0000_0000;
pub(crate) const FRAC_MASK: u64 = 0x000f_ffff_ffff_ffff;
pub(crate) const HIDDEN_BIT: u64 = 0x0010_0000_0000_0000;
pub(crate) const EXP_BIAS: i32 = 1023;

/// IEEE-754 binary64 value held as its raw bit pattern.
///
/// Every arithmetic operation on `Double` is carried out on integers,
/// the host FPU is never involved. Conversions from and to `f64` are plain
/// bit casts.
#[repr(transparent)]
#[derive(Copy, Clone, Default)]
pub struct Double(pub(crate) u64);

impl Double {
    pub const ZERO: Double = Double(0);
    pub const NEG_ZERO: Double = Double(SIGN_MASK);
    pub const ONE: Double = Double(0x3ff0_0000_0000_0000);
    pub const NEG_ONE: Double = Double(0xbff0_0000_0000_0000);
    pub const INFINITY: Double = Double(EXP_MASK);
    pub const NEG_INFINITY: Double = Double(SIGN_MASK | EXP_MASK);
    pub const NAN: Double = Double(0x7ff8_0000_0000_0000);
    pub const MAX: Double = Double(0x7fef_ffff_ffff_ffff);
    pub const MIN: Double = Double(0xffef_ffff_ffff_ffff);
    pub const MIN_POSITIVE: Double = Double(HIDDEN_BIT);
    pub const MIN_SUBNORMAL: Double = Double(1);
    pub const EPSILON: Double = Double(0x3cb0_0000_0000_0000);

    #[inline]
    pub const fn from_bits(bits: u64) -> Double {
        Double(bits)
    }

    #[inline]
    pub const fn to_bits(self) -> u64 {
        self.0
    }

    /// Bit cast, no floating point operation is performed.
    #[inline]
    pub const fn from_f64(v: f64) -> Double {
        Double(v.to_bits())
    }

    /// Bit cast, no floating point operation is performed.
    #[inline]
    pub const fn to_f64(self) -> f64 {
        f64::from_bits(self.0)
    }

    /// Sign bit, `1` for negative values.
    #[inline]
    pub const fn sign(self) -> u32 {
        (self.0 >> 63) as u32
    }

    /// Biased exponent field.
    #[inline]
    pub const fn biased_exponent(self) -> i32 {
        ((self.0 >> 52) & 0x7ff) as i32
    }

    /// Stored 52 fraction bits.
    #[inline]
    pub const fn mantissa(self) -> u64 {
        self.0 & FRAC_MASK
    }

    /// Unbiased exponent of the leading significant bit.
    ///
    /// Subnormals report their true binade, zero reports -1023.
    #[inline]
    pub const fn exponent(self) -> i32 {
        let e = self.biased_exponent();
        if e != 0 {
            return e - EXP_BIAS;
        }
        let m = self.mantissa();
        if m == 0 {
            return -EXP_BIAS;
        }
        -1022 - (m.leading_zeros() as i32 - 12)
    }

    #[inline]
    pub const fn is_nan(self) -> bool {
        (self.0 & !SIGN_MASK) > EXP_MASK
    }

    #[inline]
    pub const fn is_infinite(self) -> bool {
        (self.0 & !SIGN_MASK) == EXP_MASK
    }

    #[inline]
    pub const fn is_finite(self) -> bool {
        (self.0 & EXP_MASK) != EXP_MASK
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        (self.0 & !SIGN_MASK) == 0
    }

    #[inline]
    pub const fn is_subnormal(self) -> bool {
        (self.0 & EXP_MASK) == 0 && (self.0 & FRAC_MASK) != 0
    }

    #[inline]
    pub const fn is_sign_negative(self) -> bool {
        (self.0 & SIGN_MASK) != 0
    }

    #[inline]
    pub const fn is_sign_positive(self) -> bool {
        (self.0 & SIGN_MASK) == 0
    }

    #[inline]
    pub const fn abs(self) -> Double {
        Double(self.0 & !SIGN_MASK)
    }

    #[inline]
    pub const fn negate(self) -> Double {
        Double(self.0 ^ SIGN_MASK)
    }

    #[inline]
    pub const fn copysign(self, sign: Double) -> Double {
        Double((self.0 & !SIGN_MASK) | (sign.0 & SIGN_MASK))
    }

    /// Signed zero, negative when `sign` is set.
    #[inline]
    pub const fn zero(sign: bool) -> Double {
        if sign { Double::NEG_ZERO } else { Double::ZERO }
    }

    /// Signed infinity, negative when `sign` is set.
    #[inline]
    pub const fn infinity(sign: bool) -> Double {
        if sign {
            Double::NEG_INFINITY
        } else {
            Double::INFINITY
        }
    }

    /// Exact power of two `2^k` for `-1022 <= k <= 1023`.
    #[inline]
    pub(crate) const fn pow2(k: i32) -> Double {
        Double(((k + EXP_BIAS) as u64) << 52)
    }

    /// Composes a pattern from already rounded fields, no rounding happens here.
    #[inline]
    pub const fn pack(sign: u32, biased_exp: i32, mantissa: u64) -> Double {
        Double(((sign as u64) << 63) | (((biased_exp as u64) & 0x7ff) << 52) | (mantissa & FRAC_MASK))
    }

    /// Rounds `(-1)^sign * mant_ext * 2^(exp - 55)` to nearest even.
    ///
    /// `mant_ext` normally carries 53 significant bits followed by guard,
    /// round and sticky bits, but any non-normalized value is accepted.
    #[inline]
    pub fn round_pack(sign: u32, exp: i32, mant_ext: u64) -> Double {
        Double::round_pack_mode(sign, exp, mant_ext, RoundingMode::Nearest)
    }

    /// Same as [Double::round_pack] in requested rounding direction.
    pub fn round_pack_mode(sign: u32, exp: i32, mant_ext: u64, mode: RoundingMode) -> Double {
        if mant_ext == 0 {
            return Double::zero(sign != 0);
        }
        let mut exp = exp;
        let mut mant = mant_ext;
        let lz = mant.leading_zeros() as i32;
        if lz < 8 {
            let shift = 8 - lz;
            mant = shift_right_sticky(mant, shift as u32);
            exp += shift;
        } else if lz > 8 {
            let shift = lz - 8;
            mant <<= shift;
            exp -= shift;
        }
        let mut biased = exp + EXP_BIAS;
        if biased >= 0x7ff {
            return overflow_value(sign, mode);
        }
        if biased <= 0 {
            let shift = (1 - biased).min(63) as u32;
            mant = shift_right_sticky(mant, shift);
            biased = 0;
        }
        let grs = mant & 7;
        let mut m53 = mant >> 3;
        let round_up = match mode {
            RoundingMode::Nearest => grs > 4 || (grs == 4 && (m53 & 1) != 0),
            RoundingMode::Upward => grs != 0 && sign == 0,
            RoundingMode::Downward => grs != 0 && sign != 0,
            RoundingMode::TowardZero => false,
        };
        if round_up {
            m53 += 1;
        }
        let magnitude = if biased == 0 {
            m53
        } else {
            (((biased - 1) as u64) << 52) + m53
        };
        if magnitude >= EXP_MASK {
            return overflow_value(sign, mode);
        }
        Double(((sign as u64) << 63) | magnitude)
    }

    /// Next representable value towards +Inf.
    pub const fn next_up(self) -> Double {
        if self.is_nan() || self.0 == EXP_MASK {
            return self;
        }
        if self.is_zero() {
            return Double::MIN_SUBNORMAL;
        }
        if self.is_sign_negative() {
            Double(self.0 - 1)
        } else {
            Double(self.0 + 1)
        }
    }

    /// Next representable value towards -Inf.
    pub const fn next_down(self) -> Double {
        self.negate().next_up().negate()
    }

    /// Neighbour with the same sign and larger magnitude, a raw increment.
    #[inline]
    pub(crate) const fn raw_inc(self) -> Double {
        Double(self.0 + 1)
    }

    /// Neighbour with the same sign and smaller magnitude, a raw decrement.
    #[inline]
    pub(crate) const fn raw_dec(self) -> Double {
        Double(self.0 - 1)
    }

    /// Signed significand as an integer with the hidden bit set, and the
    /// exponent of its last bit, so `self = ±sig * 2^e`. Zero gives `sig = 0`.
    #[inline]
    pub(crate) const fn decompose(self) -> (u64, i32) {
        let e = self.biased_exponent();
        let m = self.mantissa();
        if e == 0 {
            (m, -1074)
        } else {
            (m | HIDDEN_BIT, e - 1075)
        }
    }

    pub fn from_s32(v: i32) -> Double {
        Double::from_s64(v as i64)
    }

    pub fn from_s64(v: i64) -> Double {
        let sign = (v < 0) as u32;
        Double::round_pack(sign, 55, v.unsigned_abs())
    }

    pub fn from_u64(v: u64) -> Double {
        Double::round_pack(0, 55, v)
    }

    /// Truncates toward zero, saturating at the type bounds, NaN gives 0.
    pub fn to_s64(self) -> i64 {
        if self.is_nan() {
            return 0;
        }
        let neg = self.is_sign_negative();
        let e = self.exponent();
        if e < 0 {
            return 0;
        }
        if e >= 63 {
            return if neg { i64::MIN } else { i64::MAX };
        }
        let (sig, lsb) = self.decompose();
        let mag = if lsb >= 0 {
            sig << lsb
        } else {
            sig >> (-lsb) as u32
        };
        if neg { -(mag as i64) } else { mag as i64 }
    }

    /// Truncates toward zero, saturating at the type bounds, NaN gives 0.
    pub fn to_s32(self) -> i32 {
        self.to_s64().clamp(i32::MIN as i64, i32::MAX as i64) as i32
    }

    /// Truncates toward zero, fails on NaN, infinities or out of range values.
    pub fn try_to_s64(self) -> Result<i64, SoftFloatError> {
        if !self.is_finite() {
            return Err(SoftFloatError::NotRepresentable);
        }
        // -2^63 is the only value with exponent 63 that fits
        if self.exponent() >= 63 && self.0 != 0xc3e0_0000_0000_0000 {
            return Err(SoftFloatError::NotRepresentable);
        }
        Ok(self.to_s64())
    }

    /// Truncates toward zero, fails on NaN, infinities or out of range values.
    pub fn try_to_s32(self) -> Result<i32, SoftFloatError> {
        let v = self.try_to_s64()?;
        i32::try_from(v).map_err(|_| SoftFloatError::NotRepresentable)
    }

    /// Exact integer test, infinities and NaN are not integers.
    pub const fn is_integer(self) -> bool {
        if !self.is_finite() {
            return false;
        }
        if self.is_zero() {
            return true;
        }
        let (sig, lsb) = self.decompose();
        if lsb >= 0 {
            return true;
        }
        let shift = -lsb;
        if shift >= 64 {
            return false;
        }
        sig & ((1u64 << shift) - 1) == 0
    }

    /// `self * 2^k` rounded to nearest.
    pub fn ldexp(self, k: i32) -> Double {
        self.ldexp_mode(k, RoundingMode::Nearest)
    }

    /// `self * 2^k` rounded in requested direction.
    pub fn ldexp_mode(self, k: i32, mode: RoundingMode) -> Double {
        if !self.is_finite() || self.is_zero() {
            return self;
        }
        let (sig, lsb) = self.decompose();
        // sig * 2^lsb = sig * 2^(exp - 55) with exp = lsb + 55
        let exp = (lsb as i64 + 55 + k as i64).clamp(-4000, 4000) as i32;
        Double::round_pack_mode(self.sign(), exp, sig, mode)
    }
}

/// Shifts right, OR-ing every bit shifted out into the least significant bit.
#[inline]
pub(crate) const fn shift_right_sticky(v: u64, shift: u32) -> u64 {
    if shift == 0 {
        v
    } else if shift >= 64 {
        (v != 0) as u64
    } else {
        (v >> shift) | ((v & ((1u64 << shift) - 1)) != 0) as u64
    }
}

#[inline]
pub(crate) const fn shift_right_sticky128(v: u128, shift: u32) -> u128 {
    if shift == 0 {
        v
    } else if shift >= 128 {
        (v != 0) as u128
    } else {
        (v >> shift) | ((v & ((1u128 << shift) - 1)) != 0) as u128
    }
}

/// Result of rounding a value beyond the finite range.
#[inline]
pub(crate) fn overflow_value(sign: u32, mode: RoundingMode) -> Double {
    let negative = sign != 0;
    let to_infinity = match mode {
        RoundingMode::Nearest => true,
        RoundingMode::Upward => !negative,
        RoundingMode::Downward => negative,
        RoundingMode::TowardZero => false,
    };
    match (to_infinity, negative) {
        (true, n) => Double::infinity(n),
        (false, false) => Double::MAX,
        (false, true) => Double::MIN,
    }
}

/// Result of rounding a non-zero value below half the smallest subnormal.
pub(crate) fn underflow_value(sign: u32, mode: RoundingMode) -> Double {
    let negative = sign != 0;
    if mode.rounds_away(negative) {
        Double::MIN_SUBNORMAL.copysign(Double::zero(negative))
    } else {
        Double::zero(negative)
    }
}

impl From<f64> for Double {
    #[inline]
    fn from(value: f64) -> Self {
        Double::from_f64(value)
    }
}

impl From<Double> for f64 {
    #[inline]
    fn from(value: Double) -> Self {
        value.to_f64()
    }
}

impl From<i32> for Double {
    #[inline]
    fn from(value: i32) -> Self {
        Double::from_s32(value)
    }
}

impl std::fmt::Debug for Double {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Double(0x{:016x} = {:e})", self.0, self.to_f64())
    }
}

impl std::fmt::Display for Double {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.to_f64(), f)
    }
}

impl num_traits::Zero for Double {
    #[inline]
    fn zero() -> Self {
        Double::ZERO
    }

    #[inline]
    fn is_zero(&self) -> bool {
        Double::is_zero(*self)
    }
}

impl num_traits::One for Double {
    #[inline]
    fn one() -> Self {
        Double::ONE
    }
}

impl num_traits::Bounded for Double {
    #[inline]
    fn min_value() -> Self {
        Double::MIN
    }

    #[inline]
    fn max_value() -> Self {
        Double::MAX
    }
}

impl num_traits::ToPrimitive for Double {
    fn to_i64(&self) -> Option<i64> {
        self.try_to_s64().ok()
    }

    fn to_u64(&self) -> Option<u64> {
        let v = *self;
        if !v.is_finite() || v <= Double::NEG_ONE {
            return None;
        }
        if v.is_sign_negative() || v.exponent() < 0 {
            return Some(0);
        }
        if v.exponent() >= 64 {
            return None;
        }
        let (sig, lsb) = v.decompose();
        Some(if lsb >= 0 { sig << lsb } else { sig >> -lsb })
    }

    #[inline]
    fn to_f64(&self) -> Option<f64> {
        Some(Double::to_f64(*self))
    }
}

impl num_traits::FromPrimitive for Double {
    #[inline]
    fn from_i64(n: i64) -> Option<Self> {
        Some(Double::from_s64(n))
    }

    #[inline]
    fn from_u64(n: u64) -> Option<Self> {
        Some(Double::from_u64(n))
    }

    #[inline]
    fn from_f64(n: f64) -> Option<Self> {
        Some(Double::from_f64(n))
    }
}
