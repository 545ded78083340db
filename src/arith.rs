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
use crate::double::{Double, EXP_BIAS, HIDDEN_BIT, SIGN_MASK, shift_right_sticky, shift_right_sticky128};
use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

const QUIET_BIT: u64 = 0x0008_0000_0000_0000;

/// Splits a finite non-zero value into a significand with bit 52 set
/// and the unbiased exponent of that bit. Subnormals are normalized.
#[inline]
fn unpack(d: Double) -> (u64, i32) {
    let e = d.biased_exponent();
    let m = d.mantissa();
    if e == 0 {
        let shift = m.leading_zeros() as i32 - 11;
        (m << shift, -1022 - shift)
    } else {
        (m | HIDDEN_BIT, e - EXP_BIAS)
    }
}

#[inline]
fn propagate_nan(a: Double, b: Double) -> Double {
    if a.is_nan() {
        Double(a.0 | QUIET_BIT)
    } else {
        Double(b.0 | QUIET_BIT)
    }
}

/// IEEE addition, round to nearest even.
pub fn add(a: Double, b: Double) -> Double {
    if a.is_nan() || b.is_nan() {
        return propagate_nan(a, b);
    }
    if a.is_infinite() {
        if b.is_infinite() && a.sign() != b.sign() {
            return Double::NAN;
        }
        return a;
    }
    if b.is_infinite() {
        return b;
    }
    if a.is_zero() {
        if b.is_zero() {
            return Double::zero(a.is_sign_negative() && b.is_sign_negative());
        }
        return b;
    }
    if b.is_zero() {
        return a;
    }
    let (mut xa, mut ea) = unpack(a);
    let (mut xb, mut eb) = unpack(b);
    let mut sa = a.sign();
    let mut sb = b.sign();
    if (eb, xb) > (ea, xa) {
        std::mem::swap(&mut xa, &mut xb);
        std::mem::swap(&mut ea, &mut eb);
        std::mem::swap(&mut sa, &mut sb);
    }
    let ma = xa << 3;
    let mb = shift_right_sticky(xb << 3, (ea - eb).min(63) as u32);
    if sa == sb {
        Double::round_pack(sa, ea, ma + mb)
    } else {
        let m = ma - mb;
        if m == 0 {
            return Double::ZERO;
        }
        Double::round_pack(sa, ea, m)
    }
}

/// IEEE subtraction, round to nearest even.
#[inline]
pub fn sub(a: Double, b: Double) -> Double {
    add(a, b.negate())
}

/// IEEE multiplication, round to nearest even.
pub fn mul(a: Double, b: Double) -> Double {
    if a.is_nan() || b.is_nan() {
        return propagate_nan(a, b);
    }
    let sign = a.sign() ^ b.sign();
    if a.is_infinite() || b.is_infinite() {
        if a.is_zero() || b.is_zero() {
            return Double::NAN;
        }
        return Double::infinity(sign != 0);
    }
    if a.is_zero() || b.is_zero() {
        return Double::zero(sign != 0);
    }
    let (xa, ea) = unpack(a);
    let (xb, eb) = unpack(b);
    let p = xa as u128 * xb as u128;
    let shift = (128 - p.leading_zeros()) - 56;
    let m = shift_right_sticky128(p, shift) as u64;
    Double::round_pack(sign, ea + eb + shift as i32 - 49, m)
}

/// Restoring long division of two 53-bit significands.
///
/// Returns `floor(num * 2^58 / den)` with the remainder folded into
/// the sticky bit, enough for a 56-bit extended rounding.
fn div_mantissa(num: u64, den: u64) -> u64 {
    let dividend = (num as u128) << 58;
    let den = den as u128;
    let mut rem: u128 = 0;
    let mut q: u128 = 0;
    for i in (0..111).rev() {
        rem = (rem << 1) | ((dividend >> i) & 1);
        if rem >= den {
            rem -= den;
            q |= 1u128 << i;
        }
    }
    (q as u64) | (rem != 0) as u64
}

/// IEEE division, round to nearest even.
pub fn div(a: Double, b: Double) -> Double {
    if a.is_nan() || b.is_nan() {
        return propagate_nan(a, b);
    }
    let sign = a.sign() ^ b.sign();
    if a.is_infinite() {
        if b.is_infinite() {
            return Double::NAN;
        }
        return Double::infinity(sign != 0);
    }
    if b.is_infinite() {
        return Double::zero(sign != 0);
    }
    if b.is_zero() {
        if a.is_zero() {
            return Double::NAN;
        }
        return Double::infinity(sign != 0);
    }
    if a.is_zero() {
        return Double::zero(sign != 0);
    }
    let (xa, ea) = unpack(a);
    let (xb, eb) = unpack(b);
    let q = div_mantissa(xa, xb);
    Double::round_pack(sign, ea - eb - 3, q)
}

/// Total order key where -0 and +0 coincide.
#[inline]
const fn order_key(d: Double) -> i64 {
    let magnitude = (d.0 & !SIGN_MASK) as i64;
    if d.0 & SIGN_MASK != 0 {
        -magnitude
    } else {
        magnitude
    }
}

/// IEEE equality, `+0 == -0` and NaN is never equal.
#[inline]
pub(crate) const fn eq(a: Double, b: Double) -> bool {
    if a.is_nan() || b.is_nan() {
        return false;
    }
    order_key(a) == order_key(b)
}

#[inline]
pub(crate) const fn lt(a: Double, b: Double) -> bool {
    if a.is_nan() || b.is_nan() {
        return false;
    }
    order_key(a) < order_key(b)
}

#[inline]
pub(crate) const fn le(a: Double, b: Double) -> bool {
    if a.is_nan() || b.is_nan() {
        return false;
    }
    order_key(a) <= order_key(b)
}

#[inline]
pub(crate) const fn gt(a: Double, b: Double) -> bool {
    lt(b, a)
}

#[inline]
pub(crate) const fn ge(a: Double, b: Double) -> bool {
    le(b, a)
}

/// Largest integer not greater than `x`.
pub fn floor(x: Double) -> Double {
    if !x.is_finite() || x.is_zero() || x.exponent() >= 52 {
        return x;
    }
    let t = x.to_s64();
    let ft = Double::from_s64(t);
    if eq(ft, x) {
        return x;
    }
    if x.is_sign_negative() {
        Double::from_s64(t - 1)
    } else {
        ft
    }
}

/// Smallest integer not less than `x`.
pub fn ceil(x: Double) -> Double {
    if !x.is_finite() || x.is_zero() || x.exponent() >= 52 {
        return x;
    }
    let t = x.to_s64();
    let ft = Double::from_s64(t);
    if eq(ft, x) {
        return x;
    }
    if x.is_sign_negative() {
        if t == 0 {
            return Double::NEG_ZERO;
        }
        ft
    } else {
        Double::from_s64(t + 1)
    }
}

/// Nearest integer, ties to even.
pub fn round_even(x: Double) -> Double {
    if !x.is_finite() || x.is_zero() || x.exponent() >= 52 {
        return x;
    }
    let (sig, lsb) = x.decompose();
    let shift = (-lsb) as u32;
    if shift > 53 {
        return Double::zero(x.is_sign_negative());
    }
    let int = sig >> shift;
    let frac = sig & ((1u64 << shift) - 1);
    let half = 1u64 << (shift - 1);
    let rounded = if frac > half || (frac == half && int & 1 != 0) {
        int + 1
    } else {
        int
    };
    if rounded == 0 {
        return Double::zero(x.is_sign_negative());
    }
    let v = Double::from_u64(rounded);
    if x.is_sign_negative() { v.negate() } else { v }
}

impl PartialEq for Double {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        eq(*self, *other)
    }
}

impl PartialOrd for Double {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.is_nan() || other.is_nan() {
            return None;
        }
        Some(order_key(*self).cmp(&order_key(*other)))
    }

    #[inline]
    fn lt(&self, other: &Self) -> bool {
        lt(*self, *other)
    }

    #[inline]
    fn le(&self, other: &Self) -> bool {
        le(*self, *other)
    }

    #[inline]
    fn gt(&self, other: &Self) -> bool {
        gt(*self, *other)
    }

    #[inline]
    fn ge(&self, other: &Self) -> bool {
        ge(*self, *other)
    }
}

impl Neg for Double {
    type Output = Double;

    #[inline]
    fn neg(self) -> Self::Output {
        self.negate()
    }
}

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $func:ident) => {
        impl $trait<Double> for Double {
            type Output = Double;

            #[inline]
            fn $method(self, rhs: Double) -> Self::Output {
                $func(self, rhs)
            }
        }

        impl $trait<f64> for Double {
            type Output = Double;

            #[inline]
            fn $method(self, rhs: f64) -> Self::Output {
                $func(self, Double::from_f64(rhs))
            }
        }

        impl $trait<Double> for f64 {
            type Output = Double;

            #[inline]
            fn $method(self, rhs: Double) -> Self::Output {
                $func(Double::from_f64(self), rhs)
            }
        }

        impl $assign_trait<Double> for Double {
            #[inline]
            fn $assign_method(&mut self, rhs: Double) {
                *self = $func(*self, rhs);
            }
        }
    };
}

impl_binary_op!(Add, add, AddAssign, add_assign, add);
impl_binary_op!(Sub, sub, SubAssign, sub_assign, sub);
impl_binary_op!(Mul, mul, MulAssign, mul_assign, mul);
impl_binary_op!(Div, div, DivAssign, div_assign, div);

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn d(v: f64) -> Double {
        Double::from_f64(v)
    }

    fn assert_same(got: Double, expected: f64) {
        if expected.is_nan() {
            assert!(got.is_nan(), "expected NaN, got {got:?}");
        } else {
            assert_eq!(
                got.to_bits(),
                expected.to_bits(),
                "expected {expected:e}, got {got:?}"
            );
        }
    }

    fn interesting() -> Vec<f64> {
        vec![
            0.0,
            -0.0,
            1.0,
            -1.0,
            0.5,
            3.0,
            f64::INFINITY,
            f64::NEG_INFINITY,
            f64::NAN,
            f64::MAX,
            -f64::MAX,
            f64::MIN_POSITIVE,
            -f64::MIN_POSITIVE,
            f64::from_bits(1),
            f64::from_bits(0x000f_ffff_ffff_ffff),
            f64::from_bits(0x8000_0000_0000_0003),
            9007199254740992.0,
            9007199254740993.0,
            4503599627370496.5,
            1.0000000000000002,
            0.9999999999999999,
            1e308,
            1e-308,
            std::f64::consts::PI,
            -std::f64::consts::E,
        ]
    }

    fn random_double(rng: &mut impl Rng) -> f64 {
        match rng.random_range(0..4) {
            0 => f64::from_bits(rng.random::<u64>()),
            1 => f64::from_bits(rng.random::<u64>() & 0x800f_ffff_ffff_ffff),
            2 => rng.random_range(-4.0..4.0),
            _ => {
                let e = rng.random_range(-60..60);
                rng.random_range(0.5..1.0) * 2f64.powi(e) * if rng.random() { 1.0 } else { -1.0 }
            }
        }
    }

    #[test]
    fn test_concrete() {
        assert_eq!((Double::ONE + Double::ONE).to_bits(), 0x4000_0000_0000_0000);
        assert_eq!((Double::ONE / Double::ZERO).to_bits(), 0x7ff0_0000_0000_0000);
        assert!((Double::INFINITY - Double::INFINITY).is_nan());
        assert!((Double::ZERO / Double::ZERO).is_nan());
        assert!((Double::INFINITY * Double::ZERO).is_nan());
        assert_eq!((Double::NEG_ZERO + Double::NEG_ZERO).to_bits(), 0x8000_0000_0000_0000);
        assert_eq!((Double::NEG_ZERO + Double::ZERO).to_bits(), 0);
        assert_eq!((Double::ONE - Double::ONE).to_bits(), 0);
    }

    #[test]
    fn test_against_native_grid() {
        let values = interesting();
        for &a in values.iter() {
            for &b in values.iter() {
                assert_same(d(a) + d(b), a + b);
                assert_same(d(a) - d(b), a - b);
                assert_same(d(a) * d(b), a * b);
                assert_same(d(a) / d(b), a / b);
            }
        }
    }

    #[test]
    fn test_against_native_random() {
        let mut rng = rand::rng();
        for _ in 0..20000 {
            let a = random_double(&mut rng);
            let b = random_double(&mut rng);
            assert_same(d(a) + d(b), a + b);
            assert_same(d(a) - d(b), a - b);
            assert_same(d(a) * d(b), a * b);
            assert_same(d(a) / d(b), a / b);
        }
    }

    #[test]
    fn test_subnormal_products() {
        let mut rng = rand::rng();
        for _ in 0..5000 {
            let a = rng.random_range(0.5..2.0) * 2f64.powi(rng.random_range(-600..-450));
            let b = rng.random_range(-2.0..2.0) * 2f64.powi(rng.random_range(-620..-500));
            assert_same(d(a) * d(b), a * b);
            assert_same(d(b) / d(1.0 / a), b / (1.0 / a));
        }
    }

    #[test]
    fn test_comparisons() {
        let values = interesting();
        for &a in values.iter() {
            for &b in values.iter() {
                assert_eq!(eq(d(a), d(b)), a == b, "{a} == {b}");
                assert_eq!(lt(d(a), d(b)), a < b, "{a} < {b}");
                assert_eq!(le(d(a), d(b)), a <= b, "{a} <= {b}");
                assert_eq!(gt(d(a), d(b)), a > b, "{a} > {b}");
                assert_eq!(ge(d(a), d(b)), a >= b, "{a} >= {b}");
                assert_eq!(d(a).partial_cmp(&d(b)), a.partial_cmp(&b));
                assert_eq!(d(a) < d(b), a < b, "{a} < {b}");
                assert_eq!(d(a) >= d(b), a >= b, "{a} >= {b}");
            }
        }
    }

    #[test]
    fn test_floor_ceil() {
        let values = [
            0.0, -0.0, 0.5, -0.5, 1.0, -1.0, 2.5, -2.5, 1e300, -1e-300, 4503599627370495.5,
            -4503599627370495.5, 123456.789,
        ];
        for v in values {
            assert_same(floor(d(v)), v.floor());
            assert_same(ceil(d(v)), v.ceil());
            assert_same(round_even(d(v)), v.round_ties_even());
        }
        let mut rng = rand::rng();
        for _ in 0..5000 {
            let v = random_double(&mut rng);
            if v.is_nan() {
                continue;
            }
            let f = floor(d(v));
            let c = ceil(d(v));
            assert!(f <= d(v) && d(v) <= c);
            assert_eq!(f == d(v), v.floor() == v);
            assert_same(f, v.floor());
            assert_same(c, v.ceil());
        }
    }

    #[test]
    fn test_operators_with_literals() {
        let x = Double::from_f64(3.0);
        assert_eq!((x * 0.5).to_f64(), 1.5);
        assert_eq!((1.0 - x).to_f64(), -2.0);
        let mut y = x;
        y += Double::ONE;
        y /= Double::from_f64(2.0);
        assert_eq!(y.to_f64(), 2.0);
        assert_eq!((-y).to_f64(), -2.0);
    }
}
