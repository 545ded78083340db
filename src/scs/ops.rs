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
use crate::scs::{SCS_MASK, SCS_NB_BITS, SCS_NB_WORDS, SCS_RADIX, Scs};
use std::cmp::Ordering;

const NB: usize = SCS_NB_WORDS;

#[inline]
fn regular(h_word: [u32; NB], index: i32, sign: i32) -> Scs {
    Scs {
        h_word,
        exception: Double::ONE,
        index,
        sign,
    }
}

/// Compares magnitudes of two regular numbers.
fn cmp_magnitude(a: &Scs, b: &Scs) -> Ordering {
    a.index
        .cmp(&b.index)
        .then_with(|| a.h_word.cmp(&b.h_word))
}

/// `|a| + |b|` with the sign of `a`, requires `a.index >= b.index`.
fn add_magnitudes(a: &Scs, b: &Scs) -> Scs {
    let shift = (a.index - b.index) as usize;
    let mut r = [0u64; NB + 1];
    for i in 0..NB {
        r[i + 1] = a.h_word[i] as u64;
        if i >= shift {
            r[i + 1] += b.h_word[i - shift] as u64;
        }
    }
    for i in (1..=NB).rev() {
        r[i - 1] += r[i] >> SCS_NB_BITS;
        r[i] &= SCS_MASK;
    }
    let mut h_word = [0u32; NB];
    if r[0] != 0 {
        for (w, &v) in h_word.iter_mut().zip(r[..NB].iter()) {
            *w = v as u32;
        }
        regular(h_word, a.index + 1, a.sign)
    } else {
        for (w, &v) in h_word.iter_mut().zip(r[1..].iter()) {
            *w = v as u32;
        }
        regular(h_word, a.index, a.sign)
    }
}

/// `|a| - |b|` with the sign of `a`, requires `|a| > |b|`.
fn sub_magnitudes(a: &Scs, b: &Scs) -> Scs {
    let shift = (a.index - b.index) as usize;
    let mut r = [0i64; NB];
    for i in 0..NB {
        r[i] = a.h_word[i] as i64;
        if i >= shift {
            r[i] -= b.h_word[i - shift] as i64;
        }
    }
    for i in (1..NB).rev() {
        if r[i] < 0 {
            r[i] += SCS_RADIX as i64;
            r[i - 1] -= 1;
        }
    }
    let lead = r.iter().take_while(|&&v| v == 0).count();
    let mut h_word = [0u32; NB];
    for (w, &v) in h_word.iter_mut().zip(r[lead..].iter()) {
        *w = v as u32;
    }
    regular(h_word, a.index - lead as i32, a.sign)
}

impl Scs {
    pub fn add(a: &Scs, b: &Scs) -> Scs {
        if !a.is_regular() || !b.is_regular() {
            if a.exception.is_zero() && b.is_regular() {
                return *b;
            }
            if b.exception.is_zero() && a.is_regular() {
                return *a;
            }
            return Scs::from_exception(a.exception_value() + b.exception_value());
        }
        if a.sign == b.sign {
            return if a.index >= b.index {
                add_magnitudes(a, b)
            } else {
                add_magnitudes(b, a)
            };
        }
        match cmp_magnitude(a, b) {
            Ordering::Equal => Scs::zero(false),
            Ordering::Greater => sub_magnitudes(a, b),
            Ordering::Less => sub_magnitudes(b, a),
        }
    }

    #[inline]
    pub fn sub(a: &Scs, b: &Scs) -> Scs {
        Scs::add(a, &-*b)
    }

    /// Product truncated after the ninth partial limb.
    pub fn mul(a: &Scs, b: &Scs) -> Scs {
        if !a.is_regular() || !b.is_regular() {
            return Scs::from_exception(a.exception_value() * b.exception_value());
        }
        let mut r = [0u64; NB + 1];
        for i in 0..NB {
            for j in 0..(NB + 1 - i).min(NB) {
                r[i + j] += a.h_word[i] as u64 * b.h_word[j] as u64;
            }
        }
        for k in (1..=NB).rev() {
            r[k - 1] += r[k] >> SCS_NB_BITS;
            r[k] &= SCS_MASK;
        }
        let sign = a.sign * b.sign;
        let index = a.index + b.index;
        let mut h_word = [0u32; NB];
        if r[0] >= SCS_RADIX {
            h_word[0] = (r[0] >> SCS_NB_BITS) as u32;
            h_word[1] = (r[0] & SCS_MASK) as u32;
            for i in 2..NB {
                h_word[i] = r[i - 1] as u32;
            }
            regular(h_word, index + 1, sign)
        } else {
            for i in 0..NB {
                h_word[i] = r[i] as u32;
            }
            regular(h_word, index, sign)
        }
    }

    #[inline]
    pub fn square(a: &Scs) -> Scs {
        Scs::mul(a, a)
    }

    /// Division by a small positive integer, exact up to the last limb.
    pub fn div_int(a: &Scs, n: u32) -> Scs {
        if !a.is_regular() {
            return Scs::from_exception(a.exception / Double::from_u64(n as u64));
        }
        let n = n as u64;
        let mut q = [0u64; NB + 1];
        let mut rem = 0u64;
        for (i, qi) in q.iter_mut().enumerate() {
            let cur = (rem << SCS_NB_BITS) + if i < NB { a.h_word[i] as u64 } else { 0 };
            *qi = cur / n;
            rem = cur % n;
        }
        let mut h_word = [0u32; NB];
        if q[0] == 0 {
            for (w, &v) in h_word.iter_mut().zip(q[1..].iter()) {
                *w = v as u32;
            }
            regular(h_word, a.index - 1, a.sign)
        } else {
            for (w, &v) in h_word.iter_mut().zip(q[..NB].iter()) {
                *w = v as u32;
            }
            regular(h_word, a.index, a.sign)
        }
    }

    /// Reciprocal by two Newton steps from a double seed.
    pub fn inv(a: &Scs) -> Scs {
        if !a.is_regular() {
            return Scs::from_exception(Double::ONE / a.exception);
        }
        let s = regular(a.h_word, 0, 1);
        let two = Scs::from_double(Double::from_f64(2.0));
        let mut r = Scs::from_double(Double::ONE / s.to_double());
        for _ in 0..2 {
            let t = Scs::sub(&two, &Scs::mul(&s, &r));
            r = Scs::mul(&r, &t);
        }
        r.index -= a.index;
        r.sign = a.sign;
        r
    }

    pub fn div(a: &Scs, b: &Scs) -> Scs {
        if !a.is_regular() || !b.is_regular() {
            return Scs::from_exception(a.exception_value() / b.exception_value());
        }
        Scs::mul(a, &Scs::inv(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rounding::RoundingMode;
    use rand::Rng;

    fn random_double(rng: &mut impl Rng, lo: i32, hi: i32) -> f64 {
        let m: f64 = rng.random_range(1.0..2.0);
        let s = if rng.random::<bool>() { -1.0 } else { 1.0 };
        s * m * 2f64.powi(rng.random_range(lo..hi))
    }

    #[test]
    fn test_exact_products() {
        let mut rng = rand::rng();
        for _ in 0..10000 {
            let a = random_double(&mut rng, -300, 300);
            let b = random_double(&mut rng, -300, 300);
            let p = Scs::mul(&Scs::from_double(a.into()), &Scs::from_double(b.into()));
            assert_eq!(p.to_double().to_f64(), a * b, "{a} * {b}");
        }
    }

    #[test]
    fn test_exact_sums() {
        let mut rng = rand::rng();
        for _ in 0..10000 {
            let a = random_double(&mut rng, -60, 60);
            let b = random_double(&mut rng, -60, 60);
            let sa = Scs::from_double(a.into());
            let sb = Scs::from_double(b.into());
            assert_eq!(Scs::add(&sa, &sb).to_double().to_f64(), a + b, "{a} + {b}");
            assert_eq!(Scs::sub(&sa, &sb).to_double().to_f64(), a - b, "{a} - {b}");
        }
    }

    #[test]
    fn test_cancellation() {
        let a = Scs::from_double(Double::from_f64(1.0 + f64::EPSILON));
        let b = Scs::from_double(Double::ONE);
        let d = Scs::sub(&a, &b);
        assert_eq!(d.to_double().to_f64(), f64::EPSILON);
        let z = Scs::sub(&a, &a);
        assert!(!z.is_regular());
        assert!(z.to_double().is_zero());
        let x = Scs::add(&z, &b);
        assert_eq!(x.to_double().to_bits(), Double::ONE.to_bits());
    }

    #[test]
    fn test_division() {
        let mut rng = rand::rng();
        for _ in 0..5000 {
            let a = random_double(&mut rng, -200, 200);
            let b = random_double(&mut rng, -200, 200);
            let q = Scs::div(&Scs::from_double(a.into()), &Scs::from_double(b.into()));
            assert_eq!(q.to_double().to_f64(), a / b, "{a} / {b}");
        }
        for n in [3u32, 7, 10, 1980] {
            let q = Scs::div_int(&Scs::from_double(Double::ONE), n);
            assert_eq!(q.to_double().to_f64(), 1.0 / n as f64);
        }
    }

    #[test]
    fn test_exception_arithmetic() {
        let inf = Scs::from_double(Double::INFINITY);
        let one = Scs::from_double(Double::ONE);
        assert!(Scs::add(&inf, &one).to_double().is_infinite());
        assert!(Scs::sub(&inf, &inf).to_double().is_nan());
        assert!(Scs::mul(&Scs::zero(false), &inf).to_double().is_nan());
        let r = Scs::div(&one, &Scs::zero(true));
        assert_eq!(r.to_double().to_bits(), Double::NEG_INFINITY.to_bits());
        let third = Scs::div_int(&one, 3);
        let three_thirds = Scs::mul(&third, &Scs::from_s32(3));
        assert_eq!(three_thirds.to_double_mode(RoundingMode::Upward).to_bits(), Double::ONE.to_bits());
        assert_eq!(
            three_thirds.to_double_mode(RoundingMode::Downward).to_bits(),
            Double::ONE.next_down().to_bits()
        );
    }
}
