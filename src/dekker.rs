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

/// Double-double value `hi + lo`, `hi` carries the leading 53 bits.
#[derive(Copy, Clone, Default, Debug)]
pub(crate) struct Dekker {
    pub(crate) lo: Double,
    pub(crate) hi: Double,
}

impl Dekker {
    #[inline]
    pub(crate) const fn new(lo: Double, hi: Double) -> Self {
        Dekker { lo, hi }
    }

    #[inline]
    pub(crate) const fn from_bits(lo: u64, hi: u64) -> Self {
        Dekker::new(Double::from_bits(lo), Double::from_bits(hi))
    }

    #[inline]
    pub(crate) const fn from_double(v: Double) -> Self {
        Dekker::new(Double::ZERO, v)
    }

    #[inline]
    pub(crate) fn neg(self) -> Self {
        Dekker::new(-self.lo, -self.hi)
    }

    // Splits `a` into 26 and 27 bits halves.
    #[inline]
    pub(crate) fn split(a: Double) -> Dekker {
        // CN = 2^N.
        const C: f64 = ((1 << 27) + 1) as f64;
        let t1 = a * C;
        let t2 = a - t1;
        let r_hi = t1 + t2;
        let r_lo = a - r_hi;
        Dekker::new(r_lo, r_hi)
    }

    /// Add12, also known as Fast2Sum: exact `a + b` when `|a| >= |b|`.
    #[inline]
    pub(crate) fn from_exact_add(a: Double, b: Double) -> Dekker {
        let r_hi = a + b;
        let t = r_hi - a;
        let r_lo = b - t;
        Dekker::new(r_lo, r_hi)
    }

    /// Add12Cond: exact `a + b` without ordering requirements.
    #[inline]
    pub(crate) fn from_full_exact_add(a: Double, b: Double) -> Dekker {
        let r_hi = a + b;
        let t1 = r_hi - a;
        let t2 = r_hi - t1;
        let t3 = b - t1;
        let t4 = a - t2;
        let r_lo = t4 + t3;
        Dekker::new(r_lo, r_hi)
    }

    /// Mul12: exact product by Dekker splitting.
    #[inline]
    pub(crate) fn from_exact_mult(a: Double, b: Double) -> Dekker {
        let asz = Dekker::split(a);
        let bsz = Dekker::split(b);
        let r_hi = a * b;
        let t1 = asz.hi * bsz.hi - r_hi;
        let t2 = t1 + asz.hi * bsz.lo;
        let t3 = t2 + asz.lo * bsz.hi;
        let r_lo = t3 + asz.lo * bsz.lo;
        Dekker::new(r_lo, r_hi)
    }

    /// Add22, requires `|a.hi| >= |b.hi|`.
    #[inline]
    pub(crate) fn add(a: Dekker, b: Dekker) -> Dekker {
        let r = a.hi + b.hi;
        let s = (((a.hi - r) + b.hi) + b.lo) + a.lo;
        let z_hi = r + s;
        let z_lo = (r - z_hi) + s;
        Dekker::new(z_lo, z_hi)
    }

    /// Add22Cond, any ordering of operands.
    #[inline]
    pub(crate) fn add_cond(a: Dekker, b: Dekker) -> Dekker {
        let v = Dekker::from_full_exact_add(a.hi, b.hi);
        let v3 = a.lo + b.lo;
        let v4 = v.lo + v3;
        Dekker::from_exact_add(v.hi, v4)
    }

    /// Add212: double-double plus double.
    #[inline]
    pub(crate) fn add_d(a: Dekker, b: Double) -> Dekker {
        let s = Dekker::from_full_exact_add(a.hi, b);
        let t = s.lo + a.lo;
        Dekker::from_exact_add(s.hi, t)
    }

    /// Mul22, relative error about 2^-102.
    #[inline]
    pub(crate) fn mult(a: Dekker, b: Dekker) -> Dekker {
        let m = Dekker::from_exact_mult(a.hi, b.hi);
        let ml = m.lo + (a.hi * b.lo + a.lo * b.hi);
        let z_hi = m.hi + ml;
        let z_lo = (m.hi - z_hi) + ml;
        Dekker::new(z_lo, z_hi)
    }

    /// Mul122: double times double-double.
    #[inline]
    pub(crate) fn mult_d(a: Double, b: Dekker) -> Dekker {
        let t = Dekker::from_exact_mult(a, b.hi);
        let t3 = a * b.lo;
        let t4 = t.lo + t3;
        Dekker::from_exact_add(t.hi, t4)
    }

    /// MulAdd22: `c + a * b`.
    #[inline]
    pub(crate) fn mul_add(c: Dekker, a: Dekker, b: Dekker) -> Dekker {
        let t = Dekker::from_exact_mult(a.hi, b.hi);
        let t3 = a.hi * b.lo + a.lo * b.hi;
        let t4 = t.lo + t3;
        let s = Dekker::from_full_exact_add(c.hi, t.hi);
        let t7 = (s.lo + t4) + c.lo;
        Dekker::from_exact_add(s.hi, t7)
    }

    /// Div22, relative error about 2^-104.
    #[inline]
    pub(crate) fn div(a: Dekker, b: Dekker) -> Dekker {
        let c_hi = a.hi / b.hi;
        let u = Dekker::from_exact_mult(c_hi, b.hi);
        let c_lo = ((((a.hi - u.hi) - u.lo) + a.lo) - c_hi * b.lo) / b.hi;
        let z_hi = c_hi + c_lo;
        let z_lo = (c_hi - z_hi) + c_lo;
        Dekker::new(z_lo, z_hi)
    }

    /// Double-double square, `Mul22(a, a)` with the cross term doubled once.
    #[inline]
    pub(crate) fn square(a: Dekker) -> Dekker {
        let m = Dekker::from_exact_mult(a.hi, a.hi);
        let ml = m.lo + (a.hi + a.hi) * a.lo;
        Dekker::from_exact_add(m.hi, ml)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use rand::Rng;

    /// Exact integer image of `v` in units of `2^base`.
    pub(crate) fn exact(v: Double, base: i32) -> i128 {
        if v.is_zero() {
            return 0;
        }
        let (sig, lsb) = v.decompose();
        assert!(lsb >= base, "base {base} too coarse for {v:?}");
        let mag = (sig as i128) << (lsb - base);
        if v.is_sign_negative() { -mag } else { mag }
    }

    fn lsb(v: Double) -> i32 {
        if v.is_zero() {
            i32::MAX
        } else {
            v.decompose().1
        }
    }

    fn random_in(rng: &mut impl Rng, lo: i32, hi: i32) -> Double {
        let e = rng.random_range(lo..hi);
        let v = rng.random_range(1.0..2.0) * 2f64.powi(e);
        Double::from_f64(if rng.random() { v } else { -v })
    }

    #[test]
    fn test_add12_exact() {
        let mut rng = rand::rng();
        for _ in 0..5000 {
            let a = random_in(&mut rng, -20, 20);
            let b = random_in(&mut rng, -20, 20);
            let (a, b) = if a.abs() >= b.abs() { (a, b) } else { (b, a) };
            let r = Dekker::from_exact_add(a, b);
            let base = lsb(a).min(lsb(b)).min(lsb(r.hi)).min(lsb(r.lo));
            assert_eq!(exact(r.hi, base) + exact(r.lo, base), exact(a, base) + exact(b, base));
            let c = Dekker::from_full_exact_add(b, a);
            assert_eq!(exact(c.hi, base) + exact(c.lo, base), exact(a, base) + exact(b, base));
        }
    }

    #[test]
    fn test_mul12_exact() {
        let mut rng = rand::rng();
        for _ in 0..5000 {
            let a = random_in(&mut rng, -300, 300);
            let b = random_in(&mut rng, -300, 300);
            let r = Dekker::from_exact_mult(a, b);
            let base = lsb(a) + lsb(b);
            let (sa, _) = a.decompose();
            let (sb, _) = b.decompose();
            let mut expected = (sa as i128) * (sb as i128);
            if a.is_sign_negative() != b.is_sign_negative() {
                expected = -expected;
            }
            assert_eq!(exact(r.hi, base) + exact(r.lo, base), expected);
        }
    }

    #[test]
    fn test_dd_operations() {
        // (1 + 2^-30) * (1 - 2^-30) = 1 - 2^-60
        let x = Dekker::from_double(Double::ONE + Double::pow2(-30));
        let y = Dekker::from_double(Double::ONE - Double::pow2(-30));
        let p = Dekker::mult(x, y);
        assert_eq!(p.hi, Double::ONE);
        assert_eq!(p.lo, -Double::pow2(-60));
        let a = Dekker::new(Double::pow2(-60), Double::ONE);
        let b = Dekker::new(-Double::pow2(-60), Double::ONE);
        let s = Dekker::add(a, b);
        assert_eq!(s.hi.to_f64(), 2.0);
        assert!(s.lo.is_zero());
        // 1/3 in double-double
        let third = Dekker::div(
            Dekker::from_double(Double::ONE),
            Dekker::from_double(Double::from_f64(3.0)),
        );
        assert_eq!(third.hi.to_bits(), 0x3fd5555555555555);
        assert_eq!(third.lo.to_bits(), 0x3c75555555555555);
        let back = Dekker::mult_d(Double::from_f64(3.0), third);
        assert_eq!(back.hi, Double::ONE);
        let sq = Dekker::square(a);
        assert_eq!(sq.hi, Double::ONE);
        assert_eq!(sq.lo, Double::pow2(-59));
        let fma = Dekker::mul_add(
            Dekker::from_double(Double::NEG_ONE),
            a,
            Dekker::from_double(Double::ONE),
        );
        assert_eq!(fma.hi, Double::pow2(-60));
        let c = Dekker::add_cond(Dekker::from_double(Double::pow2(-70)), a);
        assert_eq!(c.hi, Double::ONE);
        assert_eq!(c.lo.to_f64(), 2f64.powi(-60) + 2f64.powi(-70));
        let d = Dekker::add_d(a, Double::NEG_ONE);
        assert_eq!(d.hi, Double::pow2(-60));
    }
}
