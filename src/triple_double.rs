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
use std::ops::Neg;

/// Triple-double value `hi + mid + lo`, about 159 bits of precision.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct TripleDouble {
    pub(crate) hi: Double,
    pub(crate) mid: Double,
    pub(crate) lo: Double,
}

#[inline]
fn add12(a: Double, b: Double) -> Dekker {
    Dekker::from_exact_add(a, b)
}

#[inline]
fn add12_cond(a: Double, b: Double) -> Dekker {
    Dekker::from_full_exact_add(a, b)
}

#[inline]
fn mul12(a: Double, b: Double) -> Dekker {
    Dekker::from_exact_mult(a, b)
}

impl TripleDouble {
    #[inline]
    pub(crate) const fn new(lo: Double, mid: Double, hi: Double) -> Self {
        TripleDouble { hi, mid, lo }
    }

    #[inline]
    pub(crate) const fn from_bit_pair(p0: (u64, u64, u64)) -> TripleDouble {
        TripleDouble {
            hi: Double::from_bits(p0.2),
            mid: Double::from_bits(p0.1),
            lo: Double::from_bits(p0.0),
        }
    }

    #[inline]
    pub(crate) const fn from_double(v: Double) -> TripleDouble {
        TripleDouble::new(Double::ZERO, Double::ZERO, v)
    }

    #[inline]
    pub(crate) const fn from_dd(v: Dekker) -> TripleDouble {
        TripleDouble::new(Double::ZERO, v.lo, v.hi)
    }

    /// Renormalize3: restores non-overlapping decreasing limbs.
    #[inline]
    pub(crate) fn renormalize(self) -> Self {
        let Dekker { hi: t1h, lo: t1l } = add12(self.mid, self.lo);
        let Dekker { hi: rh, lo: t2l } = add12(self.hi, t1h);
        let Dekker { hi: rm, lo: rl } = add12(t2l, t1l);
        TripleDouble::new(rl, rm, rh)
    }

    /// Collapses into a double-double.
    #[inline]
    pub(crate) fn to_dd(self) -> Dekker {
        let Dekker { hi: t1, lo: t2 } = add12(self.hi, self.mid);
        let t3 = t2 + self.lo;
        Dekker::new(t3, t1)
    }

    /// Add33, requires `|a.hi| >= |b.hi|`.
    #[inline]
    pub(crate) fn add(a: TripleDouble, b: TripleDouble) -> TripleDouble {
        let Dekker { hi: rh, lo: t1 } = add12(a.hi, b.hi);
        let Dekker { hi: t2, lo: t3 } = add12_cond(a.mid, b.mid);
        let t6 = a.lo + b.lo;
        let Dekker { hi: t7, lo: t4 } = add12_cond(t1, t2);
        let t5 = t3 + t4;
        let t8 = t5 + t6;
        let Dekker { hi: rm, lo: rl } = add12_cond(t7, t8);
        TripleDouble::new(rl, rm, rh)
    }

    /// Add33 with operands ordered on the fly.
    #[inline]
    pub(crate) fn add_cond(a: TripleDouble, b: TripleDouble) -> TripleDouble {
        if a.hi.abs() >= b.hi.abs() {
            TripleDouble::add(a, b)
        } else {
            TripleDouble::add(b, a)
        }
    }

    /// Add233, requires `|a.hi| >= |b.hi|`.
    // Completes the mixed-width family, no evaluation path needs it yet
    #[allow(dead_code)]
    #[inline]
    pub(crate) fn add_dd(a: Dekker, b: TripleDouble) -> TripleDouble {
        let Dekker { hi: rh, lo: t1 } = add12(a.hi, b.hi);
        let Dekker { hi: t2, lo: t3 } = add12_cond(a.lo, b.mid);
        let Dekker { hi: t4, lo: t5 } = add12_cond(t1, t2);
        let t6 = t3 + b.lo;
        let t7 = t6 + t5;
        let Dekker { hi: rm, lo: rl } = add12(t4, t7);
        TripleDouble::new(rl, rm, rh)
    }

    /// Add133, requires `|a| >= |b.hi|`.
    #[inline]
    pub(crate) fn add_f64(a: Double, b: TripleDouble) -> TripleDouble {
        let Dekker { hi: rh, lo: t1 } = add12(a, b.hi);
        let Dekker { hi: t2, lo: t3 } = add12_cond(t1, b.mid);
        let t4 = t3 + b.lo;
        let Dekker { hi: rm, lo: rl } = add12_cond(t2, t4);
        TripleDouble::new(rl, rm, rh)
    }

    /// Add123, requires `|a| >= |b.hi|`.
    #[inline]
    pub(crate) fn from_f64_dd_add(a: Double, b: Dekker) -> TripleDouble {
        let Dekker { hi: rh, lo: t1 } = add12(a, b.hi);
        let Dekker { hi: rm, lo: rl } = add12_cond(t1, b.lo);
        TripleDouble::new(rl, rm, rh)
    }

    /// Add23, requires `|a.hi| >= |b.hi|`.
    #[inline]
    pub(crate) fn from_dd_add(a: Dekker, b: Dekker) -> TripleDouble {
        let Dekker { hi: rh, lo: t1 } = add12(a.hi, b.hi);
        let Dekker { hi: t2, lo: t3 } = add12_cond(a.lo, b.lo);
        let Dekker { hi: t4, lo: t5 } = add12_cond(t1, t2);
        let t6 = t3 + t5;
        let Dekker { hi: rm, lo: rl } = add12_cond(t4, t6);
        TripleDouble::new(rl, rm, rh)
    }

    /// Mul23: exact-ish product of two double-doubles.
    #[inline]
    pub(crate) fn from_quick_mult_dd(a: Dekker, b: Dekker) -> TripleDouble {
        let Dekker { hi: rh, lo: t1 } = mul12(a.hi, b.hi);
        let r0 = mul12(a.hi, b.lo);
        let r1 = mul12(a.lo, b.hi);
        let t6 = a.lo * b.lo;
        let q0 = Dekker::add_cond(r0, r1);
        let q1 = add12_cond(t1, t6);
        let Dekker { hi: rm, lo: rl } = Dekker::add_cond(q0, q1);
        TripleDouble::new(rl, rm, rh)
    }

    /// Mul123: double times double-double.
    #[inline]
    pub(crate) fn from_quick_mult_dd_f64(a: Dekker, b: Double) -> TripleDouble {
        let Dekker { hi: rh, lo: t1 } = mul12(b, a.hi);
        let Dekker { hi: t2, lo: t3 } = mul12(b, a.lo);
        let Dekker { hi: rm, lo: rl } = Dekker::add_cond(Dekker::new(Double::ZERO, t1), Dekker::new(t3, t2));
        TripleDouble::new(rl, rm, rh)
    }

    /// Mul133: triple-double times double.
    #[inline]
    pub(crate) fn quick_mult_f64(a: TripleDouble, b: Double) -> TripleDouble {
        let Dekker { hi: rh, lo: t2 } = mul12(b, a.hi);
        let Dekker { hi: t3, lo: t4 } = mul12(b, a.mid);
        let t5 = b * a.lo;
        let Dekker { hi: t9, lo: t7 } = add12_cond(t2, t3);
        let t8 = t4 + t5;
        let t10 = t7 + t8;
        let Dekker { hi: rm, lo: rl } = add12_cond(t9, t10);
        TripleDouble::new(rl, rm, rh)
    }

    /// Mul233: triple-double times double-double.
    #[inline]
    pub(crate) fn quick_mult_dd(b: TripleDouble, a: Dekker) -> TripleDouble {
        let Dekker { hi: rh, lo: t1 } = mul12(a.hi, b.hi);
        let Dekker { hi: t2, lo: t3 } = mul12(a.hi, b.mid);
        let Dekker { hi: t4, lo: t5 } = mul12(a.hi, b.lo);
        let Dekker { hi: t6, lo: t7 } = mul12(a.lo, b.hi);
        let Dekker { hi: t8, lo: t9 } = mul12(a.lo, b.mid);
        let t10 = a.lo * b.lo;
        let q0 = Dekker::add_cond(Dekker::new(t3, t2), Dekker::new(t5, t4));
        let q1 = Dekker::add_cond(Dekker::new(t7, t6), Dekker::new(t9, t8));
        let q2 = Dekker::add_cond(q0, q1);
        let q3 = add12_cond(t1, t10);
        let Dekker { hi: rm, lo: rl } = Dekker::add_cond(q3, q2);
        TripleDouble::new(rl, rm, rh)
    }

    /// Mul33: full triple-double product.
    #[inline]
    pub(crate) fn quick_mult(a: TripleDouble, b: TripleDouble) -> TripleDouble {
        let Dekker { hi: rh, lo: t1 } = mul12(a.hi, b.hi);
        let Dekker { hi: t2, lo: t3 } = mul12(a.hi, b.mid);
        let Dekker { hi: t4, lo: t5 } = mul12(a.mid, b.hi);
        let Dekker { hi: t6, lo: t7 } = mul12(a.mid, b.mid);
        let t8 = a.hi * b.lo;
        let t9 = a.lo * b.hi;
        let t10 = a.mid * b.lo;
        let t11 = a.lo * b.mid;
        let t12 = t8 + t9;
        let t13 = t10 + t11;
        let Dekker { hi: t14, lo: t15 } = add12_cond(t1, t6);
        let t16 = t7 + t15;
        let t17 = t12 + t13;
        let t18 = t16 + t17;
        let t19 = add12_cond(t14, t18);
        let t21 = Dekker::add_cond(Dekker::new(t3, t2), Dekker::new(t5, t4));
        let Dekker { hi: rm, lo: rl } = Dekker::add_cond(t21, t19);
        TripleDouble::new(rl, rm, rh)
    }

    /// Triple-double square.
    #[inline]
    pub(crate) fn quick_square(a: TripleDouble) -> TripleDouble {
        TripleDouble::quick_mult(a, a)
    }

    /// Recpr33: reciprocal by two Newton rounds, first in double-double then
    /// in triple-double.
    pub(crate) fn recip(self) -> Self {
        let r1 = Double::ONE / self.hi;
        let Dekker { hi: t1, lo: t2 } = mul12(r1, self.hi);
        let t3 = t1 - Double::ONE;
        let Dekker { hi: t4, lo: t5 } = add12_cond(t3, t2);
        let Dekker { hi: t6, lo: t7 } = mul12(r1, self.mid);
        let Dekker { hi: t8, lo: t9 } = add12_cond(t6, t7);
        let e = Dekker::add_cond(Dekker::new(t5, t4), Dekker::new(t9, t8));
        let c = Dekker::mult_d(-r1, e);
        let r2 = Dekker::add(Dekker::from_double(r1), c);
        let u = TripleDouble::quick_mult_dd(self, r2);
        let e2 = Dekker::add_cond(Dekker::from_double(u.hi - Double::ONE), Dekker::new(u.lo, u.mid));
        let c2 = Dekker::mult(r2, e2);
        TripleDouble::from_dd_add(r2, c2.neg())
    }
}

impl Neg for TripleDouble {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        TripleDouble::new(-self.lo, -self.mid, -self.hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dekker::tests::exact;

    fn td_exact(v: TripleDouble, base: i32) -> i128 {
        exact(v.hi, base) + exact(v.mid, base) + exact(v.lo, base)
    }

    #[test]
    fn test_renormalize() {
        let v = TripleDouble::new(Double::pow2(-40), Double::ONE, Double::from_f64(3.0)).renormalize();
        assert_eq!(v.hi.to_f64(), 4.0 + 2f64.powi(-40));
        assert!(v.mid.is_zero());
        assert!(v.lo.is_zero());
        let w = TripleDouble::new(Double::pow2(-70), Double::pow2(-20), Double::ONE).renormalize();
        assert_eq!(w.hi.to_f64(), 1.0 + 2f64.powi(-20));
        assert_eq!(w.mid, Double::pow2(-70));
    }

    #[test]
    fn test_exact_products() {
        // (1 + 2^-40)(1 - 2^-40) = 1 - 2^-80
        let a = Dekker::new(Double::pow2(-40), Double::ONE);
        let b = Dekker::new(-Double::pow2(-40), Double::ONE);
        let p = TripleDouble::from_quick_mult_dd(a, b).renormalize();
        assert_eq!(td_exact(p, -120), (1i128 << 120) - (1i128 << 40));
        let t = TripleDouble::new(Double::pow2(-110), Double::pow2(-55), Double::ONE);
        let q = TripleDouble::quick_mult_f64(t, Double::from_f64(3.0)).renormalize();
        assert_eq!(td_exact(q, -110), 3 * ((1i128 << 110) + (1i128 << 55) + 1));
        let s = TripleDouble::quick_mult_dd(t, Dekker::from_double(Double::from_f64(5.0))).renormalize();
        assert_eq!(td_exact(s, -110), 5 * ((1i128 << 110) + (1i128 << 55) + 1));
        let r = TripleDouble::quick_mult(t, TripleDouble::from_double(Double::from_f64(0.5))).renormalize();
        assert_eq!(td_exact(r, -111), (1i128 << 110) + (1i128 << 55) + 1);
    }

    #[test]
    fn test_additions() {
        let t = TripleDouble::new(Double::pow2(-110), Double::pow2(-55), Double::ONE);
        let s = TripleDouble::add(t, t).renormalize();
        assert_eq!(td_exact(s, -110), 2 * ((1i128 << 110) + (1i128 << 55) + 1));
        let d = TripleDouble::add_f64(Double::from_f64(2.0), t).renormalize();
        assert_eq!(td_exact(d, -110), (3i128 << 110) + (1i128 << 55) + 1);
        let e = TripleDouble::add_dd(Dekker::new(Double::pow2(-60), Double::from_f64(-2.0)), t).renormalize();
        assert_eq!(
            td_exact(e, -110),
            -(1i128 << 110) + (1i128 << 55) + (1i128 << 50) + 1
        );
        let f = TripleDouble::from_dd_add(Dekker::new(Double::pow2(-60), Double::ONE), Dekker::new(Double::pow2(-70), Double::pow2(-30)));
        assert_eq!(td_exact(f, -70), (1i128 << 70) + (1i128 << 40) + (1i128 << 10) + 1);
        let g = TripleDouble::from_f64_dd_add(Double::ONE, Dekker::new(Double::pow2(-100), Double::pow2(-50)));
        assert_eq!(td_exact(g, -100), (1i128 << 100) + (1i128 << 50) + 1);
    }

    #[test]
    fn test_reciprocal() {
        // 1/3 to triple-double precision
        let three = TripleDouble::from_double(Double::from_f64(3.0));
        let r = three.recip();
        let back = TripleDouble::quick_mult(r, three).renormalize();
        assert_eq!(back.hi, Double::ONE);
        assert!(back.mid.abs() < Double::pow2(-130));
        let x = TripleDouble::new(Double::pow2(-120), Double::pow2(-60), Double::from_f64(1.75));
        let y = TripleDouble::quick_mult(x.recip(), x).renormalize();
        let err = TripleDouble::add_f64(Double::NEG_ONE, y).renormalize();
        assert!(err.hi.abs() < Double::pow2(-130));
    }
}
