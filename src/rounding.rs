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
use crate::err::SoftFloatError;
use crate::triple_double::TripleDouble;
use std::cmp::Ordering;
use std::fmt::Display;
use std::str::FromStr;

/// IEEE-754 rounding direction attribute.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum RoundingMode {
    /// Round to nearest, ties to even
    #[default]
    Nearest,
    /// Round toward +Inf
    Upward,
    /// Round toward -Inf
    Downward,
    /// Round toward zero
    TowardZero,
}

impl RoundingMode {
    pub const ALL: [RoundingMode; 4] = [
        RoundingMode::Nearest,
        RoundingMode::Upward,
        RoundingMode::Downward,
        RoundingMode::TowardZero,
    ];

    /// Direction to use on `|x|` when `f(-x) = -f(x)`.
    #[inline]
    pub(crate) const fn mirrored(self, negative: bool) -> RoundingMode {
        if !negative {
            return self;
        }
        match self {
            RoundingMode::Upward => RoundingMode::Downward,
            RoundingMode::Downward => RoundingMode::Upward,
            other => other,
        }
    }

    /// Whether a result of given sign is rounded away from zero on inexact.
    #[inline]
    pub(crate) const fn rounds_away(self, negative: bool) -> bool {
        match self {
            RoundingMode::Nearest | RoundingMode::TowardZero => false,
            RoundingMode::Upward => !negative,
            RoundingMode::Downward => negative,
        }
    }
}

impl TryFrom<u8> for RoundingMode {
    type Error = SoftFloatError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(RoundingMode::Nearest),
            1 => Ok(RoundingMode::Upward),
            2 => Ok(RoundingMode::Downward),
            3 => Ok(RoundingMode::TowardZero),
            _ => Err(SoftFloatError::InvalidRoundingMode),
        }
    }
}

impl FromStr for RoundingMode {
    type Err = SoftFloatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rn" | "nearest" => Ok(RoundingMode::Nearest),
            "ru" | "up" | "upward" => Ok(RoundingMode::Upward),
            "rd" | "down" | "downward" => Ok(RoundingMode::Downward),
            "rz" | "zero" | "towardzero" => Ok(RoundingMode::TowardZero),
            _ => Err(SoftFloatError::InvalidRoundingMode),
        }
    }
}

impl Display for RoundingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            RoundingMode::Nearest => "rn",
            RoundingMode::Upward => "ru",
            RoundingMode::Downward => "rd",
            RoundingMode::TowardZero => "rz",
        })
    }
}

/// ReturnRoundToNearest3, expects a renormalized triple-double.
pub(crate) fn round_nearest3(t: TripleDouble) -> Double {
    let TripleDouble { hi: h, mid: m, lo: l } = t;
    // neighbours towards and away from zero
    let t1 = h.raw_dec();
    let t4 = h.raw_inc();
    let t3 = (h - t1) * -0.5;
    let t6 = (t4 - h) * 0.5;
    // exact midpoints are settled by the IEEE addition itself
    if l.is_zero() || (m != t3 && m != t6) {
        return h + m;
    }
    if (m * l).is_sign_positive() {
        if (h * l).is_sign_positive() {
            return t4;
        }
        return t1;
    }
    h
}

/// ReturnRoundUpwards3, expects a renormalized triple-double.
pub(crate) fn round_upwards3(t: TripleDouble) -> Double {
    let Dekker { hi: t1, lo: t2 } = Dekker::from_exact_add(t.hi, t.mid);
    let t3 = t2 + t.lo;
    if t3 > Double::ZERO {
        return t1.next_up();
    }
    t1
}

/// ReturnRoundDownwards3, expects a renormalized triple-double.
pub(crate) fn round_downwards3(t: TripleDouble) -> Double {
    let Dekker { hi: t1, lo: t2 } = Dekker::from_exact_add(t.hi, t.mid);
    let t3 = t2 + t.lo;
    if t3 < Double::ZERO {
        return t1.next_down();
    }
    t1
}

/// ReturnRoundTowardsZero3, expects a renormalized triple-double.
pub(crate) fn round_towards_zero3(t: TripleDouble) -> Double {
    let Dekker { hi: t1, lo: t2 } = Dekker::from_exact_add(t.hi, t.mid);
    let t3 = t2 + t.lo;
    if t1 > Double::ZERO && t3 < Double::ZERO {
        return t1.next_down();
    }
    if t1 < Double::ZERO && t3 > Double::ZERO {
        return t1.next_up();
    }
    t1
}

/// Renormalizes and rounds a triple-double in requested direction.
pub(crate) fn round_td(mode: RoundingMode, t: TripleDouble) -> Double {
    let t = t.renormalize();
    match mode {
        RoundingMode::Nearest => round_nearest3(t),
        RoundingMode::Upward => round_upwards3(t),
        RoundingMode::Downward => round_downwards3(t),
        RoundingMode::TowardZero => round_towards_zero3(t),
    }
}

/// Rounds a triple-double carrying a relative error below `eps`, unless
/// the error interval may contain a rounding boundary.
pub(crate) fn try_round_td(mode: RoundingMode, t: TripleDouble, eps: Double) -> Option<Double> {
    let t = t.renormalize();
    let TripleDouble { hi: h, mid: m, lo: l } = t;
    // a vanishing tail leaves the direction of the error unknown
    if m.is_zero() && l.is_zero() {
        return (mode == RoundingMode::Nearest).then_some(h);
    }
    let err = eps.ldexp(h.exponent() + 2);
    let distance = match mode {
        // distance to the midpoint on the side of the tail
        RoundingMode::Nearest => {
            let half = if m.is_sign_negative() == h.is_sign_negative() {
                (h.raw_inc() - h) * 0.5
            } else {
                (h.raw_dec() - h) * 0.5
            };
            (m - half) + l
        }
        _ => m,
    };
    if distance.abs() > err {
        Some(round_td(mode, t))
    } else {
        None
    }
}

/// Rounds a value known to lie strictly between `x` and its neighbour,
/// closer to `x` than half an ulp, on the side given by `above`.
pub(crate) fn round_perturbed(x: Double, above: bool, mode: RoundingMode) -> Double {
    match mode {
        RoundingMode::Nearest => x,
        RoundingMode::Upward => {
            if above {
                x.next_up()
            } else {
                x
            }
        }
        RoundingMode::Downward => {
            if above {
                x
            } else {
                x.next_down()
            }
        }
        RoundingMode::TowardZero => {
            if x.is_sign_positive() == above {
                x
            } else if above {
                x.next_up()
            } else {
                x.next_down()
            }
        }
    }
}

/// Round to nearest quick test: `yh` is the correctly rounded value of
/// `yh + yl` perturbed by at most `eps` relative error when adding the
/// scaled error term does not change `yh`.
#[inline]
pub(crate) fn test_rn(y: Dekker, round_cst: Double) -> Option<Double> {
    if y.hi == y.hi + y.lo * round_cst {
        return Some(y.hi);
    }
    None
}

/// Directed quick test: once `|yl|` exceeds the error bound the direction of
/// the true value with respect to `yh` is known.
#[inline]
pub(crate) fn test_directed(mode: RoundingMode, y: Dekker, eps: Double) -> Option<Double> {
    let Dekker { hi: yh, lo: yl } = y;
    // 2^(E(yh) + 1)
    let u53 = Double::from_bits((yh.to_bits() & 0x7ff0_0000_0000_0000) + 0x0010_0000_0000_0000);
    if yl.abs() <= eps * u53 || yl.is_zero() {
        return None;
    }
    let up = yl.is_sign_positive();
    Some(match mode {
        RoundingMode::Nearest => return None,
        RoundingMode::Upward => {
            if up {
                yh.next_up()
            } else {
                yh
            }
        }
        RoundingMode::Downward => {
            if up {
                yh
            } else {
                yh.next_down()
            }
        }
        RoundingMode::TowardZero => {
            if yh.is_sign_positive() {
                if up { yh } else { yh.next_down() }
            } else if up {
                yh.next_up()
            } else {
                yh
            }
        }
    })
}

/// Accuracy bound of a quick phase, kept as the raw `eps` together with the
/// round to nearest constant derived from it.
#[derive(Copy, Clone, Debug)]
pub(crate) struct QuickBound {
    pub(crate) eps: Double,
    pub(crate) round_cst: Double,
}

impl QuickBound {
    #[inline]
    pub(crate) const fn from_bits(eps: u64, round_cst: u64) -> QuickBound {
        QuickBound {
            eps: Double::from_bits(eps),
            round_cst: Double::from_bits(round_cst),
        }
    }
}

/// Quick phase acceptance in any direction.
#[inline]
pub(crate) fn quick_round(mode: RoundingMode, y: Dekker, bound: QuickBound) -> Option<Double> {
    match mode {
        RoundingMode::Nearest => test_rn(y, bound.round_cst),
        _ => test_directed(mode, y, bound.eps),
    }
}

#[inline]
fn sign_of(v: Double) -> i32 {
    if v.is_zero() {
        0
    } else if v.is_sign_negative() {
        -1
    } else {
        1
    }
}

/// Correctly rounds `(h + m + l) * 2^k` where the product may land in the
/// subnormal range. Rounding happens once, at the final granularity.
pub(crate) fn round_scaled(mode: RoundingMode, t: TripleDouble, k: i32) -> Double {
    let t = t.renormalize();
    let h = t.hi;
    if h.is_zero() || !h.is_finite() {
        return h.ldexp_mode(k, mode);
    }
    if h.exponent() + k >= -1021 {
        return round_td(mode, t).ldexp_mode(k, mode);
    }
    let negative = h.is_sign_negative();
    // tail sign relative to |h|
    let mut tail = if !t.mid.is_zero() {
        sign_of(t.mid)
    } else {
        sign_of(t.lo)
    };
    if negative {
        tail = -tail;
    }
    // |h| = n * q + rem * 2^lsb, with the result quantum q = 2^(-1074 - k)
    let q_exp = -1074 - k;
    let (sig, lsb) = h.decompose();
    let shift = q_exp - lsb;
    let (n, rem, half) = if shift <= 0 {
        (sig << (-shift) as u32, 0u64, 1u64)
    } else if shift > 60 {
        (0u64, sig, 1u64 << 60)
    } else {
        let s = shift as u32;
        (sig >> s, sig & ((1u64 << s) - 1), 1u64 << (s - 1))
    };
    let below_n = rem == 0 && tail < 0;
    let exact = rem == 0 && tail == 0;
    let floor = if below_n { n - 1 } else { n };
    let ceil = if exact || below_n { n } else { n + 1 };
    let magnitude = match mode {
        RoundingMode::Nearest => {
            if below_n {
                n
            } else {
                let cmp = if shift <= 0 {
                    Ordering::Less
                } else {
                    rem.cmp(&half).then(tail.cmp(&0))
                };
                match cmp {
                    Ordering::Less => n,
                    Ordering::Greater => n + 1,
                    Ordering::Equal => n + (n & 1),
                }
            }
        }
        _ => {
            if mode.rounds_away(negative) {
                ceil
            } else {
                floor
            }
        }
    };
    let r = Double::from_u64(magnitude).ldexp(-1074);
    if negative { -r } else { r }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn td(hi: f64, mid: f64, lo: f64) -> TripleDouble {
        TripleDouble::new(Double::from_f64(lo), Double::from_f64(mid), Double::from_f64(hi))
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!(RoundingMode::try_from(2u8), Ok(RoundingMode::Downward));
        assert_eq!(
            RoundingMode::try_from(9u8),
            Err(SoftFloatError::InvalidRoundingMode)
        );
        assert_eq!("RZ".parse::<RoundingMode>(), Ok(RoundingMode::TowardZero));
        assert_eq!("upward".parse::<RoundingMode>(), Ok(RoundingMode::Upward));
        assert!("sideways".parse::<RoundingMode>().is_err());
        for mode in RoundingMode::ALL {
            assert_eq!(mode.to_string().parse::<RoundingMode>(), Ok(mode));
        }
    }

    #[test]
    fn test_round_nearest3_ties() {
        let ulp = 2f64.powi(-52);
        // 1 + ulp/2 + tiny goes up, 1 + ulp/2 - tiny stays
        assert_eq!(round_td(RoundingMode::Nearest, td(1.0, ulp / 2.0, 1e-40)).to_f64(), 1.0 + ulp);
        assert_eq!(round_td(RoundingMode::Nearest, td(1.0, ulp / 2.0, -1e-40)).to_f64(), 1.0);
        // exact midpoint ties to even
        assert_eq!(round_td(RoundingMode::Nearest, td(1.0, ulp / 2.0, 0.0)).to_f64(), 1.0);
        assert_eq!(
            round_td(RoundingMode::Nearest, td(1.0 + ulp, ulp / 2.0, 0.0)).to_f64(),
            1.0 + 2.0 * ulp
        );
        // below a power of two the half ulp is halved
        assert_eq!(round_td(RoundingMode::Nearest, td(1.0, -ulp / 4.0, -1e-40)).to_f64(), 1.0 - ulp / 2.0);
        assert_eq!(round_td(RoundingMode::Nearest, td(1.0, -ulp / 4.0, 1e-40)).to_f64(), 1.0);
        assert_eq!(round_td(RoundingMode::Nearest, td(-1.0, -ulp / 2.0, -1e-40)).to_f64(), -1.0 - ulp);
        assert_eq!(round_td(RoundingMode::Nearest, td(-1.0, -ulp / 2.0, 1e-40)).to_f64(), -1.0);
    }

    #[test]
    fn test_round_directed3() {
        let t = td(1.0, 1e-20, 0.0);
        assert_eq!(round_td(RoundingMode::Upward, t).to_f64(), 1.0 + 2f64.powi(-52));
        assert_eq!(round_td(RoundingMode::Downward, t).to_f64(), 1.0);
        assert_eq!(round_td(RoundingMode::TowardZero, t).to_f64(), 1.0);
        let n = td(-1.0, 1e-20, 1e-40);
        assert_eq!(round_td(RoundingMode::Upward, n).to_f64(), -1.0 + 2f64.powi(-53));
        assert_eq!(round_td(RoundingMode::Downward, n).to_f64(), -1.0);
        assert_eq!(round_td(RoundingMode::TowardZero, n).to_f64(), -1.0 + 2f64.powi(-53));
        let e = td(1.5, 0.0, 0.0);
        for mode in RoundingMode::ALL {
            assert_eq!(round_td(mode, e).to_f64(), 1.5);
        }
        // residual carried by the lowest limb only
        let l = td(2.0, 0.0, -1e-60);
        assert_eq!(round_td(RoundingMode::Downward, l).to_f64(), 2.0 - 2f64.powi(-52));
        assert_eq!(round_td(RoundingMode::Upward, l).to_f64(), 2.0);
    }

    #[test]
    fn test_quick_tests() {
        let eps = Double::from_f64(2f64.powi(-62));
        let y = Dekker::new(Double::from_f64(2f64.powi(-55)), Double::ONE);
        assert_eq!(test_directed(RoundingMode::Upward, y, eps), Some(Double::ONE.next_up()));
        assert_eq!(test_directed(RoundingMode::Downward, y, eps), Some(Double::ONE));
        assert_eq!(test_directed(RoundingMode::TowardZero, y, eps), Some(Double::ONE));
        let tiny = Dekker::new(Double::from_f64(2f64.powi(-70)), Double::ONE);
        assert_eq!(test_directed(RoundingMode::Upward, tiny, eps), None);
        let neg = Dekker::new(Double::from_f64(2f64.powi(-55)), Double::NEG_ONE);
        assert_eq!(test_directed(RoundingMode::TowardZero, neg, eps), Some(Double::NEG_ONE.next_up()));
        let cst = Double::from_f64(1.01);
        assert_eq!(test_rn(y, cst), Some(Double::ONE));
        let half = Dekker::new(Double::from_f64(2f64.powi(-53)), Double::ONE);
        assert_eq!(test_rn(half, cst), None);
    }

    #[test]
    fn test_round_scaled_subnormal() {
        // 1.5 * 2^-1074 ties to 2 * 2^-1074
        let t = td(1.5, 0.0, 0.0);
        assert_eq!(round_scaled(RoundingMode::Nearest, t, -1074).to_bits(), 2);
        assert_eq!(round_scaled(RoundingMode::Upward, t, -1074).to_bits(), 2);
        assert_eq!(round_scaled(RoundingMode::Downward, t, -1074).to_bits(), 1);
        assert_eq!(round_scaled(RoundingMode::TowardZero, t, -1074).to_bits(), 1);
        // 2.5 * 2^-1074 ties to 2, a tail breaks the tie
        assert_eq!(round_scaled(RoundingMode::Nearest, td(2.5, 0.0, 0.0), -1074).to_bits(), 2);
        assert_eq!(round_scaled(RoundingMode::Nearest, td(2.5, 1e-30, 0.0), -1074).to_bits(), 3);
        assert_eq!(round_scaled(RoundingMode::Nearest, td(2.5, -1e-30, 0.0), -1074).to_bits(), 2);
        // exactly representable subnormal with a negative tail
        let below = td(3.0, -1e-30, 0.0);
        assert_eq!(round_scaled(RoundingMode::Nearest, below, -1074).to_bits(), 3);
        assert_eq!(round_scaled(RoundingMode::Downward, below, -1074).to_bits(), 2);
        assert_eq!(round_scaled(RoundingMode::Upward, below, -1074).to_bits(), 3);
        // negative values
        let neg = td(-1.25, 0.0, 0.0);
        assert_eq!(round_scaled(RoundingMode::Nearest, neg, -1074).to_bits(), 0x8000_0000_0000_0001);
        assert_eq!(round_scaled(RoundingMode::Downward, neg, -1074).to_bits(), 0x8000_0000_0000_0002);
        assert_eq!(round_scaled(RoundingMode::Upward, neg, -1074).to_bits(), 0x8000_0000_0000_0001);
        // far below the smallest subnormal
        let small = td(1.0, 0.0, 0.0);
        assert_eq!(round_scaled(RoundingMode::Nearest, small, -1200).to_bits(), 0);
        assert_eq!(round_scaled(RoundingMode::Upward, small, -1200).to_bits(), 1);
        assert_eq!(round_scaled(RoundingMode::Downward, -small, -1200).to_bits(), 0x8000_0000_0000_0001);
        assert_eq!(round_scaled(RoundingMode::TowardZero, -small, -1200).to_bits(), 0x8000_0000_0000_0000);
        // normal range and overflow
        assert_eq!(round_scaled(RoundingMode::Nearest, td(1.5, 0.0, 0.0), 10).to_f64(), 1536.0);
        assert_eq!(round_scaled(RoundingMode::Nearest, small, 1024), Double::INFINITY);
        assert_eq!(round_scaled(RoundingMode::TowardZero, small, 1024), Double::MAX);
    }

    #[test]
    fn test_try_round_td() {
        let eps = Double::from_f64(2f64.powi(-120));
        let ulp = 2f64.powi(-52);
        let clear = td(1.0, ulp / 8.0, 0.0);
        assert_eq!(try_round_td(RoundingMode::Nearest, clear, eps), Some(Double::ONE));
        assert_eq!(
            try_round_td(RoundingMode::Upward, clear, eps),
            Some(Double::ONE.next_up())
        );
        // a few units of 2^-120 around the midpoint cannot be decided
        let close = td(1.0, ulp / 2.0, 2f64.powi(-121));
        assert_eq!(try_round_td(RoundingMode::Nearest, close, eps), None);
        let near_double = td(1.0, 2f64.powi(-119), 0.0);
        assert_eq!(try_round_td(RoundingMode::Downward, near_double, eps), None);
        assert_eq!(
            try_round_td(RoundingMode::Nearest, near_double, eps),
            Some(Double::ONE)
        );
        let bare = td(-1.5, 0.0, 0.0);
        assert_eq!(
            try_round_td(RoundingMode::Nearest, bare, eps),
            Some(Double::from_f64(-1.5))
        );
        for mode in [RoundingMode::Upward, RoundingMode::Downward, RoundingMode::TowardZero] {
            assert_eq!(try_round_td(mode, bare, eps), None, "{mode}");
        }
    }

    #[test]
    fn test_round_perturbed() {
        let one = Double::ONE;
        assert_eq!(round_perturbed(one, true, RoundingMode::Nearest), one);
        assert_eq!(round_perturbed(one, true, RoundingMode::Upward), one.next_up());
        assert_eq!(round_perturbed(one, false, RoundingMode::Downward), one.next_down());
        assert_eq!(round_perturbed(one, true, RoundingMode::TowardZero), one);
        assert_eq!(round_perturbed(one, false, RoundingMode::TowardZero), one.next_down());
        let m = -one;
        assert_eq!(round_perturbed(m, true, RoundingMode::TowardZero), m.next_up());
        assert_eq!(round_perturbed(m, false, RoundingMode::TowardZero), m);
        assert_eq!(round_perturbed(m, false, RoundingMode::Downward), m.next_down());
        assert_eq!(
            RoundingMode::Upward.mirrored(true),
            RoundingMode::Downward
        );
        assert_eq!(RoundingMode::Upward.mirrored(false), RoundingMode::Upward);
        assert_eq!(
            RoundingMode::TowardZero.mirrored(true),
            RoundingMode::TowardZero
        );
    }
}
