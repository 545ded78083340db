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
use rand::Rng;
use softcr::{Double, RoundingMode, SoftFloatError};
use std::str::FromStr;

type Unary = fn(Double, RoundingMode) -> Double;

fn lookup(name: &str) -> Option<Unary> {
    let f: Unary = match name {
        "log" => softcr::log,
        "log2" => softcr::log2,
        "log10" => softcr::log10,
        "log1p" => softcr::log1p,
        "exp" => softcr::exp,
        "exp2" => softcr::exp2,
        "expm1" => softcr::expm1,
        "sin" => softcr::sin,
        "cos" => softcr::cos,
        "tan" => softcr::tan,
        "sinpi" => softcr::sinpi,
        "cospi" => softcr::cospi,
        "tanpi" => softcr::tanpi,
        "asin" => softcr::asin,
        "acos" => softcr::acos,
        "atan" => softcr::atan,
        "sinh" => softcr::sinh,
        "cosh" => softcr::cosh,
        _ => return None,
    };
    Some(f)
}

fn print_modes(name: &str, f: Unary, x: Double) {
    for mode in RoundingMode::ALL {
        let r = f(x, mode);
        println!("{name}_{mode}({x:?}) = {r:?}");
    }
}

fn main() -> Result<(), SoftFloatError> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        // spot check against the host libm on a few random points
        let mut rng = rand::rng();
        for _ in 0..8 {
            let x: f64 = rng.random_range(-10.0..10.0);
            let soft = softcr::sin_rn(Double::from_f64(x)).to_f64();
            println!("sin({x}) soft {soft:e} libm {:e} pxfm {:e}", libm::sin(x), pxfm::f_sin(x));
        }
        return Ok(());
    }

    if args[0] == "pow" && args.len() >= 3 {
        let x = Double::from_f64(args[1].parse().unwrap_or(f64::NAN));
        let y = Double::from_f64(args[2].parse().unwrap_or(f64::NAN));
        println!("pow_rn({x:?}, {y:?}) = {:?}", softcr::pow_rn(x, y));
        return Ok(());
    }

    let Some(f) = lookup(&args[0]) else {
        eprintln!("unknown function {}", args[0]);
        return Ok(());
    };
    let x = Double::from_f64(args.get(1).and_then(|v| v.parse().ok()).unwrap_or(0.5));
    match args.get(2) {
        Some(mode) => {
            let mode = RoundingMode::from_str(mode)?;
            println!("{}_{mode}({x:?}) = {:?}", args[0], f(x, mode));
        }
        None => print_modes(&args[0], f, x),
    }
    Ok(())
}
