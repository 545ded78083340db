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
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use softcr::{
    Double, RoundingMode, asin_rn, atan_rn, cos_rn, exp_rn, exp_ru, log_rd, log_rn, pow_rn,
    sin_rn, sinpi_rn, tan_rn,
};

fn bench_unary(
    c: &mut Criterion,
    name: &str,
    range: (f64, f64),
    soft: fn(Double) -> Double,
    libm_fn: fn(f64) -> f64,
    pxfm_fn: fn(f64) -> f64,
) {
    let step = (range.1 - range.0) / 1000.0;
    c.bench_function(&format!("libm::{name}"), |b| {
        b.iter(|| {
            for i in 0..1000 {
                black_box(libm_fn(range.0 + i as f64 * step));
            }
        })
    });

    c.bench_function(&format!("pxfm: {name}"), |b| {
        b.iter(|| {
            for i in 0..1000 {
                black_box(pxfm_fn(range.0 + i as f64 * step));
            }
        })
    });

    c.bench_function(&format!("softcr: {name}"), |b| {
        b.iter(|| {
            for i in 0..1000 {
                black_box(soft(Double::from_f64(range.0 + i as f64 * step)));
            }
        })
    });
}

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("system: mul + add", |b| {
        b.iter(|| {
            let mut acc = 0.0f64;
            for i in 1..1000 {
                acc = black_box(acc * 0.999 + i as f64);
            }
            acc
        })
    });

    c.bench_function("softcr: mul + add", |b| {
        b.iter(|| {
            let mut acc = Double::ZERO;
            for i in 1..1000 {
                acc = black_box(acc * 0.999 + Double::from_s32(i));
            }
            acc
        })
    });

    bench_unary(c, "log", (0.01, 1000.0), log_rn, libm::log, pxfm::f_log);
    bench_unary(c, "exp", (-700.0, 700.0), exp_rn, libm::exp, pxfm::f_exp);
    bench_unary(c, "sin", (-10.0, 10.0), sin_rn, libm::sin, pxfm::f_sin);
    bench_unary(c, "cos", (-10.0, 10.0), cos_rn, libm::cos, pxfm::f_cos);
    bench_unary(c, "tan", (-1.5, 1.5), tan_rn, libm::tan, pxfm::f_tan);
    bench_unary(c, "asin", (-1.0, 1.0), asin_rn, libm::asin, pxfm::f_asin);
    bench_unary(c, "atan", (-100.0, 100.0), atan_rn, libm::atan, pxfm::f_atan);
    bench_unary(c, "sinpi", (-4.0, 4.0), sinpi_rn, |x| libm::sin(x * std::f64::consts::PI), pxfm::f_sinpi);

    c.bench_function("softcr: directed log/exp", |b| {
        b.iter(|| {
            for i in 1..1000 {
                let x = Double::from_s32(i);
                black_box(log_rd(x));
                black_box(exp_ru(x * 0.5));
            }
        })
    });

    c.bench_function("softcr: large sin", |b| {
        b.iter(|| {
            for i in 1..100 {
                black_box(softcr::sin(Double::from_f64(1e22 * i as f64), RoundingMode::Nearest));
            }
        })
    });

    c.bench_function("libm::pow", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(libm::pow(i as f64 / 10.0, 1.7));
            }
        })
    });

    c.bench_function("pxfm: pow", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(pxfm::f_pow(i as f64 / 10.0, 1.7));
            }
        })
    });

    c.bench_function("softcr: pow", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(pow_rn(Double::from_f64(i as f64 / 10.0), Double::from_f64(1.7)));
            }
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
