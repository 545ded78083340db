#![no_main]

use libfuzzer_sys::fuzz_target;
use softcr::Double;

fn same(soft: Double, native: f64) -> bool {
    (soft.is_nan() && native.is_nan()) || soft.to_bits() == native.to_bits()
}

fuzz_target!(|data: (u64, u64)| {
    let (a, b) = (f64::from_bits(data.0), f64::from_bits(data.1));
    let (x, y) = (Double::from_f64(a), Double::from_f64(b));

    assert!(same(x + y, a + b), "{a:e} + {b:e}");
    assert!(same(x - y, a - b), "{a:e} - {b:e}");
    assert!(same(x * y, a * b), "{a:e} * {b:e}");
    assert!(same(x / y, a / b), "{a:e} / {b:e}");
    assert!(same(softcr::sqrt(x), a.sqrt()), "sqrt({a:e})");
    assert!(same(softcr::floor(x), a.floor()), "floor({a:e})");
    assert!(same(softcr::ceil(x), a.ceil()), "ceil({a:e})");
    assert_eq!(x < y, a < b);
    assert_eq!(x == y, a == b);
});
