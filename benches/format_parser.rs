//! Format parser benchmarks
//!
//! Measures each text dialect through the rule chain, plus decimal
//! conversion, so changes to rule order show up as regressions.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use gps_axis::{Latitude, Longitude};

/// One input per format rule, in rule order
const LATITUDE_INPUTS: &[(&str, &str)] = &[
    ("bare_decimal", "40.446195"),
    ("degrees_minutes_seconds", "40°26'46.302\"N"),
    ("signed_decimal", "-33.8688 S"),
    ("fractional_minutes", "40°26.7717'N"),
    ("seconds_minutes", "40°26\"46.302'N"),
    ("no_match", "not a coordinate"),
];

/// Benchmark parsing of every supported dialect
fn bench_try_parse_string(c: &mut Criterion) {
    let mut group = c.benchmark_group("latitude_try_parse_string");

    for (name, input) in LATITUDE_INPUTS {
        group.bench_with_input(BenchmarkId::from_parameter(name), input, |b, input| {
            b.iter(|| black_box(Latitude::try_parse_string(black_box(input))));
        });
    }

    group.finish();
}

/// Benchmark decimal to DMS conversion
fn bench_from_decimal(c: &mut Criterion) {
    c.bench_function("longitude_from_decimal", |b| {
        b.iter(|| black_box(Longitude::from_decimal(black_box(-79.948862))))
    });
}

/// Benchmark canonical-text equality across formats
fn bench_equals(c: &mut Criterion) {
    let latitude = Latitude::new("N", 40, 26, 46.302).expect("valid latitude");

    c.bench_function("latitude_equals_text", |b| {
        b.iter(|| black_box(latitude.equals(black_box("N 40d26'46.302"))))
    });
}

criterion_group!(
    benches,
    bench_try_parse_string,
    bench_from_decimal,
    bench_equals
);
criterion_main!(benches);
