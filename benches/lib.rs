use std::array;

use bid2flt::{d32, Ctx, RoundingMode};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{prelude::*, random, thread_rng};

fn bench_to_f32(c: &mut Criterion) {
    let mut group = c.benchmark_group("bid32/to_f32");

    let finite: [d32; 1 << 14] = array::from_fn(|_| {
        let coeff = thread_rng().gen_range(0..=9_999_999);
        let exp = thread_rng().gen_range(-101..=90);
        let sign = random();
        d32::from_parts(sign, exp, coeff)
    });
    group.bench_function("finite", |b| {
        let mut i = 0;
        b.iter(|| {
            let x = finite[i % finite.len()];
            black_box(black_box(x).to_f32());
            i += 1;
        });
    });

    // Arbitrary bit patterns, including NaNs, infinities, and
    // non-canonical encodings.
    let bits: [d32; 1 << 14] = array::from_fn(|_| d32::from_bits(random()));
    group.bench_function("any", |b| {
        let mut i = 0;
        b.iter(|| {
            let x = bits[i % bits.len()];
            black_box(black_box(x).to_f32());
            i += 1;
        });
    });

    group.finish();
}

fn bench_ctx(c: &mut Criterion) {
    let mut group = c.benchmark_group("bid32/ctx");

    let finite: [d32; 1 << 14] = array::from_fn(|_| {
        let coeff = thread_rng().gen_range(0..=9_999_999);
        let exp = thread_rng().gen_range(-101..=90);
        let sign = random();
        d32::from_parts(sign, exp, coeff)
    });
    for mode in [
        RoundingMode::ToNearestEven,
        RoundingMode::ToZero,
        RoundingMode::ToPositiveInf,
    ] {
        group.bench_function(format!("{mode:?}"), |b| {
            let mut ctx = Ctx::new().with_rounding_mode(mode);
            let mut i = 0;
            b.iter(|| {
                let x = finite[i % finite.len()];
                black_box(ctx.to_f32(black_box(x)));
                i += 1;
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_to_f32, bench_ctx);
criterion_main!(benches);
