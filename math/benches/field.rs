// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use kzg_math::{fields::f255, get_power_series, FieldElement, StarkField};
use rand_utils::rand_value;

const SIZES: [usize; 3] = [4_096, 16_384, 65_536];

pub fn f255_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("f255");

    group.bench_function("add", |bench| {
        let x: f255::BaseElement = rand_value();
        let y: f255::BaseElement = rand_value();
        bench.iter(|| black_box(x) + black_box(y))
    });

    group.bench_function("sub", |bench| {
        let x: f255::BaseElement = rand_value();
        let y: f255::BaseElement = rand_value();
        bench.iter(|| black_box(x) - black_box(y))
    });

    group.bench_function("mul", |bench| {
        let x: f255::BaseElement = rand_value();
        let y: f255::BaseElement = rand_value();
        bench.iter(|| black_box(x) * black_box(y))
    });

    group.bench_function("exp", |bench| {
        let x: f255::BaseElement = rand_value();
        let y: f255::BaseElement = rand_value();
        let power = y.as_int();
        bench.iter(|| f255::BaseElement::exp(black_box(x), black_box(power)))
    });

    group.bench_function("inv", |bench| {
        let x: f255::BaseElement = rand_value();
        bench.iter(|| f255::BaseElement::inv(black_box(x)))
    });

    group.finish();
}

pub fn power_series(c: &mut Criterion) {
    let mut group = c.benchmark_group("power_series");

    for &size in SIZES.iter() {
        let b = f255::BaseElement::get_root_of_unity(size.ilog2());
        group.bench_function(BenchmarkId::new("f255", size), |bench| {
            bench.iter_with_large_drop(|| get_power_series(black_box(b), size))
        });
    }

    group.finish();
}

criterion_group!(field_group, f255_ops, power_series);
criterion_main!(field_group);
