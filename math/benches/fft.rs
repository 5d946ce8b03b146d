// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use kzg_math::{
    fft::{self, FftDirection, FftSettings},
    fields::f255::BaseElement,
    StarkField,
};
use rand_utils::rand_vector;

const MAX_SCALE: u32 = 16;
const SIZES: [usize; 3] = [4_096, 16_384, 65_536];

fn fft_transform<B: StarkField>(c: &mut Criterion, field_name: &str) {
    let mut group = c.benchmark_group(format!("{field_name}/fft"));
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(10));

    let settings = FftSettings::<B>::new(MAX_SCALE).unwrap();

    for &size in SIZES.iter() {
        let input: Vec<B> = rand_vector(size);
        for direction in [FftDirection::Forward, FftDirection::Inverse] {
            let name = match direction {
                FftDirection::Forward => "forward",
                FftDirection::Inverse => "inverse",
            };
            group.bench_function(BenchmarkId::new(name, size), |bench| {
                bench.iter_with_large_drop(|| {
                    let mut out = vec![B::ZERO; size];
                    fft::fft(&mut out, &input, direction, &settings).unwrap();
                    out
                });
            });
        }
    }

    group.finish();
}

fn fft_settings<B: StarkField>(c: &mut Criterion, field_name: &str) {
    let mut group = c.benchmark_group(format!("{field_name}/fft_settings"));
    group.sample_size(10);

    for scale in [12, 16] {
        group.bench_function(BenchmarkId::new("new", 1usize << scale), |bench| {
            bench.iter_with_large_drop(|| FftSettings::<B>::new(scale).unwrap());
        });
    }

    group.finish();
}

fn bench_fft(c: &mut Criterion) {
    fft_transform::<BaseElement>(c, "f255");
    fft_settings::<BaseElement>(c, "f255");
}

criterion_group!(fft_group, bench_fft);
criterion_main!(fft_group);
