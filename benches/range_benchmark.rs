// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use stride::{range_step, range_to};

const SIZES: &[i64] = &[1_000, 100_000, 10_000_000];

fn bench_step_one(c: &mut Criterion) {
    let mut group = c.benchmark_group("step_one_sum");

    for &n in SIZES {
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("stepped_range", n), &n, |b, &n| {
            b.iter(|| {
                let mut sum = 0_i64;
                for i in range_to(black_box(n)) {
                    sum += i;
                }
                black_box(sum)
            })
        });

        // Baseline: the standard library range the optimizer knows best.
        group.bench_with_input(BenchmarkId::new("std_range", n), &n, |b, &n| {
            b.iter(|| {
                let mut sum = 0_i64;
                for i in 0..black_box(n) {
                    sum += i;
                }
                black_box(sum)
            })
        });
    }
    group.finish();
}

fn bench_strided(c: &mut Criterion) {
    let mut group = c.benchmark_group("strided_sum");

    for &n in SIZES {
        group.throughput(Throughput::Elements((n / 7) as u64));

        group.bench_with_input(BenchmarkId::new("ascending_by_7", n), &n, |b, &n| {
            b.iter(|| {
                let mut sum = 0_i64;
                for i in range_step(0, black_box(n), 7) {
                    sum += i;
                }
                black_box(sum)
            })
        });

        group.bench_with_input(BenchmarkId::new("descending_by_7", n), &n, |b, &n| {
            b.iter(|| {
                let mut sum = 0_i64;
                for i in range_step(black_box(n), 0, -7) {
                    sum += i;
                }
                black_box(sum)
            })
        });

        group.bench_with_input(BenchmarkId::new("float_by_0_5", n), &n, |b, &n| {
            b.iter(|| {
                let mut sum = 0.0_f64;
                for x in range_step(0.0, black_box(n as f64), 0.5) {
                    sum += x;
                }
                black_box(sum)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_step_one, bench_strided);
criterion_main!(benches);
