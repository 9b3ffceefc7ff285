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

use almanac_core::date::day::EpochDay;
use almanac_core::period::period::Period;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

fn period(start: i64, finish: i64) -> Period<EpochDay<i64>> {
    Period::new(EpochDay::new(start), EpochDay::new(finish))
}

/// Closed-form overlap counting vs. materializing the intersection and
/// taking its length, across growing overlap widths. The closed form is
/// O(1); the materialized variant walks and allocates the whole overlap.
fn bench_overlap_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("period_overlap_count");

    for &overlap_days in &[8i64, 64, 512, 4096] {
        let left = period(0, overlap_days + 99);
        let right = period(100, overlap_days + 199);

        group.throughput(Throughput::Elements(overlap_days as u64));

        group.bench_with_input(
            BenchmarkId::new("closed_form", overlap_days),
            &overlap_days,
            |bencher, _| bencher.iter(|| black_box(&left).intersect_count(Some(black_box(&right)))),
        );

        group.bench_with_input(
            BenchmarkId::new("materialized", overlap_days),
            &overlap_days,
            |bencher, _| bencher.iter(|| black_box(&left).intersection(Some(black_box(&right))).len()),
        );
    }

    group.finish();
}

/// Full-period day iteration, the cost model behind lazy `days()`.
fn bench_day_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("period_day_iteration");

    for &duration in &[32i64, 1024] {
        let span = period(0, duration - 1);
        group.throughput(Throughput::Elements(duration as u64));
        group.bench_with_input(BenchmarkId::from_parameter(duration), &span, |bencher, span| {
            bencher.iter(|| span.days().map(|day| day.get()).sum::<i64>())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_overlap_count, bench_day_iteration);
criterion_main!(benches);
