// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
//! Benchmark: layout algebra over a grid of areas, per scalar kind
//!
//! Builds an `n × n` grid of cells inside a window and measures the queries
//! and transformations a layout pass runs over it: overlap tests against a
//! moving query area, center alignment of every cell, and hollow-then-split.
//! Each group runs for `i32`, `f64` and `BigInt` so the cost of the
//! arbitrary-precision kinds stays visible next to the primitives.
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use region_geom::{Area, Scalar};
use region_num::BigInt;
use std::{hint::black_box, time::Duration};

const CELL: i16 = 24;
const GRID_SIDES: [i16; 3] = [4, 16, 64];

fn build_grid<S: Scalar>(n: fn(i16) -> S, side: i16) -> Vec<Area<S>> {
    let mut cells = Vec::with_capacity(usize::try_from(side).unwrap_or(0).pow(2));
    for row in 0..side {
        for col in 0..side {
            if let Ok(cell) = Area::create(n(col * CELL), n(row * CELL), n(CELL), n(CELL)) {
                cells.push(cell);
            }
        }
    }
    cells
}

fn bench_kind<S: Scalar>(c: &mut Criterion, label: &str, n: fn(i16) -> S) {
    let mut group = c.benchmark_group(format!("area_algebra/{label}"));
    group
        .warm_up_time(Duration::from_secs(2))
        .measurement_time(Duration::from_secs(5))
        .sample_size(50);
    for &side in &GRID_SIDES {
        let cells = build_grid(n, side);
        let Ok(query) = Area::create(n(CELL / 2), n(CELL / 2), n(CELL * 3), n(CELL * 2)) else {
            continue;
        };
        group.throughput(Throughput::Elements(cells.len() as u64));

        group.bench_with_input(BenchmarkId::new("overlaps", side), &cells, |b, cells| {
            b.iter(|| {
                let hits = cells.iter().filter(|cell| query.overlaps(cell)).count();
                black_box(hits)
            });
        });

        group.bench_with_input(BenchmarkId::new("align_center", side), &cells, |b, cells| {
            b.iter(|| {
                for cell in cells {
                    black_box(cell.align_center(&query).ok());
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("hollow_split", side), &cells, |b, cells| {
            b.iter(|| {
                for cell in cells {
                    let split = cell
                        .hollow_out_evenly(n(2))
                        .and_then(|inner| inner.split_along_parallel_to_y(n(CELL / 3)));
                    black_box(split.ok());
                }
            });
        });
    }
    group.finish();
}

fn bench_area_algebra(c: &mut Criterion) {
    bench_kind(c, "i32", i32::from);
    bench_kind(c, "f64", f64::from);
    bench_kind(c, "bigint", BigInt::from);
}

criterion_group!(benches, bench_area_algebra);
criterion_main!(benches);
