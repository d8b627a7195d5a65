//! Criterion benchmarks for boundary-index construction and queries.
//! Focus sizes: staircase polygons with 16..1024 columns.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use maxrect::grid::rand::{draw_polygon_staircase, ColumnCount, ReplayToken, StaircaseCfg};
use maxrect::grid::Polygon;
use maxrect::index::{CrossingIndex, IntervalTreeIndex, SortedIndex};

fn sampled_polygon(columns: usize, seed: u64) -> Polygon {
    let cfg = StaircaseCfg {
        column_count: ColumnCount::Fixed(columns),
        max_width: 8,
        max_height: 64,
    };
    draw_polygon_staircase(cfg, ReplayToken { seed, index: 0 }).unwrap()
}

fn query_set(poly: &Polygon) -> Vec<(i64, i64, i64)> {
    // One full-height vertical-line query per vertex x coordinate.
    poly.vertices().iter().map(|v| (v.x, 0, 64)).collect()
}

fn bench_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("index");
    for &cols in &[16usize, 128, 1024] {
        let poly = sampled_polygon(cols, 43);
        let queries = query_set(&poly);
        let sorted = SortedIndex::build(&poly);
        let tree = IntervalTreeIndex::build(&poly);

        group.bench_with_input(BenchmarkId::new("build_sorted", cols), &cols, |b, _| {
            b.iter(|| SortedIndex::build(black_box(&poly)))
        });
        group.bench_with_input(BenchmarkId::new("build_tree", cols), &cols, |b, _| {
            b.iter(|| IntervalTreeIndex::build(black_box(&poly)))
        });
        group.bench_with_input(BenchmarkId::new("query_sorted", cols), &cols, |b, _| {
            b.iter(|| {
                let mut hits = 0usize;
                for &(x, lo, hi) in &queries {
                    hits += usize::from(sorted.vertical_line_crossed(x, lo, hi));
                }
                black_box(hits)
            })
        });
        group.bench_with_input(BenchmarkId::new("query_tree", cols), &cols, |b, _| {
            b.iter(|| {
                let mut hits = 0usize;
                for &(x, lo, hi) in &queries {
                    hits += usize::from(tree.vertical_line_crossed(x, lo, hi));
                }
                black_box(hits)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_index);
criterion_main!(benches);
