//! Benchmarks for line parsing and block composition.
//!
//! Run with: `cargo bench --package anchortext-text --bench compose_bench`

use anchortext_core::geometry::Point;
use anchortext_text::{Composer, MonospaceMetrics, TabStops, parse_line};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

// ============================================================================
// Test Data Generation
// ============================================================================

/// A table-like block: tab separated columns, one progress line per row.
fn generate_block(rows: usize) -> String {
    let mut out = String::new();
    for i in 0..rows {
        out.push_str(&format!("row {i}\tvalue {}\tok\n", i * 7));
        out.push_str(" 10%\r 50%\r100%\n");
    }
    out
}

/// One long line of overwrites, as a spinner would produce.
fn generate_spinner(frames: usize) -> String {
    let glyphs = ['|', '/', '-', '\\'];
    let mut out = String::from("working ");
    for i in 0..frames {
        out.push(glyphs[i % glyphs.len()]);
        out.push('\u{08}');
    }
    out
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_parse_line(c: &mut Criterion) {
    let metrics = MonospaceMetrics::new(7, 16);
    let mut group = c.benchmark_group("parse_line");
    for frames in [16, 256, 4096] {
        let line = generate_spinner(frames);
        group.throughput(Throughput::Bytes(line.len() as u64));
        group.bench_with_input(BenchmarkId::new("spinner", frames), &line, |b, line| {
            b.iter(|| parse_line(black_box(line), Point::ORIGIN, &metrics));
        });
    }
    group.finish();
}

fn bench_compose(c: &mut Criterion) {
    let metrics = MonospaceMetrics::new(7, 16);
    let composer = Composer::new(&metrics, TabStops::fixed(56));
    let mut group = c.benchmark_group("compose");
    for rows in [10, 100, 1000] {
        let block = generate_block(rows);
        group.throughput(Throughput::Bytes(block.len() as u64));
        group.bench_with_input(BenchmarkId::new("table", rows), &block, |b, block| {
            b.iter(|| composer.compose(black_box(block), Point::new(4, 4)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parse_line, bench_compose);
criterion_main!(benches);
