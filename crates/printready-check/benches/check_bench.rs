// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the printready-check crate: the catalog walk on its
// own, and the full pipeline on a small in-memory JPEG.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use printready_check::fixtures::{jpeg_bytes, minimal_profile};
use printready_check::{ImageChecker, PrintSizeResolver};
use printready_core::{CheckerConfig, PixelDimensions};

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Benchmark resolution for an image that only fits the smallest size, which
/// walks the whole catalog.
fn bench_resolve_full_walk(c: &mut Criterion) {
    let config = CheckerConfig::default();
    let resolver = PrintSizeResolver::new(&config);
    let dimensions = PixelDimensions::new(2361, 2361);

    c.bench_function("resolve (full catalog walk)", |b| {
        b.iter(|| black_box(resolver.resolve(black_box(dimensions))));
    });
}

/// Benchmark the full pipeline on a 356x237 landscape JPEG with an embedded
/// sRGB description, using a density low enough for it to pass.
fn bench_inspect_jpeg(c: &mut Criterion) {
    let profile = minimal_profile("sRGB IEC61966-2.1");
    let bytes = jpeg_bytes(356, 237, Some(&profile)).expect("fixture JPEG encodes");
    let checker = ImageChecker::new(CheckerConfig {
        min_dpi: 30,
        ..Default::default()
    })
    .expect("valid config");

    c.bench_function("inspect (356x237 JPEG)", |b| {
        b.iter(|| black_box(checker.inspect(black_box(&bytes))));
    });
}

criterion_group!(benches, bench_resolve_full_walk, bench_inspect_jpeg);
criterion_main!(benches);
