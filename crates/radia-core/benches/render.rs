//! Benchmarks for radia-core color and rendering operations
//!
//! Run with: cargo bench -p radia-core

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use radia_core::color::{rgb_to_hsl, rotate_color, Rgb};
use radia_core::models::{CanvasSize, Variant};
use radia_core::palette::Palette;
use radia_core::render::{render_frame, render_surface};

/// Deterministic spread of colors across the RGB cube
fn generate_test_colors(count: usize) -> Vec<Rgb> {
    (0..count)
        .map(|i| {
            Rgb::new(
                ((i * 37) % 256) as u8,
                ((i * 101) % 256) as u8,
                ((i * 11) % 256) as u8,
            )
        })
        .collect()
}

/// Benchmark HSL conversions and hue rotation
fn bench_color_conversions(c: &mut Criterion) {
    let mut group = c.benchmark_group("color");
    let colors = generate_test_colors(4096);
    group.throughput(Throughput::Elements(colors.len() as u64));

    group.bench_function("rgb_to_hsl", |b| {
        b.iter(|| {
            for &color in &colors {
                black_box(rgb_to_hsl(black_box(color)));
            }
        });
    });

    group.bench_function("rotate_color", |b| {
        b.iter(|| {
            for &color in &colors {
                black_box(rotate_color(black_box(color), 90));
            }
        });
    });

    group.finish();
}

/// Benchmark single-surface rendering across canvas sizes
fn bench_render_surface(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_surface");
    let palette = Palette::default();

    for size in [256, 512, 1024, 1350].iter() {
        let width = *size;
        let height = *size;
        let pixel_count = (width * height) as u64;

        group.throughput(Throughput::Elements(pixel_count));

        group.bench_with_input(
            BenchmarkId::new("swoosh", format!("{}x{}", width, height)),
            &(width, height),
            |b, &(w, h)| {
                b.iter(|| {
                    black_box(render_surface(
                        black_box(&palette),
                        Variant::Swoosh,
                        w,
                        h,
                        0.0,
                    ))
                });
            },
        );
    }

    group.finish();
}

/// Benchmark the three variants at a fixed size
fn bench_variants(c: &mut Criterion) {
    let mut group = c.benchmark_group("variants");
    let palette = Palette::default();
    let pixel_count = 512u64 * 512;
    group.throughput(Throughput::Elements(pixel_count));

    for variant in Variant::ALL {
        group.bench_with_input(
            BenchmarkId::new(variant.name(), "512x512"),
            &variant,
            |b, &variant| {
                b.iter(|| black_box(render_surface(black_box(&palette), variant, 512, 512, 0.0)));
            },
        );
    }

    group.finish();
}

/// Benchmark a full frame: main canvas plus all three previews
fn bench_render_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_frame");
    let palette = Palette::default();

    for size in [512, 1350].iter() {
        let width = *size;
        let height = *size;
        let pixel_count = (width * height) as u64;

        group.throughput(Throughput::Elements(pixel_count));

        group.bench_with_input(
            BenchmarkId::new("render_frame", format!("{}x{}", width, height)),
            &(width, height),
            |b, &(w, h)| {
                let canvas = CanvasSize::new(w, h).unwrap();
                b.iter(|| {
                    black_box(render_frame(
                        black_box(&palette),
                        Variant::Swoosh,
                        canvas,
                        0.0,
                    ))
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_color_conversions,
    bench_render_surface,
    bench_variants,
    bench_render_frame,
);

criterion_main!(benches);
