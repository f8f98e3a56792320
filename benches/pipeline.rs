//! Benchmarks for the armory pipeline.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use px_armory::render::{encode_png, GridSpec, LogicalSurface};
use px_armory::shape::{Annulus, Membership, PolarFlanged, Point, ShapeSpec, TaperedBody, WidthProfile, CenterLine};
use px_armory::types::Colour;
use px_armory::{generate, ItemKind, ItemOptions};

// -- Membership benchmarks --

fn bench_membership(c: &mut Criterion) {
    let mut group = c.benchmark_group("membership");

    let blade = ShapeSpec::Tapered(
        TaperedBody::new(40, WidthProfile::Pointed { width: 6, tip_rows: 6 })
            .with_center(CenterLine::Curved { amount: 6.0 }),
    )
    .at(Point::new(12, 2));
    let ring = ShapeSpec::Annulus(Annulus::new(10, 6)).at(Point::new(12, 12));
    let head = ShapeSpec::Polar(PolarFlanged::new(4, 6, 5)).at(Point::new(16, 11));

    for (name, shape) in [("tapered", blade), ("annulus", ring), ("polar", head)] {
        group.bench_function(name, |b| {
            b.iter(|| {
                let bounds = shape.bounds();
                bounds.cells().filter(|&(x, y)| black_box(&shape).contains(x, y)).count()
            })
        });
    }
    group.finish();
}

// -- Generation benchmarks --

fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation");

    for kind in ItemKind::ALL {
        let options = ItemOptions::new().with_seed(42).with_scale(4);
        group.bench_with_input(BenchmarkId::from_parameter(kind), &options, |b, options| {
            b.iter(|| generate(kind, black_box(options)))
        });
    }

    let options = ItemOptions::new().with_seed(42).with_scale(16);
    group.bench_function("sword_scale_16", |b| {
        b.iter(|| generate(ItemKind::Sword, black_box(&options)))
    });
    group.finish();
}

// -- Encoding benchmarks --

fn bench_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("encoding");

    let mut surface = LogicalSurface::new(GridSpec::new(32, 72, 4)).unwrap();
    for y in 0..72 {
        for x in 0..32 {
            if (x + y) % 3 != 0 {
                surface.blit(x, y, 1, 1, Colour::rgb((x * 8) as u8, (y * 3) as u8, 0x40));
            }
        }
    }

    group.bench_function("encode_png_sword_grid", |b| {
        b.iter(|| encode_png(black_box(&surface)).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_membership, bench_generation, bench_encoding);
criterion_main!(benches);
