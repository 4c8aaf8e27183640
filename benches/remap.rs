use criterion::{criterion_group, criterion_main, Criterion};
use panorotate::{
    rot_x, rot_y, rot_z, DirectionTable, FilterKernel, PixelGrid, RemapConfig, RemapMode, Rgba,
};
use std::hint::black_box;

fn make_panorama(width: usize, height: usize) -> PixelGrid {
    PixelGrid::from_fn(width, height, |x, y| {
        let value = ((x * 13) ^ (y * 7) ^ (x * y)) & 0xFF;
        let v = value as f64 / 255.0;
        Rgba::rgb(v, 1.0 - v, 0.5 * v)
    })
    .unwrap()
}

fn bench_remap(c: &mut Criterion) {
    let width = 256;
    let height = 128;
    let src = make_panorama(width, height);
    let rotation = rot_x(0.4) * rot_y(-0.3) * rot_z(1.2);
    let mut dst = PixelGrid::new(width, height).unwrap();

    let modes = [
        ("filtered", RemapMode::default()),
        ("uniform", RemapMode::Uniform),
        ("preview", RemapMode::Preview),
    ];
    for (name, mode) in modes {
        let cfg = RemapConfig {
            mode,
            parallel: false,
        };
        c.bench_function(&format!("remap_{name}"), |b| {
            b.iter(|| {
                panorotate::remap_with(&mut dst, &src, &rotation, &cfg).unwrap();
                black_box(dst.as_slice()[0]);
            });
        });
    }

    if cfg!(feature = "rayon") {
        let cfg = RemapConfig::default();
        c.bench_function("remap_filtered_parallel", |b| {
            b.iter(|| {
                panorotate::remap_with(&mut dst, &src, &rotation, &cfg).unwrap();
                black_box(dst.as_slice()[0]);
            });
        });
    }
}

fn bench_setup(c: &mut Criterion) {
    c.bench_function("direction_table_4096x2048", |b| {
        b.iter(|| black_box(DirectionTable::new(4096, 2048, 9).unwrap()));
    });
    c.bench_function("gaussian_kernel_9", |b| {
        b.iter(|| black_box(FilterKernel::gaussian(9, 0.4).unwrap()));
    });
}

criterion_group!(benches, bench_remap, bench_setup);
criterion_main!(benches);
