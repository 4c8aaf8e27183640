#![cfg(feature = "rayon")]

use panorotate::{remap_with, rot_x, rot_y, rot_z, PixelGrid, RemapConfig, RemapMode, Rgba};

fn make_panorama(width: usize, height: usize) -> PixelGrid {
    PixelGrid::from_fn(width, height, |x, y| {
        let v = ((x * 11) ^ (y * 3) ^ (x * y)) & 0xFF;
        Rgba::new(v as f64 / 255.0, (255 - v) as f64 / 255.0, 0.5, 1.0)
    })
    .unwrap()
}

#[test]
fn parallel_matches_sequential_for_every_mode() {
    let src = make_panorama(40, 20);
    let rotation = rot_x(0.7) * rot_y(-0.2) * rot_z(2.1);

    for mode in [RemapMode::default(), RemapMode::Uniform, RemapMode::Preview] {
        let mut seq = PixelGrid::new(32, 16).unwrap();
        let mut par = PixelGrid::new(32, 16).unwrap();
        remap_with(&mut seq, &src, &rotation, &RemapConfig { mode, parallel: false }).unwrap();
        remap_with(&mut par, &src, &rotation, &RemapConfig { mode, parallel: true }).unwrap();
        assert_eq!(seq, par, "{mode:?}");
    }
}
