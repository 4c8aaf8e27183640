use panorotate::image::sample::{bilinear, sample_bilinear};
use panorotate::{PixelGrid, Rgba};

fn make_grid(width: usize, height: usize) -> PixelGrid {
    PixelGrid::from_fn(width, height, |x, y| {
        let v = (x * 7 + y * 13) as f64 / 100.0;
        Rgba::new(v, 1.0 - v, 0.5 * v, 0.25 + v)
    })
    .unwrap()
}

fn assert_close(a: Rgba, b: Rgba, tol: f64) {
    assert!(
        (a.r - b.r).abs() <= tol
            && (a.g - b.g).abs() <= tol
            && (a.b - b.b).abs() <= tol
            && (a.a - b.a).abs() <= tol,
        "{a:?} != {b:?}"
    );
}

#[test]
fn integer_coordinates_are_exact() {
    let grid = make_grid(5, 4);
    for y in 0..4 {
        for x in 0..5 {
            assert_eq!(sample_bilinear(&grid, x as f64, y as f64), grid.get(x, y));
        }
    }
}

#[test]
fn midpoint_of_equal_neighbours_is_exact() {
    let v = Rgba::new(0.3, 0.6, 0.9, 1.0);
    assert_eq!(bilinear(0.5, 0.5, [v, v, v, v]), v);

    let grid = PixelGrid::filled(3, 3, v).unwrap();
    assert_eq!(sample_bilinear(&grid, 0.5, 1.5), v);
}

#[test]
fn blends_horizontally_then_vertically() {
    let a = Rgba::gray(0.0);
    let b = Rgba::gray(1.0);
    let c = Rgba::gray(2.0);
    let d = Rgba::gray(3.0);
    let out = bilinear(0.25, 0.5, [a, b, c, d]);
    // top = 0.25, bottom = 2.25, mid = 1.25
    assert_close(out, Rgba::new(1.25, 1.25, 1.25, 1.0), 1e-12);
}

#[test]
fn out_of_range_coordinates_clamp_to_edges() {
    let grid = make_grid(4, 3);
    let tol = 1e-12;

    // Left and right.
    assert_close(sample_bilinear(&grid, -3.7, 1.25), sample_bilinear(&grid, 0.0, 1.25), tol);
    assert_close(sample_bilinear(&grid, 9.2, 1.25), sample_bilinear(&grid, 3.0, 1.25), tol);
    // Top and bottom.
    assert_close(sample_bilinear(&grid, 1.5, -0.4), sample_bilinear(&grid, 1.5, 0.0), tol);
    assert_close(sample_bilinear(&grid, 1.5, 6.0), sample_bilinear(&grid, 1.5, 2.0), tol);
    // Corners.
    assert_close(sample_bilinear(&grid, -1.0, -1.0), grid.get(0, 0), tol);
    assert_close(sample_bilinear(&grid, 8.5, 8.5), grid.get(3, 2), tol);
}

#[test]
fn clamping_does_not_wrap_across_the_seam() {
    let mut grid = PixelGrid::filled(4, 2, Rgba::gray(0.0)).unwrap();
    grid.put(3, 0, Rgba::gray(1.0));
    grid.put(3, 1, Rgba::gray(1.0));

    // Just left of column 0 must read column 0, never the last column.
    let left = sample_bilinear(&grid, -0.5, 0.5);
    assert_eq!(left.r, 0.0);
    let right = sample_bilinear(&grid, 3.5, 0.5);
    assert_eq!(right.r, 1.0);
}
