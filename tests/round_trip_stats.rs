use panorotate::geometry::{to_vector, LatLong};
use panorotate::{
    deg_to_rad, double_rotate_test, rot_x, PixelGrid, RemapConfig, RemapMode, Rgba, RoundTripStats,
};
use std::f64::consts::PI;

fn smooth_panorama(width: usize, height: usize) -> PixelGrid {
    PixelGrid::from_fn(width, height, |x, y| {
        let lat = PI / 2.0 - y as f64 / (height as f64 - 1.0) * PI;
        let long = x as f64 / (width as f64 - 1.0) * 2.0 * PI;
        let v = to_vector(LatLong::new(lat, long));
        Rgba::rgb(0.5 + 0.3 * v.z, 0.5 + 0.3 * v.x, 0.5 - 0.3 * v.y)
    })
    .unwrap()
}

#[test]
fn identical_grids_have_zero_statistics() {
    let grid = smooth_panorama(8, 4);
    let stats = RoundTripStats::compare(&grid, &grid);
    assert_eq!(stats.sad.max(), 0.0);
    assert_eq!(stats.ssd.max(), 0.0);
    assert_eq!(stats.mad8.max(), 0.0);
}

#[test]
fn compare_reports_sums_and_means() {
    let a = PixelGrid::filled(2, 2, Rgba::gray(0.5)).unwrap();
    let mut b = a.clone();
    b.put(0, 0, Rgba::rgb(1.0, 0.5, 0.5));

    let stats = RoundTripStats::compare(&a, &b);
    assert!((stats.sad.r - 0.5).abs() < 1e-12);
    assert!((stats.mad.r - 0.125).abs() < 1e-12);
    assert!((stats.ssd.r - 0.25).abs() < 1e-12);
    assert_eq!(stats.sad.g, 0.0);
    // 0.5 quantizes to 128, 1.0 to 255.
    assert_eq!(stats.sad8.r, 127.0);
    assert_eq!(stats.ssd8.r, 127.0 * 127.0);
}

#[test]
fn quarter_roll_round_trip_is_accurate() {
    let src = smooth_panorama(64, 32);
    let rotation = rot_x(deg_to_rad(90.0));

    let stats = double_rotate_test(&src, &rotation, &RemapConfig::default()).unwrap();
    assert!(stats.mad.max() < 0.01, "{stats}");

    let preview = RemapConfig {
        mode: RemapMode::Preview,
        parallel: true,
    };
    let stats = double_rotate_test(&src, &rotation, &preview).unwrap();
    assert!(stats.mad.max() < 0.01, "{stats}");
}

#[test]
fn report_lists_every_block() {
    let grid = smooth_panorama(4, 4);
    let text = RoundTripStats::compare(&grid, &grid).to_string();
    assert!(text.contains("Mean absolute differences (float):"));
    assert!(text.contains("Sum of squared differences (RGB8):"));
    assert_eq!(text.matches("Green:").count(), 6);
}
