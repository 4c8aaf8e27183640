#![cfg(feature = "image-io")]

use panorotate::io::{from_dynamic, load, to_dynamic, SaveFormat, SaveParams};
use panorotate::{PanoError, PixelGrid, Rgba};
use std::path::PathBuf;

fn scratch_path(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("panorotate-io-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir.join(name)
}

fn gradient(width: usize, height: usize) -> PixelGrid {
    PixelGrid::from_fn(width, height, |x, y| {
        Rgba::new(
            x as f64 / (width - 1) as f64,
            y as f64 / (height - 1) as f64,
            0.25,
            0.75,
        )
    })
    .unwrap()
}

#[test]
fn format_names_are_case_insensitive() {
    assert_eq!("tiff".parse::<SaveFormat>().unwrap(), SaveFormat::Tiff);
    assert_eq!("Jpg".parse::<SaveFormat>().unwrap(), SaveFormat::Jpeg);
    assert_eq!("JPEG".parse::<SaveFormat>().unwrap(), SaveFormat::Jpeg);
    assert_eq!(
        "tiff_rgba16".parse::<SaveFormat>().unwrap(),
        SaveFormat::TiffRgba16
    );
    assert_eq!(SaveFormat::TiffRgb8.to_string(), "TIFF_RGB8");
}

#[test]
fn unknown_format_is_rejected() {
    let err = "BMP".parse::<SaveFormat>().unwrap_err();
    assert_eq!(
        err,
        PanoError::UnknownSaveFormat {
            name: "BMP".to_string()
        }
    );
}

#[test]
fn fixed_formats_pin_the_layout() {
    let input = SaveParams {
        bit_depth: 16,
        channels: 4,
        quality: 70,
    };
    assert_eq!(SaveFormat::Tiff.resolve(input), input);

    let jpeg = SaveFormat::Jpeg.resolve(input);
    assert_eq!((jpeg.bit_depth, jpeg.channels, jpeg.quality), (8, 3, 70));

    let rgb16 = SaveFormat::TiffRgb16.resolve(SaveParams::default());
    assert_eq!((rgb16.bit_depth, rgb16.channels), (16, 3));
}

#[test]
fn unsupported_layout_is_reported() {
    let grid = gradient(4, 2);
    let err = to_dynamic(&grid, 8, 2).unwrap_err();
    assert_eq!(
        err,
        PanoError::UnsupportedPixelLayout {
            bit_depth: 8,
            channels: 2
        }
    );
}

#[test]
fn dynamic_conversion_preserves_layout() {
    let grid = gradient(5, 3);
    let img = to_dynamic(&grid, 16, 4).unwrap();
    let loaded = from_dynamic(&img).unwrap();
    assert_eq!(loaded.bit_depth, 16);
    assert_eq!(loaded.channels, 4);
    for (a, b) in grid.as_slice().iter().zip(loaded.grid.as_slice()) {
        assert!((a.r - b.r).abs() < 1e-4);
        assert!((a.a - b.a).abs() < 1e-4);
    }

    let img = to_dynamic(&grid, 8, 3).unwrap();
    let loaded = from_dynamic(&img).unwrap();
    assert_eq!((loaded.bit_depth, loaded.channels), (8, 3));
    assert!(loaded.grid.as_slice().iter().all(|p| p.a == 1.0));
}

#[test]
fn tiff_round_trip_through_disk() {
    let grid = gradient(16, 8);
    let path = scratch_path("rgba16.tiff");
    SaveFormat::TiffRgba16
        .save(&grid, &path, SaveParams::default())
        .unwrap();

    let loaded = load(&path).unwrap();
    assert_eq!(loaded.bit_depth, 16);
    assert_eq!(loaded.channels, 4);
    assert_eq!(loaded.grid.width(), 16);
    assert_eq!(loaded.grid.height(), 8);
    for (a, b) in grid.as_slice().iter().zip(loaded.grid.as_slice()) {
        assert!((a.g - b.g).abs() < 1e-4);
        assert!((a.a - b.a).abs() < 1e-4);
    }
    std::fs::remove_file(&path).ok();
}

#[test]
fn jpeg_is_written_as_rgb8() {
    let grid = PixelGrid::filled(16, 16, Rgba::gray(0.5)).unwrap();
    let path = scratch_path("gray.jpg");
    SaveFormat::Jpeg
        .save(&grid, &path, SaveParams::default())
        .unwrap();

    let loaded = load(&path).unwrap();
    assert_eq!((loaded.bit_depth, loaded.channels), (8, 3));
    let p = loaded.grid.get(8, 8);
    assert!((p.r - 0.5).abs() < 0.02);
    std::fs::remove_file(&path).ok();
}

#[test]
fn missing_file_is_an_io_error() {
    let err = load(scratch_path("does-not-exist.tiff")).unwrap_err();
    assert!(matches!(err, PanoError::ImageIo { .. }));
}
