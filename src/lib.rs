//! panorotate reorients full-sphere equirectangular panoramas.
//!
//! Given a 3x3 rotation, [`remap`] produces a new equirectangular image as if
//! the scene had been rotated. The engine works on in-memory [`PixelGrid`]s;
//! file I/O lives behind the `image-io` feature and rows are processed in
//! parallel with the default `rayon` feature.

pub mod geometry;
pub mod image;
pub mod remap;
mod trace;
pub mod util;

#[cfg(feature = "image-io")]
pub use crate::image::io;

pub use geometry::{rot_x, rot_y, rot_z, Axis, LatLong, Mat3, RotationOrder, Vec3};
pub use crate::image::{PixelGrid, Rgba};
pub use remap::roundtrip::{double_rotate_test, RoundTripStats};
pub use remap::{
    remap, remap_preview, remap_uniform, remap_with, DirectionTable, FilterKernel, RemapConfig,
    RemapMode,
};
pub use util::math::{deg_to_rad, rad_to_deg};
pub use util::{PanoError, PanoResult};
