//! Sphere geometry: vectors, matrices, spherical coordinates and rotations.

pub mod linalg;
pub mod rotation;
pub mod spherical;

pub use linalg::{Mat3, Vec3};
pub use rotation::{rot_x, rot_y, rot_z, Axis, Composition, RotationOrder};
pub use spherical::{to_spherical, to_vector, LatLong};
