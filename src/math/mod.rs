pub mod intersect_3d;
pub mod ring;
pub mod vector;

pub use intersect_3d::{line_plane_intersect, LinePlaneRelation};
pub use ring::{wrap_index, wrap_parameter};
pub use vector::{lerp, lerp_point, normalize_or_zero};

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 4x4 transformation matrix.
pub type Matrix4 = nalgebra::Matrix4<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
