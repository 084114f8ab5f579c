//! Vector helpers that nalgebra does not provide in the shape the curve code needs.
//!
//! `nalgebra::Vector3::normalize` divides by the norm unconditionally and yields
//! NaN for a zero vector. Track geometry must stay finite when a tangent or up
//! vector collapses, so normalization goes through [`normalize_or_zero`].

use super::{Point3, Vector3, TOLERANCE};

/// Returns `v` scaled to unit length, or the zero vector when `v` is shorter than
/// [`TOLERANCE`].
#[must_use]
pub fn normalize_or_zero(v: &Vector3) -> Vector3 {
    let len = v.norm();
    if len < TOLERANCE {
        Vector3::zeros()
    } else {
        v / len
    }
}

/// Linear interpolation `a * (1 - f) + b * f` between two vectors.
#[must_use]
pub fn lerp(a: &Vector3, b: &Vector3, f: f64) -> Vector3 {
    a * (1.0 - f) + b * f
}

/// Linear interpolation between two points.
#[must_use]
pub fn lerp_point(a: &Point3, b: &Point3, f: f64) -> Point3 {
    Point3::from(lerp(&a.coords, &b.coords, f))
}
