use std::fmt;

use crate::math::{Point3, Vector3};

/// A knot of the track: where the rail passes and which way is "up" there.
///
/// `orientation` is only a reference direction. It does not need to be unit
/// length or perpendicular to the track; sampling blends it between knots and
/// [`Frame`](crate::geometry::Frame) orthogonalizes it against the tangent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    pub position: Point3,
    pub orientation: Vector3,
}

impl ControlPoint {
    /// Creates a control point with the world `+Y` axis as orientation.
    #[must_use]
    pub fn new(position: Point3) -> Self {
        Self {
            position,
            orientation: Vector3::y(),
        }
    }

    /// Creates a control point with an explicit orientation.
    #[must_use]
    pub fn with_orientation(position: Point3, orientation: Vector3) -> Self {
        Self {
            position,
            orientation,
        }
    }
}

impl fmt::Display for ControlPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (p, o) = (&self.position, &self.orientation);
        write!(
            f,
            "({} {} {}) ({} {} {})",
            p.x, p.y, p.z, o.x, o.y, o.z
        )
    }
}
