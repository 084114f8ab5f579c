use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

/// An infinite plane in 3D space, defined by an origin point and a unit normal.
///
/// Used as the constraint surface when a control point is dragged along a
/// mouse ray.
#[derive(Debug, Clone)]
pub struct Plane {
    origin: Point3,
    normal: Vector3,
}

impl Plane {
    /// Creates a plane from an origin and a normal vector.
    ///
    /// # Errors
    ///
    /// Returns an error if the normal vector is zero-length.
    pub fn from_normal(origin: Point3, normal: Vector3) -> Result<Self> {
        let len = normal.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(Self {
            origin,
            normal: normal / len,
        })
    }

    /// Returns the origin point of the plane.
    #[must_use]
    pub fn origin(&self) -> &Point3 {
        &self.origin
    }

    /// Returns the unit normal of the plane.
    #[must_use]
    pub fn plane_normal(&self) -> &Vector3 {
        &self.normal
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::TrackcurveError;

    #[test]
    fn normal_is_normalized() {
        let plane = Plane::from_normal(Point3::origin(), Vector3::new(0.0, 0.0, 4.0)).unwrap();
        assert!((plane.plane_normal().norm() - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn zero_normal_is_rejected() {
        let err = Plane::from_normal(Point3::origin(), Vector3::zeros()).unwrap_err();
        assert!(matches!(
            err,
            TrackcurveError::Geometry(GeometryError::ZeroVector)
        ));
    }
}
