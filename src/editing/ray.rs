use crate::math::{Point3, Vector3};

/// A ray from the eye through the mouse cursor, in world space.
///
/// The direction is not required to be unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseRay {
    pub origin: Point3,
    pub direction: Vector3,
}

impl MouseRay {
    /// Creates a ray from an origin and a direction.
    #[must_use]
    pub fn new(origin: Point3, direction: Vector3) -> Self {
        Self { origin, direction }
    }

    /// Creates a ray from the unprojected cursor on the near and far clip planes.
    #[must_use]
    pub fn through(near: Point3, far: Point3) -> Self {
        Self {
            origin: near,
            direction: far - near,
        }
    }

    /// Point at parameter `t` along the ray.
    #[must_use]
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + self.direction * t
    }
}
