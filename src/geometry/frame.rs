use crate::math::{normalize_or_zero, Matrix4, Point3, Vector3, TOLERANCE};

/// Right-handed local frame attached to a point on the track.
///
/// * `u` — direction of travel (the sampled tangent).
/// * `v` — local up, perpendicular to `u`.
/// * `w` — sideways, `u × up`.
///
/// Cross ties and the train body are modelled in this frame and placed with
/// [`Frame::to_matrix`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub u: Vector3,
    pub v: Vector3,
    pub w: Vector3,
}

impl Frame {
    /// Builds the frame from a tangent and a reference up vector.
    ///
    /// `w = normalize(tangent × up)`, `v = normalize(w × tangent)`, `u = tangent`.
    /// A tangent parallel to `up` collapses `w` and `v` to zero vectors instead
    /// of producing NaNs; callers keep orientations off the tangent direction.
    #[must_use]
    pub fn new(tangent: &Vector3, up: &Vector3) -> Self {
        let u = *tangent;
        let w = normalize_or_zero(&u.cross(up));
        let v = normalize_or_zero(&w.cross(&u));
        Self { u, v, w }
    }

    /// Returns `true` when `u`, `v`, `w` are unit length and mutually perpendicular.
    #[must_use]
    pub fn is_orthonormal(&self, eps: f64) -> bool {
        let unit = |a: &Vector3| (a.norm() - 1.0).abs() <= eps;
        unit(&self.u)
            && unit(&self.v)
            && unit(&self.w)
            && self.u.dot(&self.v).abs() <= eps
            && self.v.dot(&self.w).abs() <= eps
            && self.w.dot(&self.u).abs() <= eps
    }

    /// Returns `true` if the frame collapsed because the tangent or up vector
    /// was degenerate.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.w.norm() < TOLERANCE || self.v.norm() < TOLERANCE
    }

    /// Homogeneous transform whose rotation columns are `u`, `v`, `w` and whose
    /// translation is `origin`.
    #[must_use]
    #[rustfmt::skip]
    pub fn to_matrix(&self, origin: &Point3) -> Matrix4 {
        let (u, v, w, o) = (&self.u, &self.v, &self.w, &origin.coords);
        Matrix4::new(
            u.x, v.x, w.x, o.x,
            u.y, v.y, w.y, o.y,
            u.z, v.z, w.z, o.z,
            0.0, 0.0, 0.0, 1.0,
        )
    }
}
