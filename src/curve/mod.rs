mod basis;
mod sample;

pub use basis::{position_powers, tangent_powers, CubicBasis, B_SPLINE, CARDINAL};
pub use sample::SampleTrack;

use crate::geometry::Frame;
use crate::math::{Point3, Vector3};

/// How the track is interpolated between control points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CurveType {
    /// Straight segments between consecutive control points.
    #[default]
    Linear,
    /// Cardinal spline through every control point.
    CardinalSpline,
    /// Uniform cubic B-spline approximating the control points.
    CubicBSpline,
}

impl CurveType {
    /// The cubic basis used by spline curve types, `None` for [`CurveType::Linear`].
    #[must_use]
    pub fn basis(self) -> Option<&'static CubicBasis> {
        match self {
            Self::Linear => None,
            Self::CardinalSpline => Some(&CARDINAL),
            Self::CubicBSpline => Some(&B_SPLINE),
        }
    }
}

/// The track evaluated at one parameter value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackSample {
    /// The parameter after wrapping into `[0, N)`.
    pub parameter: f64,
    /// World position on the track.
    pub position: Point3,
    /// Unit direction of travel (zero if the segment is degenerate).
    pub tangent: Vector3,
    /// Unit blended orientation (zero if the blend cancels out).
    pub up: Vector3,
}

impl TrackSample {
    /// Orthonormal frame at this sample.
    #[must_use]
    pub fn frame(&self) -> Frame {
        Frame::new(&self.tangent, &self.up)
    }
}
