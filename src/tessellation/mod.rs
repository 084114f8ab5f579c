mod tessellate_track;
mod train;

pub use tessellate_track::TessellateTrack;
pub use train::{CameraPose, PlaceTrain, TrainClock, TrainParams, TrainPlacement};

use crate::error::{Result, TessellationError};
use crate::math::{Matrix4, Point3};

/// Parameters controlling how the track is broken into renderable pieces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackParams {
    /// Number of samples between two consecutive control points.
    pub segments_per_span: usize,
    /// Distance from the centre line to each rail.
    pub rail_half_gauge: f64,
    /// Half extent of a tie along the track and vertically.
    pub tie_half_width: f64,
    /// Half extent of a tie across the track.
    pub tie_half_length: f64,
}

impl Default for TrackParams {
    fn default() -> Self {
        Self {
            segments_per_span: 10,
            rail_half_gauge: 2.5,
            tie_half_width: 0.75,
            tie_half_length: 3.0,
        }
    }
}

impl TrackParams {
    /// Checks that the parameters describe a drawable track.
    ///
    /// # Errors
    ///
    /// Returns [`TessellationError::InvalidParameters`] for zero segments or
    /// non-positive sizes.
    pub fn validate(&self) -> Result<()> {
        if self.segments_per_span == 0 {
            return Err(TessellationError::InvalidParameters(
                "segments_per_span must be at least 1".into(),
            )
            .into());
        }
        for (name, value) in [
            ("rail_half_gauge", self.rail_half_gauge),
            ("tie_half_width", self.tie_half_width),
            ("tie_half_length", self.tie_half_length),
        ] {
            if !(value > 0.0 && value.is_finite()) {
                return Err(TessellationError::InvalidParameters(format!(
                    "{name} must be positive, got {value}"
                ))
                .into());
            }
        }
        Ok(())
    }
}

/// A straight piece of line between two sampled points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point3,
    pub end: Point3,
}

/// Renderable description of a track: centre line, two rails and ties.
#[derive(Debug, Clone, Default)]
pub struct TrackMesh {
    /// Centre line, one segment per sample step.
    pub centerline: Vec<Segment>,
    /// Rail on the `-w` side of the frame (left when facing along the track).
    pub left_rail: Vec<Segment>,
    /// Rail on the `+w` side of the frame.
    pub right_rail: Vec<Segment>,
    /// Placement of each tie box; the box spans `±tie_half_width` along local
    /// `x` and `y` and `±tie_half_length` along local `z`.
    pub ties: Vec<Matrix4>,
}
