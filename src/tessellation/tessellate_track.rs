use tracing::debug;

use crate::curve::{CurveType, SampleTrack};
use crate::error::Result;
use crate::math::normalize_or_zero;
use crate::track::Track;

use super::{Segment, TrackMesh, TrackParams};

/// Breaks the whole loop into centre line, rail and tie geometry.
pub struct TessellateTrack {
    curve_type: CurveType,
    params: TrackParams,
}

impl TessellateTrack {
    /// Creates a new `TessellateTrack` operation.
    #[must_use]
    pub fn new(curve_type: CurveType, params: TrackParams) -> Self {
        Self { curve_type, params }
    }

    /// Executes the tessellation.
    ///
    /// Every span between consecutive control points is sampled
    /// `segments_per_span` times. Rails are offset sideways from the centre
    /// line using the frame of the first sample of each step, and one tie is
    /// placed at the start of every step.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid or the track has fewer
    /// than two control points.
    pub fn execute(&self, track: &Track) -> Result<TrackMesh> {
        self.params.validate()?;
        track.ensure_sampleable()?;

        let steps = self.params.segments_per_span;
        let total = track.len() * steps;
        let mut mesh = TrackMesh {
            centerline: Vec::with_capacity(total),
            left_rail: Vec::with_capacity(total),
            right_rail: Vec::with_capacity(total),
            ties: Vec::with_capacity(total),
        };

        #[allow(clippy::cast_precision_loss)]
        let step = 1.0 / steps as f64;
        for span in 0..track.len() {
            for j in 0..steps {
                #[allow(clippy::cast_precision_loss)]
                let t = span as f64 + j as f64 * step;
                #[allow(clippy::cast_precision_loss)]
                let t_next = span as f64 + (j + 1) as f64 * step;

                let a = SampleTrack::new(t, self.curve_type).execute(track)?;
                let b = SampleTrack::new(t_next, self.curve_type).execute(track)?;

                let side =
                    normalize_or_zero(&a.tangent.cross(&a.up)) * self.params.rail_half_gauge;

                mesh.centerline.push(Segment {
                    start: a.position,
                    end: b.position,
                });
                mesh.right_rail.push(Segment {
                    start: a.position + side,
                    end: b.position + side,
                });
                mesh.left_rail.push(Segment {
                    start: a.position - side,
                    end: b.position - side,
                });
                mesh.ties.push(a.frame().to_matrix(&a.position));
            }
        }

        debug!(
            points = track.len(),
            segments = mesh.centerline.len(),
            curve = ?self.curve_type,
            "tessellated track"
        );
        Ok(mesh)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::error::{TessellationError, TrackcurveError};
    use crate::math::{Point3, Vector3};
    use crate::track::ControlPoint;

    fn square() -> Track {
        Track::new(vec![
            ControlPoint::new(Point3::new(0.0, 0.0, 0.0)),
            ControlPoint::new(Point3::new(10.0, 0.0, 0.0)),
            ControlPoint::new(Point3::new(10.0, 0.0, 10.0)),
            ControlPoint::new(Point3::new(0.0, 0.0, 10.0)),
        ])
    }

    #[test]
    fn emits_one_piece_per_step() {
        let mesh = TessellateTrack::new(CurveType::CardinalSpline, TrackParams::default())
            .execute(&Track::default_loop())
            .unwrap();
        assert_eq!(mesh.centerline.len(), 40);
        assert_eq!(mesh.left_rail.len(), 40);
        assert_eq!(mesh.right_rail.len(), 40);
        assert_eq!(mesh.ties.len(), 40);
    }

    #[test]
    fn centerline_is_closed_and_connected() {
        for curve_type in [
            CurveType::Linear,
            CurveType::CardinalSpline,
            CurveType::CubicBSpline,
        ] {
            let mesh = TessellateTrack::new(curve_type, TrackParams::default())
                .execute(&Track::default_loop())
                .unwrap();
            let segments = &mesh.centerline;
            for pair in segments.windows(2) {
                assert_relative_eq!(pair[0].end, pair[1].start, epsilon = 1e-9);
            }
            let (first, last) = (segments.first().unwrap(), segments.last().unwrap());
            assert_relative_eq!(last.end, first.start, epsilon = 1e-9);
        }
    }

    #[test]
    fn rails_sit_at_half_gauge_on_flat_square() {
        let params = TrackParams {
            segments_per_span: 2,
            ..TrackParams::default()
        };
        let mesh = TessellateTrack::new(CurveType::Linear, params)
            .execute(&square())
            .unwrap();
        // First step runs along +X with +Y up, so the sideways axis is +Z.
        let centre = mesh.centerline[0];
        assert_relative_eq!(mesh.right_rail[0].start, centre.start + Vector3::new(0.0, 0.0, 2.5));
        assert_relative_eq!(mesh.left_rail[0].end, centre.end - Vector3::new(0.0, 0.0, 2.5));
    }

    #[test]
    fn ties_follow_track_frame() {
        let params = TrackParams {
            segments_per_span: 1,
            ..TrackParams::default()
        };
        let mesh = TessellateTrack::new(CurveType::Linear, params)
            .execute(&square())
            .unwrap();
        let tie = mesh.ties[1];
        // Second span runs along +Z; local x maps to the direction of travel.
        assert_relative_eq!(tie.transform_point(&Point3::origin()), Point3::new(10.0, 0.0, 0.0));
        assert_relative_eq!(tie.transform_vector(&Vector3::x()), Vector3::z(), epsilon = 1e-12);
        assert_relative_eq!(tie.transform_vector(&Vector3::y()), Vector3::y(), epsilon = 1e-12);
    }

    #[test]
    fn zero_segments_is_rejected() {
        let params = TrackParams {
            segments_per_span: 0,
            ..TrackParams::default()
        };
        let err = TessellateTrack::new(CurveType::Linear, params)
            .execute(&square())
            .unwrap_err();
        assert!(matches!(
            err,
            TrackcurveError::Tessellation(TessellationError::InvalidParameters(_))
        ));
    }

    #[test]
    fn negative_gauge_is_rejected() {
        let params = TrackParams {
            rail_half_gauge: -1.0,
            ..TrackParams::default()
        };
        assert!(params.validate().is_err());
        assert!(TrackParams::default().validate().is_ok());
    }
}
