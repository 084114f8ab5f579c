use tracing::trace;

use crate::error::{Result, TrackError};
use crate::math::{lerp, lerp_point, normalize_or_zero, wrap_parameter, Point3, Vector3};
use crate::track::{ControlPoint, Track};

use super::{position_powers, tangent_powers, CubicBasis, CurveType, TrackSample};

/// Evaluates the track at a parameter value.
///
/// The integer part of the wrapped parameter selects the segment starting at
/// that control point; the fractional part is the position inside it.
pub struct SampleTrack {
    t: f64,
    curve_type: CurveType,
}

impl SampleTrack {
    /// Creates a new `SampleTrack` query.
    #[must_use]
    pub fn new(t: f64, curve_type: CurveType) -> Self {
        Self { t, curve_type }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::TooFewPoints`] if the track has fewer than two
    /// control points, or [`TrackError::NonFiniteParameter`] if `t` is NaN or
    /// infinite.
    pub fn execute(&self, track: &Track) -> Result<TrackSample> {
        track.ensure_sampleable()?;
        if !self.t.is_finite() {
            return Err(TrackError::NonFiniteParameter(self.t).into());
        }

        let n = track.len();
        let parameter = wrap_parameter(self.t, n);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let segment = (parameter.floor() as usize).min(n - 1);
        #[allow(clippy::cast_precision_loss)]
        let f = parameter - segment as f64;

        trace!(t = self.t, parameter, segment, curve = ?self.curve_type, "sampling track");

        let sample = match self.curve_type.basis() {
            None => sample_linear(track, segment, f),
            Some(basis) => sample_spline(track, segment, f, self.curve_type, basis),
        };
        Ok(TrackSample {
            parameter,
            ..sample
        })
    }
}

fn sample_linear(track: &Track, segment: usize, f: f64) -> TrackSample {
    let (a, b) = window_pair(track, segment);
    TrackSample {
        parameter: 0.0,
        position: lerp_point(&a.position, &b.position, f),
        tangent: normalize_or_zero(&(b.position - a.position)),
        up: normalize_or_zero(&lerp(&a.orientation, &b.orientation, f)),
    }
}

fn sample_spline(
    track: &Track,
    segment: usize,
    f: f64,
    curve_type: CurveType,
    basis: &CubicBasis,
) -> TrackSample {
    #[allow(clippy::cast_possible_wrap)]
    let i = segment as isize;

    let positions = [i - 1, i, i + 1, i + 2].map(|k| track.point_wrapped(k).position.coords);

    // The orientation windows do not line up with the position window. Rail
    // twist on existing tracks depends on these offsets, so they stay as is.
    let orientation_offsets = match curve_type {
        CurveType::CubicBSpline => [i - 1, i + 1, i + 2, i + 3],
        CurveType::CardinalSpline | CurveType::Linear => [i, i + 1, i + 2, i + 3],
    };
    let orientations = orientation_offsets.map(|k| track.point_wrapped(k).orientation);

    let powers = position_powers(f);
    TrackSample {
        parameter: 0.0,
        position: Point3::from(basis.blend(&positions, &powers)),
        tangent: normalize_or_zero(&basis.blend(&positions, &tangent_powers(f))),
        up: normalize_or_zero(&basis.blend(&orientations, &powers)),
    }
}

fn window_pair(track: &Track, segment: usize) -> (&ControlPoint, &ControlPoint) {
    #[allow(clippy::cast_possible_wrap)]
    let i = segment as isize;
    (track.point_wrapped(i), track.point_wrapped(i + 1))
}
