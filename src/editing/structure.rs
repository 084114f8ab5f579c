use nalgebra::{Rotation3, Unit};
use tracing::debug;

use crate::error::{GeometryError, Result, TrackError};
use crate::math::{lerp, lerp_point, Vector3, TOLERANCE};
use crate::track::{ControlPoint, Track, MIN_POINTS};

/// Inserts a new control point halfway between a point and its successor.
pub struct InsertControlPoint {
    after: usize,
}

impl InsertControlPoint {
    /// Creates a new `InsertControlPoint` operation.
    #[must_use]
    pub fn new(after: usize) -> Self {
        Self { after }
    }

    /// Executes the insertion, returning the index of the new point.
    ///
    /// The new point sits at the midpoint of `after` and the next point around
    /// the loop, with the average of their orientations.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::IndexOutOfRange`] if `after` is not a valid index.
    pub fn execute(&self, track: &mut Track) -> Result<usize> {
        let current = *track.point(self.after)?;
        let next = *track.point((self.after + 1) % track.len())?;

        let inserted = ControlPoint::with_orientation(
            lerp_point(&current.position, &next.position, 0.5),
            lerp(&current.orientation, &next.orientation, 0.5),
        );
        let index = self.after + 1;
        track.insert(index, inserted);

        debug!(index, len = track.len(), "inserted control point");
        Ok(index)
    }
}

/// Removes a control point, keeping the track sampleable.
pub struct RemoveControlPoint {
    index: usize,
}

impl RemoveControlPoint {
    /// Creates a new `RemoveControlPoint` operation.
    #[must_use]
    pub fn new(index: usize) -> Self {
        Self { index }
    }

    /// Executes the removal, returning the removed point.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::IndexOutOfRange`] for an invalid index, or
    /// [`TrackError::TooFewPoints`] if the track would drop below
    /// [`MIN_POINTS`].
    pub fn execute(&self, track: &mut Track) -> Result<ControlPoint> {
        track.point(self.index)?;
        if track.len() <= MIN_POINTS {
            return Err(TrackError::TooFewPoints {
                count: track.len() - 1,
                min: MIN_POINTS,
            }
            .into());
        }
        let removed = track.remove(self.index);
        debug!(index = self.index, len = track.len(), "removed control point");
        Ok(removed)
    }
}

/// Rotates the orientation of one control point around an axis.
pub struct RollControlPoint {
    index: usize,
    axis: Vector3,
    angle: f64,
}

impl RollControlPoint {
    /// Creates a new `RollControlPoint` operation.
    ///
    /// * `angle` - Rotation angle in radians.
    #[must_use]
    pub fn new(index: usize, axis: Vector3, angle: f64) -> Self {
        Self { index, axis, angle }
    }

    /// Executes the rotation, returning the new orientation.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if the axis is zero-length, or
    /// [`TrackError::IndexOutOfRange`] for an invalid index.
    pub fn execute(&self, track: &mut Track) -> Result<Vector3> {
        let axis = Unit::try_new(self.axis, TOLERANCE).ok_or(GeometryError::ZeroVector)?;
        let rotation = Rotation3::from_axis_angle(&axis, self.angle);

        let point = track.point_mut(self.index)?;
        point.orientation = rotation * point.orientation;
        Ok(point.orientation)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use approx::assert_relative_eq;

    use super::*;
    use crate::error::TrackcurveError;
    use crate::math::Point3;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn insert_places_midpoint_after_index() {
        let mut track = Track::default_loop();
        let index = InsertControlPoint::new(0).execute(&mut track).unwrap();
        assert_eq!(index, 1);
        assert_eq!(track.len(), 5);
        assert_relative_eq!(track.point(1).unwrap().position, p(25.0, 5.0, 25.0));
        assert_eq!(track.point(2).unwrap().position, p(0.0, 5.0, 50.0));
    }

    #[test]
    fn insert_after_last_wraps_to_first() {
        let mut track = Track::default_loop();
        let index = InsertControlPoint::new(3).execute(&mut track).unwrap();
        assert_eq!(index, 4);
        assert_relative_eq!(track.point(4).unwrap().position, p(25.0, 5.0, -25.0));
    }

    #[test]
    fn insert_averages_orientation() {
        let mut track = Track::default_loop();
        track.point_mut(1).unwrap().orientation = Vector3::x();
        InsertControlPoint::new(0).execute(&mut track).unwrap();
        assert_relative_eq!(track.point(1).unwrap().orientation, Vector3::new(0.5, 0.5, 0.0));
    }

    #[test]
    fn remove_shifts_following_points() {
        let mut track = Track::default_loop();
        let removed = RemoveControlPoint::new(1).execute(&mut track).unwrap();
        assert_eq!(removed.position, p(0.0, 5.0, 50.0));
        assert_eq!(track.len(), 3);
        assert_eq!(track.point(1).unwrap().position, p(-50.0, 5.0, 0.0));
    }

    #[test]
    fn remove_keeps_two_points() {
        let mut track = Track::new(vec![
            ControlPoint::new(p(0.0, 0.0, 0.0)),
            ControlPoint::new(p(1.0, 0.0, 0.0)),
        ]);
        let err = RemoveControlPoint::new(0).execute(&mut track).unwrap_err();
        assert!(matches!(
            err,
            TrackcurveError::Track(TrackError::TooFewPoints { .. })
        ));
        assert_eq!(track.len(), 2);
    }

    #[test]
    fn remove_out_of_range_is_an_error() {
        let mut track = Track::default_loop();
        assert!(RemoveControlPoint::new(7).execute(&mut track).is_err());
        assert_eq!(track.len(), 4);
    }

    #[test]
    fn roll_rotates_orientation_about_axis() {
        let mut track = Track::default_loop();
        let up = RollControlPoint::new(0, Vector3::x(), FRAC_PI_2)
            .execute(&mut track)
            .unwrap();
        assert_relative_eq!(up, Vector3::z(), epsilon = 1e-12);
        assert_relative_eq!(track.point(0).unwrap().orientation, Vector3::z(), epsilon = 1e-12);
    }

    #[test]
    fn roll_with_zero_axis_is_rejected() {
        let mut track = Track::default_loop();
        let err = RollControlPoint::new(0, Vector3::zeros(), 1.0)
            .execute(&mut track)
            .unwrap_err();
        assert!(matches!(
            err,
            TrackcurveError::Geometry(GeometryError::ZeroVector)
        ));
    }
}
