mod control_point;

pub use control_point::ControlPoint;

use crate::error::{Result, TrackError};
use crate::math::{wrap_index, Point3};

/// Minimum number of control points a track needs before it can be sampled.
pub const MIN_POINTS: usize = 2;

/// An ordered, closed loop of control points.
///
/// The last point connects back to the first. Points are identified by their
/// position in the sequence only, so inserting or removing a point shifts the
/// indices of everything after it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Track {
    points: Vec<ControlPoint>,
}

impl Track {
    /// Creates a track from an ordered list of control points.
    #[must_use]
    pub fn new(points: Vec<ControlPoint>) -> Self {
        Self { points }
    }

    /// The loop a fresh viewer starts with: four points on a circle of radius
    /// 50, five units above the ground, all oriented along `+Y`.
    #[must_use]
    pub fn default_loop() -> Self {
        Self::new(vec![
            ControlPoint::new(Point3::new(50.0, 5.0, 0.0)),
            ControlPoint::new(Point3::new(0.0, 5.0, 50.0)),
            ControlPoint::new(Point3::new(-50.0, 5.0, 0.0)),
            ControlPoint::new(Point3::new(0.0, 5.0, -50.0)),
        ])
    }

    /// Number of control points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the track has no control points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All control points in loop order.
    #[must_use]
    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// Iterates over the control points in loop order.
    pub fn iter(&self) -> std::slice::Iter<'_, ControlPoint> {
        self.points.iter()
    }

    /// Returns the control point at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::IndexOutOfRange`] if `index >= len()`.
    pub fn point(&self, index: usize) -> Result<&ControlPoint> {
        let len = self.points.len();
        self.points
            .get(index)
            .ok_or_else(|| TrackError::IndexOutOfRange { index, len }.into())
    }

    /// Returns a mutable reference to the control point at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::IndexOutOfRange`] if `index >= len()`.
    pub fn point_mut(&mut self, index: usize) -> Result<&mut ControlPoint> {
        let len = self.points.len();
        self.points
            .get_mut(index)
            .ok_or_else(|| TrackError::IndexOutOfRange { index, len }.into())
    }

    /// Returns the control point at a signed index, wrapping around the loop.
    ///
    /// The track must not be empty.
    #[must_use]
    pub fn point_wrapped(&self, index: isize) -> &ControlPoint {
        &self.points[wrap_index(index, self.points.len())]
    }

    /// Checks that the track has enough points to be sampled.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::TooFewPoints`] if the track has fewer than
    /// [`MIN_POINTS`] control points.
    pub fn ensure_sampleable(&self) -> Result<()> {
        if self.points.len() < MIN_POINTS {
            return Err(TrackError::TooFewPoints {
                count: self.points.len(),
                min: MIN_POINTS,
            }
            .into());
        }
        Ok(())
    }

    pub(crate) fn insert(&mut self, index: usize, point: ControlPoint) {
        self.points.insert(index, point);
    }

    pub(crate) fn remove(&mut self, index: usize) -> ControlPoint {
        self.points.remove(index)
    }
}

impl<'a> IntoIterator for &'a Track {
    type Item = &'a ControlPoint;
    type IntoIter = std::slice::Iter<'a, ControlPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
