use tracing::{debug, warn};

use crate::error::{EditError, Result};
use crate::geometry::Plane;
use crate::math::{line_plane_intersect, LinePlaneRelation, Point3, Vector3, TOLERANCE};
use crate::track::Track;

use super::MouseRay;

/// How a dragged control point may move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragConstraint {
    /// Move within the plane through the point that faces the camera.
    #[default]
    Free,
    /// Move along the vertical axis through the point only.
    Vertical,
}

/// Moves the selected control point so that it follows the mouse ray.
pub struct DragControlPoint {
    ray: MouseRay,
    constraint: DragConstraint,
}

impl DragControlPoint {
    /// Creates a new `DragControlPoint` operation.
    #[must_use]
    pub fn new(ray: MouseRay, constraint: DragConstraint) -> Self {
        Self { ray, constraint }
    }

    /// Executes the drag on `track`.
    ///
    /// Returns the position written to the selected point, or `None` when
    /// nothing is selected. A ray that cannot meet the constraint plane leaves
    /// the point where it was.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::SelectionOutOfRange`] if `selection` does not name a
    /// control point of `track`.
    pub fn execute(&self, track: &mut Track, selection: Option<usize>) -> Result<Option<Point3>> {
        let Some(index) = selection else {
            return Ok(None);
        };
        let len = track.len();
        let point = track
            .point_mut(index)
            .map_err(|_| EditError::SelectionOutOfRange { index, len })?;

        let old = point.position;
        let new = self.target(&old).unwrap_or_else(|| {
            warn!(index, "drag ray misses the constraint plane, keeping position");
            old
        });
        point.position = new;

        debug!(index, x = new.x, y = new.y, z = new.z, constraint = ?self.constraint, "dragged control point");
        Ok(Some(new))
    }

    /// Where the ray meets the constraint surface anchored at `old`.
    fn target(&self, old: &Point3) -> Option<Point3> {
        match self.constraint {
            DragConstraint::Free => self.intersect(old, self.ray.direction),
            DragConstraint::Vertical => {
                let d = &self.ray.direction;
                let facing = Vector3::new(d.x, 0.0, d.z);
                self.intersect(old, facing)
                    .map(|hit| Point3::new(old.x, hit.y, old.z))
            }
        }
    }

    fn intersect(&self, anchor: &Point3, normal: Vector3) -> Option<Point3> {
        if normal.norm() < TOLERANCE {
            return None;
        }
        let plane = Plane::from_normal(*anchor, normal).ok()?;
        match line_plane_intersect(&self.ray.origin, &self.ray.direction, &plane) {
            LinePlaneRelation::Point { point, .. } => Some(point),
            LinePlaneRelation::Parallel | LinePlaneRelation::OnPlane => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::error::TrackcurveError;
    use crate::math::intersect_3d::signed_distance_to_plane;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn v(x: f64, y: f64, z: f64) -> Vector3 {
        Vector3::new(x, y, z)
    }

    #[test]
    fn no_selection_is_a_no_op() {
        let mut track = Track::default_loop();
        let before = track.clone();
        let ray = MouseRay::new(p(0.0, 100.0, 0.0), v(0.0, -1.0, 0.0));
        let moved = DragControlPoint::new(ray, DragConstraint::Free)
            .execute(&mut track, None)
            .unwrap();
        assert_eq!(moved, None);
        assert_eq!(track, before);
    }

    #[test]
    fn ray_through_point_leaves_it_in_place() {
        let mut track = Track::default_loop();
        let old = track.point(1).unwrap().position;
        let eye = p(20.0, 80.0, 120.0);
        let ray = MouseRay::through(eye, old + (old - eye));
        for constraint in [DragConstraint::Free, DragConstraint::Vertical] {
            DragControlPoint::new(ray, constraint)
                .execute(&mut track, Some(1))
                .unwrap();
            assert_relative_eq!(track.point(1).unwrap().position, old, epsilon = 1e-9);
        }
    }

    #[test]
    fn free_drag_stays_on_camera_facing_plane() {
        let mut track = Track::default_loop();
        let old = track.point(0).unwrap().position;
        let ray = MouseRay::new(p(60.0, 50.0, 10.0), v(-0.2, -1.0, -0.3));
        let new = DragControlPoint::new(ray, DragConstraint::Free)
            .execute(&mut track, Some(0))
            .unwrap()
            .unwrap();

        let plane = Plane::from_normal(old, ray.direction).unwrap();
        assert!(signed_distance_to_plane(&new, &plane).abs() < 1e-9);
        // The new position is where the ray pierces that plane.
        let t = (new - ray.origin).dot(&ray.direction) / ray.direction.norm_squared();
        assert_relative_eq!(ray.at(t), new, epsilon = 1e-9);
        assert_eq!(track.point(0).unwrap().position, new);
    }

    #[test]
    fn free_drag_from_above_moves_horizontally() {
        let mut track = Track::default_loop();
        let ray = MouseRay::new(p(42.0, 100.0, 7.0), v(0.0, -1.0, 0.0));
        let new = DragControlPoint::new(ray, DragConstraint::Free)
            .execute(&mut track, Some(0))
            .unwrap()
            .unwrap();
        assert_relative_eq!(new, p(42.0, 5.0, 7.0), epsilon = 1e-9);
    }

    #[test]
    fn vertical_drag_changes_height_only() {
        let mut track = Track::default_loop();
        let old = track.point(0).unwrap().position;
        // Looking along -X at the point from the side, aiming 10 units higher.
        let ray = MouseRay::through(p(100.0, 15.0, 3.0), p(50.0, 15.0, 3.0));
        let new = DragControlPoint::new(ray, DragConstraint::Vertical)
            .execute(&mut track, Some(0))
            .unwrap()
            .unwrap();
        assert_relative_eq!(new, p(old.x, 15.0, old.z), epsilon = 1e-9);
    }

    #[test]
    fn vertical_drag_looking_straight_down_keeps_position() {
        let mut track = Track::default_loop();
        let old = track.point(2).unwrap().position;
        let ray = MouseRay::new(p(-40.0, 100.0, 3.0), v(0.0, -1.0, 0.0));
        let new = DragControlPoint::new(ray, DragConstraint::Vertical)
            .execute(&mut track, Some(2))
            .unwrap();
        assert_eq!(new, Some(old));
        assert_eq!(track.point(2).unwrap().position, old);
    }

    #[test]
    fn zero_direction_keeps_position() {
        let mut track = Track::default_loop();
        let old = track.point(3).unwrap().position;
        let ray = MouseRay::new(p(1.0, 2.0, 3.0), Vector3::zeros());
        DragControlPoint::new(ray, DragConstraint::Free)
            .execute(&mut track, Some(3))
            .unwrap();
        assert_eq!(track.point(3).unwrap().position, old);
    }

    #[test]
    fn drag_touches_only_the_selected_point() {
        let mut track = Track::default_loop();
        let before = track.clone();
        let ray = MouseRay::new(p(0.0, 100.0, 0.0), v(0.1, -1.0, 0.1));
        DragControlPoint::new(ray, DragConstraint::Free)
            .execute(&mut track, Some(1))
            .unwrap();
        assert_eq!(track.len(), before.len());
        for i in [0, 2, 3] {
            assert_eq!(track.point(i).unwrap(), before.point(i).unwrap());
        }
        assert_eq!(
            track.point(1).unwrap().orientation,
            before.point(1).unwrap().orientation
        );
    }

    #[test]
    fn stale_selection_is_an_error() {
        let mut track = Track::default_loop();
        let ray = MouseRay::new(p(0.0, 100.0, 0.0), v(0.0, -1.0, 0.0));
        let err = DragControlPoint::new(ray, DragConstraint::Free)
            .execute(&mut track, Some(9))
            .unwrap_err();
        assert!(matches!(
            err,
            TrackcurveError::Edit(EditError::SelectionOutOfRange { index: 9, len: 4 })
        ));
    }
}
