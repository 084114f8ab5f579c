use tracing::debug;

use crate::error::Result;
use crate::math::Point3;
use crate::track::{ControlPoint, Track};

use super::{
    DragConstraint, DragControlPoint, InsertControlPoint, MouseRay, PickControlPoint, PickHit,
    RemoveControlPoint,
};

/// Mouse buttons the editor reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

/// Per-view editing state: which control point is selected and which mouse
/// button is held.
///
/// The host feeds mouse events in and owns the [`Track`]; the session never
/// keeps a reference to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorSession {
    selected: Option<usize>,
    held: Option<MouseButton>,
}

impl EditorSession {
    /// Creates a session with nothing selected and no button held.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The selected control point index.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// The mouse button currently held, if any.
    #[must_use]
    pub fn held_button(&self) -> Option<MouseButton> {
        self.held
    }

    /// Replaces the selection.
    pub fn select(&mut self, selection: Option<usize>) {
        if self.selected != selection {
            debug!(?selection, "selection changed");
        }
        self.selected = selection;
    }

    /// Handles a button press. A left click re-picks the selection from the
    /// hits of the selection pass under the cursor.
    pub fn press(&mut self, button: MouseButton, hits: &[PickHit], track_len: usize) {
        self.held = Some(button);
        if button == MouseButton::Left {
            self.select(PickControlPoint::new(hits).execute(track_len));
        }
    }

    /// Handles a button release.
    pub fn release(&mut self) {
        self.held = None;
    }

    /// Handles a drag event. Only a left-button drag moves the selected point.
    ///
    /// # Errors
    ///
    /// Returns an error if the selection no longer names a point of `track`.
    pub fn drag(
        &self,
        track: &mut Track,
        ray: MouseRay,
        constraint: DragConstraint,
    ) -> Result<Option<Point3>> {
        if self.held != Some(MouseButton::Left) {
            return Ok(None);
        }
        DragControlPoint::new(ray, constraint).execute(track, self.selected)
    }

    /// Inserts a point after the selection (or after the last point when
    /// nothing is selected) and selects it.
    ///
    /// # Errors
    ///
    /// Returns an error if the track is empty or the selection is stale.
    pub fn insert_point(&mut self, track: &mut Track) -> Result<usize> {
        let after = self
            .selected
            .unwrap_or_else(|| track.len().saturating_sub(1));
        let index = InsertControlPoint::new(after).execute(track)?;
        self.select(Some(index));
        Ok(index)
    }

    /// Removes the selected point (or the last point when nothing is selected)
    /// and clears the selection.
    ///
    /// # Errors
    ///
    /// Returns an error if the track would drop below two points or the
    /// selection is stale.
    pub fn remove_point(&mut self, track: &mut Track) -> Result<ControlPoint> {
        let index = self
            .selected
            .unwrap_or_else(|| track.len().saturating_sub(1));
        let removed = RemoveControlPoint::new(index).execute(track)?;
        self.select(None);
        Ok(removed)
    }

    /// One-line description of the selected point, as printed by the viewer's
    /// inspect key.
    #[must_use]
    pub fn describe_selection(&self, track: &Track) -> String {
        match self.selected.and_then(|index| track.point(index).ok().map(|cp| (index, cp))) {
            Some((index, cp)) => format!("Selected({index}) {cp}"),
            None => "Nothing Selected".to_owned(),
        }
    }
}
