//! Interactive editing of the control point sequence: picking, dragging and
//! structural edits.
//!
//! Nothing in here owns UI state implicitly. The host passes the mouse ray,
//! modifier state and selection in, usually through an [`EditorSession`].

mod drag;
mod pick;
mod ray;
mod session;
mod structure;

pub use drag::{DragConstraint, DragControlPoint};
pub use pick::{parse_select_buffer, PickControlPoint, PickHit};
pub use ray::MouseRay;
pub use session::{EditorSession, MouseButton};
pub use structure::{InsertControlPoint, RemoveControlPoint, RollControlPoint};
