pub mod curve;
pub mod editing;
pub mod error;
pub mod geometry;
pub mod math;
pub mod tessellation;
pub mod track;

pub use curve::{CurveType, SampleTrack, TrackSample};
pub use error::{Result, TrackcurveError};
pub use geometry::Frame;
pub use track::{ControlPoint, Track};
