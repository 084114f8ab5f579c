mod frame;
mod plane;

pub use frame::Frame;
pub use plane::Plane;
