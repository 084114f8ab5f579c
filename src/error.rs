use thiserror::Error;

/// Top-level error type for the trackcurve crate.
#[derive(Debug, Error)]
pub enum TrackcurveError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Track(#[from] TrackError),

    #[error(transparent)]
    Edit(#[from] EditError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),
}

/// Errors related to geometric constructions.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("zero-length vector")]
    ZeroVector,

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors raised by the control point store and the curve sampler.
#[derive(Debug, Error)]
pub enum TrackError {
    #[error("track needs at least {min} control points, has {count}")]
    TooFewPoints { count: usize, min: usize },

    #[error("control point index {index} is out of range for a track of {len} points")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("track parameter is not finite: {0}")]
    NonFiniteParameter(f64),
}

/// Errors related to interactive editing.
#[derive(Debug, Error)]
pub enum EditError {
    #[error("selected control point {index} does not exist (track has {len} points)")]
    SelectionOutOfRange { index: usize, len: usize },

    #[error("malformed selection buffer: {0}")]
    MalformedSelectBuffer(String),
}

/// Errors related to tessellation.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("invalid tessellation parameters: {0}")]
    InvalidParameters(String),
}

/// Convenience type alias for results using [`TrackcurveError`].
pub type Result<T> = std::result::Result<T, TrackcurveError>;
