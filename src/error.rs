use thiserror::Error;

/// Errors reported before any clipping work starts.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ClipError {
    /// A polyline needs at least one vertex.
    #[error("cannot clip an empty polyline")]
    EmptyInput,
    /// The box has a minimum greater than its maximum on some axis.
    #[error("bounding box is inverted: min ({min_x}, {min_y}) must not exceed max ({max_x}, {max_y})")]
    InvalidBoundingBox {
        min_x: f64,
        min_y: f64,
        max_x: f64,
        max_y: f64,
    },
    /// One of the box coordinates is NaN or infinite.
    #[error("bounding box coordinates must be finite")]
    NonFiniteBoundingBox,
}
