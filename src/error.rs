use std::fmt;

use thiserror::Error;

/// Top-level error type for the right-of-way geometry engine.
#[derive(Debug, Error)]
pub enum RowgeomError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

impl RowgeomError {
    /// Returns `true` if this error is an offset failure.
    ///
    /// Callers use this to fall back to showing the bare centerline.
    #[must_use]
    pub fn is_offset_failure(&self) -> bool {
        matches!(
            self,
            Self::Operation(OperationError::OffsetFailure { .. })
        )
    }
}

/// Errors related to input geometry.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("non-finite coordinate at vertex {index}")]
    NonFinite { index: usize },

    #[error("at least {required} points are required, got {actual}")]
    TooFewPoints { required: usize, actual: usize },
}

/// Side of the centerline an offset was computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetSide {
    Left,
    Right,
}

impl fmt::Display for OffsetSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
        }
    }
}

/// Errors related to corridor operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("{side} offset failed: {reason}")]
    OffsetFailure { side: OffsetSide, reason: String },
}

/// Errors raised while serializing engine output.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("json serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for results using [`RowgeomError`].
pub type Result<T> = std::result::Result<T, RowgeomError>;
