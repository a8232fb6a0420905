mod line_offset_2d;
mod row_corridor;
mod row_polygon;

pub use line_offset_2d::LineOffset2D;
pub use row_corridor::{RowCorridor, RowSummary};
pub use row_polygon::RowPolygon;

/// Parameters controlling miter-join line offsets.
#[derive(Debug, Clone, Copy)]
pub struct OffsetParams {
    /// Maximum miter distance as a multiple of `|distance|`. Longer miters are
    /// pulled back along the miter direction to this length. `None` keeps the
    /// exact miter.
    pub miter_limit: Option<f64>,
    /// When `cos(turn between consecutive segments)` is below this, the vertex
    /// is a reversal and the offset fails.
    pub reversal_cos: f64,
}

impl Default for OffsetParams {
    fn default() -> Self {
        Self {
            miter_limit: None,
            reversal_cos: -0.98,
        }
    }
}

use crate::engine::GeometryEngine;
use crate::error::Result;
use crate::geometry::{Centerline, Polygon};

/// Builds the ROW polygon of `centerline` with default offset parameters.
///
/// # Errors
///
/// See [`RowPolygon::execute`].
pub fn build_row_polygon(
    centerline: &Centerline,
    left_width: f64,
    right_width: f64,
    engine: &impl GeometryEngine,
) -> Result<Polygon> {
    RowPolygon::new(centerline, left_width, right_width).execute(engine)
}
