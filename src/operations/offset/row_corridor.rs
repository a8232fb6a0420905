use super::{OffsetParams, RowPolygon};
use crate::engine::GeometryEngine;
use crate::error::Result;
use crate::geometry::{Centerline, Polygon};
use crate::operations::query::{Area, Perimeter};

/// A built right-of-way polygon with its measurements.
#[derive(Debug, Clone, PartialEq)]
pub struct RowSummary {
    pub polygon: Polygon,
    /// Square meters.
    pub area: f64,
    /// Meters.
    pub perimeter: f64,
    /// Meters along the centerline.
    pub centerline_length: f64,
}

/// Builds a ROW polygon and measures it in one pass.
#[derive(Debug)]
pub struct RowCorridor<'a> {
    centerline: &'a Centerline,
    left_width: f64,
    right_width: f64,
    params: OffsetParams,
}

impl<'a> RowCorridor<'a> {
    #[must_use]
    pub fn new(centerline: &'a Centerline, left_width: f64, right_width: f64) -> Self {
        Self {
            centerline,
            left_width,
            right_width,
            params: OffsetParams::default(),
        }
    }

    /// Sets custom offset parameters.
    #[must_use]
    pub fn with_params(mut self, params: OffsetParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`RowPolygon::execute`].
    pub fn execute(&self, engine: &impl GeometryEngine) -> Result<RowSummary> {
        let polygon = RowPolygon::new(self.centerline, self.left_width, self.right_width)
            .with_params(self.params)
            .execute(engine)?;
        let area = Area::new(&polygon).execute(engine);
        let perimeter = Perimeter::new(&polygon).execute(engine);
        let centerline_length = engine.length(self.centerline.points());
        Ok(RowSummary {
            polygon,
            area,
            perimeter,
            centerline_length,
        })
    }
}
