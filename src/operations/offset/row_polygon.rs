use tracing::{debug, warn};

use super::OffsetParams;
use crate::engine::GeometryEngine;
use crate::error::{OffsetSide, OperationError, Result};
use crate::geometry::{Centerline, Polygon};
use crate::math::Point2;

/// Builds the right-of-way polygon of a centerline.
///
/// The ring is the `+left_width` offset line, then the `-right_width` offset
/// line reversed, then the first point again. For a centerline of `n` vertices
/// the ring has `2n + 1` points.
#[derive(Debug)]
pub struct RowPolygon<'a> {
    centerline: &'a Centerline,
    left_width: f64,
    right_width: f64,
    params: OffsetParams,
}

impl<'a> RowPolygon<'a> {
    /// Creates a new ROW polygon operation. Widths are in meters.
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
    /// - `OperationError::InvalidInput` if a width is negative or non-finite,
    ///   or both widths are zero
    /// - `OperationError::OffsetFailure` if either offset line cannot be built
    pub fn execute(&self, engine: &impl GeometryEngine) -> Result<Polygon> {
        self.validate_widths()?;

        let points = self.centerline.points();
        let left = self.offset_side(engine, OffsetSide::Left, self.left_width)?;
        let right = self.offset_side(engine, OffsetSide::Right, -self.right_width)?;

        let mut ring = Vec::with_capacity(left.len() + right.len() + 1);
        ring.extend_from_slice(&left);
        ring.extend(right.iter().rev());
        ring.push(left[0]);

        debug!(
            vertices = points.len(),
            ring = ring.len(),
            left_width = self.left_width,
            right_width = self.right_width,
            "row polygon built"
        );
        Ok(Polygon::from_ring(
            ring,
            self.centerline.spatial_reference(),
        ))
    }

    fn validate_widths(&self) -> Result<()> {
        for (name, width) in [("left", self.left_width), ("right", self.right_width)] {
            if !width.is_finite() || width < 0.0 {
                return Err(OperationError::InvalidInput(format!(
                    "{name} width must be a non-negative number, got {width}"
                ))
                .into());
            }
        }
        if self.left_width <= 0.0 && self.right_width <= 0.0 {
            return Err(OperationError::InvalidInput(
                "left and right widths are both zero".to_owned(),
            )
            .into());
        }
        Ok(())
    }

    fn offset_side(
        &self,
        engine: &impl GeometryEngine,
        side: OffsetSide,
        distance: f64,
    ) -> Result<Vec<Point2>> {
        let result = engine
            .offset_line(self.centerline.points(), distance, &self.params)
            .and_then(|line| {
                if line.is_empty() {
                    Err(OperationError::InvalidInput("offset returned no points".to_owned())
                        .into())
                } else {
                    Ok(line)
                }
            });
        result.map_err(|err| {
            warn!(%side, error = %err, "offset failed");
            OperationError::OffsetFailure {
                side,
                reason: err.to_string(),
            }
            .into()
        })
    }
}
