use super::GeometryEngine;
use crate::error::Result;
use crate::math::polygon_2d::{path_length_2d, signed_area_2d};
use crate::math::Point2;
use crate::operations::offset::{LineOffset2D, OffsetParams};

/// Engine for coordinates already projected to meters on a plane.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanarEngine;

impl GeometryEngine for PlanarEngine {
    fn offset_line(
        &self,
        points: &[Point2],
        distance: f64,
        params: &OffsetParams,
    ) -> Result<Vec<Point2>> {
        // LineOffset2D offsets to the left for positive distances.
        LineOffset2D::new(points, -distance)
            .with_params(*params)
            .execute()
    }

    fn length(&self, points: &[Point2]) -> f64 {
        path_length_2d(points)
    }

    fn area(&self, ring: &[Point2]) -> f64 {
        signed_area_2d(ring)
    }
}
