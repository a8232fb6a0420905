//! Geometry capabilities the corridor operations are built on.
//!
//! Operations never compute lengths, areas or offsets themselves; they ask a
//! [`GeometryEngine`]. [`PlanarEngine`] works on projected meters,
//! [`GeodesicEngine`] on WGS84 longitude/latitude degrees.

mod geodesic;
mod planar;

pub use geodesic::GeodesicEngine;
pub use planar::PlanarEngine;

use crate::error::Result;
use crate::math::Point2;
use crate::operations::offset::OffsetParams;

/// Offset, length and area primitives over one coordinate reference.
pub trait GeometryEngine {
    /// Offsets an open path with miter joins.
    ///
    /// A positive `distance` offsets to the right of the travel direction and a
    /// negative one to the left, matching the host mapping SDK. The result has
    /// one point per input vertex.
    ///
    /// # Errors
    ///
    /// Returns an error when no valid offset line exists for the input.
    fn offset_line(
        &self,
        points: &[Point2],
        distance: f64,
        params: &OffsetParams,
    ) -> Result<Vec<Point2>>;

    /// Length of a path in meters.
    fn length(&self, points: &[Point2]) -> f64;

    /// Area enclosed by a ring in square meters. The sign is not significant.
    fn area(&self, ring: &[Point2]) -> f64;
}
