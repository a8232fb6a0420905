use geo::{Coord, Geodesic, GeodesicArea, Length, LineString, Winding};

use super::GeometryEngine;
use crate::error::Result;
use crate::math::Point2;
use crate::operations::offset::{LineOffset2D, OffsetParams};

/// Mean earth radius in meters, used for the local offset plane.
const EARTH_RADIUS: f64 = 6_371_008.8;

/// Engine for WGS84 coordinates, `x` = longitude and `y` = latitude in degrees.
///
/// Lengths and areas are geodesic on the ellipsoid. Offsets are built in a
/// local equirectangular plane centered on the first vertex, which is accurate
/// for corridor-scale widths.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeodesicEngine;

/// Equirectangular projection anchored at one lon/lat point.
struct LocalPlane {
    origin: Point2,
    meters_per_deg_lat: f64,
    meters_per_deg_lon: f64,
}

impl LocalPlane {
    fn new(origin: Point2) -> Self {
        let meters_per_deg_lat = EARTH_RADIUS.to_radians();
        Self {
            origin,
            meters_per_deg_lat,
            meters_per_deg_lon: meters_per_deg_lat * origin.y.to_radians().cos(),
        }
    }

    fn project(&self, p: &Point2) -> Point2 {
        Point2::new(
            wrap_longitude(p.x - self.origin.x) * self.meters_per_deg_lon,
            (p.y - self.origin.y) * self.meters_per_deg_lat,
        )
    }

    fn unproject(&self, p: &Point2) -> Point2 {
        Point2::new(
            wrap_longitude(self.origin.x + p.x / self.meters_per_deg_lon),
            self.origin.y + p.y / self.meters_per_deg_lat,
        )
    }
}

/// Wraps a longitude or longitude difference into `[-180, 180)`.
fn wrap_longitude(degrees: f64) -> f64 {
    (degrees + 180.0).rem_euclid(360.0) - 180.0
}

fn to_line_string(points: &[Point2]) -> LineString {
    LineString::new(points.iter().map(|p| Coord { x: p.x, y: p.y }).collect())
}

impl GeometryEngine for GeodesicEngine {
    fn offset_line(
        &self,
        points: &[Point2],
        distance: f64,
        params: &OffsetParams,
    ) -> Result<Vec<Point2>> {
        let Some(origin) = points.first() else {
            return LineOffset2D::new(points, -distance).execute();
        };
        let plane = LocalPlane::new(*origin);
        let projected: Vec<Point2> = points.iter().map(|p| plane.project(p)).collect();
        let offset = LineOffset2D::new(&projected, -distance)
            .with_params(*params)
            .execute()?;
        Ok(offset.iter().map(|p| plane.unproject(p)).collect())
    }

    fn length(&self, points: &[Point2]) -> f64 {
        if points.len() < 2 {
            return 0.0;
        }
        Geodesic.length(&to_line_string(points))
    }

    fn area(&self, ring: &[Point2]) -> f64 {
        if ring.len() < 3 {
            return 0.0;
        }
        // A clockwise exterior is measured as the rest of the globe.
        let mut exterior = to_line_string(ring);
        exterior.close();
        exterior.make_ccw_winding();
        geo::Polygon::new(exterior, Vec::new()).geodesic_area_unsigned()
    }
}
