use crate::engine::GeometryEngine;
use crate::geometry::Polygon;

/// Computes the area of a polygon in square meters.
///
/// The first ring is the exterior and any further rings are holes. The result
/// is never negative, whatever the ring winding.
pub struct Area<'a> {
    polygon: &'a Polygon,
}

impl<'a> Area<'a> {
    /// Creates a new `Area` query.
    #[must_use]
    pub fn new(polygon: &'a Polygon) -> Self {
        Self { polygon }
    }

    /// Executes the query, returning the area.
    #[must_use]
    pub fn execute(&self, engine: &impl GeometryEngine) -> f64 {
        let mut rings = self.polygon.rings.iter();
        let Some(exterior) = rings.next() else {
            return 0.0;
        };
        let holes: f64 = rings.map(|ring| engine.area(ring).abs()).sum();
        (engine.area(exterior).abs() - holes).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{GeodesicEngine, PlanarEngine};
    use crate::operations::query::calculate_area;
    use crate::geometry::SpatialReference;
    use crate::math::Point2;
    use approx::assert_relative_eq;

    fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Vec<Point2> {
        vec![
            Point2::new(x0, y0),
            Point2::new(x1, y0),
            Point2::new(x1, y1),
            Point2::new(x0, y1),
            Point2::new(x0, y0),
        ]
    }

    #[test]
    fn rectangle_area() {
        let poly = Polygon::from_ring(rect(0.0, 0.0, 20.0, 100.0), SpatialReference::default());
        assert_relative_eq!(Area::new(&poly).execute(&PlanarEngine), 2000.0);
    }

    #[test]
    fn clockwise_ring_is_positive() {
        let mut ring = rect(0.0, 0.0, 20.0, 100.0);
        ring.reverse();
        let poly = Polygon::from_ring(ring, SpatialReference::default());
        assert_relative_eq!(Area::new(&poly).execute(&PlanarEngine), 2000.0);
    }

    #[test]
    fn holes_are_subtracted() {
        let poly = Polygon {
            rings: vec![rect(0.0, 0.0, 10.0, 10.0), rect(2.0, 2.0, 4.0, 4.0)],
            spatial_reference: SpatialReference::default(),
        };
        assert_relative_eq!(Area::new(&poly).execute(&PlanarEngine), 96.0);
    }

    #[test]
    fn wgs84_area_ignores_winding_and_subtracts_holes() {
        let outer = rect(0.0, 0.0, 0.001, 0.001);
        let mut hole = rect(0.0002, 0.0002, 0.0004, 0.0004);
        hole.reverse();

        let ccw = Polygon::from_ring(outer.clone(), SpatialReference::wgs84());
        let mut reversed = outer.clone();
        reversed.reverse();
        let cw = Polygon::from_ring(reversed, SpatialReference::wgs84());

        let ccw_area = calculate_area(&ccw, &GeodesicEngine);
        let cw_area = calculate_area(&cw, &GeodesicEngine);
        assert!(ccw_area > 12_000.0 && ccw_area < 12_500.0, "got {ccw_area}");
        assert_relative_eq!(cw_area, ccw_area, max_relative = 1e-9);

        let holed = Polygon {
            rings: vec![outer, hole],
            spatial_reference: SpatialReference::wgs84(),
        };
        let holed_area = calculate_area(&holed, &GeodesicEngine);
        // The hole covers 4% of the outer square.
        assert_relative_eq!(holed_area, ccw_area * 0.96, max_relative = 1e-3);
    }

    #[test]
    fn empty_polygon_has_no_area() {
        let poly = Polygon {
            rings: Vec::new(),
            spatial_reference: SpatialReference::default(),
        };
        assert_relative_eq!(Area::new(&poly).execute(&PlanarEngine), 0.0);
    }
}
