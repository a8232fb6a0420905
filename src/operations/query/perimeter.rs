use crate::engine::GeometryEngine;
use crate::geometry::Polygon;

/// Computes the boundary length of a polygon in meters, summed over all rings.
pub struct Perimeter<'a> {
    polygon: &'a Polygon,
}

impl<'a> Perimeter<'a> {
    /// Creates a new `Perimeter` query.
    #[must_use]
    pub fn new(polygon: &'a Polygon) -> Self {
        Self { polygon }
    }

    /// Executes the query, returning the perimeter.
    #[must_use]
    pub fn execute(&self, engine: &impl GeometryEngine) -> f64 {
        self.polygon
            .rings
            .iter()
            .map(|ring| engine.length(ring))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::PlanarEngine;
    use crate::geometry::SpatialReference;
    use crate::math::Point2;
    use approx::assert_relative_eq;

    #[test]
    fn rectangle_perimeter() {
        let ring = vec![
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 100.0),
            Point2::new(-10.0, 100.0),
            Point2::new(-10.0, 0.0),
            Point2::new(10.0, 0.0),
        ];
        let poly = Polygon::from_ring(ring, SpatialReference::default());
        assert_relative_eq!(Perimeter::new(&poly).execute(&PlanarEngine), 240.0);
    }

    #[test]
    fn sums_every_ring() {
        let square = |s: f64| {
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(s, 0.0),
                Point2::new(s, s),
                Point2::new(0.0, s),
                Point2::new(0.0, 0.0),
            ]
        };
        let poly = Polygon {
            rings: vec![square(10.0), square(1.0)],
            spatial_reference: SpatialReference::default(),
        };
        assert_relative_eq!(Perimeter::new(&poly).execute(&PlanarEngine), 44.0);
    }
}
