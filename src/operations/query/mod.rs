mod area;
mod perimeter;

pub use area::Area;
pub use perimeter::Perimeter;

use crate::engine::GeometryEngine;
use crate::geometry::Polygon;

/// Area of `polygon` in square meters. Never negative.
#[must_use]
pub fn calculate_area(polygon: &Polygon, engine: &impl GeometryEngine) -> f64 {
    Area::new(polygon).execute(engine)
}

/// Boundary length of `polygon` in meters, over all rings.
#[must_use]
pub fn calculate_perimeter(polygon: &Polygon, engine: &impl GeometryEngine) -> f64 {
    Perimeter::new(polygon).execute(engine)
}
