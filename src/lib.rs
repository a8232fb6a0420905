//! Right-of-way corridor geometry.
//!
//! Turns a drawn centerline into a right-of-way polygon, measures it, and
//! derives per-vertex survey analytics (bearings, bends, distances).

pub mod engine;
pub mod error;
pub mod export;
pub mod geometry;
pub mod math;
pub mod operations;

pub use engine::{GeodesicEngine, GeometryEngine, PlanarEngine};
pub use error::{Result, RowgeomError};
pub use geometry::{Centerline, Polygon, SpatialReference};
pub use operations::analytics::{compute_vertex_analytics, BendDirection, VertexRecord};
pub use operations::offset::build_row_polygon;
pub use operations::query::{calculate_area, calculate_perimeter};
