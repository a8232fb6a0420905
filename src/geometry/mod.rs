pub mod centerline;
pub mod polygon;
pub mod spatial_reference;

pub use centerline::Centerline;
pub use polygon::Polygon;
pub use spatial_reference::SpatialReference;
