//! Serialization of engine output for downstream consumers.

mod csv;
mod geojson;

pub use csv::{vertices_to_csv, CSV_HEADER};
pub use geojson::{line_to_geojson, polygon_to_geojson, to_geojson_string, vertices_to_geojson};
