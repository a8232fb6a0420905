use serde_json::{json, Value};

use crate::error::{ExportError, Result};
use crate::geometry::{Centerline, Polygon};
use crate::math::Point2;
use crate::operations::analytics::VertexRecord;

fn coords(points: &[Point2]) -> Value {
    Value::Array(points.iter().map(|p| json!([p.x, p.y])).collect())
}

/// A centerline as a GeoJSON `LineString` feature with empty properties.
#[must_use]
pub fn line_to_geojson(centerline: &Centerline) -> Value {
    json!({
        "type": "Feature",
        "geometry": {
            "type": "LineString",
            "coordinates": coords(centerline.points()),
        },
        "properties": {},
    })
}

/// A polygon as a GeoJSON `Polygon` feature with empty properties.
#[must_use]
pub fn polygon_to_geojson(polygon: &Polygon) -> Value {
    let rings: Vec<Value> = polygon.rings.iter().map(|ring| coords(ring)).collect();
    json!({
        "type": "Feature",
        "geometry": {
            "type": "Polygon",
            "coordinates": rings,
        },
        "properties": {},
    })
}

/// Vertex records as a `FeatureCollection` of `Point` features carrying the
/// record attributes as properties.
#[must_use]
pub fn vertices_to_geojson(records: &[VertexRecord]) -> Value {
    let features: Vec<Value> = records
        .iter()
        .map(|r| {
            json!({
                "type": "Feature",
                "geometry": {
                    "type": "Point",
                    "coordinates": [r.x, r.y],
                },
                "properties": {
                    "index": r.index,
                    "bearing": r.bearing,
                    "bearingDms": r.bearing_dms,
                    "bendAngle": r.bend_angle,
                    "bendDirection": r.bend_direction,
                    "segmentLength": r.segment_length,
                    "distanceFromStart": r.distance_from_start,
                },
            })
        })
        .collect();
    json!({
        "type": "FeatureCollection",
        "features": features,
    })
}

/// Pretty-prints a GeoJSON value.
///
/// # Errors
///
/// Returns `ExportError::Json` if serialization fails.
pub fn to_geojson_string(value: &Value) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|err| ExportError::Json(err).into())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::SpatialReference;

    #[test]
    fn line_feature() {
        let cl = Centerline::from_xy(&[(0.0, 0.0), (0.0, 100.0)], SpatialReference::wgs84());
        let value = line_to_geojson(&cl);
        assert_eq!(value["type"], "Feature");
        assert_eq!(value["geometry"]["type"], "LineString");
        assert_eq!(value["geometry"]["coordinates"], json!([[0.0, 0.0], [0.0, 100.0]]));
        assert_eq!(value["properties"], json!({}));
        assert!(value.get("crs").is_none());
    }

    #[test]
    fn polygon_feature() {
        let ring = vec![
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 100.0),
            Point2::new(-10.0, 100.0),
            Point2::new(-10.0, 0.0),
            Point2::new(10.0, 0.0),
        ];
        let poly = Polygon::from_ring(ring, SpatialReference::default());
        let value = polygon_to_geojson(&poly);
        assert_eq!(value["geometry"]["type"], "Polygon");
        let rings = value["geometry"]["coordinates"].as_array().unwrap();
        assert_eq!(rings.len(), 1);
        assert_eq!(rings[0].as_array().unwrap().len(), 5);
        assert_eq!(rings[0][0], rings[0][4]);
        assert_eq!(value["properties"], json!({}));
    }

    #[test]
    fn pretty_string_parses_back() {
        let cl = Centerline::from_xy(&[(1.5, 2.5), (3.0, 4.0)], SpatialReference::default());
        let text = to_geojson_string(&line_to_geojson(&cl)).unwrap();
        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, line_to_geojson(&cl));
    }
}
