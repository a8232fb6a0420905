use crate::operations::analytics::VertexRecord;

/// Header row of the vertex table export.
pub const CSV_HEADER: &str = "Index,X,Y,Bearing,Bearing DMS,Bend Angle,Bend Direction,Segment Length (m),Distance From Start (m)";

/// Renders vertex records as CSV.
///
/// One header row, then one row per record. X and Y have 6 decimals, every
/// other number 2. Rows are separated by `\n` with no trailing newline.
#[must_use]
pub fn vertices_to_csv(records: &[VertexRecord]) -> String {
    let mut out = String::from(CSV_HEADER);
    for r in records {
        out.push_str(&format!(
            "\n{},{:.6},{:.6},{:.2},{},{:.2},{},{:.2},{:.2}",
            r.index,
            r.x,
            r.y,
            r.bearing,
            r.bearing_dms,
            r.bend_angle,
            r.bend_direction,
            r.segment_length,
            r.distance_from_start
        ));
    }
    out
}
