use super::SpatialReference;
use crate::math::Point2;

/// A polygon as a list of closed rings (first point == last point).
///
/// Corridor polygons have a single exterior ring.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub rings: Vec<Vec<Point2>>,
    pub spatial_reference: SpatialReference,
}

impl Polygon {
    /// Creates a single-ring polygon.
    #[must_use]
    pub fn from_ring(ring: Vec<Point2>, spatial_reference: SpatialReference) -> Self {
        Self {
            rings: vec![ring],
            spatial_reference,
        }
    }

    /// The first ring, if any.
    #[must_use]
    pub fn exterior(&self) -> Option<&[Point2]> {
        self.rings.first().map(Vec::as_slice)
    }

    /// Total number of stored points across all rings, closing points included.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.rings.iter().map(Vec::len).sum()
    }

    /// Returns `true` if every ring ends where it starts.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.rings
            .iter()
            .all(|ring| ring.len() >= 2 && ring.first() == ring.last())
    }
}
