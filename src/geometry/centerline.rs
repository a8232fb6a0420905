use super::SpatialReference;
use crate::math::Point2;

/// The drawn reference line of a right-of-way corridor.
///
/// A single ordered path of 2D points. Immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct Centerline {
    points: Vec<Point2>,
    spatial_reference: SpatialReference,
}

impl Centerline {
    /// Creates a centerline from its vertices.
    #[must_use]
    pub fn new(points: Vec<Point2>, spatial_reference: SpatialReference) -> Self {
        Self {
            points,
            spatial_reference,
        }
    }

    /// Creates a centerline from `(x, y)` pairs.
    #[must_use]
    pub fn from_xy(coords: &[(f64, f64)], spatial_reference: SpatialReference) -> Self {
        let points = coords.iter().map(|&(x, y)| Point2::new(x, y)).collect();
        Self::new(points, spatial_reference)
    }

    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    #[must_use]
    pub fn spatial_reference(&self) -> SpatialReference {
        self.spatial_reference
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Index of the first vertex with a NaN or infinite coordinate.
    #[must_use]
    pub fn first_non_finite(&self) -> Option<usize> {
        self.points
            .iter()
            .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    }

    /// Returns `true` if every coordinate is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.first_non_finite().is_none()
    }

    /// Returns the same path walked from its last vertex to its first.
    ///
    /// Left and right swap sides on the reversed line.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            points: self.points.iter().rev().copied().collect(),
            spatial_reference: self.spatial_reference,
        }
    }
}
