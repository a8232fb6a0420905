use tracing::trace;

use super::OffsetParams;
use crate::error::{GeometryError, Result};
use crate::math::intersect_2d::{line_line_intersect_2d, point_at};
use crate::math::polygon_2d::{left_normal, segment_direction};
use crate::math::{Point2, Vector2, TOLERANCE};

/// Offsets an open 2D polyline to one side with miter joins.
///
/// The result has exactly one point per input vertex: the end vertices are
/// shifted perpendicular to their segment, and every interior vertex becomes
/// the intersection of the two adjacent offset segments.
///
/// # Algorithm
///
/// 1. **Phase A**: Offset each segment perpendicular to its direction
/// 2. **Phase B**: Intersect consecutive offset segments (miter join)
/// 3. **Phase C**: Reject offsets whose segments run against their source
///    segment, which happens when the offset folds over a tight bend
///
/// # Sign Convention
///
/// - Positive distance: left offset (relative to walking direction)
/// - Negative distance: right offset
#[derive(Debug)]
pub struct LineOffset2D<'a> {
    points: &'a [Point2],
    distance: f64,
    params: OffsetParams,
}

impl<'a> LineOffset2D<'a> {
    /// Creates a new line offset operation.
    #[must_use]
    pub fn new(points: &'a [Point2], distance: f64) -> Self {
        Self {
            points,
            distance,
            params: OffsetParams::default(),
        }
    }

    /// Sets custom offset parameters.
    #[must_use]
    pub fn with_params(mut self, params: OffsetParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the offset operation.
    ///
    /// # Errors
    ///
    /// - `GeometryError::TooFewPoints` if fewer than 2 points are provided
    /// - `GeometryError::NonFinite` if a coordinate is NaN or infinite
    /// - `GeometryError::Degenerate` for zero-length segments, reversals, or
    ///   an offset that folds over itself
    pub fn execute(&self) -> Result<Vec<Point2>> {
        let n = self.points.len();
        if n < 2 {
            return Err(GeometryError::TooFewPoints {
                required: 2,
                actual: n,
            }
            .into());
        }
        if let Some(index) = self
            .points
            .iter()
            .position(|p| !(p.x.is_finite() && p.y.is_finite()))
        {
            return Err(GeometryError::NonFinite { index }.into());
        }
        if !self.distance.is_finite() {
            return Err(GeometryError::Degenerate(format!(
                "offset distance {} is not finite",
                self.distance
            ))
            .into());
        }

        // Phase A: directions and offset segments.
        let directions = self
            .points
            .windows(2)
            .map(|w| segment_direction(&w[0], &w[1]))
            .collect::<Result<Vec<_>>>()?;

        if self.distance.abs() < TOLERANCE {
            return Ok(self.points.to_vec());
        }

        let offset_segments: Vec<(Point2, Point2)> = directions
            .iter()
            .enumerate()
            .map(|(i, dir)| {
                let offset = left_normal(*dir) * self.distance;
                (self.points[i] + offset, self.points[i + 1] + offset)
            })
            .collect();

        // Phase B: miter corners.
        let mut raw = Vec::with_capacity(n);
        raw.push(offset_segments[0].0);
        for i in 1..n - 1 {
            let corner = self.corner(
                i,
                &offset_segments[i - 1],
                &offset_segments[i],
                &directions[i - 1],
                &directions[i],
            )?;
            raw.push(corner);
        }
        raw.push(offset_segments[n - 2].1);

        // Phase C: each offset segment must keep its source direction.
        for (i, dir) in directions.iter().enumerate() {
            let d = raw[i + 1] - raw[i];
            if d.dot(dir) <= TOLERANCE {
                return Err(GeometryError::Degenerate(format!(
                    "offset segment {i} collapsed at distance {}",
                    self.distance
                ))
                .into());
            }
        }

        trace!(vertices = n, distance = self.distance, "line offset built");
        Ok(raw)
    }

    /// Computes the miter point for interior vertex `i`.
    fn corner(
        &self,
        i: usize,
        seg_prev: &(Point2, Point2),
        seg_next: &(Point2, Point2),
        dir_prev: &Vector2,
        dir_next: &Vector2,
    ) -> Result<Point2> {
        let original = &self.points[i];
        let cos_angle = dir_prev.dot(dir_next);
        if cos_angle < self.params.reversal_cos {
            return Err(GeometryError::Degenerate(format!(
                "direction reverses at vertex {i}"
            ))
            .into());
        }

        let corner = intersect_offset_lines(seg_prev, seg_next, original, self.distance);

        let Some(limit_factor) = self.params.miter_limit else {
            return Ok(corner);
        };
        let limit = limit_factor * self.distance.abs();
        let miter = corner - original;
        let miter_len = miter.norm();
        if miter_len > limit && miter_len > TOLERANCE {
            Ok(original + miter * (limit / miter_len))
        } else {
            Ok(corner)
        }
    }
}

/// Intersects two offset lines and returns the corner point.
///
/// Falls back to shifting the original corner if the lines are parallel.
fn intersect_offset_lines(
    seg_prev: &(Point2, Point2),
    seg_next: &(Point2, Point2),
    original_corner: &Point2,
    distance: f64,
) -> Point2 {
    let d_prev = seg_prev.1 - seg_prev.0;
    let d_next = seg_next.1 - seg_next.0;

    if let Some((t, _u)) = line_line_intersect_2d(&seg_prev.1, &d_prev, &seg_next.0, &d_next) {
        point_at(&seg_prev.1, &d_prev, t)
    } else {
        let normal = left_normal(
            d_prev
                .try_normalize(TOLERANCE)
                .unwrap_or(Vector2::new(1.0, 0.0)),
        );
        original_corner + normal * distance
    }
}
