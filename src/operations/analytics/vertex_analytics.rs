use tracing::{debug, warn};

use super::{format_dms, AnalyticsParams, BendDirection, VertexRecord};
use crate::engine::GeometryEngine;
use crate::geometry::Centerline;
use crate::math::angle::{bearing_between, signed_deflection};

/// Walks a centerline and computes a [`VertexRecord`] for every vertex.
///
/// Centerlines with fewer than two points, or with non-finite coordinates,
/// produce an empty table.
#[derive(Debug)]
pub struct VertexAnalytics<'a> {
    centerline: &'a Centerline,
    params: AnalyticsParams,
}

impl<'a> VertexAnalytics<'a> {
    /// Creates a new vertex analytics operation.
    #[must_use]
    pub fn new(centerline: &'a Centerline) -> Self {
        Self {
            centerline,
            params: AnalyticsParams::default(),
        }
    }

    /// Sets custom classification parameters.
    #[must_use]
    pub fn with_params(mut self, params: AnalyticsParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the operation. Segment lengths are measured by `engine`.
    #[must_use]
    pub fn execute(&self, engine: &impl GeometryEngine) -> Vec<VertexRecord> {
        let points = self.centerline.points();
        let n = points.len();
        if n < 2 {
            warn!(vertices = n, "centerline too short for vertex analytics");
            return Vec::new();
        }
        if let Some(index) = self.centerline.first_non_finite() {
            warn!(index, "non-finite centerline coordinate, skipping analytics");
            return Vec::new();
        }

        let mut records = Vec::with_capacity(n);
        let mut cumulative = 0.0;

        for (i, current) in points.iter().enumerate() {
            let next = points.get(i + 1);
            let (bearing, segment_length) = match next {
                Some(next) => (
                    bearing_between(current, next),
                    engine.length(&[*current, *next]),
                ),
                None => (0.0, 0.0),
            };

            let distance_from_start = cumulative;
            cumulative += segment_length;

            let (bend_angle, bend_direction) = match (i.checked_sub(1), next) {
                (None, _) => (0.0, BendDirection::Start),
                (_, None) => (0.0, BendDirection::End),
                (Some(prev), Some(next)) => {
                    let incoming = bearing_between(&points[prev], current);
                    let outgoing = bearing_between(current, next);
                    let deflection = signed_deflection(incoming, outgoing);
                    (deflection.abs(), self.classify(deflection))
                }
            };

            records.push(VertexRecord {
                index: i,
                x: current.x,
                y: current.y,
                bearing,
                bearing_dms: format_dms(bearing),
                bend_angle,
                bend_direction,
                segment_length,
                distance_from_start,
            });
        }

        debug!(vertices = n, total_length = cumulative, "vertex analytics computed");
        records
    }

    /// Bearings grow clockwise, so a positive deflection turns right.
    fn classify(&self, deflection: f64) -> BendDirection {
        let threshold = self.params.straight_threshold_deg;
        if deflection.abs() <= threshold {
            BendDirection::Straight
        } else if deflection > 0.0 {
            BendDirection::Right
        } else {
            BendDirection::Left
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::PlanarEngine;
    use crate::geometry::SpatialReference;
    use approx::assert_abs_diff_eq;

    fn analyze(coords: &[(f64, f64)]) -> Vec<VertexRecord> {
        let cl = Centerline::from_xy(coords, SpatialReference::default());
        VertexAnalytics::new(&cl).execute(&PlanarEngine)
    }

    #[test]
    fn straight_two_point_line() {
        let records = analyze(&[(0.0, 0.0), (0.0, 100.0)]);
        assert_eq!(records.len(), 2);

        assert_abs_diff_eq!(records[0].bearing, 0.0);
        assert_eq!(records[0].bend_direction, BendDirection::Start);
        assert_abs_diff_eq!(records[0].segment_length, 100.0);
        assert_abs_diff_eq!(records[0].distance_from_start, 0.0);

        assert_abs_diff_eq!(records[1].bearing, 0.0);
        assert_eq!(records[1].bend_direction, BendDirection::End);
        assert_abs_diff_eq!(records[1].segment_length, 0.0);
        assert_abs_diff_eq!(records[1].distance_from_start, 100.0);
    }

    #[test]
    fn right_angle_turn_to_the_east() {
        let records = analyze(&[(0.0, 0.0), (0.0, 100.0), (100.0, 100.0)]);
        assert_eq!(records[1].bend_direction, BendDirection::Right);
        assert_abs_diff_eq!(records[1].bend_angle, 90.0, epsilon = 1e-9);
        assert_abs_diff_eq!(records[1].bearing, 90.0, epsilon = 1e-9);
        assert_eq!(records[1].bearing_dms, "90° 0' 0\"");
    }

    #[test]
    fn right_angle_turn_to_the_west() {
        let records = analyze(&[(0.0, 0.0), (0.0, 100.0), (-100.0, 100.0)]);
        assert_eq!(records[1].bend_direction, BendDirection::Left);
        assert_abs_diff_eq!(records[1].bend_angle, 90.0, epsilon = 1e-9);
        assert_abs_diff_eq!(records[1].bearing, 270.0, epsilon = 1e-9);
    }

    #[test]
    fn small_deflection_is_straight() {
        // ~0.57 degree kink.
        let records = analyze(&[(0.0, 0.0), (0.0, 100.0), (1.0, 200.0)]);
        assert_eq!(records[1].bend_direction, BendDirection::Straight);
        assert!(records[1].bend_angle > 0.0 && records[1].bend_angle < 1.0);
    }

    #[test]
    fn custom_straight_threshold() {
        let cl = Centerline::from_xy(
            &[(0.0, 0.0), (0.0, 100.0), (1.0, 200.0)],
            SpatialReference::default(),
        );
        let params = AnalyticsParams {
            straight_threshold_deg: 0.1,
        };
        let records = VertexAnalytics::new(&cl)
            .with_params(params)
            .execute(&PlanarEngine);
        assert_eq!(records[1].bend_direction, BendDirection::Right);
    }

    #[test]
    fn bend_across_north_wraps() {
        // Heading 350 then 10: a 20 degree right turn, not 340.
        let a = 350f64.to_radians();
        let b = 10f64.to_radians();
        let p1 = (100.0 * a.sin(), 100.0 * a.cos());
        let p2 = (p1.0 + 100.0 * b.sin(), p1.1 + 100.0 * b.cos());
        let records = analyze(&[(0.0, 0.0), p1, p2]);
        assert_eq!(records[1].bend_direction, BendDirection::Right);
        assert_abs_diff_eq!(records[1].bend_angle, 20.0, epsilon = 1e-9);
    }

    #[test]
    fn cumulative_distance_is_distance_to_vertex() {
        let records = analyze(&[(0.0, 0.0), (3.0, 4.0), (3.0, 10.0), (0.0, 10.0)]);
        let distances: Vec<f64> = records.iter().map(|r| r.distance_from_start).collect();
        let expected = [0.0, 5.0, 11.0, 14.0];
        for (d, e) in distances.iter().zip(expected) {
            assert_abs_diff_eq!(*d, e, epsilon = 1e-12);
        }
        let segments: Vec<f64> = records.iter().map(|r| r.segment_length).collect();
        for (s, e) in segments.iter().zip([5.0, 6.0, 3.0, 0.0]) {
            assert_abs_diff_eq!(*s, e, epsilon = 1e-12);
        }
    }

    #[test]
    fn ranges_hold_on_a_winding_line() {
        let records = analyze(&[
            (0.0, 0.0),
            (10.0, -3.0),
            (12.0, 8.0),
            (-4.0, 9.0),
            (-6.0, -20.0),
            (30.0, -25.0),
        ]);
        assert_eq!(records.len(), 6);
        for pair in records.windows(2) {
            assert!(pair[1].distance_from_start >= pair[0].distance_from_start);
        }
        for r in &records {
            assert!((0.0..360.0).contains(&r.bearing));
            assert!((0.0..=180.0).contains(&r.bend_angle));
        }
        assert_eq!(records[0].bend_direction, BendDirection::Start);
        assert_eq!(records[5].bend_direction, BendDirection::End);
        assert_abs_diff_eq!(records[5].bend_angle, 0.0);
    }

    #[test]
    fn short_or_invalid_centerlines_give_empty_table() {
        assert!(analyze(&[]).is_empty());
        assert!(analyze(&[(1.0, 1.0)]).is_empty());
        assert!(analyze(&[(0.0, 0.0), (f64::NAN, 1.0)]).is_empty());
    }
}
