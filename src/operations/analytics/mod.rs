mod dms;
mod vertex_analytics;

pub use dms::{format_dms, parse_dms};
pub use vertex_analytics::VertexAnalytics;

use std::fmt;

use serde::Serialize;

use crate::engine::GeometryEngine;
use crate::geometry::Centerline;

/// Parameters controlling vertex classification.
#[derive(Debug, Clone, Copy)]
pub struct AnalyticsParams {
    /// Deflections with magnitude at or below this (degrees) are `Straight`.
    pub straight_threshold_deg: f64,
}

impl Default for AnalyticsParams {
    fn default() -> Self {
        Self {
            straight_threshold_deg: 1.0,
        }
    }
}

/// How the centerline turns at a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BendDirection {
    Start,
    End,
    Straight,
    Left,
    Right,
}

impl BendDirection {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "Start",
            Self::End => "End",
            Self::Straight => "Straight",
            Self::Left => "Left",
            Self::Right => "Right",
        }
    }
}

impl fmt::Display for BendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Survey attributes of one centerline vertex.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VertexRecord {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    /// Azimuth to the next vertex in degrees `[0, 360)`; 0 for the last vertex.
    pub bearing: f64,
    pub bearing_dms: String,
    /// Absolute deflection in degrees `[0, 180]`.
    pub bend_angle: f64,
    pub bend_direction: BendDirection,
    /// Meters to the next vertex; 0 for the last vertex.
    pub segment_length: f64,
    /// Meters along the centerline from the first vertex to this one.
    pub distance_from_start: f64,
}

/// Computes the vertex table of `centerline` with default parameters.
#[must_use]
pub fn compute_vertex_analytics(
    centerline: &Centerline,
    engine: &impl GeometryEngine,
) -> Vec<VertexRecord> {
    VertexAnalytics::new(centerline).execute(engine)
}
