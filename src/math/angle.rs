//! Survey angle conventions.
//!
//! Bearings are azimuths: 0° points north (+y) and angles grow clockwise.

use super::Point2;

/// Wraps an angle in degrees into `[0, 360)`.
#[must_use]
pub fn normalize_bearing(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.
    if wrapped >= 360.0 {
        0.0
    } else {
        // Clears negative zero.
        wrapped.abs()
    }
}

/// Azimuth of the direction from `from` to `to`, in degrees `[0, 360)`.
#[must_use]
pub fn bearing_between(from: &Point2, to: &Point2) -> f64 {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    normalize_bearing(dx.atan2(dy).to_degrees())
}

/// Signed change of direction from `incoming` to `outgoing`, in `(-180, 180]`.
///
/// Positive values are clockwise (right-hand) turns.
#[must_use]
pub fn signed_deflection(incoming: f64, outgoing: f64) -> f64 {
    let d = (outgoing - incoming).rem_euclid(360.0);
    if d > 180.0 {
        d - 360.0
    } else {
        d
    }
}
