use crate::math::angle::normalize_bearing;

/// Formats a bearing as `D° M' S"`.
///
/// The bearing is first wrapped into `[0, 360)`. Minutes and seconds are
/// truncated, not rounded. Non-finite input formats as zero.
#[must_use]
pub fn format_dms(bearing: f64) -> String {
    let bearing = if bearing.is_finite() {
        normalize_bearing(bearing)
    } else {
        0.0
    };
    let degrees = bearing.floor();
    let minutes_full = (bearing - degrees) * 60.0;
    let minutes = minutes_full.floor();
    let seconds = ((minutes_full - minutes) * 60.0).floor();
    format!("{degrees}° {minutes}' {seconds}\"")
}

/// Parses a `D° M' S"` string back into decimal degrees.
///
/// Accepts the output of [`format_dms`]; returns `None` for anything else.
#[must_use]
pub fn parse_dms(text: &str) -> Option<f64> {
    let mut parts = text.split_whitespace();
    let degrees: f64 = parts.next()?.strip_suffix('°')?.parse().ok()?;
    let minutes: f64 = parts.next()?.strip_suffix('\'')?.parse().ok()?;
    let seconds: f64 = parts.next()?.strip_suffix('"')?.parse().ok()?;
    if parts.next().is_some() || !(0.0..60.0).contains(&minutes) || !(0.0..60.0).contains(&seconds)
    {
        return None;
    }
    Some(degrees + minutes / 60.0 + seconds / 3600.0)
}
