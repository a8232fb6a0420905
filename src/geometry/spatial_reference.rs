/// Opaque spatial reference token carried alongside geometry.
///
/// The engine never interprets it; it is copied from a centerline onto the
/// polygon derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SpatialReference {
    pub wkid: Option<u32>,
}

impl SpatialReference {
    /// Creates a reference from a well-known id.
    #[must_use]
    pub fn from_wkid(wkid: u32) -> Self {
        Self { wkid: Some(wkid) }
    }

    /// Geographic WGS84 (EPSG:4326).
    #[must_use]
    pub fn wgs84() -> Self {
        Self::from_wkid(4326)
    }

    /// Web Mercator (EPSG:3857).
    #[must_use]
    pub fn web_mercator() -> Self {
        Self::from_wkid(3857)
    }
}
