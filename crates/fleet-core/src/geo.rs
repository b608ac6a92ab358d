//! Geographic coordinate type.
//!
//! `GeoPoint` uses `f64` latitude/longitude: vehicle positions drift by
//! fractions of a degree per tick and accumulate over long runs, so the
//! single-precision shortcut common in city-scale routing would visibly
//! quantize trajectories here.

use serde::{Deserialize, Serialize};

/// A WGS-84 geographic coordinate in decimal degrees.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Axis-aligned box check: is `self` within `half_lat` / `half_lon`
    /// degrees of `center` on the respective axes?
    #[inline]
    pub fn within_box(self, center: GeoPoint, half_lat: f64, half_lon: f64) -> bool {
        (self.lat - center.lat).abs() <= half_lat && (self.lon - center.lon).abs() <= half_lon
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
