//! Geographic points and great-circle distance.
//!
//! Distances use the Haversine formula on a spherical Earth of radius
//! [`EARTH_RADIUS_KM`]. Good to a few metres at city scale, which is all the
//! zone table needs.

use serde::{Deserialize, Serialize};

use crate::error::GeoError;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude pair in degrees.
///
/// Fields are public so trusted callers can build points directly. Use
/// [`Point::new`] for anything that comes from outside the process.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub lat: f64,
    pub lng: f64,
}

impl Point {
    /// Build a point, rejecting non-finite or out-of-range coordinates.
    pub fn new(lat: f64, lng: f64) -> Result<Self, GeoError> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(GeoError::InvalidLatitude(lat));
        }
        if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
            return Err(GeoError::InvalidLongitude(lng));
        }
        Ok(Self { lat, lng })
    }

    pub fn is_valid(&self) -> bool {
        Self::new(self.lat, self.lng).is_ok()
    }

    pub fn distance_km(&self, other: &Point) -> f64 {
        distance_km(*self, *other)
    }
}

/// Great-circle distance between two points in kilometres.
///
/// The pair is put in a canonical order first so `distance_km(a, b)` and
/// `distance_km(b, a)` are bit-identical, not merely close.
pub fn distance_km(a: Point, b: Point) -> f64 {
    debug_assert!(a.is_valid(), "invalid point {a:?}");
    debug_assert!(b.is_valid(), "invalid point {b:?}");

    let (a, b) = if (a.lat, a.lng) <= (b.lat, b.lng) {
        (a, b)
    } else {
        (b, a)
    };
    let (lat1, lon1) = (a.lat.to_radians(), a.lng.to_radians());
    let (lat2, lon2) = (b.lat.to_radians(), b.lng.to_radians());
    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;
    let sin_dlat = (dlat * 0.5).sin();
    let sin_dlon = (dlon * 0.5).sin();
    // Rounding can push h a hair above 1 near antipodes.
    let h = (sin_dlat * sin_dlat + lat1.cos() * lat2.cos() * sin_dlon * sin_dlon).min(1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}
