//! Test helpers for common test setup and utilities.
//!
//! Shared geography so unit tests, integration tests and benches place
//! candidates the same way.

use crate::geo::{Point, EARTH_RADIUS_KM};
use crate::matching::Candidate;
use crate::zone::SearchZone;

/// Reference point used across tests (central Algiers).
pub const TEST_REFERENCE: Point = Point {
    lat: 36.75,
    lng: 3.06,
};

/// Kilometres per degree of latitude on the Haversine sphere.
pub fn km_per_degree() -> f64 {
    EARTH_RADIUS_KM * std::f64::consts::PI / 180.0
}

/// The point `km` kilometres due north of `origin`.
///
/// Moving along a meridian keeps the Haversine distance equal to `km` up to
/// rounding, which keeps zone-boundary tests readable.
///
/// # Panics
///
/// Panics if the result would pass the pole.
pub fn point_north_of(origin: Point, km: f64) -> Point {
    Point::new(origin.lat + km / km_per_degree(), origin.lng).expect("point stays below the pole")
}

/// The point `km` kilometres due south of `origin`.
///
/// # Panics
///
/// Panics if the result would pass the pole.
pub fn point_south_of(origin: Point, km: f64) -> Point {
    Point::new(origin.lat - km / km_per_degree(), origin.lng).expect("point stays above the pole")
}

/// An available candidate `km` north of [`TEST_REFERENCE`].
pub fn online_at_km<T>(payload: T, km: f64) -> Candidate<T> {
    Candidate::online(payload, point_north_of(TEST_REFERENCE, km))
}

/// An unavailable candidate `km` north of [`TEST_REFERENCE`].
pub fn offline_at_km<T>(payload: T, km: f64) -> Candidate<T> {
    Candidate::offline(payload, point_north_of(TEST_REFERENCE, km))
}

/// Two-zone table: "near" up to 3 km (zoom 15), "mid" up to 10 km (zoom 13).
pub fn near_mid_zones() -> Vec<SearchZone> {
    vec![
        SearchZone::new(3.0, 15, "near"),
        SearchZone::new(10.0, 13, "mid"),
    ]
}
