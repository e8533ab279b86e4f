use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Coordinates that cannot describe a place on Earth.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeoError {
    #[error("latitude {0} is outside -90..=90 degrees")]
    InvalidLatitude(f64),
    #[error("longitude {0} is outside -180..=180 degrees")]
    InvalidLongitude(f64),
}

/// Problems found while loading or validating a [`crate::config::ProximityConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("zone {label:?} has invalid radius {value} km")]
    InvalidZoneRadius { label: String, value: f64 },
    #[error("zone {label:?} ({current_km} km) must be wider than the zone before it ({previous_km} km)")]
    ZonesNotAscending {
        label: String,
        previous_km: f64,
        current_km: f64,
    },
    #[error("fallback zoom step {index} has invalid radius {value} km")]
    InvalidFallbackStep { index: usize, value: f64 },
    #[error("fallback zoom step {index} ({current_km} km) must be wider than the step before it ({previous_km} km)")]
    FallbackNotAscending {
        index: usize,
        previous_km: f64,
        current_km: f64,
    },
    #[error("invalid fallback location: {0}")]
    InvalidFallbackPoint(#[from] GeoError),
    #[error("location timeout must be greater than zero")]
    ZeroLocationTimeout,
    #[error("failed to read config file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Why a [`crate::location::LocationProvider`] could not produce a fix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("location unavailable: {0}")]
    Unavailable(String),
    #[error("location permission denied")]
    PermissionDenied,
    #[error("location request timed out after {0:?}")]
    TimedOut(Duration),
}
