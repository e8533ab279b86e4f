//! Configuration for the search and for reference-point acquisition.
//!
//! Every struct has a `Default` matching the customer map view, so a JSON file
//! only needs the fields it wants to override:
//!
//! ```json
//! { "search": { "default_wide_zoom": 9 }, "location": { "timeout_ms": 5000 } }
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::geo::Point;
use crate::location::CachedLocation;
use crate::zone::{default_zones, FallbackZoom, SearchZone, ZoomLevel, DEFAULT_WIDE_ZOOM};

/// Fallback reference point: central Algiers.
pub const FALLBACK_LAT: f64 = 36.7372;
pub const FALLBACK_LNG: f64 = 3.0869;

/// How long to wait for a device location fix (ms).
const DEFAULT_LOCATION_TIMEOUT_MS: u64 = 10_000;

/// How old a cached location fix may be before it is refreshed (ms).
const DEFAULT_LOCATION_MAX_AGE_MS: u64 = 5 * 60 * 1000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Zones in strictly ascending `max_distance_km` order.
    pub zones: Vec<SearchZone>,
    pub fallback_zoom: FallbackZoom,
    /// Zoom hint when no candidate is available.
    pub default_wide_zoom: ZoomLevel,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            zones: default_zones(),
            fallback_zoom: FallbackZoom::default(),
            default_wide_zoom: DEFAULT_WIDE_ZOOM,
        }
    }
}

impl SearchConfig {
    pub fn with_zones(mut self, zones: Vec<SearchZone>) -> Self {
        self.zones = zones;
        self
    }

    pub fn with_fallback_zoom(mut self, fallback_zoom: FallbackZoom) -> Self {
        self.fallback_zoom = fallback_zoom;
        self
    }

    pub fn with_default_wide_zoom(mut self, zoom: ZoomLevel) -> Self {
        self.default_wide_zoom = zoom;
        self
    }

    /// Reject malformed tables. Nothing is reordered or clamped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut previous: Option<&SearchZone> = None;
        for zone in &self.zones {
            if !zone.max_distance_km.is_finite() || zone.max_distance_km < 0.0 {
                return Err(ConfigError::InvalidZoneRadius {
                    label: zone.label.clone(),
                    value: zone.max_distance_km,
                });
            }
            if let Some(prev) = previous {
                if zone.max_distance_km <= prev.max_distance_km {
                    return Err(ConfigError::ZonesNotAscending {
                        label: zone.label.clone(),
                        previous_km: prev.max_distance_km,
                        current_km: zone.max_distance_km,
                    });
                }
            }
            previous = Some(zone);
        }

        let steps = &self.fallback_zoom.steps;
        for (index, step) in steps.iter().enumerate() {
            if !step.max_distance_km.is_finite() || step.max_distance_km < 0.0 {
                return Err(ConfigError::InvalidFallbackStep {
                    index,
                    value: step.max_distance_km,
                });
            }
            if index > 0 && step.max_distance_km <= steps[index - 1].max_distance_km {
                return Err(ConfigError::FallbackNotAscending {
                    index,
                    previous_km: steps[index - 1].max_distance_km,
                    current_km: step.max_distance_km,
                });
            }
        }
        Ok(())
    }
}

/// Reference-point acquisition policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationPolicy {
    /// Used whenever the device location cannot be obtained.
    pub fallback: Point,
    pub timeout_ms: u64,
    /// 0 disables caching.
    pub max_age_ms: u64,
}

impl Default for LocationPolicy {
    fn default() -> Self {
        Self {
            fallback: Point {
                lat: FALLBACK_LAT,
                lng: FALLBACK_LNG,
            },
            timeout_ms: DEFAULT_LOCATION_TIMEOUT_MS,
            max_age_ms: DEFAULT_LOCATION_MAX_AGE_MS,
        }
    }
}

impl LocationPolicy {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn max_age(&self) -> Duration {
        Duration::from_millis(self.max_age_ms)
    }

    /// Wrap `provider` so fixes are re-used for `max_age_ms`.
    pub fn cache<P>(&self, provider: P) -> CachedLocation<P> {
        CachedLocation::new(provider, self.max_age())
    }

    pub fn with_fallback(mut self, fallback: Point) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_max_age_ms(mut self, max_age_ms: u64) -> Self {
        self.max_age_ms = max_age_ms;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        Point::new(self.fallback.lat, self.fallback.lng)?;
        if self.timeout_ms == 0 {
            return Err(ConfigError::ZeroLocationTimeout);
        }
        Ok(())
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProximityConfig {
    pub search: SearchConfig,
    pub location: LocationPolicy,
}

impl ProximityConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    pub fn with_location(mut self, location: LocationPolicy) -> Self {
        self.location = location;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.search.validate()?;
        self.location.validate()
    }
}
