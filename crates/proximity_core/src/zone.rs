//! Distance bands used to pick a "close enough" match and a map zoom level.
//!
//! Two tables are involved:
//!
//! - **Search zones**: walked in ascending order; the first zone containing an
//!   available candidate decides the zoom hint and the zone label.
//! - **Fallback zoom steps**: only consulted when every candidate lies outside
//!   the last zone. They map the raw distance to a zoom hint and carry no label.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Map zoom level (tile pyramid level, larger is closer).
pub type ZoomLevel = u8;

/// Zoom hint when nothing is available: a city-wide view around the reference.
pub const DEFAULT_WIDE_ZOOM: ZoomLevel = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchZone {
    pub max_distance_km: f64,
    pub zoom_hint: ZoomLevel,
    pub label: String,
}

impl SearchZone {
    pub fn new(max_distance_km: f64, zoom_hint: ZoomLevel, label: impl Into<String>) -> Self {
        Self {
            max_distance_km,
            zoom_hint,
            label: label.into(),
        }
    }

    pub fn contains(&self, distance_km: f64) -> bool {
        distance_km <= self.max_distance_km
    }
}

/// The zone table used by the customer map view.
pub fn default_zones() -> Vec<SearchZone> {
    vec![
        SearchZone::new(3.0, 15, "Very Close (0-3km)"),
        SearchZone::new(5.0, 14, "Close (3-5km)"),
        SearchZone::new(10.0, 13, "Medium (5-10km)"),
        SearchZone::new(20.0, 12, "Far (10-20km)"),
        SearchZone::new(50.0, 11, "Very Far (20-50km)"),
    ]
}

/// True when every zone is strictly wider than the one before it.
pub fn zones_ascending(zones: &[SearchZone]) -> bool {
    zones
        .windows(2)
        .all(|pair| pair[0].max_distance_km < pair[1].max_distance_km)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomStep {
    pub max_distance_km: f64,
    pub zoom_hint: ZoomLevel,
}

/// Monotonic distance → zoom step function for out-of-range matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FallbackZoom {
    pub steps: Vec<ZoomStep>,
    /// Zoom used beyond the last step.
    pub beyond: ZoomLevel,
}

impl FallbackZoom {
    pub fn zoom_for(&self, distance_km: f64) -> ZoomLevel {
        self.steps
            .iter()
            .find(|step| distance_km <= step.max_distance_km)
            .map(|step| step.zoom_hint)
            .unwrap_or(self.beyond)
    }

    pub fn is_ascending(&self) -> bool {
        self.steps
            .windows(2)
            .all(|pair| pair[0].max_distance_km < pair[1].max_distance_km)
    }

    /// Shared instance of the default breakpoints.
    pub fn canonical() -> &'static FallbackZoom {
        static CANONICAL: OnceLock<FallbackZoom> = OnceLock::new();
        CANONICAL.get_or_init(FallbackZoom::default)
    }
}

impl Default for FallbackZoom {
    fn default() -> Self {
        let step = |max_distance_km, zoom_hint| ZoomStep {
            max_distance_km,
            zoom_hint,
        };
        Self {
            steps: vec![step(5.0, 15), step(10.0, 14), step(20.0, 13), step(50.0, 12)],
            beyond: 11,
        }
    }
}
