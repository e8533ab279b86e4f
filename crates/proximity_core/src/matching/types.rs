use serde::{Deserialize, Serialize};

use crate::geo::Point;
use crate::zone::ZoomLevel;

/// Something that can be matched: a worker, a vehicle, a shop.
///
/// `payload` is carried through the search untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate<T> {
    pub payload: T,
    pub location: Point,
    /// Only available (online) candidates are eligible for matching.
    pub available: bool,
}

impl<T> Candidate<T> {
    pub fn new(payload: T, location: Point, available: bool) -> Self {
        Self {
            payload,
            location,
            available,
        }
    }

    pub fn online(payload: T, location: Point) -> Self {
        Self::new(payload, location, true)
    }

    pub fn offline(payload: T, location: Point) -> Self {
        Self::new(payload, location, false)
    }
}

/// A candidate together with its distance from the reference point.
#[derive(Debug, PartialEq)]
pub struct Nearest<'a, T> {
    pub candidate: &'a Candidate<T>,
    /// Position of `candidate` in the slice that was searched.
    pub index: usize,
    pub distance_km: f64,
}

impl<T> Clone for Nearest<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Nearest<'_, T> {}

/// How a search concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchOutcome {
    /// The nearest candidate fell inside a configured zone.
    InZone,
    /// Candidates exist but all lie beyond the last zone.
    OutOfRange,
    /// No candidate was available.
    NoneAvailable,
}

/// Result of a proximity search.
///
/// `nearest` is `None` exactly when no candidate was available. `zone_label`
/// is `None` both then and when the match came from the out-of-range fallback.
#[derive(Debug, PartialEq)]
pub struct SearchResult<'a, T> {
    pub nearest: Option<Nearest<'a, T>>,
    pub zoom_hint: ZoomLevel,
    pub zone_label: Option<String>,
}

impl<'a, T> SearchResult<'a, T> {
    pub fn candidate(&self) -> Option<&'a Candidate<T>> {
        self.nearest.map(|nearest| nearest.candidate)
    }

    pub fn distance_km(&self) -> Option<f64> {
        self.nearest.map(|nearest| nearest.distance_km)
    }

    pub fn outcome(&self) -> SearchOutcome {
        match (&self.nearest, &self.zone_label) {
            (None, _) => SearchOutcome::NoneAvailable,
            (Some(_), Some(_)) => SearchOutcome::InZone,
            (Some(_), None) => SearchOutcome::OutOfRange,
        }
    }
}

impl<T> Clone for SearchResult<'_, T> {
    fn clone(&self) -> Self {
        Self {
            nearest: self.nearest,
            zoom_hint: self.zoom_hint,
            zone_label: self.zone_label.clone(),
        }
    }
}
