//! Reference-point acquisition.
//!
//! The search itself never waits on anything. Getting the customer's position
//! is the async part, and it is allowed to fail: [`resolve_reference`] bounds
//! the wait with the policy timeout and substitutes the policy's fallback point.

mod cached;

use std::future::Future;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::LocationPolicy;
use crate::error::LocationError;
use crate::geo::Point;

pub use cached::CachedLocation;

/// Source of the device's current position.
pub trait LocationProvider: Send + Sync {
    fn current_location(&self) -> impl Future<Output = Result<Point, LocationError>> + Send;
}

/// Always reports the same position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedLocation(pub Point);

impl LocationProvider for FixedLocation {
    async fn current_location(&self) -> Result<Point, LocationError> {
        Ok(self.0)
    }
}

/// A device without positioning, or one where the user declined access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoLocation(pub LocationError);

impl Default for NoLocation {
    fn default() -> Self {
        Self(LocationError::Unavailable("no location provider".to_string()))
    }
}

impl LocationProvider for NoLocation {
    async fn current_location(&self) -> Result<Point, LocationError> {
        Err(self.0.clone())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationSource {
    Device,
    Fallback,
}

/// The point a search should be centred on, and where it came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferencePoint {
    pub point: Point,
    pub source: LocationSource,
}

/// Ask `provider` for a fix, falling back to `policy.fallback` on error,
/// timeout, or an out-of-range reading.
pub async fn resolve_reference<P: LocationProvider>(
    provider: &P,
    policy: &LocationPolicy,
) -> ReferencePoint {
    let timeout = policy.timeout();
    let outcome = match tokio::time::timeout(timeout, provider.current_location()).await {
        Ok(result) => result,
        Err(_) => Err(LocationError::TimedOut(timeout)),
    };

    match outcome {
        Ok(point) if point.is_valid() => {
            debug!(lat = point.lat, lng = point.lng, "using device location");
            ReferencePoint {
                point,
                source: LocationSource::Device,
            }
        }
        Ok(point) => {
            warn!(lat = point.lat, lng = point.lng, "device reported invalid coordinates, using fallback");
            fallback(policy)
        }
        Err(error) => {
            warn!(%error, "device location unavailable, using fallback");
            fallback(policy)
        }
    }
}

fn fallback(policy: &LocationPolicy) -> ReferencePoint {
    ReferencePoint {
        point: policy.fallback,
        source: LocationSource::Fallback,
    }
}
