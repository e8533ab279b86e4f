use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::error::LocationError;
use crate::geo::Point;

use super::LocationProvider;

/// Re-uses the last successful fix while it is younger than `max_age`.
///
/// Failures are never cached; the next call asks the inner provider again.
#[derive(Debug)]
pub struct CachedLocation<P> {
    inner: P,
    max_age: Duration,
    last_fix: Mutex<Option<(Instant, Point)>>,
}

impl<P> CachedLocation<P> {
    pub fn new(inner: P, max_age: Duration) -> Self {
        Self {
            inner,
            max_age,
            last_fix: Mutex::new(None),
        }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }

    /// Drop the cached fix so the next lookup hits the provider.
    pub fn invalidate(&self) {
        if let Ok(mut guard) = self.last_fix.lock() {
            *guard = None;
        }
    }

    fn fresh_fix(&self) -> Option<Point> {
        if self.max_age.is_zero() {
            return None;
        }
        let guard = match self.last_fix.lock() {
            Ok(guard) => guard,
            Err(_) => return None, // Poisoned: behave as uncached
        };
        let fix = *guard;
        fix.filter(|(taken_at, _)| taken_at.elapsed() <= self.max_age)
            .map(|(_, point)| point)
    }

    fn store(&self, point: Point) {
        if let Ok(mut guard) = self.last_fix.lock() {
            *guard = Some((Instant::now(), point));
        }
    }
}

impl<P: LocationProvider> LocationProvider for CachedLocation<P> {
    async fn current_location(&self) -> Result<Point, LocationError> {
        if let Some(point) = self.fresh_fix() {
            return Ok(point);
        }
        let point = self.inner.current_location().await?;
        self.store(point);
        Ok(point)
    }
}
