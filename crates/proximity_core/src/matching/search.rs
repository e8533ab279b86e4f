use crate::config::SearchConfig;
use crate::error::ConfigError;
use crate::geo::Point;

use super::nearest::{rank_by_distance, rank_where, resolve};
use super::types::{Candidate, Nearest, SearchResult};

/// A proximity search bound to one zone table and fallback policy.
///
/// Holds configuration only; candidates and the reference point are supplied
/// on every call, so the same instance can serve any number of callers.
///
/// # Examples
///
/// ```rust
/// use proximity_core::geo::Point;
/// use proximity_core::matching::{Candidate, ProximitySearch};
///
/// let search = ProximitySearch::default();
/// let user = Point::new(36.7372, 3.0869).unwrap();
/// let workers = vec![Candidate::online("plumber", Point::new(36.7392, 3.0889).unwrap())];
///
/// let result = search.search(user, &workers);
/// assert_eq!(result.candidate().map(|c| c.payload), Some("plumber"));
/// assert_eq!(result.zoom_hint, 15);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProximitySearch {
    config: SearchConfig,
}

impl ProximitySearch {
    /// Use `config` as given. Malformed zone tables trip debug assertions.
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Validate `config` before use.
    pub fn try_new(config: SearchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn search<'a, T>(&self, reference: Point, candidates: &'a [Candidate<T>]) -> SearchResult<'a, T> {
        let ranked = rank_by_distance(reference, candidates);
        self.resolve(&ranked)
    }

    /// Search only among candidates whose payload passes `keep`, e.g. workers
    /// offering the service the customer picked.
    pub fn search_where<'a, T, F>(
        &self,
        reference: Point,
        candidates: &'a [Candidate<T>],
        keep: F,
    ) -> SearchResult<'a, T>
    where
        F: Fn(&T) -> bool,
    {
        let ranked = rank_where(reference, candidates, keep);
        self.resolve(&ranked)
    }

    pub fn rank<'a, T>(&self, reference: Point, candidates: &'a [Candidate<T>]) -> Vec<Nearest<'a, T>> {
        rank_by_distance(reference, candidates)
    }

    fn resolve<'a, T>(&self, ranked: &[Nearest<'a, T>]) -> SearchResult<'a, T> {
        resolve(
            ranked,
            &self.config.zones,
            &self.config.fallback_zoom,
            self.config.default_wide_zoom,
        )
    }
}
