//! Map focus that recomputes only when its inputs change.
//!
//! The tracker owns the reference point, the candidate list and an optional
//! payload filter. Mutators mark it dirty when they actually change
//! something; [`FocusTracker::focus`] reruns the search only when dirty.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geo::Point;
use crate::matching::{Candidate, ProximitySearch, SearchOutcome, SearchResult};
use crate::zone::ZoomLevel;

type PayloadFilter<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

/// Where a map camera should look after a search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Focus {
    /// Matched candidate's location, or the reference when nothing matched.
    pub center: Point,
    pub zoom_hint: ZoomLevel,
    pub zone_label: Option<String>,
    /// Index into the tracked candidate list.
    pub candidate_index: Option<usize>,
    pub distance_km: Option<f64>,
    pub outcome: SearchOutcome,
}

impl Focus {
    pub fn from_result<T>(reference: Point, result: &SearchResult<'_, T>) -> Self {
        Self {
            center: result
                .candidate()
                .map(|candidate| candidate.location)
                .unwrap_or(reference),
            zoom_hint: result.zoom_hint,
            zone_label: result.zone_label.clone(),
            candidate_index: result.nearest.map(|nearest| nearest.index),
            distance_km: result.distance_km(),
            outcome: result.outcome(),
        }
    }
}

pub struct FocusTracker<T> {
    search: ProximitySearch,
    reference: Point,
    candidates: Vec<Candidate<T>>,
    filter: Option<PayloadFilter<T>>,
    current: Option<Focus>,
    recomputations: u64,
}

impl<T> FocusTracker<T> {
    pub fn new(search: ProximitySearch, reference: Point) -> Self {
        Self {
            search,
            reference,
            candidates: Vec::new(),
            filter: None,
            current: None,
            recomputations: 0,
        }
    }

    pub fn reference(&self) -> Point {
        self.reference
    }

    pub fn candidates(&self) -> &[Candidate<T>] {
        &self.candidates
    }

    /// Number of times the search has actually run.
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }

    pub fn is_dirty(&self) -> bool {
        self.current.is_none()
    }

    pub fn set_reference(&mut self, reference: Point) {
        if reference != self.reference {
            self.reference = reference;
            self.invalidate();
        }
    }

    /// Flip availability of the candidate at `index`.
    ///
    /// Returns `false` if `index` is out of bounds.
    pub fn set_availability(&mut self, index: usize, available: bool) -> bool {
        let Some(candidate) = self.candidates.get_mut(index) else {
            return false;
        };
        if candidate.available != available {
            candidate.available = available;
            self.invalidate();
        }
        true
    }

    /// Set availability on every candidate whose payload matches. Returns how
    /// many candidates changed.
    pub fn update_availability<F>(&mut self, matches: F, available: bool) -> usize
    where
        F: Fn(&T) -> bool,
    {
        let mut changed = 0;
        for candidate in &mut self.candidates {
            if candidate.available != available && matches(&candidate.payload) {
                candidate.available = available;
                changed += 1;
            }
        }
        if changed > 0 {
            self.invalidate();
        }
        changed
    }

    /// Restrict the search to payloads passing `filter`. Always recomputes,
    /// since closures cannot be compared.
    pub fn set_filter<F>(&mut self, filter: F)
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.filter = Some(Box::new(filter));
        self.invalidate();
    }

    pub fn clear_filter(&mut self) {
        if self.filter.take().is_some() {
            self.invalidate();
        }
    }

    /// Current focus, recomputed first if any input changed.
    pub fn focus(&mut self) -> &Focus {
        let focus = match self.current.take() {
            Some(focus) => focus,
            None => {
                self.recomputations += 1;
                self.compute()
            }
        };
        self.current.insert(focus)
    }

    fn compute(&self) -> Focus {
        let result = match &self.filter {
            Some(filter) => self
                .search
                .search_where(self.reference, &self.candidates, |payload| filter(payload)),
            None => self.search.search(self.reference, &self.candidates),
        };
        Focus::from_result(self.reference, &result)
    }

    fn invalidate(&mut self) {
        self.current = None;
    }
}

impl<T: PartialEq> FocusTracker<T> {
    /// Replace the candidate list; a no-op if it is unchanged.
    pub fn set_candidates(&mut self, candidates: Vec<Candidate<T>>) {
        if candidates != self.candidates {
            self.candidates = candidates;
            self.invalidate();
        }
    }
}

impl<T> fmt::Debug for FocusTracker<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FocusTracker")
            .field("reference", &self.reference)
            .field("candidates", &self.candidates.len())
            .field("filtered", &self.filter.is_some())
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}
