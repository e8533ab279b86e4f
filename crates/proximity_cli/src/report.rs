use proximity_core::focus::Focus;
use proximity_core::location::ReferencePoint;
use proximity_core::matching::{Nearest, SearchResult};
use serde::Serialize;

use crate::input::Worker;

#[derive(Debug, Serialize)]
pub struct RankedWorker {
    pub id: String,
    pub distance_km: f64,
}

/// What the CLI prints.
#[derive(Debug, Serialize)]
pub struct SearchReport {
    pub reference: ReferencePoint,
    pub worker_id: Option<String>,
    pub focus: Focus,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ranked: Vec<RankedWorker>,
}

impl SearchReport {
    pub fn new(reference: ReferencePoint, result: &SearchResult<'_, Worker>) -> Self {
        Self {
            reference,
            worker_id: result.candidate().map(|c| c.payload.id.clone()),
            focus: Focus::from_result(reference.point, result),
            ranked: Vec::new(),
        }
    }

    pub fn set_ranking(&mut self, ranked: Vec<Nearest<'_, Worker>>) {
        self.ranked = ranked
            .into_iter()
            .map(|nearest| RankedWorker {
                id: nearest.candidate.payload.id.clone(),
                distance_km: nearest.distance_km,
            })
            .collect();
    }
}
