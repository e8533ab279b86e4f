//! Candidate file parsing.
//!
//! ```json
//! [
//!   { "id": "1", "lat": 36.7392, "lng": 3.0889, "available": true, "category": "plumber" },
//!   { "id": "4", "lat": 36.7332, "lng": 3.0909, "available": false }
//! ]
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use proximity_core::geo::Point;
use proximity_core::matching::Candidate;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
struct WorkerRecord {
    id: String,
    lat: f64,
    lng: f64,
    #[serde(default = "default_available")]
    available: bool,
    #[serde(default)]
    category: Option<String>,
}

fn default_available() -> bool {
    true
}

/// Payload carried through the search for each worker.
#[derive(Debug, Clone, PartialEq)]
pub struct Worker {
    pub id: String,
    pub category: Option<String>,
}

impl Worker {
    pub fn offers(&self, category: &str) -> bool {
        self.category
            .as_deref()
            .is_some_and(|own| own.eq_ignore_ascii_case(category))
    }
}

pub fn load_candidates(path: &Path) -> Result<Vec<Candidate<Worker>>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read candidates from {}", path.display()))?;
    parse_candidates(&json).with_context(|| format!("invalid candidates in {}", path.display()))
}

pub fn parse_candidates(json: &str) -> Result<Vec<Candidate<Worker>>> {
    let records: Vec<WorkerRecord> = serde_json::from_str(json)?;
    records
        .into_iter()
        .map(|record| {
            let location = Point::new(record.lat, record.lng)
                .with_context(|| format!("worker {:?} has invalid coordinates", record.id))?;
            Ok(Candidate::new(
                Worker {
                    id: record.id,
                    category: record.category,
                },
                location,
                record.available,
            ))
        })
        .collect()
}
