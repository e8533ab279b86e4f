//! `proximity`: find the nearest available worker and the map zoom to show them.
//!
//! Run with: cargo run -p proximity_cli -- --candidates workers.json --lat 36.75 --lng 3.06

mod input;
mod report;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use proximity_core::config::ProximityConfig;
use proximity_core::error::LocationError;
use proximity_core::geo::Point;
use proximity_core::location::{resolve_reference, FixedLocation, LocationProvider, NoLocation};
use proximity_core::matching::{rank_where, ProximitySearch};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::report::SearchReport;

#[derive(Parser, Debug)]
#[command(
    name = "proximity",
    about = "Find the nearest available worker and the map zoom to show them"
)]
struct Cli {
    /// JSON array of workers: {"id", "lat", "lng", "available"?, "category"?}
    #[arg(long)]
    candidates: PathBuf,
    /// Customer latitude; the configured fallback point is used when omitted
    #[arg(long, allow_negative_numbers = true, requires = "lng")]
    lat: Option<f64>,
    /// Customer longitude
    #[arg(long, allow_negative_numbers = true, requires = "lat")]
    lng: Option<f64>,
    /// Only consider workers offering this service
    #[arg(long)]
    category: Option<String>,
    /// JSON config overriding zones, zoom steps and location policy
    #[arg(long, env = "PROXIMITY_CONFIG")]
    config: Option<PathBuf>,
    /// Also list every matching available worker by distance
    #[arg(long)]
    rank: bool,
}

const DEFAULT_LOG_FILTER: &str = "proximity_cli=info,proximity_core=info";

/// Where the customer position comes from on this run.
enum CustomerLocation {
    Given(FixedLocation),
    Missing(NoLocation),
}

impl CustomerLocation {
    fn from_args(lat: Option<f64>, lng: Option<f64>) -> Result<Self> {
        Ok(match (lat, lng) {
            (Some(lat), Some(lng)) => {
                let point = Point::new(lat, lng).context("invalid --lat/--lng")?;
                Self::Given(FixedLocation(point))
            }
            _ => Self::Missing(NoLocation(LocationError::Unavailable(
                "no coordinates given".to_string(),
            ))),
        })
    }
}

impl LocationProvider for CustomerLocation {
    async fn current_location(&self) -> Result<Point, LocationError> {
        match self {
            Self::Given(fixed) => fixed.current_location().await,
            Self::Missing(none) => none.current_location().await,
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<SearchReport> {
    let config = match &cli.config {
        Some(path) => ProximityConfig::from_json_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => ProximityConfig::default(),
    };
    let candidates = input::load_candidates(&cli.candidates)?;
    info!(count = candidates.len(), "loaded candidates");

    let provider = config
        .location
        .cache(CustomerLocation::from_args(cli.lat, cli.lng)?);
    let reference = resolve_reference(&provider, &config.location).await;

    let search = ProximitySearch::new(config.search);
    let category = cli.category.as_deref();
    let keep = |worker: &input::Worker| category.map_or(true, |c| worker.offers(c));

    let result = search.search_where(reference.point, &candidates, keep);
    let mut report = SearchReport::new(reference, &result);
    if cli.rank {
        report.set_ranking(rank_where(reference.point, &candidates, keep));
    }
    Ok(report)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let report = run(cli).await?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
