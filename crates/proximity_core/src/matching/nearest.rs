use tracing::debug;

use crate::geo::{distance_km, Point};
use crate::zone::{zones_ascending, FallbackZoom, SearchZone, ZoomLevel, DEFAULT_WIDE_ZOOM};

use super::types::{Candidate, Nearest, SearchResult};

/// Distances closer than this (1 mm) rank as equal.
pub const DISTANCE_TIE_KM: f64 = 1e-6;

/// Available candidates sorted by distance from `reference`.
///
/// The sort is stable on distances quantized to [`DISTANCE_TIE_KM`], so
/// candidates equidistant up to rounding keep their input order.
pub fn rank_by_distance<T>(reference: Point, candidates: &[Candidate<T>]) -> Vec<Nearest<'_, T>> {
    rank_where(reference, candidates, |_| true)
}

/// Like [`rank_by_distance`], skipping candidates whose payload fails `keep`.
pub fn rank_where<T, F>(reference: Point, candidates: &[Candidate<T>], keep: F) -> Vec<Nearest<'_, T>>
where
    F: Fn(&T) -> bool,
{
    let mut ranked: Vec<Nearest<'_, T>> = candidates
        .iter()
        .enumerate()
        .filter(|(_, candidate)| candidate.available && keep(&candidate.payload))
        .map(|(index, candidate)| Nearest {
            candidate,
            index,
            distance_km: distance_km(reference, candidate.location),
        })
        .collect();

    ranked.sort_by(|a, b| tie_key(a.distance_km).total_cmp(&tie_key(b.distance_km)));
    ranked
}

fn tie_key(distance_km: f64) -> f64 {
    (distance_km / DISTANCE_TIE_KM).round()
}

/// Nearest available candidate, expanding through `zones` and falling back to
/// the default out-of-range zoom steps.
///
/// 1. No available candidate: `nearest` is `None`, zoom is [`DEFAULT_WIDE_ZOOM`].
/// 2. The first zone (in the given, ascending order) holding a candidate wins;
///    its nearest candidate is returned with the zone's zoom and label.
/// 3. Otherwise the globally nearest candidate is returned with the zoom from
///    [`FallbackZoom::canonical`] and no label.
///
/// Ties are broken by input order.
pub fn find_nearest_in_zone<'a, T>(
    reference: Point,
    candidates: &'a [Candidate<T>],
    zones: &[SearchZone],
) -> SearchResult<'a, T> {
    let ranked = rank_by_distance(reference, candidates);
    resolve(&ranked, zones, FallbackZoom::canonical(), DEFAULT_WIDE_ZOOM)
}

/// [`find_nearest_in_zone`] restricted to candidates whose payload passes `keep`.
pub fn find_nearest_where<'a, T, F>(
    reference: Point,
    candidates: &'a [Candidate<T>],
    zones: &[SearchZone],
    keep: F,
) -> SearchResult<'a, T>
where
    F: Fn(&T) -> bool,
{
    let ranked = rank_where(reference, candidates, keep);
    resolve(&ranked, zones, FallbackZoom::canonical(), DEFAULT_WIDE_ZOOM)
}

/// Pick the result from an already ranked candidate list.
pub(crate) fn resolve<'a, T>(
    ranked: &[Nearest<'a, T>],
    zones: &[SearchZone],
    fallback: &FallbackZoom,
    wide_zoom: ZoomLevel,
) -> SearchResult<'a, T> {
    debug_assert!(
        zones_ascending(zones),
        "search zones must be strictly ascending by max_distance_km"
    );

    let Some(&closest) = ranked.first() else {
        debug!(zoom_hint = wide_zoom, "no available candidates");
        return SearchResult {
            nearest: None,
            zoom_hint: wide_zoom,
            zone_label: None,
        };
    };

    // First ranked entry inside a zone is its nearest; near-ties straddling a
    // boundary mean it is not always `closest`.
    let in_zone = zones.iter().find_map(|zone| {
        ranked
            .iter()
            .find(|nearest| zone.contains(nearest.distance_km))
            .map(|&nearest| (zone, nearest))
    });
    if let Some((zone, nearest)) = in_zone {
        debug!(
            index = nearest.index,
            distance_km = nearest.distance_km,
            zone = %zone.label,
            zoom_hint = zone.zoom_hint,
            "candidate found in zone"
        );
        return SearchResult {
            nearest: Some(nearest),
            zoom_hint: zone.zoom_hint,
            zone_label: Some(zone.label.clone()),
        };
    }

    let zoom_hint = fallback.zoom_for(closest.distance_km);
    debug!(
        index = closest.index,
        distance_km = closest.distance_km,
        zoom_hint,
        "no candidate within configured zones, using global nearest"
    );
    SearchResult {
        nearest: Some(closest),
        zoom_hint,
        zone_label: None,
    }
}
