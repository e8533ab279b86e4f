mod support;

use proximity_core::config::SearchConfig;
use proximity_core::geo::{distance_km, Point};
use proximity_core::matching::{
    find_nearest_in_zone, find_nearest_where, rank_by_distance, Candidate, ProximitySearch,
    SearchOutcome,
};
use proximity_core::test_helpers::{
    near_mid_zones, offline_at_km, online_at_km, point_north_of, point_south_of, TEST_REFERENCE,
};
use proximity_core::zone::{default_zones, SearchZone, DEFAULT_WIDE_ZOOM};
use support::workers::{algiers_roster, blida_plumber, customer, Service};

#[test]
fn candidate_within_first_zone_gets_its_zoom_and_label() {
    let candidates = vec![online_at_km("w1", 2.5)];

    let result = find_nearest_in_zone(TEST_REFERENCE, &candidates, &near_mid_zones());

    assert_eq!(result.candidate().map(|c| c.payload), Some("w1"));
    assert_eq!(result.zoom_hint, 15);
    assert_eq!(result.zone_label.as_deref(), Some("near"));
    assert_eq!(result.outcome(), SearchOutcome::InZone);
    assert!((result.distance_km().expect("distance") - 2.5).abs() < 1e-6);
}

#[test]
fn candidate_beyond_all_zones_falls_back_to_distance_breakpoints() {
    let candidates = vec![online_at_km("w1", 35.0)];

    let result = find_nearest_in_zone(TEST_REFERENCE, &candidates, &near_mid_zones());

    assert_eq!(result.candidate().map(|c| c.payload), Some("w1"));
    assert_eq!(result.zoom_hint, 12);
    assert_eq!(result.zone_label, None);
    assert_eq!(result.outcome(), SearchOutcome::OutOfRange);
}

#[test]
fn second_zone_is_used_when_first_is_empty() {
    let candidates = vec![online_at_km("far", 9.0), online_at_km("mid", 6.0)];

    let result = find_nearest_in_zone(TEST_REFERENCE, &candidates, &near_mid_zones());

    assert_eq!(result.candidate().map(|c| c.payload), Some("mid"));
    assert_eq!(result.zoom_hint, 13);
    assert_eq!(result.zone_label.as_deref(), Some("mid"));
}

#[test]
fn all_unavailable_returns_wide_zoom_without_candidate() {
    let candidates = vec![offline_at_km("w1", 1.0), offline_at_km("w2", 4.0)];

    let result = find_nearest_in_zone(TEST_REFERENCE, &candidates, &near_mid_zones());

    assert!(result.candidate().is_none());
    assert_eq!(result.distance_km(), None);
    assert_eq!(result.zoom_hint, DEFAULT_WIDE_ZOOM);
    assert_eq!(result.zone_label, None);
    assert_eq!(result.outcome(), SearchOutcome::NoneAvailable);
}

#[test]
fn empty_candidate_list_returns_wide_zoom() {
    let candidates: Vec<Candidate<()>> = Vec::new();

    let result = find_nearest_in_zone(TEST_REFERENCE, &candidates, &near_mid_zones());

    assert!(result.nearest.is_none());
    assert_eq!(result.zoom_hint, DEFAULT_WIDE_ZOOM);
}

#[test]
fn empty_zone_table_always_uses_fallback() {
    let candidates = vec![online_at_km("close", 0.5)];

    let result = find_nearest_in_zone(TEST_REFERENCE, &candidates, &[]);

    assert_eq!(result.candidate().map(|c| c.payload), Some("close"));
    assert_eq!(result.zone_label, None);
    assert_eq!(result.zoom_hint, 15);

    let none: Vec<Candidate<&str>> = vec![offline_at_km("off", 0.5)];
    let result = find_nearest_in_zone(TEST_REFERENCE, &none, &[]);
    assert!(result.candidate().is_none());
    assert_eq!(result.zoom_hint, DEFAULT_WIDE_ZOOM);
}

#[test]
fn offline_candidates_are_never_selected_even_when_closest() {
    let candidates = vec![offline_at_km("offline", 0.1), online_at_km("online", 4.0)];

    let result = find_nearest_in_zone(TEST_REFERENCE, &candidates, &near_mid_zones());

    assert_eq!(result.candidate().map(|c| c.payload), Some("online"));
    assert_eq!(result.nearest.map(|n| n.index), Some(1));
    assert_eq!(result.zone_label.as_deref(), Some("mid"));
}

#[test]
fn co_located_candidates_resolve_to_first_in_input_order() {
    let spot = point_north_of(TEST_REFERENCE, 1.2);
    let candidates = vec![
        Candidate::online("first", spot),
        Candidate::online("second", spot),
        Candidate::online("third", spot),
    ];

    let result = find_nearest_in_zone(TEST_REFERENCE, &candidates, &near_mid_zones());
    assert_eq!(result.candidate().map(|c| c.payload), Some("first"));
    assert_eq!(result.nearest.map(|n| n.index), Some(0));

    let reversed: Vec<_> = candidates.iter().rev().cloned().collect();
    let result = find_nearest_in_zone(TEST_REFERENCE, &reversed, &near_mid_zones());
    assert_eq!(result.candidate().map(|c| c.payload), Some("third"));
}

#[test]
fn equidistant_candidates_in_opposite_directions_resolve_to_first() {
    for km in [0.5, 2.5, 4.0, 7.0] {
        let candidates = vec![
            Candidate::online("north", point_north_of(TEST_REFERENCE, km)),
            Candidate::online("south", point_south_of(TEST_REFERENCE, km)),
        ];

        let result = find_nearest_in_zone(TEST_REFERENCE, &candidates, &near_mid_zones());
        assert_eq!(
            result.candidate().map(|c| c.payload),
            Some("north"),
            "at {km} km"
        );

        let swapped: Vec<_> = candidates.iter().rev().cloned().collect();
        let result = find_nearest_in_zone(TEST_REFERENCE, &swapped, &near_mid_zones());
        assert_eq!(
            result.candidate().map(|c| c.payload),
            Some("south"),
            "at {km} km"
        );
    }
}

#[test]
fn reported_distance_equals_distance_to_selected_candidate() {
    let roster = algiers_roster();
    let reference = customer();

    let result = find_nearest_in_zone(reference, &roster, &default_zones());
    let selected = result.candidate().expect("candidate");

    assert_eq!(
        result.distance_km(),
        Some(distance_km(reference, selected.location))
    );
}

#[test]
fn zone_match_is_minimum_distance_within_zone() {
    let candidates = vec![
        Candidate::online("north-4km", point_north_of(TEST_REFERENCE, 4.0)),
        Candidate::online("south-2km", point_south_of(TEST_REFERENCE, 2.0)),
        Candidate::online("north-2.8km", point_north_of(TEST_REFERENCE, 2.8)),
        Candidate::offline("north-0.3km", point_north_of(TEST_REFERENCE, 0.3)),
    ];

    let result = find_nearest_in_zone(TEST_REFERENCE, &candidates, &near_mid_zones());
    let matched = result.distance_km().expect("distance");

    let in_zone_min = candidates
        .iter()
        .filter(|c| c.available)
        .map(|c| distance_km(TEST_REFERENCE, c.location))
        .filter(|d| *d <= 3.0)
        .fold(f64::INFINITY, f64::min);

    assert_eq!(matched, in_zone_min);
    assert_eq!(result.candidate().map(|c| c.payload), Some("south-2km"));
}

#[test]
fn search_is_idempotent() {
    let roster = algiers_roster();
    let zones = default_zones();

    let first = find_nearest_in_zone(customer(), &roster, &zones);
    let second = find_nearest_in_zone(customer(), &roster, &zones);

    assert_eq!(first, second);
}

#[test]
fn algiers_roster_centres_on_nearest_online_worker() {
    let roster = algiers_roster();

    let result = find_nearest_in_zone(customer(), &roster, &default_zones());

    let worker = &result.candidate().expect("worker").payload;
    assert_eq!(worker.name, "Ahmed Benali");
    assert_eq!(result.zoom_hint, 15);
    assert_eq!(result.zone_label.as_deref(), Some("Very Close (0-3km)"));
}

#[test]
fn service_filter_restricts_candidates() {
    let mut roster = algiers_roster();
    roster.push(blida_plumber());

    let electrician = find_nearest_where(customer(), &roster, &default_zones(), |w| {
        w.service == Service::Electrician
    });
    assert_eq!(
        electrician.candidate().map(|c| c.payload.id),
        Some("3")
    );

    // The only painter is offline.
    let painter = find_nearest_where(customer(), &roster, &default_zones(), |w| {
        w.service == Service::Painter
    });
    assert_eq!(painter.outcome(), SearchOutcome::NoneAvailable);
}

#[test]
fn distant_plumber_lands_in_widest_default_zone() {
    let roster = vec![blida_plumber()];

    let result = find_nearest_in_zone(customer(), &roster, &default_zones());

    assert_eq!(result.zone_label.as_deref(), Some("Very Far (20-50km)"));
    assert_eq!(result.zoom_hint, 11);
}

#[test]
fn configured_search_uses_its_own_fallback_and_wide_zoom() {
    let search = ProximitySearch::try_new(
        SearchConfig::default()
            .with_zones(vec![SearchZone::new(1.0, 16, "block")])
            .with_default_wide_zoom(8),
    )
    .expect("valid config");

    let far = vec![online_at_km("w", 12.0)];
    let result = search.search(TEST_REFERENCE, &far);
    assert_eq!(result.zone_label, None);
    assert_eq!(result.zoom_hint, 13);

    let none: Vec<Candidate<&str>> = Vec::new();
    assert_eq!(search.search(TEST_REFERENCE, &none).zoom_hint, 8);
}

#[test]
fn ranking_lists_available_candidates_nearest_first() {
    let roster = algiers_roster();

    let ranked = rank_by_distance(customer(), &roster);

    let ids: Vec<&str> = ranked.iter().map(|n| n.candidate.payload.id).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
    assert!(ranked.windows(2).all(|w| w[0].distance_km <= w[1].distance_km));
}

#[test]
fn payload_is_carried_through_unchanged() {
    #[derive(Debug, PartialEq)]
    struct Opaque(Vec<u8>);

    let candidates = vec![Candidate::online(
        Opaque(vec![1, 2, 3]),
        Point::new(36.751, 3.06).expect("point"),
    )];

    let result = find_nearest_in_zone(TEST_REFERENCE, &candidates, &near_mid_zones());

    assert_eq!(
        result.candidate().map(|c| &c.payload),
        Some(&Opaque(vec![1, 2, 3]))
    );
    assert!(std::ptr::eq(
        result.candidate().expect("candidate"),
        &candidates[0]
    ));
}
