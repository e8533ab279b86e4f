//! Centre a customer's map on the nearest online worker, then replay a few
//! input changes to show when the focus is recomputed.
//!
//! Run with: cargo run -p proximity_core --example nearest_worker

use proximity_core::config::LocationPolicy;
use proximity_core::focus::FocusTracker;
use proximity_core::geo::Point;
use proximity_core::location::{resolve_reference, NoLocation};
use proximity_core::matching::{Candidate, ProximitySearch};

#[derive(Debug, Clone, PartialEq)]
struct Worker {
    name: &'static str,
    service: &'static str,
}

fn roster() -> Vec<Candidate<Worker>> {
    let at = |lat, lng| Point::new(lat, lng).expect("roster point");
    let w = |name, service| Worker { name, service };
    vec![
        Candidate::new(w("Ahmed Benali", "plumber"), at(36.7392, 3.0889), true),
        Candidate::new(w("Fatima Kadri", "cleaner"), at(36.7352, 3.0849), true),
        Candidate::new(w("Karim Messaoud", "electrician"), at(36.7412, 3.0829), true),
        Candidate::new(w("Nadia Boumediene", "painter"), at(36.7332, 3.0909), false),
        Candidate::new(w("Yacine Haddad", "plumber"), at(36.4700, 2.8277), true),
    ]
}

fn print_focus(step: &str, tracker: &mut FocusTracker<Worker>) {
    let focus = tracker.focus().clone();
    let name = focus
        .candidate_index
        .and_then(|i| tracker.candidates().get(i))
        .map(|c| c.payload.name)
        .unwrap_or("-");
    println!(
        "{:<32} worker={:<18} distance={:>8} zoom={:>2} zone={}",
        step,
        name,
        focus
            .distance_km
            .map(|d| format!("{d:.2} km"))
            .unwrap_or_else(|| "-".to_string()),
        focus.zoom_hint,
        focus.zone_label.as_deref().unwrap_or("(out of range)"),
    );
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let policy = LocationPolicy::default();
    // No device here, so the fallback point is used.
    let reference = resolve_reference(&NoLocation::default(), &policy).await;
    println!(
        "--- Reference ({:?}): {:.4}, {:.4} ---",
        reference.source, reference.point.lat, reference.point.lng
    );

    let mut tracker = FocusTracker::new(ProximitySearch::default(), reference.point);
    tracker.set_candidates(roster());
    print_focus("initial", &mut tracker);

    tracker.set_filter(|w: &Worker| w.service == "electrician");
    print_focus("filter: electrician", &mut tracker);

    tracker.set_filter(|w: &Worker| w.service == "plumber");
    print_focus("filter: plumber", &mut tracker);

    tracker.set_availability(0, false);
    print_focus("Ahmed goes offline", &mut tracker);

    tracker.clear_filter();
    tracker.update_availability(|_| true, false);
    print_focus("everyone offline", &mut tracker);

    println!("Search ran {} times", tracker.recomputations());
}
