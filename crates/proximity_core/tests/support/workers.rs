use proximity_core::geo::Point;
use proximity_core::matching::Candidate;

/// Trade a worker offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Service {
    Plumber,
    Electrician,
    Cleaner,
    Painter,
}

/// Marketplace worker used as candidate payload.
#[derive(Clone, Debug, PartialEq)]
pub struct Worker {
    pub id: &'static str,
    pub name: &'static str,
    pub service: Service,
}

fn worker(
    id: &'static str,
    name: &'static str,
    service: Service,
    lat: f64,
    lng: f64,
    online: bool,
) -> Candidate<Worker> {
    Candidate::new(
        Worker { id, name, service },
        Point::new(lat, lng).expect("roster point"),
        online,
    )
}

/// Customer standing in central Algiers.
pub fn customer() -> Point {
    Point::new(36.7372, 3.0869).expect("customer point")
}

/// Four workers within a kilometre of [`customer`]; the painter is offline.
pub fn algiers_roster() -> Vec<Candidate<Worker>> {
    vec![
        worker("1", "Ahmed Benali", Service::Plumber, 36.7392, 3.0889, true),
        worker("2", "Fatima Kadri", Service::Cleaner, 36.7352, 3.0849, true),
        worker("3", "Karim Messaoud", Service::Electrician, 36.7412, 3.0829, true),
        worker("4", "Nadia Boumediene", Service::Painter, 36.7332, 3.0909, false),
    ]
}

/// A plumber in Blida, roughly 40 km south-west of [`customer`].
pub fn blida_plumber() -> Candidate<Worker> {
    worker("5", "Yacine Haddad", Service::Plumber, 36.4700, 2.8277, true)
}
