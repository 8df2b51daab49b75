//! Route lookup index.

use std::collections::HashMap;

use super::Trip;

/// Immutable mapping from route identifier to that route's trips.
///
/// Built once during startup and never mutated afterwards, so shared
/// references can be handed to concurrent readers without locking.
/// Trips keep the row order of the trips table.
///
/// # Examples
///
/// ```
/// use schedule_server::domain::RouteIndex;
/// use std::collections::HashMap;
///
/// let index = RouteIndex::new(HashMap::new());
/// assert!(index.lookup("Red").is_empty());
/// ```
#[derive(Debug)]
pub struct RouteIndex {
    routes: HashMap<String, Vec<Trip>>,
}

impl RouteIndex {
    /// Wrap a finished route → trips mapping.
    pub fn new(routes: HashMap<String, Vec<Trip>>) -> Self {
        Self { routes }
    }

    /// Return the trips registered under `route_id`, in trips-table
    /// row order.
    ///
    /// An unknown route yields an empty slice, never an error.
    pub fn lookup(&self, route_id: &str) -> &[Trip] {
        self.routes.get(route_id).map_or(&[], Vec::as_slice)
    }

    /// Number of distinct routes in the index.
    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// Total number of trips across all routes.
    pub fn trip_count(&self) -> usize {
        self.routes.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trip(trip_id: &str, route_id: &str) -> Trip {
        Trip {
            trip_id: trip_id.to_string(),
            service_id: "Weekday".to_string(),
            route_id: route_id.to_string(),
            schedules: Vec::new(),
        }
    }

    fn sample_index() -> RouteIndex {
        let mut routes = HashMap::new();
        routes.insert(
            "Red".to_string(),
            vec![trip("R1", "Red"), trip("R2", "Red")],
        );
        routes.insert("Blue".to_string(), vec![trip("B1", "Blue")]);
        RouteIndex::new(routes)
    }

    #[test]
    fn lookup_known_route() {
        let index = sample_index();
        let trips = index.lookup("Red");

        assert_eq!(trips.len(), 2);
        assert_eq!(trips[0].trip_id, "R1");
        assert_eq!(trips[1].trip_id, "R2");
    }

    #[test]
    fn lookup_unknown_route_is_empty() {
        let index = sample_index();
        assert!(index.lookup("Orange").is_empty());
        assert!(index.lookup("").is_empty());
    }

    #[test]
    fn counts() {
        let index = sample_index();
        assert_eq!(index.route_count(), 2);
        assert_eq!(index.trip_count(), 3);

        let empty = RouteIndex::new(HashMap::new());
        assert_eq!(empty.route_count(), 0);
        assert_eq!(empty.trip_count(), 0);
    }
}
