//! Trips table loading and the stop-times join.

use std::collections::HashMap;
use std::path::Path;
use std::time::Instant;

use tracing::info;

use crate::domain::{RouteIndex, Trip};

use super::error::FeedError;
use super::stop_times::StopTimeIndex;
use super::table::{TableReader, TableSchema};

/// Column contract for trips.txt.
const SCHEMA: TableSchema = TableSchema {
    file: "trips.txt",
    columns: &[(0, "route_id"), (1, "service_id"), (2, "trip_id")],
};

/// Load trips.txt and build the route index.
///
/// Each row becomes a [`Trip`] carrying the stop-time sequence looked
/// up by trip identifier; a miss yields an empty sequence, since a trip
/// may legitimately have no scheduled stop times. Trips are appended
/// under their route identifier in file order.
pub fn load(path: &Path, stop_times: &StopTimeIndex) -> Result<RouteIndex, FeedError> {
    let start = Instant::now();

    let mut routes: HashMap<String, Vec<Trip>> = HashMap::new();
    let mut rows = 0u64;
    for row in TableReader::open(path, SCHEMA)? {
        let row = row?;
        let route_id = row.field(0)?.to_string();
        let trip_id = row.field(2)?.to_string();
        let trip = Trip {
            schedules: stop_times.get(&trip_id).cloned().unwrap_or_default(),
            trip_id,
            service_id: row.field(1)?.to_string(),
            route_id: route_id.clone(),
        };
        routes.entry(route_id).or_default().push(trip);
        rows += 1;
    }

    info!(rows, elapsed = ?start.elapsed(), "parsed trips");
    Ok(RouteIndex::new(routes))
}
