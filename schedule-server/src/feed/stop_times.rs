//! Stop-times table loading.

use std::collections::HashMap;
use std::path::Path;
use std::time::Instant;

use tracing::info;

use crate::domain::StopTime;

use super::error::FeedError;
use super::table::{TableReader, TableSchema};

/// Stop-time rows grouped by trip identifier, in file order per trip.
///
/// Intermediate artifact: consumed while building the route index and
/// then dropped.
pub type StopTimeIndex = HashMap<String, Vec<StopTime>>;

/// Column contract for stop_times.txt.
const SCHEMA: TableSchema = TableSchema {
    file: "stop_times.txt",
    columns: &[
        (0, "trip_id"),
        (1, "arrival_time"),
        (2, "departure_time"),
        (3, "stop_id"),
    ],
};

/// Load stop_times.txt and group its rows by trip identifier.
///
/// Rows are appended in file order and never reordered or deduplicated;
/// a trip visiting the same stop twice keeps both entries. Any row
/// error aborts the whole load.
pub fn load(path: &Path) -> Result<StopTimeIndex, FeedError> {
    let start = Instant::now();

    let mut index = StopTimeIndex::new();
    let mut rows = 0u64;
    for row in TableReader::open(path, SCHEMA)? {
        let row = row?;
        let trip_id = row.field(0)?.to_string();
        let stop_time = StopTime {
            stop_id: row.field(3)?.to_string(),
            arrival_time: row.field(1)?.to_string(),
            departure_time: row.field(2)?.to_string(),
        };
        index.entry(trip_id).or_default().push(stop_time);
        rows += 1;
    }

    info!(rows, elapsed = ?start.elapsed(), "parsed stop times");
    Ok(index)
}
