//! One-shot batch loading of the schedule feed.
//!
//! The pipeline reads the stop-times table, groups its rows by trip,
//! then reads the trips table and joins the two into a [`RouteIndex`].
//! Everything runs synchronously at startup; the first error aborts the
//! whole load, so a malformed feed never produces a partially built
//! index.

mod error;
pub mod stop_times;
mod table;
pub mod trips;

pub use error::FeedError;
pub use stop_times::StopTimeIndex;
pub use table::{Row, TableReader, TableSchema};

use std::path::PathBuf;

use crate::domain::RouteIndex;

/// Locations of the two source tables.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Path to stop_times.txt
    pub stop_times_path: PathBuf,
    /// Path to trips.txt
    pub trips_path: PathBuf,
}

impl FeedConfig {
    /// Create a config from the two table paths.
    pub fn new(stop_times_path: impl Into<PathBuf>, trips_path: impl Into<PathBuf>) -> Self {
        Self {
            stop_times_path: stop_times_path.into(),
            trips_path: trips_path.into(),
        }
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            stop_times_path: PathBuf::from("MBTA_GTFS/stop_times.txt"),
            trips_path: PathBuf::from("MBTA_GTFS/trips.txt"),
        }
    }
}

/// Run the whole load pipeline and return the finished index.
///
/// Both tables are read fully into memory; the intermediate stop-time
/// grouping is dropped once the join is done. For fixed input files the
/// result is deterministic.
pub fn load_route_index(config: &FeedConfig) -> Result<RouteIndex, FeedError> {
    let stop_times = stop_times::load(&config.stop_times_path)?;
    trips::load(&config.trips_path, &stop_times)
}
