//! Data transfer objects for web responses.

use serde::Serialize;

use crate::domain::{StopTime, Trip};

/// A trip in a schedule lookup response.
#[derive(Debug, Serialize)]
pub struct TripResult {
    /// Trip identifier
    pub trip_id: String,

    /// Calendar reference
    pub service_id: String,

    /// Route the trip belongs to
    pub route_id: String,

    /// Ordered stop times; empty if the trip has none
    pub schedules: Vec<StopTimeResult>,
}

impl TripResult {
    /// Build a response object from a domain trip.
    pub fn from_trip(trip: &Trip) -> Self {
        Self {
            trip_id: trip.trip_id.clone(),
            service_id: trip.service_id.clone(),
            route_id: trip.route_id.clone(),
            schedules: trip
                .schedules
                .iter()
                .map(StopTimeResult::from_stop_time)
                .collect(),
        }
    }
}

/// A scheduled stop visit in a trip response.
#[derive(Debug, Serialize)]
pub struct StopTimeResult {
    /// Stop identifier
    pub stop_id: String,

    /// Scheduled arrival time
    pub arrival_time: String,

    /// Scheduled departure time
    pub departure_time: String,
}

impl StopTimeResult {
    /// Build a response object from a domain stop time.
    pub fn from_stop_time(stop_time: &StopTime) -> Self {
        Self {
            stop_id: stop_time.stop_id.clone(),
            arrival_time: stop_time.arrival_time.clone(),
            departure_time: stop_time.departure_time.clone(),
        }
    }
}
