//! Trip type.

use super::StopTime;

/// One scheduled run of a vehicle along a route.
///
/// `schedules` holds the trip's stop times in the order their rows
/// appeared in the stop-times table. A trip with no stop-time rows has
/// an empty `schedules`; that is missing data, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trip {
    /// Trip identifier
    pub trip_id: String,
    /// Calendar reference, opaque to this server
    pub service_id: String,
    /// Route this trip belongs to
    pub route_id: String,
    /// Ordered stop visits
    pub schedules: Vec<StopTime>,
}
