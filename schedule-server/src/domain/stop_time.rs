//! Scheduled stop visits.

/// One scheduled stop visit on a trip.
///
/// Times are kept as the feed's time-of-day strings. GTFS allows values
/// past `24:00:00` for trips running over midnight, so they are stored
/// verbatim and never parsed or compared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopTime {
    /// Stop identifier
    pub stop_id: String,
    /// Scheduled arrival time
    pub arrival_time: String,
    /// Scheduled departure time
    pub departure_time: String,
}
