//! Domain types for the schedule server.
//!
//! These types form the immutable artifact built at startup: trips
//! grouped by route, each trip carrying its ordered stop times. Once
//! constructed they are never mutated, so they can be shared across
//! request handlers without locking.

mod route_index;
mod stop_time;
mod trip;

pub use route_index::RouteIndex;
pub use stop_time::StopTime;
pub use trip::Trip;
