//! GTFS schedule lookup server.
//!
//! Loads a feed's trips and stop times once at startup, joins them into
//! an immutable per-route index, and serves each route's trips (with
//! their ordered stop times) as JSON.

pub mod domain;
pub mod feed;
pub mod web;
