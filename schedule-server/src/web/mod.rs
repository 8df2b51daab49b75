//! Web layer for the schedule server.
//!
//! Thin JSON wrapper over the route index: one lookup endpoint and a
//! health check.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
