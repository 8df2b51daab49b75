//! Application state for the web layer.

use std::sync::Arc;

use crate::domain::RouteIndex;

/// Shared application state.
///
/// Holds the route index built at startup. Cloning is cheap; handlers
/// read the index concurrently without locking because it is never
/// mutated after construction.
#[derive(Clone)]
pub struct AppState {
    /// The route → trips index
    pub routes: Arc<RouteIndex>,
}

impl AppState {
    /// Create a new app state owning the finished index.
    pub fn new(routes: RouteIndex) -> Self {
        Self {
            routes: Arc::new(routes),
        }
    }
}
