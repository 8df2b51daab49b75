use std::net::SocketAddr;
use std::path::PathBuf;

use schedule_server::feed::{FeedConfig, load_route_index};
use schedule_server::web::{AppState, create_router};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Table paths from the environment, falling back to the bundled feed layout
    let defaults = FeedConfig::default();
    let config = FeedConfig::new(
        std::env::var_os("GTFS_STOP_TIMES")
            .map(PathBuf::from)
            .unwrap_or(defaults.stop_times_path),
        std::env::var_os("GTFS_TRIPS")
            .map(PathBuf::from)
            .unwrap_or(defaults.trips_path),
    );

    // Load the feed before accepting any traffic; a load failure aborts startup
    let index = match load_route_index(&config) {
        Ok(index) => index,
        Err(e) => {
            eprintln!("Failed to load schedule feed: {e}");
            std::process::exit(1);
        }
    };
    println!(
        "Loaded {} trips across {} routes",
        index.trip_count(),
        index.route_count()
    );

    // Build app state and router
    let state = AppState::new(index);
    let app = create_router(state);

    // Bind and serve
    let addr = SocketAddr::from(([0, 0, 0, 0], 4000));
    println!("Schedule server listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET /health                - Health check");
    println!("  GET /schedules/<route_id>  - Trips for a route, with stop times");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
