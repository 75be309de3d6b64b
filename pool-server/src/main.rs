use std::net::SocketAddr;

use pool_server::browse::CardCache;
use pool_server::dataset::FacilityStore;
use pool_server::keystore::KeyStore;
use pool_server::status::StatusLog;
use pool_server::web::{AppState, create_router};

/// Default dataset location, relative to the working directory.
const DEFAULT_DATA_PATH: &str = "pool-server/data/pools.json";

/// Default static assets location.
const DEFAULT_STATIC_DIR: &str = "pool-server/static";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pool_server=info".into()),
        )
        .init();

    // Dataset path: CLI arg, then POOL_DATA, then the default.
    let data_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("POOL_DATA").ok())
        .unwrap_or_else(|| DEFAULT_DATA_PATH.to_string());

    // Load the dataset (fail fast if unavailable).
    let facilities = FacilityStore::load(&data_path).expect("Failed to load pool dataset");
    println!("Loaded {} pools from {}", facilities.len().await, data_path);

    // The routing API key lives in a fixed-name file in this directory.
    let key_dir = std::env::var("POOL_KEY_DIR").unwrap_or_else(|_| ".".to_string());
    let keys = KeyStore::new(&key_dir);
    if keys.load().is_some() {
        println!("Found a stored routing API key");
    }

    let routing_base_url = std::env::var("ROUTING_BASE_URL").ok();

    // Build app state
    let state = AppState::new(
        facilities,
        CardCache::default(),
        StatusLog::new(),
        keys,
        routing_base_url,
    );

    // Create router
    let static_dir =
        std::env::var("POOL_STATIC_DIR").unwrap_or_else(|_| DEFAULT_STATIC_DIR.to_string());
    let app = create_router(state, &static_dir);

    // Bind and serve
    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Pool Browser listening on http://{addr}");
    println!();
    println!("Open http://{addr} in your browser to pick a date.");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
