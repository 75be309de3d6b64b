//! Application state for the web layer.

use std::sync::Arc;

use crate::browse::CardCache;
use crate::dataset::FacilityStore;
use crate::keystore::KeyStore;
use crate::status::StatusLog;

/// Shared application state.
///
/// One explicit struct, constructed at startup and handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// The facility dataset.
    pub facilities: FacilityStore,

    /// Built-card cache.
    pub cards: CardCache,

    /// Append-only status log rendered on the page.
    pub status: StatusLog,

    /// Persisted routing API credential.
    pub keys: Arc<KeyStore>,

    /// Override for the routing API base URL (tests, self-hosted proxies).
    pub routing_base_url: Option<String>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        facilities: FacilityStore,
        cards: CardCache,
        status: StatusLog,
        keys: KeyStore,
        routing_base_url: Option<String>,
    ) -> Self {
        Self {
            facilities,
            cards,
            status,
            keys: Arc::new(keys),
            routing_base_url,
        }
    }
}
