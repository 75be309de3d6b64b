//! Mock matrix provider for testing without API access.

use std::collections::HashMap;
use std::sync::Mutex;

use super::MatrixProvider;
use super::error::RoutingError;
use super::types::Matrix;

/// Serves canned distances keyed by address and records every request.
///
/// Mimics the real `RoutingClient::matrix` interface. The first location of
/// each request (the origin) is not looked up.
#[derive(Debug, Default)]
pub struct MockMatrixProvider {
    /// Address -> (km, seconds).
    routes: HashMap<String, (f64, f64)>,

    /// Prepend a self-distance entry to every response.
    self_entry: Option<f64>,

    /// When set, every request gets this exact matrix back regardless of
    /// its locations. Used to provoke shape mismatches.
    canned: Option<Matrix>,

    /// Location lists of every request received.
    requests: Mutex<Vec<Vec<String>>>,
}

impl MockMatrixProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a route for an address.
    pub fn with_route(mut self, address: impl Into<String>, km: f64, secs: f64) -> Self {
        self.routes.insert(address.into(), (km, secs));
        self
    }

    /// Include a leading self-distance entry in every response.
    pub fn with_self_entry(mut self, distance: f64) -> Self {
        self.self_entry = Some(distance);
        self
    }

    /// Always answer with this exact matrix.
    pub fn with_canned(mut self, matrix: Matrix) -> Self {
        self.canned = Some(matrix);
        self
    }

    /// Number of requests received so far.
    pub fn request_count(&self) -> usize {
        self.requests.lock().expect("mock lock poisoned").len()
    }

    /// Location lists of every request received.
    pub fn requests(&self) -> Vec<Vec<String>> {
        self.requests.lock().expect("mock lock poisoned").clone()
    }
}

impl MatrixProvider for MockMatrixProvider {
    async fn matrix(&self, locations: &[String]) -> Result<Matrix, RoutingError> {
        self.requests
            .lock()
            .expect("mock lock poisoned")
            .push(locations.to_vec());

        if let Some(canned) = &self.canned {
            return Ok(canned.clone());
        }

        let mut distances = Vec::new();
        let mut times = Vec::new();

        if let Some(d) = self.self_entry {
            distances.push(d);
            times.push(0.0);
        }

        for address in locations.iter().skip(1) {
            let (km, secs) = self.routes.get(address).ok_or_else(|| {
                RoutingError::Provider(format!("no route data for '{address}'"))
            })?;
            distances.push(*km);
            times.push(*secs);
        }

        Ok(Matrix { distances, times })
    }
}
