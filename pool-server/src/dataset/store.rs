//! Shared facility collection.
//!
//! The dataset is loaded once and then shared between the render path
//! (reads) and the enrichment pipeline (writes). Reads take a snapshot so
//! rendering never holds the lock across template work; writes are short
//! positional merges.

use std::path::Path;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::Facility;

use super::error::DatasetError;
use super::loader::load_dataset;

/// A distance/time pair to merge onto one facility, addressed by name.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricUpdate {
    /// Facility name (unique across the dataset).
    pub name: String,
    /// Travel distance in kilometres.
    pub distance_km: f64,
    /// Travel time in seconds.
    pub travel_time_secs: f64,
}

/// Shared, mutable facility collection in dataset order.
#[derive(Clone)]
pub struct FacilityStore {
    facilities: Arc<RwLock<Vec<Facility>>>,
}

impl FacilityStore {
    /// Wrap an already-loaded facility list.
    pub fn new(facilities: Vec<Facility>) -> Self {
        Self {
            facilities: Arc::new(RwLock::new(facilities)),
        }
    }

    /// Load the dataset from disk. Called once at startup.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        Ok(Self::new(load_dataset(path)?))
    }

    /// A snapshot of every facility, in base order.
    pub async fn snapshot(&self) -> Vec<Facility> {
        self.facilities.read().await.clone()
    }

    /// Number of facilities.
    pub async fn len(&self) -> usize {
        self.facilities.read().await.len()
    }

    /// Merge enrichment metrics onto facilities by name.
    ///
    /// Unknown names are skipped (the dataset cannot shrink mid-session, but
    /// a stale batch must not fail the whole merge). Returns how many
    /// facilities were updated.
    pub async fn apply_metrics(&self, updates: &[MetricUpdate]) -> usize {
        let mut facilities = self.facilities.write().await;

        let mut applied = 0;
        for update in updates {
            if let Some(facility) = facilities.iter_mut().find(|f| f.name == update.name) {
                facility.distance = Some(update.distance_km);
                facility.travel_time = Some(update.travel_time_secs);
                applied += 1;
            } else {
                tracing::warn!(name = %update.name, "metric update for unknown facility");
            }
        }

        applied
    }
}
