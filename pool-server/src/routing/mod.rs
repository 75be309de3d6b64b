//! Distance-matrix integration.
//!
//! Talks to the external routing API and merges travel metrics back onto
//! the facility set, batch by batch.

mod client;
mod enrich;
mod error;
mod mock;
mod types;

pub use client::{RoutingClient, RoutingConfig};
pub use enrich::{
    Batch, BatchResult, MAX_BATCH_FACILITIES, MAX_PLAUSIBLE_KM, enrich, plan_batches, run_batch,
};
pub use error::RoutingError;
pub use mock::MockMatrixProvider;
pub use types::{Matrix, MatrixRequest, MatrixResponse, ProviderError};

/// The seam between enrichment and the HTTP client, so tests can substitute
/// canned matrices for network calls.
pub trait MatrixProvider: Send + Sync {
    /// Request the distance/time matrix for a list of locations. The
    /// caller's own address must come first.
    fn matrix(
        &self,
        locations: &[String],
    ) -> impl std::future::Future<Output = Result<Matrix, RoutingError>> + Send;
}

impl MatrixProvider for RoutingClient {
    async fn matrix(&self, locations: &[String]) -> Result<Matrix, RoutingError> {
        RoutingClient::matrix(self, locations).await
    }
}
