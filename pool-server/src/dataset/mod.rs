//! Facility dataset loading and shared storage.

mod error;
mod loader;
mod store;

pub use error::DatasetError;
pub use loader::{load_dataset, parse_dataset};
pub use store::{FacilityStore, MetricUpdate};
