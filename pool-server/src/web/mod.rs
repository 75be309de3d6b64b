//! Web layer for the pool browser.
//!
//! Renders the date-filtered, sorted card list and accepts enrichment
//! requests.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
