//! Query and form types for the web layer.

use serde::{Deserialize, Serialize};

use crate::browse::SortKey;

/// Query parameters for the browse page.
#[derive(Debug, Deserialize)]
pub struct BrowseQuery {
    /// Date to show (`YYYY-MM-DD`); defaults to today.
    pub date: Option<String>,

    /// Sort order; defaults to name.
    pub sort: Option<SortKey>,
}

/// Form body for triggering enrichment.
#[derive(Debug, Deserialize)]
pub struct EnrichForm {
    /// The user's origin address.
    pub address: String,

    /// Routing API key; falls back to the stored one when absent.
    #[serde(default)]
    pub api_key: Option<String>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
