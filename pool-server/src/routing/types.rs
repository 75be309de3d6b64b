//! Wire types for the distance-matrix API.
//!
//! The request is a flat list of locations with the caller's own address
//! first; the response carries `distance` (km) and `time` (seconds) arrays
//! parallel to it, possibly with a redundant leading self-entry.

use serde::{Deserialize, Serialize};

/// Request body: the origin address followed by facility addresses.
#[derive(Debug, Serialize)]
pub struct MatrixRequest<'a> {
    pub locations: &'a [String],
}

/// Raw response body, before validation.
#[derive(Debug, Deserialize)]
pub struct MatrixResponse {
    /// Distances in kilometres, parallel to the request locations.
    #[serde(default)]
    pub distance: Option<Vec<f64>>,

    /// Travel times in seconds, parallel to the request locations.
    #[serde(default)]
    pub time: Option<Vec<f64>>,

    /// Provider-reported failure.
    #[serde(default)]
    pub error: Option<ProviderError>,
}

/// Provider error object.
#[derive(Debug, Deserialize)]
pub struct ProviderError {
    pub message: String,
}

/// A decoded, present pair of distance/time arrays.
///
/// Lengths are NOT yet validated against any batch; that happens where the
/// batch size is known.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    pub distances: Vec<f64>,
    pub times: Vec<f64>,
}
