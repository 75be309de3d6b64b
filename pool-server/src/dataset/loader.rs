//! Facility dataset loading.
//!
//! The dataset is a single JSON object mapping a facility key to its record.
//! Key order in the file becomes the base ordering of the whole application
//! (the card list before sorting), so parsing goes through a
//! `serde_json::Map`, which preserves it.

use std::path::Path;

use crate::domain::Facility;

use super::error::DatasetError;

/// Load the dataset from a JSON file.
pub fn load_dataset(path: impl AsRef<Path>) -> Result<Vec<Facility>, DatasetError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_dataset(&raw)
}

/// Parse a dataset document.
pub fn parse_dataset(json: &str) -> Result<Vec<Facility>, DatasetError> {
    let entries: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)?;

    let mut facilities = Vec::with_capacity(entries.len());
    for (key, value) in entries {
        let facility: Facility =
            serde_json::from_value(value).map_err(|e| DatasetError::Record {
                key: key.clone(),
                message: e.to_string(),
            })?;
        facilities.push(facility);
    }

    if facilities.is_empty() {
        return Err(DatasetError::Empty);
    }

    Ok(facilities)
}
