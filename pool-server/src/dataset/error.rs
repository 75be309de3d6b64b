//! Dataset loading errors.

/// Errors raised while loading the facility dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// The dataset file could not be read.
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file was not a JSON object of facility records.
    #[error("dataset is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// One record did not match the facility schema.
    #[error("invalid facility record {key}: {message}")]
    Record { key: String, message: String },

    /// The dataset parsed but contained nothing to render.
    #[error("dataset contains no facilities")]
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DatasetError::Empty;
        assert_eq!(err.to_string(), "dataset contains no facilities");

        let err = DatasetError::Record {
            key: "york-recreation-centre".into(),
            message: "missing field `name`".into(),
        };
        assert!(err.to_string().contains("york-recreation-centre"));
        assert!(err.to_string().contains("missing field"));
    }
}
