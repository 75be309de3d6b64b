//! Routing client error types.

use std::fmt;

/// Errors from the distance-matrix client and batch validation.
#[derive(Debug)]
pub enum RoutingError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// JSON deserialization failed
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error status code
    ApiError { status: u16, message: String },

    /// Provider reported a location/routing problem in the response body
    Provider(String),

    /// Response body lacked the distance/time arrays
    MissingMatrix,

    /// Response array lengths did not match the request
    ShapeMismatch { expected: usize, actual: usize },

    /// The leading self-distance entry was not zero
    SelfDistance(f64),

    /// Invalid or rejected API key
    Unauthorized,

    /// Rate limited by the provider
    RateLimited,

    /// Client not usable (bad key format, no networking)
    NotConfigured(String),
}

impl fmt::Display for RoutingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoutingError::Http(e) => write!(f, "HTTP error: {e}"),
            RoutingError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            RoutingError::ApiError { status, message } => {
                write!(f, "API error {status}: {message}")
            }
            RoutingError::Provider(message) => write!(f, "provider error: {message}"),
            RoutingError::MissingMatrix => {
                write!(f, "response carried no distance/time arrays")
            }
            RoutingError::ShapeMismatch { expected, actual } => write!(
                f,
                "response shape mismatch: expected {expected} entries, got {actual}"
            ),
            RoutingError::SelfDistance(d) => {
                write!(f, "leading self-distance entry was {d}, expected 0")
            }
            RoutingError::Unauthorized => write!(f, "unauthorized (invalid API key)"),
            RoutingError::RateLimited => write!(f, "rate limited by routing API"),
            RoutingError::NotConfigured(msg) => write!(f, "not configured: {msg}"),
        }
    }
}

impl std::error::Error for RoutingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RoutingError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for RoutingError {
    fn from(err: reqwest::Error) -> Self {
        RoutingError::Http(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = RoutingError::ShapeMismatch {
            expected: 3,
            actual: 5,
        };
        assert_eq!(
            err.to_string(),
            "response shape mismatch: expected 3 entries, got 5"
        );

        let err = RoutingError::Provider("could not geocode '123 Nowhere'".into());
        assert!(err.to_string().contains("could not geocode"));

        let err = RoutingError::SelfDistance(0.4);
        assert!(err.to_string().contains("0.4"));

        let err = RoutingError::Json {
            message: "expected value".into(),
            body: Some("<html>".into()),
        };
        assert!(err.to_string().contains("JSON parse error"));
        assert!(err.to_string().contains("<html>"));
    }
}
