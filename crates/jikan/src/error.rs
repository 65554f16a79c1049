//! Error types for the Jikan client.
//!
//! Nothing in this crate retries: every variant is handed back to the caller
//! of the facade method that triggered it.

use crate::api::types::ApiErrorBody;
use thiserror::Error;

/// Boxed error carried by transport failures
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors returned by the Jikan client
#[derive(Debug, Error)]
pub enum JikanError {
    /// A path parameter was supplied that the endpoint template has no placeholder for
    #[error("path \"{template}\" does not contain parameter placeholder \"{{{key}}}\"")]
    TemplateMismatch { template: String, key: String },

    /// One or more placeholders were left unresolved
    #[error("missing required path parameters for \"{template}\": {}", .names.join(", "))]
    MissingParameter { template: String, names: Vec<String> },

    /// The API answered with a non-2xx status
    #[error("upstream returned HTTP {status}: {message}")]
    UpstreamHttp {
        status: u16,
        message: String,
        /// Parsed error envelope, when the body carried one
        error: Option<ApiErrorBody>,
        /// Raw response body
        body: String,
    },

    /// Network-level failure with no HTTP status (timeout, DNS, reset)
    #[error("transport failure: {message}")]
    Transport {
        message: String,
        #[source]
        source: BoxError,
    },

    /// The response body did not match the expected shape
    #[error("failed to decode response at '{path}': {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Query parameters could not be flattened into `name=value` pairs
    #[error("invalid query parameters: {0}")]
    InvalidQuery(String),

    /// Client options could not be turned into a working client
    #[error("invalid client configuration: {0}")]
    Config(String),
}

impl JikanError {
    /// Build an `UpstreamHttp` error from a status and raw body
    pub fn upstream(status: u16, body: String) -> Self {
        let error = serde_json::from_str::<ApiErrorBody>(&body).ok();
        let message = match &error {
            Some(e) if !e.message.is_empty() => e.message.clone(),
            _ if body.is_empty() => "no response body".to_string(),
            _ => body.clone(),
        };

        JikanError::UpstreamHttp {
            status,
            message,
            error,
            body,
        }
    }

    /// Build a `Transport` error from any underlying failure
    pub fn transport(source: impl Into<BoxError>) -> Self {
        let source = source.into();
        JikanError::Transport {
            message: source.to_string(),
            source,
        }
    }

    /// HTTP status code, if the failure came from the API
    pub fn status(&self) -> Option<u16> {
        match self {
            JikanError::UpstreamHttp { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the API reported the resource as unknown
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Whether a caller-side retry could plausibly succeed
    ///
    /// The client never acts on this itself.
    pub fn is_retryable(&self) -> bool {
        match self {
            JikanError::Transport { .. } => true,
            JikanError::UpstreamHttp { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for JikanError {
    fn from(e: reqwest::Error) -> Self {
        JikanError::transport(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_parses_error_envelope() {
        let body = r#"{"status":404,"type":"BadResponseException","message":"Resource does not exist","error":"404 on https://myanimelist.net/anime/999999999/"}"#;
        let err = JikanError::upstream(404, body.to_string());

        assert_eq!(err.status(), Some(404));
        assert!(err.is_not_found());
        assert!(!err.is_retryable());
        match &err {
            JikanError::UpstreamHttp { message, error, .. } => {
                assert_eq!(message, "Resource does not exist");
                let envelope = error.as_ref().unwrap();
                assert_eq!(envelope.error_type, "BadResponseException");
                assert!(envelope.report_url.is_none());
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(
            err.to_string(),
            "upstream returned HTTP 404: Resource does not exist"
        );
    }

    #[test]
    fn test_upstream_keeps_non_json_body() {
        let err = JikanError::upstream(502, "Bad Gateway".to_string());
        assert!(err.is_retryable());
        match err {
            JikanError::UpstreamHttp { message, error, .. } => {
                assert_eq!(message, "Bad Gateway");
                assert!(error.is_none());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_path_errors_display() {
        let err = JikanError::TemplateMismatch {
            template: "/anime/{id}".to_string(),
            key: "foo".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "path \"/anime/{id}\" does not contain parameter placeholder \"{foo}\""
        );

        let err = JikanError::MissingParameter {
            template: "/anime/{id}/episodes/{episode}".to_string(),
            names: vec!["id".to_string(), "episode".to_string()],
        };
        assert!(err.to_string().ends_with("id, episode"));
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_transport_error() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "connection reset");
        let err = JikanError::transport(io);
        assert!(err.is_retryable());
        assert_eq!(err.to_string(), "transport failure: connection reset");
        assert!(std::error::Error::source(&err).is_some());
    }
}
