/*
[INPUT]:  Error sources (transport, API responses, serialization, validation)
[OUTPUT]: Structured error types with status classification helpers
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error body returned by the API for non-2xx responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{code}: {message} (HTTP {status_code})")]
pub struct ApiError {
    pub code: String,
    pub message: String,
    #[serde(skip)]
    pub status_code: u16,
}

impl ApiError {
    /// Build an error from the response status and raw body.
    ///
    /// The body is expected to be `{"code": ..., "message": ...}`; anything
    /// else is kept verbatim as the message.
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        #[derive(Deserialize)]
        struct ErrorBody {
            #[serde(default)]
            code: Option<String>,
            #[serde(default)]
            message: Option<String>,
        }

        let reason = status.canonical_reason().unwrap_or("Unknown Status");
        let trimmed = body.trim();

        match serde_json::from_str::<ErrorBody>(trimmed) {
            Ok(parsed) if parsed.code.is_some() || parsed.message.is_some() => Self {
                code: parsed.code.unwrap_or_else(|| "UNKNOWN".to_string()),
                message: parsed.message.unwrap_or_else(|| reason.to_string()),
                status_code: status.as_u16(),
            },
            _ => Self {
                code: "UNKNOWN".to_string(),
                message: if trimmed.is_empty() {
                    reason.to_string()
                } else {
                    trimmed.to_string()
                },
                status_code: status.as_u16(),
            },
        }
    }

    /// 404
    pub fn is_not_found(&self) -> bool {
        self.status_code == StatusCode::NOT_FOUND.as_u16()
    }

    /// 401
    pub fn is_unauthorized(&self) -> bool {
        self.status_code == StatusCode::UNAUTHORIZED.as_u16()
    }

    /// 400
    pub fn is_bad_request(&self) -> bool {
        self.status_code == StatusCode::BAD_REQUEST.as_u16()
    }
}

/// Main error type for the UQPAY SDK
#[derive(Error, Debug)]
pub enum UqpayError {
    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-2xx response
    #[error("API error {0}")]
    Api(#[from] ApiError),

    /// A 2xx response body could not be decoded
    #[error("failed to decode response: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    /// Request body could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Header value rejected by the HTTP layer
    #[error("Invalid header value: {0}")]
    InvalidHeader(String),

    /// Request rejected locally before being sent
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Local I/O failed (reading an upload)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The request context was cancelled while the request was in flight
    #[error("request cancelled")]
    Cancelled,

    /// Error annotated with the resource operation that produced it
    #[error("{operation}: {source}")]
    Operation {
        operation: String,
        #[source]
        source: Box<UqpayError>,
    },
}

impl UqpayError {
    /// Wrap the error with an operation-specific message, e.g. "failed to get payout".
    pub fn context(self, operation: impl Into<String>) -> Self {
        UqpayError::Operation {
            operation: operation.into(),
            source: Box::new(self),
        }
    }

    /// Innermost error, skipping operation wrappers
    pub fn root(&self) -> &UqpayError {
        let mut current = self;
        while let UqpayError::Operation { source, .. } = current {
            current = source;
        }
        current
    }

    /// The API error behind this error, if the server answered with non-2xx
    pub fn api_error(&self) -> Option<&ApiError> {
        match self.root() {
            UqpayError::Api(err) => Some(err),
            _ => None,
        }
    }

    /// HTTP status of the API error, if any
    pub fn status_code(&self) -> Option<u16> {
        self.api_error().map(|err| err.status_code)
    }

    pub fn is_not_found(&self) -> bool {
        self.api_error().is_some_and(ApiError::is_not_found)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.api_error().is_some_and(ApiError::is_unauthorized)
    }

    pub fn is_bad_request(&self) -> bool {
        self.api_error().is_some_and(ApiError::is_bad_request)
    }

    /// Check if the error happened at the transport level (DNS, connect, TLS, timeout)
    pub fn is_transport(&self) -> bool {
        matches!(self.root(), UqpayError::Http(_))
    }

    /// Check if a 2xx response carried an undecodable body
    pub fn is_decode(&self) -> bool {
        matches!(self.root(), UqpayError::Decode { .. })
    }

    /// Check if the request was cancelled through its context
    pub fn is_cancelled(&self) -> bool {
        matches!(self.root(), UqpayError::Cancelled)
    }
}

/// Result type alias for UQPAY operations
pub type Result<T> = std::result::Result<T, UqpayError>;

/// Attach the resource operation name to an error result
pub(crate) trait ResultExt<T> {
    fn context(self, operation: &str) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, operation: &str) -> Result<T> {
        self.map_err(|err| err.context(operation))
    }
}
