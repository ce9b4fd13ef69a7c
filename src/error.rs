use thiserror::Error;

/// Main error type for Nagios XI API operations
#[derive(Debug, Error)]
pub enum NagiosError {
    /// Error reported inside the API's response envelope
    #[error("Nagios API error: {message}")]
    Api {
        message: String,
        /// Raw response body, kept for diagnostics
        body: String,
    },

    /// A read operation's expected object was absent from the result list
    #[error("{object_type} \"{name}\" not found")]
    NotFound { object_type: String, name: String },

    /// HTTP error status with a body that is not an API envelope
    #[error("HTTP error {status}: {body}")]
    Http {
        status: u16,
        body: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Request building error
    #[error("failed to build request: {0}")]
    RequestBuild(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP transport error (connection, timeout, TLS)
    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl NagiosError {
    /// Create a new HTTP error
    pub fn http(status: u16, body: String, source: Option<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        NagiosError::Http { status, body, source }
    }

    /// Check if this error means the requested object does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, NagiosError::NotFound { .. })
    }

    /// Check if this error is a transport-level timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, NagiosError::Reqwest(e) if e.is_timeout())
    }

    /// Get the raw response body if this error carries one
    pub fn body(&self) -> Option<&str> {
        match self {
            NagiosError::Api { body, .. } => Some(body),
            NagiosError::Http { body, .. } => Some(body),
            _ => None,
        }
    }
}

/// Result type for Nagios XI API operations
pub type Result<T> = std::result::Result<T, NagiosError>;
