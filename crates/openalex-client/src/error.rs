//! Error types for the OpenAlex client.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.
//! A missing entity is not an error: single-entity lookups return `Ok(None)`.

use reqwest_retry::RetryError;

use crate::models::EntityType;

/// Errors from the OpenAlex client.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// Caller supplied an empty id, an empty id list, or an id of the wrong type.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Identifier prefix does not map to any known entity type.
    #[error("Unrecognized identifier: {id}")]
    UnrecognizedIdentifier {
        /// The normalized identifier
        id: String,
    },

    /// Timeout or connection failure that outlasted the retry ceiling
    #[error("Network unavailable after retries: {source}")]
    TransientNetwork {
        /// Last transport error seen
        #[source]
        source: reqwest::Error,
    },

    /// The service refused the request (403 response)
    #[error("Request rejected by OpenAlex (403): {message}")]
    RemoteRejected {
        /// Guidance for the caller
        message: String,
    },

    /// Any other non-2xx response
    #[error("OpenAlex returned status {status}: {message}")]
    RemoteError {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },

    /// A batch response contained an entity of a different type than requested
    #[error("Inconsistent batch: expected {expected} ids but the response contained {found}")]
    InconsistentBatch {
        /// Entity type classified from the first id
        expected: EntityType,
        /// Offending entity id from the response
        found: String,
    },

    /// JSON parsing error or schema violation
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The operation was cancelled through its cancellation token
    #[error("Operation cancelled")]
    Cancelled,

    /// HTTP transport error (TLS, body read, redirect loop, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Middleware error
    #[error("Middleware error: {0}")]
    Middleware(anyhow::Error),

    /// Configuration value outside its allowed range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ClientError {
    /// Create an invalid argument error.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create an unrecognized identifier error.
    #[must_use]
    pub fn unrecognized(id: impl Into<String>) -> Self {
        Self::UnrecognizedIdentifier { id: id.into() }
    }

    /// Create a rejection error for a 403 response.
    #[must_use]
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::RemoteRejected { message: message.into() }
    }

    /// Create a remote error for a non-2xx response.
    #[must_use]
    pub fn remote(status: u16, message: impl Into<String>) -> Self {
        Self::RemoteError { status, message: message.into() }
    }

    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    /// Returns true if this error came from the network layer giving up on retries.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::TransientNetwork { .. })
    }

    /// HTTP status code carried by the error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::RemoteRejected { .. } => Some(403),
            Self::RemoteError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest_middleware::Error> for ClientError {
    fn from(err: reqwest_middleware::Error) -> Self {
        match err {
            reqwest_middleware::Error::Reqwest(e) => classify_transport(e),
            // The retry middleware wraps the final transport error once it gives up.
            reqwest_middleware::Error::Middleware(e) => match e.downcast::<RetryError>() {
                Ok(RetryError::WithRetries { err, .. } | RetryError::Error(err)) => Self::from(err),
                Err(e) => Self::Middleware(e),
            },
        }
    }
}

/// Timeouts and connection failures are the only errors worth retrying.
#[must_use]
pub fn is_connectivity_failure(err: &reqwest::Error) -> bool {
    err.is_timeout() || err.is_connect()
}

pub(crate) fn classify_transport(err: reqwest::Error) -> ClientError {
    if is_connectivity_failure(&err) {
        ClientError::TransientNetwork { source: err }
    } else {
        ClientError::Http(err)
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;
