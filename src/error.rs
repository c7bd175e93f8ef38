//! Error types for the Shopware Admin API client.
//!
//! Every failed HTTP exchange is surfaced with its status code and the raw
//! response body so callers can diagnose what the remote API rejected.

use thiserror::Error;

/// A specialized `Result` type for Shopware Admin API operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all Shopware Admin API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP transport failed (connection refused, timeout, TLS, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Serializing a request body to JSON failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The OAuth token exchange returned a non-success status
    #[error("Authentication failed: status={status}, body={body}")]
    Authentication {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// A product endpoint returned a non-success status
    #[error("API error: status={status}, body={body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// A success status was returned with a body that is not the expected JSON
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Invalid input provided to a function
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// HTTP status code carried by the error, if it came from a response.
    ///
    /// # Example
    ///
    /// ```
    /// use shopware_admin::Error;
    ///
    /// let err = Error::Api { status: 404, body: "{}".into() };
    /// assert_eq!(err.status(), Some(404));
    /// ```
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Authentication { status, .. } | Error::Api { status, .. } => Some(*status),
            Error::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Raw response body carried by the error, if any.
    pub fn body(&self) -> Option<&str> {
        match self {
            Error::Authentication { body, .. } | Error::Api { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Returns `true` if this is an authentication-related error.
    pub fn is_auth_error(&self) -> bool {
        match self {
            Error::Authentication { .. } => true,
            Error::Api { status, .. } => *status == 401,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a client-side issue
    /// (invalid input, bad request, etc.).
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::Api { status, .. } | Error::Authentication { status, .. } => {
                (400..500).contains(status)
            }
            Error::InvalidInput(_) => true,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a server-side issue.
    pub fn is_server_error(&self) -> bool {
        match self {
            Error::Api { status, .. } | Error::Authentication { status, .. } => *status >= 500,
            _ => false,
        }
    }
}
