//! HTTP-specific error types for the Ning API SDK.
//!
//! This module contains error types for HTTP operations:
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the API
//! - [`InvalidHttpRequestError`]: When a request fails validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! The SDK never retries; every failure is handed back to the caller.
//!
//! # Example
//!
//! ```rust,ignore
//! use ning_api::clients::HttpError;
//!
//! match connection.get("User/count", params, timeout).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(HttpError::Timeout { endpoint, timeout_ms }) => {
//!         println!("{endpoint} timed out after {timeout_ms} ms");
//!     }
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request receives a non-successful response.
///
/// # Example
///
/// ```rust
/// use ning_api::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: "User not found".to_string(),
///     error_reference: Some("abc-123".to_string()),
/// };
///
/// assert_eq!(error.to_string(), "User not found");
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The `reason` reported by the API, or the raw body when there is none.
    pub message: String,
    /// Reference ID for error reporting (from X-Request-Id header).
    pub error_reference: Option<String>,
}

/// Error returned when an HTTP request fails validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The endpoint is empty.
    #[error("Cannot send a request without an endpoint.")]
    EmptyEndpoint,

    /// A PUT request was made without a form body.
    #[error("Cannot use {method} without specifying form data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// A GET request was given a form body.
    #[error("Cannot send form data with {method}.")]
    UnexpectedBody {
        /// The HTTP method that must not carry a body.
        method: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Non-2xx HTTP response received.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// The configured read timeout expired before the response arrived.
    #[error("Request to {endpoint} timed out after {timeout_ms} ms")]
    Timeout {
        /// The endpoint that was being called.
        endpoint: String,
        /// The timeout that expired, in milliseconds.
        timeout_ms: u64,
    },

    /// Request validation failed before sending.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status code, if this error carries one.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            _ => None,
        }
    }
}
