//! Connection handle shared by every request builder.
//!
//! [`NingConnection`] exposes the two verbs the Ning API needs, `get` with
//! query parameters and `put` with form parameters, each bounded by a read
//! timeout.

use std::time::Duration;

use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, Params};
use crate::config::NingConfig;

/// Connection to one Ning network.
///
/// The connection is read-only after construction and can be shared by any
/// number of request builders.
///
/// # Example
///
/// ```rust,ignore
/// use std::time::Duration;
/// use ning_api::clients::{NingConnection, Params};
///
/// let connection = NingConnection::new(&config)?;
/// let params = Params::new().with("createdAfter", "2010-01-01T00:00:00.000Z");
/// let response = connection.get("User/count", params, Duration::from_secs(5)).await?;
/// println!("{:?}", response.count());
/// ```
#[derive(Debug)]
pub struct NingConnection {
    http_client: HttpClient,
}

// Verify NingConnection is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<NingConnection>();
};

impl NingConnection {
    /// Opens a connection for the given configuration.
    ///
    /// No network traffic happens here.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the HTTP client cannot be created.
    pub fn new(config: &NingConfig) -> Result<Self, HttpError> {
        tracing::debug!(
            network = %config.network(),
            host = config.host().host_name(),
            "creating Ning API connection"
        );
        Ok(Self {
            http_client: HttpClient::new(config)?,
        })
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Sends a GET request with the given query parameters.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for invalid requests, timeouts, network errors
    /// and non-2xx responses.
    pub async fn get(
        &self,
        endpoint: &str,
        query: Params,
        timeout: Duration,
    ) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Get, endpoint)
            .query(query)
            .build()?;
        self.http_client.request(request, timeout).await
    }

    /// Sends a PUT request with the given form parameters.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for invalid requests, timeouts, network errors
    /// and non-2xx responses.
    pub async fn put(
        &self,
        endpoint: &str,
        form: Params,
        timeout: Duration,
    ) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Put, endpoint)
            .form(form)
            .build()?;
        self.http_client.request(request, timeout).await
    }
}
