//! Top-level client for one Ning network.
//!
//! This module provides [`NingClient`], which owns the configuration and the
//! connection that every request builder borrows.

use crate::access::Users;
use crate::clients::{HttpError, NingConnection};
use crate::config::NingConfig;

/// Client for the REST API of one Ning network.
///
/// The client owns its [`NingConfig`] and [`NingConnection`]; resource
/// facades such as [`Users`] borrow both, so builders never outlive the
/// client that produced them.
///
/// # Thread Safety
///
/// `NingClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use ning_api::{AccessToken, NetworkName, NingClient, NingConfig};
///
/// let config = NingConfig::builder()
///     .network(NetworkName::new("example")?)
///     .access_token(AccessToken::new("OAuth oauth_token=...")?)
///     .build()?;
///
/// let client = NingClient::new(config)?;
/// let total = client.users().counter(created_after).count().await?;
/// ```
#[derive(Debug)]
pub struct NingClient {
    config: NingConfig,
    connection: NingConnection,
}

// Verify NingClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<NingClient>();
};

impl NingClient {
    /// Creates a client for the network described by `config`.
    ///
    /// No network traffic happens here.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the HTTP client cannot be created.
    pub fn new(config: NingConfig) -> Result<Self, HttpError> {
        let connection = NingConnection::new(&config)?;
        Ok(Self { config, connection })
    }

    /// Returns the request builders for network members.
    #[must_use]
    pub const fn users(&self) -> Users<'_> {
        Users::new(&self.connection, &self.config)
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &NingConfig {
        &self.config
    }

    /// Returns the underlying connection.
    #[must_use]
    pub const fn connection(&self) -> &NingConnection {
        &self.connection
    }
}
