//! Configuration types for the Ning API SDK.
//!
//! This module provides the configuration consumed by every request the SDK
//! issues.
//!
//! # Overview
//!
//! - [`NingConfig`]: The main configuration struct holding all SDK settings
//! - [`NingConfigBuilder`]: A builder for constructing [`NingConfig`] instances
//! - [`NetworkName`]: A validated network name newtype
//! - [`AccessToken`]: A pre-signed authorization value with masked debug output
//! - [`HostUrl`]: A validated API host URL
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use ning_api::{NingConfig, NetworkName};
//!
//! let config = NingConfig::builder()
//!     .network(NetworkName::new("mynetwork").unwrap())
//!     .read_timeout(Duration::from_secs(5))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.read_timeout_ms(), 5_000);
//! ```

mod newtypes;

pub use newtypes::{AccessToken, HostUrl, NetworkName};

use std::time::Duration;

use crate::error::ConfigError;

/// Default API host.
pub const DEFAULT_HOST: &str = "https://external.ning.com";

/// Version segment of the REST API path.
pub const API_VERSION: &str = "1.0";

/// Default read timeout applied to every terminal call.
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(10);

/// Default number of items requested per page by paged lists.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Largest page size the API accepts.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Configuration for the Ning API SDK.
///
/// The configuration is read-only once built and is shared by every request
/// builder derived from a [`NingClient`](crate::NingClient).
///
/// # Thread Safety
///
/// `NingConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct NingConfig {
    network: NetworkName,
    host: HostUrl,
    access_token: Option<AccessToken>,
    read_timeout: Duration,
    page_size: u32,
    user_agent_prefix: Option<String>,
}

impl NingConfig {
    /// Creates a new builder for constructing a `NingConfig`.
    #[must_use]
    pub fn builder() -> NingConfigBuilder {
        NingConfigBuilder::new()
    }

    /// Returns the network name.
    #[must_use]
    pub const fn network(&self) -> &NetworkName {
        &self.network
    }

    /// Returns the API host.
    #[must_use]
    pub const fn host(&self) -> &HostUrl {
        &self.host
    }

    /// Returns the access token, if configured.
    #[must_use]
    pub const fn access_token(&self) -> Option<&AccessToken> {
        self.access_token.as_ref()
    }

    /// Returns the read timeout applied to every terminal call.
    #[must_use]
    pub const fn read_timeout(&self) -> Duration {
        self.read_timeout
    }

    /// Returns the read timeout in milliseconds.
    #[must_use]
    pub fn read_timeout_ms(&self) -> u64 {
        u64::try_from(self.read_timeout.as_millis()).unwrap_or(u64::MAX)
    }

    /// Returns the number of items requested per page.
    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the path every endpoint is appended to,
    /// e.g. `/xn/rest/mynetwork/1.0`.
    #[must_use]
    pub fn base_path(&self) -> String {
        format!("/xn/rest/{}/{API_VERSION}", self.network)
    }
}

// Verify NingConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<NingConfig>();
};

/// Builder for constructing [`NingConfig`] instances.
///
/// The only required field is `network`.
///
/// # Defaults
///
/// - `host`: [`DEFAULT_HOST`]
/// - `access_token`: `None`
/// - `read_timeout`: [`DEFAULT_READ_TIMEOUT`]
/// - `page_size`: [`DEFAULT_PAGE_SIZE`]
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct NingConfigBuilder {
    network: Option<NetworkName>,
    host: Option<HostUrl>,
    access_token: Option<AccessToken>,
    read_timeout: Option<Duration>,
    page_size: Option<u32>,
    user_agent_prefix: Option<String>,
}

impl NingConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the network name (required).
    #[must_use]
    pub fn network(mut self, network: NetworkName) -> Self {
        self.network = Some(network);
        self
    }

    /// Sets the API host.
    #[must_use]
    pub fn host(mut self, host: HostUrl) -> Self {
        self.host = Some(host);
        self
    }

    /// Sets the access token sent as the `Authorization` header.
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the read timeout applied to every terminal call.
    #[must_use]
    pub const fn read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = Some(timeout);
        self
    }

    /// Sets the number of items requested per page.
    #[must_use]
    pub const fn page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`NingConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `network` is not set,
    /// and [`ConfigError::InvalidPageSize`] if the page size is zero or above
    /// [`MAX_PAGE_SIZE`].
    pub fn build(self) -> Result<NingConfig, ConfigError> {
        let network = self
            .network
            .ok_or(ConfigError::MissingRequiredField { field: "network" })?;

        let page_size = self.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        if page_size == 0 || page_size > MAX_PAGE_SIZE {
            return Err(ConfigError::InvalidPageSize {
                size: page_size,
                max: MAX_PAGE_SIZE,
            });
        }

        let host = match self.host {
            Some(host) => host,
            None => HostUrl::new(DEFAULT_HOST)?,
        };

        Ok(NingConfig {
            network,
            host,
            access_token: self.access_token,
            read_timeout: self.read_timeout.unwrap_or(DEFAULT_READ_TIMEOUT),
            page_size,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
