//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated Ning network name.
///
/// The network name is the subdomain of the Ning network
/// (`mynetwork` for `mynetwork.ning.com`) and appears as a path segment in
/// every API URL.
///
/// # Example
///
/// ```rust
/// use ning_api::NetworkName;
///
/// let network = NetworkName::new("MyNetwork").unwrap();
/// assert_eq!(network.as_ref(), "mynetwork");
///
/// // The ".ning.com" suffix is stripped
/// let network = NetworkName::new("mynetwork.ning.com").unwrap();
/// assert_eq!(network.as_ref(), "mynetwork");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetworkName(String);

impl NetworkName {
    const SUFFIX: &'static str = ".ning.com";

    /// Creates a new validated network name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyNetworkName`] if the name is empty, or
    /// [`ConfigError::InvalidNetworkName`] if it contains anything other than
    /// ASCII letters, digits and hyphens.
    pub fn new(name: impl Into<String>) -> Result<Self, ConfigError> {
        let name: String = name.into();
        let name = name.trim().to_lowercase();
        let name = name
            .strip_suffix(Self::SUFFIX)
            .map_or_else(|| name.clone(), str::to_string);

        if name.is_empty() {
            return Err(ConfigError::EmptyNetworkName);
        }

        let valid = !name.starts_with('-')
            && !name.ends_with('-')
            && name
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
        if !valid {
            return Err(ConfigError::InvalidNetworkName { name });
        }

        Ok(Self(name))
    }
}

impl AsRef<str> for NetworkName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NetworkName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for NetworkName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for NetworkName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// An access token sent with every request.
///
/// The token is passed through verbatim as the `Authorization` header value;
/// producing it (OAuth signing) is the caller's business.
///
/// # Security
///
/// The `Debug` implementation masks the value, displaying only
/// `AccessToken(*****)`.
///
/// # Example
///
/// ```rust
/// use ning_api::AccessToken;
///
/// let token = AccessToken::new("OAuth oauth_token=\"abc\"").unwrap();
/// assert_eq!(format!("{:?}", token), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

/// A validated API host URL.
///
/// Only `http` and `https` hosts are accepted. A trailing slash is removed
/// so the API base path can be appended directly.
///
/// # Example
///
/// ```rust
/// use ning_api::HostUrl;
///
/// let url = HostUrl::new("https://external.ning.com/").unwrap();
/// assert_eq!(url.host_name(), "external.ning.com");
/// assert_eq!(url.as_ref(), "https://external.ning.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostUrl {
    url: String,
    host_start: usize,
    host_end: usize,
}

impl HostUrl {
    /// Creates a new validated host URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHostUrl`] if the scheme is not `http`
    /// or `https`, or the host is missing.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url: String = url.into();
        let url = url.trim().trim_end_matches('/').to_string();
        let invalid = || ConfigError::InvalidHostUrl { url: url.clone() };

        let (scheme, rest) = url.split_once("://").ok_or_else(invalid)?;
        if scheme != "http" && scheme != "https" {
            return Err(invalid());
        }

        // Host runs up to a port, path, query or fragment
        let host_len = rest.find([':', '/', '?', '#']).unwrap_or(rest.len());
        if host_len == 0 {
            return Err(invalid());
        }

        let host_start = scheme.len() + "://".len();
        Ok(Self {
            host_start,
            host_end: host_start + host_len,
            url,
        })
    }

    /// Returns the host name, without scheme, port or path.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }
}

impl AsRef<str> for HostUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}
