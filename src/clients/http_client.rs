//! HTTP client for Ning API communication.
//!
//! This module provides the [`HttpClient`] type, the transport every request
//! builder eventually calls into.

use std::collections::HashMap;
use std::time::Duration;

use serde_json::Value;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::NingConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Ning API.
///
/// The client handles:
/// - Base URI construction from the configured host and network
/// - Default headers including User-Agent and the access token
/// - Per-request read timeouts
/// - Mapping non-2xx responses and timeouts to [`HttpError`]
///
/// Requests are never retried.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    /// Base URI (e.g., `https://external.ning.com`).
    base_uri: String,
    /// Base path (e.g., `/xn/rest/mynetwork/1.0`).
    base_path: String,
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(config: &NingConfig) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Ning API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        if let Some(token) = config.access_token() {
            default_headers.insert("Authorization".to_string(), token.as_ref().to_string());
        }

        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            client,
            base_uri: config.host().as_ref().to_string(),
            base_path: config.base_path(),
            default_headers,
        })
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the base path for this client.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the full URL for an endpoint, without query string.
    #[must_use]
    pub fn url_for(&self, endpoint: &str) -> String {
        format!(
            "{}{}/{}",
            self.base_uri,
            self.base_path,
            endpoint.trim_start_matches('/')
        )
    }

    /// Returns the full URL of `request`, query string included.
    ///
    /// Form parameters of a PUT are not part of the URL.
    #[must_use]
    pub fn request_url(&self, request: &HttpRequest) -> String {
        let url = self.url_for(&request.endpoint);
        if request.query.is_empty() {
            url
        } else {
            format!("{url}?{}", request.query.to_query_string())
        }
    }

    /// Sends an HTTP request to the Ning API.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - The read timeout expires (`Timeout`)
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`Response`)
    pub async fn request(
        &self,
        request: HttpRequest,
        timeout: Duration,
    ) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.url_for(&request.endpoint);
        let timeout_error = || HttpError::Timeout {
            endpoint: request.endpoint.clone(),
            timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
        };

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Put => self.client.put(&url),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        if !request.query.is_empty() {
            req_builder = req_builder.query(request.query.as_slice());
        }

        if let Some(form) = &request.form {
            req_builder = req_builder.form(form.as_slice());
        }

        tracing::debug!(
            method = %request.http_method,
            url = %self.request_url(&request),
            params = request.query.len() + request.form.as_ref().map_or(0, |f| f.len()),
            "sending Ning API request"
        );

        let res = req_builder
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| if e.is_timeout() { timeout_error() } else { e.into() })?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res
            .text()
            .await
            .map_err(|e| if e.is_timeout() { timeout_error() } else { e.into() })?;

        let body = if body_text.trim().is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&body_text).unwrap_or(Value::String(body_text))
        };

        let response = HttpResponse::new(code, res_headers, body);

        if response.is_ok() {
            return Ok(response);
        }

        Err(HttpError::Response(HttpResponseError {
            code,
            message: Self::error_message(&response),
            error_reference: response.request_id().map(String::from),
        }))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Picks the most useful message out of an error response.
    fn error_message(response: &HttpResponse) -> String {
        if let Some(reason) = response.reason() {
            return reason.to_string();
        }
        match &response.body {
            Value::String(raw) => raw.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AccessToken, HostUrl, NetworkName};

    fn create_test_config() -> NingConfig {
        NingConfig::builder()
            .network(NetworkName::new("testnet").unwrap())
            .access_token(AccessToken::new("OAuth test-token").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_construction_with_config() {
        let client = HttpClient::new(&create_test_config()).unwrap();

        assert_eq!(client.base_uri(), "https://external.ning.com");
        assert_eq!(client.base_path(), "/xn/rest/testnet/1.0");
    }

    #[test]
    fn test_url_for_joins_endpoint() {
        let client = HttpClient::new(&create_test_config()).unwrap();

        assert_eq!(
            client.url_for("User/alpha"),
            "https://external.ning.com/xn/rest/testnet/1.0/User/alpha"
        );
        assert_eq!(
            client.url_for("/User"),
            "https://external.ning.com/xn/rest/testnet/1.0/User"
        );
    }

    #[test]
    fn test_request_url_includes_encoded_query() {
        let client = HttpClient::new(&create_test_config()).unwrap();

        let request = HttpRequest::builder(HttpMethod::Get, "User/count")
            .query_param("createdAfter", "2010-01-01T00:00:00.000Z")
            .query_param("author", "b")
            .query_param("author", "a")
            .build()
            .unwrap();
        assert_eq!(
            client.request_url(&request),
            "https://external.ning.com/xn/rest/testnet/1.0/User/count\
             ?createdAfter=2010-01-01T00%3A00%3A00.000Z&author=b&author=a"
        );

        let request = HttpRequest::builder(HttpMethod::Put, "User")
            .form(crate::clients::Params::new().with("approved", "true"))
            .build()
            .unwrap();
        assert_eq!(
            client.request_url(&request),
            "https://external.ning.com/xn/rest/testnet/1.0/User"
        );
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(&create_test_config()).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.contains("Ning API Library v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_authorization_header_injection() {
        let client = HttpClient::new(&create_test_config()).unwrap();

        assert_eq!(
            client.default_headers().get("Authorization"),
            Some(&"OAuth test-token".to_string())
        );
    }

    #[test]
    fn test_no_authorization_header_without_token() {
        let config = NingConfig::builder()
            .network(NetworkName::new("testnet").unwrap())
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();

        assert!(client.default_headers().get("Authorization").is_none());
    }

    #[test]
    fn test_accept_header_is_json() {
        let client = HttpClient::new(&create_test_config()).unwrap();

        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_custom_host_and_user_agent_prefix() {
        let config = NingConfig::builder()
            .network(NetworkName::new("testnet").unwrap())
            .host(HostUrl::new("http://localhost:8080").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();

        assert_eq!(client.base_uri(), "http://localhost:8080");
        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
    }

    #[test]
    fn test_error_message_prefers_reason() {
        let response = HttpResponse::new(
            400,
            HashMap::new(),
            serde_json::json!({"success": false, "reason": "Bad anchor"}),
        );
        assert_eq!(HttpClient::error_message(&response), "Bad anchor");

        let response = HttpResponse::new(
            502,
            HashMap::new(),
            Value::String("Bad Gateway".to_string()),
        );
        assert_eq!(HttpClient::error_message(&response), "Bad Gateway");
    }
}
