//! HTTP request types for the Ning API SDK.
//!
//! This module provides the [`HttpRequest`] type and its builder, plus the
//! ordered [`Params`] multimap used for both query strings and form bodies.

use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods used by the Ning API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for finding, listing and counting items.
    Get,
    /// HTTP PUT method for updating items.
    Put,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Put => write!(f, "put"),
        }
    }
}

/// An ordered list of string key/value pairs.
///
/// The same key may appear more than once (the API reads repeated `author`
/// parameters as an OR-set) and insertion order is preserved on the wire.
///
/// # Example
///
/// ```rust
/// use ning_api::clients::Params;
///
/// let params = Params::new()
///     .with("author", "alice")
///     .with("author", "bob")
///     .with("isMember", "true");
///
/// assert_eq!(params.get_all("author"), vec!["alice", "bob"]);
/// assert_eq!(params.to_query_string(), "author=alice&author=bob&isMember=true");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    /// Creates an empty parameter list.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends a parameter.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.push((key.into(), value.into()));
    }

    /// Appends a parameter, returning `self` for chaining.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(key, value);
        self
    }

    /// Appends a parameter only when `value` is `Some`.
    pub fn push_opt<V: ToString>(&mut self, key: &str, value: Option<V>) {
        if let Some(value) = value {
            self.push(key, value.to_string());
        }
    }

    /// Appends every parameter of `other`, keeping its order.
    pub fn extend(&mut self, other: Self) {
        self.0.extend(other.0);
    }

    /// Returns the first value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns every value stored under `key`, in insertion order.
    #[must_use]
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.0
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Returns `true` if at least one value is stored under `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.iter().any(|(k, _)| k == key)
    }

    /// Returns the keys in insertion order (repeated keys appear repeatedly).
    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        self.0.iter().map(|(k, _)| k.as_str()).collect()
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the parameters as key/value slices.
    #[must_use]
    pub fn as_slice(&self) -> &[(String, String)] {
        &self.0
    }

    /// Renders the parameters as a percent-encoded `application/x-www-form-urlencoded` string.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        self.0
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// An HTTP request to be sent to the Ning API.
///
/// Use [`HttpRequest::builder`] to construct requests.
///
/// # Example
///
/// ```rust
/// use ning_api::clients::{HttpRequest, HttpMethod};
///
/// let request = HttpRequest::builder(HttpMethod::Get, "User/count")
///     .query_param("createdAfter", "2010-01-01T00:00:00.000Z")
///     .build()
///     .unwrap();
///
/// assert_eq!(request.query.get("createdAfter"), Some("2010-01-01T00:00:00.000Z"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The endpoint (relative to the network base path), e.g. `User/alpha`.
    pub endpoint: String,
    /// Query parameters appended to the URL.
    pub query: Params,
    /// Form parameters sent as the body of a PUT request.
    pub form: Option<Params>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, endpoint: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, endpoint)
    }

    /// Validates the request, ensuring it meets all requirements.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - `endpoint` is empty
    /// - `http_method` is `Put` but `form` is `None`
    /// - `http_method` is `Get` but `form` is `Some`
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.endpoint.trim_matches('/').is_empty() {
            return Err(InvalidHttpRequestError::EmptyEndpoint);
        }

        match (self.http_method, &self.form) {
            (HttpMethod::Put, None) => Err(InvalidHttpRequestError::MissingBody {
                method: self.http_method.to_string(),
            }),
            (HttpMethod::Get, Some(_)) => Err(InvalidHttpRequestError::UnexpectedBody {
                method: self.http_method.to_string(),
            }),
            _ => Ok(()),
        }
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    endpoint: String,
    query: Params,
    form: Option<Params>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, endpoint: impl Into<String>) -> Self {
        Self {
            http_method: method,
            endpoint: endpoint.into(),
            query: Params::new(),
            form: None,
        }
    }

    /// Appends all query parameters of `params`.
    #[must_use]
    pub fn query(mut self, params: Params) -> Self {
        self.query.extend(params);
        self
    }

    /// Appends a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push(key, value);
        self
    }

    /// Sets the form body.
    #[must_use]
    pub fn form(mut self, form: Params) -> Self {
        self.form = Some(form);
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            endpoint: self.endpoint,
            query: self.query,
            form: self.form,
        };
        request.verify()?;
        Ok(request)
    }
}
