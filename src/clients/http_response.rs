//! HTTP response types for the Ning API SDK.
//!
//! Every Ning API response is a JSON envelope:
//!
//! ```json
//! {
//!   "success": true,
//!   "entry": [ ... ],
//!   "anchor": "Cj4KBw",
//!   "firstPage": true,
//!   "lastPage": false,
//!   "resources": { "alice": { "fullName": "Alice" } }
//! }
//! ```
//!
//! [`HttpResponse`] keeps the raw body and exposes the envelope fields.

use std::collections::HashMap;

use serde_json::Value;

/// A parsed HTTP response from the Ning API.
///
/// # Example
///
/// ```rust
/// use ning_api::clients::HttpResponse;
/// use serde_json::json;
/// use std::collections::HashMap;
///
/// let response = HttpResponse::new(
///     200,
///     HashMap::new(),
///     json!({"success": true, "count": 12}),
/// );
///
/// assert!(response.is_ok());
/// assert!(response.is_success());
/// assert_eq!(response.count(), Some(12));
/// ```
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(code: u16, headers: HashMap<String, Vec<String>>, body: Value) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the status code is 2xx.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the X-Request-Id header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get("x-request-id")
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the envelope's `success` flag.
    ///
    /// A body without the flag counts as successful; the status code has
    /// already been checked by the time this is consulted.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.body
            .get("success")
            .and_then(Value::as_bool)
            .unwrap_or(true)
    }

    /// Returns the failure `reason` reported by the API.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        self.body.get("reason").and_then(Value::as_str)
    }

    /// Returns the `entry` value: an object for single lookups, an array for lists.
    ///
    /// A JSON `null` entry is reported as absent.
    #[must_use]
    pub fn entry(&self) -> Option<&Value> {
        self.body.get("entry").filter(|v| !v.is_null())
    }

    /// Returns the `count` reported by count endpoints.
    #[must_use]
    pub fn count(&self) -> Option<u64> {
        self.body.get("count").and_then(Value::as_u64)
    }

    /// Returns the continuation `anchor` for the next page.
    ///
    /// An empty anchor is reported as absent.
    #[must_use]
    pub fn anchor(&self) -> Option<&str> {
        self.body
            .get("anchor")
            .and_then(Value::as_str)
            .filter(|a| !a.is_empty())
    }

    /// Returns `true` if the response is flagged as the last page.
    #[must_use]
    pub fn is_last_page(&self) -> bool {
        self.body
            .get("lastPage")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// Returns the `resources` object holding shared sub-resources.
    #[must_use]
    pub fn resources(&self) -> Option<&serde_json::Map<String, Value>> {
        self.body.get("resources").and_then(Value::as_object)
    }
}
