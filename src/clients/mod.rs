//! HTTP client types for Ning API communication.
//!
//! This module is the transport layer the request builders in
//! [`access`](crate::access) call into.
//!
//! # Overview
//!
//! - [`NingConnection`]: The connection handle shared by request builders
//! - [`HttpClient`]: The async HTTP client performing the round-trips
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response envelope from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, PUT)
//! - [`Params`]: Ordered, repeatable query/form parameters
//!
//! # Timeouts and retries
//!
//! Every request carries the read timeout configured in
//! [`NingConfig`](crate::NingConfig). An expired timeout surfaces as
//! [`HttpError::Timeout`]. Failed requests are never retried.

mod connection;
mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use connection::NingConnection;
pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder, Params};
pub use http_response::HttpResponse;
