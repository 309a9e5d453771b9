//! # Ning API Rust SDK
//!
//! A Rust SDK for the REST API of Ning social networks, providing type-safe
//! configuration, an async HTTP layer, and immutable request builders for
//! counting, finding, listing and updating network content.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`NingConfig`] and [`NingConfigBuilder`]
//! - Validated newtypes for the network name, host and access token
//! - Typed content items ([`item::User`]) with typed keys and field selections
//! - Reusable request builders for the `User` resource via [`NingClient::users`]
//! - Lazily fetched, restartable paged listings
//! - An async HTTP client bounded by a per-request read timeout
//!
//! ## Quick Start
//!
//! ```rust
//! use ning_api::{NetworkName, NingConfig};
//!
//! let config = NingConfig::builder()
//!     .network(NetworkName::new("example").unwrap())
//!     .page_size(50)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_path(), "/xn/rest/example/1.0");
//! ```
//!
//! ## Counting and Updating Members
//!
//! ```rust,ignore
//! use chrono::{TimeZone, Utc};
//! use ning_api::{NingClient, NingConfig, NetworkName, AccessToken};
//!
//! let config = NingConfig::builder()
//!     .network(NetworkName::new("example")?)
//!     .access_token(AccessToken::new("OAuth oauth_token=...")?)
//!     .build()?;
//! let client = NingClient::new(config)?;
//! let users = client.users();
//!
//! // Members awaiting approval who joined since 2010
//! let counter = users.counter(Utc.with_ymd_and_hms(2010, 1, 1, 0, 0, 0).unwrap());
//! let pending = counter.unapproved().only_members().count().await?;
//!
//! // The same counter can be reused with other narrowing
//! let by_alice = counter.author("alice").count().await?;
//!
//! // Approve the current member
//! let updated = users.updater().approved(true).update().await?;
//! ```
//!
//! ## Paging Through Members
//!
//! ```rust,ignore
//! use ning_api::item::{Fields, UserField};
//!
//! let list = client
//!     .users()
//!     .lister_for_alpha(Fields::new(UserField::FullName, &[UserField::Email]))
//!     .list();
//!
//! // Each cursor starts again from the first page
//! let mut cursor = list.cursor();
//! while let Some(user) = cursor.next_item().await? {
//!     println!("{:?}", user.full_name);
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **Immutable builders**: Narrowing returns a new builder and never
//!   changes the receiver

pub mod access;
mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod item;

pub use client::NingClient;
pub use config::{AccessToken, HostUrl, NetworkName, NingConfig, NingConfigBuilder};
pub use error::{ConfigError, ValidationError};

// Re-export request builder types
pub use access::{
    AccessError, Counter, Finder, Lister, Page, PageCursor, PagedList, Updater, Users,
};

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, NingConnection, Params,
};
