//! Request builders for reading and updating content items.
//!
//! A resource facade such as [`Users`] hands out request builders bound to
//! that resource's endpoints. Builders are immutable values: every narrowing
//! call returns a new builder with one field changed and leaves the receiver
//! untouched, so any builder can be reused or branched freely. Nothing
//! touches the network until a terminal call (`count`, `find_*`, `list`
//! page fetches, `update`) is awaited.
//!
//! # Example
//!
//! ```rust,ignore
//! use chrono::{TimeZone, Utc};
//! use ning_api::item::{Fields, UserField};
//!
//! let users = client.users();
//!
//! // GET User/count?createdAfter=...&isApproved=false&isMember=true
//! let pending = users
//!     .counter(Utc.with_ymd_and_hms(2010, 1, 1, 0, 0, 0).unwrap())
//!     .unapproved()
//!     .only_members()
//!     .count()
//!     .await?;
//!
//! // Page through members alphabetically
//! let list = users.lister_for_alpha(Fields::new(UserField::FullName, &[])).list();
//! let mut cursor = list.cursor();
//! while let Some(user) = cursor.next_item().await? {
//!     println!("{:?}", user.full_name);
//! }
//!
//! // PUT User with approved=true
//! let updated = users.updater_for(user).approved(true).update().await?;
//! ```

mod counter;
mod finder;
mod lister;
mod paged_list;
mod response;
mod updater;
mod users;

pub use counter::Counter;
pub use finder::Finder;
pub use lister::Lister;
pub use paged_list::{Page, PageCursor, PagedList};
pub use updater::Updater;
pub use users::Users;

use std::marker::PhantomData;

use thiserror::Error;

use crate::clients::{
    HttpError, HttpMethod, HttpRequest, HttpResponse, InvalidHttpRequestError, NingConnection,
};
use crate::config::NingConfig;
use crate::error::ValidationError;
use crate::item::{ContentItem, Fields, UpdatableItem};

/// Error type for terminal builder calls.
///
/// Absence of a single item is not an error: single-item lookups return
/// `Ok(None)`.
#[derive(Debug, Error)]
pub enum AccessError {
    /// Transport failure, timeout or non-2xx status.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The API answered with `success: false`.
    #[error("{resource} request was rejected: {reason}")]
    Api {
        /// The content item type the request was about.
        resource: &'static str,
        /// The reason given by the API.
        reason: String,
    },

    /// The response could not be decoded into the expected shape.
    #[error("Malformed {resource} response: {reason}")]
    MalformedResponse {
        /// The content item type the request was about.
        resource: &'static str,
        /// What was wrong with the response.
        reason: String,
    },

    /// The request could not be built.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl From<InvalidHttpRequestError> for AccessError {
    fn from(error: InvalidHttpRequestError) -> Self {
        Self::Http(HttpError::InvalidRequest(error))
    }
}

/// Shared, read-only handles every builder carries.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Context<'a> {
    pub(crate) connection: &'a NingConnection,
    pub(crate) config: &'a NingConfig,
}

impl<'a> Context<'a> {
    pub(crate) const fn new(connection: &'a NingConnection, config: &'a NingConfig) -> Self {
        Self { connection, config }
    }

    /// Sends `request` through the connection's GET or PUT with the
    /// configured read timeout.
    pub(crate) async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, AccessError> {
        let timeout = self.config.read_timeout();
        let HttpRequest {
            http_method,
            endpoint,
            query,
            form,
        } = request;

        let response = match http_method {
            HttpMethod::Get => self.connection.get(&endpoint, query, timeout).await?,
            HttpMethod::Put => {
                let form = form.ok_or_else(|| InvalidHttpRequestError::MissingBody {
                    method: http_method.to_string(),
                })?;
                self.connection.put(&endpoint, form, timeout).await?
            }
        };
        Ok(response)
    }
}

/// Endpoints of one content item type.
///
/// # Example
///
/// ```rust
/// use ning_api::access::Endpoints;
///
/// let endpoints = Endpoints::new("User");
/// assert_eq!(endpoints.count(), "User/count");
/// assert_eq!(endpoints.alpha(), "User/alpha");
/// assert_eq!(endpoints.update(), "User");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Endpoints {
    type_name: &'static str,
}

impl Endpoints {
    /// Creates the endpoint set for the given item type name.
    #[must_use]
    pub const fn new(type_name: &'static str) -> Self {
        Self { type_name }
    }

    /// Endpoint for count queries.
    #[must_use]
    pub fn count(&self) -> String {
        format!("{}/count", self.type_name)
    }

    /// Endpoint for single-item and ad hoc lookups.
    #[must_use]
    pub fn single(&self) -> String {
        self.type_name.to_string()
    }

    /// Endpoint listing items alphabetically.
    #[must_use]
    pub fn alpha(&self) -> String {
        format!("{}/alpha", self.type_name)
    }

    /// Endpoint listing the most recent items first.
    #[must_use]
    pub fn recent(&self) -> String {
        format!("{}/recent", self.type_name)
    }

    /// Endpoint listing featured items.
    #[must_use]
    pub fn featured(&self) -> String {
        format!("{}/featured", self.type_name)
    }

    /// Endpoint receiving partial updates.
    #[must_use]
    pub fn update(&self) -> String {
        self.type_name.to_string()
    }
}

/// Generic accessor binding builders to the endpoints of item type `T`.
///
/// Resource facades such as [`Users`] wrap an `Items` and add the
/// resource's own listing endpoints.
#[derive(Debug)]
pub struct Items<'a, T: ContentItem> {
    ctx: Context<'a>,
    endpoints: Endpoints,
    item_type: PhantomData<fn() -> T>,
}

impl<T: ContentItem> Clone for Items<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ContentItem> Copy for Items<'_, T> {}

impl<'a, T: ContentItem> Items<'a, T> {
    /// Creates an accessor for `T` over the given connection.
    #[must_use]
    pub const fn new(connection: &'a NingConnection, config: &'a NingConfig) -> Self {
        Self {
            ctx: Context::new(connection, config),
            endpoints: Endpoints::new(T::TYPE_NAME),
            item_type: PhantomData,
        }
    }

    /// Returns the endpoints this accessor targets.
    #[must_use]
    pub const fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Creates a counter for items created after `created_after`.
    #[must_use]
    pub fn counter(&self, created_after: chrono::DateTime<chrono::Utc>) -> Counter<'a, T> {
        Counter::new(self.ctx, self.endpoints.count(), created_after)
    }

    /// Creates a finder returning the given fields.
    #[must_use]
    pub fn finder(&self, fields: Fields<T::Field>) -> Finder<'a, T> {
        Finder::new(self.ctx, self.endpoints.single(), fields)
    }

    /// Creates a lister over an arbitrary listing endpoint of this type.
    #[must_use]
    pub fn lister(&self, endpoint: String, fields: Fields<T::Field>) -> Lister<'a, T> {
        Lister::new(self.ctx, endpoint, fields)
    }
}

impl<'a, T: UpdatableItem> Items<'a, T> {
    /// Creates an updater staging changes on `item`.
    #[must_use]
    pub fn updater_for(&self, item: T) -> Updater<'a, T> {
        Updater::new(self.ctx, self.endpoints.update(), item)
    }
}
