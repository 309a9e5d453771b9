//! Count queries.

use std::marker::PhantomData;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::access::response::decode_count;
use crate::access::{AccessError, Context};
use crate::clients::{HttpMethod, HttpRequest, Params};
use crate::item::{ContentItem, User};

/// Builder for "how many items were created after ..." queries.
///
/// `created_after` is mandatory; every other filter is optional and only
/// sent when set. Filters combine conjunctively on the server; the builder
/// does not judge whether a combination makes sense.
///
/// # Example
///
/// ```rust,ignore
/// let count = users
///     .counter(created_after)
///     .unapproved()
///     .only_members()
///     .count()
///     .await?;
/// ```
#[derive(Clone, Debug)]
pub struct Counter<'a, T: ContentItem> {
    ctx: Context<'a>,
    endpoint: String,
    created_after: DateTime<Utc>,
    author: Option<String>,
    is_approved: Option<bool>,
    is_member: Option<bool>,
    item_type: PhantomData<fn() -> T>,
}

impl<'a, T: ContentItem> Counter<'a, T> {
    pub(crate) const fn new(ctx: Context<'a>, endpoint: String, created_after: DateTime<Utc>) -> Self {
        Self {
            ctx,
            endpoint,
            created_after,
            author: None,
            is_approved: None,
            is_member: None,
            item_type: PhantomData,
        }
    }

    /// Returns a counter restricted to items by `author`.
    #[must_use]
    pub fn author(&self, author: impl Into<String>) -> Self {
        Self {
            author: Some(author.into()),
            ..self.clone()
        }
    }

    /// Returns a counter restricted to items awaiting approval.
    ///
    /// The API offers no "approved only" filter, hence no `approved()`.
    #[must_use]
    pub fn unapproved(&self) -> Self {
        Self {
            is_approved: Some(false),
            ..self.clone()
        }
    }

    /// Returns the query parameters this counter sends.
    #[must_use]
    pub fn params(&self) -> Params {
        let mut params = Params::new();
        params.push(
            "createdAfter",
            self.created_after
                .to_rfc3339_opts(SecondsFormat::Millis, true),
        );
        params.push_opt("author", self.author.as_deref());
        params.push_opt("isApproved", self.is_approved);
        params.push_opt("isMember", self.is_member);
        params
    }

    /// Builds the GET request without sending it.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::Http`] if the request fails validation.
    pub fn request(&self) -> Result<HttpRequest, AccessError> {
        Ok(HttpRequest::builder(HttpMethod::Get, self.endpoint.as_str())
            .query(self.params())
            .build()?)
    }

    /// Sends the query and returns the number of matching items.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError`] on transport failures, rejected requests and
    /// responses without a count.
    pub async fn count(&self) -> Result<u64, AccessError> {
        let response = self.ctx.execute(self.request()?).await?;
        let count = decode_count::<T>(&response)?;
        tracing::debug!(resource = T::TYPE_NAME, count, "counted items");
        Ok(count)
    }
}

impl Counter<'_, User> {
    /// Returns a counter restricted to network members.
    #[must_use]
    pub fn only_members(&self) -> Self {
        Self {
            is_member: Some(true),
            ..self.clone()
        }
    }
}
