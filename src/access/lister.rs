//! Listing queries.

use std::marker::PhantomData;

use crate::access::{Context, PagedList};
use crate::clients::Params;
use crate::item::{ContentItem, Fields, User};

/// Builder for paged listings against one listing endpoint.
///
/// The narrowing calls are independent of each other and can be chained in
/// any order; [`list`](Self::list) returns a lazy [`PagedList`].
#[derive(Clone, Debug)]
pub struct Lister<'a, T: ContentItem> {
    ctx: Context<'a>,
    endpoint: String,
    fields: Fields<T::Field>,
    author: Option<String>,
    is_approved: Option<bool>,
    is_member: Option<bool>,
    item_type: PhantomData<fn() -> T>,
}

impl<'a, T: ContentItem> Lister<'a, T> {
    pub(crate) const fn new(ctx: Context<'a>, endpoint: String, fields: Fields<T::Field>) -> Self {
        Self {
            ctx,
            endpoint,
            fields,
            author: None,
            is_approved: None,
            is_member: None,
            item_type: PhantomData,
        }
    }

    /// Returns the endpoint this lister targets.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns a lister restricted to items by `author`.
    #[must_use]
    pub fn author(&self, author: impl Into<String>) -> Self {
        Self {
            author: Some(author.into()),
            ..self.clone()
        }
    }

    /// Returns a lister restricted to items awaiting approval.
    #[must_use]
    pub fn unapproved(&self) -> Self {
        Self {
            is_approved: Some(false),
            ..self.clone()
        }
    }

    /// Returns the filter parameters every page request carries.
    #[must_use]
    pub fn params(&self) -> Params {
        let mut params = Params::new().with("fields", self.fields.to_param());
        params.push_opt("author", self.author.as_deref());
        params.push_opt("isApproved", self.is_approved);
        params.push_opt("isMember", self.is_member);
        params
    }

    /// Returns the paged listing. No request is made until it is traversed.
    #[must_use]
    pub fn list(&self) -> PagedList<'a, T> {
        PagedList::new(self.ctx, self.endpoint.clone(), self.params())
    }
}

impl Lister<'_, User> {
    /// Returns a lister restricted to network members.
    #[must_use]
    pub fn only_members(&self) -> Self {
        Self {
            is_member: Some(true),
            ..self.clone()
        }
    }
}
