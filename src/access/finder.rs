//! Ad hoc lookups of single items and small item sets.

use std::marker::PhantomData;

use crate::access::response::{decode_list, decode_single};
use crate::access::{AccessError, Context};
use crate::clients::{HttpError, HttpMethod, HttpRequest, HttpResponse, Params};
use crate::error::ValidationError;
use crate::item::{ContentItem, Fields, Key};

/// Builder for lookups by key or by author.
///
/// Single-item lookups return `Ok(None)` when nothing matches, whether the
/// API answers 404 or an empty entry.
#[derive(Clone, Debug)]
pub struct Finder<'a, T: ContentItem> {
    ctx: Context<'a>,
    endpoint: String,
    fields: Fields<T::Field>,
    item_type: PhantomData<fn() -> T>,
}

impl<'a, T: ContentItem> Finder<'a, T> {
    pub(crate) const fn new(ctx: Context<'a>, endpoint: String, fields: Fields<T::Field>) -> Self {
        Self {
            ctx,
            endpoint,
            fields,
            item_type: PhantomData,
        }
    }

    /// Returns the fields this finder requests.
    #[must_use]
    pub const fn fields(&self) -> &Fields<T::Field> {
        &self.fields
    }

    /// Builds the request for [`find`](Self::find).
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::Http`] if the request fails validation.
    pub fn key_request(&self, key: &Key<T>) -> Result<HttpRequest, AccessError> {
        self.build(self.base_params().with("id", key.as_ref()))
    }

    /// Builds the request for [`find_by_current_author`](Self::find_by_current_author).
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::Http`] if the request fails validation.
    pub fn current_author_request(&self) -> Result<HttpRequest, AccessError> {
        self.build(self.base_params())
    }

    /// Builds the request for [`find_by_author`](Self::find_by_author).
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::Http`] if the request fails validation.
    pub fn author_request(&self, author: &str) -> Result<HttpRequest, AccessError> {
        self.build(self.base_params().with("author", author))
    }

    /// Builds the request for [`find_by_authors`](Self::find_by_authors).
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::Validation`] if `authors` is empty.
    pub fn authors_request<S: AsRef<str>>(
        &self,
        authors: &[S],
    ) -> Result<HttpRequest, AccessError> {
        if authors.is_empty() {
            return Err(ValidationError::EmptyAuthors {
                resource: T::TYPE_NAME,
            }
            .into());
        }
        let mut params = self.base_params();
        for author in authors {
            params.push("author", author.as_ref());
        }
        self.build(params)
    }

    /// Looks up the item with the given key.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError`] on transport failures, rejected requests and
    /// undecodable responses.
    pub async fn find(&self, key: &Key<T>) -> Result<Option<T>, AccessError> {
        self.fetch_single(self.key_request(key)?).await
    }

    /// Looks up the item belonging to the member whose credentials are in use.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError`] on transport failures, rejected requests and
    /// undecodable responses.
    pub async fn find_by_current_author(&self) -> Result<Option<T>, AccessError> {
        self.fetch_single(self.current_author_request()?).await
    }

    /// Looks up the item by `author`.
    ///
    /// Uniqueness is left to the server; if several items come back the
    /// first one is returned.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError`] on transport failures, rejected requests and
    /// undecodable responses.
    pub async fn find_by_author(&self, author: &str) -> Result<Option<T>, AccessError> {
        self.fetch_single(self.author_request(author)?).await
    }

    /// Looks up the items of any of `authors`, in server order, without a
    /// size cap. Nothing matching, including a 404, is an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::Validation`] if `authors` is empty, and
    /// [`AccessError`] on transport failures, rejected requests and
    /// undecodable responses.
    pub async fn find_by_authors<S: AsRef<str>>(
        &self,
        authors: &[S],
    ) -> Result<Vec<T>, AccessError> {
        let request = self.authors_request(authors)?;
        match self.fetch(request).await? {
            Some(response) => decode_list::<T>(&response),
            None => Ok(Vec::new()),
        }
    }

    fn base_params(&self) -> Params {
        Params::new().with("fields", self.fields.to_param())
    }

    fn build(&self, params: Params) -> Result<HttpRequest, AccessError> {
        Ok(HttpRequest::builder(HttpMethod::Get, self.endpoint.as_str())
            .query(params)
            .build()?)
    }

    async fn fetch_single(&self, request: HttpRequest) -> Result<Option<T>, AccessError> {
        match self.fetch(request).await? {
            Some(response) => decode_single::<T>(&response),
            None => Ok(None),
        }
    }

    /// Sends `request`, reading a 404 as "nothing matched".
    async fn fetch(&self, request: HttpRequest) -> Result<Option<HttpResponse>, AccessError> {
        match self.ctx.execute(request).await {
            Ok(response) => Ok(Some(response)),
            Err(AccessError::Http(HttpError::Response(e))) if e.code == 404 => {
                tracing::debug!(resource = T::TYPE_NAME, "lookup matched nothing");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}
