//! Lazily fetched, restartable sequences of items.
//!
//! A [`PagedList`] is only a description of a listing query. Calling
//! [`PagedList::cursor`] starts a fresh traversal from the first page; no
//! request is made until the cursor is advanced. Pages are chained with the
//! `anchor` token the API returns, and a traversal ends when the API reports
//! the last page, stops returning an anchor, or returns an empty page.

use std::collections::VecDeque;
use std::marker::PhantomData;

use crate::access::response::decode_list;
use crate::access::{AccessError, Context};
use crate::clients::{HttpMethod, HttpRequest, Params};
use crate::item::ContentItem;

/// One page of a listing.
#[derive(Clone, Debug)]
pub struct Page<T> {
    /// Items of this page, in server order.
    pub items: Vec<T>,
    /// Continuation token for the following page.
    pub anchor: Option<String>,
    /// Whether the server flagged this page as the last one.
    pub last_page: bool,
}

impl<T> Page<T> {
    /// Returns `true` if no page can follow this one.
    #[must_use]
    pub fn is_final(&self) -> bool {
        self.last_page || self.anchor.is_none() || self.items.is_empty()
    }
}

/// A listing query that can be traversed any number of times.
#[derive(Clone, Debug)]
pub struct PagedList<'a, T: ContentItem> {
    ctx: Context<'a>,
    endpoint: String,
    params: Params,
    page_size: u32,
    item_type: PhantomData<fn() -> T>,
}

impl<'a, T: ContentItem> PagedList<'a, T> {
    pub(crate) fn new(ctx: Context<'a>, endpoint: String, params: Params) -> Self {
        Self {
            ctx,
            endpoint,
            params,
            page_size: ctx.config.page_size(),
            item_type: PhantomData,
        }
    }

    /// Returns the number of items requested per page.
    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Returns the filter parameters shared by every page request.
    #[must_use]
    pub const fn params(&self) -> &Params {
        &self.params
    }

    /// Builds the request for the page following `anchor` (`None` for the first page).
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::Http`] if the request fails validation.
    pub fn page_request(&self, anchor: Option<&str>) -> Result<HttpRequest, AccessError> {
        let mut params = self.params.clone();
        params.push("count", self.page_size.to_string());
        params.push_opt("anchor", anchor);
        Ok(HttpRequest::builder(HttpMethod::Get, self.endpoint.as_str())
            .query(params)
            .build()?)
    }

    /// Fetches the page following `anchor`.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError`] on transport failures, rejected requests and
    /// undecodable responses.
    pub async fn fetch_page(&self, anchor: Option<&str>) -> Result<Page<T>, AccessError> {
        let response = self.ctx.execute(self.page_request(anchor)?).await?;
        let items = decode_list::<T>(&response)?;
        let page = Page {
            items,
            anchor: response.anchor().map(String::from),
            last_page: response.is_last_page(),
        };
        tracing::debug!(
            resource = T::TYPE_NAME,
            endpoint = %self.endpoint,
            items = page.items.len(),
            last_page = page.is_final(),
            "fetched page"
        );
        Ok(page)
    }

    /// Starts a new traversal from the first page. Nothing is fetched yet.
    #[must_use]
    pub fn cursor(&self) -> PageCursor<'a, T> {
        PageCursor {
            list: self.clone(),
            next_anchor: None,
            buffer: VecDeque::new(),
            exhausted: false,
            pages_fetched: 0,
        }
    }

    /// Traverses every page and returns all items.
    ///
    /// # Errors
    ///
    /// Returns the first [`AccessError`] hit while fetching.
    pub async fn collect_all(&self) -> Result<Vec<T>, AccessError> {
        let mut cursor = self.cursor();
        let mut items = Vec::new();
        while let Some(page) = cursor.next_page().await? {
            items.extend(page);
        }
        Ok(items)
    }
}

/// A single traversal over a [`PagedList`].
#[derive(Debug)]
pub struct PageCursor<'a, T: ContentItem> {
    list: PagedList<'a, T>,
    next_anchor: Option<String>,
    buffer: VecDeque<T>,
    exhausted: bool,
    pages_fetched: usize,
}

impl<T: ContentItem> PageCursor<'_, T> {
    /// Returns the number of page requests made so far.
    #[must_use]
    pub const fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    /// Returns `true` once the last page has been fetched and drained.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.exhausted && self.buffer.is_empty()
    }

    /// Fetches the next page, or returns `None` at the end of the listing.
    ///
    /// Items buffered by [`next_item`](Self::next_item) are returned first.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError`] if the page request fails. The cursor stays
    /// where it was, so the call can be repeated.
    pub async fn next_page(&mut self) -> Result<Option<Vec<T>>, AccessError> {
        if !self.buffer.is_empty() {
            return Ok(Some(self.buffer.drain(..).collect()));
        }
        if self.exhausted {
            return Ok(None);
        }

        let page = self.list.fetch_page(self.next_anchor.as_deref()).await?;
        self.pages_fetched += 1;
        self.exhausted = page.is_final();
        self.next_anchor = page.anchor;

        if page.items.is_empty() {
            return Ok(None);
        }
        Ok(Some(page.items))
    }

    /// Returns the next item, fetching a page when the buffer runs dry.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError`] if a page request fails.
    pub async fn next_item(&mut self) -> Result<Option<T>, AccessError> {
        if let Some(item) = self.buffer.pop_front() {
            return Ok(Some(item));
        }
        match self.next_page().await? {
            Some(items) => {
                self.buffer.extend(items);
                Ok(self.buffer.pop_front())
            }
            None => Ok(None),
        }
    }
}
