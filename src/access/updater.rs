//! Partial updates.

use crate::access::response::decode_updated;
use crate::access::{AccessError, Context};
use crate::clients::{HttpMethod, HttpRequest, Params};
use crate::item::{UpdatableItem, User};

/// Builder staging changes on a copy of an item before a partial PUT.
///
/// Each staging call clones the staged item, changes one attribute on the
/// clone and returns a new updater; the receiver and its item stay as they
/// were. Only attributes that are set on the staged item are sent.
///
/// # Example
///
/// ```rust,ignore
/// let base = users.updater_for(user);
/// let approve = base.approved(true);
/// let reject = base.approved(false); // `base` is still unchanged
///
/// let updated = approve.update().await?;
/// ```
#[derive(Clone, Debug)]
pub struct Updater<'a, T: UpdatableItem> {
    ctx: Context<'a>,
    endpoint: String,
    item: T,
}

impl<'a, T: UpdatableItem> Updater<'a, T> {
    pub(crate) const fn new(ctx: Context<'a>, endpoint: String, item: T) -> Self {
        Self {
            ctx,
            endpoint,
            item,
        }
    }

    /// Returns the staged item.
    #[must_use]
    pub const fn item(&self) -> &T {
        &self.item
    }

    /// Returns a new updater whose staged item is a modified clone of this one's.
    #[must_use]
    pub fn staged(&self, change: impl FnOnce(&mut T)) -> Self {
        let mut item = self.item.clone();
        change(&mut item);
        Self {
            ctx: self.ctx,
            endpoint: self.endpoint.clone(),
            item,
        }
    }

    /// Returns the form parameters this updater sends.
    #[must_use]
    pub fn params(&self) -> Params {
        self.item.update_params()
    }

    /// Builds the PUT request without sending it.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::Http`] if the request fails validation.
    pub fn request(&self) -> Result<HttpRequest, AccessError> {
        Ok(HttpRequest::builder(HttpMethod::Put, self.endpoint.as_str())
            .form(self.params())
            .build()?)
    }

    /// Sends the staged changes and returns the server's copy of the item.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError`] on transport failures, rejected updates and
    /// responses without an updated entry.
    pub async fn update(&self) -> Result<T, AccessError> {
        let request = self.request()?;
        let staged = request.form.as_ref().map_or(0, Params::len);
        tracing::debug!(resource = T::TYPE_NAME, staged, "sending update");

        let response = self.ctx.execute(request).await?;
        decode_updated::<T>(&response)
    }
}

impl Updater<'_, User> {
    /// Returns an updater that also sets the approval flag.
    #[must_use]
    pub fn approved(&self, approved: bool) -> Self {
        self.staged(|user| user.approved = Some(approved))
    }

    /// Returns an updater that also sets the status message.
    #[must_use]
    pub fn status_message(&self, message: impl Into<String>) -> Self {
        let message = message.into();
        self.staged(|user| user.status_message = Some(message))
    }
}
