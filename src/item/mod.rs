//! Content item primitives and item types.
//!
//! Every resource the API returns is a *content item*: it has a [`Key`], a
//! creation date and an author, and may reference shared
//! [`SubResources`] delivered alongside it in the same response.
//!
//! - [`ContentItem`]: the capability set every item type implements
//! - [`UpdatableItem`]: items that can be staged for a partial PUT
//! - [`Key`]: typed item identifier
//! - [`Fields`] / [`FieldSelector`]: attribute selection for partial responses
//! - [`User`] / [`UserField`]: the member profile item type

mod fields;
mod key;
mod user;

pub use fields::{FieldSelector, Fields};
pub use key::Key;
pub use user::{User, UserField};

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::clients::Params;

/// Capabilities shared by every content item type.
///
/// Items are plain data; [`inject_sub_resources`](Self::inject_sub_resources)
/// is called once per item by the response decoder, after deserialization.
pub trait ContentItem:
    DeserializeOwned + Clone + std::fmt::Debug + Send + Sync + Sized + 'static
{
    /// Field enum used to select this type's attributes.
    type Field: FieldSelector;

    /// Type name used in endpoints and messages, e.g. `User`.
    const TYPE_NAME: &'static str;

    /// Returns the item's key. `None` for blank items built client side.
    fn id(&self) -> Option<&Key<Self>>;

    /// Returns the creation timestamp.
    fn created_date(&self) -> Option<DateTime<Utc>>;

    /// Returns the screen name of the item's author.
    fn author(&self) -> Option<&str>;

    /// Attaches the sub-resources delivered with the response this item came from.
    fn inject_sub_resources(&mut self, resources: Arc<SubResources>);
}

/// A content item that can be updated with a partial PUT.
pub trait UpdatableItem: ContentItem {
    /// Returns the form parameters for every staged (non-`None`) attribute.
    ///
    /// Unset attributes must be omitted entirely.
    fn update_params(&self) -> Params;
}

/// Shared objects referenced by the items of one response.
///
/// The API delivers records referenced by items, such as the author's
/// profile, once per response under `resources`, keyed by their identifier.
/// Every item decoded from that response holds the same `Arc`.
///
/// # Example
///
/// ```rust
/// use ning_api::item::SubResources;
/// use serde_json::json;
///
/// let resources = SubResources::from_json(
///     json!({"alice": {"fullName": "Alice"}}).as_object().unwrap(),
/// );
/// assert_eq!(resources.get("alice").unwrap()["fullName"], "Alice");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SubResources {
    entries: HashMap<String, Value>,
}

impl SubResources {
    /// Builds the sub-resource table from a response's `resources` object.
    #[must_use]
    pub fn from_json(resources: &serde_json::Map<String, Value>) -> Self {
        Self {
            entries: resources
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        }
    }

    /// Returns the resource stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Returns the number of resources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no resources.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
