//! User content item.
//!
//! A [`User`] is a member profile on a Ning network. Users are read through
//! the `User/*` endpoints and updated with a partial PUT to `User`.
//!
//! # Example
//!
//! ```rust
//! use ning_api::item::{User, UserField, FieldSelector};
//! use serde_json::json;
//!
//! let user: User = serde_json::from_value(json!({
//!     "id": "3011345:User:77",
//!     "author": "alice",
//!     "fullName": "Alice",
//!     "createdDate": "2010-05-20T18:09:41.000Z",
//!     "approved": true
//! }))
//! .unwrap();
//!
//! assert_eq!(user.full_name.as_deref(), Some("Alice"));
//! assert_eq!(UserField::FullName.wire_name(), "fullName");
//! ```

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::Params;
use crate::item::{ContentItem, FieldSelector, Key, SubResources, UpdatableItem};

/// A member of a Ning network.
///
/// Every attribute is optional: responses only carry the fields that were
/// requested, and a blank `User` stands for "the authenticated member" when
/// staged for an update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// The user's key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Key<User>>,

    /// Screen name of the user (users are their own authors).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// When the user joined the network.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,

    /// When the profile was last changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_date: Option<DateTime<Utc>>,

    /// The user's email address (visible to administrators only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// The user's display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    /// Birthdate as reported by the API (`YYYY-MM-DD`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<String>,

    /// Gender, as entered by the user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,

    /// Free-form location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Postal code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,

    /// The user's status message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,

    /// Whether the membership has been approved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved: Option<bool>,

    /// Whether the user owns the network.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_owner: Option<bool>,

    /// Whether the user administers the network.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,

    /// Whether the user is a member (as opposed to a pending or banned account).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_member: Option<bool>,

    /// Account state: "active", "pending", "banned", ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// URL of the profile icon.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,

    /// URL of the profile page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip)]
    sub_resources: Option<Arc<SubResources>>,
}

impl User {
    /// Creates a blank user, which the API reads as "the authenticated member".
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a blank user addressing the member with the given key.
    #[must_use]
    pub fn with_id(id: Key<Self>) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    /// Returns the sub-resources attached by the response decoder.
    #[must_use]
    pub fn sub_resources(&self) -> Option<&SubResources> {
        self.sub_resources.as_deref()
    }

    /// Returns the author's record from the attached sub-resources.
    #[must_use]
    pub fn author_resource(&self) -> Option<&Value> {
        let author = self.author.as_deref()?;
        self.sub_resources()?.get(author)
    }
}

impl ContentItem for User {
    type Field = UserField;

    const TYPE_NAME: &'static str = "User";

    fn id(&self) -> Option<&Key<Self>> {
        self.id.as_ref()
    }

    fn created_date(&self) -> Option<DateTime<Utc>> {
        self.created_date
    }

    fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    fn inject_sub_resources(&mut self, resources: Arc<SubResources>) {
        self.sub_resources = Some(resources);
    }
}

impl UpdatableItem for User {
    fn update_params(&self) -> Params {
        let mut params = Params::new();
        params.push_opt("id", self.id.as_ref());
        params.push_opt("statusMessage", self.status_message.as_deref());
        params.push_opt("approved", self.approved);
        params
    }
}

/// Attributes that can be requested for a [`User`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserField {
    Id,
    Author,
    CreatedDate,
    UpdatedDate,
    Email,
    FullName,
    Birthdate,
    Gender,
    Location,
    Country,
    Zip,
    StatusMessage,
    Approved,
    IsOwner,
    IsAdmin,
    IsMember,
    State,
    IconUrl,
    Url,
}

impl FieldSelector for UserField {
    const ITEM_TYPE: &'static str = User::TYPE_NAME;

    const ALL: &'static [Self] = &[
        Self::Id,
        Self::Author,
        Self::CreatedDate,
        Self::UpdatedDate,
        Self::Email,
        Self::FullName,
        Self::Birthdate,
        Self::Gender,
        Self::Location,
        Self::Country,
        Self::Zip,
        Self::StatusMessage,
        Self::Approved,
        Self::IsOwner,
        Self::IsAdmin,
        Self::IsMember,
        Self::State,
        Self::IconUrl,
        Self::Url,
    ];

    fn wire_name(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Author => "author",
            Self::CreatedDate => "createdDate",
            Self::UpdatedDate => "updatedDate",
            Self::Email => "email",
            Self::FullName => "fullName",
            Self::Birthdate => "birthdate",
            Self::Gender => "gender",
            Self::Location => "location",
            Self::Country => "country",
            Self::Zip => "zip",
            Self::StatusMessage => "statusMessage",
            Self::Approved => "approved",
            Self::IsOwner => "isOwner",
            Self::IsAdmin => "isAdmin",
            Self::IsMember => "isMember",
            Self::State => "state",
            Self::IconUrl => "iconUrl",
            Self::Url => "url",
        }
    }
}
