//! Request builders for the `User` resource.

use chrono::{DateTime, Utc};

use crate::access::{Counter, Finder, Items, Lister, Updater};
use crate::clients::NingConnection;
use crate::config::NingConfig;
use crate::item::{Fields, User, UserField};

/// Entry point for every request about network members.
///
/// Obtained from [`NingClient::users`](crate::NingClient::users). The facade
/// is `Copy` and cheap to hand around; every method returns a fresh builder.
///
/// # Example
///
/// ```rust,ignore
/// use ning_api::item::{Fields, Key, UserField};
///
/// let users = client.users();
///
/// let me = users
///     .finder(Fields::new(UserField::FullName, &[UserField::Email]))
///     .find_by_current_author()
///     .await?;
///
/// let recent = users
///     .lister_for_recent(Fields::all())
///     .only_members()
///     .list()
///     .collect_all()
///     .await?;
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Users<'a> {
    items: Items<'a, User>,
}

impl<'a> Users<'a> {
    /// Creates the facade over the given connection.
    #[must_use]
    pub const fn new(connection: &'a NingConnection, config: &'a NingConfig) -> Self {
        Self {
            items: Items::new(connection, config),
        }
    }

    /// Returns the generic accessor this facade wraps.
    #[must_use]
    pub const fn items(&self) -> &Items<'a, User> {
        &self.items
    }

    /// Counts members who joined after `created_after`.
    #[must_use]
    pub fn counter(&self, created_after: DateTime<Utc>) -> Counter<'a, User> {
        self.items.counter(created_after)
    }

    /// Looks up members, returning the given fields.
    #[must_use]
    pub fn finder(&self, fields: Fields<UserField>) -> Finder<'a, User> {
        self.items.finder(fields)
    }

    /// Lists members alphabetically.
    #[must_use]
    pub fn lister_for_alpha(&self, fields: Fields<UserField>) -> Lister<'a, User> {
        self.items.lister(self.items.endpoints().alpha(), fields)
    }

    /// Lists members, most recent first.
    #[must_use]
    pub fn lister_for_recent(&self, fields: Fields<UserField>) -> Lister<'a, User> {
        self.items.lister(self.items.endpoints().recent(), fields)
    }

    /// Lists featured members.
    #[must_use]
    pub fn lister_for_featured(&self, fields: Fields<UserField>) -> Lister<'a, User> {
        self.items.lister(self.items.endpoints().featured(), fields)
    }

    /// Stages changes on a copy of `user`.
    ///
    /// The key of `user`, if any, is sent along with the changes.
    #[must_use]
    pub fn updater_for(&self, user: User) -> Updater<'a, User> {
        self.items.updater_for(user)
    }

    /// Stages changes on a blank user.
    ///
    /// Without a key the server applies the update to the member whose
    /// credentials are in use.
    #[must_use]
    pub fn updater(&self) -> Updater<'a, User> {
        self.items.updater_for(User::new())
    }
}
