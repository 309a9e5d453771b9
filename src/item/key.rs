//! Typed content item identifiers.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValidationError;
use crate::item::ContentItem;

/// Opaque identifier of a content item of type `T`.
///
/// Keys are issued by the server (e.g. `3011345:User:1234`) and never
/// interpreted client side. The type parameter keeps a `Key<User>` from being
/// passed where a key of another item type is expected.
///
/// # Example
///
/// ```rust
/// use ning_api::item::{Key, User};
///
/// let key: Key<User> = Key::new("3011345:User:1234").unwrap();
/// assert_eq!(key.as_ref(), "3011345:User:1234");
/// assert!(Key::<User>::new("").is_err());
/// ```
pub struct Key<T> {
    id: String,
    item_type: PhantomData<fn() -> T>,
}

impl<T: ContentItem> Key<T> {
    /// Creates a key from a server-provided value.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyKey`] if the value is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::EmptyKey {
                resource: T::TYPE_NAME,
            });
        }
        Ok(Self {
            id,
            item_type: PhantomData,
        })
    }
}

impl<T> AsRef<str> for Key<T> {
    fn as_ref(&self) -> &str {
        &self.id
    }
}

impl<T> Clone for Key<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            item_type: PhantomData,
        }
    }
}

impl<T> PartialEq for Key<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for Key<T> {}

impl<T> Hash for Key<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<T> fmt::Debug for Key<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Key").field(&self.id).finish()
    }
}

impl<T> fmt::Display for Key<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

impl<T> Serialize for Key<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.id)
    }
}

impl<'de, T: ContentItem> Deserialize<'de> for Key<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::User;
    use std::collections::HashSet;

    #[test]
    fn test_key_rejects_blank_values() {
        let result = Key::<User>::new("  ");
        assert!(matches!(
            result,
            Err(ValidationError::EmptyKey { resource: "User" })
        ));
    }

    #[test]
    fn test_key_equality_and_hash_follow_id() {
        let a = Key::<User>::new("1:User:1").unwrap();
        let b = Key::<User>::new("1:User:1").unwrap();
        let c = Key::<User>::new("1:User:2").unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<_> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_key_serializes_as_plain_string() {
        let key = Key::<User>::new("1:User:7").unwrap();
        assert_eq!(serde_json::to_string(&key).unwrap(), r#""1:User:7""#);

        let parsed: Key<User> = serde_json::from_str(r#""1:User:7""#).unwrap();
        assert_eq!(parsed, key);
        assert_eq!(format!("{parsed:?}"), r#"Key("1:User:7")"#);
    }

    #[test]
    fn test_empty_key_fails_deserialization() {
        let result: Result<Key<User>, _> = serde_json::from_str(r#""""#);
        assert!(result.is_err());
    }
}
