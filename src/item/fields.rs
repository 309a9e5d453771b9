//! Field selection for partial responses.

use std::fmt::Debug;

use crate::error::ValidationError;

/// An enumeration of the attributes a content item type can return.
///
/// Implemented by one field enum per item type (e.g.
/// [`UserField`](crate::item::UserField)).
pub trait FieldSelector: Copy + Eq + Debug + Send + Sync + 'static {
    /// Type name of the content item these fields belong to, e.g. `User`.
    const ITEM_TYPE: &'static str;

    /// Every variant, in declaration order.
    const ALL: &'static [Self];

    /// The attribute name used on the wire, e.g. `fullName`.
    fn wire_name(self) -> &'static str;
}

/// A non-empty, ordered set of fields to request.
///
/// Duplicates are dropped, keeping the first occurrence.
///
/// # Example
///
/// ```rust
/// use ning_api::item::{Fields, UserField};
///
/// let fields = Fields::new(UserField::FullName, &[UserField::Email, UserField::FullName]);
/// assert_eq!(fields.len(), 2);
/// assert_eq!(fields.to_param(), "fullName,email");
///
/// assert!(Fields::<UserField>::try_from_slice(&[]).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fields<F: FieldSelector> {
    fields: Vec<F>,
}

impl<F: FieldSelector> Fields<F> {
    /// Creates a field set from one required field and any number of others.
    #[must_use]
    pub fn new(first: F, rest: &[F]) -> Self {
        let mut fields = vec![first];
        for field in rest {
            if !fields.contains(field) {
                fields.push(*field);
            }
        }
        Self { fields }
    }

    /// Creates a field set from a slice.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyFields`] if the slice is empty.
    pub fn try_from_slice(fields: &[F]) -> Result<Self, ValidationError> {
        match fields.split_first() {
            Some((first, rest)) => Ok(Self::new(*first, rest)),
            None => Err(ValidationError::EmptyFields {
                resource: F::ITEM_TYPE,
            }),
        }
    }

    /// Creates a field set holding every field of `F`.
    #[must_use]
    pub fn all() -> Self {
        Self {
            fields: F::ALL.to_vec(),
        }
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if no field is selected. Never the case for a built set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns `true` if `field` is selected.
    #[must_use]
    pub fn contains(&self, field: F) -> bool {
        self.fields.contains(&field)
    }

    /// Returns the fields in selection order.
    pub fn iter(&self) -> impl Iterator<Item = F> + '_ {
        self.fields.iter().copied()
    }

    /// Renders the value of the `fields` query parameter.
    #[must_use]
    pub fn to_param(&self) -> String {
        self.fields
            .iter()
            .map(|f| f.wire_name())
            .collect::<Vec<_>>()
            .join(",")
    }
}
