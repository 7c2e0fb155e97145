//! Explicit patch structures for partial user updates.
//!
//! A patch enumerates every updatable field. Fields that cannot be cleared
//! use `Option<T>` where `None` means "leave unchanged"; fields that *can*
//! be cleared use [`FieldPatch`], which keeps "leave unchanged" and "clear"
//! as distinct representations.

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use super::model::User;

/// A three-state patch for a clearable field.
///
/// In JSON: an absent key is `Keep`, an explicit `null` is `Clear`, and a
/// value is `Set`. `Keep` only arises from an absent key, so the containing
/// struct field must carry `#[serde(default)]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldPatch<T> {
    /// Leave the field unchanged.
    #[default]
    Keep,
    /// Clear the field to "no value".
    Clear,
    /// Replace the field with the given value.
    Set(T),
}

impl<T> FieldPatch<T> {
    /// Returns `true` when the patch leaves the field unchanged.
    pub fn is_keep(&self) -> bool {
        matches!(self, Self::Keep)
    }

    /// Applies the patch to an optional slot.
    pub fn apply(self, slot: &mut Option<T>) {
        match self {
            Self::Keep => {}
            Self::Clear => *slot = None,
            Self::Set(value) => *slot = Some(value),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for FieldPatch<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(|value| match value {
            Some(value) => Self::Set(value),
            None => Self::Clear,
        })
    }
}

impl<T: Serialize> Serialize for FieldPatch<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            // Keep is representable only as an absent key; the containing
            // field must use `skip_serializing_if = "FieldPatch::is_keep"`.
            Self::Keep | Self::Clear => serializer.serialize_none(),
            Self::Set(value) => serializer.serialize_some(value),
        }
    }
}

/// An enumerated partial update of a [`User`].
///
/// Absent means unchanged, for every field. Clearing the display name is a
/// separate representation (`FieldPatch::Clear`), never the same path as
/// leaving it alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserPatch {
    /// New email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New pre-hashed password.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
    /// New display name, or an explicit clear.
    #[serde(default, skip_serializing_if = "FieldPatch::is_keep")]
    pub full_name: FieldPatch<String>,
    /// New active flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    /// New superuser flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_superuser: Option<bool>,
}

impl UserPatch {
    /// Applies the patch to a user, one named field at a time.
    pub fn apply(self, user: &mut User) {
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(password_hash) = self.password_hash {
            user.password_hash = password_hash;
        }
        self.full_name.apply(&mut user.full_name);
        if let Some(is_active) = self.is_active {
            user.is_active = is_active;
        }
        if let Some(is_superuser) = self.is_superuser {
            user.is_superuser = is_superuser;
        }
    }
}
