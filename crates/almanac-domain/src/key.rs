// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Strongly Typed Identifiers
//!
//! Phantom-typed wrappers around a UUID to prevent mixing identifiers from
//! different entities. `Key<T>` carries a tag type `T: KeyTag` that encodes
//! intent at the type level while storing nothing but the UUID itself.
//!
//! ## Motivation
//!
//! Once several entities are identified by UUIDs, a raw `Uuid` parameter
//! invites accidental swaps that no test may catch. Phantom-tagged keys move
//! that class of bug to compile time with no runtime overhead.
//!
//! ## Usage
//!
//! ```rust
//! use almanac_domain::key::{Key, KeyTag};
//!
//! struct OrderTag;
//! impl KeyTag for OrderTag { const NAME: &'static str = "OrderKey"; }
//!
//! type OrderKey = Key<OrderTag>;
//! let key = OrderKey::new();
//! assert_ne!(key, OrderKey::new());
//! ```

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use uuid::Uuid;

/// A trait to tag typed keys with a name for debugging and display purposes.
///
/// # Examples
///
/// ```rust
/// # use almanac_domain::key::KeyTag;
///
/// struct InvoiceTag;
///
/// impl KeyTag for InvoiceTag {
///     const NAME: &'static str = "InvoiceKey";
/// }
/// ```
pub trait KeyTag {
    const NAME: &'static str;
}

/// A strongly typed identifier that is associated with a specific tag type `T`.
///
/// This struct wraps a [`Uuid`] and uses a phantom type parameter `T` to
/// provide type safety and prevent mixing keys of different entities. Two
/// keys are equal exactly when their UUIDs are equal.
///
/// # Examples
///
/// ```rust
/// # use almanac_domain::key::{Key, KeyTag};
/// # use uuid::Uuid;
///
/// struct UserTag;
///
/// impl KeyTag for UserTag {
///     const NAME: &'static str = "UserKey";
/// }
///
/// type UserKey = Key<UserTag>;
///
/// let uuid = Uuid::nil();
/// let key = UserKey::from_uuid(uuid);
/// assert_eq!(key.get(), uuid);
/// ```
pub struct Key<T> {
    value: Uuid,
    _marker: std::marker::PhantomData<T>,
}

// The tag is phantom; the value traits must not place bounds on `T`.
impl<T> Clone for Key<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Key<T> {}

impl<T> PartialEq for Key<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Key<T> {}

impl<T> Hash for Key<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> Key<T> {
    /// Creates a fresh random (version 4) key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use almanac_domain::key::{Key, KeyTag};
    ///
    /// struct Tag;
    /// impl KeyTag for Tag { const NAME: &'static str = "Key"; }
    ///
    /// let a: Key<Tag> = Key::new();
    /// let b: Key<Tag> = Key::new();
    /// assert_ne!(a, b);
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::from_uuid(Uuid::new_v4())
    }

    /// Wraps an existing UUID.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use almanac_domain::key::{Key, KeyTag};
    /// # use uuid::Uuid;
    ///
    /// struct Tag;
    /// impl KeyTag for Tag { const NAME: &'static str = "Key"; }
    ///
    /// let key: Key<Tag> = Key::from_uuid(Uuid::nil());
    /// assert!(key.get().is_nil());
    /// ```
    #[inline]
    pub const fn from_uuid(value: Uuid) -> Self {
        Self {
            value,
            _marker: std::marker::PhantomData,
        }
    }

    /// Returns the underlying UUID.
    #[inline]
    pub const fn get(&self) -> Uuid {
        self.value
    }
}

impl<T> Default for Key<T> {
    /// A default key is a fresh random key, never the nil UUID.
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for Key<T>
where
    T: KeyTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", T::NAME, self.value)
    }
}

impl<T> std::fmt::Display for Key<T>
where
    T: KeyTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<Uuid> for Key<T> {
    fn from(value: Uuid) -> Self {
        Self::from_uuid(value)
    }
}

impl<T> From<Key<T>> for Uuid {
    fn from(key: Key<T>) -> Self {
        key.value
    }
}

// Same rule for serde. The wire form is the hyphenated UUID string.
impl<T> Serialize for Key<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.value.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Key<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Uuid::deserialize(deserializer).map(Self::from_uuid)
    }
}
