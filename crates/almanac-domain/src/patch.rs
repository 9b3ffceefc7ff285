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

use serde::{Deserialize, Serialize};

/// A partial-update wrapper that distinguishes "leave unchanged" from
/// "clear" from "replace".
///
/// In a PATCH-style payload, a field that is absent means something
/// different from a field that is explicitly `null`. `Patch<T>` keeps all
/// three states apart:
///
/// - [`Patch::Missing`] — the field was not mentioned; keep the current
///   value.
/// - [`Patch::Null`] — the field was explicitly cleared.
/// - [`Patch::Value`] — the field was set to a new value.
///
/// # Serde
///
/// Deserialization maps `null` to `Null` and a value to `Value`. `Missing`
/// can only arise from an absent field, so the embedding struct must mark
/// patch fields `#[serde(default)]` (and, symmetrically,
/// `#[serde(skip_serializing_if = "Patch::is_missing")]` to keep untouched
/// fields off the wire).
///
/// # Examples
///
/// ```rust
/// # use almanac_domain::patch::Patch;
/// # use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct ContactUpdate {
///     #[serde(default)]
///     nickname: Patch<String>,
/// }
///
/// let absent: ContactUpdate = serde_json::from_str("{}").unwrap();
/// assert!(absent.nickname.is_missing());
///
/// let cleared: ContactUpdate = serde_json::from_str(r#"{ "nickname": null }"#).unwrap();
/// assert_eq!(cleared.nickname, Patch::Null);
///
/// let set: ContactUpdate = serde_json::from_str(r#"{ "nickname": "Ada" }"#).unwrap();
/// assert_eq!(set.nickname, Patch::Value("Ada".to_string()));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Patch<T> {
    /// The field was not part of the update.
    #[default]
    Missing,
    /// The field was explicitly set to null.
    Null,
    /// The field was set to this value.
    Value(T),
}

impl<T> Patch<T> {
    /// Returns `true` if the field was not mentioned in the update.
    #[inline]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Patch::Missing)
    }

    /// Returns `true` if the update says anything about the field, whether
    /// clearing it or replacing it.
    #[inline]
    pub const fn is_present(&self) -> bool {
        !self.is_missing()
    }

    /// Returns the replacement value, if one was supplied.
    #[inline]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Patch::Value(value) => Some(value),
            _ => None,
        }
    }

    /// Consumes the patch and returns the replacement value, if any.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Patch::Value(value) => Some(value),
            _ => None,
        }
    }

    /// Applies the patch to the current state of an optional field.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use almanac_domain::patch::Patch;
    ///
    /// let current = Some("old".to_string());
    /// assert_eq!(Patch::Missing.apply(current.clone()), Some("old".to_string()));
    /// assert_eq!(Patch::Null.apply(current.clone()), None);
    /// assert_eq!(
    ///     Patch::Value("new".to_string()).apply(current),
    ///     Some("new".to_string())
    /// );
    /// ```
    pub fn apply(self, current: Option<T>) -> Option<T> {
        match self {
            Patch::Missing => current,
            Patch::Null => None,
            Patch::Value(value) => Some(value),
        }
    }
}

impl<T> From<Option<T>> for Patch<T> {
    /// A present option becomes a replacement, an absent one an explicit
    /// clear. `Missing` has no `Option` counterpart.
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Patch::Value(value),
            None => Patch::Null,
        }
    }
}

impl<T> Serialize for Patch<T>
where
    T: Serialize,
{
    /// `Missing` and `Null` both render as `null`; keeping `Missing` off
    /// the wire entirely is the job of the field-site
    /// `skip_serializing_if` attribute.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Patch::Value(value) => serializer.serialize_some(value),
            _ => serializer.serialize_none(),
        }
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(Option::<T>::deserialize(deserializer)?.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize, Deserialize, Default)]
    struct Update {
        #[serde(default, skip_serializing_if = "Patch::is_missing")]
        name: Patch<String>,
        #[serde(default, skip_serializing_if = "Patch::is_missing")]
        age: Patch<u32>,
    }

    #[test]
    fn test_default_is_missing() {
        let patch: Patch<i32> = Patch::default();
        assert!(patch.is_missing());
        assert!(!patch.is_present());
    }

    #[test]
    fn test_accessors() {
        let patch = Patch::Value(7);
        assert_eq!(patch.value(), Some(&7));
        assert_eq!(patch.into_option(), Some(7));

        assert_eq!(Patch::<i32>::Null.value(), None);
        assert_eq!(Patch::<i32>::Missing.into_option(), None);
    }

    #[test]
    fn test_apply() {
        assert_eq!(Patch::Missing.apply(Some(1)), Some(1));
        assert_eq!(Patch::Null.apply(Some(1)), None);
        assert_eq!(Patch::Value(2).apply(Some(1)), Some(2));
        assert_eq!(Patch::Value(2).apply(None), Some(2));
    }

    #[test]
    fn test_deserialize_three_states() {
        let update: Update = serde_json::from_str(r#"{ "name": "Ada" }"#).unwrap();
        assert_eq!(update.name, Patch::Value("Ada".to_string()));
        assert!(update.age.is_missing());

        let update: Update = serde_json::from_str(r#"{ "age": null }"#).unwrap();
        assert!(update.name.is_missing());
        assert_eq!(update.age, Patch::Null);
    }

    #[test]
    fn test_serialize_skips_missing() {
        let update = Update {
            name: Patch::Value("Ada".to_string()),
            age: Patch::Missing,
        };
        assert_eq!(serde_json::to_string(&update).unwrap(), r#"{"name":"Ada"}"#);

        let update = Update {
            name: Patch::Null,
            age: Patch::Missing,
        };
        assert_eq!(serde_json::to_string(&update).unwrap(), r#"{"name":null}"#);
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Patch::from(Some(3)), Patch::Value(3));
        assert_eq!(Patch::<i32>::from(None), Patch::Null);
    }
}
