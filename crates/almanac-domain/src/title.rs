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

use crate::error::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A display name that is either explicitly empty or non-blank.
///
/// The validated constructor rejects blank and whitespace-only input; the
/// [`Default`] value is the one sanctioned empty title, for records that
/// have not been named yet.
///
/// # Examples
///
/// ```rust
/// # use almanac_domain::title::Title;
///
/// let title = Title::new("Warehouse 4").unwrap();
/// assert_eq!(title.as_str(), "Warehouse 4");
///
/// assert!(Title::new("   ").is_err());
/// assert!(Title::default().is_empty());
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Title(String);

impl Title {
    /// Creates a title from a non-blank string. The value is stored as
    /// given; surrounding whitespace is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::BlankTitle`] for empty or whitespace-only
    /// input.
    pub fn new(value: &str) -> DomainResult<Self> {
        if value.trim().is_empty() {
            Err(DomainError::BlankTitle)
        } else {
            Ok(Title(value.to_string()))
        }
    }

    /// Returns the title text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` for the default, unnamed title.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for Title {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Title {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl AsRef<str> for Title {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Title {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Title {
    fn eq(&self, other: &&str) -> bool {
        self.0 == **other
    }
}

impl std::fmt::Debug for Title {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Title({:?})", self.0)
    }
}

impl std::fmt::Display for Title {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Title {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Title {
    /// An empty string on the wire becomes the default title; anything else
    /// must pass validation.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if raw.is_empty() {
            Ok(Title::default())
        } else {
            Title::new(&raw).map_err(serde::de::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_non_blank() {
        let title = Title::new("Main office").unwrap();
        assert_eq!(title, "Main office");
        assert!(!title.is_empty());
    }

    #[test]
    fn test_new_rejects_blank() {
        assert_eq!(Title::new("").unwrap_err(), DomainError::BlankTitle);
        assert_eq!(Title::new("   \t ").unwrap_err(), DomainError::BlankTitle);
    }

    #[test]
    fn test_default_is_empty() {
        let title = Title::default();
        assert!(title.is_empty());
        assert_eq!(title.as_str(), "");
    }

    #[test]
    fn test_serde() {
        let title = Title::new("Pier 9").unwrap();
        assert_eq!(serde_json::to_string(&title).unwrap(), "\"Pier 9\"");

        let back: Title = serde_json::from_str("\"Pier 9\"").unwrap();
        assert_eq!(back, title);

        // Empty payloads map to the default title rather than an error.
        let empty: Title = serde_json::from_str("\"\"").unwrap();
        assert!(empty.is_empty());

        // Whitespace-only payloads are still rejected.
        assert!(serde_json::from_str::<Title>("\"  \"").is_err());
    }
}
