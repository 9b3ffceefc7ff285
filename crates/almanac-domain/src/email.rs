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
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// One non-space run, an @, another run, a dot, a final run. Deliberately
// permissive: the mailbox provider has the last word anyway.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern must compile"));

/// A validated, normalized email address.
///
/// Construction trims surrounding whitespace, lowercases the address, and
/// rejects anything that does not match the address shape. The stored form
/// is canonical, so equality and hashing are simple string operations;
/// comparisons against raw strings normalize the other side first.
///
/// # Examples
///
/// ```rust
/// # use almanac_domain::email::Email;
///
/// let email = Email::new("  Ada.Lovelace@Example.ORG ").unwrap();
/// assert_eq!(email.as_str(), "ada.lovelace@example.org");
/// assert!(email == *"ADA.LOVELACE@example.org");
///
/// assert!(Email::new("not-an-address").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Parses and normalizes an email address.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidEmail`] when the trimmed, lowercased
    /// input does not look like an address.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use almanac_domain::email::Email;
    ///
    /// assert!(Email::new("user@host.org").is_ok());
    /// assert!(Email::new("user@host").is_err());
    /// assert!(Email::new("").is_err());
    /// ```
    pub fn new(value: &str) -> DomainResult<Self> {
        let normalized = value.trim().to_lowercase();
        if EMAIL_PATTERN.is_match(&normalized) {
            Ok(Email(normalized))
        } else {
            Err(DomainError::InvalidEmail(value.to_string()))
        }
    }

    /// Returns the canonical (trimmed, lowercased) address.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the wrapper and returns the canonical address.
    #[inline]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl FromStr for Email {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Email {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl TryFrom<&str> for Email {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Email({:?})", self.0)
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<str> for Email {
    /// Raw strings are normalized (trim + lowercase) before comparing.
    fn eq(&self, other: &str) -> bool {
        self.0 == other.trim().to_lowercase()
    }
}

impl PartialEq<&str> for Email {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<Email> for str {
    fn eq(&self, other: &Email) -> bool {
        other == self
    }
}

impl PartialEq<Email> for &str {
    fn eq(&self, other: &Email) -> bool {
        other == *self
    }
}

impl Serialize for Email {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Email {
    /// Deserialization funnels through [`Email::new`], so invalid payloads
    /// are rejected rather than smuggled in.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Email::new(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes() {
        let email = Email::new("  John.Doe@Example.COM  ").unwrap();
        assert_eq!(email.as_str(), "john.doe@example.com");
        assert_eq!(email.to_string(), "john.doe@example.com");
    }

    #[test]
    fn test_new_rejects_malformed() {
        for bad in ["", "   ", "plain", "user@host", "user@@host.org", "user name@host.org", "@host.org"] {
            assert!(Email::new(bad).is_err(), "expected rejection of {:?}", bad);
        }
    }

    #[test]
    fn test_equality_is_case_insensitive() {
        let a = Email::new("USER@HOST.ORG").unwrap();
        let b = Email::new("user@host.org").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_string_comparison_normalizes_other_side() {
        let email = Email::new("user@host.org").unwrap();
        assert!(email == *" USER@host.ORG ");
        assert!(email == "user@host.org");
        assert!(" USER@host.ORG " == email);
        assert!(email != "other@host.org");
    }

    #[test]
    fn test_from_str() {
        let email: Email = "user@host.org".parse().unwrap();
        assert_eq!(email.as_str(), "user@host.org");

        let err = "nope".parse::<Email>().unwrap_err();
        assert_eq!(err, DomainError::InvalidEmail("nope".to_string()));
    }

    #[test]
    fn test_serde_validates() {
        let email = Email::new("user@host.org").unwrap();
        assert_eq!(serde_json::to_string(&email).unwrap(), "\"user@host.org\"");

        let back: Email = serde_json::from_str("\"User@Host.org\"").unwrap();
        assert_eq!(back, email);

        assert!(serde_json::from_str::<Email>("\"broken\"").is_err());
    }
}
