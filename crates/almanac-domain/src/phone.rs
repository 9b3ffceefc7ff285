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
use crate::text;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

// Optional country code, optional parenthesized area code, then digit groups
// separated by spaces or dashes.
static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\+?\d{1,4}[\s-]?)?\(?\d{2,4}\)?[\s-]?\d{2,4}[\s-]?\d{1,4}[\s-]?\d{0,4}$")
        .expect("phone pattern must compile")
});

/// A validated phone number, canonicalized to its bare digit sequence.
///
/// Construction validates the formatted input, then reduces it to digits:
/// a leading `00` international prefix is dropped, and an eleven-digit
/// number led by `8` is rewritten to the `7…` country-code form (the trunk
/// prefix convention the original data used). The canonical rendering is
/// `+` followed by the digits.
///
/// Identity lives in the digit sequence: two phones are equal when their
/// normalized digits are equal, regardless of how the inputs were
/// formatted.
///
/// # Examples
///
/// ```rust
/// # use almanac_domain::phone::Phone;
///
/// let a = Phone::new("+7 (123) 456-78-90").unwrap();
/// let b = Phone::new("81234567890").unwrap();
///
/// assert_eq!(a.to_string(), "+71234567890");
/// assert_eq!(a, b);
/// assert!(Phone::new("not a phone").is_err());
/// ```
#[derive(Clone)]
pub struct Phone {
    value: String,
    digits: String,
}

impl Phone {
    /// Parses and normalizes a phone number.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidPhone`] when the input does not match
    /// the accepted phone shapes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use almanac_domain::phone::Phone;
    ///
    /// assert!(Phone::new("+71234567890").is_ok());
    /// assert!(Phone::new("+71234").is_err());
    /// ```
    pub fn new(value: &str) -> DomainResult<Self> {
        if !PHONE_PATTERN.is_match(value) {
            return Err(DomainError::InvalidPhone(value.to_string()));
        }

        let digits = Self::normalize_digits(value);
        let value = format!("+{digits}");
        Ok(Phone { value, digits })
    }

    /// Returns the canonical `+digits` rendering.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns the normalized digit sequence the phone's identity is based
    /// on.
    #[inline]
    pub fn digits(&self) -> &str {
        &self.digits
    }

    fn normalize_digits(input: &str) -> String {
        let mut digits = text::digits(input.trim());

        if let Some(rest) = digits.strip_prefix("00") {
            digits = rest.to_string();
        }

        if digits.len() == 11 && digits.starts_with('8') {
            digits.replace_range(..1, "7");
        }

        digits
    }
}

impl FromStr for Phone {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Phone {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl TryFrom<&str> for Phone {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl PartialEq for Phone {
    fn eq(&self, other: &Self) -> bool {
        self.digits == other.digits
    }
}

impl Eq for Phone {}

impl Hash for Phone {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.digits.hash(state);
    }
}

impl PartialEq<str> for Phone {
    /// Raw strings are digit-normalized before comparing.
    fn eq(&self, other: &str) -> bool {
        self.digits == Self::normalize_digits(other)
    }
}

impl PartialEq<&str> for Phone {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<Phone> for str {
    fn eq(&self, other: &Phone) -> bool {
        other == self
    }
}

impl PartialEq<Phone> for &str {
    fn eq(&self, other: &Phone) -> bool {
        other == *self
    }
}

impl std::fmt::Debug for Phone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Phone({:?})", self.value)
    }
}

impl std::fmt::Display for Phone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.value)
    }
}

impl<'de> Deserialize<'de> for Phone {
    /// Deserialization funnels through [`Phone::new`]; malformed payloads
    /// are rejected.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Phone::new(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_canonical_rendering() {
        let phone = Phone::new("+71234567890").unwrap();
        assert_eq!(phone.to_string(), "+71234567890");
        assert_eq!(phone.digits(), "71234567890");
    }

    #[test]
    fn test_trunk_prefix_rewrite() {
        // An eleven-digit number led by 8 is the same subscriber as the
        // +7 form.
        let plus = Phone::new("+71234567890").unwrap();
        let trunk = Phone::new("81234567890").unwrap();
        assert_eq!(plus, trunk);
        assert_eq!(trunk.to_string(), "+71234567890");
    }

    #[test]
    fn test_international_prefix_strip() {
        let zeros = Phone::new("0071234567890").unwrap();
        assert_eq!(zeros.digits(), "71234567890");
    }

    #[test]
    fn test_formatting_does_not_matter() {
        let formatted = Phone::new("+7 (123) 456-78-90").unwrap();
        let bare = Phone::new("+71234567890").unwrap();
        assert_eq!(formatted, bare);
    }

    #[test]
    fn test_inequality_on_different_subscribers() {
        let a = Phone::new("+71234567890").unwrap();
        for other in ["+79876543210", "89876543210", "9876543210"] {
            let b = Phone::new(other).unwrap();
            assert_ne!(a, b);
            assert!(a != other);
        }
    }

    #[test]
    fn test_string_comparison_normalizes() {
        let phone = Phone::new("+71234567890").unwrap();
        assert!(phone == "81234567890");
        assert!("8 (123) 456-78-90" == phone);
    }

    #[test]
    fn test_rejects_malformed() {
        for bad in ["+71234", "8123arcg", "abc1234567890", ""] {
            assert!(Phone::new(bad).is_err(), "expected rejection of {:?}", bad);
        }
    }

    #[test]
    fn test_from_str_and_try_from() {
        let phone: Phone = "1234567890".parse().unwrap();
        assert_eq!(phone.to_string(), "+1234567890");

        assert!(Phone::try_from("nope".to_string()).is_err());
    }

    #[test]
    fn test_serde_validates() {
        let phone = Phone::new("81234567890").unwrap();
        assert_eq!(serde_json::to_string(&phone).unwrap(), "\"+71234567890\"");

        let back: Phone = serde_json::from_str("\"+71234567890\"").unwrap();
        assert_eq!(back, phone);

        assert!(serde_json::from_str::<Phone>("\"broken\"").is_err());
    }
}
