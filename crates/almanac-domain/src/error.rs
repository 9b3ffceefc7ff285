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

use thiserror::Error;

/// Validation failures of the domain value objects.
///
/// Every fallible constructor in this crate reports its rejection through
/// this enum, which keeps "what can go wrong at the boundary" in one place.
///
/// # Examples
///
/// ```rust
/// # use almanac_domain::email::Email;
/// # use almanac_domain::error::DomainError;
///
/// let err = Email::new("not-an-address").unwrap_err();
/// assert!(matches!(err, DomainError::InvalidEmail(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// The input did not look like an email address.
    #[error("invalid email address: {0:?}")]
    InvalidEmail(String),

    /// The input did not look like a phone number.
    #[error("invalid phone number: {0:?}")]
    InvalidPhone(String),

    /// A title must contain at least one non-whitespace character.
    #[error("title must not be blank")]
    BlankTitle,

    /// An internet location was given an unparsable URL.
    #[error("invalid location url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Shorthand for results carrying a [`DomainError`].
pub type DomainResult<T> = Result<T, DomainError>;
