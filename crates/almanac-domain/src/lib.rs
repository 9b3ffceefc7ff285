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

//! # Almanac Domain
//!
//! **Validated value objects shared across application layers.**
//!
//! Each type in this crate is a small, immutable-after-construction value
//! with its invariant enforced at the boundary: construction either
//! normalizes the input into canonical form or rejects it with a
//! [`error::DomainError`]. Deserialization funnels through the same
//! validation, so a value of one of these types is well-formed wherever it
//! came from.
//!
//! ## Architecture
//!
//! * **`error`**: The shared `DomainError` enum and `DomainResult` alias.
//! * **`key`**: Phantom-tagged UUID identifiers (`Key<T>`) that keep
//!   identifiers of different entities apart at compile time.
//! * **`email`** / **`phone`**: Validated, normalized contact wrappers with
//!   string-aware equality.
//! * **`title`**: A non-blank display-name wrapper.
//! * **`location`**: A closed polymorphic location hierarchy (internet and
//!   building addresses) with identity semantics per kind.
//! * **`patch`**: A three-state optional-update wrapper distinguishing an
//!   absent field from an explicit null.
//! * **`multi`**: A small set-with-preferred-element container.
//! * **`text`**: String normalization helpers the wrappers build on.
//!
//! ## Design Philosophy
//!
//! 1.  **Validate eagerly**: A constructed value is canonical; comparisons
//!     and hashing never re-normalize the stored form.
//! 2.  **Type safety**: Identifiers are distinct types. You cannot use a
//!     building key where an internet-location key is expected.
//! 3.  **Independence**: These types do not depend on the `almanac-core`
//!     interval engine, and it does not depend on them.

pub mod email;
pub mod error;
pub mod key;
pub mod location;
pub mod multi;
pub mod patch;
pub mod phone;
pub mod text;
pub mod title;
