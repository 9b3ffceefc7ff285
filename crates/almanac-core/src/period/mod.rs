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

//! # Date-Interval Algebra
//!
//! Closed, inclusive day-granularity intervals and the operations an
//! application shares across its layers: containment, overlap, intersection
//! (both materialized and count-only), single- and multi-key comparison, and
//! lazy day iteration.
//!
//! ## Submodules
//!
//! - `period`: The `Period<D>` value type over any [`CalendarDay`], its
//!   normalizing constructor, predicate family, the `PeriodField` comparison
//!   key, keyed relational operators, and the restartable `PeriodDays<D>`
//!   iterator (`Iterator`, `DoubleEndedIterator`, `ExactSizeIterator`,
//!   `FusedIterator`).
//!
//! ## Motivation
//!
//! Closed intervals match how people talk about date ranges — a booking from
//! the 10th to the 20th includes both endpoints — and day granularity keeps
//! every operation an exact integer computation with no rounding or timezone
//! edge cases.
//!
//! Refer to the `period` module for detailed APIs and examples.
//!
//! [`CalendarDay`]: crate::date::day::CalendarDay

pub mod period;
