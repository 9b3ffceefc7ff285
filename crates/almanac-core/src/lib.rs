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

//! # Almanac Core
//!
//! Day-granularity calendar primitives and the closed, inclusive
//! date-interval algebra built on top of them. This crate is the algorithmic
//! heart of the Almanac value-type library: everything here is an immutable
//! value, every operation is a pure, bounded computation, and nothing
//! performs I/O.
//!
//! ## Modules
//!
//! - `date`: The `CalendarDay` abstraction — a totally ordered day counter
//!   with integer day distance — together with the `EpochDay<T>` newtype and
//!   an implementation for `chrono::NaiveDate` (the proleptic Gregorian day
//!   sequence).
//! - `period`: The `Period<D>` closed interval type with a normalizing
//!   constructor, containment and overlap predicates, materialized and
//!   allocation-free intersection, single- and multi-key comparison, and
//!   lazy inclusive day iteration.
//!
//! ## Purpose
//!
//! Periods are shared across application layers as plain values: constructing
//! one, comparing two, or iterating one is side-effect free and safe on any
//! number of threads without synchronization, because no operation mutates a
//! `Period` after construction.
//!
//! Refer to each module for detailed APIs and examples.

pub mod date;
pub mod period;
