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

//! # Calendar Primitives
//!
//! The day-granularity foundation the interval algebra is generic over.
//! A calendar day is nothing more than a totally ordered position in a day
//! sequence with an integer day number; this module pins that contract down
//! and ships the two implementations the rest of the library needs.
//!
//! ## Submodules
//!
//! - `day`: The `CalendarDay` trait (total order, `day_number`, `add_days`),
//!   the `EpochDay<T>` "days since epoch" newtype over any signed primitive
//!   integer, and the `chrono::NaiveDate` implementation covering the
//!   proleptic Gregorian calendar.
//!
//! ## Motivation
//!
//! Interval math does not care which calendar a day comes from — only that
//! days order totally and that the distance between two of them is a whole
//! number of days. Keeping that seam as a small trait lets the same period
//! engine run over raw day counters in tests and real calendar dates in
//! application code.
//!
//! Refer to the `day` module for detailed APIs and examples.

pub mod day;
