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

use chrono::Datelike;
use num_traits::{PrimInt, Signed};
use serde::{Deserialize, Serialize};

/// A position in a day-granularity calendar sequence.
///
/// The interval algebra in this crate is generic over this trait. A calendar
/// day must order totally, report its position as an integer day number such
/// that `b.day_number() - a.day_number()` is the number of days from `a` to
/// `b`, and support stepping by whole days.
///
/// Implementations are provided for [`EpochDay<T>`] (a raw "days since
/// epoch" counter) and for [`chrono::NaiveDate`] (the proleptic Gregorian
/// calendar). The epoch itself is arbitrary; only distances between day
/// numbers are meaningful.
///
/// # Examples
///
/// ```rust
/// # use almanac_core::date::day::{CalendarDay, EpochDay};
///
/// let day = EpochDay::new(10i64);
/// assert_eq!(day.day_number(), 10);
/// assert_eq!(day.add_days(5), EpochDay::new(15));
/// assert_eq!(day.add_days(-5), EpochDay::new(5));
/// ```
pub trait CalendarDay: Copy + Ord {
    /// Returns the day number of this day: its signed distance in days from
    /// the implementation's fixed epoch.
    fn day_number(self) -> i64;

    /// Returns the day `days` steps after this one (before, for negative
    /// `days`).
    ///
    /// # Panics
    ///
    /// Implementations may panic if the result falls outside the range
    /// representable by the underlying day type.
    fn add_days(self, days: i64) -> Self;
}

/// A calendar day encoded as a raw signed day counter.
///
/// This is the minimal realization of [`CalendarDay`]: an opaque
/// `#[repr(transparent)]` wrapper over "days since an arbitrary epoch".
/// It is the natural day type for tests and for callers that already track
/// days as integers and do not want a full calendar dependency.
///
/// # Examples
///
/// ```rust
/// # use almanac_core::date::day::EpochDay;
///
/// let a = EpochDay::new(3i32);
/// let b = EpochDay::new(7i32);
/// assert!(a < b);
/// assert_eq!(b.get(), 7);
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EpochDay<T>(T)
where
    T: PrimInt + Signed;

impl<T> EpochDay<T>
where
    T: PrimInt + Signed,
{
    /// Creates an `EpochDay` from a raw day counter.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use almanac_core::date::day::EpochDay;
    ///
    /// let day = EpochDay::new(42i64);
    /// assert_eq!(day.get(), 42);
    /// ```
    #[inline]
    pub const fn new(raw: T) -> Self {
        EpochDay(raw)
    }

    /// Returns the raw day counter.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use almanac_core::date::day::EpochDay;
    ///
    /// let day = EpochDay::new(-3i16);
    /// assert_eq!(day.get(), -3);
    /// ```
    #[inline]
    pub const fn get(&self) -> T {
        self.0
    }
}

impl<T> CalendarDay for EpochDay<T>
where
    T: PrimInt + Signed,
{
    /// # Panics
    ///
    /// Panics if the raw counter does not fit into an `i64` day number.
    #[inline]
    fn day_number(self) -> i64 {
        self.0
            .to_i64()
            .expect("EpochDay: raw day counter exceeds the i64 day-number range")
    }

    /// # Panics
    ///
    /// Panics if the shifted counter falls outside the range of `T`.
    #[inline]
    fn add_days(self, days: i64) -> Self {
        let shifted = self
            .day_number()
            .checked_add(days)
            .expect("EpochDay: day shift overflows the i64 day-number range");
        EpochDay(T::from(shifted).expect("EpochDay: shifted day counter is out of range for the underlying integer type"))
    }
}

impl<T> std::fmt::Debug for EpochDay<T>
where
    T: PrimInt + Signed + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EpochDay({:?})", self.0)
    }
}

impl<T> std::fmt::Display for EpochDay<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EpochDay({})", self.0)
    }
}

impl<T> From<T> for EpochDay<T>
where
    T: PrimInt + Signed,
{
    #[inline]
    fn from(raw: T) -> Self {
        EpochDay(raw)
    }
}

/// The proleptic Gregorian calendar day.
///
/// `chrono::NaiveDate` already models a pure day-granularity date with no
/// time of day and no timezone, which is exactly the calendar this library
/// targets. Day numbers are counted from the Common Era epoch.
impl CalendarDay for chrono::NaiveDate {
    #[inline]
    fn day_number(self) -> i64 {
        i64::from(self.num_days_from_ce())
    }

    /// # Panics
    ///
    /// Panics if the result falls outside the date range supported by
    /// `chrono::NaiveDate`.
    #[inline]
    fn add_days(self, days: i64) -> Self {
        self.checked_add_signed(chrono::Duration::days(days))
            .expect("NaiveDate: day shift leaves the supported chrono date range")
    }
}
