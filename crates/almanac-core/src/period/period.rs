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

use crate::date::day::CalendarDay;
use serde::{Deserialize, Serialize};
use std::{
    cmp::{max, min, Ordering},
    iter::FusedIterator,
    ops::RangeInclusive,
};

/// A closed, inclusive day-granularity interval `[start, finish]`.
///
/// A `Period` is an immutable value built from two calendar days. The
/// constructor normalizes its endpoints so that `start <= finish` always
/// holds: passing them out of order swaps them rather than failing. Both
/// endpoints belong to the period, so the shortest possible period is a
/// single day with `duration() == 1`.
///
/// Two periods with equal endpoints are interchangeable; a period has no
/// identity beyond them.
///
/// # Ordering
///
/// The default ordering ([`Ord`]) compares by `start` alone, so periods with
/// the same start but different finishes compare as `Equal` while remaining
/// distinguishable by `==`. This ordering is deliberately coarser than
/// equality; it is intended for sorting, not for keying ordered maps. Use
/// [`Period::compare_by`] to order by `finish` or `duration` instead.
///
/// # Examples
///
/// ```rust
/// # use almanac_core::date::day::EpochDay;
/// # use almanac_core::period::period::Period;
///
/// let booking = Period::new(EpochDay::new(10i64), EpochDay::new(20));
/// assert_eq!(booking.duration(), 11);
/// assert!(booking.contains_day(EpochDay::new(20)));
///
/// // Reversed endpoints normalize instead of failing.
/// let reversed = Period::new(EpochDay::new(20i64), EpochDay::new(10));
/// assert_eq!(reversed, booking);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Period<D>
where
    D: CalendarDay,
{
    start: D,
    finish: D,
}

/// The comparison key for multi-key period ordering.
///
/// Selects which derived field of two periods [`Period::compare_by`] and the
/// keyed relational operators compare. Being an enum, an unrecognized key is
/// unrepresentable; there is no runtime failure mode.
///
/// # Examples
///
/// ```rust
/// # use almanac_core::date::day::EpochDay;
/// # use almanac_core::period::period::{Period, PeriodField};
///
/// let long = Period::new(EpochDay::new(1i64), EpochDay::new(9));
/// let short = Period::new(EpochDay::new(4i64), EpochDay::new(5));
///
/// assert!(long < (short, PeriodField::Start));
/// assert!(long > (short, PeriodField::Finish));
/// assert!(long > (short, PeriodField::Duration));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PeriodField {
    /// Compare by the first day of the period.
    Start,
    /// Compare by the last day of the period.
    Finish,
    /// Compare by the inclusive day count.
    Duration,
}

/// An iterator over every calendar day of a [`Period`], ascending.
///
/// The iterator is lazy, finite, and fused. It is also restartable in the
/// sense that each call to [`Period::days`] produces a fresh iterator
/// positioned at `start`; the period itself holds no cursor.
///
/// # Examples
///
/// ```rust
/// # use almanac_core::date::day::EpochDay;
/// # use almanac_core::period::period::Period;
///
/// let period = Period::new(EpochDay::new(1i64), EpochDay::new(3));
/// let days: Vec<_> = period.days().map(|d| d.get()).collect();
/// assert_eq!(days, vec![1, 2, 3]);
/// ```
#[derive(Clone, Debug)]
pub struct PeriodDays<D>
where
    D: CalendarDay,
{
    front: D,
    back: D,
    exhausted: bool,
}

impl<D> Iterator for PeriodDays<D>
where
    D: CalendarDay,
{
    type Item = D;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let day = self.front;
        if self.front == self.back {
            self.exhausted = true;
        } else {
            self.front = self.front.add_days(1);
        }
        Some(day)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<D> DoubleEndedIterator for PeriodDays<D>
where
    D: CalendarDay,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let day = self.back;
        if self.front == self.back {
            self.exhausted = true;
        } else {
            self.back = self.back.add_days(-1);
        }
        Some(day)
    }
}

impl<D> ExactSizeIterator for PeriodDays<D>
where
    D: CalendarDay,
{
    #[inline]
    fn len(&self) -> usize {
        self.remaining()
    }
}

impl<D> FusedIterator for PeriodDays<D> where D: CalendarDay {}

impl<D> PeriodDays<D>
where
    D: CalendarDay,
{
    fn remaining(&self) -> usize {
        if self.exhausted {
            return 0;
        }
        let span = self.back.day_number() - self.front.day_number() + 1;
        usize::try_from(span).expect("PeriodDays: remaining length exceeds usize::MAX")
    }
}

impl<D> Period<D>
where
    D: CalendarDay,
{
    /// Creates a new `Period` from two calendar days.
    ///
    /// The endpoints are normalized: if `start > finish` they are swapped
    /// before being stored, so construction never fails. Passing the same
    /// day twice yields a one-day period.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use almanac_core::date::day::EpochDay;
    /// # use almanac_core::period::period::Period;
    ///
    /// let period = Period::new(EpochDay::new(20i64), EpochDay::new(10));
    /// assert_eq!(period.start(), EpochDay::new(10));
    /// assert_eq!(period.finish(), EpochDay::new(20));
    /// assert_eq!(period.duration(), 11);
    /// ```
    #[inline]
    pub fn new(start: D, finish: D) -> Self {
        if start > finish {
            Self { start: finish, finish: start }
        } else {
            Self { start, finish }
        }
    }

    /// Returns the first day of the period.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use almanac_core::date::day::EpochDay;
    /// # use almanac_core::period::period::Period;
    ///
    /// let period = Period::new(EpochDay::new(5i64), EpochDay::new(10));
    /// assert_eq!(period.start(), EpochDay::new(5));
    /// ```
    #[inline]
    pub const fn start(&self) -> D {
        self.start
    }

    /// Returns the last day of the period.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use almanac_core::date::day::EpochDay;
    /// # use almanac_core::period::period::Period;
    ///
    /// let period = Period::new(EpochDay::new(5i64), EpochDay::new(10));
    /// assert_eq!(period.finish(), EpochDay::new(10));
    /// ```
    #[inline]
    pub const fn finish(&self) -> D {
        self.finish
    }

    /// Returns the inclusive day count of the period.
    ///
    /// Both endpoints count, so the duration is always at least 1, and it is
    /// exactly 1 if and only if `start == finish`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use almanac_core::date::day::EpochDay;
    /// # use almanac_core::period::period::Period;
    ///
    /// assert_eq!(Period::new(EpochDay::new(10i64), EpochDay::new(20)).duration(), 11);
    /// assert_eq!(Period::new(EpochDay::new(7i64), EpochDay::new(7)).duration(), 1);
    /// ```
    #[inline]
    pub fn duration(&self) -> i64 {
        self.finish.day_number() - self.start.day_number() + 1
    }

    /// Returns `true` if `day` lies within the period, endpoints included.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use almanac_core::date::day::EpochDay;
    /// # use almanac_core::period::period::Period;
    ///
    /// let period = Period::new(EpochDay::new(10i64), EpochDay::new(20));
    /// assert!(period.contains_day(EpochDay::new(10)));
    /// assert!(period.contains_day(EpochDay::new(15)));
    /// assert!(period.contains_day(EpochDay::new(20)));
    /// assert!(!period.contains_day(EpochDay::new(21)));
    /// ```
    #[inline]
    pub fn contains_day(&self, day: D) -> bool {
        self.start <= day && day <= self.finish
    }

    /// Returns `true` if `other` lies entirely within this period.
    ///
    /// Every period contains itself. An absent operand has no relation to
    /// this period and yields `false`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use almanac_core::date::day::EpochDay;
    /// # use almanac_core::period::period::Period;
    ///
    /// let outer = Period::new(EpochDay::new(1i64), EpochDay::new(10));
    /// let inner = Period::new(EpochDay::new(3i64), EpochDay::new(6));
    ///
    /// assert!(outer.contains_period(Some(&inner)));
    /// assert!(outer.contains_period(Some(&outer)));
    /// assert!(!inner.contains_period(Some(&outer)));
    /// assert!(!outer.contains_period(None));
    /// ```
    #[inline]
    pub fn contains_period(&self, other: Option<&Self>) -> bool {
        other.is_some_and(|o| self.start <= o.start && o.finish <= self.finish)
    }

    /// Returns `true` if this period and `other` share at least one day.
    ///
    /// Periods are closed intervals, so touching endpoints count as overlap.
    /// An absent operand yields `false`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use almanac_core::date::day::EpochDay;
    /// # use almanac_core::period::period::Period;
    ///
    /// let a = Period::new(EpochDay::new(1i64), EpochDay::new(5));
    /// let b = Period::new(EpochDay::new(5i64), EpochDay::new(9));
    /// let c = Period::new(EpochDay::new(10i64), EpochDay::new(12));
    ///
    /// assert!(a.intersects(Some(&b))); // share day 5
    /// assert!(!a.intersects(Some(&c)));
    /// assert!(!a.intersects(None));
    /// ```
    #[inline]
    pub fn intersects(&self, other: Option<&Self>) -> bool {
        other.is_some_and(|o| self.start <= o.finish && self.finish >= o.start)
    }

    /// Overlap test against a raw day pair.
    ///
    /// The pair is normalized exactly like [`Period::new`] before testing,
    /// so the endpoints may arrive in either order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use almanac_core::date::day::EpochDay;
    /// # use almanac_core::period::period::Period;
    ///
    /// let period = Period::new(EpochDay::new(10i64), EpochDay::new(20));
    /// assert!(period.intersects_days(EpochDay::new(25), EpochDay::new(15)));
    /// assert!(!period.intersects_days(EpochDay::new(21), EpochDay::new(30)));
    /// ```
    #[inline]
    pub fn intersects_days(&self, start: D, finish: D) -> bool {
        let probe = Self::new(start, finish);
        self.intersects(Some(&probe))
    }

    /// Materializes the days common to both periods, ascending.
    ///
    /// Returns an empty vector for an absent operand or when the periods do
    /// not overlap. This walks and allocates the full overlap; callers that
    /// only need the count should use [`Period::intersect_count`], which is
    /// O(1).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use almanac_core::date::day::EpochDay;
    /// # use almanac_core::period::period::Period;
    ///
    /// let a = Period::new(EpochDay::new(10i64), EpochDay::new(20));
    /// let b = Period::new(EpochDay::new(15i64), EpochDay::new(25));
    ///
    /// let common: Vec<_> = a.intersection(Some(&b)).iter().map(|d| d.get()).collect();
    /// assert_eq!(common, vec![15, 16, 17, 18, 19, 20]);
    /// assert!(a.intersection(None).is_empty());
    /// ```
    pub fn intersection(&self, other: Option<&Self>) -> Vec<D> {
        let Some(other) = other else {
            return Vec::new();
        };

        let lo = max(self.start, other.start);
        let hi = min(self.finish, other.finish);
        if lo > hi {
            return Vec::new();
        }

        PeriodDays { front: lo, back: hi, exhausted: false }.collect()
    }

    /// Returns the number of overlapping days without materializing them.
    ///
    /// Yields 0 for an absent operand or disjoint periods. For overlapping
    /// periods the count is computed in closed form: if the longer period
    /// fully contains the shorter one the answer is the shorter duration,
    /// otherwise the overlap runs from one period's start to the other's
    /// finish. The result always equals `intersection(other).len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use almanac_core::date::day::EpochDay;
    /// # use almanac_core::period::period::Period;
    ///
    /// let a = Period::new(EpochDay::new(10i64), EpochDay::new(20));
    /// let b = Period::new(EpochDay::new(15i64), EpochDay::new(25));
    /// assert_eq!(a.intersect_count(Some(&b)), 6);
    ///
    /// let outer = Period::new(EpochDay::new(1i64), EpochDay::new(10));
    /// let inner = Period::new(EpochDay::new(3i64), EpochDay::new(6));
    /// assert_eq!(outer.intersect_count(Some(&inner)), 4);
    ///
    /// assert_eq!(a.intersect_count(None), 0);
    /// ```
    pub fn intersect_count(&self, other: Option<&Self>) -> i64 {
        let Some(other) = other else {
            return 0;
        };
        if !self.intersects(Some(other)) {
            return 0;
        }

        // On equal durations the second operand plays the "shortest" role.
        let (shortest, longest) = if self.duration() < other.duration() {
            (self, other)
        } else {
            (other, self)
        };

        if longest.contains_period(Some(shortest)) {
            return shortest.duration();
        }

        if longest.contains_day(shortest.start) {
            longest.finish.day_number() - shortest.start.day_number() + 1
        } else {
            shortest.finish.day_number() - longest.start.day_number() + 1
        }
    }

    /// Three-way comparison by the derived field that `field` selects.
    ///
    /// The result is usable by any generic sorting utility.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use std::cmp::Ordering;
    /// # use almanac_core::date::day::EpochDay;
    /// # use almanac_core::period::period::{Period, PeriodField};
    ///
    /// let long = Period::new(EpochDay::new(1i64), EpochDay::new(9));
    /// let short = Period::new(EpochDay::new(4i64), EpochDay::new(5));
    ///
    /// assert_eq!(long.compare_by(&short, PeriodField::Start), Ordering::Less);
    /// assert_eq!(long.compare_by(&short, PeriodField::Finish), Ordering::Greater);
    /// assert_eq!(long.compare_by(&short, PeriodField::Duration), Ordering::Greater);
    /// ```
    pub fn compare_by(&self, other: &Self, field: PeriodField) -> Ordering {
        match field {
            PeriodField::Start => self.start.cmp(&other.start),
            PeriodField::Finish => self.finish.cmp(&other.finish),
            PeriodField::Duration => self.duration().cmp(&other.duration()),
        }
    }

    /// Creates a fresh iterator over every day of the period, ascending.
    ///
    /// Each call restarts at `start`; the period holds no iteration state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use almanac_core::date::day::EpochDay;
    /// # use almanac_core::period::period::Period;
    ///
    /// let period = Period::new(EpochDay::new(1i64), EpochDay::new(3));
    ///
    /// let first: Vec<_> = period.days().collect();
    /// let second: Vec<_> = period.days().collect();
    /// assert_eq!(first, second);
    /// assert_eq!(period.days().len(), 3);
    /// ```
    #[inline]
    pub fn days(&self) -> PeriodDays<D> {
        PeriodDays {
            front: self.start,
            back: self.finish,
            exhausted: false,
        }
    }
}

impl<D> Ord for Period<D>
where
    D: CalendarDay,
{
    /// Compares by `start` alone; see the type-level ordering note.
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.start.cmp(&other.start)
    }
}

impl<D> PartialOrd for Period<D>
where
    D: CalendarDay,
{
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<D> PartialEq<(Period<D>, PeriodField)> for Period<D>
where
    D: CalendarDay,
{
    /// Keyed equality is derived from the comparator sign, not from
    /// structural equality: two distinct periods of equal duration are
    /// equal under `PeriodField::Duration`.
    #[inline]
    fn eq(&self, rhs: &(Period<D>, PeriodField)) -> bool {
        self.compare_by(&rhs.0, rhs.1) == Ordering::Equal
    }
}

impl<D> PartialOrd<(Period<D>, PeriodField)> for Period<D>
where
    D: CalendarDay,
{
    #[inline]
    fn partial_cmp(&self, rhs: &(Period<D>, PeriodField)) -> Option<Ordering> {
        Some(self.compare_by(&rhs.0, rhs.1))
    }
}

impl<D> std::fmt::Debug for Period<D>
where
    D: CalendarDay + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Period")
            .field("start", &self.start)
            .field("finish", &self.finish)
            .finish()
    }
}

impl<D> std::fmt::Display for Period<D>
where
    D: CalendarDay + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}..{}]", self.start, self.finish)
    }
}

impl<D> IntoIterator for Period<D>
where
    D: CalendarDay,
{
    type Item = D;
    type IntoIter = PeriodDays<D>;

    fn into_iter(self) -> Self::IntoIter {
        self.days()
    }
}

impl<D> IntoIterator for &Period<D>
where
    D: CalendarDay,
{
    type Item = D;
    type IntoIter = PeriodDays<D>;

    fn into_iter(self) -> Self::IntoIter {
        self.days()
    }
}

impl<D> From<RangeInclusive<D>> for Period<D>
where
    D: CalendarDay,
{
    /// Converts a closed range, normalizing like [`Period::new`].
    #[inline]
    fn from(range: RangeInclusive<D>) -> Self {
        let (start, finish) = range.into_inner();
        Self::new(start, finish)
    }
}

impl<D> From<Period<D>> for RangeInclusive<D>
where
    D: CalendarDay,
{
    #[inline]
    fn from(period: Period<D>) -> Self {
        period.start..=period.finish
    }
}

impl<D> std::ops::RangeBounds<D> for Period<D>
where
    D: CalendarDay,
{
    fn start_bound(&self) -> std::ops::Bound<&D> {
        std::ops::Bound::Included(&self.start)
    }

    fn end_bound(&self) -> std::ops::Bound<&D> {
        std::ops::Bound::Included(&self.finish)
    }
}

impl<D> Serialize for Period<D>
where
    D: CalendarDay + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Period", 2)?;
        state.serialize_field("start", &self.start)?;
        state.serialize_field("finish", &self.finish)?;
        state.end()
    }
}

impl<'de, D> Deserialize<'de> for Period<D>
where
    D: CalendarDay + Deserialize<'de>,
{
    /// Deserializes a `{start, finish}` pair, re-normalizing through
    /// [`Period::new`] so the `start <= finish` invariant survives any
    /// input.
    fn deserialize<De>(deserializer: De) -> Result<Self, De::Error>
    where
        De: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Repr<D> {
            start: D,
            finish: D,
        }

        let Repr { start, finish } = Repr::deserialize(deserializer)?;
        Ok(Period::new(start, finish))
    }
}
