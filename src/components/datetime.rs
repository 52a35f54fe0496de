//! This module implements `DateTime` and the calendar arithmetic built on it.

use alloc::string::String;
use core::str::FromStr;

use writeable::Writeable;

use crate::{
    components::DateDiff,
    epoch_milliseconds::EpochMilliseconds,
    error::ErrorMessage,
    iso::{IsoDate, IsoDateTime, IsoTime},
    options::{DiffRule, MonthAnchor, NameTable, DEFAULT_FORMAT_PATTERN, DEFAULT_PARSE_PATTERN},
    parsers::{DateParser, FormatPattern, FormattableDateTime},
    DateError, DateResult, MS_PER_DAY, MS_PER_WEEK,
};


/// A wall clock date and time with millisecond precision.
///
/// `DateTime` has no time zone. Its epoch milliseconds are computed as if
/// the wall clock were UTC, so adding a day always adds exactly
/// 86,400,000 milliseconds.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTime {
    epoch: EpochMilliseconds,
    pub(crate) iso: IsoDateTime,
}

// ==== Private DateTime API ====

impl DateTime {
    /// Creates a `DateTime` from an already validated instant.
    #[inline]
    #[must_use]
    pub(crate) fn from_epoch(epoch: EpochMilliseconds) -> Self {
        Self {
            epoch,
            iso: IsoDateTime::from_epoch_milliseconds(epoch),
        }
    }

    /// Rebuilds this date at a new position in the calendar, keeping the
    /// time of day.
    fn with_date_fields(&self, year: i64, month_index: i64, day: i64) -> DateResult<Self> {
        let time = self.iso.time;
        IsoDateTime::balance(
            year,
            month_index,
            day,
            time.hour.into(),
            time.minute.into(),
            time.second.into(),
            time.millisecond.into(),
        )
        .map(Self::from_epoch)
    }

    fn add_milliseconds(&self, millis: i128) -> DateResult<Self> {
        self.epoch.checked_add(millis).map(Self::from_epoch)
    }
}

// ==== Public DateTime API ====

impl DateTime {
    /// Creates a new `DateTime`, rejecting any out of range field.
    ///
    /// `month` is 1-based.
    pub fn try_new(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        millisecond: u16,
    ) -> DateResult<Self> {
        let iso = IsoDateTime::new_unchecked(
            IsoDate::try_new(year, month, day)?,
            IsoTime::try_new(hour, minute, second, millisecond)?,
        );
        Ok(Self {
            epoch: iso.as_epoch_milliseconds()?,
            iso,
        })
    }

    /// Creates a new `DateTime` from possibly out of range fields, carrying
    /// any overflow into the next larger field.
    ///
    /// `month_index` is 0-based, and a `day` of 0 is the last day of the
    /// previous month.
    #[allow(clippy::too_many_arguments)]
    pub fn from_fields(
        year: i64,
        month_index: i64,
        day: i64,
        hour: i64,
        minute: i64,
        second: i64,
        millisecond: i64,
    ) -> DateResult<Self> {
        IsoDateTime::balance(year, month_index, day, hour, minute, second, millisecond)
            .map(Self::from_epoch)
    }

    /// Creates a new `DateTime` from milliseconds since the epoch.
    pub fn from_epoch_milliseconds(millis: i64) -> DateResult<Self> {
        EpochMilliseconds::try_new(millis).map(Self::from_epoch)
    }

    /// Parses `source` with `pattern`, or with `yyyy-MM-dd HH:mm:ss.SSS`
    /// when no pattern is given.
    pub fn parse(source: &str, pattern: Option<&str>) -> DateResult<Self> {
        DateParser::new(pattern.unwrap_or(DEFAULT_PARSE_PATTERN))
            .parse(source)
            .map(Self::from_epoch)
    }

    /// Returns the epoch milliseconds of this date.
    #[inline]
    #[must_use]
    pub fn epoch_milliseconds(&self) -> i64 {
        self.epoch.as_i64()
    }

    /// Returns the calendar fields of this date.
    #[inline]
    #[must_use]
    pub fn iso(&self) -> IsoDateTime {
        self.iso
    }

    #[inline]
    #[must_use]
    pub fn year(&self) -> i32 {
        self.iso.date.year
    }

    /// Returns the month, 1 through 12.
    #[inline]
    #[must_use]
    pub fn month(&self) -> u8 {
        self.iso.date.month
    }

    /// Returns the month index, 0 through 11.
    #[inline]
    #[must_use]
    pub fn month_index(&self) -> u8 {
        self.iso.date.month - 1
    }

    #[inline]
    #[must_use]
    pub fn day(&self) -> u8 {
        self.iso.date.day
    }

    #[inline]
    #[must_use]
    pub fn hour(&self) -> u8 {
        self.iso.time.hour
    }

    #[inline]
    #[must_use]
    pub fn minute(&self) -> u8 {
        self.iso.time.minute
    }

    #[inline]
    #[must_use]
    pub fn second(&self) -> u8 {
        self.iso.time.second
    }

    #[inline]
    #[must_use]
    pub fn millisecond(&self) -> u16 {
        self.iso.time.millisecond
    }

    /// Returns the day of the week, 0 being Sunday and 6 Saturday.
    #[inline]
    #[must_use]
    pub fn weekday(&self) -> u8 {
        self.iso.date.weekday()
    }

    /// Returns the quarter of the year, 1 through 4.
    #[inline]
    #[must_use]
    pub fn quarter(&self) -> u8 {
        self.iso.date.quarter()
    }

    /// Returns the number of days in this date's month.
    #[inline]
    #[must_use]
    pub fn days_in_month(&self) -> u8 {
        self.iso.date.days_in_month()
    }

    #[inline]
    #[must_use]
    pub fn in_leap_year(&self) -> bool {
        self.iso.date.in_leap_year()
    }
}

// ==== Formatting ====

impl DateTime {
    /// Binds this date to a pattern and a name table for writing.
    pub fn formattable<'a>(
        &self,
        pattern: &'a str,
        names: NameTable<'a>,
    ) -> FormattableDateTime<'a> {
        FormattableDateTime::new(self.iso, FormatPattern::parse(pattern), names)
    }

    /// Formats this date with `pattern`, or with `yyyy-MM-dd HH:mm:ss` when
    /// no pattern is given, using the default name table.
    pub fn format(&self, pattern: Option<&str>) -> String {
        self.format_with(pattern.unwrap_or(DEFAULT_FORMAT_PATTERN), NameTable::default())
    }

    /// Formats this date with `pattern` and the provided name table.
    pub fn format_with(&self, pattern: &str, names: NameTable<'_>) -> String {
        self.formattable(pattern, names)
            .write_to_string()
            .into_owned()
    }
}

// ==== Calendar arithmetic ====

impl DateTime {
    /// Returns this date moved by `months` months.
    ///
    /// - `Some(MonthAnchor::First)` lands on the first day of the month.
    /// - `Some(MonthAnchor::Last)` lands on the last day of the month.
    /// - `None` keeps the day of month, clamped to the last day of the
    ///   target month.
    ///
    /// The time of day is kept in every case.
    pub fn shift_months(&self, anchor: Option<MonthAnchor>, months: i64) -> DateResult<Self> {
        match anchor {
            Some(MonthAnchor::First) => self.first_of_month(months),
            Some(MonthAnchor::Last) => self.last_of_month(months),
            None => self.same_day_of_month(months),
        }
    }

    /// Returns the first day of the month `months` months away.
    pub fn first_of_month(&self, months: i64) -> DateResult<Self> {
        let month_index = i64::from(self.month_index())
            .checked_add(months)
            .ok_or_else(out_of_range)?;
        self.with_date_fields(i64::from(self.year()), month_index, 1)
    }

    /// Returns the last day of the month `months` months away, which is the
    /// day before the first of the following month.
    pub fn last_of_month(&self, months: i64) -> DateResult<Self> {
        let next = months.checked_add(1).ok_or_else(out_of_range)?;
        self.first_of_month(next)?
            .add_milliseconds(-i128::from(MS_PER_DAY))
    }

    /// Returns the same day of the month `months` months away, clamped to
    /// the last day of that month.
    pub fn same_day_of_month(&self, months: i64) -> DateResult<Self> {
        let first = self.first_of_month(months)?;
        let day = self.day().min(first.days_in_month());
        first.with_date_fields(
            i64::from(first.year()),
            i64::from(first.month_index()),
            i64::from(day),
        )
    }

    /// Returns the given day of the week, `weeks` weeks away.
    ///
    /// Weeks run Monday through Sunday: `day_of_week` is 1 for Monday up
    /// to 6 for Saturday, and both 0 and 7 select the Sunday that ends the
    /// week. Any other value, or `None`, selects Sunday.
    pub fn weekday_of_week(&self, day_of_week: Option<u8>, weeks: i64) -> DateResult<Self> {
        let target = match day_of_week {
            Some(day @ 0..=7) => day,
            Some(_other) => {
                #[cfg(feature = "log")]
                log::debug!("day of week {_other} is out of range, using Sunday");
                0
            }
            None => 0,
        };
        let target = if target == 0 { 7 } else { target };
        let current = match self.weekday() {
            0 => 7,
            day => day,
        };
        let days = i128::from(target) - i128::from(current);
        self.add_milliseconds(
            days * i128::from(MS_PER_DAY) + i128::from(weeks) * i128::from(MS_PER_WEEK),
        )
    }

    /// Returns this date moved by `days` days.
    pub fn add_days(&self, days: i64) -> DateResult<Self> {
        self.add_milliseconds(i128::from(days) * i128::from(MS_PER_DAY))
    }

    /// Returns the number of days in the month `months` months away.
    pub fn days_in_month_offset(&self, months: i64) -> DateResult<u8> {
        let first = self.first_of_month(months)?;
        let last = self.last_of_month(months)?;
        let days = (last.epoch_milliseconds() - first.epoch_milliseconds())
            .div_euclid(i64::from(MS_PER_DAY))
            + 1;
        Ok(days as u8)
    }

    /// Breaks the time from this date until `other` into units.
    ///
    /// An empty `rules` slice uses the default units. The result is empty
    /// when `other` is not after this date.
    pub fn until(&self, other: &Self, rules: &[DiffRule]) -> DateResult<DateDiff> {
        DateDiff::between(self.epoch, other.epoch, rules)
    }
}

fn out_of_range() -> DateError {
    DateError::range().with_enum(ErrorMessage::InstantOutOfRange)
}

// ==== Trait impls ====

impl From<EpochMilliseconds> for DateTime {
    fn from(value: EpochMilliseconds) -> Self {
        Self::from_epoch(value)
    }
}

impl FromStr for DateTime {
    type Err = DateError;

    /// Parses with the `yyyy-MM-dd HH:mm:ss.SSS` pattern.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, None)
    }
}

impl core::fmt::Display for DateTime {
    /// Writes the `yyyy-MM-dd HH:mm:ss` form.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.formattable(DEFAULT_FORMAT_PATTERN, NameTable::default())
            .write_to(f)
    }
}

// ==== DateLike ====

/// Any value that can be read as a `DateTime`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateLike<'a> {
    /// An existing date, used as is.
    Date(DateTime),
    /// Milliseconds since the epoch.
    Timestamp(i64),
    /// Text, read as a timestamp when numeric and against a pattern
    /// otherwise.
    Text(&'a str),
}

impl DateLike<'_> {
    /// Resolves this value into a `DateTime`. `pattern` only applies to
    /// non numeric text.
    pub fn to_date_time(self, pattern: Option<&str>) -> DateResult<DateTime> {
        match self {
            Self::Date(date) => Ok(date),
            Self::Timestamp(millis) => DateTime::from_epoch_milliseconds(millis),
            Self::Text(source) => DateTime::parse(source, pattern),
        }
    }
}

impl From<DateTime> for DateLike<'_> {
    fn from(value: DateTime) -> Self {
        Self::Date(value)
    }
}

impl From<&DateTime> for DateLike<'_> {
    fn from(value: &DateTime) -> Self {
        Self::Date(*value)
    }
}

impl From<i64> for DateLike<'_> {
    fn from(value: i64) -> Self {
        Self::Timestamp(value)
    }
}

impl From<EpochMilliseconds> for DateLike<'_> {
    fn from(value: EpochMilliseconds) -> Self {
        Self::Date(DateTime::from_epoch(value))
    }
}

impl<'a> From<&'a str> for DateLike<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<&'a String> for DateLike<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(value.as_str())
    }
}
