//! This module implements the internal calendar field records.
//!
//!   - `IsoDate` holds the year, 1-based month and day.
//!   - `IsoTime` holds the hour, minute, second and millisecond.
//!   - `IsoDateTime` holds both.
//!
//! Records are always derived from, or balanced into, an
//! [`EpochMilliseconds`] value so that every record describes a real
//! instant within the supported range.

use date_equations::gregorian;

use crate::{
    epoch_milliseconds::EpochMilliseconds, error::ErrorMessage, DateError, DateResult, MS_PER_DAY,
};

/// The largest year that can appear in a valid date.
pub const MAX_YEAR: i32 = 275_760;
/// The smallest year that can appear in a valid date.
pub const MIN_YEAR: i32 = -271_821;

pub(crate) const MS_PER_HOUR: i64 = 3_600_000;
pub(crate) const MS_PER_MINUTE: i64 = 60_000;
pub(crate) const MS_PER_SECOND: i64 = 1_000;

/// `IsoDateTime` is the record of the `IsoDate` and `IsoTime` fields.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoDateTime {
    pub date: IsoDate,
    pub time: IsoTime,
}

impl IsoDateTime {
    /// Creates a new `IsoDateTime` without any validation.
    pub(crate) const fn new_unchecked(date: IsoDate, time: IsoTime) -> Self {
        Self { date, time }
    }

    /// Decomposes epoch milliseconds into calendar fields.
    pub fn from_epoch_milliseconds(epoch: EpochMilliseconds) -> Self {
        let ms = epoch.as_i64();
        let epoch_days = ms.div_euclid(i64::from(MS_PER_DAY));
        let time_of_day = ms.rem_euclid(i64::from(MS_PER_DAY));

        // A valid `EpochMilliseconds` is at most 100_000_000 days from the epoch.
        let (year, month, day) = gregorian::ymd_from_epoch_days(epoch_days as i32);
        Self::new_unchecked(
            IsoDate::new_unchecked(year, month, day),
            IsoTime::from_millisecond_of_day(time_of_day),
        )
    }

    /// Balances a set of possibly out of range fields into an instant.
    ///
    /// This has the semantics of a date constructor: `month_index` is
    /// 0-based and every field may overflow or underflow into the next
    /// larger one. A `day` of 0 is the last day of the previous month.
    #[allow(clippy::too_many_arguments)]
    pub fn balance(
        year: i64,
        month_index: i64,
        day: i64,
        hour: i64,
        minute: i64,
        second: i64,
        millisecond: i64,
    ) -> DateResult<EpochMilliseconds> {
        let year = year
            .checked_add(month_index.div_euclid(12))
            .ok_or(DateError::range().with_enum(ErrorMessage::InstantOutOfRange))?;
        let month = month_index.rem_euclid(12) as u8 + 1;
        // Anything outside of this window can never come back into range
        // through the day and time fields without overflowing them first.
        if !(i64::from(MIN_YEAR) - 1..=i64::from(MAX_YEAR) + 1).contains(&year) {
            return Err(DateError::range().with_enum(ErrorMessage::InstantOutOfRange));
        }
        let first_of_month = gregorian::epoch_days_from_ymd(year as i32, month, 1);
        let epoch_days = i128::from(first_of_month) + i128::from(day) - 1;
        let time = i128::from(hour) * i128::from(MS_PER_HOUR)
            + i128::from(minute) * i128::from(MS_PER_MINUTE)
            + i128::from(second) * i128::from(MS_PER_SECOND)
            + i128::from(millisecond);
        EpochMilliseconds::try_from(epoch_days * i128::from(MS_PER_DAY) + time)
    }

    /// Returns the epoch milliseconds for this record.
    pub fn as_epoch_milliseconds(&self) -> DateResult<EpochMilliseconds> {
        let days = self.date.to_epoch_days();
        EpochMilliseconds::try_from(
            i128::from(days) * i128::from(MS_PER_DAY) + i128::from(self.time.millisecond_of_day()),
        )
    }
}

// ==== `IsoDate` section ====

/// `IsoDate` serves as a record for the year, month and day fields.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl Default for IsoDate {
    fn default() -> Self {
        Self::new_unchecked(1970, 1, 1)
    }
}

impl IsoDate {
    pub(crate) const fn new_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Creates a new `IsoDate`, rejecting any out of range field.
    pub fn try_new(year: i32, month: u8, day: u8) -> DateResult<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(DateError::range().with_enum(ErrorMessage::InstantOutOfRange));
        }
        if !(1..=12).contains(&month) {
            return Err(DateError::range().with_message("month is not within 1..=12."));
        }
        if day == 0 || day > gregorian::days_in_month(year, month) {
            return Err(DateError::range().with_message("day is not valid for the month."));
        }
        Ok(Self::new_unchecked(year, month, day))
    }

    /// Returns the number of days since 1970-01-01.
    pub fn to_epoch_days(&self) -> i64 {
        gregorian::epoch_days_from_ymd(self.year, self.month, self.day)
    }

    /// Returns the day of the week, 0 being Sunday.
    pub fn weekday(&self) -> u8 {
        gregorian::weekday_from_epoch_days(self.to_epoch_days())
    }

    /// Returns the quarter of the year, 1 through 4.
    pub fn quarter(&self) -> u8 {
        // floor((month_index + 3) / 3)
        (self.month - 1 + 3) / 3
    }

    pub fn days_in_month(&self) -> u8 {
        gregorian::days_in_month(self.year, self.month)
    }

    pub fn in_leap_year(&self) -> bool {
        gregorian::is_leap_year(self.year)
    }
}

// ==== `IsoTime` section ====

/// An `IsoTime` record holds the hour, minute, second and millisecond
/// fields of a wall clock time.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoTime {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub millisecond: u16,
}

impl IsoTime {
    pub(crate) const fn new_unchecked(hour: u8, minute: u8, second: u8, millisecond: u16) -> Self {
        Self {
            hour,
            minute,
            second,
            millisecond,
        }
    }

    /// Creates a new `IsoTime`, rejecting any out of range field.
    pub fn try_new(hour: u8, minute: u8, second: u8, millisecond: u16) -> DateResult<Self> {
        if hour > 23 || minute > 59 || second > 59 || millisecond > 999 {
            return Err(DateError::range().with_message("time field is out of range."));
        }
        Ok(Self::new_unchecked(hour, minute, second, millisecond))
    }

    /// Builds the time for a millisecond offset into a day, `0..MS_PER_DAY`.
    pub(crate) fn from_millisecond_of_day(ms: i64) -> Self {
        debug_assert!((0..i64::from(MS_PER_DAY)).contains(&ms));
        Self::new_unchecked(
            (ms / MS_PER_HOUR) as u8,
            (ms / MS_PER_MINUTE % 60) as u8,
            (ms / MS_PER_SECOND % 60) as u8,
            (ms % MS_PER_SECOND) as u16,
        )
    }

    /// Returns the number of milliseconds since midnight.
    pub fn millisecond_of_day(&self) -> i64 {
        i64::from(self.hour) * MS_PER_HOUR
            + i64::from(self.minute) * MS_PER_MINUTE
            + i64::from(self.second) * MS_PER_SECOND
            + i64::from(self.millisecond)
    }
}

// ==== Tests =====

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_round_trip() {
        let epoch = EpochMilliseconds::try_new(1_709_626_150_123).unwrap();
        let iso = IsoDateTime::from_epoch_milliseconds(epoch);
        assert_eq!(iso.date, IsoDate::new_unchecked(2024, 3, 5));
        assert_eq!(iso.time, IsoTime::new_unchecked(8, 9, 10, 123));
        assert_eq!(iso.as_epoch_milliseconds().unwrap(), epoch);
    }

    #[test]
    fn negative_epoch() {
        let epoch = EpochMilliseconds::try_new(-1).unwrap();
        let iso = IsoDateTime::from_epoch_milliseconds(epoch);
        assert_eq!(iso.date, IsoDate::new_unchecked(1969, 12, 31));
        assert_eq!(iso.time, IsoTime::new_unchecked(23, 59, 59, 999));
    }

    #[test]
    fn balance_rolls_fields() {
        // Day zero is the last day of the previous month.
        let ms = IsoDateTime::balance(2024, 2, 0, 0, 0, 0, 0).unwrap();
        let iso = IsoDateTime::from_epoch_milliseconds(ms);
        assert_eq!(iso.date, IsoDate::new_unchecked(2024, 2, 29));

        // Month -1 is December of the previous year.
        let ms = IsoDateTime::balance(2024, -1, 15, 0, 0, 0, 0).unwrap();
        let iso = IsoDateTime::from_epoch_milliseconds(ms);
        assert_eq!(iso.date, IsoDate::new_unchecked(2023, 12, 15));

        // Hours overflow into the next day.
        let ms = IsoDateTime::balance(2023, 11, 31, 25, 0, 0, 0).unwrap();
        let iso = IsoDateTime::from_epoch_milliseconds(ms);
        assert_eq!(iso.date, IsoDate::new_unchecked(2024, 1, 1));
        assert_eq!(iso.time.hour, 1);
    }

    #[test]
    fn balance_out_of_range() {
        assert!(IsoDateTime::balance(300_000, 0, 1, 0, 0, 0, 0).is_err());
        assert!(IsoDateTime::balance(275_760, 8, 14, 0, 0, 0, 0).is_err());
        assert!(IsoDateTime::balance(275_760, 8, 13, 0, 0, 0, 0).is_ok());
        assert!(IsoDateTime::balance(0, i64::MAX, 1, 0, 0, 0, 0).is_err());
    }

    #[test]
    fn quarters() {
        assert_eq!(IsoDate::new_unchecked(2024, 1, 1).quarter(), 1);
        assert_eq!(IsoDate::new_unchecked(2024, 3, 31).quarter(), 1);
        assert_eq!(IsoDate::new_unchecked(2024, 4, 1).quarter(), 2);
        assert_eq!(IsoDate::new_unchecked(2024, 12, 31).quarter(), 4);
    }

    #[test]
    fn strict_construction() {
        assert!(IsoDate::try_new(2023, 2, 29).is_err());
        assert!(IsoDate::try_new(2024, 2, 29).is_ok());
        assert!(IsoDate::try_new(2024, 13, 1).is_err());
        assert!(IsoTime::try_new(24, 0, 0, 0).is_err());
        assert!(IsoTime::try_new(23, 59, 59, 999).is_ok());
    }
}
