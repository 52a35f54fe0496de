//! Free function forms of the `DateTime` operations.
//!
//! Every function first reads its date arguments through
//! [`DateLike::to_date_time`] with the default parse pattern, so dates,
//! timestamps and text can be mixed freely.

use alloc::string::String;

use crate::{
    components::{DateDiff, DateLike, DateTime, Now},
    host::HostClock,
    options::{DiffRule, MonthAnchor},
    DateResult,
};

/// Reads `value` as a date.
///
/// Dates are returned unchanged, timestamps and numeric text are read as
/// epoch milliseconds, and any other text is read with `format`, which
/// defaults to `yyyy-MM-dd HH:mm:ss.SSS`.
///
/// ```rust
/// use datefmt_rs::string_to_date;
///
/// let date = string_to_date("05/03/2024", Some("dd/MM/yyyy")).unwrap();
/// assert_eq!((date.year(), date.month(), date.day()), (2024, 3, 5));
///
/// assert!(string_to_date("not a date", None).is_err());
/// ```
pub fn string_to_date<'a>(
    value: impl Into<DateLike<'a>>,
    format: Option<&str>,
) -> DateResult<DateTime> {
    value.into().to_date_time(format)
}

/// Formats `value` with `format`, which defaults to `yyyy-MM-dd HH:mm:ss`.
///
/// Text is read with the default parse pattern before formatting, and an
/// error reading it is returned unchanged.
pub fn date_to_string<'a>(
    value: impl Into<DateLike<'a>>,
    format: Option<&str>,
) -> DateResult<String> {
    let date = value.into().to_date_time(None)?;
    Ok(date.format(format))
}

/// Returns the date `month_offset` months away from `date`.
///
/// See [`DateTime::shift_months`] for the meaning of `mode`.
pub fn get_what_month<'a>(
    date: impl Into<DateLike<'a>>,
    mode: Option<MonthAnchor>,
    month_offset: i64,
) -> DateResult<DateTime> {
    date.into()
        .to_date_time(None)?
        .shift_months(mode, month_offset)
}

/// Returns a day of the week `week_offset` weeks away from `date`.
///
/// See [`DateTime::weekday_of_week`] for the meaning of `day_of_week`.
pub fn get_what_week<'a>(
    date: impl Into<DateLike<'a>>,
    day_of_week: Option<u8>,
    week_offset: i64,
) -> DateResult<DateTime> {
    date.into()
        .to_date_time(None)?
        .weekday_of_week(day_of_week, week_offset)
}

/// Returns the date `day_offset` days away from `date`.
pub fn get_what_day<'a>(date: impl Into<DateLike<'a>>, day_offset: i64) -> DateResult<DateTime> {
    date.into().to_date_time(None)?.add_days(day_offset)
}

/// Returns the number of days in the month `month_offset` months away
/// from `date`.
pub fn get_days_of_month<'a>(date: impl Into<DateLike<'a>>, month_offset: i64) -> DateResult<u8> {
    date.into()
        .to_date_time(None)?
        .days_in_month_offset(month_offset)
}

/// Breaks the time from `start` until `end` into units, reading the
/// current time from `clock` when `end` is `None`.
///
/// An empty `rules` slice uses years, months, days, hours, minutes,
/// seconds and leftover milliseconds (`yyyy`, `MM`, `dd`, `HH`, `mm`,
/// `ss`, `S`), with 365 day years and 30 day months.
pub fn get_date_diff_with_clock<'a>(
    start: impl Into<DateLike<'a>>,
    end: Option<DateLike<'a>>,
    rules: &[DiffRule],
    clock: impl HostClock,
) -> DateResult<DateDiff> {
    let start = start.into().to_date_time(None)?;
    let end = match end {
        Some(end) => end.to_date_time(None)?,
        None => Now::new(clock).date_time()?,
    };
    start.until(&end, rules)
}

/// Breaks the time from `start` until `end` into units, reading the
/// system clock when `end` is `None`.
///
/// ```rust
/// use datefmt_rs::get_date_diff;
///
/// let end = Some("2024-03-06 09:30:00".into());
/// let diff = get_date_diff("2024-03-05 08:00:00", end, &[]).unwrap();
/// assert_eq!(diff.get("dd"), Some(1));
/// assert_eq!(diff.get("HH"), Some(1));
/// assert_eq!(diff.get("mm"), Some(30));
/// assert_eq!(diff.len(), 3);
/// ```
#[cfg(feature = "sys")]
pub fn get_date_diff<'a>(
    start: impl Into<DateLike<'a>>,
    end: Option<DateLike<'a>>,
    rules: &[DiffRule],
) -> DateResult<DateDiff> {
    get_date_diff_with_clock(start, end, rules, crate::sys::SystemClock)
}

/// Returns the current time in milliseconds since the epoch.
#[cfg(feature = "sys")]
pub fn now() -> DateResult<crate::time::EpochMilliseconds> {
    Now::system().epoch_milliseconds()
}
