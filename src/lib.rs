//! The `datefmt_rs` crate converts dates to and from text using simple
//! token patterns, and provides the calendar arithmetic that is usually
//! built on top of such conversions.
//!
//! ```rust
//! use datefmt_rs::{date_to_string, get_what_month, string_to_date, MonthAnchor};
//!
//! let date = string_to_date("2024-01-31 08:09:10", Some("yyyy-MM-dd HH:mm:ss")).unwrap();
//! assert_eq!(date_to_string(date, Some("yyyy/MM/dd")).unwrap(), "2024/01/31");
//!
//! // Shifting by a month keeps the day of month, clamped to the target month.
//! let february = get_what_month(date, None, 1).unwrap();
//! assert_eq!(february.to_string(), "2024-02-29 08:09:10");
//!
//! let first = get_what_month(date, Some(MonthAnchor::First), -1).unwrap();
//! assert_eq!(first.format(Some("yyyy-MM-dd")), "2023-12-01");
//! ```
//!
//! ## Patterns
//!
//! A pattern is free form text in which the following case sensitive
//! tokens are recognized; every other character is a literal.
//!
//! | Token | Field |
//! |-------|-------|
//! | `yyyy`, `yyy`, `yy` | year |
//! | `MM`, `M` | month |
//! | `dd`, `d` | day of month |
//! | `HH`, `H` | hour (24 hour clock) |
//! | `mm`, `m` | minute |
//! | `ss`, `s` | second |
//! | `SSS`, `SS`, `S` | millisecond |
//! | `q` | quarter label (formatting only) |
//! | `E` | weekday label (formatting only) |
//!
//! ## Dates
//!
//! A [`DateTime`] is a wall clock date and time with millisecond
//! precision. It carries no time zone, so a day is always exactly
//! 86,400,000 milliseconds long.
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    clippy::module_name_repetitions,
    clippy::redundant_pub_crate,
    clippy::missing_errors_doc,
    clippy::option_if_let_else,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap
)]

extern crate alloc;
extern crate core;

#[cfg(feature = "std")]
extern crate std;

pub mod components;
pub mod error;
pub mod host;
pub mod iso;
pub mod options;
pub mod parsers;

#[cfg(feature = "sys")]
pub mod sys;

mod epoch_milliseconds;
mod functions;

#[doc(inline)]
pub use error::{DateError, ErrorKind};

/// The `datefmt_rs` result type
pub type DateResult<T> = Result<T, DateError>;

pub mod time {
    pub use crate::epoch_milliseconds::EpochMilliseconds;
}

pub use crate::components::{DateDiff, DateLike, DateTime, Now};
pub use crate::functions::{
    date_to_string, get_date_diff_with_clock, get_days_of_month, get_what_day, get_what_month,
    get_what_week, string_to_date,
};
pub use crate::options::{DiffRule, MonthAnchor, NameTable};

#[cfg(feature = "sys")]
pub use crate::functions::{get_date_diff, now};

/// A library specific trait for unwrapping assertions.
pub(crate) trait DateUnwrap {
    type Output;

    /// `datefmt_rs` based assertion for unwrapping. This will panic in
    /// debug builds, but returns an error during runtime.
    fn date_unwrap(self) -> DateResult<Self::Output>;
}

impl<T> DateUnwrap for Option<T> {
    type Output = T;

    fn date_unwrap(self) -> DateResult<Self::Output> {
        debug_assert!(self.is_some());
        self.ok_or(DateError::assert())
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! date_assert {
    ($condition:expr $(,)*) => {
        if !$condition {
            return Err($crate::DateError::assert());
        }
    };
    ($condition:expr, $($args:tt)+) => {
        if !$condition {
            #[cfg(feature = "log")]
            log::error!($($args)+);
            return Err($crate::DateError::assert());
        }
    };
}

// Relevant numeric constants
/// Milliseconds per day constant: 8.64e+7
pub const MS_PER_DAY: u32 = 24 * 60 * 60 * 1000;
/// Milliseconds per week constant: 6.048e+8
pub const MS_PER_WEEK: u32 = 7 * MS_PER_DAY;
/// Max instant millisecond constant
#[doc(hidden)]
pub(crate) const MS_MAX_INSTANT: i64 = MS_PER_DAY as i64 * 100_000_000;
/// Min instant millisecond constant
#[doc(hidden)]
pub(crate) const MS_MIN_INSTANT: i64 = -MS_MAX_INSTANT;
