//! Gregorian Date Calculations
//!
//! ## Extending the Neri-Schneider shift window
//!
//! The paper computes with a Rata Die shift of 82, which only covers a few
//! tens of thousands of years. The classic date-object range is
//! ±100,000,000 days around the Unix epoch, so the equations below shift
//! by 680 Gregorian cycles instead.
//!
//! | Significant Date | Computational Rata Die | Rata Die Shift
//! | -----------------|------------------------|-----------------|
//! | April 20, -271_821 | -99,280,531 | 65,428 |
//! | January 1, 1970 | 719,468 | 100,065,428 |
//! | September 13, 275,760 | 100_719_468 | 200,065,428 |
//!
pub mod neri_schneider;

pub use neri_schneider::{
    days_in_month, epoch_days_from_gregorian_date as epoch_days_from_ymd,
    gregorian_ymd_from_epoch_days as ymd_from_epoch_days, is_leap_year, weekday_from_epoch_days,
};
