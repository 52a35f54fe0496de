//! # Date Equations
//!
//! Small, allocation free Gregorian calendar calculations used by
//! `datefmt_rs`. Conversions between epoch days and calendar dates are
//! based on the work of Cassio Neri and Lorenz Schneider on Euclidean
//! affine functions for calendar algorithms.
//!
//! ``` rust
//! use date_equations::gregorian;
//!
//! let date = gregorian::ymd_from_epoch_days(0);
//! assert_eq!(date, (1970, 1, 1));
//!
//! let days = gregorian::epoch_days_from_ymd(2024, 2, 29);
//! assert_eq!(gregorian::ymd_from_epoch_days(days as i32), (2024, 2, 29));
//! ```

#![no_std]

pub mod gregorian;
