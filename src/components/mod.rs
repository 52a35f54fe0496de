//! The date components provided by `datefmt_rs`.
//!
//! [`DateTime`] is the date value; [`DateLike`] is anything that can be
//! read as one. [`DateDiff`] is the result of breaking a span into units
//! and [`Now`] reads the current time from a host clock.

mod datetime;
mod diff;
mod now;

#[doc(inline)]
pub use datetime::{DateLike, DateTime};
#[doc(inline)]
pub use diff::DateDiff;
#[doc(inline)]
pub use now::Now;
