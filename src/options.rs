//! Options accepted by the parsing, formatting and arithmetic operations.
//!
//! Everything that would otherwise be ambient state (label tables, month
//! anchoring, diff units) is passed explicitly through the types in this
//! module.

use core::{fmt, str::FromStr};

use tinystr::{tinystr, TinyAsciiStr};

use crate::{error::ErrorMessage, DateError, DateResult, MS_PER_DAY};

/// The pattern used when parsing text without an explicit pattern.
pub const DEFAULT_PARSE_PATTERN: &str = "yyyy-MM-dd HH:mm:ss.SSS";

/// The pattern used when formatting without an explicit pattern.
pub const DEFAULT_FORMAT_PATTERN: &str = "yyyy-MM-dd HH:mm:ss";

// ==== MonthAnchor ====

/// Where a month shift lands within the target month.
///
/// When no anchor is given the day of month is preserved, clamped to the
/// length of the target month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthAnchor {
    /// The first day of the month.
    First,
    /// The last day of the month.
    Last,
}

/// A parsing error for `MonthAnchor`
#[derive(Debug, Clone, Copy)]
pub struct ParseMonthAnchorError;

impl fmt::Display for ParseMonthAnchorError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("provided string was not a valid month anchor")
    }
}

impl FromStr for MonthAnchor {
    type Err = ParseMonthAnchorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first" => Ok(Self::First),
            "last" => Ok(Self::Last),
            _ => Err(ParseMonthAnchorError),
        }
    }
}

impl fmt::Display for MonthAnchor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::First => "first",
            Self::Last => "last",
        }
        .fmt(f)
    }
}

// ==== NameTable ====

/// The labels substituted for the weekday (`E`) and quarter (`q`) tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameTable<'a> {
    /// Weekday labels, index 0 is Sunday.
    pub weekdays: [&'a str; 7],
    /// Quarter labels, index 0 is the first quarter.
    pub quarters: [&'a str; 4],
}

impl NameTable<'static> {
    /// Chinese numeral labels, the default table.
    pub const CHINESE: Self = Self {
        weekdays: ["日", "一", "二", "三", "四", "五", "六"],
        quarters: ["一", "二", "三", "四"],
    };

    /// Short English labels.
    pub const ENGLISH: Self = Self {
        weekdays: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
        quarters: ["Q1", "Q2", "Q3", "Q4"],
    };
}

impl Default for NameTable<'static> {
    fn default() -> Self {
        Self::CHINESE
    }
}

impl<'a> NameTable<'a> {
    /// Returns the label for a weekday, 0 being Sunday.
    #[inline]
    pub fn weekday(&self, weekday: u8) -> Option<&'a str> {
        self.weekdays.get(usize::from(weekday)).copied()
    }

    /// Returns the label for a 1-based quarter.
    #[inline]
    pub fn quarter(&self, quarter: u8) -> Option<&'a str> {
        self.quarters
            .get(usize::from(quarter).checked_sub(1)?)
            .copied()
    }
}

// ==== DiffRule ====

/// A unit used to break a time difference apart.
///
/// The `ratio` is the number of milliseconds in one unit. Only the last
/// rule of a list may have a ratio of zero; it collects whatever remains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffRule {
    pub label: TinyAsciiStr<16>,
    pub ratio: u64,
}

impl DiffRule {
    /// Creates a new rule with a compile time label.
    pub const fn new(label: TinyAsciiStr<16>, ratio: u64) -> Self {
        Self { label, ratio }
    }

    /// Creates a new rule, validating the label.
    pub fn try_new(label: &str, ratio: u64) -> DateResult<Self> {
        let label = TinyAsciiStr::try_from_str(label)
            .map_err(|_| DateError::r#type().with_enum(ErrorMessage::InvalidDiffLabel))?;
        Ok(Self::new(label, ratio))
    }
}

/// 365 day years.
pub const MS_PER_YEAR: u64 = 31_536_000_000;
/// 30 day months.
pub const MS_PER_MONTH: u64 = 2_592_000_000;

/// The default diff units, from years down to the leftover milliseconds.
pub const DEFAULT_DIFF_RULES: [DiffRule; 7] = [
    DiffRule::new(tinystr!(16, "yyyy"), MS_PER_YEAR),
    DiffRule::new(tinystr!(16, "MM"), MS_PER_MONTH),
    DiffRule::new(tinystr!(16, "dd"), MS_PER_DAY as u64),
    DiffRule::new(tinystr!(16, "HH"), 3_600_000),
    DiffRule::new(tinystr!(16, "mm"), 60_000),
    DiffRule::new(tinystr!(16, "ss"), 1_000),
    DiffRule::new(tinystr!(16, "S"), 0),
];
