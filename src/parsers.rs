//! This module implements pattern driven date parsing and formatting.
//!
//! Parsing is positional: the location of a token in the pattern gives
//! the location of the field in the source text, and the token length
//! gives the number of characters read.

use crate::{
    epoch_milliseconds::EpochMilliseconds, error::ErrorMessage, iso::IsoDateTime,
    options::DEFAULT_PARSE_PATTERN, DateError, DateResult,
};

mod formattable;

pub use formattable::{FormatField, FormatPattern, FormattableDateTime, PatternItem};

/// The extraction rule for a single calendar field.
struct FieldRule {
    /// Token spellings, longest first.
    spellings: &'static [&'static str],
    /// Added to the value that was read.
    offset: i64,
}

/// Year, month, day, hour, minute, second and millisecond, in the order
/// they are handed to the date constructor.
const FIELD_RULES: [FieldRule; 7] = [
    FieldRule {
        spellings: &["yyyy", "yyy", "yy"],
        offset: 0,
    },
    FieldRule {
        spellings: &["MM", "M"],
        offset: -1,
    },
    FieldRule {
        spellings: &["dd", "d"],
        offset: 0,
    },
    FieldRule {
        spellings: &["HH", "H"],
        offset: 0,
    },
    FieldRule {
        spellings: &["mm", "m"],
        offset: 0,
    },
    FieldRule {
        spellings: &["ss", "s"],
        offset: 0,
    },
    FieldRule {
        spellings: &["SSS", "SS", "S"],
        offset: 0,
    },
];

/// The raw fields read from a source string, before balancing.
///
/// `month_index` is 0-based. Fields that are missing from the pattern
/// are zero, so a pattern without a day token yields day 0, which
/// balances to the last day of the previous month.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ParsedFields {
    pub year: i64,
    pub month_index: i64,
    pub day: i64,
    pub hour: i64,
    pub minute: i64,
    pub second: i64,
    pub millisecond: i64,
}

impl ParsedFields {
    /// Balances the fields into an instant.
    ///
    /// Years `0..=99` are read as `1900..=1999`, the two digit year rule of
    /// a date constructor.
    pub fn to_epoch_milliseconds(&self) -> DateResult<EpochMilliseconds> {
        let year = if (0..=99).contains(&self.year) {
            self.year + 1900
        } else {
            self.year
        };
        IsoDateTime::balance(
            year,
            self.month_index,
            self.day,
            self.hour,
            self.minute,
            self.second,
            self.millisecond,
        )
    }
}

/// A parser for a single pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateParser<'p> {
    pattern: &'p str,
}

impl Default for DateParser<'static> {
    fn default() -> Self {
        Self::new(DEFAULT_PARSE_PATTERN)
    }
}

impl<'p> DateParser<'p> {
    /// Creates a new `DateParser` for `pattern`.
    #[inline]
    pub const fn new(pattern: &'p str) -> Self {
        Self { pattern }
    }

    /// Parses text into an instant.
    ///
    /// Text that reads as a finite number is taken as epoch milliseconds
    /// and never matched against the pattern.
    pub fn parse(&self, source: &str) -> DateResult<EpochMilliseconds> {
        if source.is_empty() {
            return Err(DateError::syntax().with_enum(ErrorMessage::EmptyInput));
        }
        if let Some(timestamp) = parse_timestamp(source)? {
            #[cfg(feature = "log")]
            log::debug!("reading numeric date text {source:?} as epoch milliseconds");
            return Ok(timestamp);
        }
        self.parse_fields(source)?.to_epoch_milliseconds()
    }

    /// Reads the raw fields of `source` without balancing them.
    pub fn parse_fields(&self, source: &str) -> DateResult<ParsedFields> {
        let mut values = [0i64; 7];
        for (value, rule) in values.iter_mut().zip(FIELD_RULES.iter()) {
            let Some((position, width)) = self.locate(rule) else {
                continue;
            };
            let segment = char_segment(source, position, width);
            if segment.is_empty() {
                *value = rule.offset;
                continue;
            }
            let parsed = parse_leading_integer(segment).ok_or_else(DateError::invalid_date)?;
            *value = parsed + rule.offset;
        }

        let [year, month_index, day, hour, minute, second, millisecond] = values;
        Ok(ParsedFields {
            year,
            month_index,
            day,
            hour,
            minute,
            second,
            millisecond,
        })
    }

    /// Finds the first spelling of `rule` present in the pattern and
    /// returns its character position and width.
    fn locate(&self, rule: &FieldRule) -> Option<(usize, usize)> {
        rule.spellings.iter().find_map(|spelling| {
            let byte_index = self.pattern.find(spelling)?;
            Some((self.pattern[..byte_index].chars().count(), spelling.len()))
        })
    }
}

/// Returns up to `width` characters of `source` starting at the character
/// index `start`.
fn char_segment(source: &str, start: usize, width: usize) -> &str {
    let mut boundaries = source
        .char_indices()
        .map(|(index, _)| index)
        .chain(core::iter::once(source.len()));
    let Some(begin) = boundaries.nth(start) else {
        return "";
    };
    let end = match width.checked_sub(1) {
        Some(rest) => boundaries.nth(rest).unwrap_or(source.len()),
        None => begin,
    };
    &source[begin..end]
}

/// Reads the leading integer of a segment.
///
/// Leading whitespace and a sign are accepted, a fractional part is
/// truncated and anything after the number is ignored. Returns `None`
/// when there is no number at the start of the segment.
fn parse_leading_integer(segment: &str) -> Option<i64> {
    let trimmed = segment.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        // ".5" truncates to zero.
        let fraction = rest.strip_prefix('.')?;
        return fraction
            .bytes()
            .next()
            .filter(|b| b.is_ascii_digit())
            .map(|_| 0);
    }
    let value = rest[..digits].parse::<i64>().ok()?;
    Some(if negative { -value } else { value })
}

/// Reads text that is entirely a number as epoch milliseconds.
///
/// Returns `Ok(None)` when the text is not numeric.
fn parse_timestamp(source: &str) -> DateResult<Option<EpochMilliseconds>> {
    let trimmed = source.trim();
    if trimmed.is_empty() {
        return Err(DateError::syntax().with_enum(ErrorMessage::EmptyInput));
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_nan() => Ok(None),
        Ok(value) => EpochMilliseconds::try_from(value).map(Some),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(source: &str, pattern: &str) -> ParsedFields {
        DateParser::new(pattern).parse_fields(source).unwrap()
    }

    #[test]
    fn default_pattern_fields() {
        let parsed = fields("2024-03-05 08:09:10.123", DEFAULT_PARSE_PATTERN);
        assert_eq!(
            parsed,
            ParsedFields {
                year: 2024,
                month_index: 2,
                day: 5,
                hour: 8,
                minute: 9,
                second: 10,
                millisecond: 123,
            }
        );
    }

    #[test]
    fn missing_tokens_default_to_zero() {
        let parsed = fields("2024-03", "yyyy-MM");
        assert_eq!(parsed.year, 2024);
        assert_eq!(parsed.month_index, 2);
        assert_eq!(parsed.day, 0);
        assert_eq!(parsed.hour, 0);
        assert_eq!(parsed.millisecond, 0);
    }

    #[test]
    fn short_source_reads_empty_segments() {
        // Every segment past the end of the source is empty.
        let parsed = fields("2024-03-05", DEFAULT_PARSE_PATTERN);
        assert_eq!(parsed.day, 5);
        assert_eq!(parsed.hour, 0);
        assert_eq!(parsed.second, 0);

        // An empty month segment still receives the month offset.
        let parsed = fields("2024", "yyyy-MM-dd");
        assert_eq!(parsed.month_index, -1);
    }

    #[test]
    fn longest_spelling_wins() {
        let parsed = fields("24/3/5", "yy/M/d");
        assert_eq!(parsed.year, 24);
        assert_eq!(parsed.month_index, 2);
        assert_eq!(parsed.day, 5);

        let parsed = fields("05.03.2024", "dd.MM.yyyy");
        assert_eq!(parsed.year, 2024);
        assert_eq!(parsed.month_index, 2);
        assert_eq!(parsed.day, 5);
    }

    #[test]
    fn non_ascii_separators() {
        let parsed = fields("2024年03月05日 08时", "yyyy年MM月dd日 HH时");
        assert_eq!(parsed.year, 2024);
        assert_eq!(parsed.month_index, 2);
        assert_eq!(parsed.day, 5);
        assert_eq!(parsed.hour, 8);
    }

    #[test]
    fn leading_integer() {
        assert_eq!(parse_leading_integer("12"), Some(12));
        assert_eq!(parse_leading_integer(" 7"), Some(7));
        assert_eq!(parse_leading_integer("3:"), Some(3));
        assert_eq!(parse_leading_integer("-1"), Some(-1));
        assert_eq!(parse_leading_integer("1.9"), Some(1));
        assert_eq!(parse_leading_integer(".5"), Some(0));
        assert_eq!(parse_leading_integer("ab"), None);
        assert_eq!(parse_leading_integer("  "), None);
        assert_eq!(parse_leading_integer("-"), None);
    }

    #[test]
    fn segments_count_characters() {
        assert_eq!(char_segment("年03", 1, 2), "03");
        assert_eq!(char_segment("abc", 2, 4), "c");
        assert_eq!(char_segment("abc", 3, 1), "");
        assert_eq!(char_segment("abc", 9, 1), "");
    }

    #[test]
    fn numeric_text_is_a_timestamp() {
        let parser = DateParser::default();
        assert_eq!(parser.parse("86400000").unwrap().as_i64(), 86_400_000);
        assert_eq!(parser.parse(" -1 ").unwrap().as_i64(), -1);
        assert_eq!(parser.parse("1.5e3").unwrap().as_i64(), 1_500);
        assert!(parser.parse("9e99").is_err());
    }

    #[test]
    fn invalid_text() {
        let parser = DateParser::default();
        assert!(parser.parse("not a date").unwrap_err().is_invalid_date());
        assert!(parser.parse("").unwrap_err().is_invalid_date());
        assert!(parser.parse("   ").unwrap_err().is_invalid_date());
    }

    #[test]
    fn two_digit_years() {
        let parsed = fields("24-03-05", "yy-MM-dd");
        let epoch = parsed.to_epoch_milliseconds().unwrap();
        let iso = IsoDateTime::from_epoch_milliseconds(epoch);
        assert_eq!(iso.date.year, 1924);
    }
}
