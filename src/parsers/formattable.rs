//! Pattern tokenization and the `Writeable` date formatter.

use alloc::vec::Vec;

use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::{iso::IsoDateTime, options::NameTable};

/// A calendar field that can be written by a format pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatField {
    /// `y`, the last digits of the year.
    Year,
    /// `q`, the quarter label.
    Quarter,
    /// `M`
    Month,
    /// `E`, the weekday label.
    Weekday,
    /// `d`
    Day,
    /// `H`
    Hour,
    /// `m`
    Minute,
    /// `s`
    Second,
    /// `S`
    Millisecond,
}

impl FormatField {
    fn from_char(c: char) -> Option<Self> {
        Some(match c {
            'y' => Self::Year,
            'q' => Self::Quarter,
            'M' => Self::Month,
            'E' => Self::Weekday,
            'd' => Self::Day,
            'H' => Self::Hour,
            'm' => Self::Minute,
            's' => Self::Second,
            'S' => Self::Millisecond,
            _ => return None,
        })
    }

    const fn bit(self) -> u16 {
        1 << self as u16
    }
}

/// A piece of a tokenized format pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternItem<'p> {
    Literal(&'p str),
    /// A run of `width` repeated token characters.
    Field { field: FormatField, width: usize },
}

/// A tokenized format pattern.
///
/// Only the first run of each token character is a field. Any later run
/// of the same character is kept as literal text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatPattern<'p> {
    items: Vec<PatternItem<'p>>,
}

impl<'p> FormatPattern<'p> {
    /// Tokenizes `pattern`.
    pub fn parse(pattern: &'p str) -> Self {
        let mut items = Vec::new();
        let mut seen = 0u16;
        let mut literal_start = 0;
        let mut chars = pattern.char_indices().peekable();

        while let Some((start, c)) = chars.next() {
            let mut width = 1;
            let mut end = start + c.len_utf8();
            while let Some(&(index, next)) = chars.peek() {
                if next != c {
                    break;
                }
                width += 1;
                end = index + next.len_utf8();
                chars.next();
            }

            let Some(field) = FormatField::from_char(c) else {
                continue;
            };
            if seen & field.bit() != 0 {
                continue;
            }
            seen |= field.bit();

            if literal_start < start {
                items.push(PatternItem::Literal(&pattern[literal_start..start]));
            }
            items.push(PatternItem::Field { field, width });
            literal_start = end;
        }

        if literal_start < pattern.len() {
            items.push(PatternItem::Literal(&pattern[literal_start..]));
        }
        Self { items }
    }

    pub fn items(&self) -> &[PatternItem<'p>] {
        &self.items
    }
}

/// A date bound to a format pattern and a name table.
#[derive(Debug, Clone)]
pub struct FormattableDateTime<'a> {
    iso: IsoDateTime,
    pattern: FormatPattern<'a>,
    names: NameTable<'a>,
}

impl<'a> FormattableDateTime<'a> {
    pub fn new(iso: IsoDateTime, pattern: FormatPattern<'a>, names: NameTable<'a>) -> Self {
        Self {
            iso,
            pattern,
            names,
        }
    }
}

impl Writeable for FormattableDateTime<'_> {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        let date = self.iso.date;
        let time = self.iso.time;
        for item in self.pattern.items() {
            let (field, width) = match *item {
                PatternItem::Literal(text) => {
                    sink.write_str(text)?;
                    continue;
                }
                PatternItem::Field { field, width } => (field, width),
            };
            match field {
                FormatField::Year => write_year(date.year, width, sink)?,
                FormatField::Quarter => {
                    let label = self.names.quarter(date.quarter());
                    sink.write_str(label.ok_or(core::fmt::Error)?)?;
                }
                FormatField::Weekday => {
                    let label = self.names.weekday(date.weekday());
                    sink.write_str(label.ok_or(core::fmt::Error)?)?;
                }
                FormatField::Month => write_padded(u32::from(date.month), width, sink)?,
                FormatField::Day => write_padded(u32::from(date.day), width, sink)?,
                FormatField::Hour => write_padded(u32::from(time.hour), width, sink)?,
                FormatField::Minute => write_padded(u32::from(time.minute), width, sink)?,
                FormatField::Second => write_padded(u32::from(time.second), width, sink)?,
                FormatField::Millisecond => {
                    write_padded(u32::from(time.millisecond), width, sink)?;
                }
            }
        }
        Ok(())
    }

    fn writeable_length_hint(&self) -> LengthHint {
        self.pattern
            .items()
            .iter()
            .map(|item| match *item {
                PatternItem::Literal(text) => LengthHint::exact(text.len()),
                PatternItem::Field {
                    field: FormatField::Year,
                    width,
                } if width >= 4 => LengthHint::between(1, 7),
                PatternItem::Field {
                    field: FormatField::Year,
                    width,
                } => LengthHint::between(1, width + 1),
                PatternItem::Field {
                    field: FormatField::Quarter,
                    ..
                } => self
                    .names
                    .quarter(self.iso.date.quarter())
                    .map_or(LengthHint::undefined(), |label| LengthHint::exact(label.len())),
                PatternItem::Field {
                    field: FormatField::Weekday,
                    ..
                } => self
                    .names
                    .weekday(self.iso.date.weekday())
                    .map_or(LengthHint::undefined(), |label| LengthHint::exact(label.len())),
                PatternItem::Field { width, .. } => LengthHint::between(width, width.max(3)),
            })
            .sum()
    }
}

impl_display_with_writeable!(FormattableDateTime<'_>);

/// Writes `value`, zero padded to `width` when `width` is greater than one.
fn write_padded<W: core::fmt::Write + ?Sized>(
    value: u32,
    width: usize,
    sink: &mut W,
) -> core::fmt::Result {
    if width > 1 {
        let (_, len) = u32_to_digits(value);
        for _ in len..width {
            sink.write_char('0')?;
        }
    }
    value.write_to(sink)
}

/// Writes the year for a run of `width` year tokens.
///
/// A run of four or more writes the whole signed year. Shorter runs write
/// the last `width` digits, with the sign of a negative year only when
/// every digit fits.
fn write_year<W: core::fmt::Write + ?Sized>(
    year: i32,
    width: usize,
    sink: &mut W,
) -> core::fmt::Result {
    if width >= 4 {
        return year.write_to(sink);
    }
    let (digits, len) = u32_to_digits(year.unsigned_abs());
    if year < 0 && width >= len {
        sink.write_char('-')?;
    }
    for digit in digits.iter().skip(digits.len() - len.min(width)) {
        digit.write_to(sink)?;
    }
    Ok(())
}

/// Returns the decimal digits of `value`, right aligned, and how many of
/// them are significant. Zero has one significant digit.
fn u32_to_digits(mut value: u32) -> ([u8; 10], usize) {
    let mut output = [0; 10];
    let mut len = 0;
    for slot in output.iter_mut().rev() {
        *slot = (value % 10) as u8;
        value /= 10;
        len += 1;
        if value == 0 {
            break;
        }
    }
    (output, len)
}

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};

    use super::*;
    use crate::iso::{IsoDate, IsoTime, MIN_YEAR};

    fn format(iso: IsoDateTime, pattern: &str, names: NameTable<'_>) -> String {
        FormattableDateTime::new(iso, FormatPattern::parse(pattern), names).to_string()
    }

    fn sample() -> IsoDateTime {
        IsoDateTime::new_unchecked(
            IsoDate::new_unchecked(2024, 3, 5),
            IsoTime::new_unchecked(8, 9, 10, 7),
        )
    }

    #[test]
    fn tokenize_first_runs_only() {
        let pattern = FormatPattern::parse("yyyy-MM yyyy");
        assert_eq!(
            pattern.items(),
            &[
                PatternItem::Field {
                    field: FormatField::Year,
                    width: 4
                },
                PatternItem::Literal("-"),
                PatternItem::Field {
                    field: FormatField::Month,
                    width: 2
                },
                PatternItem::Literal(" yyyy"),
            ]
        );
    }

    #[test]
    fn default_pattern() {
        let names = NameTable::default();
        assert_eq!(
            format(sample(), "yyyy-MM-dd HH:mm:ss", names),
            "2024-03-05 08:09:10"
        );
        assert_eq!(
            format(sample(), "yyyy-MM-dd HH:mm:ss.SSS", names),
            "2024-03-05 08:09:10.007"
        );
    }

    #[test]
    fn single_width_is_unpadded() {
        let names = NameTable::default();
        assert_eq!(format(sample(), "yyyy/M/d H:m:s.S", names), "2024/3/5 8:9:10.7");
    }

    #[test]
    fn year_keeps_last_digits() {
        let names = NameTable::default();
        assert_eq!(format(sample(), "yy", names), "24");
        assert_eq!(format(sample(), "yyy", names), "024");
        assert_eq!(format(sample(), "y", names), "4");
        assert_eq!(format(sample(), "yyyyy", names), "2024");

        let negative = IsoDateTime::new_unchecked(IsoDate::new_unchecked(-5, 1, 1), IsoTime::default());
        assert_eq!(format(negative, "yyyy", names), "-5");
        assert_eq!(format(negative, "yy", names), "-5");

        // Four or more tokens write the whole signed year.
        let distant = IsoDateTime::new_unchecked(IsoDate::new_unchecked(10_000, 1, 1), IsoTime::default());
        assert_eq!(format(distant, "yyyy-MM-dd", names), "10000-01-01");
        assert_eq!(format(distant, "yy", names), "00");

        let earliest = IsoDateTime::new_unchecked(
            IsoDate::new_unchecked(MIN_YEAR, 4, 20),
            IsoTime::default(),
        );
        assert_eq!(format(earliest, "yyyy-MM-dd", names), "-271821-04-20");
        assert_eq!(format(earliest, "yyy", names), "821");
    }

    #[test]
    fn labels() {
        // 2024-03-05 is a Tuesday in the first quarter.
        assert_eq!(
            format(sample(), "yyyy年第q季度 星期E", NameTable::default()),
            "2024年第一季度 星期二"
        );
        assert_eq!(format(sample(), "EEE, qq", NameTable::ENGLISH), "Tue, Q1");
    }

    #[test]
    fn labels_are_not_substituted_again() {
        // "Mon" contains a month token character.
        let monday = IsoDateTime::new_unchecked(IsoDate::new_unchecked(2024, 3, 4), IsoTime::default());
        assert_eq!(format(monday, "E MM", NameTable::ENGLISH), "Mon 03");
    }

    #[test]
    fn literal_text_passes_through() {
        let names = NameTable::default();
        assert_eq!(format(sample(), "[dd] at HH", names), "[05] at 08");
        assert_eq!(format(sample(), "", names), "");
    }
}
