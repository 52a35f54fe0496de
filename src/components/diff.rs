//! This module implements `DateDiff`, the unit breakdown of a time span.

use alloc::vec::Vec;

use tinystr::TinyAsciiStr;

use crate::{
    date_assert,
    epoch_milliseconds::EpochMilliseconds,
    error::ErrorMessage,
    options::{DiffRule, DEFAULT_DIFF_RULES},
    DateError, DateResult, DateUnwrap,
};

/// The difference between two dates, broken into labelled units.
///
/// Entries keep the order of the rules that produced them. A unit only
/// appears when the span was at least one unit long at that point of the
/// breakdown.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DateDiff {
    entries: Vec<(TinyAsciiStr<16>, u64)>,
}

impl DateDiff {
    /// Greedily breaks the span from `start` to `end` into `rules`, largest
    /// unit first.
    ///
    /// Every rule but the last takes as many whole units as fit. The last
    /// rule takes whatever is left, in milliseconds, when anything is left.
    pub(crate) fn between(
        start: EpochMilliseconds,
        end: EpochMilliseconds,
        rules: &[DiffRule],
    ) -> DateResult<Self> {
        let rules = if rules.is_empty() {
            &DEFAULT_DIFF_RULES[..]
        } else {
            rules
        };
        let (terminal, units) = rules.split_last().date_unwrap()?;
        if units.iter().any(|rule| rule.ratio == 0) {
            return Err(DateError::range().with_enum(ErrorMessage::ZeroDiffRatio));
        }

        let mut result = Self::default();
        if start >= end {
            return Ok(result);
        }

        let span = i128::from(end.as_i64()) - i128::from(start.as_i64());
        date_assert!(span > 0, "date diff span must be positive");
        let mut remaining = span as u64;
        for rule in units {
            if remaining >= rule.ratio {
                let count = remaining / rule.ratio;
                remaining -= count * rule.ratio;
                result.insert(rule.label, count);
            }
        }
        if remaining != 0 {
            result.insert(terminal.label, remaining);
        }

        #[cfg(feature = "log")]
        log::trace!("broke a span of {span}ms into {:?}", result.entries);
        Ok(result)
    }

    /// Sets `label`, replacing the value of an earlier entry with the same
    /// label in place.
    fn insert(&mut self, label: TinyAsciiStr<16>, value: u64) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == label) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((label, value)),
        }
    }

    /// Returns the value for a unit label.
    pub fn get(&self, label: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|(existing, _)| existing.as_str() == label)
            .map(|(_, value)| *value)
    }

    /// Returns an iterator over the labels and values, in rule order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries
            .iter()
            .map(|(label, value)| (label.as_str(), *value))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::*;
    use crate::options::MS_PER_YEAR;

    fn ms(value: i64) -> EpochMilliseconds {
        EpochMilliseconds::try_new(value).unwrap()
    }

    fn entries(diff: &DateDiff) -> Vec<(&str, u64)> {
        diff.iter().collect()
    }

    #[test]
    fn empty_when_not_after() {
        let diff = DateDiff::between(ms(1_000), ms(1_000), &[]).unwrap();
        assert!(diff.is_empty());
        let diff = DateDiff::between(ms(2_000), ms(1_000), &[]).unwrap();
        assert!(diff.is_empty());
    }

    #[test]
    fn default_breakdown() {
        // 1 year, 2 days, 3 hours, 4 minutes, 5 seconds and 6 milliseconds.
        let span = MS_PER_YEAR as i64 + 2 * 86_400_000 + 3 * 3_600_000 + 4 * 60_000 + 5_006;
        let diff = DateDiff::between(ms(0), ms(span), &[]).unwrap();
        assert_eq!(
            entries(&diff),
            vec![
                ("yyyy", 1),
                ("dd", 2),
                ("HH", 3),
                ("mm", 4),
                ("ss", 5),
                ("S", 6)
            ]
        );
        assert_eq!(diff.get("MM"), None);
        assert_eq!(diff.get("dd"), Some(2));
    }

    #[test]
    fn remainder_only_when_nonzero() {
        let diff = DateDiff::between(ms(0), ms(61_000), &[]).unwrap();
        assert_eq!(entries(&diff), vec![("mm", 1), ("ss", 1)]);
    }

    #[test]
    fn custom_rules() {
        let rules = [
            DiffRule::try_new("hours", 3_600_000).unwrap(),
            DiffRule::try_new("rest", 0).unwrap(),
        ];
        let diff = DateDiff::between(ms(0), ms(2 * 3_600_000 + 59_999), &rules).unwrap();
        assert_eq!(entries(&diff), vec![("hours", 2), ("rest", 59_999)]);

        // The last rule keeps the leftover milliseconds even below its ratio.
        let rules = [
            DiffRule::try_new("days", 86_400_000).unwrap(),
            DiffRule::try_new("seconds", 1_000).unwrap(),
        ];
        let diff = DateDiff::between(ms(0), ms(86_400_500), &rules).unwrap();
        assert_eq!(entries(&diff), vec![("days", 1), ("seconds", 500)]);
    }

    #[test]
    fn zero_ratio_before_the_end() {
        let rules = [
            DiffRule::try_new("broken", 0).unwrap(),
            DiffRule::try_new("rest", 0).unwrap(),
        ];
        assert!(DateDiff::between(ms(0), ms(10), &rules).is_err());
    }
}
