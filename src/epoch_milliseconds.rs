use core_maths::CoreFloat;
use num_traits::ToPrimitive;

use crate::{error::ErrorMessage, DateError, DateResult, MS_MAX_INSTANT, MS_MIN_INSTANT};

/// Milliseconds since 1970-01-01T00:00:00.000.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct EpochMilliseconds(pub(crate) i64);

impl EpochMilliseconds {
    /// Creates a new `EpochMilliseconds`, rejecting values outside the
    /// supported instant range.
    pub fn try_new(value: i64) -> DateResult<Self> {
        let result = Self(value);
        result.check_validity()?;
        Ok(result)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }

    pub fn check_validity(&self) -> DateResult<()> {
        if !is_valid_epoch_millis(i128::from(self.0)) {
            return Err(DateError::range().with_enum(ErrorMessage::InstantOutOfRange));
        }
        Ok(())
    }

    /// Adds a signed amount of milliseconds, checking the result range.
    pub(crate) fn checked_add(&self, millis: i128) -> DateResult<Self> {
        let result = i128::from(self.0) + millis;
        if !is_valid_epoch_millis(result) {
            return Err(DateError::range().with_enum(ErrorMessage::InstantOutOfRange));
        }
        // The range check above guarantees the value fits.
        Ok(Self(result as i64))
    }
}

impl TryFrom<i128> for EpochMilliseconds {
    type Error = DateError;
    fn try_from(value: i128) -> Result<Self, Self::Error> {
        if !is_valid_epoch_millis(value) {
            return Err(DateError::range().with_enum(ErrorMessage::InstantOutOfRange));
        }
        Ok(Self(value as i64))
    }
}

impl TryFrom<f64> for EpochMilliseconds {
    type Error = DateError;
    /// Truncates the fractional part of `value`, the way a time value is clipped.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(DateError::range().with_enum(ErrorMessage::InvalidDate));
        }
        let millis = CoreFloat::trunc(value)
            .to_i128()
            .ok_or(DateError::range().with_enum(ErrorMessage::InstantOutOfRange))?;
        Self::try_from(millis)
    }
}

/// Utility for determining if the millis are within a valid range.
#[inline]
#[must_use]
pub(crate) fn is_valid_epoch_millis(millis: i128) -> bool {
    (i128::from(MS_MIN_INSTANT)..=i128::from(MS_MAX_INSTANT)).contains(&millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instant_limits() {
        assert!(EpochMilliseconds::try_new(MS_MAX_INSTANT).is_ok());
        assert!(EpochMilliseconds::try_new(MS_MIN_INSTANT).is_ok());
        assert!(EpochMilliseconds::try_new(MS_MAX_INSTANT + 1).is_err());
        assert!(EpochMilliseconds::try_new(MS_MIN_INSTANT - 1).is_err());
    }

    #[test]
    fn from_float_truncates() {
        let ms = EpochMilliseconds::try_from(1_500.9f64).unwrap();
        assert_eq!(ms.as_i64(), 1_500);
        let ms = EpochMilliseconds::try_from(-1_500.9f64).unwrap();
        assert_eq!(ms.as_i64(), -1_500);
        assert!(EpochMilliseconds::try_from(f64::NAN).is_err());
        assert!(EpochMilliseconds::try_from(8.64e15 + 1.0).is_err());
    }
}
