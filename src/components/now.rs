//! The `Now` component

use crate::{components::DateTime, host::HostClock, time::EpochMilliseconds, DateResult};

/// Reads the current time from a [`HostClock`].
#[derive(Debug, Clone, Copy)]
pub struct Now<H: HostClock> {
    host: H,
}

impl<H: HostClock> Now<H> {
    pub const fn new(host: H) -> Self {
        Self { host }
    }

    /// Returns the current instant.
    pub fn epoch_milliseconds(&self) -> DateResult<EpochMilliseconds> {
        let now = self.host.get_host_epoch_milliseconds()?;
        now.check_validity()?;
        Ok(now)
    }

    /// Returns the current time as a `DateTime`.
    pub fn date_time(&self) -> DateResult<DateTime> {
        self.epoch_milliseconds().map(DateTime::from)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn fixed_clock() {
        let clock = EpochMilliseconds::try_new(1_709_626_150_123).unwrap();
        let now = Now::new(clock).date_time().unwrap();
        assert_eq!(now.to_string(), "2024-03-05 08:09:10");
    }

    #[test]
    fn empty_clock_is_the_epoch() {
        let now = Now::new(()).date_time().unwrap();
        assert_eq!(now.epoch_milliseconds(), 0);
        assert_eq!(now.year(), 1970);
    }
}
