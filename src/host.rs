//! Trait definitions for accessing values from the host environment.

use crate::{time::EpochMilliseconds, DateResult};

/// The `HostClock` trait defines an accessor to the host's clock.
pub trait HostClock {
    fn get_host_epoch_milliseconds(&self) -> DateResult<EpochMilliseconds>;
}

// Implement empty and fixed clocks

impl HostClock for () {
    fn get_host_epoch_milliseconds(&self) -> DateResult<EpochMilliseconds> {
        Ok(EpochMilliseconds::default())
    }
}

/// A clock that always reads the same instant.
impl HostClock for EpochMilliseconds {
    fn get_host_epoch_milliseconds(&self) -> DateResult<EpochMilliseconds> {
        Ok(*self)
    }
}

impl<T: HostClock + ?Sized> HostClock for &T {
    fn get_host_epoch_milliseconds(&self) -> DateResult<EpochMilliseconds> {
        (**self).get_host_epoch_milliseconds()
    }
}
