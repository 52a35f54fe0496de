use crate::components::Now;
use crate::error::ErrorMessage;
use crate::host::HostClock;
use crate::time::EpochMilliseconds;
use crate::{DateError, DateResult};

use web_time::{SystemTime, UNIX_EPOCH};

/// A host clock backed by [`std::time::SystemTime`].
///
/// The wall clock is read as UTC.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl HostClock for SystemClock {
    fn get_host_epoch_milliseconds(&self) -> DateResult<EpochMilliseconds> {
        get_system_milliseconds()
    }
}

impl Now<SystemClock> {
    /// Get a `Now` object for the host system.
    pub const fn system() -> Self {
        Self::new(SystemClock)
    }
}

/// Returns the system time in milliseconds.
pub(crate) fn get_system_milliseconds() -> DateResult<EpochMilliseconds> {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|_| DateError::general(ErrorMessage::SystemClock.to_str()))?
        .as_millis();
    EpochMilliseconds::try_from(millis as i128)
}
