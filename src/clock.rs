//! [`Clock`] backed by the embassy time driver.

use crate::timing::{
    Clock,
    Duration,
    Instant,
};

/// Millisecond clock reading `embassy_time::Instant::now()`.
///
/// Needs a running time driver (`esp_rtos::start`).
#[derive(Clone, Copy, Debug, Default)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now(&self) -> Instant {
        Instant::from_ticks(embassy_time::Instant::now().as_millis())
    }
}

pub const fn to_embassy(duration: Duration) -> embassy_time::Duration {
    embassy_time::Duration::from_millis(duration.ticks())
}
