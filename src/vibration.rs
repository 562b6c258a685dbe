//! Vibration motor, buzzed when a round is lost.

use embassy_time::{
    Duration,
    Timer,
};
use esp_hal::gpio::{
    Level,
    Output,
    OutputConfig,
};

use crate::board::VibrationResources;

pub struct Vibration {
    motor: Output<'static>,
}

impl From<VibrationResources<'static>> for Vibration {
    fn from(res: VibrationResources<'static>) -> Self {
        Self {
            motor: Output::new(res.motor, Level::Low, OutputConfig::default()),
        }
    }
}

impl Vibration {
    /// Buzz for `duration`, then stop.
    pub async fn pulse(&mut self, duration: Duration) {
        self.motor.set_high();
        Timer::after(duration).await;
        self.motor.set_low();
    }
}
