//! Game controls on the badge buttons.
//!
//! The badge has no analog stick, so the D-pad stands in for one: a held
//! direction reads as a full deflection of [`JOYSTICK_BOUND`]. A and the
//! joystick click both confirm the highlighted quadrant.

use core::convert::Infallible;

use embassy_time::Timer;
use esp_hal::gpio::{
    Input,
    InputConfig,
    Pull,
};

use crate::{
    board::ButtonResources,
    clock::to_embassy,
    config::{
        DEBOUNCE_DELAY,
        JOYSTICK_BOUND,
    },
    joystick::{
        Displacement,
        Joystick,
    },
};

/// The buttons the game uses, active low.
pub struct Buttons {
    pub up: Input<'static>,
    pub down: Input<'static>,
    pub left: Input<'static>,
    pub right: Input<'static>,
    pub stick: Input<'static>,
    pub a: Input<'static>,
}

impl From<ButtonResources<'static>> for Buttons {
    fn from(res: ButtonResources<'static>) -> Self {
        let pull_up = InputConfig::default().with_pull(Pull::Up);
        Self {
            up: Input::new(res.up, pull_up),
            down: Input::new(res.down, pull_up),
            left: Input::new(res.left, pull_up),
            right: Input::new(res.right, pull_up),
            stick: Input::new(res.stick, pull_up),
            a: Input::new(res.a, pull_up),
        }
    }
}

impl Buttons {
    /// Whether either confirm button reads pressed right now (undebounced).
    pub fn confirm_held(&self) -> bool {
        self.a.is_low() || self.stick.is_low()
    }

    /// Check a confirm press that [`confirm_held`](Self::confirm_held) saw.
    ///
    /// Waits [`DEBOUNCE_DELAY`] and returns `true` only if the button is still
    /// down, then waits for it to be released so one press counts once.
    pub async fn confirm_debounced(&mut self) -> bool {
        Timer::after(to_embassy(DEBOUNCE_DELAY)).await;
        if !self.confirm_held() {
            return false;
        }
        while self.confirm_held() {
            Timer::after(to_embassy(DEBOUNCE_DELAY)).await;
        }
        true
    }

    /// Wait for a debounced press (falling edge, active low).
    pub async fn debounce_press(button: &mut Input<'_>) {
        loop {
            button.wait_for_falling_edge().await;
            Timer::after(to_embassy(DEBOUNCE_DELAY)).await;
            if button.is_low() {
                return;
            }
        }
    }
}

fn axis(negative: &Input<'_>, positive: &Input<'_>) -> i16 {
    match (negative.is_low(), positive.is_low()) {
        (true, false) => -JOYSTICK_BOUND,
        (false, true) => JOYSTICK_BOUND,
        _ => 0,
    }
}

impl Joystick for Buttons {
    type Error = Infallible;

    fn read(&mut self) -> Result<Displacement, Infallible> {
        Ok(Displacement::new(
            axis(&self.left, &self.right),
            axis(&self.down, &self.up),
        ))
    }
}
