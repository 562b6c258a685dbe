//! # simon-badge
//!
//! A "Simon Says" memory game on an 8x8 LED matrix: the matrix lights a
//! growing sequence of quadrants, the player repeats it with a joystick and
//! confirms each step with a button.
//!
//! The core is hardware independent and runs anywhere:
//! - [`pattern`]: the 8x8 bitmaps (four quadrants, blank, filled)
//! - [`quadrant`]: joystick readings → quadrant cursor → quadrant number
//! - [`timing`]: millisecond [`Clock`](timing::Clock) and the busy-wait
//!   [`repeat_for`](timing::repeat_for)
//! - [`matrix`]: the [`Matrix`](matrix::Matrix) output seam, a GPIO
//!   row-scan driver and the replay / blink sequences
//! - [`joystick`]: the [`Joystick`](joystick::Joystick) input seam
//! - [`game`]: round bookkeeping
//!
//! With the `badge` feature the crate also drives the Disobey 2026 badge
//! (ESP32-S3), which plays the game on its LCD:
//! - **Panel**: the 8x8 matrix rendered on the 320×170 ST7789 LCD
//! - **Buttons**: D-pad as joystick, A / stick click to confirm
//! - **LEDs**: round progress on the WS2812 bars
//! - **Vibration**: buzz on a lost round
//!
//! ## Quick start
//!
//! ```rust,ignore
//! let peripherals = simon_badge::init();
//! let resources = simon_badge::split_resources!(peripherals);
//!
//! let panel: simon_badge::Panel = resources.display.into();
//! let buttons: simon_badge::Buttons = resources.buttons.into();
//! ```

#![no_std]

pub mod config;
pub mod game;
pub mod joystick;
pub mod matrix;
pub mod pattern;
pub mod quadrant;
pub mod timing;

#[cfg(feature = "badge")]
mod backlight;
#[cfg(feature = "badge")]
mod board;
#[cfg(feature = "badge")]
mod buttons;
#[cfg(feature = "badge")]
mod clock;
#[cfg(feature = "badge")]
mod leds;
#[cfg(feature = "badge")]
mod panel;
#[cfg(feature = "badge")]
mod vibration;

#[cfg(feature = "badge")]
pub use backlight::Backlight;
#[cfg(feature = "badge")]
pub use board::*;
#[cfg(feature = "badge")]
pub use buttons::Buttons;
#[cfg(feature = "badge")]
pub use clock::{
    EmbassyClock,
    to_embassy,
};
#[cfg(feature = "badge")]
pub use leds::{
    BAR_COUNT,
    Leds,
};
#[cfg(feature = "badge")]
pub use panel::Panel;
#[cfg(feature = "badge")]
pub use vibration::Vibration;
