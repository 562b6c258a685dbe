//! Game tuning constants.
//!
//! Everything here is fixed at compile time. Durations use
//! [`fugit::MillisDurationU64`], the same unit [`crate::timing`] works in.

use crate::timing::Duration;

/// Number of rounds the player has to repeat before winning.
pub const MAX_GAME_LENGTH: usize = 10;

/// How long a pushbutton reading must hold before it is trusted.
pub const DEBOUNCE_DELAY: Duration = Duration::from_ticks(150);

/// Magnitude of the centered joystick range.
///
/// Raw analog readings (`0..=ADC_MAX`) are mapped onto
/// `-JOYSTICK_BOUND..=JOYSTICK_BOUND` so that zero is the resting position.
pub const JOYSTICK_BOUND: i16 = 512;

/// Full-scale value of the raw joystick ADC reading.
pub const ADC_MAX: u16 = 1023;

/// Minimum displacement from center that counts as a movement.
///
/// Lower values make the joystick more sensitive. Readings whose magnitude is
/// at most this value fall in the dead zone.
pub const MINIMUM_JOYSTICK_POSITION: i16 = 200;

/// How long each quadrant of the sequence is shown.
pub const DISPLAY_DURATION: Duration = Duration::from_ticks(750);

/// Flash length between sequence steps and after a completed round.
pub const RESET_DURATION: Duration = Duration::from_ticks(250);

/// Flash length of the lose animation.
pub const LOSE_DURATION: Duration = Duration::from_ticks(100);

/// On/off cycles of the lose animation.
pub const LOSE_FLASHES: usize = 5;

/// On/off cycles of the win animation.
pub const WIN_FLASHES: usize = 3;

/// Input polling tick while waiting for the player.
pub const INPUT_POLL: Duration = Duration::from_ticks(10);
