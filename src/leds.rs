//! WS2812 LED bars as a round-progress gauge, driven over RMT.
//!
//! The badge has 10 RGB LEDs in two bars of five.

extern crate alloc;

use defmt::error;
use embassy_time::{
    Duration,
    Timer,
};
use esp_hal::{
    Blocking,
    gpio::Level,
    rmt::{
        PulseCode,
        Tx,
    },
};
use palette::Srgb;

use crate::config::MAX_GAME_LENGTH;

/// Number of WS2812 LEDs on the badge.
/// Index 0 is bottom right, 4 top right, 5 top left, 9 bottom left.
pub const LED_COUNT: usize = 10;

/// Number of LEDs per bar (left or right).
pub const BAR_COUNT: usize = 5;

const OFF: Srgb<u8> = Srgb::new(0, 0, 0);
const PROGRESS: Srgb<u8> = Srgb::new(0, 4, 8);

/// WS2812 strip with an in-memory framebuffer, flushed by
/// [`update`](Leds::update).
pub struct Leds<'a> {
    channel: Option<esp_hal::rmt::Channel<'a, Blocking, Tx>>,
    framebuffer: [Srgb<u8>; LED_COUNT],
}

impl<'a> Leds<'a> {
    pub const fn new(channel: esp_hal::rmt::Channel<'a, Blocking, Tx>) -> Self {
        Self {
            channel: Some(channel),
            framebuffer: [OFF; LED_COUNT],
        }
    }

    /// Flush the framebuffer to the physical LEDs.
    pub async fn update(&mut self) {
        let Some(channel) = self.channel.take() else {
            error!("RMT channel lost during previous transmission");
            return;
        };

        let pulses = self
            .framebuffer
            .iter()
            .flat_map(|color| {
                // WS2812 expects GRB byte order
                [
                    Self::byte_to_pulses(color.green),
                    Self::byte_to_pulses(color.red),
                    Self::byte_to_pulses(color.blue),
                ]
                .into_iter()
                .flatten()
            })
            .chain(core::iter::once(PulseCode::end_marker()))
            .collect::<alloc::vec::Vec<_>>();

        let transaction = match channel.transmit(&pulses) {
            Ok(t) => t,
            Err(e) => {
                error!("RMT transmit failed: {}", e);
                return;
            }
        };

        self.channel = Some(match transaction.wait() {
            Ok(ch) => ch,
            Err((err, ch)) => {
                error!("RMT transaction failed: {}", err);
                ch
            }
        });

        // WS2812 reset time
        Timer::after(Duration::from_micros(50)).await;
    }

    pub fn fill(&mut self, color: Srgb<u8>) {
        self.framebuffer.fill(color);
    }

    pub fn clear(&mut self) {
        self.fill(OFF);
    }

    /// Light both bars bottom-up in proportion to `round` out of
    /// [`MAX_GAME_LENGTH`].
    pub fn show_progress(&mut self, round: usize) {
        let lit = (round.min(MAX_GAME_LENGTH) * BAR_COUNT).div_ceil(MAX_GAME_LENGTH);
        let mut bar = [OFF; BAR_COUNT];
        bar[..lit].fill(PROGRESS);
        self.set_both_bars(&bar);
    }

    /// Set both bars, `colors[0]` at the bottom.
    pub fn set_both_bars(&mut self, colors: &[Srgb<u8>; BAR_COUNT]) {
        // Right bar runs bottom-to-top in hardware, the left bar top-to-bottom.
        self.framebuffer[..BAR_COUNT].copy_from_slice(colors);
        for i in 0..BAR_COUNT {
            self.framebuffer[BAR_COUNT + i] = colors[BAR_COUNT - 1 - i];
        }
    }

    /// WS2812 bit timing at 40 MHz RMT clock.
    const fn bit_to_pulse(bit: bool) -> PulseCode {
        if bit {
            // '1': 0.8 µs high (32 ticks), 0.45 µs low (18 ticks)
            PulseCode::new(Level::High, 32, Level::Low, 18)
        } else {
            // '0': 0.4 µs high (16 ticks), 0.85 µs low (34 ticks)
            PulseCode::new(Level::High, 16, Level::Low, 34)
        }
    }

    fn byte_to_pulses(byte: u8) -> [PulseCode; 8] {
        let mut pulses = [PulseCode::default(); 8];
        for (i, pulse) in pulses.iter_mut().enumerate() {
            *pulse = Self::bit_to_pulse((byte >> (7 - i)) & 1 != 0);
        }
        pulses
    }
}
