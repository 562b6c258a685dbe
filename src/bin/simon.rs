//! Simon Says on the Disobey 2026 badge.
//!
//! The LCD plays an 8x8 LED matrix. Each round the badge shows a sequence
//! of quadrants; repeat it to move on, get one wrong and it starts over.
//!
//! Controls:
//! - D-pad: move the highlighted quadrant
//! - A / joystick click: confirm the highlighted quadrant

#![no_std]
#![no_main]

use defmt::{
    error,
    info,
    warn,
};
use embassy_executor::Spawner;
use embassy_futures::select::select;
use embassy_time::{
    Duration,
    Timer,
};
use esp_backtrace as _;
use esp_hal::timer::timg::TimerGroup;
use esp_println as _;
use palette::Srgb;
#[allow(clippy::wildcard_imports)]
use simon_badge::*;
use simon_badge::{
    config::{
        DISPLAY_DURATION,
        INPUT_POLL,
        LOSE_DURATION,
        LOSE_FLASHES,
        RESET_DURATION,
        WIN_FLASHES,
    },
    game::{
        Game,
        Outcome,
    },
    joystick::Joystick,
    matrix::{
        self,
        Matrix,
    },
    pattern::{
        BLANK,
        FILLED,
    },
    quadrant::{
        Position,
        Quadrant,
    },
};

extern crate alloc;

esp_bootloader_esp_idf::esp_app_desc!();

type PanelError = <Panel<'static> as Matrix>::Error;

const LOSE_BUZZ: Duration = Duration::from_millis(300);
const LOSE_COLOR: Srgb<u8> = Srgb::new(20, 0, 0);
const WIN_COLOR: Srgb<u8> = Srgb::new(0, 20, 0);

struct Badge {
    panel: &'static mut Panel<'static>,
    leds: &'static mut Leds<'static>,
    vibration: &'static mut Vibration,
    buttons: &'static mut Buttons,
    clock: EmbassyClock,
    /// Where the cursor sits; kept across choices like a physical stick.
    cursor: Position,
}

impl Badge {
    async fn wait_for_release(&mut self) {
        while self.buttons.confirm_held() {
            Timer::after(to_embassy(INPUT_POLL)).await;
        }
    }

    async fn title(&mut self) -> Result<(), PanelError> {
        self.panel.reset()?;
        self.panel.caption("Press A")?;
        self.leds.clear();
        self.leds.update().await;

        let buttons = &mut *self.buttons;
        select(
            Buttons::debounce_press(&mut buttons.a),
            Buttons::debounce_press(&mut buttons.stick),
        )
        .await;
        self.wait_for_release().await;
        Ok(())
    }

    /// Follow the D-pad until the player confirms a quadrant.
    async fn choose(&mut self) -> Result<Quadrant, PanelError> {
        loop {
            let Ok(reading) = self.buttons.read();
            self.cursor.step(reading.x, reading.y);
            self.panel.show(self.cursor.quadrant().pattern())?;

            if self.buttons.confirm_held() && self.buttons.confirm_debounced().await {
                let chosen = self.cursor.quadrant();
                // Gap so two identical choices in a row read as two.
                matrix::hold(&mut *self.panel, &self.clock, &BLANK, RESET_DURATION)?;
                return Ok(chosen);
            }
            Timer::after(to_embassy(INPUT_POLL)).await;
        }
    }

    /// Show this round's sequence and collect the player's answer.
    async fn round(&mut self, game: &mut Game) -> Result<Outcome, PanelError> {
        info!("Round {}: {} to repeat", game.round(), game.shown().len());
        self.leds.show_progress(game.round());
        self.leds.update().await;
        self.panel.caption(&alloc::format!("Round {}", game.round()))?;

        matrix::replay(&mut *self.panel, &self.clock, game.shown())?;

        loop {
            let chosen = self.choose().await?;
            match game.submit(chosen) {
                Outcome::Correct => continue,
                outcome => return Ok(outcome),
            }
        }
    }

    async fn lost(&mut self) -> Result<(), PanelError> {
        self.panel.caption("Wrong!")?;
        self.leds.fill(LOSE_COLOR);
        self.leds.update().await;
        self.vibration.pulse(LOSE_BUZZ).await;
        matrix::blink(&mut *self.panel, &self.clock, &FILLED, LOSE_DURATION, LOSE_FLASHES)
    }

    async fn won(&mut self) -> Result<(), PanelError> {
        self.panel.caption("You win!")?;
        self.leds.fill(WIN_COLOR);
        self.leds.update().await;
        matrix::blink(&mut *self.panel, &self.clock, &FILLED, DISPLAY_DURATION, WIN_FLASHES)
    }

    /// One game from title screen to win or loss.
    async fn play(&mut self) -> Result<(), PanelError> {
        self.title().await?;

        let seed = embassy_time::Instant::now().as_ticks() as u32;
        let mut game = Game::new(seed);
        info!("New game, seed {}", seed);

        loop {
            match self.round(&mut game).await? {
                Outcome::RoundComplete { round } => {
                    info!("Round complete, next {}", round);
                    matrix::blink(&mut *self.panel, &self.clock, &FILLED, RESET_DURATION, 1)?;
                }
                Outcome::Lost { expected, chosen } => {
                    warn!("Lost: expected {}, chose {}", expected, chosen);
                    return self.lost().await;
                }
                Outcome::Won => {
                    info!("Won all rounds");
                    return self.won().await;
                }
                Outcome::Correct => {}
            }
        }
    }
}

#[embassy_executor::task]
async fn game_task(badge: Badge, backlight: &'static mut Backlight) {
    info!("Simon task started");
    backlight.on();

    let mut badge = badge;
    loop {
        if badge.play().await.is_err() {
            error!("LCD write failed, back to title");
        }
    }
}

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    let peripherals = simon_badge::init();
    let resources = split_resources!(peripherals);

    esp_alloc::heap_allocator!(size: 64 * 1024);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    let badge = Badge {
        panel: mk_static!(Panel<'static>, resources.display.into()),
        leds: mk_static!(Leds<'static>, resources.leds.into()),
        vibration: mk_static!(Vibration, resources.vibra.into()),
        buttons: mk_static!(Buttons, resources.buttons.into()),
        clock: EmbassyClock,
        cursor: Position::default(),
    };
    let backlight = mk_static!(Backlight, resources.backlight.into());

    spawner.must_spawn(game_task(badge, backlight));

    loop {
        Timer::after(Duration::from_secs(600)).await;
    }
}
