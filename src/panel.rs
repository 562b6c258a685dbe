//! The 8x8 game matrix drawn on the badge's ST7789 LCD (320×170, SPI + DMA).
//!
//! The grid is centered vertically on the left of the screen; the strip to
//! its right carries a one-line caption.

use embedded_graphics::{
    mono_font::{
        MonoTextStyle,
        ascii::FONT_10X20,
    },
    pixelcolor::Rgb565,
    prelude::*,
    primitives::Rectangle,
    text::Text,
};
use embedded_hal_bus::spi::ExclusiveDevice;
use esp_hal::{
    Async,
    dma::{
        DmaRxBuf,
        DmaTxBuf,
    },
    dma_buffers,
    gpio::{
        Level,
        Output,
        OutputConfig,
    },
    spi::master::Spi,
    time::Rate,
};

use crate::{
    board::DisplayResources,
    matrix::Matrix,
    pattern::{
        BLANK,
        Pattern,
        SIZE,
    },
};

type SpiInterface<'a> = mipidsi::interface::SpiInterface<
    'a,
    ExclusiveDevice<esp_hal::spi::master::SpiDmaBus<'a, Async>, Output<'a>, esp_hal::delay::Delay>,
    Output<'a>,
>;

type Lcd<'a> = mipidsi::Display<SpiInterface<'a>, mipidsi::models::ST7789, Output<'a>>;

type LcdError<'a> = <Lcd<'a> as DrawTarget>::Error;

const SCREEN_W: i32 = 320;
const SCREEN_H: i32 = 170;

/// Pixel size of one matrix LED.
const CELL: u32 = 19;
/// Lit LEDs are drawn inset by this much so the grid reads as discrete dots.
const GAP: u32 = 2;
const GRID_PX: i32 = CELL as i32 * SIZE as i32;
const GRID_ORIGIN: Point = Point::new(16, (SCREEN_H - GRID_PX) / 2);
const CAPTION_ORIGIN: Point = Point::new(GRID_ORIGIN.x + GRID_PX + 16, SCREEN_H / 2 + 6);

const LED_ON: Rgb565 = Rgb565::RED;
const LED_OFF: Rgb565 = Rgb565::new(4, 4, 2);

/// LCD stand-in for an 8x8 LED matrix.
///
/// Unlike a multiplexed matrix the LCD keeps its image, so [`Matrix::show`]
/// only touches the SPI bus when the pattern changes.
pub struct Panel<'a> {
    lcd: Lcd<'a>,
    current: Option<Pattern>,
}

impl<'a> Panel<'a> {
    /// Blank the whole screen and draw an unlit grid.
    pub fn reset(&mut self) -> Result<(), LcdError<'a>> {
        self.lcd.clear(Rgb565::BLACK)?;
        self.current = None;
        self.show(&BLANK)
    }

    /// Replace the caption with `text`.
    pub fn caption(&mut self, text: &str) -> Result<(), LcdError<'a>> {
        let area = Rectangle::new(
            Point::new(CAPTION_ORIGIN.x, 0),
            Size::new((SCREEN_W - CAPTION_ORIGIN.x) as u32, SCREEN_H as u32),
        );
        self.lcd.fill_solid(&area, Rgb565::BLACK)?;
        Text::new(
            text,
            CAPTION_ORIGIN,
            MonoTextStyle::new(&FONT_10X20, Rgb565::WHITE),
        )
        .draw(&mut self.lcd)?;
        Ok(())
    }

    fn draw(&mut self, pattern: &Pattern) -> Result<(), LcdError<'a>> {
        pattern.draw(&mut self.lcd, GRID_ORIGIN, CELL, LED_OFF, LED_OFF)?;
        let mut dots = self.lcd.translated(Point::new_equal(GAP as i32));
        for row in 0..SIZE {
            for col in 0..SIZE {
                if pattern.is_lit(row, col) {
                    let top_left = GRID_ORIGIN
                        + Point::new(row as i32 * CELL as i32, (SIZE - 1 - col) as i32 * CELL as i32);
                    dots.fill_solid(
                        &Rectangle::new(top_left, Size::new_equal(CELL - 2 * GAP)),
                        LED_ON,
                    )?;
                }
            }
        }
        Ok(())
    }
}

impl<'a> Matrix for Panel<'a> {
    type Error = LcdError<'a>;

    fn show(&mut self, pattern: &Pattern) -> Result<(), Self::Error> {
        if self.current.as_ref() == Some(pattern) {
            return Ok(());
        }
        self.draw(pattern)?;
        self.current = Some(*pattern);
        Ok(())
    }
}

impl<'a> From<DisplayResources<'a>> for Panel<'a> {
    fn from(res: DisplayResources<'a>) -> Self {
        let (rx_buffer, rx_descriptors, tx_buffer, tx_descriptors) = dma_buffers!(32000);
        let dma_rx_buf = DmaRxBuf::new(rx_descriptors, rx_buffer).unwrap();
        let dma_tx_buf = DmaTxBuf::new(tx_descriptors, tx_buffer).unwrap();

        let mut delay = esp_hal::delay::Delay::new();

        let dc = Output::new(res.dc, Level::Low, OutputConfig::default());
        let mut rst = Output::new(res.rst, Level::Low, OutputConfig::default());
        rst.set_high();

        let spi = Spi::new(
            res.spi,
            esp_hal::spi::master::Config::default().with_frequency(Rate::from_mhz(80)),
        )
        .unwrap()
        .with_sck(res.sck)
        .with_mosi(res.mosi)
        .with_miso(res.miso)
        .with_dma(res.dma)
        .with_buffers(dma_rx_buf, dma_tx_buf)
        .into_async();

        let cs = Output::new(res.cs, Level::High, OutputConfig::default());
        let spi_device = ExclusiveDevice::new(spi, cs, delay).unwrap();

        let buffer = crate::mk_static!([u8; 32000], [0_u8; 32000]);
        let di = mipidsi::interface::SpiInterface::new(spi_device, dc, buffer);

        let lcd = mipidsi::Builder::new(mipidsi::models::ST7789, di)
            .reset_pin(rst)
            .display_size(170, 320)
            .invert_colors(mipidsi::options::ColorInversion::Inverted)
            .orientation(
                mipidsi::options::Orientation::new().rotate(mipidsi::options::Rotation::Deg90),
            )
            .display_offset(35, 0)
            .init(&mut delay)
            .unwrap();

        Self { lcd, current: None }
    }
}
