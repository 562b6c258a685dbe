//! LED matrix output and the timed display sequences built on it.

use embedded_hal::{
    delay::DelayNs,
    digital::{
        OutputPin,
        PinState,
    },
};

use crate::{
    config::{
        DISPLAY_DURATION,
        RESET_DURATION,
    },
    pattern::{
        BLANK,
        Pattern,
        SIZE,
    },
    quadrant::Quadrant,
    timing::{
        Clock,
        Duration,
        try_repeat_for,
    },
};

/// Something that can put a [`Pattern`] on an 8x8 grid.
///
/// `show` performs a single refresh. Multiplexed matrices only light the
/// pattern while `show` keeps being called, so callers drive it in a loop
/// (see [`hold`]). Implementations must be cheap to call repeatedly.
pub trait Matrix {
    type Error;

    fn show(&mut self, pattern: &Pattern) -> Result<(), Self::Error>;
}

impl<M: Matrix + ?Sized> Matrix for &mut M {
    type Error = M::Error;

    fn show(&mut self, pattern: &Pattern) -> Result<(), Self::Error> {
        (**self).show(pattern)
    }
}

/// How long each row stays lit during a scan.
pub const ROW_DWELL_US: u32 = 500;

/// Row-multiplexed 8x8 LED matrix wired straight to GPIO.
///
/// An LED lights when its row pin is high and its column pin is low. Row
/// `n` carries pattern row `n`, column `n` carries pattern column `n`.
pub struct GpioMatrix<P, D> {
    rows: [P; SIZE],
    cols: [P; SIZE],
    delay: D,
}

impl<P: OutputPin, D: DelayNs> GpioMatrix<P, D> {
    /// Take ownership of the pins and switch every LED off.
    pub fn new(rows: [P; SIZE], cols: [P; SIZE], delay: D) -> Result<Self, P::Error> {
        let mut matrix = Self { rows, cols, delay };
        matrix.clear()?;
        Ok(matrix)
    }

    pub fn clear(&mut self) -> Result<(), P::Error> {
        for row in &mut self.rows {
            row.set_low()?;
        }
        for col in &mut self.cols {
            col.set_high()?;
        }
        Ok(())
    }

    pub fn release(self) -> ([P; SIZE], [P; SIZE], D) {
        (self.rows, self.cols, self.delay)
    }
}

impl<P: OutputPin, D: DelayNs> Matrix for GpioMatrix<P, D> {
    type Error = P::Error;

    /// One full scan: each row in turn gets its columns set, lights for
    /// [`ROW_DWELL_US`], then goes dark again.
    fn show(&mut self, pattern: &Pattern) -> Result<(), Self::Error> {
        for (row, row_pin) in self.rows.iter_mut().enumerate() {
            for (col, col_pin) in self.cols.iter_mut().enumerate() {
                col_pin.set_state(PinState::from(!pattern.is_lit(row, col)))?;
            }
            row_pin.set_high()?;
            self.delay.delay_us(ROW_DWELL_US);
            row_pin.set_low()?;
        }
        Ok(())
    }
}

/// Keep `pattern` on the matrix for `duration`.
pub fn hold<M, C>(matrix: &mut M, clock: &C, pattern: &Pattern, duration: Duration) -> Result<(), M::Error>
where
    M: Matrix + ?Sized,
    C: Clock + ?Sized,
{
    try_repeat_for(clock, duration, || matrix.show(pattern))
}

/// Alternate `pattern` and [`BLANK`], `duration` each, `times` times.
pub fn blink<M, C>(
    matrix: &mut M,
    clock: &C,
    pattern: &Pattern,
    duration: Duration,
    times: usize,
) -> Result<(), M::Error>
where
    M: Matrix + ?Sized,
    C: Clock + ?Sized,
{
    for _ in 0..times {
        hold(matrix, clock, pattern, duration)?;
        hold(matrix, clock, &BLANK, duration)?;
    }
    Ok(())
}

/// Play back a Simon sequence.
///
/// Each quadrant is shown for [`DISPLAY_DURATION`], followed by
/// [`BLANK`] for [`RESET_DURATION`] so repeated quadrants stay distinct.
pub fn replay<M, C>(matrix: &mut M, clock: &C, sequence: &[Quadrant]) -> Result<(), M::Error>
where
    M: Matrix + ?Sized,
    C: Clock + ?Sized,
{
    for quadrant in sequence {
        hold(matrix, clock, quadrant.pattern(), DISPLAY_DURATION)?;
        hold(matrix, clock, &BLANK, RESET_DURATION)?;
    }
    Ok(())
}
