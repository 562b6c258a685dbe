//! 8x8 on/off bitmaps for the quadrant matrix.
//!
//! Grids are stored the way the matrix is wired: the outer index runs along
//! the joystick's x axis, the inner index along its y axis. [`Pattern::draw`]
//! turns that into screen space with +x to the right and +y up, so
//! [`QI`] appears in the top-right corner.

use embedded_graphics::{
    pixelcolor::PixelColor,
    prelude::*,
    primitives::Rectangle,
};

/// Side length of the matrix.
pub const SIZE: usize = 8;

/// Immutable 8x8 grid of LEDs, `1` = on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pattern([[u8; SIZE]; SIZE]);

impl Pattern {
    pub const fn new(cells: [[u8; SIZE]; SIZE]) -> Self {
        Self(cells)
    }

    /// Whether the LED at `row` (x axis) / `col` (y axis) is lit.
    pub const fn is_lit(&self, row: usize, col: usize) -> bool {
        self.0[row][col] != 0
    }

    pub fn lit_count(&self) -> usize {
        self.0.iter().flatten().filter(|&&cell| cell != 0).count()
    }

    /// Draw the grid as `cell`-sized squares, top-left corner at `top_left`.
    ///
    /// Every cell is painted, lit ones with `on` and the rest with `off`.
    pub fn draw<D, C>(
        &self,
        target: &mut D,
        top_left: Point,
        cell: u32,
        on: C,
        off: C,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = C>,
        C: PixelColor,
    {
        let step = cell as i32;
        for row in 0..SIZE {
            for col in 0..SIZE {
                let screen = Point::new(row as i32 * step, (SIZE - 1 - col) as i32 * step);
                let area = Rectangle::new(top_left + screen, Size::new_equal(cell));
                let color = if self.is_lit(row, col) { on } else { off };
                target.fill_solid(&area, color)?;
            }
        }
        Ok(())
    }
}

pub const QI: Pattern = Pattern::new([
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 1, 1, 1, 1],
    [0, 0, 0, 0, 1, 1, 1, 1],
    [0, 0, 0, 0, 1, 1, 1, 1],
    [0, 0, 0, 0, 1, 1, 1, 1],
]);

pub const QII: Pattern = Pattern::new([
    [0, 0, 0, 0, 1, 1, 1, 1],
    [0, 0, 0, 0, 1, 1, 1, 1],
    [0, 0, 0, 0, 1, 1, 1, 1],
    [0, 0, 0, 0, 1, 1, 1, 1],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
]);

pub const QIII: Pattern = Pattern::new([
    [1, 1, 1, 1, 0, 0, 0, 0],
    [1, 1, 1, 1, 0, 0, 0, 0],
    [1, 1, 1, 1, 0, 0, 0, 0],
    [1, 1, 1, 1, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
]);

pub const QIV: Pattern = Pattern::new([
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [1, 1, 1, 1, 0, 0, 0, 0],
    [1, 1, 1, 1, 0, 0, 0, 0],
    [1, 1, 1, 1, 0, 0, 0, 0],
    [1, 1, 1, 1, 0, 0, 0, 0],
]);

pub const BLANK: Pattern = Pattern::new([[0; SIZE]; SIZE]);

pub const FILLED: Pattern = Pattern::new([[1; SIZE]; SIZE]);

#[cfg(test)]
mod tests {
    use embedded_graphics::{
        mock_display::MockDisplay,
        pixelcolor::BinaryColor,
    };

    use super::*;

    #[test]
    fn quadrant_patterns_light_a_quarter_each() {
        for pattern in [QI, QII, QIII, QIV] {
            assert_eq!(pattern.lit_count(), 16);
        }
        assert_eq!(BLANK.lit_count(), 0);
        assert_eq!(FILLED.lit_count(), SIZE * SIZE);
    }

    #[test]
    fn quadrant_patterns_tile_the_grid() {
        for row in 0..SIZE {
            for col in 0..SIZE {
                let lit = [QI, QII, QIII, QIV]
                    .iter()
                    .filter(|p| p.is_lit(row, col))
                    .count();
                assert_eq!(lit, 1, "cell ({row}, {col})");
            }
        }
    }

    #[test]
    fn first_quadrant_draws_top_right() {
        let mut display = MockDisplay::<BinaryColor>::new();
        QI.draw(&mut display, Point::zero(), 1, BinaryColor::On, BinaryColor::Off)
            .unwrap();
        display.assert_pattern(&[
            "....####",
            "....####",
            "....####",
            "....####",
            "........",
            "........",
            "........",
            "........",
        ]);
    }

    #[test]
    fn second_quadrant_draws_top_left() {
        let mut display = MockDisplay::<BinaryColor>::new();
        QII.draw(&mut display, Point::zero(), 1, BinaryColor::On, BinaryColor::Off)
            .unwrap();
        display.assert_pattern(&[
            "####....",
            "####....",
            "####....",
            "####....",
            "........",
            "........",
            "........",
            "........",
        ]);
    }

    #[test]
    fn scaled_draw_respects_origin() {
        let mut display = MockDisplay::<BinaryColor>::new();
        QIII.draw(&mut display, Point::new(1, 1), 2, BinaryColor::On, BinaryColor::Off)
            .unwrap();
        // Bottom-left quadrant: x 1..9, y 9..17.
        assert_eq!(display.get_pixel(Point::new(1, 9)), Some(BinaryColor::On));
        assert_eq!(display.get_pixel(Point::new(8, 16)), Some(BinaryColor::On));
        assert_eq!(display.get_pixel(Point::new(9, 9)), Some(BinaryColor::Off));
        assert_eq!(display.get_pixel(Point::new(1, 8)), Some(BinaryColor::Off));
        assert_eq!(display.get_pixel(Point::new(0, 0)), None);
        assert_eq!(display.get_pixel(Point::new(17, 17)), None);
    }
}
