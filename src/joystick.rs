//! Analog joystick input.

use crate::config::{
    ADC_MAX,
    JOYSTICK_BOUND,
};

/// Centered joystick reading, each axis in `-JOYSTICK_BOUND..=JOYSTICK_BOUND`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Displacement {
    pub x: i16,
    pub y: i16,
}

impl Displacement {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// Map raw ADC readings (`0..=ADC_MAX`) onto the centered range.
    ///
    /// Readings above `ADC_MAX` are clamped.
    pub const fn from_raw(raw_x: u16, raw_y: u16) -> Self {
        Self {
            x: center(raw_x),
            y: center(raw_y),
        }
    }
}

const fn center(raw: u16) -> i16 {
    let raw = (if raw > ADC_MAX { ADC_MAX } else { raw }) as i32;
    let bound = JOYSTICK_BOUND as i32;
    (raw * 2 * bound / ADC_MAX as i32 - bound) as i16
}

/// Source of joystick readings.
pub trait Joystick {
    type Error;

    fn read(&mut self) -> Result<Displacement, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quadrant::Position;

    #[test]
    fn raw_endpoints_hit_the_bounds() {
        assert_eq!(Displacement::from_raw(0, ADC_MAX), Displacement::new(-512, 512));
    }

    #[test]
    fn raw_center_is_near_zero() {
        let d = Displacement::from_raw(511, 512);
        assert!(d.x.abs() <= 1, "{d:?}");
        assert!(d.y.abs() <= 1, "{d:?}");
    }

    #[test]
    fn raw_over_range_is_clamped() {
        assert_eq!(Displacement::from_raw(4095, 4095), Displacement::new(512, 512));
    }

    struct Scripted<'a>(core::slice::Iter<'a, (u16, u16)>);

    impl Joystick for Scripted<'_> {
        type Error = ();

        fn read(&mut self) -> Result<Displacement, ()> {
            self.0
                .next()
                .map(|&(x, y)| Displacement::from_raw(x, y))
                .ok_or(())
        }
    }

    #[test]
    fn readings_drive_position() {
        let script = [(1023, 512), (512, 1023), (0, 512), (512, 0)];
        let mut stick = Scripted(script.iter());
        let mut position = Position::default();
        let mut seen = [0; 4];
        for number in &mut seen {
            let d = stick.read().unwrap();
            position.step(d.x, d.y);
            *number = position.number();
        }
        assert_eq!(seen, [4, 1, 2, 3]);
        assert_eq!(stick.read(), Err(()));
    }
}
