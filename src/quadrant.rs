//! Joystick position tracking on a 2x2 grid of quadrants.

use crate::{
    config::MINIMUM_JOYSTICK_POSITION,
    pattern::{
        Pattern,
        QI,
        QII,
        QIII,
        QIV,
    },
};

/// Which half of each axis the cursor sits in.
///
/// `x` is 1 on the right half, `y` is 1 on the upper half. Both fields are
/// always 0 or 1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// Build a position, treating any non-zero component as 1.
    pub const fn new(x: u8, y: u8) -> Self {
        Self {
            x: (x != 0) as u8,
            y: (y != 0) as u8,
        }
    }

    pub const fn x(&self) -> u8 {
        self.x
    }

    pub const fn y(&self) -> u8 {
        self.y
    }

    /// Nudge the position with a centered joystick reading.
    ///
    /// A displacement beyond `+MINIMUM_JOYSTICK_POSITION` moves that axis
    /// toward 1, one beyond `-MINIMUM_JOYSTICK_POSITION` toward 0. Readings
    /// inside the dead zone leave the axis alone. The axes are independent.
    pub fn step(&mut self, x_pos: i16, y_pos: i16) {
        self.x = step_axis(self.x, x_pos);
        self.y = step_axis(self.y, y_pos);
    }

    pub const fn quadrant(&self) -> Quadrant {
        match (self.x, self.y) {
            (1, 1) => Quadrant::First,
            (0, 1) => Quadrant::Second,
            (0, _) => Quadrant::Third,
            _ => Quadrant::Fourth,
        }
    }

    /// Cartesian quadrant number, 1 to 4.
    pub const fn number(&self) -> u8 {
        self.quadrant().number()
    }
}

const fn step_axis(current: u8, displacement: i16) -> u8 {
    if displacement > MINIMUM_JOYSTICK_POSITION {
        1
    } else if displacement < -MINIMUM_JOYSTICK_POSITION {
        0
    } else {
        current
    }
}

/// Move `position` according to a centered joystick reading.
///
/// See [`Position::step`].
pub fn move_quadrant(position: &mut Position, x_pos: i16, y_pos: i16) {
    position.step(x_pos, y_pos);
}

/// Quadrant number (1-4) of `position`.
pub const fn quadrant_number(position: &Position) -> u8 {
    position.number()
}

/// One of the four regions of the matrix, numbered the Cartesian way.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Quadrant {
    First = 1,
    Second = 2,
    Third = 3,
    Fourth = 4,
}

impl Quadrant {
    pub const ALL: [Self; 4] = [Self::First, Self::Second, Self::Third, Self::Fourth];

    pub const fn number(self) -> u8 {
        self as u8
    }

    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::First),
            2 => Some(Self::Second),
            3 => Some(Self::Third),
            4 => Some(Self::Fourth),
            _ => None,
        }
    }

    /// The bitmap that lights this quadrant.
    pub const fn pattern(self) -> &'static Pattern {
        match self {
            Self::First => &QI,
            Self::Second => &QII,
            Self::Third => &QIII,
            Self::Fourth => &QIV,
        }
    }

    pub const fn position(self) -> Position {
        match self {
            Self::First => Position::new(1, 1),
            Self::Second => Position::new(0, 1),
            Self::Third => Position::new(0, 0),
            Self::Fourth => Position::new(1, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::JOYSTICK_BOUND;

    const ALL_POSITIONS: [Position; 4] = [
        Position::new(0, 0),
        Position::new(0, 1),
        Position::new(1, 0),
        Position::new(1, 1),
    ];

    #[test]
    fn quadrant_numbers_follow_cartesian_convention() {
        assert_eq!(quadrant_number(&Position::new(1, 1)), 1);
        assert_eq!(quadrant_number(&Position::new(0, 1)), 2);
        assert_eq!(quadrant_number(&Position::new(0, 0)), 3);
        assert_eq!(quadrant_number(&Position::new(1, 0)), 4);
    }

    #[test]
    fn every_position_has_a_valid_number() {
        for position in ALL_POSITIONS {
            assert!((1..=4).contains(&position.number()));
        }
    }

    #[test]
    fn push_right_from_origin() {
        let mut position = Position::new(0, 0);
        move_quadrant(&mut position, 300, 0);
        assert_eq!(position, Position::new(1, 0));
        assert_eq!(quadrant_number(&position), 4);
    }

    #[test]
    fn push_down_left_from_first_quadrant() {
        let mut position = Position::new(1, 1);
        move_quadrant(&mut position, -300, -300);
        assert_eq!(position, Position::new(0, 0));
        assert_eq!(quadrant_number(&position), 3);
    }

    #[test]
    fn small_displacement_is_ignored() {
        let mut position = Position::new(0, 0);
        move_quadrant(&mut position, 150, 150);
        assert_eq!(position, Position::new(0, 0));
    }

    #[test]
    fn threshold_itself_is_dead_zone() {
        for start in ALL_POSITIONS {
            for reading in [
                -MINIMUM_JOYSTICK_POSITION,
                0,
                MINIMUM_JOYSTICK_POSITION,
            ] {
                let mut position = start;
                position.step(reading, reading);
                assert_eq!(position, start);
            }
        }
    }

    #[test]
    fn axes_move_independently() {
        let mut position = Position::new(0, 1);
        position.step(201, 0);
        assert_eq!(position, Position::new(1, 1));
        position.step(0, -201);
        assert_eq!(position, Position::new(1, 0));
    }

    #[test]
    fn position_stays_clamped() {
        let readings = [
            -JOYSTICK_BOUND,
            -201,
            -200,
            -1,
            0,
            1,
            200,
            201,
            JOYSTICK_BOUND,
        ];
        for start in ALL_POSITIONS {
            for x in readings {
                for y in readings {
                    let mut position = start;
                    position.step(x, y);
                    assert!(position.x() <= 1 && position.y() <= 1);
                    // Repeating the same push never overshoots.
                    position.step(x, y);
                    assert!(position.x() <= 1 && position.y() <= 1);
                }
            }
        }
    }

    #[test]
    fn new_normalises_components() {
        assert_eq!(Position::new(7, 0), Position::new(1, 0));
    }

    #[test]
    fn quadrant_round_trips_through_position_and_number() {
        for quadrant in Quadrant::ALL {
            assert_eq!(quadrant.position().quadrant(), quadrant);
            assert_eq!(Quadrant::from_number(quadrant.number()), Some(quadrant));
        }
        assert_eq!(Quadrant::from_number(0), None);
        assert_eq!(Quadrant::from_number(5), None);
    }

    #[test]
    fn quadrant_patterns_match_tables() {
        assert_eq!(Quadrant::First.pattern(), &QI);
        assert_eq!(Quadrant::Third.pattern(), &QIII);
    }
}
