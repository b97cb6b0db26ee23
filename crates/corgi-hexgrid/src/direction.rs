use std::fmt;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

use crate::error::Error;
use crate::HexCoord;

/// One of the six neighbor directions, numbered clockwise from East as
/// seen in the direction table of [`HexCoord::DIRECTIONS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Direction {
    East = 0,
    Northeast = 1,
    Northwest = 2,
    West = 3,
    Southwest = 4,
    Southeast = 5,
}

impl Direction {
    /// Every direction in index order.
    pub const ALL: [Direction; 6] = [
        Direction::East,
        Direction::Northeast,
        Direction::Northwest,
        Direction::West,
        Direction::Southwest,
        Direction::Southeast,
    ];

    /// Direction for any integer index, wrapped into 0..6.
    pub fn from_index(index: i32) -> Self {
        Self::ALL[index.rem_euclid(6) as usize]
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Axial offset of a single step in this direction.
    pub const fn offset(self) -> HexCoord {
        HexCoord::DIRECTIONS[self as usize]
    }

    /// The antipodal direction (three steps around).
    pub const fn opposite(self) -> Self {
        Self::ALL[(self as usize + 3) % 6]
    }

    /// Next direction in index order.
    pub const fn rotate_clockwise(self) -> Self {
        Self::ALL[(self as usize + 1) % 6]
    }

    /// Previous direction in index order.
    pub const fn rotate_counter_clockwise(self) -> Self {
        Self::ALL[(self as usize + 5) % 6]
    }

    /// Short lowercase name: `e`, `ne`, `nw`, `w`, `sw`, `se`.
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Direction::East => "e",
            Direction::Northeast => "ne",
            Direction::Northwest => "nw",
            Direction::West => "w",
            Direction::Southwest => "sw",
            Direction::Southeast => "se",
        }
    }
}

impl From<Direction> for usize {
    fn from(direction: Direction) -> Self {
        direction.index()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

impl FromStr for Direction {
    type Err = Error;

    /// Accepts an abbreviation (`e`, `ne`, ...), a full name
    /// (case-insensitive) or an index in 0..6.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        if let Some(direction) = Self::ALL
            .into_iter()
            .find(|d| d.abbreviation() == name || format!("{:?}", d).to_ascii_lowercase() == name)
        {
            return Ok(direction);
        }

        match name.parse::<usize>() {
            Ok(index) if index < Self::ALL.len() => Ok(Self::ALL[index]),
            _ => Err(Error::InvalidDirection(s.to_string())),
        }
    }
}

impl AddAssign<Direction> for HexCoord {
    fn add_assign(&mut self, rhs: Direction) {
        *self = *self + rhs.offset();
    }
}

impl Add<Direction> for HexCoord {
    type Output = HexCoord;

    fn add(mut self, rhs: Direction) -> Self::Output {
        self += rhs;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_index_wraps() {
        assert_eq!(Direction::from_index(0), Direction::East);
        assert_eq!(Direction::from_index(5), Direction::Southeast);
        assert_eq!(Direction::from_index(6), Direction::East);
        assert_eq!(Direction::from_index(-1), Direction::Southeast);
        assert_eq!(Direction::from_index(-9), Direction::West);
    }

    #[test]
    fn opposite_is_three_steps_around() {
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d);
            assert_eq!(d.offset() + d.opposite().offset(), HexCoord::ORIGIN);
        }
        assert_eq!(Direction::East.opposite(), Direction::West);
        assert_eq!(Direction::Northeast.opposite(), Direction::Southwest);
    }

    #[test]
    fn rotation_cycles() {
        let mut d = Direction::East;
        for _ in 0..6 {
            d = d.rotate_clockwise();
        }
        assert_eq!(d, Direction::East);
        assert_eq!(Direction::East.rotate_counter_clockwise(), Direction::Southeast);
        assert_eq!(Direction::Southeast.rotate_clockwise(), Direction::East);
    }

    #[test]
    fn add_direction_steps_once() {
        let start = HexCoord::new(2, 2);
        for d in Direction::ALL {
            assert_eq!(start + d, start.neighbor(d.index() as i32));
        }
    }

    #[test]
    fn parse_names_and_indices() {
        assert_eq!("e".parse(), Ok(Direction::East));
        assert_eq!("NW".parse(), Ok(Direction::Northwest));
        assert_eq!("southwest".parse(), Ok(Direction::Southwest));
        assert_eq!("5".parse(), Ok(Direction::Southeast));
        for d in Direction::ALL {
            assert_eq!(d.to_string().parse(), Ok(d));
        }
    }

    #[test]
    fn parse_rejects_unknown() {
        assert_eq!("n".parse::<Direction>(), Err(Error::InvalidDirection("n".into())));
        assert_eq!("6".parse::<Direction>(), Err(Error::InvalidDirection("6".into())));
        assert_eq!("-1".parse::<Direction>(), Err(Error::InvalidDirection("-1".into())));
    }
}
