//! Hexagonal coordinate system using axial coordinates.
//!
//! Axial coordinates use two axes (q, r) at 60 degrees, with an implicit
//! third axis s = -q - r. This gives us efficient storage (2 values instead
//! of 3) while maintaining the hexagonal symmetry.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use crate::error::Error;

/// A position on the hexagonal board.
///
/// `q` is the column axis (points right), `r` the row axis (points down
/// and to the left). The implicit third axis is s = -q - r.
///
/// Equality, hashing and ordering look at `q` and `r` only; `s` follows
/// from them.
///
/// Arithmetic wraps at the `i32` bounds in every build profile, so a
/// neighbor of `(i32::MAX, 0)` is `(i32::MIN, 0)` rather than a panic.
/// Geometry is only meaningful while `q`, `r` and `s` all fit in `i32`;
/// [`HexCoord::is_valid`] reports when `s` does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HexCoord {
    /// Column coordinate
    pub q: i32,
    /// Row coordinate
    pub r: i32,
}

impl HexCoord {
    /// Origin of the coordinate system.
    pub const ORIGIN: Self = Self { q: 0, r: 0 };

    /// The six neighbor offsets, indexed by direction (0 = East, then
    /// Northeast, Northwest, West, Southwest, Southeast).
    pub const DIRECTIONS: [Self; 6] = [
        Self { q: 1, r: 0 },  // East
        Self { q: 1, r: -1 }, // Northeast
        Self { q: 0, r: -1 }, // Northwest
        Self { q: -1, r: 0 }, // West
        Self { q: -1, r: 1 }, // Southwest
        Self { q: 0, r: 1 },  // Southeast
    ];

    /// Create a new coordinate.
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Compute the implicit third axis: s = -q - r.
    pub const fn s(&self) -> i32 {
        self.q.wrapping_neg().wrapping_sub(self.r)
    }

    /// Check the cube constraint q + r + s == 0.
    ///
    /// Always true for coordinates within the representable board; false
    /// only when `s` would not fit in an `i32`.
    pub fn is_valid(&self) -> bool {
        match self.q.checked_add(self.r).and_then(i32::checked_neg) {
            Some(s) => i64::from(self.q) + i64::from(self.r) + i64::from(s) == 0,
            None => false,
        }
    }

    /// Number of single steps between two hexes.
    ///
    /// max(|dq|, |dr|, |ds|) where ds = -dq - dr
    pub fn distance_to(&self, other: &Self) -> u64 {
        let dq = i64::from(self.q) - i64::from(other.q);
        let dr = i64::from(self.r) - i64::from(other.r);
        (dq.unsigned_abs() + (dq + dr).unsigned_abs() + dr.unsigned_abs()) / 2
    }

    /// Distance from the origin (the ring this hex sits on).
    pub fn length(&self) -> u64 {
        self.distance_to(&Self::ORIGIN)
    }

    /// Neighbor in the given direction.
    ///
    /// Any integer is accepted and wrapped into 0..6, so -1 is Southeast
    /// and 6 is East again.
    pub fn neighbor(&self, direction: i32) -> Self {
        *self + Self::DIRECTIONS[direction.rem_euclid(6) as usize]
    }

    /// All six neighbors in direction order (East first).
    pub fn neighbors(&self) -> [Self; 6] {
        Self::DIRECTIONS.map(|d| *self + d)
    }

    /// Lookup key of the form `"q,r"`.
    ///
    /// Unlike `Display`, this is the canonical key for string-keyed board
    /// storage and can be parsed back with `str::parse`.
    pub fn to_hash(&self) -> String {
        format!("{},{}", self.q, self.r)
    }
}

impl Add for HexCoord {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            q: self.q.wrapping_add(other.q),
            r: self.r.wrapping_add(other.r),
        }
    }
}

impl Sub for HexCoord {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            q: self.q.wrapping_sub(other.q),
            r: self.r.wrapping_sub(other.r),
        }
    }
}

impl Neg for HexCoord {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            q: self.q.wrapping_neg(),
            r: self.r.wrapping_neg(),
        }
    }
}

impl Mul<i32> for HexCoord {
    type Output = Self;

    #[inline]
    fn mul(self, k: i32) -> Self {
        Self {
            q: self.q.wrapping_mul(k),
            r: self.r.wrapping_mul(k),
        }
    }
}

impl fmt::Display for HexCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.q, self.r)
    }
}

impl FromStr for HexCoord {
    type Err = Error;

    /// Parse a `"q,r"` key as produced by [`HexCoord::to_hash`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidCoord(s.to_string());
        let (q, r) = s.split_once(',').ok_or_else(invalid)?;
        let q = q.trim().parse().map_err(|_| invalid())?;
        let r = r.trim().parse().map_err(|_| invalid())?;
        Ok(Self { q, r })
    }
}
