//! Conversion between hex coordinates and continuous pixel space.
//!
//! The projection is a fixed affine transform scaled by the hex size
//! (circumradius) and shifted by a pixel offset:
//!
//! ```text
//! x = size * (3/2 * q)                    + offset_x
//! y = size * (sqrt(3)/2 * q + sqrt(3) * r) + offset_y
//! ```
//!
//! The inverse maps a pixel to fractional axial coordinates, which
//! [`hex_round`] snaps to the nearest hex. Both directions must change
//! together; the round trip over hex centers is covered by tests.

use std::fmt;

use tracing::warn;

use crate::error::{Error, Result};
use crate::HexCoord;

const SQRT_3: f64 = 1.732_050_807_568_877_2_f64;

/// Forward and inverse matrices, row-major `[a, b, c, d]` acting on
/// `(q, r)` and `(x, y)` respectively.
const ORIENTATION: ([f64; 4], [f64; 4]) = (
    [3. / 2., 0., SQRT_3 / 2., SQRT_3],
    [2. / 3., 0., -1. / 3., SQRT_3 / 3.],
);

/// A point in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl HexCoord {
    /// Center of this hex in pixel space.
    ///
    /// `hex_size` is the hexagon's circumradius in pixels. Zero, negative
    /// or non-finite sizes are not rejected; they simply produce a
    /// degenerate projection.
    pub fn to_pixel(&self, hex_size: f64, offset_x: f64, offset_y: f64) -> Point {
        let [a, b, c, d] = ORIENTATION.0;
        let q = f64::from(self.q);
        let r = f64::from(self.r);
        Point {
            x: hex_size * (a * q + b * r) + offset_x,
            y: hex_size * (c * q + d * r) + offset_y,
        }
    }
}

/// Hex containing the given pixel. Inverse of [`HexCoord::to_pixel`]
/// when called with the same size and offsets.
pub fn pixel_to_hex(x: f64, y: f64, hex_size: f64, offset_x: f64, offset_y: f64) -> HexCoord {
    let [a, b, c, d] = ORIENTATION.1;
    let x = x - offset_x;
    let y = y - offset_y;
    let q = (a * x + b * y) / hex_size;
    let r = (c * x + d * y) / hex_size;
    hex_round(q, r)
}

/// Round fractional axial coordinates to the nearest hex.
///
/// Each cube axis is rounded on its own, then the axis that moved the
/// most is rebuilt from the other two so that q + r + s == 0 holds
/// exactly. Ties prefer rebuilding q, then r; otherwise s is the one
/// dropped.
pub fn hex_round(q: f64, r: f64) -> HexCoord {
    let s = -q - r;

    let mut rq = q.round();
    let mut rr = r.round();
    let rs = s.round();

    let q_diff = (rq - q).abs();
    let r_diff = (rr - r).abs();
    let s_diff = (rs - s).abs();

    if q_diff > r_diff && q_diff > s_diff {
        rq = -rr - rs;
    } else if r_diff > s_diff {
        rr = -rq - rs;
    }

    HexCoord::new(rq as i32, rr as i32)
}

/// Hex size and pixel origin bundled together, so renderers and
/// hit-testing share one set of parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    /// Circumradius of every hex, in pixels
    pub size: f64,
    /// Pixel position of the origin hex's center
    pub origin: Point,
}

impl Layout {
    /// Create a layout without validating the size.
    pub const fn new(size: f64, origin: Point) -> Self {
        Self { size, origin }
    }

    /// Create a layout, rejecting sizes that would degenerate the mapping.
    pub fn try_new(size: f64, origin: Point) -> Result<Self> {
        if !size.is_finite() || size <= 0.0 {
            warn!(size = size, "rejecting hex layout with unusable size");
            return Err(Error::InvalidHexSize(size));
        }
        Ok(Self::new(size, origin))
    }

    pub fn hex_to_pixel(&self, hex: HexCoord) -> Point {
        hex.to_pixel(self.size, self.origin.x, self.origin.y)
    }

    pub fn pixel_to_hex(&self, point: Point) -> HexCoord {
        pixel_to_hex(point.x, point.y, self.size, self.origin.x, self.origin.y)
    }

    /// The six vertices of a hex, starting at angle 0 (+x) and turning
    /// in 60 degree steps toward +y.
    ///
    /// Neighboring hexes share two vertices.
    pub fn corners(&self, hex: HexCoord) -> [Point; 6] {
        let center = self.hex_to_pixel(hex);
        let h = self.size * SQRT_3 / 2.;
        let half = self.size / 2.;
        [
            Point::new(center.x + self.size, center.y),
            Point::new(center.x + half, center.y + h),
            Point::new(center.x - half, center.y + h),
            Point::new(center.x - self.size, center.y),
            Point::new(center.x - half, center.y - h),
            Point::new(center.x + half, center.y - h),
        ]
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(1.0, Point::default())
    }
}
