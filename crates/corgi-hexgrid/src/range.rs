//! Area queries: filled ranges, rings, spirals and lines.
//!
//! # Ring Structure
//!
//! - Ring 0: just the center (1 hex)
//! - Ring n > 0: the 6n hexes at distance exactly n
//!
//! A ring is walked from its East corner `center + n * East`. Side k
//! runs from corner k to corner k + 1, which is a step in direction
//! (k + 2) mod 6, so ring 1 comes out in plain direction order.
//!
//! A filled range of radius n holds 1 + 3n(n+1) hexes and is enumerated
//! column by column (q ascending, then r ascending).

use tracing::debug;

use crate::{hex_round, Direction, HexCoord};

/// Number of hexes on ring `radius`.
///
/// - Negative radius: 0
/// - Ring 0: 1 (the center)
/// - Ring n > 0: 6n
#[inline]
pub const fn hexes_in_ring_count(radius: i32) -> usize {
    if radius < 0 {
        0
    } else if radius == 0 {
        1
    } else {
        6 * radius as usize
    }
}

/// Number of hexes within `radius` steps, center included.
///
/// Formula: 1 + 3n(n+1), or 0 for a negative radius.
#[inline]
pub const fn hexes_in_range_count(radius: i32) -> usize {
    if radius < 0 {
        return 0;
    }
    let n = radius as usize;
    1 + 3 * n * (n + 1)
}

/// Every hex of a hexagon-shaped board centered on the origin.
///
/// Same set and order as `HexCoord::ORIGIN.hexes_in_range(radius)`.
pub fn generate_hex_board(radius: i32) -> Vec<HexCoord> {
    let board = HexCoord::ORIGIN.hexes_in_range(radius);
    debug!(radius = radius, cells = board.len(), "generated hex board");
    board
}

/// Iterator over the hexes of one ring.
#[derive(Debug, Clone)]
pub struct Ring {
    current: HexCoord,
    radius: i32,
    side: usize,
    step: i32,
    remaining: usize,
}

impl Ring {
    /// Ring of `radius` around `center`. Empty for a negative radius.
    pub fn new(center: HexCoord, radius: i32) -> Self {
        let start = if radius > 0 {
            center + Direction::East.offset() * radius
        } else {
            center
        };

        Self {
            current: start,
            radius,
            side: 0,
            step: 0,
            remaining: hexes_in_ring_count(radius),
        }
    }
}

impl Iterator for Ring {
    type Item = HexCoord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let hex = self.current;
        if self.remaining > 0 {
            self.current = hex + HexCoord::DIRECTIONS[(self.side + 2) % 6];
            self.step += 1;
            if self.step == self.radius {
                self.step = 0;
                self.side += 1;
            }
        }
        Some(hex)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Ring {}

impl HexCoord {
    /// All hexes within `radius` steps of this one, including itself.
    ///
    /// Ordered by q offset ascending, then r offset ascending. A negative
    /// radius yields nothing.
    pub fn hexes_in_range(&self, radius: i32) -> Vec<HexCoord> {
        if radius < 0 {
            return Vec::new();
        }
        let mut results = Vec::with_capacity(hexes_in_range_count(radius));
        for dq in -radius..=radius {
            let low = (-radius).max(-dq - radius);
            let high = radius.min(-dq + radius);
            for dr in low..=high {
                results.push(*self + HexCoord::new(dq, dr));
            }
        }
        results
    }

    /// Hexes at exactly `radius` steps, starting from the East corner.
    ///
    /// Radius 0 is just this hex; a negative radius yields nothing.
    ///
    /// Side k of the walk steps in direction (k + 2) mod 6, not k: the
    /// order is East corner, then toward Northwest, West, Southwest,
    /// Southeast, East and Northeast. Stepping in direction k from the
    /// East corner would leave the ring.
    pub fn hex_ring(&self, radius: i32) -> Vec<HexCoord> {
        self.ring_iter(radius).collect()
    }

    /// Lazy form of [`HexCoord::hex_ring`].
    pub fn ring_iter(&self, radius: i32) -> Ring {
        Ring::new(*self, radius)
    }

    /// Rings 0 through `radius` concatenated: the same hexes as
    /// [`HexCoord::hexes_in_range`], ordered by distance.
    pub fn spiral(&self, radius: i32) -> Vec<HexCoord> {
        let center = *self;
        let mut results = Vec::with_capacity(hexes_in_range_count(radius));
        results.extend((0..=radius).flat_map(|ring| center.ring_iter(ring)));
        results
    }

    /// Hexes on the straight line from this hex to `other`, both ends
    /// included; consecutive hexes are neighbors.
    pub fn line_to(&self, other: &HexCoord) -> Vec<HexCoord> {
        let steps = self.distance_to(other);
        if steps == 0 {
            return vec![*self];
        }

        // Nudge off exact edges and vertices so samples never tie
        const NUDGE_Q: f64 = 1e-6;
        const NUDGE_R: f64 = 2e-6;
        let (aq, ar) = (f64::from(self.q) + NUDGE_Q, f64::from(self.r) + NUDGE_R);
        let (bq, br) = (f64::from(other.q) + NUDGE_Q, f64::from(other.r) + NUDGE_R);

        (0..=steps)
            .map(|i| {
                let t = i as f64 / steps as f64;
                hex_round(aq + (bq - aq) * t, ar + (br - ar) * t)
            })
            .collect()
    }
}
