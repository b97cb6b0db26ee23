//! Relations between pairs of hexes.
//!
//! These are the only geometry helpers with a "not applicable" outcome:
//! when the two hexes are not adjacent there is no direction and no
//! opposite hex, reported as `None`.

use crate::{Direction, HexCoord};

/// Direction of the single step from `from` to `to`, or `None` when the
/// two hexes are not neighbors.
pub fn direction_to(from: HexCoord, to: HexCoord) -> Option<Direction> {
    let diff = to - from;
    Direction::ALL.into_iter().find(|d| d.offset() == diff)
}

/// Check if two coordinates are neighbors.
pub fn are_neighbors(a: HexCoord, b: HexCoord) -> bool {
    direction_to(a, b).is_some()
}

/// Reflect `reference` through `center`: the neighbor of `center` on the
/// far side from `reference`.
///
/// Returns `None` when `reference` is not adjacent to `center`.
pub fn opposite_hex(center: HexCoord, reference: HexCoord) -> Option<HexCoord> {
    let toward_reference = direction_to(center, reference)?;
    Some(center + toward_reference.opposite())
}
