//! Corgi Hex Grid
//!
//! Geometry for the hexagonal game board: axial coordinates, pixel
//! projection, distance, adjacency, ranged area queries and ring traversal.
//!
//! # Coordinate System
//!
//! Coordinates are axial `(q, r)` with an implicit third cube axis
//! `s = -q - r`, so `q + r + s == 0` always holds. The six neighbor
//! directions are indexed 0-5 starting East:
//!
//! | index | direction | offset    |
//! |-------|-----------|-----------|
//! | 0     | East      | (+1,  0)  |
//! | 1     | Northeast | (+1, -1)  |
//! | 2     | Northwest | ( 0, -1)  |
//! | 3     | West      | (-1,  0)  |
//! | 4     | Southwest | (-1, +1)  |
//! | 5     | Southeast | ( 0, +1)  |
//!
//! # Pixel Space
//!
//! `HexCoord::to_pixel` and [`pixel_to_hex`] are exact inverses for hex
//! centers; arbitrary pixels are snapped to the nearest hex by
//! [`hex_round`].
//!
//! ```
//! use corgi_hexgrid::{HexCoord, pixel_to_hex};
//!
//! let hex = HexCoord::new(2, -1);
//! let center = hex.to_pixel(32.0, 100.0, 50.0);
//! assert_eq!(pixel_to_hex(center.x, center.y, 32.0, 100.0, 50.0), hex);
//! ```
//!
//! All functions are pure and every type is `Copy`, so the whole crate is
//! freely shareable across threads.

mod adjacency;
mod direction;
pub mod error;
mod hex;
mod pixel;
mod range;

pub use adjacency::{are_neighbors, direction_to, opposite_hex};
pub use direction::Direction;
pub use error::{Error, Result};
pub use hex::HexCoord;
pub use pixel::{hex_round, pixel_to_hex, Layout, Point};
pub use range::{generate_hex_board, hexes_in_range_count, hexes_in_ring_count, Ring};

/// Number of neighbors of every hex (and number of directions).
pub const DIRECTION_COUNT: usize = 6;

// The direction table and the enum must agree on its size
const _: () = assert!(HexCoord::DIRECTIONS.len() == DIRECTION_COUNT);
const _: () = assert!(Direction::ALL.len() == DIRECTION_COUNT);
