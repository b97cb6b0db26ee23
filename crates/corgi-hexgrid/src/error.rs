//! Error types for corgi-hexgrid.
//!
//! Geometry itself never fails; these cover the parsing and validated
//! construction entry points.

use thiserror::Error;

/// Result type for corgi-hexgrid operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when building grid values from untrusted input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Hex size must be finite and strictly positive.
    #[error("invalid hex size: {0} (must be finite and > 0)")]
    InvalidHexSize(f64),

    /// A coordinate key was not of the form `"q,r"`.
    #[error("invalid hex coordinate key: {0:?}")]
    InvalidCoord(String),

    /// Unknown direction name or index.
    #[error("invalid direction: {0:?} (expected e, ne, nw, w, sw, se or 0-5)")]
    InvalidDirection(String),
}
