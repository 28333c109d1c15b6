//! Hexagonal grid coordinates.
//!
//! Cells are addressed in two equivalent ways:
//!
//! - offset coordinates: a column and a row, written as the four digit string `"CCRR"`,
//!   as printed on Traveller / Cepheus sector maps.
//! - cubic coordinates: a triple `(x, y, z)` with `x + y + z == 0`, used for arithmetic
//!   and distance.
//!
//! The offset layout is "odd-q": columns are vertical, and odd columns are shoved down
//! by half a hex. Uses techniques from [this reference](https://www.redblobgames.com/grids/hexagons/).

pub mod coordinate;
pub mod direction;
pub mod location;
pub mod offset;
pub mod range;

pub use coordinate::{HexCoordinate, Ring};
pub use direction::Direction;
pub use location::Location;
pub use offset::{Cube, Offset};
pub use range::{distance, hexes_at_range, hexes_within_range, Format, Hexes};

/// Errors produced while constructing or manipulating hex coordinates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An offset string was not exactly four decimal digits, or a format selector was not recognized.
    #[error("invalid format: {0:?}")]
    InvalidFormat(String),
    /// The components do not sum to zero, or the offset row of the cell overflows an `i32`.
    #[error("invalid cubic coordinates ({x}, {y}, {z})")]
    InvalidCoordinates { x: i32, y: i32, z: i32 },
    /// Cubic coordinates need exactly three components; this is how many were provided.
    #[error("expected 3 cubic components, found {0}")]
    InvalidInput(usize),
    #[error("invalid direction {0}: must be in 0..=5")]
    InvalidDirection(i64),
    #[error("cannot scale a hex coordinate by {0}")]
    TypeMismatch(String),
    /// Some cell involved in the operation has a component outside the `i32` range.
    #[error("{0} cannot be represented with 32-bit coordinates")]
    Unrepresentable(String),
}
