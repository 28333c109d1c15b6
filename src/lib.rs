pub mod config;
pub mod hex;

pub use hex::{
    distance, hexes_at_range, hexes_within_range, Cube, Direction, Error, Format, HexCoordinate,
    Hexes, Location, Offset,
};
