//! Distances and range queries over any [`Location`].

use super::{
    coordinate::HexCoordinate,
    location::Location,
    offset::{Cube, Offset},
    Error,
};
use itertools::Itertools;
use serde_with::{DeserializeFromStr, SerializeDisplay};

/// Output representation of a range query.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    parse_display::Display,
    parse_display::FromStr,
    SerializeDisplay,
    DeserializeFromStr,
)]
#[display(style = "snake_case")]
pub enum Format {
    /// `"CCRR"` offset strings
    #[default]
    Offset,
    /// `(x, y, z)` cubic triples
    Cubic,
}

impl TryFrom<&str> for Format {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse().map_err(|_| Error::InvalidFormat(s.to_owned()))
    }
}

/// Sorted, deduplicated result of a range query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Hexes {
    Offset(Vec<Offset>),
    Cubic(Vec<Cube>),
}

impl Hexes {
    fn collect(format: Format, hexes: impl Iterator<Item = HexCoordinate>) -> Hexes {
        match format {
            Format::Offset => {
                Hexes::Offset(hexes.map(|hex| hex.offset()).sorted().dedup().collect())
            }
            Format::Cubic => Hexes::Cubic(hexes.map(|hex| hex.cube()).sorted().dedup().collect()),
        }
    }

    pub fn format(&self) -> Format {
        match self {
            Hexes::Offset(_) => Format::Offset,
            Hexes::Cubic(_) => Format::Cubic,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Hexes::Offset(offsets) => offsets.len(),
            Hexes::Cubic(cubes) => cubes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Render each cell in this result's format.
    pub fn to_strings(&self) -> Vec<String> {
        match self {
            Hexes::Offset(offsets) => offsets.iter().map(ToString::to_string).collect(),
            Hexes::Cubic(cubes) => cubes.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Number of steps between two locations.
///
/// Fails if either location does not name a valid cell.
pub fn distance<'a, 'b>(
    a: impl Into<Location<'a>>,
    b: impl Into<Location<'b>>,
) -> Result<u32, Error> {
    let a = HexCoordinate::try_from(a.into())?;
    let b = HexCoordinate::try_from(b.into())?;
    Ok(a.distance(&b))
}

/// Every cell within `dist` steps of `center`, `center` included.
///
/// The result holds `3 * dist * (dist + 1) + 1` cells, sorted in `format`'s natural order.
/// Fails with [`Error::Unrepresentable`] if any of them lies outside the `i32` range.
pub fn hexes_within_range<'a>(
    center: impl Into<Location<'a>>,
    dist: u32,
    format: Format,
) -> Result<Hexes, Error> {
    let center = HexCoordinate::try_from(center.into())?;
    tracing::trace!(%center, dist, %format, "enumerating hexes within range");
    Ok(Hexes::collect(format, center.within_range(dist)?))
}

/// Every cell exactly `dist` steps from `center`.
///
/// The result holds `6 * dist` cells, sorted in `format`'s natural order. At distance `0`
/// it holds only `center`. Fails like [`hexes_within_range`].
pub fn hexes_at_range<'a>(
    center: impl Into<Location<'a>>,
    dist: u32,
    format: Format,
) -> Result<Hexes, Error> {
    let center = HexCoordinate::try_from(center.into())?;
    tracing::trace!(%center, dist, %format, "enumerating hexes at range");
    Ok(Hexes::collect(format, center.ring(dist)?))
}
