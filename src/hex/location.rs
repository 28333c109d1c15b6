use super::{
    coordinate::HexCoordinate,
    offset::{Cube, Offset},
    Error,
};

/// Anything which can name a cell: an offset string, a cubic triple, or a coordinate.
///
/// Functions which accept `impl Into<Location>` can be called with any of
/// `"2411"`, `(24, -23, -1)`, a [`Cube`], an [`Offset`] or a [`HexCoordinate`].
/// The location is validated when it is converted into a [`HexCoordinate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Location<'a> {
    OffsetStr(&'a str),
    Offset(Offset),
    Cube(Cube),
    Hex(HexCoordinate),
}

impl<'a> From<&'a str> for Location<'a> {
    fn from(s: &'a str) -> Self {
        Location::OffsetStr(s)
    }
}

impl<'a> From<&'a String> for Location<'a> {
    fn from(s: &'a String) -> Self {
        Location::OffsetStr(s.as_str())
    }
}

impl From<(i32, i32, i32)> for Location<'_> {
    fn from(triple: (i32, i32, i32)) -> Self {
        Location::Cube(triple.into())
    }
}

impl From<Cube> for Location<'_> {
    fn from(cube: Cube) -> Self {
        Location::Cube(cube)
    }
}

impl From<Offset> for Location<'_> {
    fn from(offset: Offset) -> Self {
        Location::Offset(offset)
    }
}

impl From<HexCoordinate> for Location<'_> {
    fn from(hex: HexCoordinate) -> Self {
        Location::Hex(hex)
    }
}

impl From<&HexCoordinate> for Location<'_> {
    fn from(hex: &HexCoordinate) -> Self {
        Location::Hex(*hex)
    }
}

impl TryFrom<Location<'_>> for HexCoordinate {
    type Error = Error;

    fn try_from(location: Location<'_>) -> Result<Self, Self::Error> {
        match location {
            Location::OffsetStr(s) => HexCoordinate::from_offset_string(s),
            Location::Offset(offset) => HexCoordinate::from_offset(offset),
            Location::Cube(cube) => HexCoordinate::try_from(cube),
            Location::Hex(hex) => Ok(HexCoordinate::from_coordinate(&hex)),
        }
    }
}
