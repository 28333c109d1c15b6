use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};

/// Offset hex coordinates: a column and a row.
///
/// Renders as the zero-padded string `"CCRR"`, column first. Parsing accepts exactly four
/// ASCII digits.
///
/// Coordinates derived from arithmetic can leave the `0..=99` window of the string form;
/// they still render (`-1` stays `-1`, `100` stays `100`) but such strings do not parse.
///
/// Ordering is column-major, which matches the string ordering for every parseable offset.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    parse_display::Display,
    parse_display::FromStr,
    SerializeDisplay,
    DeserializeFromStr,
)]
#[display("{col:02}{row:02}")]
#[from_str(regex = r"(?P<col>[0-9]{2})(?P<row>[0-9]{2})")]
pub struct Offset {
    pub col: i32,
    pub row: i32,
}

impl Offset {
    pub const fn new(col: i32, row: i32) -> Offset {
        Offset { col, row }
    }
}

/// Cubic hex coordinates.
///
/// This is a plain triple; the `x + y + z == 0` constraint is enforced by
/// [`HexCoordinate`][super::HexCoordinate], not here.
///
/// Ordering is componentwise lexicographic: `x`, then `y`, then `z`.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    parse_display::Display,
    parse_display::FromStr,
    Serialize,
    Deserialize,
)]
#[display("({x}, {y}, {z})")]
pub struct Cube {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Cube {
    pub const fn new(x: i32, y: i32, z: i32) -> Cube {
        Cube { x, y, z }
    }

    /// `true` when the components sum to zero.
    pub fn is_valid(&self) -> bool {
        i64::from(self.x) + i64::from(self.y) + i64::from(self.z) == 0
    }
}

impl From<(i32, i32, i32)> for Cube {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Cube { x, y, z }
    }
}

impl From<Cube> for (i32, i32, i32) {
    fn from(Cube { x, y, z }: Cube) -> Self {
        (x, y, z)
    }
}
