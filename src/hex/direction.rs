use super::{offset::Cube, Error};

/// Direction in a hexagonal coordinate system.
///
/// Assumes flat-topped hexes in columns, with rows counting downward, as on a sector map.
/// Each direction has an index in `0..=5`; see [`Direction::index`].
///
/// ```text
///      0
///   1     5
///      C
///   2     4
///      3
/// ```
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    parse_display::Display,
    parse_display::FromStr,
)]
pub enum Direction {
    #[display("n")]
    North,
    #[display("nw")]
    Northwest,
    #[display("sw")]
    Southwest,
    #[display("s")]
    South,
    #[display("se")]
    Southeast,
    #[display("ne")]
    Northeast,
}

impl Direction {
    /// Iterate through all `Direction`s in index order, starting at `North`.
    pub fn iter() -> impl Iterator<Item = Direction> {
        std::iter::successors(Some(Direction::North), |direction| {
            use Direction::*;

            match direction {
                North => Some(Northwest),
                Northwest => Some(Southwest),
                Southwest => Some(South),
                South => Some(Southeast),
                Southeast => Some(Northeast),
                Northeast => None,
            }
        })
    }

    /// Index of this direction, `0..=5`.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Unit vector of this direction in cubic coordinates.
    pub const fn vector(self) -> Cube {
        match self {
            Direction::North => Cube::new(0, 1, -1),
            Direction::Northwest => Cube::new(-1, 1, 0),
            Direction::Southwest => Cube::new(-1, 0, 1),
            Direction::South => Cube::new(0, -1, 1),
            Direction::Southeast => Cube::new(1, -1, 0),
            Direction::Northeast => Cube::new(1, 0, -1),
        }
    }
}

impl TryFrom<i64> for Direction {
    type Error = Error;

    fn try_from(index: i64) -> Result<Self, Self::Error> {
        usize::try_from(index)
            .ok()
            .and_then(|index| Direction::iter().nth(index))
            .ok_or(Error::InvalidDirection(index))
    }
}

impl From<Direction> for usize {
    fn from(direction: Direction) -> usize {
        direction.index()
    }
}
