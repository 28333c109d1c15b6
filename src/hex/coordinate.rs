use super::{
    direction::Direction,
    offset::{Cube, Offset},
    Error,
};
use itertools::Itertools;
use num::{Integer, ToPrimitive};
use serde::{Deserialize, Serialize};
use std::{
    cmp::Ordering,
    fmt, hash,
    ops::{Add, AddAssign, Mul, Neg, Sub},
    str::FromStr,
};

/// A single cell of a hex grid.
///
/// Holds both the offset and the cubic view of the cell; they are kept consistent by
/// construction, and the cubic view always satisfies `x + y + z == 0`.
///
/// Entry points:
///
/// - [`HexCoordinate::from_offset_string`] (or `str::parse`) for `"CCRR"` strings
/// - [`HexCoordinate::from_cubic`] for cubic triples
/// - [`HexCoordinate::from_offset`] for an already parsed [`Offset`]
///
/// Equality and hashing use the cubic view. Ordering is by `(col, row)`.
///
/// Arithmetic happens in cubic space, where the lattice is closed under integer
/// combination; the offset view of the result is re-derived.
///
/// ## Panics
///
/// The arithmetic operators overflow the way `i32` arithmetic does: they panic in debug
/// builds when a component of the result does not fit. [`HexCoordinate::checked_add`],
/// [`HexCoordinate::checked_sub`] and [`HexCoordinate::checked_scale`] return `None`
/// instead.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
#[serde(into = "Cube", try_from = "Cube")]
pub struct HexCoordinate {
    offset: Offset,
    cube: Cube,
}

/// Offset view of a valid cube, or `None` if the row does not fit in an `i32`.
fn offset_of(cube: Cube) -> Option<Offset> {
    let row = cube.z.checked_add(Integer::div_ceil(&cube.x, &2))?;
    Some(Offset { col: cube.x, row })
}

impl HexCoordinate {
    /// Parse a four digit offset string: two digits of column, then two of row.
    pub fn from_offset_string(s: &str) -> Result<HexCoordinate, Error> {
        let offset = s
            .parse::<Offset>()
            .map_err(|_| Error::InvalidFormat(s.to_owned()))?;
        HexCoordinate::from_offset(offset)
    }

    /// Fails with [`Error::Unrepresentable`] if the cubic view of `offset` does not fit
    /// in `i32` components.
    pub fn from_offset(offset: Offset) -> Result<HexCoordinate, Error> {
        let x = offset.col;
        let z = i64::from(offset.row) - i64::from(Integer::div_ceil(&x, &2));
        let y = -i64::from(x) - z;
        match (i32::try_from(y), i32::try_from(z)) {
            (Ok(y), Ok(z)) => Ok(HexCoordinate {
                offset,
                cube: Cube { x, y, z },
            }),
            _ => Err(Error::Unrepresentable(offset.to_string())),
        }
    }

    /// Accept a cubic triple, provided that `x + y + z == 0` and that its offset row
    /// fits in an `i32`.
    pub fn from_cubic(x: i32, y: i32, z: i32) -> Result<HexCoordinate, Error> {
        let cube = Cube { x, y, z };
        if !cube.is_valid() {
            return Err(Error::InvalidCoordinates { x, y, z });
        }
        HexCoordinate::from_cube_checked(cube).ok_or(Error::InvalidCoordinates { x, y, z })
    }

    pub fn from_coordinate(other: &HexCoordinate) -> HexCoordinate {
        *other
    }

    /// The caller guarantees that `cube` is valid.
    fn from_cube_checked(cube: Cube) -> Option<HexCoordinate> {
        debug_assert!(cube.is_valid(), "invalid cube {}", cube);
        offset_of(cube).map(|offset| HexCoordinate { offset, cube })
    }

    /// The caller guarantees that `cube` is valid. Overflows like `i32` addition.
    fn from_cube_unchecked(cube: Cube) -> HexCoordinate {
        debug_assert!(cube.is_valid(), "invalid cube {}", cube);
        let col = cube.x;
        let row = cube.z + Integer::div_ceil(&cube.x, &2);
        HexCoordinate {
            offset: Offset { col, row },
            cube,
        }
    }

    /// Cubic coordinates.
    #[inline]
    pub fn cube(&self) -> Cube {
        self.cube
    }

    /// Offset coordinates. `offset().to_string()` is the `"CCRR"` form.
    #[inline]
    pub fn offset(&self) -> Offset {
        self.offset
    }

    #[inline]
    pub fn col(&self) -> i32 {
        self.offset.col
    }

    #[inline]
    pub fn row(&self) -> i32 {
        self.offset.row
    }

    #[inline]
    pub fn x(&self) -> i32 {
        self.cube.x
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.cube.y
    }

    #[inline]
    pub fn z(&self) -> i32 {
        self.cube.z
    }

    /// Translate by a vector whose components sum to zero.
    fn shifted(self, dx: i32, dy: i32, dz: i32) -> HexCoordinate {
        HexCoordinate::from_cube_unchecked(Cube {
            x: self.cube.x + dx,
            y: self.cube.y + dy,
            z: self.cube.z + dz,
        })
    }

    /// Translate by a vector whose components sum to zero, or `None` if the result does
    /// not fit.
    fn checked_shifted(self, dx: i64, dy: i64, dz: i64) -> Option<HexCoordinate> {
        let x = i32::try_from(i64::from(self.cube.x) + dx).ok()?;
        let y = i32::try_from(i64::from(self.cube.y) + dy).ok()?;
        let z = i32::try_from(i64::from(self.cube.z) + dz).ok()?;
        HexCoordinate::from_cube_checked(Cube { x, y, z })
    }

    pub fn checked_add(self, rhs: HexCoordinate) -> Option<HexCoordinate> {
        let Cube { x, y, z } = rhs.cube;
        self.checked_shifted(x.into(), y.into(), z.into())
    }

    pub fn checked_sub(self, rhs: HexCoordinate) -> Option<HexCoordinate> {
        let Cube { x, y, z } = rhs.cube;
        self.checked_shifted(-i64::from(x), -i64::from(y), -i64::from(z))
    }

    /// Multiply the cubic vector by an integer.
    pub fn scale(self, factor: i32) -> HexCoordinate {
        HexCoordinate::from_cube_unchecked(Cube {
            x: self.cube.x * factor,
            y: self.cube.y * factor,
            z: self.cube.z * factor,
        })
    }

    pub fn checked_scale(self, factor: i32) -> Option<HexCoordinate> {
        let Cube { x, y, z } = self.cube;
        HexCoordinate::from_cube_checked(Cube {
            x: x.checked_mul(factor)?,
            y: y.checked_mul(factor)?,
            z: z.checked_mul(factor)?,
        })
    }

    /// Multiply the cubic vector by an arbitrary number.
    ///
    /// Fails with [`Error::TypeMismatch`] unless the factor is an integer which fits in an
    /// `i32`, and with [`Error::Unrepresentable`] if the product does not fit.
    pub fn try_scale<N>(self, factor: N) -> Result<HexCoordinate, Error>
    where
        N: ToPrimitive + fmt::Display,
    {
        let integral = factor.to_f64().map_or(false, |f| f.fract() == 0.0);
        let factor = integral
            .then(|| factor.to_i32())
            .flatten()
            .ok_or_else(|| Error::TypeMismatch(factor.to_string()))?;
        self.checked_scale(factor)
            .ok_or_else(|| Error::Unrepresentable(format!("{} * {}", self.cube, factor)))
    }

    /// The adjacent cell in the given direction.
    pub fn neighbour(self, direction: Direction) -> HexCoordinate {
        self + direction
    }

    /// The adjacent cell in the direction with the given index.
    ///
    /// Fails with [`Error::InvalidDirection`] unless `index` is in `0..=5`.
    pub fn try_neighbour(self, index: i64) -> Result<HexCoordinate, Error> {
        Direction::try_from(index).map(|direction| self.neighbour(direction))
    }

    /// Iterate over the six adjacent cells, in direction order.
    pub fn adjacent(self) -> impl 'static + Iterator<Item = HexCoordinate> {
        Direction::iter().map(move |direction| self + direction)
    }

    /// The six adjacent cells, sorted.
    pub fn neighbours(self) -> Vec<HexCoordinate> {
        self.adjacent().sorted().collect()
    }

    /// The six adjacent cells as offsets, sorted.
    pub fn neighbours_offset(self) -> Vec<Offset> {
        self.adjacent().map(|hex| hex.offset).sorted().collect()
    }

    /// The six adjacent cells as cubes, sorted.
    pub fn neighbours_cube(self) -> Vec<Cube> {
        self.adjacent().map(|hex| hex.cube).sorted().collect()
    }

    /// Number of steps between two cells.
    pub fn distance(&self, other: &HexCoordinate) -> u32 {
        let delta = |a: i32, b: i32| (i64::from(a) - i64::from(b)).unsigned_abs();
        let steps = delta(self.cube.x, other.cube.x)
            .max(delta(self.cube.y, other.cube.y))
            .max(delta(self.cube.z, other.cube.z));
        // two i32 values are never more than u32::MAX apart
        u32::try_from(steps).unwrap_or(u32::MAX)
    }

    /// The cell `dist` steps away in `direction`, if it fits.
    fn corner(self, direction: Direction, dist: u32) -> Option<HexCoordinate> {
        let d = i64::from(dist);
        let Cube { x, y, z } = direction.vector();
        self.checked_shifted(i64::from(x) * d, i64::from(y) * d, i64::from(z) * d)
    }

    fn range_error(self, dist: u32) -> Error {
        Error::Unrepresentable(format!("cells within {} of {}", dist, self.offset))
    }

    /// Fails unless every cell within `dist` steps fits in `i32` components.
    fn check_range(self, dist: u32) -> Result<(), Error> {
        // the extremes of each component and of the offset row lie on the six corners
        if Direction::iter().all(|direction| self.corner(direction, dist).is_some()) {
            Ok(())
        } else {
            Err(self.range_error(dist))
        }
    }

    /// Iterate over every cell within `dist` steps of this one, this one included.
    ///
    /// Yields `3 * dist * (dist + 1) + 1` distinct cells, in no particular order.
    /// Fails with [`Error::Unrepresentable`] if some of those cells do not fit in `i32`
    /// components.
    pub fn within_range(self, dist: u32) -> Result<impl Iterator<Item = HexCoordinate>, Error> {
        self.check_range(dist)?;
        let d = i64::from(dist);
        Ok((-d..=d)
            .flat_map(move |dx| ((-d).max(-dx - d)..=d.min(d - dx)).map(move |dy| (dx, dy)))
            .filter_map(move |(dx, dy)| self.checked_shifted(dx, dy, -dx - dy)))
    }

    /// Iterate over every cell exactly `dist` steps from this one.
    ///
    /// See [`Ring`]. Fails like [`HexCoordinate::within_range`].
    pub fn ring(self, dist: u32) -> Result<Ring, Error> {
        Ring::new(self, dist)
    }
}

/// Iterator over the cells at a fixed distance from a center.
///
/// Created by [`HexCoordinate::ring`]. Starts at the corner `radius` steps to the
/// southeast, then walks `radius` steps in each direction in index order, yielding each
/// cell before stepping away from it. Yields `6 * radius` cells, or only the center when
/// `radius` is `0`.
#[derive(Clone, Debug)]
pub struct Ring {
    cursor: HexCoordinate,
    radius: u32,
    side: usize,
    step: u32,
    remaining: u64,
}

impl Ring {
    fn new(center: HexCoordinate, radius: u32) -> Result<Ring, Error> {
        center.check_range(radius)?;
        let cursor = center
            .corner(Direction::Southeast, radius)
            .ok_or_else(|| center.range_error(radius))?;
        let remaining = if radius == 0 { 1 } else { 6 * u64::from(radius) };
        Ok(Ring {
            cursor,
            radius,
            side: 0,
            step: 0,
            remaining,
        })
    }
}

impl Iterator for Ring {
    type Item = HexCoordinate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let next = self.cursor;
        if self.radius > 0 {
            if let Some(direction) = Direction::iter().nth(self.side) {
                let Cube { x, y, z } = direction.vector();
                match self.cursor.checked_shifted(x.into(), y.into(), z.into()) {
                    Some(cursor) => self.cursor = cursor,
                    None => self.remaining = 0,
                }
            }
            self.step += 1;
            if self.step == self.radius {
                self.step = 0;
                self.side += 1;
            }
        }

        Some(next)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl std::iter::ExactSizeIterator for Ring {}

impl PartialEq for HexCoordinate {
    fn eq(&self, other: &Self) -> bool {
        self.cube == other.cube
    }
}

impl Eq for HexCoordinate {}

impl hash::Hash for HexCoordinate {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        hash::Hash::hash(&self.cube, state);
    }
}

impl Ord for HexCoordinate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.offset.cmp(&other.offset)
    }
}

impl PartialOrd for HexCoordinate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for HexCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.offset, self.cube)
    }
}

impl FromStr for HexCoordinate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HexCoordinate::from_offset_string(s)
    }
}

impl TryFrom<&str> for HexCoordinate {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        HexCoordinate::from_offset_string(s)
    }
}

impl TryFrom<Offset> for HexCoordinate {
    type Error = Error;

    fn try_from(offset: Offset) -> Result<Self, Self::Error> {
        HexCoordinate::from_offset(offset)
    }
}

impl TryFrom<Cube> for HexCoordinate {
    type Error = Error;

    fn try_from(Cube { x, y, z }: Cube) -> Result<Self, Self::Error> {
        HexCoordinate::from_cubic(x, y, z)
    }
}

impl TryFrom<(i32, i32, i32)> for HexCoordinate {
    type Error = Error;

    fn try_from((x, y, z): (i32, i32, i32)) -> Result<Self, Self::Error> {
        HexCoordinate::from_cubic(x, y, z)
    }
}

impl TryFrom<&[i32]> for HexCoordinate {
    type Error = Error;

    fn try_from(components: &[i32]) -> Result<Self, Self::Error> {
        match *components {
            [x, y, z] => HexCoordinate::from_cubic(x, y, z),
            _ => Err(Error::InvalidInput(components.len())),
        }
    }
}

/// The unit vector of a direction, as a cell adjacent to the origin.
impl From<Direction> for HexCoordinate {
    fn from(direction: Direction) -> Self {
        HexCoordinate::from_cube_unchecked(direction.vector())
    }
}

impl From<HexCoordinate> for Cube {
    fn from(hex: HexCoordinate) -> Self {
        hex.cube
    }
}

impl From<HexCoordinate> for Offset {
    fn from(hex: HexCoordinate) -> Self {
        hex.offset
    }
}

impl From<HexCoordinate> for (i32, i32, i32) {
    fn from(hex: HexCoordinate) -> Self {
        hex.cube.into()
    }
}

impl Add for HexCoordinate {
    type Output = HexCoordinate;

    fn add(self, rhs: HexCoordinate) -> Self::Output {
        self.shifted(rhs.cube.x, rhs.cube.y, rhs.cube.z)
    }
}

impl Sub for HexCoordinate {
    type Output = HexCoordinate;

    fn sub(self, rhs: HexCoordinate) -> Self::Output {
        self.shifted(-rhs.cube.x, -rhs.cube.y, -rhs.cube.z)
    }
}

impl Mul<i32> for HexCoordinate {
    type Output = HexCoordinate;

    fn mul(self, rhs: i32) -> Self::Output {
        self.scale(rhs)
    }
}

impl Neg for HexCoordinate {
    type Output = HexCoordinate;

    fn neg(self) -> Self::Output {
        self.scale(-1)
    }
}

impl AddAssign<Direction> for HexCoordinate {
    fn add_assign(&mut self, rhs: Direction) {
        let Cube { x, y, z } = rhs.vector();
        *self = self.shifted(x, y, z);
    }
}

impl Add<Direction> for HexCoordinate {
    type Output = HexCoordinate;

    fn add(mut self, rhs: Direction) -> Self::Output {
        self += rhs;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn hex(s: &str) -> HexCoordinate {
        s.parse().unwrap()
    }

    fn cube(x: i32, y: i32, z: i32) -> HexCoordinate {
        HexCoordinate::from_cubic(x, y, z).unwrap()
    }

    #[test]
    fn test_create_offset() {
        assert_eq!(hex("2411").offset().to_string(), "2411");
    }

    #[test]
    fn test_create_cube() {
        assert_eq!(cube(24, -23, -1).cube(), Cube::new(24, -23, -1));
    }

    #[test]
    fn test_create_from_coordinate() {
        let original = hex("2411");
        let copy = HexCoordinate::from_coordinate(&original);
        assert_eq!(original.offset(), copy.offset());
        assert_eq!(original.cube(), copy.cube());
    }

    #[test]
    fn test_create_invalid_cube() {
        assert_eq!(
            HexCoordinate::from_cubic(1, 1, 1),
            Err(Error::InvalidCoordinates { x: 1, y: 1, z: 1 })
        );
    }

    #[test]
    fn test_create_invalid_cube_does_not_overflow() {
        assert!(HexCoordinate::from_cubic(i32::MAX, i32::MAX, 2).is_err());
    }

    #[test]
    fn test_create_cube_at_i32_edges() {
        let east = cube(i32::MAX, i32::MIN + 1, 0);
        assert_eq!(east.offset(), Offset::new(i32::MAX, 1 << 30));
        assert_eq!(HexCoordinate::from_offset(east.offset()).unwrap().cube(), east.cube());

        let west = cube(i32::MIN, i32::MAX, 1);
        assert_eq!(west.offset(), Offset::new(i32::MIN, 1 - (1 << 30)));
        assert_eq!(HexCoordinate::from_offset(west.offset()).unwrap().cube(), west.cube());

        // zero sum, but the row would be i32::MAX + 1
        assert_eq!(
            HexCoordinate::from_cubic(1, i32::MIN, i32::MAX),
            Err(Error::InvalidCoordinates {
                x: 1,
                y: i32::MIN,
                z: i32::MAX
            })
        );
    }

    #[test]
    fn test_create_offset_at_i32_edges() {
        assert!(matches!(
            HexCoordinate::from_offset(Offset::new(i32::MIN, i32::MAX)),
            Err(Error::Unrepresentable(_))
        ));
        assert!(matches!(
            HexCoordinate::try_from(Offset::new(0, i32::MIN)),
            Err(Error::Unrepresentable(_))
        ));
        assert!(matches!(
            HexCoordinate::try_from(Offset::new(0, i32::MIN + 1)),
            Ok(north) if north.cube() == Cube::new(0, i32::MAX, i32::MIN + 1)
        ));
    }

    #[test]
    fn test_create_invalid_offset() {
        for bad in ["", "123", "12345", "12a4", "-123", "１２３４"] {
            assert_eq!(
                HexCoordinate::from_offset_string(bad),
                Err(Error::InvalidFormat(bad.to_owned())),
            );
        }
    }

    #[test]
    fn test_create_from_slice() {
        let components: &[i32] = &[24, -23, -1];
        assert_eq!(HexCoordinate::try_from(components).unwrap(), hex("2411"));

        for components in [&[12, 34][..], &[][..], &[1, -1, 0, 0][..]] {
            assert_eq!(
                HexCoordinate::try_from(components),
                Err(Error::InvalidInput(components.len()))
            );
        }
    }

    #[test]
    fn test_offset_to_cube() {
        assert_eq!(hex("2411").cube(), Cube::new(24, -23, -1));
        assert_eq!(hex("0000").cube(), Cube::new(0, 0, 0));
        assert_eq!(hex("0101").cube(), Cube::new(1, -1, 0));
    }

    #[test]
    fn test_cube_to_offset() {
        assert_eq!(cube(24, -23, -1).offset(), Offset::new(24, 11));
        assert_eq!(cube(23, -22, -1).offset(), Offset::new(23, 11));
    }

    #[test]
    fn test_negative_columns() {
        // odd negative columns are shoved down like odd positive ones
        let west = hex("0000").neighbour(Direction::Southwest);
        assert_eq!(west.cube(), Cube::new(-1, 0, 1));
        assert_eq!(west.offset(), Offset::new(-1, 1));
        assert_eq!(HexCoordinate::from_offset(west.offset()), Ok(west));
    }

    #[test]
    fn test_all_offset_strings_round_trip() {
        for col in 0..100 {
            for row in 0..100 {
                let s = format!("{:02}{:02}", col, row);
                let hex = hex(&s);
                assert_eq!(hex.offset().to_string(), s);
                let Cube { x, y, z } = hex.cube();
                assert_eq!(x + y + z, 0);
                let from_cube = HexCoordinate::from_cubic(x, y, z).unwrap();
                assert_eq!(from_cube.offset(), hex.offset());
            }
        }
    }

    #[test]
    fn test_addition() {
        assert_eq!(hex("0101") + cube(0, 1, -1), hex("0100"));
    }

    #[test]
    fn test_subtraction() {
        assert_eq!(hex("0101") - cube(0, 1, -1), hex("0102"));
    }

    #[test]
    fn test_add_sub_inverse() {
        let a = hex("2411");
        for b in a.within_range(3).unwrap() {
            assert_eq!((a + b) - b, a);
        }
    }

    #[test]
    fn test_checked_arithmetic() {
        let a = hex("2411");
        let b = cube(0, 1, -1);
        assert_eq!(a.checked_add(b), Some(a + b));
        assert_eq!(a.checked_sub(b), Some(a - b));
        assert_eq!(a.checked_scale(-2), Some(a * -2));

        let east = cube(i32::MAX, i32::MIN + 1, 0);
        assert_eq!(east.checked_add(Direction::Southeast.into()), None);
        assert_eq!(east.checked_sub(Direction::Northwest.into()), None);
        assert_eq!(east.checked_scale(2), None);
        assert_eq!(cube(i32::MIN, i32::MAX, 1).checked_scale(-1), None);
    }

    #[test]
    fn test_multiply() {
        assert_eq!(hex("0001") * 3, hex("0003"));
        assert_eq!(hex("2411").scale(0).cube(), Cube::new(0, 0, 0));
        assert_eq!(-hex("2411"), hex("2411") * -1);
    }

    #[test]
    fn test_try_scale() {
        assert_eq!(hex("0001").try_scale(3_u8), Ok(hex("0003")));
        assert_eq!(hex("0001").try_scale(3.0_f64), Ok(hex("0003")));
        assert_eq!(
            hex("1010").try_scale(1.5),
            Err(Error::TypeMismatch("1.5".into()))
        );
        assert!(hex("1010").try_scale(f64::NAN).is_err());
        assert!(matches!(
            hex("1010").try_scale(u64::MAX),
            Err(Error::TypeMismatch(_))
        ));
        assert!(matches!(
            hex("9999").try_scale(i32::MAX),
            Err(Error::Unrepresentable(_))
        ));
    }

    #[test]
    fn test_equality() {
        assert!(hex("0101") == hex("0101"));
        assert!(!(hex("0101") == hex("0102")));
        assert!(hex("0101") != hex("0102"));
        assert!(!(hex("0101") != hex("0101")));
    }

    #[test]
    fn test_ordering_is_by_offset() {
        assert!(hex("0102") < hex("0201"));
        assert!(hex("0201") < hex("0202"));
        assert_eq!(hex("0303").cmp(&cube(3, -4, 1)), Ordering::Equal);
    }

    #[test]
    fn test_neighbour() {
        let center = hex("0202");
        let expect = ["0201", "0102", "0103", "0203", "0303", "0302"];
        for (direction, expect) in Direction::iter().zip(expect.iter()) {
            assert_eq!(center.neighbour(direction), hex(expect));
            assert_eq!(
                center.try_neighbour(direction.index() as i64).unwrap(),
                hex(expect)
            );
        }
    }

    #[test]
    fn test_neighbour_invalid_direction() {
        assert_eq!(
            hex("0201").try_neighbour(1234),
            Err(Error::InvalidDirection(1234))
        );
        assert_eq!(
            hex("0201").try_neighbour(-1),
            Err(Error::InvalidDirection(-1))
        );
    }

    #[test]
    fn test_neighbours_sorted() {
        let neighbours = hex("0202").neighbours_offset();
        let strings: Vec<_> = neighbours.iter().map(ToString::to_string).collect();
        assert_eq!(strings, ["0102", "0103", "0201", "0203", "0302", "0303"]);

        let hexes = hex("0202").neighbours();
        assert!(hexes.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(
            hexes.iter().map(|hex| hex.offset()).collect::<Vec<_>>(),
            neighbours
        );

        let cubes = hex("0202").neighbours_cube();
        assert!(cubes.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(cubes.iter().all(|cube| cube.is_valid()));
    }

    #[test]
    fn test_distance() {
        assert_eq!(hex("2411").distance(&hex("2512")), 1);
        assert_eq!(cube(24, -23, -1).distance(&cube(25, -25, 0)), 2);
        for other in hex("1010").within_range(4).unwrap() {
            let center = hex("1010");
            assert_eq!(center.distance(&other), other.distance(&center));
            assert_eq!(center.distance(&other) == 0, center == other);
        }
    }

    #[test]
    fn test_distance_across_i32() {
        let east = cube(i32::MAX, i32::MIN + 1, 0);
        let west = cube(i32::MIN, i32::MAX, 1);
        assert_eq!(east.distance(&west), u32::MAX);
        assert_eq!(west.distance(&east), u32::MAX);
    }

    #[test]
    fn test_neighbours_are_adjacent() {
        let center = hex("1515");
        assert!(center.adjacent().all(|n| center.distance(&n) == 1));
    }

    #[test]
    fn test_within_range() {
        let center = hex("2311");
        for dist in 0..6 {
            let disk: Vec<_> = center.within_range(dist).unwrap().collect();
            let unique: HashSet<_> = disk.iter().copied().collect();
            assert_eq!(disk.len(), (3 * dist * (dist + 1) + 1) as usize);
            assert_eq!(unique.len(), disk.len());
            assert!(disk.iter().all(|hex| center.distance(hex) <= dist));
        }
    }

    #[test]
    fn test_within_range_at_i32_limit() {
        let origin = HexCoordinate::default();
        let limit = i32::MAX as u32;

        let first = origin.within_range(limit).unwrap().next().unwrap();
        assert_eq!(first.cube(), Cube::new(-i32::MAX, 0, i32::MAX));
        assert_eq!(origin.distance(&first), limit);

        assert!(matches!(
            origin.within_range(limit + 1),
            Err(Error::Unrepresentable(_))
        ));
        assert!(matches!(
            hex("5050").within_range(limit),
            Err(Error::Unrepresentable(_))
        ));
    }

    #[test]
    fn test_ring() {
        let center = hex("1010");
        assert_eq!(center.ring(0).unwrap().collect::<Vec<_>>(), vec![center]);
        for dist in 1..6 {
            let ring = center.ring(dist).unwrap();
            assert_eq!(ring.len(), 6 * dist as usize);
            let cells: Vec<_> = ring.collect();
            let unique: HashSet<_> = cells.iter().copied().collect();
            assert_eq!(unique.len(), cells.len());
            assert!(cells.iter().all(|hex| center.distance(hex) == dist));
        }
    }

    #[test]
    fn test_ring_starts_southeast() {
        let center = hex("1010");
        let first = center.ring(3).unwrap().next().unwrap();
        assert_eq!(first, center + HexCoordinate::from(Direction::Southeast) * 3);
    }

    #[test]
    fn test_ring_at_i32_limit() {
        let origin = HexCoordinate::default();
        let mut ring = origin.ring(i32::MAX as u32).unwrap();
        assert_eq!(ring.len() as u64, 6 * i32::MAX as u64);
        assert_eq!(ring.next().unwrap().cube(), Cube::new(i32::MAX, -i32::MAX, 0));
        assert_eq!(ring.next().unwrap().cube(), Cube::new(i32::MAX, 1 - i32::MAX, -1));

        assert!(matches!(origin.ring(u32::MAX), Err(Error::Unrepresentable(_))));
        assert!(matches!(
            hex("5050").ring(i32::MAX as u32),
            Err(Error::Unrepresentable(_))
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(hex("2411").to_string(), "2411 / (24, -23, -1)");
    }
}
