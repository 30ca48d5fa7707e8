//! Screen coordinates

use crate::vectrex::{COORD_MAX, COORD_MIN};

/// Simple structure to hold a point on the screen
///
/// The range is not checked here, values are validated when they are translated
/// into channel levels.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    /// Horizontal position
    pub x: i16,
    /// Vertical position
    pub y: i16,
}

impl Coord {
    /// Center of the screen
    pub const ORIGIN: Coord = Coord { x: 0, y: 0 };

    /// Create a coordinate, values are stored as given
    pub const fn new(x: i16, y: i16) -> Self {
        Coord { x, y }
    }

    /// Set new coordinates
    pub fn set(&mut self, x: i16, y: i16) {
        self.x = x;
        self.y = y;
    }

    /// Compare values with another, possibly absent, coordinate
    ///
    /// Only true if both have the same x AND y. An absent coordinate never matches.
    pub fn equals(&self, other: Option<&Coord>) -> bool {
        other.is_some_and(|other| other == self)
    }

    /// Both axes within [`COORD_MIN`]..=[`COORD_MAX`]
    pub fn in_range(&self) -> bool {
        (COORD_MIN..=COORD_MAX).contains(&self.x) && (COORD_MIN..=COORD_MAX).contains(&self.y)
    }
}

impl From<(i16, i16)> for Coord {
    fn from((x, y): (i16, i16)) -> Self {
        Coord::new(x, y)
    }
}

impl From<Coord> for (i16, i16) {
    fn from(coord: Coord) -> Self {
        (coord.x, coord.y)
    }
}

impl core::fmt::Display for Coord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_origin() {
        assert_eq!(Coord::default(), Coord::ORIGIN);
        assert_eq!(Coord::default(), Coord::new(0, 0));
    }

    #[test]
    fn set_overwrites_both_axes() {
        let mut coord = Coord::new(3, -4);
        coord.set(-100, 120);
        assert_eq!(coord, Coord::new(-100, 120));
    }

    #[test]
    fn equals_needs_both_axes() {
        let coord = Coord::new(5, 7);
        assert!(coord.equals(Some(&Coord::new(5, 7))));
        assert!(!coord.equals(Some(&Coord::new(5, 8))));
        assert!(!coord.equals(Some(&Coord::new(6, 7))));
    }

    #[test]
    fn equals_absent_is_false() {
        assert!(!Coord::ORIGIN.equals(None));
    }

    #[test]
    fn range_is_asymmetric() {
        assert!(Coord::new(-127, 128).in_range());
        assert!(Coord::new(128, -127).in_range());
        assert!(!Coord::new(-128, 0).in_range());
        assert!(!Coord::new(0, 129).in_range());
    }

    #[test]
    fn converts_from_tuple() {
        let coord: Coord = (12, -34).into();
        assert_eq!(coord, Coord::new(12, -34));
        assert_eq!(<(i16, i16)>::from(coord), (12, -34));
    }
}
