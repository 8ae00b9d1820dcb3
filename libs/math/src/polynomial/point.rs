//! Point

/// A point `(x, y)` with plain integer coordinates.
///
/// Points are interpreted in a field only when an operation is given a [Modulus](crate::modular::Modulus).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub(crate) x: u64,
    pub(crate) y: u64,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: u64, y: u64) -> Point {
        Point { x, y }
    }

    /// The abscissa.
    pub fn x(&self) -> u64 {
        self.x
    }

    /// The ordinate.
    pub fn y(&self) -> u64 {
        self.y
    }
}

impl From<(u64, u64)> for Point {
    fn from((x, y): (u64, u64)) -> Self {
        Point { x, y }
    }
}
