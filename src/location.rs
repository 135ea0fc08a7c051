use ndarray::Ix;

use crate::shape::SquareStep;

pub(crate) type Coord = usize;

/// A location `(col, row)` on a board. The top left corner is `Location(0, 0)`.
#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug)]
pub struct Location(pub Coord, pub Coord);

impl Location {
    /// The column (x) coordinate.
    pub fn col(&self) -> Coord {
        self.0
    }

    /// The row (y) coordinate.
    pub fn row(&self) -> Coord {
        self.1
    }

    pub(crate) fn as_index(&self) -> (Coord, Coord) {
        (self.1, self.0)
    }

    pub(crate) fn offset_by(self, rhs: (isize, isize)) -> Self {
        Self(self.0.wrapping_add_signed(rhs.0), self.1.wrapping_add_signed(rhs.1))
    }

    /// Whether `other` differs from this location by exactly one step along a single axis.
    ///
    /// Adjacency is symmetric and excludes diagonals and the location itself.
    pub fn is_adjacent(&self, other: Location) -> bool {
        SquareStep::direction_to(*self, other).is_some()
    }
}

impl From<(Ix, Ix)> for Location {
    fn from(value: (Ix, Ix)) -> Self {
        Self(value.1, value.0)
    }
}
