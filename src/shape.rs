use strum::VariantArray;

use crate::location::Location;

/// The four cardinal step directions on a rectangular board of square cells.
///
/// Doubles as the per-cell segment code for rendering: each variant owns one bit of a
/// 4-bit mask, so a straight segment sums two opposite bits and a corner sums two
/// adjacent ones.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum SquareStep {
    /// Toward lower row indices.
    Up,
    /// Toward higher row indices.
    Down,
    /// Toward lower column indices.
    Left,
    /// Toward higher column indices.
    Right,
}

impl SquareStep {
    /// Attempt the step from `location` in the direction specified by `self` and return the
    /// resultant [`Location`].
    ///
    /// Stepping off the top or left edge wraps the coordinate to a huge value, which fails
    /// any subsequent bounds check.
    pub fn attempt_from(&self, location: Location) -> Location {
        match self {
            Self::Up => location.offset_by((0, -1)),
            Self::Down => location.offset_by((0, 1)),
            Self::Left => location.offset_by((-1, 0)),
            Self::Right => location.offset_by((1, 0)),
        }
    }

    /// Invert the direction specified by `self`.
    pub fn invert(&self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Determine the direction from `a` to `b` by calling [`attempt_from`](Self::attempt_from)
    /// until one works.
    ///
    /// Returns [`None`] if `a` and `b` are not adjacent, including when they are equal.
    pub fn direction_to(a: Location, b: Location) -> Option<Self> {
        Self::VARIANTS.iter().find(|dir| dir.attempt_from(a) == b).copied()
    }

    /// The segment-mask bit carried by an edge leaving a cell in this direction.
    ///
    /// `Right = 1`, `Up = 2`, `Left = 4`, `Down = 8`.
    pub fn bit(&self) -> u8 {
        match self {
            Self::Right => 1,
            Self::Up => 2,
            Self::Left => 4,
            Self::Down => 8,
        }
    }
}
