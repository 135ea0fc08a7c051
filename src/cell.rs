/// Identifies one wire color. Real colors start at 1; 0 never names a wire.
pub type ColorId = usize;

/// The state of one cell in the derived color grid.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Cell {
    /// A fixed flow endpoint of the given color.
    ///
    /// A terminus stays a terminus even while a wire's path occupies it; its encoded
    /// value never flips positive.
    Terminus {
        /// The owning wire's color.
        color: ColorId,
    },
    /// A non-terminus cell currently claimed by the given wire's path.
    Path {
        /// The claiming wire's color.
        color: ColorId,
    },
    /// A cell claimed by nothing.
    #[default]
    Empty,
}

impl Cell {
    /// The wire-format value of this cell: `0` empty, `-color` for a terminus not yet
    /// capped by its wire, `+color` for a claimed path cell.
    pub fn code(&self) -> i32 {
        match self {
            Self::Terminus { color } => -(*color as i32),
            Self::Path { color } => *color as i32,
            Self::Empty => 0,
        }
    }

    /// The color this cell belongs to, if any.
    pub fn color(&self) -> Option<ColorId> {
        match self {
            Self::Terminus { color } | Self::Path { color } => Some(*color),
            Self::Empty => None,
        }
    }
}
