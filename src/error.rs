use thiserror::Error;

use crate::catalog::Difficulty;

/// Reasons engine construction or coordinate mapping may fail.
///
/// Recomputation of the derived grids never fails; these arise only at the catalog and
/// coordinate-mapping boundaries, before any engine state is mutated.
#[derive(Copy, Clone, Debug, Error, Eq, PartialEq)]
pub enum BoardError {
    /// No level with this index exists in the requested difficulty tier.
    #[error("no level {level} in the {difficulty:?} catalog")]
    UnknownLevel {
        /// The requested tier.
        difficulty: Difficulty,
        /// The requested level index.
        level: usize,
    },
    /// A cell index lies outside `[0, m) x [0, n)`.
    ///
    /// Indicates a mapping-layer bug rather than a user-input edge case, so it propagates
    /// instead of clamping.
    #[error("cell (col {col}, row {row}) is outside the {width}x{height} board")]
    OutOfBounds {
        /// The offending column.
        col: usize,
        /// The offending row.
        row: usize,
        /// Board width in cells.
        width: usize,
        /// Board height in cells.
        height: usize,
    },
    /// A terminal map with no rows or no columns was supplied.
    #[error("terminal map has no cells")]
    EmptyMap,
}
