use crate::error::BoardError;
use crate::location::Location;

/// Maps between pixel coordinates and cell indices for a board drawn at a fixed origin
/// and cell size.
///
/// Pixel-to-cell mapping is raw floor division and may yield out-of-range indices; the
/// engine treats those as a no-op press or snaps them during a drag. Cell-to-pixel mapping
/// is the strict direction: asking for a cell outside the board is a mapping-layer bug and
/// propagates [`BoardError::OutOfBounds`] rather than clamping.
#[derive(Clone, Copy, Debug)]
pub struct CellMapper {
    cell_size: f32,
    left_x: f32,
    up_y: f32,
    // width, height
    dims: (usize, usize),
}

impl CellMapper {
    /// Construct a mapper for a `width` x `height` board whose top-left corner is drawn at
    /// `(left_x, up_y)` with square cells of `cell_size` pixels.
    pub fn new(width: usize, height: usize, cell_size: f32, left_x: f32, up_y: f32) -> Self {
        Self {
            cell_size,
            left_x,
            up_y,
            dims: (width, height),
        }
    }

    /// The column index under pixel `x`, unclamped.
    pub fn col_from_x(&self, x: f32) -> isize {
        ((x - self.left_x) / self.cell_size).floor() as isize
    }

    /// The row index under pixel `y`, unclamped.
    pub fn row_from_y(&self, y: f32) -> isize {
        ((y - self.up_y) / self.cell_size).floor() as isize
    }

    /// The pixel center of `cell`.
    pub fn cell_center(&self, cell: Location) -> Result<(f32, f32), BoardError> {
        let (m, n) = self.dims;
        if cell.0 >= m || cell.1 >= n {
            return Err(BoardError::OutOfBounds {
                col: cell.0,
                row: cell.1,
                width: m,
                height: n,
            });
        }

        Ok((
            self.left_x + (cell.0 as f32 + 0.5) * self.cell_size,
            self.up_y + (cell.1 as f32 + 0.5) * self.cell_size,
        ))
    }
}
