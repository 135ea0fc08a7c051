use itertools::Itertools;
use ndarray::Array2;

use crate::board::Board;
use crate::cell::{Cell, ColorId};
use crate::error::BoardError;
use crate::location::Location;
use crate::wire::Wire;

/// A builder for rectangular boards, fed either from a catalog map or by placing terminal
/// pairs directly.
///
/// The builder mutates itself while building but can be [`Clone`]d to save its state at
/// some point. A bad placement marks the builder invalid; later calls then do nothing and
/// [`build`](Self::build) reports the first failure.
#[derive(Clone)]
pub struct BoardBuilder {
    // width, height
    dims: (usize, usize),
    cells: Array2<ColorId>,
    invalid: Vec<BoardError>,
}

impl BoardBuilder {
    /// Construct an empty builder with the specified width and height in cells.
    pub fn with_dims(width: usize, height: usize) -> Self {
        let mut invalid = Vec::new();
        if width == 0 || height == 0 {
            invalid.push(BoardError::EmptyMap);
        }

        Self {
            dims: (width, height),
            cells: Array2::from_elem((height, width), 0),
            invalid,
        }
    }

    /// Construct a builder from an authored terminal map, one row per slice.
    ///
    /// The first row fixes the width; short rows are padded with empty cells and long rows
    /// are cut, since the catalog is curated data rather than user input.
    pub fn from_map(map: &[&[ColorId]]) -> Self {
        let width = map.first().map_or(0, |row| row.len());
        let mut builder = Self::with_dims(width, map.len());
        if !builder.invalid.is_empty() {
            return builder;
        }

        for (r, row) in map.iter().enumerate() {
            for (c, &color) in row.iter().take(width).enumerate() {
                builder.cells[(r, c)] = color;
            }
        }

        builder
    }

    /// Place the two terminals of `color`. The order of `locations` fixes which terminal
    /// is discovered first only if it matches row-major scan order; discovery order is
    /// decided at [`build`](Self::build) time by scanning the map.
    ///
    /// Marks the builder invalid if either location is out of bounds. If the builder is
    /// already invalid, this function does nothing. `color` 0 names no wire and is ignored.
    pub fn add_termini(&mut self, color: ColorId, locations: (Location, Location)) -> &mut Self {
        if !self.invalid.is_empty() || color == 0 {
            return self;
        }

        for location in [locations.0, locations.1] {
            if location.0 >= self.dims.0 || location.1 >= self.dims.1 {
                self.invalid.push(BoardError::OutOfBounds {
                    col: location.0,
                    row: location.1,
                    width: self.dims.0,
                    height: self.dims.1,
                });
                return self;
            }
        }

        for location in [locations.0, locations.1] {
            self.cells[location.as_index()] = color;
        }

        self
    }

    /// The first failure recorded by this builder, if any.
    pub fn is_valid(&self) -> Option<BoardError> {
        self.invalid.first().copied()
    }

    /// Convert the state of this builder into a [`Board`].
    ///
    /// Wires are sized by the highest color on the map and terminals are assigned in
    /// row-major encounter order; occurrences of a color past its second are silently
    /// ignored. Color gaps produce wires with no terminals, which simply never complete.
    pub fn build(&self) -> Result<Board, BoardError> {
        if let Some(reason) = self.is_valid() {
            return Err(reason);
        }

        let num_wires = self.cells.iter().copied().max().unwrap_or(0);
        let mut wires = (1..=num_wires).map(Wire::new).collect_vec();

        for (index, &color) in self.cells.indexed_iter() {
            if color > 0 {
                wires[color - 1].set_terminal(Location::from(index));
            }
        }

        let (m, n) = self.dims;
        let mut board = Board {
            dims: self.dims,
            base_map: self.cells.clone(),
            colors: Array2::from_elem((n, m), Cell::Empty),
            segments: Array2::from_elem((n, m), 0),
            wires,
            cur_color: None,
            cur_move_wires: Vec::new(),
            move_count: 0,
            color_string: String::new(),
            shape_string: String::new(),
        };

        board.update_colors_grid();
        board.update_segments_grid();
        board.update_strings();

        Ok(board)
    }
}
