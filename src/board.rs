use std::fmt::{Display, Formatter};

use ndarray::Array2;
use tracing::{debug, trace};

use crate::builder::BoardBuilder;
use crate::catalog::Difficulty;
use crate::cell::{Cell, ColorId};
use crate::codec;
use crate::error::BoardError;
use crate::location::Location;
use crate::shape::SquareStep;
use crate::wire::Wire;

/// One active puzzle instance: the authored terminal layout, the full wire roster, the
/// derived color and segment grids, and their cached string encodings.
///
/// The interaction layer writes through [`update_on_press`](Self::update_on_press),
/// [`update_on_drag`](Self::update_on_drag), and [`update_on_release`](Self::update_on_release);
/// everything else is a read-only snapshot. Every mutating call rebuilds the derived grids
/// wholesale from the wire paths, which are the only source of truth.
///
/// A board is a plain owned value. Level transitions construct a fresh instance and drop
/// the old one; nothing carries over.
pub struct Board {
    // width, height
    pub(crate) dims: (usize, usize),
    pub(crate) base_map: Array2<ColorId>,
    pub(crate) colors: Array2<Cell>,
    pub(crate) segments: Array2<u8>,
    pub(crate) wires: Vec<Wire>,
    pub(crate) cur_color: Option<ColorId>,
    pub(crate) cur_move_wires: Vec<ColorId>,
    pub(crate) move_count: u32,
    pub(crate) color_string: String,
    pub(crate) shape_string: String,
}

impl Board {
    /// Construct the board for one catalog level.
    ///
    /// Fails with [`BoardError::UnknownLevel`] if the tier has no such level index.
    pub fn new(difficulty: Difficulty, level: usize) -> Result<Self, BoardError> {
        let map = difficulty
            .map(level)
            .ok_or(BoardError::UnknownLevel { difficulty, level })?;
        let board = BoardBuilder::from_map(map).build()?;
        debug!(
            ?difficulty,
            level,
            width = board.dims.0,
            height = board.dims.1,
            wires = board.wires.len(),
            "board constructed"
        );
        Ok(board)
    }

    /// Handle a press at the pointer-derived cell `(row, col)`.
    ///
    /// An out-of-range press is a no-op. Pressing an empty cell deselects (no wire is
    /// active afterwards); pressing a terminal or claimed cell selects that wire and seeds
    /// the in-progress path with the pressed cell, running the usual cutting rules.
    pub fn update_on_press(&mut self, row: isize, col: isize) {
        let (m, n) = self.dims;
        if col < 0 || col >= m as isize || row < 0 || row >= n as isize {
            return;
        }
        self.move_count += 1;

        let pressed = Location(col as usize, row as usize);
        self.cur_color = self.colors[pressed.as_index()].color();

        if let Some(color) = self.cur_color {
            let wire = &mut self.wires[color - 1];
            wire.set_pressed(true);
            wire.add_on_drag(pressed);
            self.update_colors_grid();
        }

        self.update_segments_grid();
        self.update_strings();
    }

    /// Handle a drag with the pointer over the raw cell `(row, col)`.
    ///
    /// No-op without an active wire. The pointer cell is resolved to the nearest in-board
    /// candidate among the active path's tail and its four neighbors, ties broken in that
    /// order, so a fast or imprecise drag still tracks discrete cells. The resolved cell is
    /// appended unless it is another color's terminal; crossing another wire's claimed cell
    /// retracts that wire to its pre-move path outside the invasion.
    pub fn update_on_drag(&mut self, row: isize, col: isize) {
        let Some(color) = self.cur_color else {
            return;
        };
        let Some(prev) = self.wires[color - 1].last_cell() else {
            return;
        };

        // candidate order decides ties: the tail itself wins, then right, up, left, down
        let candidates = [
            prev,
            SquareStep::Right.attempt_from(prev),
            SquareStep::Up.attempt_from(prev),
            SquareStep::Left.attempt_from(prev),
            SquareStep::Down.attempt_from(prev),
        ];

        let (m, n) = self.dims;
        let mut best: Option<(i64, Location)> = None;
        for cand in candidates {
            if cand.0 >= m || cand.1 >= n {
                continue;
            }
            let dc = (col - cand.0 as isize) as i64;
            let dr = (row - cand.1 as isize) as i64;
            let dist = dc * dc + dr * dr;
            if best.map_or(true, |(best_dist, _)| dist < best_dist) {
                best = Some((dist, cand));
            }
        }

        // the tail is always in bounds, so a candidate always survives
        let Some((_, cur)) = best else {
            return;
        };
        if cur == prev {
            return;
        }

        // blocked by any terminal that is not the active wire's own
        let before = self.colors[cur.as_index()];
        if let Cell::Terminus { color: c } = before {
            if c != color {
                return;
            }
        }

        self.wires[color - 1].add_on_drag(cur);

        if let Cell::Path { color: other } = before {
            if other != color && !self.cur_move_wires.contains(&other) {
                self.cur_move_wires.push(other);
            }
        }

        // every wire crossed so far this move retracts against the active path
        let active_path = self.wires[color - 1].path().to_vec();
        for &crossed in &self.cur_move_wires {
            self.wires[crossed - 1].update_on_cross(&active_path);
        }

        self.update_colors_grid();
        self.update_segments_grid();
        self.update_strings();
    }

    /// Handle the pointer release ending the in-progress move.
    ///
    /// Clears the active wire and snapshots every wire's path as the next move's baseline.
    /// Calling this again without an intervening press or drag changes nothing.
    pub fn update_on_release(&mut self) {
        if let Some(color) = self.cur_color {
            self.wires[color - 1].set_pressed(false);
        }
        for wire in &mut self.wires {
            wire.update_after_move();
        }
        self.cur_color = None;
        self.cur_move_wires.clear();
    }

    /// Whether every wire validly connects its terminal pair.
    pub fn is_complete(&self) -> bool {
        self.wires.iter().all(Wire::is_complete)
    }

    pub(crate) fn update_colors_grid(&mut self) {
        self.colors = Array2::from_shape_fn(self.base_map.raw_dim(), |ind| {
            match self.base_map[ind] {
                0 => Cell::Empty,
                color => Cell::Terminus { color },
            }
        });

        // a wire's own terminals keep their terminus sign even while the path covers them
        for wire in &self.wires {
            for &cell in wire.path() {
                if !wire.is_terminal(cell) {
                    self.colors[cell.as_index()] = Cell::Path { color: wire.color() };
                }
            }
        }
    }

    pub(crate) fn update_segments_grid(&mut self) {
        self.segments.fill(0);

        for wire in &self.wires {
            for pair in wire.path().windows(2) {
                if let Some(dir) = SquareStep::direction_to(pair[0], pair[1]) {
                    self.segments[pair[0].as_index()] |= dir.bit();
                    self.segments[pair[1].as_index()] |= dir.invert().bit();
                }
            }
        }
    }

    pub(crate) fn update_strings(&mut self) {
        let codes = self.colors.map(|cell| cell.code());
        self.color_string = codec::grid_to_string(&codes);
        self.shape_string = codec::grid_to_string(&self.segments);
        trace!(colors = %self.color_string, shapes = %self.shape_string, "encodings recomputed");
    }

    /// Board width in cells.
    pub fn width(&self) -> usize {
        self.dims.0
    }

    /// Board height in cells.
    pub fn height(&self) -> usize {
        self.dims.1
    }

    /// The authored terminal layout this board was built from.
    pub fn base_map(&self) -> &Array2<ColorId> {
        &self.base_map
    }

    /// The wire roster, ordered by color: index `k - 1` holds color `k`.
    pub fn wires(&self) -> &[Wire] {
        &self.wires
    }

    /// The derived per-cell color states.
    pub fn colors(&self) -> &Array2<Cell> {
        &self.colors
    }

    /// The derived per-cell segment bitmasks, for line-shape rendering.
    pub fn segments(&self) -> &Array2<u8> {
        &self.segments
    }

    /// The color of the wire currently being dragged, if any.
    pub fn cur_color(&self) -> Option<ColorId> {
        self.cur_color
    }

    /// Running count of in-bounds press events on this board.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// The cached encoding of the color grid, refreshed by every mutating call.
    pub fn color_string(&self) -> &str {
        &self.color_string
    }

    /// The cached encoding of the segment grid, refreshed by every mutating call.
    pub fn shape_string(&self) -> &str {
        &self.shape_string
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in self.colors.rows() {
            for cell in row {
                let ch = match cell {
                    Cell::Terminus { color } => display_char(*color).to_ascii_uppercase(),
                    Cell::Path { color } => display_char(*color),
                    Cell::Empty => '.',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn display_char(color: ColorId) -> char {
    (b'a' + ((color - 1) % 26) as u8) as char
}
