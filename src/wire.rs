use tracing::debug;

use crate::cell::ColorId;
use crate::location::Location;

/// One color's path state machine: a terminal pair fixed at construction and the route the
/// player has dragged between them so far.
///
/// A wire is implicitly empty (no path), partial, or complete (path caps both terminals);
/// see [`is_complete`](Self::is_complete).
#[derive(Clone, Debug)]
pub struct Wire {
    color: ColorId,
    terminal1: Option<Location>,
    terminal2: Option<Location>,
    cell_path: Vec<Location>,
    prev_move_cell_path: Vec<Location>,
    connected: bool,
    is_pressed: bool,
}

impl Wire {
    pub(crate) fn new(color: ColorId) -> Self {
        Self {
            color,
            terminal1: None,
            terminal2: None,
            cell_path: Vec::new(),
            prev_move_cell_path: Vec::new(),
            connected: false,
            is_pressed: false,
        }
    }

    /// Append `cell` to the path while this wire is being dragged, then apply the cutting
    /// rules.
    ///
    /// After the cut, if a terminal sits anywhere past the first path element, everything
    /// beyond that terminal is dropped so the path ends cleanly where it met the terminal.
    pub(crate) fn add_on_drag(&mut self, cell: Location) {
        self.cell_path.push(cell);
        self.connected = false;
        self.cut();

        if let Some(i) = self.cell_path.iter().skip(1).position(|c| self.is_terminal(*c)) {
            self.cell_path.truncate(i + 2);
        }
    }

    /// The cutting rules, run after every append.
    ///
    /// A terminal landing: mark the wire connected if the path now validly caps both
    /// terminals, otherwise reset the path to hover at that terminal alone. A repeat of
    /// any earlier path cell: keep the path only up to that earlier occurrence, which is
    /// how dragging back over the wire shortens it.
    fn cut(&mut self) {
        let Some(&last) = self.cell_path.last() else {
            return;
        };

        if self.is_terminal(last) {
            if self.is_complete() {
                self.connected = true;
                debug!(color = self.color, "wire complete");
            } else {
                self.cell_path.clear();
                self.cell_path.push(last);
            }
        } else if let Some(i) = self.cell_path[..self.cell_path.len() - 1]
            .iter()
            .position(|c| *c == last)
        {
            self.cell_path.truncate(i + 1);
        }
    }

    /// Snapshot the current path as the baseline for the next move.
    ///
    /// Called once per release for every wire, active or not, so untouched wires also
    /// refresh their locked-in shading baseline.
    pub(crate) fn update_after_move(&mut self) {
        self.prev_move_cell_path = self.cell_path.clone();
    }

    /// React to another wire's path invading cells this wire held at the start of the move.
    ///
    /// The path reverts to the longest prefix of the previous move's path containing no
    /// cell of `other_path`. Without an intersection the whole previous path is kept.
    pub(crate) fn update_on_cross(&mut self, other_path: &[Location]) {
        let keep = self
            .prev_move_cell_path
            .iter()
            .position(|c| other_path.contains(c))
            .unwrap_or(self.prev_move_cell_path.len());
        self.cell_path = self.prev_move_cell_path[..keep].to_vec();
    }

    /// Whether the path validly connects the two terminals: non-empty, endpoints are the
    /// two distinct terminals, and every consecutive pair of cells is adjacent.
    pub fn is_complete(&self) -> bool {
        let (Some(&first), Some(&last)) = (self.cell_path.first(), self.cell_path.last()) else {
            return false;
        };
        if !self.is_terminal(first) || !self.is_terminal(last) {
            return false;
        }
        if first == last {
            return false;
        }

        self.cell_path.windows(2).all(|pair| pair[0].is_adjacent(pair[1]))
    }

    /// Whether `cell` is one of this wire's terminals.
    pub fn is_terminal(&self, cell: Location) -> bool {
        self.terminal1 == Some(cell) || self.terminal2 == Some(cell)
    }

    /// Whether `cell` lies on the current path.
    pub fn contains(&self, cell: Location) -> bool {
        self.cell_path.contains(&cell)
    }

    /// The tail of the current path, if any.
    pub fn last_cell(&self) -> Option<Location> {
        self.cell_path.last().copied()
    }

    /// Fill the terminal pair in discovery order. Calls past the second are ignored, which
    /// shields the wire from maps declaring a color more than twice.
    pub(crate) fn set_terminal(&mut self, cell: Location) {
        if self.terminal1.is_none() {
            self.terminal1 = Some(cell);
        } else if self.terminal2.is_none() {
            self.terminal2 = Some(cell);
        }
    }

    pub(crate) fn set_pressed(&mut self, pressed: bool) {
        self.is_pressed = pressed;
    }

    /// This wire's color.
    pub fn color(&self) -> ColorId {
        self.color
    }

    /// The terminal pair in discovery order. Both are set for any wire built from a
    /// well-formed map.
    pub fn terminals(&self) -> (Option<Location>, Option<Location>) {
        (self.terminal1, self.terminal2)
    }

    /// The current path, first-to-last in drag order.
    pub fn path(&self) -> &[Location] {
        &self.cell_path
    }

    /// The path as it stood at the end of the previous completed move.
    pub fn prev_path(&self) -> &[Location] {
        &self.prev_move_cell_path
    }

    /// Whether the cutting rules last left this wire validly connecting its terminals.
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Whether this wire is the one currently being dragged.
    pub fn is_pressed(&self) -> bool {
        self.is_pressed
    }
}
