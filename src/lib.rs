#![warn(missing_docs)]

//! # `manganin`
//!
//! The board-state engine for a [Numberlink](https://en.wikipedia.org/wiki/Numberlink) /
//! Flow Free style "connect the dots" puzzle: a rectangular grid holds pairs of colored
//! terminals, the player drags a wire between each pair, and the puzzle is solved when
//! every wire validly connects its own terminals.
//!
//! Build a [`Board`] from a catalog level with [`Board::new`] or from an ad-hoc terminal
//! layout with a [`BoardBuilder`], then feed it the pointer event stream through
//! [`Board::update_on_press`], [`Board::update_on_drag`], and
//! [`Board::update_on_release`]. The board resolves each drag to grid cells, extends or
//! cuts the active wire, retracts wires whose territory was invaded, and rebuilds its
//! derived color and segment grids plus their string encodings after every event.
//!
//! # Internals
//! The wires' paths are the single source of truth. Each input event re-derives the color
//! grid (which wire claims each cell), the segment grid (a 4-bit per-cell mask of which
//! edges carry a wire line, for rendering), and the slash/comma [`codec`] strings used to
//! ship snapshots to other players. The rebuild is wholesale rather than incremental on
//! purpose; boards are at most 10x10 and correctness beats micro-performance here.
//!
//! Everything is synchronous and runs to completion, so no partial state is ever
//! observable between calls. Treat press/drag/release as a single-writer sequence, and
//! decode strings received from other players with [`codec::parse_grid`] into a separate
//! display grid rather than merging them into a live [`Board`].

pub use board::Board;
pub use builder::BoardBuilder;
pub use catalog::{Difficulty, TerminalMap};
pub use cell::{Cell, ColorId};
pub use error::BoardError;
pub use location::Location;
pub use mapper::CellMapper;
pub use shape::SquareStep;
pub use wire::Wire;

pub(crate) mod board;
pub(crate) mod builder;
pub(crate) mod catalog;
pub(crate) mod cell;
pub mod codec;
pub(crate) mod error;
pub(crate) mod location;
pub(crate) mod mapper;
pub(crate) mod shape;
mod tests;
pub(crate) mod wire;
