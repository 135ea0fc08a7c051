//! The slash/comma board-string format used to ship grid snapshots between players.
//!
//! Rows are joined by `/` and cells within a row by `,`, with no trailing separators.
//! Decoding is consumer-side only: a remote player's strings are parsed into a plain
//! display grid for rendering and never merged back into a live [`Board`](crate::Board).

use std::fmt::Display;

use itertools::Itertools;
use ndarray::Array2;

/// Serialize a rectangular numeric grid into the board-string format.
pub fn grid_to_string<T: Display>(grid: &Array2<T>) -> String {
    grid.rows()
        .into_iter()
        .map(|row| row.iter().join(","))
        .join("/")
}

/// Parse a board string back into a grid of cell values, best-effort per token.
///
/// A malformed token becomes [`None`], which a renderer treats as "draw nothing for this
/// cell"; decoding never fails outright.
pub fn parse_grid(s: &str) -> Vec<Vec<Option<i32>>> {
    s.split('/')
        .map(|row| row.split(',').map(|tok| tok.trim().parse().ok()).collect())
        .collect()
}
