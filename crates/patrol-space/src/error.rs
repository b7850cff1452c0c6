//! Error types for grid construction and spatial queries.

use patrol_core::Cell;
use std::fmt;

/// Errors arising from grid construction or spatial queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Attempted to construct a grid with zero rows or columns.
    EmptyGrid,
    /// The number of supplied cells does not match `rows * cols`.
    CellCountMismatch {
        /// `rows * cols`.
        expected: usize,
        /// Number of cells actually supplied.
        found: usize,
    },
    /// A map dimension does not fit in a `u32`.
    DimensionTooLarge {
        /// Which dimension (`"rows"` or `"cols"`).
        name: &'static str,
        /// The offending size.
        value: usize,
    },
    /// A map row has a different width from the first row.
    RaggedRow {
        /// Zero-based row index.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of this row.
        found: usize,
    },
    /// A map literal contains a character that is neither wall nor floor.
    UnknownTile {
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        col: usize,
        /// The offending character.
        ch: char,
    },
    /// A cell lies outside the grid.
    CellOutOfBounds {
        /// The offending cell.
        cell: Cell,
        /// Grid rows.
        rows: u32,
        /// Grid columns.
        cols: u32,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one row and one column"),
            Self::CellCountMismatch { expected, found } => {
                write!(f, "expected {expected} cells, got {found}")
            }
            Self::DimensionTooLarge { name, value } => {
                write!(f, "{name} = {value} exceeds u32::MAX")
            }
            Self::RaggedRow {
                row,
                expected,
                found,
            } => write!(f, "row {row} has width {found}, expected {expected}"),
            Self::UnknownTile { row, col, ch } => {
                write!(f, "unknown tile {ch:?} at row {row}, column {col}")
            }
            Self::CellOutOfBounds { cell, rows, cols } => {
                write!(f, "cell {cell} out of bounds: {cols} columns x {rows} rows")
            }
        }
    }
}

impl std::error::Error for GridError {}
