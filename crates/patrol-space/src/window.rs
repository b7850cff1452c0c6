//! Cross-shaped scan window around a cell.

use crate::error::GridError;
use crate::grid::Grid;
use patrol_core::Cell;
use smallvec::SmallVec;

/// The clipped 3×3 window around a center cell, scanned as a cross.
///
/// The window spans rows `[row - 1, row + 1]` and columns
/// `[col - 1, col + 1]`, clipped to the grid (no wraparound). Only the
/// center column and center row are ever candidates; diagonals are not.
///
/// # Examples
///
/// ```
/// use patrol_core::Cell;
/// use patrol_space::{CrossWindow, Grid};
///
/// let grid = Grid::open(3, 3).unwrap();
/// let w = CrossWindow::new(&grid, Cell::new(0, 0)).unwrap();
/// let cells: Vec<Cell> = w.candidates().into_iter().collect();
/// assert_eq!(
///     cells,
///     vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 0), Cell::new(1, 0)],
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CrossWindow {
    center: Cell,
    row_lo: u32,
    row_hi: u32,
    col_lo: u32,
    col_hi: u32,
}

impl CrossWindow {
    /// Build the window around `center`.
    ///
    /// Returns `Err(GridError::CellOutOfBounds)` if `center` is outside
    /// the grid.
    pub fn new(grid: &Grid, center: Cell) -> Result<Self, GridError> {
        if !grid.contains(center) {
            return Err(GridError::CellOutOfBounds {
                cell: center,
                rows: grid.rows(),
                cols: grid.cols(),
            });
        }
        Ok(Self {
            center,
            row_lo: center.row.saturating_sub(1),
            row_hi: (center.row + 1).min(grid.rows() - 1),
            col_lo: center.col.saturating_sub(1),
            col_hi: (center.col + 1).min(grid.cols() - 1),
        })
    }

    /// The cell the window is centered on.
    pub fn center(&self) -> Cell {
        self.center
    }

    /// Inclusive row range `(lo, hi)` after clipping.
    pub fn row_span(&self) -> (u32, u32) {
        (self.row_lo, self.row_hi)
    }

    /// Inclusive column range `(lo, hi)` after clipping.
    pub fn col_span(&self) -> (u32, u32) {
        (self.col_lo, self.col_hi)
    }

    /// Candidate cells in scan order.
    ///
    /// First the center column top to bottom, then the center row left to
    /// right. The center itself appears once in each pass. Passability is
    /// not considered here.
    pub fn candidates(&self) -> SmallVec<[Cell; 6]> {
        let mut out = SmallVec::new();
        for row in self.row_lo..=self.row_hi {
            out.push(Cell::new(self.center.col, row));
        }
        for col in self.col_lo..=self.col_hi {
            out.push(Cell::new(col, self.center.row));
        }
        out
    }
}
