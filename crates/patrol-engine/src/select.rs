//! Next-cell selection over the cross-shaped window.

use crate::weights::WeightField;
use patrol_core::Cell;
use patrol_space::{CrossWindow, Grid};

/// Outcome of a neighbour scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection {
    /// The chosen cell. Equal to the scan center when the agent idles.
    pub cell: Cell,
    /// The winning weight, or 0 when nothing beat the initial watermark.
    pub weight: u8,
}

/// Scan the cross window around `current` for the heaviest cell.
///
/// The running best starts at `current` with a watermark of 0. The center
/// column is scanned top to bottom, then the center row left to right; a
/// candidate replaces the best only if its weight is strictly greater, so
/// ties go to whichever cell was scanned first. Blocked cells are skipped.
///
/// If no candidate beats the watermark the agent stays on `current`.
///
/// `current` must lie within `grid`.
pub fn select(grid: &Grid, field: &WeightField, current: Cell) -> Selection {
    let mut best = Selection {
        cell: current,
        weight: 0,
    };
    debug_assert!(
        grid.contains(current),
        "scan center {current} is outside the grid"
    );
    let Ok(window) = CrossWindow::new(grid, current) else {
        return best;
    };
    for cand in window.candidates() {
        let Some(weight) = field.get(grid, cand) else {
            continue;
        };
        if weight > best.weight {
            best = Selection { cell: cand, weight };
        }
    }
    best
}

/// The cell [`select`] picks.
pub fn next_cell(grid: &Grid, field: &WeightField, current: Cell) -> Cell {
    select(grid, field, current).cell
}
