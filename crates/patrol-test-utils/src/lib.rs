//! Test fixtures and map builders for raypatrol development.
//!
//! Provides the reference 10×10 patrol map, a handful of small degenerate
//! maps for edge cases, and helpers for turning ASCII pictures into grids
//! and raw weight vectors.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    enclosed_cell, open_grid, reference_grid, walled_grid, REFERENCE_MAP, REFERENCE_START,
};

use patrol_core::Cell;
use patrol_space::Grid;

/// Shorthand for [`Cell::new`].
pub fn c(col: u32, row: u32) -> Cell {
    Cell::new(col, row)
}

/// Flatten row-major weight rows into the raw vector `WeightField::from_raw`
/// expects.
///
/// Panics if rows are ragged; this is test scaffolding.
pub fn raw_weights(rows: &[&[u8]]) -> Vec<u8> {
    let width = rows.first().map_or(0, |r| r.len());
    assert!(
        rows.iter().all(|r| r.len() == width),
        "ragged weight rows"
    );
    rows.iter().flat_map(|r| r.iter().copied()).collect()
}

/// Raw weights with every slot set to `value`, sized to `grid`.
pub fn uniform_weights(grid: &Grid, value: u8) -> Vec<u8> {
    vec![value; grid.cell_count()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_weights_flattens_row_major() {
        assert_eq!(raw_weights(&[&[1, 2], &[3, 4]]), vec![1, 2, 3, 4]);
    }

    #[test]
    #[should_panic(expected = "ragged")]
    fn raw_weights_rejects_ragged_rows() {
        raw_weights(&[&[1, 2], &[3]]);
    }

    #[test]
    fn uniform_weights_match_grid_size() {
        let g = open_grid(3, 4);
        assert_eq!(uniform_weights(&g, 7).len(), 12);
    }
}
