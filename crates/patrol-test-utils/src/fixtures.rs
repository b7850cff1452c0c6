//! Reusable grid fixtures.
//!
//! - [`REFERENCE_MAP`]: the 10×10 patrol map with corridors and pillars.
//! - [`open_grid`]: no walls at all.
//! - [`walled_grid`]: floor ringed by a one-cell wall.
//! - [`enclosed_cell`]: a single floor cell with no passable neighbour.

use patrol_core::Cell;
use patrol_space::{Grid, Passability};

/// The 10×10 reference map. `#` is wall, `.` is floor.
pub const REFERENCE_MAP: [&str; 10] = [
    "#...#.....",
    "#.#...#.#.",
    "#.###.#.#.",
    "......#...",
    ".##.#.##.#",
    ".##.#..#.#",
    "....##.#.#",
    "#.#..#...#",
    "#.##.###.#",
    "#........#",
];

/// Start cell used with [`REFERENCE_MAP`].
pub const REFERENCE_START: Cell = Cell::new(1, 1);

/// [`REFERENCE_MAP`] as a grid.
pub fn reference_grid() -> Grid {
    Grid::from_rows(&REFERENCE_MAP).expect("reference map is well formed")
}

/// An all-floor grid.
pub fn open_grid(rows: u32, cols: u32) -> Grid {
    Grid::open(rows, cols).expect("open grid dimensions must be non-zero")
}

/// Floor surrounded by a one-cell wall border.
pub fn walled_grid(rows: u32, cols: u32) -> Grid {
    Grid::from_fn(rows, cols, |cell| {
        if cell.row == 0 || cell.col == 0 || cell.row == rows - 1 || cell.col == cols - 1 {
            Passability::Blocked
        } else {
            Passability::Passable
        }
    })
    .expect("walled grid dimensions must be non-zero")
}

/// A 3×3 grid whose only floor is the center, plus that center cell.
pub fn enclosed_cell() -> (Grid, Cell) {
    let grid = Grid::from_rows(&["###", "#.#", "###"]).expect("enclosed map is well formed");
    (grid, Cell::new(1, 1))
}
