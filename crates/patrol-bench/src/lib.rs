//! Benchmark profiles and utilities for raypatrol.
//!
//! Provides pre-built [`PatrolConfig`] profiles for benchmarking and the
//! headless demo:
//!
//! - [`reference_profile`]: the 10x10 reference map, start `(1, 1)`
//! - [`stress_profile`]: a large pillared hall for throughput runs
//! - [`render_ascii`]: text rendering of a world for terminals and logs

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use patrol_core::Cell;
use patrol_engine::{PatrolConfig, PatrolWorld};
use patrol_space::{Grid, Passability};
use patrol_test_utils::{reference_grid, REFERENCE_START};

/// Shading ramp from "just visited" to "long unvisited".
const RAMP: [char; 8] = [' ', '.', ':', '-', '=', '+', '*', '%'];

/// The reference map with the given frames per step.
pub fn reference_profile(step_interval: u32) -> PatrolConfig {
    PatrolConfig::new(reference_grid(), REFERENCE_START).with_step_interval(step_interval)
}

/// A `side` x `side` hall with a pillar every fourth cell on both axes.
///
/// One frame per step, start in the top-left corner.
///
/// # Panics
///
/// Panics if `side` is zero.
pub fn stress_profile(side: u32) -> PatrolConfig {
    let grid = Grid::from_fn(side, side, |cell| {
        if cell.row % 4 == 2 && cell.col % 4 == 2 {
            Passability::Blocked
        } else {
            Passability::Passable
        }
    })
    .expect("stress profile side must be non-zero");
    PatrolConfig::new(grid, Cell::new(0, 0)).with_step_interval(1)
}

/// Render the world as text, one line per row.
///
/// Walls are `#`, the agent's committed cell is `@`, its target is `o`,
/// and floor is shaded by weight: blank for just visited, `%` for cells
/// the agent has not been near for a long while.
pub fn render_ascii(world: &PatrolWorld) -> String {
    let grid = world.grid();
    let agent = world.agent();
    let mut out = String::with_capacity(grid.cell_count() + grid.rows() as usize);
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let cell = Cell::new(col, row);
            let ch = if cell == agent.previous() {
                '@'
            } else if cell == agent.next() {
                'o'
            } else {
                match world.weight(cell) {
                    Some(w) => RAMP[(w as usize * RAMP.len()) / 256],
                    None => '#',
                }
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}
