//! Two-point tweening between grid cells.
//!
//! The logical simulation moves the agent one whole cell per step; the
//! renderer wants a continuous position every frame. These helpers know
//! nothing about grids or weights: they blend two coordinate pairs by a
//! progress fraction, one axis at a time.

use crate::id::Cell;

/// Linear interpolation: `l + t * (r - l)`.
///
/// `t == 0.0` returns `l` exactly.
#[inline]
pub fn lerp(l: f32, r: f32, t: f32) -> f32 {
    l + t * (r - l)
}

/// Interpolate between two cells, returning `(x, y)` in grid units.
///
/// `x` follows the column axis and `y` the row axis.
///
/// ```
/// use patrol_core::{interpolate, Cell};
///
/// let (x, y) = interpolate(Cell::new(1, 1), Cell::new(1, 2), 0.5);
/// assert_eq!((x, y), (1.0, 1.5));
/// ```
pub fn interpolate(from: Cell, to: Cell, t: f32) -> (f32, f32) {
    (
        lerp(from.col as f32, to.col as f32, t),
        lerp(from.row as f32, to.row as f32, t),
    )
}

/// Progress through a step of `interval` frames, as a fraction.
///
/// Lies in `[0, 1)` whenever `phase < interval`. An `interval` of zero
/// yields `0.0` rather than dividing by zero.
pub fn phase_fraction(phase: u32, interval: u32) -> f32 {
    if interval == 0 {
        return 0.0;
    }
    phase as f32 / interval as f32
}

/// Scale a grid-space position into screen space.
pub fn to_pixels((x, y): (f32, f32), cell_w: f32, cell_h: f32) -> (f32, f32) {
    (x * cell_w, y * cell_h)
}
