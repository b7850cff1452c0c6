//! Strongly-typed identifiers: the [`Cell`] coordinate and [`TickId`].

use std::fmt;

/// A cell coordinate on the patrol grid.
///
/// Ordered as `(column, row)`, matching screen axes: `col` is x and `row`
/// is y. Bounds are owned by the grid; a `Cell` on its own is just a pair
/// of non-negative integers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Column index (x axis).
    pub col: u32,
    /// Row index (y axis).
    pub row: u32,
}

impl Cell {
    /// Create a cell at `(col, row)`.
    pub const fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }

    /// Offset this cell by `(dc, dr)`.
    ///
    /// Returns `None` if either axis would go below zero or overflow.
    /// Upper bounds are not checked here; that is the grid's job.
    ///
    /// ```
    /// use patrol_core::Cell;
    ///
    /// assert_eq!(Cell::new(1, 1).offset(-1, 0), Some(Cell::new(0, 1)));
    /// assert_eq!(Cell::new(0, 3).offset(-1, 0), None);
    /// ```
    pub fn offset(self, dc: i32, dr: i32) -> Option<Self> {
        let col = self.col.checked_add_signed(dc)?;
        let row = self.row.checked_add_signed(dr)?;
        Some(Self { col, row })
    }

    /// Manhattan distance to `other`.
    pub fn manhattan(self, other: Cell) -> u32 {
        self.col.abs_diff(other.col) + self.row.abs_diff(other.row)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

impl From<(u32, u32)> for Cell {
    fn from((col, row): (u32, u32)) -> Self {
        Self { col, row }
    }
}

/// Monotonically increasing frame counter.
///
/// Incremented once per `advance_tick`, whether or not that frame
/// committed a logical step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickId(pub u64);

impl fmt::Display for TickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TickId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
