//! Immutable passability grid.

use crate::error::GridError;
use patrol_core::Cell;
use std::fmt;

/// Map-literal character for a blocked cell.
pub const WALL: char = '#';
/// Map-literal character for a passable cell.
pub const FLOOR: char = '.';

/// Whether the agent may stand on a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Passability {
    /// Open floor: carries a weight and may be selected.
    Passable,
    /// Wall: excluded from every weight and selection operation.
    Blocked,
}

impl Passability {
    /// Parse a single map-literal character.
    pub fn from_tile(ch: char) -> Option<Self> {
        match ch {
            WALL => Some(Self::Blocked),
            FLOOR => Some(Self::Passable),
            _ => None,
        }
    }

    /// The map-literal character for this cell.
    pub fn tile(self) -> char {
        match self {
            Self::Passable => FLOOR,
            Self::Blocked => WALL,
        }
    }
}

/// A fixed-size grid of passable and blocked cells.
///
/// Each cell is addressed by a [`Cell`] `(col, row)` with `col < cols` and
/// `row < rows`. Storage is row-major. The grid is immutable once built:
/// the only way to get a different map is to construct a new `Grid`.
///
/// A grid with no passable cells is a valid `Grid`; it is the patrol
/// engine that refuses to start on one.
///
/// # Examples
///
/// ```
/// use patrol_core::Cell;
/// use patrol_space::{Grid, Passability};
///
/// let grid = Grid::parse("#..\n...\n..#").unwrap();
/// assert_eq!((grid.cols(), grid.rows()), (3, 3));
/// assert_eq!(grid.passable_count(), 7);
/// assert_eq!(grid.passability(Cell::new(0, 0)), Ok(Passability::Blocked));
/// assert!(grid.is_passable(Cell::new(1, 0)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: u32,
    cols: u32,
    cells: Vec<Passability>,
    passable: usize,
}

impl Grid {
    /// Build a grid from row-major cells.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0 and
    /// `Err(GridError::CellCountMismatch)` if `cells.len() != rows * cols`.
    pub fn new(rows: u32, cols: u32, cells: Vec<Passability>) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid);
        }
        let expected = (rows as usize) * (cols as usize);
        if cells.len() != expected {
            return Err(GridError::CellCountMismatch {
                expected,
                found: cells.len(),
            });
        }
        let passable = cells
            .iter()
            .filter(|p| **p == Passability::Passable)
            .count();
        Ok(Self {
            rows,
            cols,
            cells,
            passable,
        })
    }

    /// Build a grid by evaluating `f` for every cell in row-major order.
    pub fn from_fn(
        rows: u32,
        cols: u32,
        mut f: impl FnMut(Cell) -> Passability,
    ) -> Result<Self, GridError> {
        let mut cells = Vec::with_capacity((rows as usize) * (cols as usize));
        for row in 0..rows {
            for col in 0..cols {
                cells.push(f(Cell::new(col, row)));
            }
        }
        Self::new(rows, cols, cells)
    }

    /// An all-passable grid.
    pub fn open(rows: u32, cols: u32) -> Result<Self, GridError> {
        Self::from_fn(rows, cols, |_| Passability::Passable)
    }

    /// Build a grid from map-literal rows (`#` wall, `.` floor).
    ///
    /// Every row must have the same width as the first.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        let Some(first) = rows.first() else {
            return Err(GridError::EmptyGrid);
        };
        let width = first.as_ref().chars().count();
        if width == 0 {
            return Err(GridError::EmptyGrid);
        }

        let mut cells = Vec::with_capacity(rows.len() * width);
        for (r, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let found = line.chars().count();
            if found != width {
                return Err(GridError::RaggedRow {
                    row: r,
                    expected: width,
                    found,
                });
            }
            for (c, ch) in line.chars().enumerate() {
                let tile = Passability::from_tile(ch).ok_or(GridError::UnknownTile {
                    row: r,
                    col: c,
                    ch,
                })?;
                cells.push(tile);
            }
        }

        let rows_u32 = u32::try_from(rows.len()).map_err(|_| GridError::DimensionTooLarge {
            name: "rows",
            value: rows.len(),
        })?;
        let cols_u32 = u32::try_from(width).map_err(|_| GridError::DimensionTooLarge {
            name: "cols",
            value: width,
        })?;
        Self::new(rows_u32, cols_u32, cells)
    }

    /// Parse a multi-line map literal.
    ///
    /// Surrounding whitespace on each line is ignored, as are blank lines
    /// before the first row and after the last.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = text.lines().map(str::trim).collect();
        let start = lines.iter().position(|l| !l.is_empty());
        let end = lines.iter().rposition(|l| !l.is_empty());
        match (start, end) {
            (Some(s), Some(e)) => Self::from_rows(&lines[s..=e]),
            _ => Err(GridError::EmptyGrid),
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Total number of cells, passable or not.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of passable cells.
    pub fn passable_count(&self) -> usize {
        self.passable
    }

    /// Whether `cell` lies within the grid.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.col < self.cols && cell.row < self.rows
    }

    /// Row-major rank of `cell`, or `None` if out of bounds.
    pub fn index(&self, cell: Cell) -> Option<usize> {
        if !self.contains(cell) {
            return None;
        }
        Some((cell.row as usize) * (self.cols as usize) + cell.col as usize)
    }

    /// Inverse of [`index`](Self::index).
    pub fn cell_at(&self, index: usize) -> Option<Cell> {
        if index >= self.cells.len() {
            return None;
        }
        let cols = self.cols as usize;
        Some(Cell::new((index % cols) as u32, (index / cols) as u32))
    }

    /// Passability of `cell`.
    pub fn passability(&self, cell: Cell) -> Result<Passability, GridError> {
        self.index(cell)
            .map(|i| self.cells[i])
            .ok_or(GridError::CellOutOfBounds {
                cell,
                rows: self.rows,
                cols: self.cols,
            })
    }

    /// `true` if `cell` is in bounds and passable.
    pub fn is_passable(&self, cell: Cell) -> bool {
        matches!(self.passability(cell), Ok(Passability::Passable))
    }

    /// Row-major passability slice.
    pub fn as_slice(&self) -> &[Passability] {
        &self.cells
    }

    /// Passable cells in row-major order.
    pub fn passable_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, p)| **p == Passability::Passable)
            .filter_map(move |(i, _)| self.cell_at(i))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.chunks(self.cols as usize).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for p in row {
                write!(f, "{}", p.tile())?;
            }
        }
        Ok(())
    }
}
