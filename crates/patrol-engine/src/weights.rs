//! The per-cell visitation weight field.

use patrol_core::{Cell, Fingerprint};
use patrol_space::{Grid, GridError, Passability};

/// Weight of a cell that has never been visited (or not for 255 ticks).
pub const MAX_WEIGHT: u8 = u8::MAX;

/// Ticks-since-last-visit counters, one per grid cell.
///
/// Storage is row-major and sized to the whole grid, but slots under
/// blocked cells are dead: no method reads or writes them once the field
/// exists. Every method that takes a [`Grid`] expects the grid the field
/// was built from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeightField {
    rows: u32,
    cols: u32,
    data: Vec<u8>,
}

impl WeightField {
    /// A fresh field: [`MAX_WEIGHT`] on every passable cell.
    pub fn new(grid: &Grid) -> Self {
        let data = grid
            .as_slice()
            .iter()
            .map(|p| match p {
                Passability::Passable => MAX_WEIGHT,
                Passability::Blocked => 0,
            })
            .collect();
        Self {
            rows: grid.rows(),
            cols: grid.cols(),
            data,
        }
    }

    /// Build a field from raw row-major weights, blocked slots included.
    ///
    /// Values under blocked cells are kept as-is and never touched again.
    pub fn from_raw(grid: &Grid, data: Vec<u8>) -> Result<Self, GridError> {
        if data.len() != grid.cell_count() {
            return Err(GridError::CellCountMismatch {
                expected: grid.cell_count(),
                found: data.len(),
            });
        }
        Ok(Self {
            rows: grid.rows(),
            cols: grid.cols(),
            data,
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Weight of `cell`, or `None` if it is blocked or out of bounds.
    pub fn get(&self, grid: &Grid, cell: Cell) -> Option<u8> {
        self.check_dims(grid);
        match grid.passability(cell) {
            Ok(Passability::Passable) => grid.index(cell).map(|i| self.data[i]),
            _ => None,
        }
    }

    /// Advance the field by one tick with the agent standing on `current`.
    ///
    /// Every passable counter saturate-increments by one, then the counter
    /// under `current` drops to zero. Blocked slots are skipped entirely.
    pub fn decay(&mut self, grid: &Grid, current: Cell) {
        self.check_dims(grid);
        for (w, p) in self.data.iter_mut().zip(grid.as_slice()) {
            if *p == Passability::Passable {
                *w = w.saturating_add(1);
            }
        }
        debug_assert!(
            grid.is_passable(current),
            "agent at {current} is not on a passable cell"
        );
        if grid.is_passable(current) {
            if let Some(i) = grid.index(current) {
                self.data[i] = 0;
            }
        }
    }

    /// Raw row-major storage, dead slots included.
    ///
    /// Intended for renderers that map weights straight to a colour
    /// channel; use [`get`](Self::get) for anything that must respect
    /// walls.
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// FNV-1a hash of the passable counters in row-major order.
    pub fn fingerprint(&self, grid: &Grid) -> u64 {
        self.check_dims(grid);
        let mut h = Fingerprint::new();
        h.u32(self.rows).u32(self.cols);
        for (w, p) in self.data.iter().zip(grid.as_slice()) {
            if *p == Passability::Passable {
                h.byte(*w);
            }
        }
        h.finish()
    }

    #[inline]
    fn check_dims(&self, grid: &Grid) {
        debug_assert_eq!(
            (self.rows, self.cols),
            (grid.rows(), grid.cols()),
            "weight field does not match grid dimensions"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn c(col: u32, row: u32) -> Cell {
        Cell::new(col, row)
    }

    #[test]
    fn new_field_is_max_on_floor() {
        let g = Grid::parse("#.\n..").unwrap();
        let f = WeightField::new(&g);
        assert_eq!(f.get(&g, c(0, 0)), None);
        assert_eq!(f.get(&g, c(1, 0)), Some(MAX_WEIGHT));
        assert_eq!(f.get(&g, c(0, 1)), Some(MAX_WEIGHT));
        assert_eq!(f.get(&g, c(1, 1)), Some(MAX_WEIGHT));
    }

    #[test]
    fn get_out_of_bounds_is_none() {
        let g = Grid::open(2, 2).unwrap();
        let f = WeightField::new(&g);
        assert_eq!(f.get(&g, c(2, 0)), None);
    }

    #[test]
    fn decay_increments_then_resets_current() {
        let g = Grid::open(1, 3).unwrap();
        let mut f = WeightField::from_raw(&g, vec![0, 10, 254]).unwrap();
        f.decay(&g, c(1, 0));
        assert_eq!(f.as_raw(), &[1, 0, 255]);
    }

    #[test]
    fn decay_saturates_at_max() {
        let g = Grid::open(1, 2).unwrap();
        let mut f = WeightField::new(&g);
        for _ in 0..10 {
            f.decay(&g, c(0, 0));
        }
        assert_eq!(f.get(&g, c(1, 0)), Some(MAX_WEIGHT));
        assert_eq!(f.get(&g, c(0, 0)), Some(0));
    }

    #[test]
    fn decay_skips_blocked_slots() {
        let g = Grid::parse(".#.").unwrap();
        let mut f = WeightField::from_raw(&g, vec![5, 77, 5]).unwrap();
        f.decay(&g, c(0, 0));
        assert_eq!(f.as_raw(), &[0, 77, 6]);
    }

    #[test]
    fn from_raw_rejects_wrong_length() {
        let g = Grid::open(2, 2).unwrap();
        assert_eq!(
            WeightField::from_raw(&g, vec![0; 3]),
            Err(GridError::CellCountMismatch {
                expected: 4,
                found: 3
            })
        );
    }

    #[test]
    fn fingerprint_ignores_blocked_slots() {
        let g = Grid::parse(".#").unwrap();
        let a = WeightField::from_raw(&g, vec![9, 0]).unwrap();
        let b = WeightField::from_raw(&g, vec![9, 200]).unwrap();
        let d = WeightField::from_raw(&g, vec![8, 0]).unwrap();
        assert_eq!(a.fingerprint(&g), b.fingerprint(&g));
        assert_ne!(a.fingerprint(&g), d.fingerprint(&g));
    }

    proptest! {
        #[test]
        fn decay_never_wraps_unvisited_cells(
            raw in proptest::collection::vec(any::<u8>(), 12),
            visits in proptest::collection::vec(0usize..12, 1..50),
        ) {
            let g = Grid::open(3, 4).unwrap();
            let mut f = WeightField::from_raw(&g, raw).unwrap();
            for v in visits {
                let current = g.cell_at(v).unwrap();
                let before = f.as_raw().to_vec();
                f.decay(&g, current);
                for (i, (&old, &new)) in before.iter().zip(f.as_raw()).enumerate() {
                    if i == v {
                        prop_assert_eq!(new, 0);
                    } else {
                        prop_assert_eq!(new, old.saturating_add(1));
                        prop_assert!(new >= old);
                    }
                }
            }
        }
    }
}
