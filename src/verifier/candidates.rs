use bitvec::prelude::*;

use crate::grid::Grid;

/// Tracks which symbol values are already used in each row and each column,
/// so checking whether a value can still be placed in a cell is O(1).
#[derive(Clone)]
pub struct Candidates {
    size: usize,
    // One bit per (row, value) resp. (column, value). Set means the value is taken.
    row_used: BitVec,
    col_used: BitVec,
}

impl Candidates {
    pub fn from_grid(grid: &Grid) -> Self {
        let size = grid.size();
        let mut candidates = Self {
            size,
            row_used: bitvec![0; size * size],
            col_used: bitvec![0; size * size],
        };
        for row in 0..size {
            for col in 0..size {
                if let Some(value) = grid.get(row, col) {
                    candidates.mark(row, col, value);
                }
            }
        }
        candidates
    }

    #[inline]
    fn index(&self, line: usize, value: u8) -> usize {
        assert!(usize::from(value) < self.size);
        line * self.size + usize::from(value)
    }

    #[inline]
    pub fn is_possible(&self, row: usize, col: usize, value: u8) -> bool {
        !self.row_used[self.index(row, value)] && !self.col_used[self.index(col, value)]
    }

    #[inline]
    pub fn mark(&mut self, row: usize, col: usize, value: u8) {
        let row_index = self.index(row, value);
        let col_index = self.index(col, value);
        self.row_used.set(row_index, true);
        self.col_used.set(col_index, true);
    }

    #[inline]
    pub fn unmark(&mut self, row: usize, col: usize, value: u8) {
        let row_index = self.index(row, value);
        let col_index = self.index(col, value);
        self.row_used.set(row_index, false);
        self.col_used.set(col_index, false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_grid() {
        let grid = Grid::from_str(
            "
            0 1 _ _
            _ _ _ _
            _ _ 2 _
            _ _ _ _
        ",
        );
        let candidates = Candidates::from_grid(&grid);
        assert!(!candidates.is_possible(0, 2, 0)); // 0 taken in row 0
        assert!(!candidates.is_possible(3, 1, 1)); // 1 taken in column 1
        assert!(candidates.is_possible(0, 2, 3));
        assert!(candidates.is_possible(1, 0, 2));
        assert!(!candidates.is_possible(2, 0, 2)); // 2 taken in row 2
    }

    #[test]
    fn mark_and_unmark() {
        let grid = Grid::new_empty(4);
        let mut candidates = Candidates::from_grid(&grid);
        assert!(candidates.is_possible(1, 2, 3));
        candidates.mark(1, 2, 3);
        assert!(!candidates.is_possible(1, 2, 3));
        assert!(!candidates.is_possible(1, 0, 3)); // same row
        assert!(!candidates.is_possible(3, 2, 3)); // same column
        assert!(candidates.is_possible(3, 0, 3));
        candidates.unmark(1, 2, 3);
        assert!(candidates.is_possible(1, 2, 3));
    }
}
