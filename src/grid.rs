use std::fmt;

use itertools::Itertools;

/// A [Grid] is a square `size x size` puzzle grid.
/// Each cell contains a symbol value in `0..size`, or `None` if the cell is empty.
/// A fully solved grid has every row and every column be a permutation of `0..size`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    size: usize,
    // Cells are ordered by rows, first left-to-right, then top-to-bottom.
    cells: Vec<Option<u8>>,
}

impl Grid {
    pub fn new_empty(size: usize) -> Self {
        assert!(size >= 1, "grid size must be at least 1");
        Grid {
            size,
            cells: vec![None; size * size],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn num_cells(&self) -> usize {
        self.size * self.size
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        assert!(row < self.size && col < self.size);
        row * self.size + col
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        self.cells[self.index(row, col)]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: Option<u8>) {
        if let Some(value) = value {
            assert!(usize::from(value) < self.size, "value out of range for grid");
        }
        let index = self.index(row, col);
        self.cells[index] = value;
    }

    pub fn is_filled(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub fn num_empty(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Returns the first empty cell in row-major order, or `None` if the grid is filled.
    pub fn first_empty_cell(&self) -> Option<(usize, usize)> {
        self.cells
            .iter()
            .position(Option::is_none)
            .map(|index| (index / self.size, index % self.size))
    }

    /// Returns whether `value` can be placed at `(row, col)` without
    /// repeating a value already present in that row or column.
    pub fn fits(&self, row: usize, col: usize, value: u8) -> bool {
        (0..self.size).all(|c| c == col || self.get(row, c) != Some(value))
            && (0..self.size).all(|r| r == row || self.get(r, col) != Some(value))
    }

    /// Returns whether any row or column contains the same value twice.
    /// Empty cells never conflict.
    pub fn has_conflicts(&self) -> bool {
        for i in 0..self.size {
            let mut row_values = (0..self.size).filter_map(|col| self.get(i, col));
            let mut col_values = (0..self.size).filter_map(|row| self.get(row, i));
            if !row_values.all_unique() || !col_values.all_unique() {
                return true;
            }
        }
        false
    }

    /// Parses a grid from a string with one row per line.
    /// Digits are symbol values, `_` is an empty cell, whitespace within a line is ignored.
    /// The grid size is taken from the number of non-empty lines.
    pub fn from_str(s: &str) -> Grid {
        let rows: Vec<Vec<Option<u8>>> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.chars()
                    .filter(|c| !c.is_whitespace())
                    .map(|c| match c {
                        '_' => None,
                        c => Some(c.to_digit(10).expect("expected a digit or '_'") as u8),
                    })
                    .collect()
            })
            .collect();
        let mut grid = Grid::new_empty(rows.len());
        for (row, values) in rows.iter().enumerate() {
            assert_eq!(grid.size, values.len(), "grid must be square");
            for (col, &value) in values.iter().enumerate() {
                grid.set(row, col, value);
            }
        }
        grid
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                if col > 0 {
                    write!(f, " ")?;
                }
                match self.get(row, col) {
                    Some(value) => write!(f, "{}", value)?,
                    None => write!(f, "_")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
