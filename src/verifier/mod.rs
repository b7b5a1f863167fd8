use crate::grid::Grid;

mod candidates;
use candidates::Candidates;

/// Counts the completions of a partially filled grid, up to `cap`.
///
/// The filled cells of `start` act as fixed assignments; empty cells are
/// filled by backtracking under the row/column constraint. Candidate values
/// are tried in ascending order, so repeated calls on the same grid return
/// the same count. The search aborts as soon as `cap` completions have been
/// found, which keeps certifying uniqueness (`cap = 2`) cheap even though
/// the full solution space is factorial in the grid size.
///
/// A `start` grid that already violates the row/column constraint has no
/// completions and yields 0.
pub fn count_solutions(start: &Grid, cap: usize) -> usize {
    if cap == 0 || start.has_conflicts() {
        return 0;
    }
    let mut grid = start.clone();
    let mut candidates = Candidates::from_grid(&grid);
    count_from(&mut grid, &mut candidates, 0, cap)
}

// Invariant:
//  - When `count_from` returns, `grid` and `candidates` are unchanged. Any changes made during execution have been undone.
fn count_from(grid: &mut Grid, candidates: &mut Candidates, index: usize, cap: usize) -> usize {
    let size = grid.size();
    let mut index = index;
    // Skip over fixed cells
    while index < grid.num_cells() && grid.get(index / size, index % size).is_some() {
        index += 1;
    }
    if index == grid.num_cells() {
        // No empty cells left. The grid is fully completed.
        return 1;
    }
    let (row, col) = (index / size, index % size);

    let mut found = 0;
    for value in 0..size as u8 {
        if candidates.is_possible(row, col, value) {
            grid.set(row, col, Some(value));
            candidates.mark(row, col, value);
            found += count_from(grid, candidates, index + 1, cap - found);
            // Undo before checking the cap or trying the next value
            candidates.unmark(row, col, value);
            grid.set(row, col, None);
            if found >= cap {
                // The caller doesn't care about further solutions. Abort the search.
                return found;
            }
        }
    }
    found
}
