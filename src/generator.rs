use rand::seq::SliceRandom;
use rand::Rng;

use super::grid::Grid;

/// Generates a fully solved Latin square of the given size.
///
/// Cells are filled in row-major order by recursive backtracking, trying
/// candidate symbols in a randomly shuffled order so every call produces a
/// different square. A Latin square exists for every `size >= 1`, so the
/// search always succeeds.
pub fn generate_solved(size: usize, rng: &mut impl Rng) -> Grid {
    let mut grid = Grid::new_empty(size);
    let filled = fill_cells(&mut grid, 0, rng);
    assert!(filled, "Latin square search cannot fail for a valid size");
    debug_assert!(grid.is_filled());
    debug_assert!(!grid.has_conflicts());
    grid
}

// Invariant:
//  - When `fill_cells` returns false, `grid` is unchanged. Any changes made during execution have been undone.
fn fill_cells(grid: &mut Grid, index: usize, rng: &mut impl Rng) -> bool {
    if index == grid.num_cells() {
        // No cells left. The square is fully filled.
        return true;
    }
    let size = grid.size();
    let (row, col) = (index / size, index % size);

    let mut candidates: Vec<u8> = (0..size as u8).collect();
    candidates.shuffle(rng);
    for value in candidates {
        // Only cells filled so far can conflict, later cells are still empty.
        if grid.fits(row, col, value) {
            grid.set(row, col, Some(value));
            if fill_cells(grid, index + 1, rng) {
                return true;
            }
            // Undo before trying the next candidate
            grid.set(row, col, None);
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashSet;

    fn assert_is_latin_square(grid: &Grid) {
        let size = grid.size();
        assert!(grid.is_filled());
        assert!(!grid.has_conflicts());
        for i in 0..size {
            let mut row_values: Vec<u8> = (0..size).map(|col| grid.get(i, col).unwrap()).collect();
            let mut col_values: Vec<u8> = (0..size).map(|row| grid.get(row, i).unwrap()).collect();
            row_values.sort_unstable();
            col_values.sort_unstable();
            let expected: Vec<u8> = (0..size as u8).collect();
            assert_eq!(expected, row_values);
            assert_eq!(expected, col_values);
        }
    }

    #[test]
    fn valid_for_all_supported_sizes() {
        let mut rng = StdRng::seed_from_u64(0);
        for size in 1..=7 {
            let grid = generate_solved(size, &mut rng);
            assert_eq!(size, grid.size());
            assert_is_latin_square(&grid);
        }
    }

    #[test]
    fn trivial_size() {
        let mut rng = StdRng::seed_from_u64(0);
        let grid = generate_solved(1, &mut rng);
        assert_eq!(Some(0), grid.get(0, 0));
    }

    #[test]
    fn randomization_smoke_test() {
        // 100 squares from one seeded rng. With 576 possible 4x4 Latin
        // squares an occasional repeat is fine, but consecutive squares
        // should almost always differ in at least one cell.
        let mut rng = StdRng::seed_from_u64(42);
        let grids: Vec<Grid> = (0..100).map(|_| generate_solved(4, &mut rng)).collect();
        for grid in &grids {
            assert_is_latin_square(grid);
        }
        let differing_pairs = grids
            .windows(2)
            .filter(|pair| pair[0] != pair[1])
            .count();
        assert!(differing_pairs >= 95, "only {} of 99 pairs differ", differing_pairs);

        let distinct: HashSet<&Grid> = grids.iter().collect();
        assert!(distinct.len() > 50, "only {} distinct squares", distinct.len());
    }
}
