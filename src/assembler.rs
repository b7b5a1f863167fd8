use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use super::grid::Grid;
use super::verifier::count_solutions;

/// A cell revealed to the player before solving begins.
/// Its value always equals the solution's value at that cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Clue {
    pub row: usize,
    pub col: usize,
    pub value: u8,
}

/// A playable puzzle: the full solution plus the clues revealed to the player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Puzzle {
    pub solution: Grid,
    pub clues: Vec<Clue>,
}

impl Puzzle {
    /// The grid as the player first sees it, with only the clue cells filled.
    pub fn clue_grid(&self) -> Grid {
        let mut grid = Grid::new_empty(self.solution.size());
        for clue in &self.clues {
            grid.set(clue.row, clue.col, Some(clue.value));
        }
        grid
    }
}

/// Builds a playable puzzle by revealing cells of `solution` until the clue
/// set certifies a unique completion.
///
/// Cells are revealed in a randomly shuffled order. Once `target_clue_count`
/// clues have been revealed, uniqueness is checked after every addition. If
/// the clue count reaches `size² − 2` without certification, the accumulated
/// clue set is returned anyway so that generation never blocks; the result is
/// then possibly ambiguous, which is an accepted quality trade-off rather
/// than an error.
pub fn assemble(solution: &Grid, target_clue_count: usize, rng: &mut impl Rng) -> Puzzle {
    assert!(solution.is_filled(), "solution must be fully filled");
    assert!(!solution.has_conflicts(), "solution must be a valid Latin square");

    let size = solution.size();
    // Revealing all but one cell would hand the player a finished grid, cap below that.
    let max_clues = solution.num_cells().saturating_sub(2);
    let target = target_clue_count.min(max_clues);

    let mut order: Vec<(usize, usize)> = (0..size)
        .flat_map(|row| (0..size).map(move |col| (row, col)))
        .collect();
    order.shuffle(rng);

    let mut clues = Vec::with_capacity(target);
    let mut clue_grid = Grid::new_empty(size);
    for (row, col) in order {
        let value = solution.get(row, col).unwrap();
        clues.push(Clue { row, col, value });
        clue_grid.set(row, col, Some(value));
        if clues.len() < target {
            continue;
        }
        if count_solutions(&clue_grid, 2) == 1 {
            return Puzzle {
                solution: solution.clone(),
                clues,
            };
        }
        if clues.len() >= max_clues {
            debug!(
                "returning a possibly ambiguous puzzle: clue cap of {} reached without certifying uniqueness",
                max_clues
            );
            return Puzzle {
                solution: solution.clone(),
                clues,
            };
        }
    }
    unreachable!("the clue cap is below the cell count, so the loop always returns");
}
