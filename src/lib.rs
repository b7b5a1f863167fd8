mod assembler;
mod generator;
mod grid;
mod target_sum;
mod verifier;

pub use assembler::{assemble, Clue, Puzzle};
pub use generator::generate_solved;
pub use grid::Grid;
pub use target_sum::{generate_targets, TargetSum};
pub use verifier::count_solutions;

use rand::Rng;
use rayon::prelude::*;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GenerateError {
    #[error("grid size must be at least 1")]
    EmptyGrid,

    #[error("maximum cell value must be at least 1")]
    ZeroCellValue,
}

/// A number grid plus the target sums the player has to match.
/// `grid` holds `grid_size²` cell values in row-major order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NumberPuzzle {
    pub grid: Vec<u32>,
    pub targets: Vec<TargetSum>,
}

/// Generates a Latin-square puzzle: a full solution plus roughly
/// `prefilled_count` clues certifying a unique completion where possible.
pub fn generate_puzzle(grid_size: usize, prefilled_count: usize) -> Result<Puzzle, GenerateError> {
    generate_puzzle_with_rng(grid_size, prefilled_count, &mut rand::thread_rng())
}

/// Like [generate_puzzle], but with an explicit random source for deterministic replay.
pub fn generate_puzzle_with_rng(
    grid_size: usize,
    prefilled_count: usize,
    rng: &mut impl Rng,
) -> Result<Puzzle, GenerateError> {
    if grid_size == 0 {
        return Err(GenerateError::EmptyGrid);
    }
    let solution = generate_solved(grid_size, rng);
    Ok(assemble(&solution, prefilled_count, rng))
}

/// Generates a number puzzle: a grid of random values in `1..=max_cell_value`
/// plus `target_count` target sums over cell subsets.
pub fn generate_number_puzzle(
    grid_size: usize,
    max_cell_value: u32,
    target_count: usize,
) -> Result<NumberPuzzle, GenerateError> {
    generate_number_puzzle_with_rng(grid_size, max_cell_value, target_count, &mut rand::thread_rng())
}

/// Like [generate_number_puzzle], but with an explicit random source for deterministic replay.
pub fn generate_number_puzzle_with_rng(
    grid_size: usize,
    max_cell_value: u32,
    target_count: usize,
    rng: &mut impl Rng,
) -> Result<NumberPuzzle, GenerateError> {
    if grid_size == 0 {
        return Err(GenerateError::EmptyGrid);
    }
    if max_cell_value == 0 {
        return Err(GenerateError::ZeroCellValue);
    }
    let grid: Vec<u32> = (0..grid_size * grid_size)
        .map(|_| rng.gen_range(1..=max_cell_value))
        .collect();
    let targets = generate_targets(&grid, target_count, rng);
    Ok(NumberPuzzle { grid, targets })
}

/// Pregenerates `count` independent puzzles in parallel.
/// Each puzzle is generated from its own thread-local random source; there is
/// no shared state between generation calls.
pub fn generate_puzzle_batch(
    grid_size: usize,
    prefilled_count: usize,
    count: usize,
) -> Result<Vec<Puzzle>, GenerateError> {
    if grid_size == 0 {
        return Err(GenerateError::EmptyGrid);
    }
    Ok((0..count)
        .into_par_iter()
        .map(|_| {
            let mut rng = rand::thread_rng();
            let solution = generate_solved(grid_size, &mut rng);
            assemble(&solution, prefilled_count, &mut rng)
        })
        .collect())
}
