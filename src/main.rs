use puzzlegen::{generate_number_puzzle, generate_puzzle};

fn main() {
    env_logger::init();

    let puzzle = generate_puzzle(6, 7).expect("valid parameters");
    println!("{}", puzzle.clue_grid());
    println!("Number of clues: {}", puzzle.clues.len());

    let number_puzzle = generate_number_puzzle(4, 9, 5).expect("valid parameters");
    println!("Grid: {:?}", number_puzzle.grid);
    for target in &number_puzzle.targets {
        println!("Target {} over cells {:?}", target.sum, target.cells);
    }
}
