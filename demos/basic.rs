//! Basic example of using the crossword engine

use crossword_core::{generate, is_solved, GeneratorConfig, WordBank};

fn main() {
    let bank = WordBank::builtin();
    let config = GeneratorConfig::default();

    println!("Generating the puzzle for 2026-10-15...\n");
    let puzzle = match generate(&bank, "2026-10-15", &config) {
        Ok(puzzle) => puzzle,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };

    println!("Solution:");
    println!("{}\n", puzzle.grid);
    println!(
        "{} words, {} trial(s), seed {}",
        puzzle.placements.len(),
        puzzle.meta.trials_run,
        puzzle.meta.base_seed
    );

    println!("\nAcross");
    for clue in puzzle.across() {
        println!("{:>3}. {} ({})", clue.number, clue.text, clue.answer.len());
    }
    println!("\nDown");
    for clue in puzzle.down() {
        println!("{:>3}. {} ({})", clue.number, clue.text, clue.answer.len());
    }

    // A fresh player grid is not solved; the solution itself is
    let player = puzzle.blank_player_grid();
    println!("\nBlank grid solved? {}", is_solved(&player, &puzzle.grid));
    println!("Solution solved? {}", is_solved(&puzzle.grid, &puzzle.grid));
}
