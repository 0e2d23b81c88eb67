use clap::Parser;

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use sudoku_backtrack::Grid;
use sudoku_backtrack::error::ParseError;
use sudoku_backtrack::solver::{BacktrackingSolver, Solver};

/// Solves a classic Sudoku puzzle with an exhaustive backtracking search.
///
/// The puzzle is read as a stream of digits in reading order, where 0 or '.'
/// stands for an empty cell and all other characters are skipped, so both a
/// single line of 81 digits and a pretty-printed grid are accepted.
#[derive(Parser)]
#[command(name = "sudoku-backtrack", version)]
struct Cli {

    /// Path to a file containing the puzzle. The puzzle is read from
    /// standard input if this is omitted.
    path: Option<PathBuf>,

    /// The side length of one block of the puzzle (3 for an ordinary 9x9
    /// grid).
    #[arg(long, default_value_t = 3)]
    block_side: usize,

    /// Print the solved grid as a single line of digits instead of a pretty
    /// grid.
    #[arg(long)]
    compact: bool
}

fn read_input(path: Option<&PathBuf>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

fn solve_and_print(mut grid: Grid, compact: bool) {
    println!("Unsolved puzzle ({} blanks):", grid.blank_count());
    println!("{}", grid);
    println!();

    if BacktrackingSolver.solve(&mut grid) {
        println!("Solved puzzle:");

        if compact {
            println!("{}", grid.to_digit_string());
        }
        else {
            println!("{}", grid);
        }
    }
    else {
        println!("Puzzle is unsolvable.");
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let input = match read_input(cli.path.as_ref()) {
        Ok(input) => input,
        Err(error) => {
            eprintln!("error reading puzzle: {}", error);
            return ExitCode::FAILURE;
        }
    };

    match Grid::parse_with_block_side(cli.block_side, input.as_str()) {
        Ok(grid) => {
            solve_and_print(grid, cli.compact);
            ExitCode::SUCCESS
        },
        Err(error) => {
            if let ParseError::MalformedPuzzle { ref partial, .. } = error {
                println!("Initial input:");
                println!("{}", partial);
            }

            eprintln!("error parsing puzzle: {}", error);
            ExitCode::FAILURE
        }
    }
}
