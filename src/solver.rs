//! This module contains the logic for solving puzzles.
//!
//! Most importantly, this module contains the definition of the [Solver]
//! trait and the [BacktrackingSolver] as a generally usable implementation.

use crate::Grid;

/// A trait for structs which have the ability to solve puzzles in place.
/// Implementers receive a mutable [Grid] and fill its free cells through the
/// grid's guarded interface, so a solver can never produce a grid that
/// violates the rules or touches fixed cells.
///
/// Solvers expect grids as they come out of parsing, i.e. every value is
/// part of a fixed cell. Values in free cells may be overwritten or cleared
/// by the search.
pub trait Solver {

    /// Solves, or attempts to solve, the given grid. On success, `true` is
    /// returned and the grid is full and consistent with the rules. On
    /// failure, `false` is returned and every value the search placed has
    /// been cleared again.
    fn solve(&self, grid: &mut Grid) -> bool;
}

/// A complete [Solver] which solves puzzles by recursively trying all
/// permitted values for each free cell, in ascending order, and backtracking
/// whenever it runs out of candidates. This means two things:
///
/// * Its worst-case runtime is exponential in the number of free cells,
/// i.e. it may be very slow if the puzzle has many missing digits.
/// * It finds a solution whenever one exists, so `false` is only returned
/// for grids that are truly unsolvable.
///
/// ```
/// use sudoku_backtrack::Grid;
/// use sudoku_backtrack::solver::{BacktrackingSolver, Solver};
///
/// let mut grid = Grid::parse_with_block_side(2, "0004043003000010").unwrap();
///
/// assert!(BacktrackingSolver.solve(&mut grid));
/// assert_eq!("3124243113424213", grid.to_digit_string());
/// ```
pub struct BacktrackingSolver;

impl BacktrackingSolver {
    fn solve_from(grid: &mut Grid, position: usize) -> bool {
        let size = grid.size();

        if position == size * size {
            return true;
        }

        let row = position / size;
        let col = position % size;

        if grid.get(row, col).is_fixed() {
            return BacktrackingSolver::solve_from(grid, position + 1);
        }

        for value in Grid::MIN_VALUE..=size {
            if grid.place(row, col, value) {
                if BacktrackingSolver::solve_from(grid, position + 1) {
                    return true;
                }

                grid.clear(row, col);
            }
        }

        false
    }
}

impl Solver for BacktrackingSolver {
    fn solve(&self, grid: &mut Grid) -> bool {
        BacktrackingSolver::solve_from(grid, 0)
    }
}
