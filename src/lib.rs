// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(rustdoc::broken_intra_doc_links)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_codeblock_attributes)]

//! This crate implements an easy-to-understand classic Sudoku engine. It
//! supports the following key features:
//!
//! * Parsing puzzles from digit strings and printing them back, both as
//! compact codes and as pretty grids
//! * Checking moves and entire grids against the standard row, column, and
//! block rules
//! * Solving puzzles with an exhaustive backtracking search
//!
//! Note that in this introduction we will mostly be using 4x4 grids due to
//! their simpler nature. These are divided in 4 2x2 blocks, each with the
//! digits 1 to 4, just like each row and column.
//!
//! # Parsing and printing puzzles
//!
//! See [Grid::parse] for the exact format of a puzzle code.
//!
//! Codes can be used to exchange puzzles, while pretty prints can be used to
//! display a puzzle in a clearer manner. An example of how to parse and
//! display a grid is provided below.
//!
//! ```
//! use sudoku_backtrack::Grid;
//!
//! let grid = Grid::parse_with_block_side(2, "1234....34.2....").unwrap();
//! println!("{}", grid);
//! ```
//!
//! # Checking moves
//!
//! Every cell that holds a digit of the original puzzle is fixed, that is,
//! it can never be overwritten or cleared. All other cells only accept
//! digits that do not already occur in the same row, column, or block, so a
//! grid can never leave a state that is consistent with the rules.
//!
//! ```
//! use sudoku_backtrack::Grid;
//!
//! let mut grid = Grid::parse_with_block_side(2, "1234000000000000").unwrap();
//!
//! // 3 already appears in row 0 and in column 2.
//! assert!(!grid.place(1, 2, 3));
//!
//! // 1 conflicts with nothing around (1, 2).
//! assert!(grid.place(1, 2, 1));
//! assert!(grid.is_valid());
//! ```
//!
//! # Solving puzzles
//!
//! This crate offers a [Solver](solver::Solver) trait for types that attempt
//! to solve a puzzle in place. As a default implementation,
//! [BacktrackingSolver](solver::BacktrackingSolver) is provided, which finds
//! a solution whenever one exists.
//!
//! ```
//! use sudoku_backtrack::Grid;
//! use sudoku_backtrack::solver::{BacktrackingSolver, Solver};
//!
//! // A riddle with a unique solution:
//! // 0 0 | 0 4
//! // 0 4 | 3 0
//! // ----+----
//! // 0 3 | 0 0
//! // 0 0 | 1 0
//! let mut grid = Grid::parse_with_block_side(2, "0004043003000010").unwrap();
//!
//! assert!(BacktrackingSolver.solve(&mut grid));
//! assert_eq!("3124243113424213", grid.to_digit_string());
//! ```
//!
//! # Note regarding performance
//!
//! The backtracking search tries every candidate digit in every free cell,
//! so its worst-case running time grows exponentially with the number of
//! free cells. Ordinary 9x9 puzzles are solved within milliseconds, but
//! adversarial ones can take considerably longer. It is recommended to use
//! at least `opt-level = 2` in tests that solve many puzzles.

pub mod error;
pub mod solver;
pub mod util;


use error::{GridError, GridResult, ParseError, ParseResult};
use util::ValueSet;

use serde::{Deserialize, Serialize};

use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};

/// The character that parsing accepts as an explicit blank, besides the
/// digit 0.
const BLANK_CHAR: char = '.';

/// A single slot of a [Grid]. A cell holds a value, where
/// [Grid::EMPTY_VALUE] stands for an empty cell, and tracks whether that
/// value is fixed. Fixed cells hold digits of the original puzzle and can
/// never be changed again.
///
/// Cells cannot be manipulated directly. All changes go through the methods
/// of the containing [Grid], which enforce the rules.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Cell {
    value: usize,
    fixed: bool
}

impl Cell {

    fn new() -> Cell {
        Cell {
            value: Grid::EMPTY_VALUE,
            fixed: false
        }
    }

    /// Gets the value this cell currently holds. This is
    /// [Grid::EMPTY_VALUE] if the cell is empty.
    pub fn value(&self) -> usize {
        self.value
    }

    /// Indicates whether this cell holds a digit of the original puzzle. In
    /// that case, all attempts to change it fail.
    pub fn is_fixed(&self) -> bool {
        self.fixed
    }

    /// Indicates whether this cell is empty, i.e. holds
    /// [Grid::EMPTY_VALUE].
    pub fn is_empty(&self) -> bool {
        self.value == Grid::EMPTY_VALUE
    }

    /// Sets the value held by this cell, unless it is fixed. Returns `true`
    /// if the cell changed and `false` if it was fixed.
    pub(crate) fn set_value(&mut self, value: usize) -> bool {
        if self.fixed {
            return false;
        }

        self.value = value;
        true
    }

    /// Marks this cell as fixed. Idempotent.
    pub(crate) fn mark_fixed(&mut self) {
        self.fixed = true;
    }
}

/// A square grid of [Cell]s that is organized into square blocks. The block
/// side length determines everything else: a grid with blocks of side
/// length 3 is composed of 3x3 blocks, has 9 rows and columns, and holds the
/// digits 1 to 9.
///
/// The grid is the sole authority over its content. Digits only enter cells
/// through [Grid::place], which refuses any digit that already occurs in the
/// same row, column, or block, and cells holding digits of the original
/// puzzle are fixed and never change. A grid displaying like the one below
/// can therefore never hold two 5s in its top row, no matter which methods
/// are called on it.
///
/// ```text
/// 5 3 0 | 0 7 0 | 0 0 0
/// 6 0 0 | 1 9 5 | 0 0 0
/// 0 9 8 | 0 0 0 | 0 6 0
/// ------+-------+------
/// 8 0 0 | 0 6 0 | 0 0 3
/// 4 0 0 | 8 0 3 | 0 0 1
/// 7 0 0 | 0 2 0 | 0 0 6
/// ------+-------+------
/// 0 6 0 | 0 0 0 | 2 8 0
/// 0 0 0 | 4 1 9 | 0 0 5
/// 0 0 0 | 0 8 0 | 0 7 9
/// ```
///
/// `Grid` implements `Display` in the format shown above, where empty cells
/// are printed as 0 and block boundaries are drawn between the blocks. It
/// also serializes to and deserializes from the digit string described in
/// [Grid::to_digit_string].
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(into = "String")]
#[serde(try_from = "String")]
pub struct Grid {
    block_side: usize,
    size: usize,
    cells: Vec<Cell>,
    blank_count: usize
}

fn value_char(value: usize) -> char {
    ('0' as u8 + value as u8) as char
}

fn content_row(grid: &Grid, row: usize) -> String {
    let mut result = String::new();

    for col in 0..grid.size() {
        if col > 0 {
            result.push(' ');

            if col % grid.block_side() == 0 {
                result.push('|');
                result.push(' ');
            }
        }

        result.push(value_char(grid.get(row, col).value()));
    }

    result
}

fn separator_line(grid: &Grid) -> String {
    let block_side = grid.block_side();
    let mut result = String::new();

    for block in 0..block_side {
        if block > 0 {
            result.push('+');
        }

        // interior segments cover the "| " padding of the content rows
        let dashes = if block == 0 || block == block_side - 1 {
            2 * block_side
        }
        else {
            2 * block_side + 1
        };

        for _ in 0..dashes {
            result.push('-');
        }
    }

    result
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let separator_line = separator_line(self);

        for row in 0..self.size {
            if row > 0 {
                f.write_str("\n")?;

                if row % self.block_side == 0 {
                    f.write_str(separator_line.as_str())?;
                    f.write_str("\n")?;
                }
            }

            f.write_str(content_row(self, row).as_str())?;
        }

        Ok(())
    }
}

fn cell_value(c: char, size: usize) -> Option<usize> {
    match c.to_digit(10) {
        Some(digit) if digit as usize <= size => Some(digit as usize),
        _ if c == BLANK_CHAR => Some(Grid::EMPTY_VALUE),
        _ => None
    }
}

impl Grid {

    /// The value held by empty cells.
    pub const EMPTY_VALUE: usize = 0;

    /// The smallest value a filled cell can hold. The largest one is the
    /// size of the grid in question.
    pub const MIN_VALUE: usize = 1;

    /// The largest supported block side length. Larger grids would require
    /// values beyond 9, which can no longer be written as single digit
    /// characters.
    pub const MAX_BLOCK_SIDE: usize = 3;

    /// Creates a new, empty grid whose blocks have the given side length.
    /// The total width and height of the grid will be equal to the square of
    /// `block_side`.
    ///
    /// # Arguments
    ///
    /// * `block_side`: The side length of one block of the grid. To ensure
    /// square blocks tiling a square grid, this is also the number of blocks
    /// along each axis. For an ordinary Sudoku grid, this is 3. Must be in
    /// the range `[1, MAX_BLOCK_SIDE]`.
    ///
    /// # Errors
    ///
    /// If `block_side` is invalid (zero or greater than
    /// [Grid::MAX_BLOCK_SIDE]). In that case, `GridError::InvalidBlockSide`
    /// is returned.
    pub fn new(block_side: usize) -> GridResult<Grid> {
        if block_side < 1 || block_side > Grid::MAX_BLOCK_SIDE {
            return Err(GridError::InvalidBlockSide);
        }

        let size = block_side * block_side;

        Ok(Grid {
            block_side,
            size,
            cells: vec![Cell::new(); size * size],
            blank_count: size * size
        })
    }

    /// Parses a code encoding a standard puzzle with 3x3 blocks. Equivalent
    /// to [Grid::parse_with_block_side] with a block side length of 3; see
    /// there for a description of the format.
    ///
    /// # Errors
    ///
    /// Any specialization of `ParseError` (see that documentation).
    pub fn parse(code: &str) -> ParseResult<Grid> {
        Grid::parse_with_block_side(3, code)
    }

    /// Parses a code encoding a puzzle whose blocks have the given side
    /// length. The code is scanned for cell characters, which are assigned
    /// left-to-right, top-to-bottom, where each row is completed before the
    /// next one is started. A cell character is either a digit in the range
    /// `[0, size]` or `'.'`, with 0 and `'.'` both denoting an empty cell.
    /// All other characters, including digits greater than the grid size,
    /// are treated as separators and skipped, which allows puzzles to be
    /// formatted with spaces, line breaks, or commas as desired. Scanning
    /// stops once every cell has received a character; anything after that
    /// is ignored.
    ///
    /// As an example, the codes `"1234....34.2...."` and
    ///
    /// ```text
    /// 1 2 | 3 4
    /// . . | . .
    /// ----+----
    /// 3 4 | . 2
    /// . . | . .
    /// ```
    ///
    /// parse to the same grid with a block side length of 2.
    ///
    /// Every nonzero digit becomes a fixed cell which cannot be changed
    /// afterwards. Digits are also checked against the rules as they are
    /// assigned, so a contradictory puzzle is rejected at the first cell
    /// that repeats a digit within a row, column, or block.
    ///
    /// # Arguments
    ///
    /// * `block_side`: The side length of one block of the encoded grid.
    /// Must be in the range `[1, MAX_BLOCK_SIDE]`.
    /// * `code`: The code that specifies the puzzle in the format described
    /// above.
    ///
    /// # Errors
    ///
    /// * `ParseError::InvalidBlockSide`: If `block_side` is zero or greater
    /// than [Grid::MAX_BLOCK_SIDE].
    /// * `ParseError::UnexpectedEnd`: If the code ends before every cell has
    /// received a character.
    /// * `ParseError::MalformedPuzzle`: If a digit repeats an earlier digit
    /// within a row, column, or block. The error carries the position of the
    /// offending cell and the grid as parsed up to that point.
    pub fn parse_with_block_side(block_side: usize, code: &str)
            -> ParseResult<Grid> {
        let mut grid = Grid::new(block_side)?;
        let size = grid.size();
        let mut chars = code.chars();

        for row in 0..size {
            for col in 0..size {
                let value = loop {
                    match chars.next() {
                        Some(c) =>
                            if let Some(value) = cell_value(c, size) {
                                break value;
                            },
                        None =>
                            return Err(ParseError::UnexpectedEnd {
                                cells_read: row * size + col
                            })
                    }
                };

                if value == Grid::EMPTY_VALUE {
                    continue;
                }

                if grid.place(row, col, value) {
                    grid.mark_fixed(row, col);
                }
                else {
                    return Err(ParseError::MalformedPuzzle {
                        row,
                        col,
                        partial: grid
                    });
                }
            }
        }

        Ok(grid)
    }

    /// Gets the side length of one block of the grid. To ensure square
    /// blocks tiling a square grid, this is also the number of blocks along
    /// each axis.
    pub fn block_side(&self) -> usize {
        self.block_side
    }

    /// Gets the total size of the grid on one axis (horizontally or
    /// vertically). This is the square of [Grid::block_side] and also the
    /// largest value a cell can hold.
    pub fn size(&self) -> usize {
        self.size
    }

    fn assert_in_bounds(&self, row: usize, col: usize) {
        assert!(row < self.size && col < self.size,
            "cell ({}, {}) is out of bounds for a grid of size {}", row, col,
            self.size);
    }

    fn index(&self, row: usize, col: usize) -> usize {
        self.assert_in_bounds(row, col);
        row * self.size + col
    }

    /// Gets a reference to the cell at the specified position.
    ///
    /// # Arguments
    ///
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, size[`.
    /// * `col`: The column (x-coordinate) of the desired cell. Must be in
    /// the range `[0, size[`.
    ///
    /// # Panics
    ///
    /// If `row` or `col` are out of bounds. Coordinates are not data but
    /// part of the calling code, so violations are programming errors.
    pub fn get(&self, row: usize, col: usize) -> &Cell {
        let index = self.index(row, col);
        &self.cells[index]
    }

    fn row_contains(&self, row: usize, value: usize) -> bool {
        for col in 0..self.size {
            if self.get(row, col).value() == value {
                return true;
            }
        }

        false
    }

    fn column_contains(&self, col: usize, value: usize) -> bool {
        for row in 0..self.size {
            if self.get(row, col).value() == value {
                return true;
            }
        }

        false
    }

    fn block_contains(&self, row: usize, col: usize, value: usize) -> bool {
        let block_row = (row / self.block_side) * self.block_side;
        let block_col = (col / self.block_side) * self.block_side;

        for r in block_row..(block_row + self.block_side) {
            for c in block_col..(block_col + self.block_side) {
                if self.get(r, c).value() == value {
                    return true;
                }
            }
        }

        false
    }

    /// Indicates whether the given value could be placed in the cell at the
    /// specified position without repeating a value within its row, column,
    /// or block. [Grid::EMPTY_VALUE] can always be placed, since clearing a
    /// cell never introduces a conflict.
    ///
    /// Note that the scan does not exempt the probed cell itself, so asking
    /// about the value a cell already holds yields `false`. Note also that
    /// this method does not consider fixedness; placing on a fixed cell
    /// still fails (see [Grid::place]).
    ///
    /// # Arguments
    ///
    /// * `row`: The row (y-coordinate) of the checked cell. Must be in the
    /// range `[0, size[`.
    /// * `col`: The column (x-coordinate) of the checked cell. Must be in
    /// the range `[0, size[`.
    /// * `value`: The value to check, either [Grid::EMPTY_VALUE] or in the
    /// range `[1, size]`.
    ///
    /// # Panics
    ///
    /// If `row` or `col` are out of bounds or `value` is greater than the
    /// grid size.
    pub fn can_place(&self, row: usize, col: usize, value: usize) -> bool {
        self.assert_in_bounds(row, col);
        assert!(value <= self.size,
            "value {} is out of range for a grid of size {}", value,
            self.size);

        if value == Grid::EMPTY_VALUE {
            return true;
        }

        !self.row_contains(row, value) && !self.column_contains(col, value)
            && !self.block_contains(row, col, value)
    }

    /// Places the given value in the cell at the specified position, if the
    /// rules permit it. The placement fails if the value already occurs in
    /// the cell's row, column, or block, or if the cell is fixed. Placing
    /// [Grid::EMPTY_VALUE] clears the cell, which is always permitted on
    /// cells that are not fixed.
    ///
    /// This method returns `true` if the cell changed and `false` if the
    /// placement was refused, in which case the grid is unchanged.
    ///
    /// # Arguments
    ///
    /// * `row`: The row (y-coordinate) of the assigned cell. Must be in the
    /// range `[0, size[`.
    /// * `col`: The column (x-coordinate) of the assigned cell. Must be in
    /// the range `[0, size[`.
    /// * `value`: The value to assign, either [Grid::EMPTY_VALUE] or in the
    /// range `[1, size]`.
    ///
    /// # Panics
    ///
    /// If `row` or `col` are out of bounds or `value` is greater than the
    /// grid size.
    pub fn place(&mut self, row: usize, col: usize, value: usize) -> bool {
        if !self.can_place(row, col, value) {
            return false;
        }

        let index = self.index(row, col);
        self.cells[index].set_value(value)
    }

    /// Clears the cell at the specified position, unless it is fixed.
    /// Equivalent to placing [Grid::EMPTY_VALUE] with [Grid::place];
    /// clearing an already empty cell succeeds without a change.
    ///
    /// This method returns `true` if the cell is now empty and `false` if it
    /// was fixed.
    ///
    /// # Arguments
    ///
    /// * `row`: The row (y-coordinate) of the cleared cell. Must be in the
    /// range `[0, size[`.
    /// * `col`: The column (x-coordinate) of the cleared cell. Must be in
    /// the range `[0, size[`.
    ///
    /// # Panics
    ///
    /// If `row` or `col` are out of bounds.
    pub fn clear(&mut self, row: usize, col: usize) -> bool {
        self.place(row, col, Grid::EMPTY_VALUE)
    }

    /// Marks the cell at the specified position as fixed, i.e. turns its
    /// current value into a digit of the original puzzle which can never be
    /// changed again. This is done automatically for every nonzero digit
    /// encountered while parsing. Fixing an already fixed cell has no
    /// effect.
    ///
    /// # Arguments
    ///
    /// * `row`: The row (y-coordinate) of the fixed cell. Must be in the
    /// range `[0, size[`.
    /// * `col`: The column (x-coordinate) of the fixed cell. Must be in the
    /// range `[0, size[`.
    ///
    /// # Panics
    ///
    /// If `row` or `col` are out of bounds, or if the cell is empty. An
    /// empty fixed cell could never be filled, so fixing one is a
    /// programming error.
    pub fn mark_fixed(&mut self, row: usize, col: usize) {
        let index = self.index(row, col);
        let cell = &mut self.cells[index];

        assert!(!cell.is_empty(), "cell ({}, {}) is empty and cannot be fixed",
            row, col);

        if !cell.is_fixed() {
            cell.mark_fixed();
            self.blank_count -= 1;
        }
    }

    /// Gets the number of cells that are not fixed, i.e. the number of
    /// cells a solver has to fill. Unlike [Grid::count_empty], this number
    /// does not change when values are placed or cleared, only when cells
    /// are fixed.
    pub fn blank_count(&self) -> usize {
        self.blank_count
    }

    /// Counts the cells that currently hold [Grid::EMPTY_VALUE].
    pub fn count_empty(&self) -> usize {
        self.cells.iter()
            .filter(|cell| cell.is_empty())
            .count()
    }

    /// Indicates whether this grid is full, i.e. every cell is filled with
    /// a value. In this case, [Grid::count_empty] returns 0.
    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(|cell| cell.is_empty())
    }

    /// Indicates whether this grid is consistent with the rules, i.e. no
    /// value occurs more than once within any row, column, or block. Empty
    /// cells are ignored, so a partially filled grid can be valid.
    ///
    /// Since all changes are guarded by [Grid::place], grids whose content
    /// entered through the public interface are always valid. This check
    /// exists as an independent judgment that does not rely on how the
    /// content came to be.
    pub fn is_valid(&self) -> bool {
        self.rows_valid() && self.columns_valid() && self.blocks_valid()
    }

    fn rows_valid(&self) -> bool {
        let mut seen = ValueSet::new(self.size);

        for row in 0..self.size {
            seen.clear();

            for col in 0..self.size {
                let value = self.get(row, col).value();

                if value != Grid::EMPTY_VALUE && !seen.insert(value) {
                    return false;
                }
            }
        }

        true
    }

    fn columns_valid(&self) -> bool {
        let mut seen = ValueSet::new(self.size);

        for col in 0..self.size {
            seen.clear();

            for row in 0..self.size {
                let value = self.get(row, col).value();

                if value != Grid::EMPTY_VALUE && !seen.insert(value) {
                    return false;
                }
            }
        }

        true
    }

    fn blocks_valid(&self) -> bool {
        let mut seen = ValueSet::new(self.size);

        for block_row in 0..self.block_side {
            for block_col in 0..self.block_side {
                seen.clear();

                let start_row = block_row * self.block_side;
                let start_col = block_col * self.block_side;

                for row in start_row..(start_row + self.block_side) {
                    for col in start_col..(start_col + self.block_side) {
                        let value = self.get(row, col).value();

                        if value != Grid::EMPTY_VALUE && !seen.insert(value) {
                            return false;
                        }
                    }
                }
            }
        }

        true
    }

    /// Returns an iterator over the rows of this grid, from top to bottom.
    /// Each row is a slice of its cells from left to right.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.size)
    }

    /// Converts the grid into a string of `size * size` digit characters in
    /// left-to-right, top-to-bottom order, where empty cells are written as
    /// 0. The result is consistent with [Grid::parse], that is, a grid that
    /// is converted to a digit string and parsed again holds the same
    /// values, as is illustrated below.
    ///
    /// ```
    /// use sudoku_backtrack::Grid;
    ///
    /// let mut grid = Grid::new(2).unwrap();
    ///
    /// // Just some arbitrary changes to create some content.
    /// grid.place(1, 1, 4);
    /// grid.place(2, 1, 3);
    ///
    /// let code = grid.to_digit_string();
    /// assert_eq!("0000040003000000", code.as_str());
    ///
    /// let parsed = Grid::parse_with_block_side(2, code.as_str()).unwrap();
    /// assert_eq!(code, parsed.to_digit_string());
    /// ```
    ///
    /// Note that parsing fixes all nonzero digits, so the cells of the
    /// parsed grid may be fixed where the cells of the original grid were
    /// not.
    pub fn to_digit_string(&self) -> String {
        self.cells.iter()
            .map(|cell| value_char(cell.value()))
            .collect()
    }
}

impl Default for Grid {
    fn default() -> Grid {
        Grid::new(3).unwrap()
    }
}

impl From<Grid> for String {
    fn from(grid: Grid) -> String {
        grid.to_digit_string()
    }
}

impl TryFrom<String> for Grid {
    type Error = ParseError;

    fn try_from(code: String) -> ParseResult<Grid> {
        let block_side = (1..=Grid::MAX_BLOCK_SIDE)
            .find(|side| side.pow(4) == code.len())
            .ok_or(ParseError::WrongNumberOfCells)?;

        Grid::parse_with_block_side(block_side, &code)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    // A classic puzzle with a unique solution, taken from the World Puzzle
    // Federation Sudoku GP 2020 Round 8 (Puzzle 2):
    // https://gp.worldpuzzle.org/sites/default/files/Puzzles/2020/2020_SudokuRound8.pdf

    const CLASSIC_CODE: &str = "000081000002007800053000170370000000600000\
        003000000024069000230005900400000650000";

    const CLASSIC_SOLUTION: &str = "746281359912537846853496172374125698628\
        749513591368724169874235285913467437652981";

    #[test]
    fn parse_ok() {
        let grid = Grid::parse(
            "000081000
             002007800
             053000170
             370000000
             600000003
             000000024
             069000230
             005900400
             000650000").unwrap();

        assert_eq!(3, grid.block_side());
        assert_eq!(9, grid.size());
        assert_eq!(8, grid.get(0, 4).value());
        assert!(grid.get(0, 4).is_fixed());
        assert_eq!(1, grid.get(0, 5).value());
        assert_eq!(5, grid.get(2, 1).value());
        assert_eq!(4, grid.get(7, 6).value());
        assert!(grid.get(0, 0).is_empty());
        assert!(!grid.get(0, 0).is_fixed());
        assert!(grid.get(8, 8).is_empty());
        assert_eq!(CLASSIC_CODE, grid.to_digit_string().as_str());
        assert_eq!(57, grid.blank_count());
        assert_eq!(57, grid.count_empty());
    }

    #[test]
    fn parse_accepts_dot_as_blank() {
        let grid =
            Grid::parse_with_block_side(2, ".1.2........2.1.").unwrap();

        assert_eq!(1, grid.get(0, 1).value());
        assert_eq!(2, grid.get(0, 3).value());
        assert_eq!(2, grid.get(3, 0).value());
        assert_eq!(1, grid.get(3, 2).value());
        assert_eq!(12, grid.count_empty());
        assert_eq!(12, grid.blank_count());
    }

    #[test]
    fn parse_skips_separator_characters() {
        let plain = Grid::parse_with_block_side(2, "1234....3412....")
            .unwrap();
        let decorated = Grid::parse_with_block_side(2,
            "1,2 | 3,4
             . . | . .
             ----+----
             3,4 | 1,2
             . . | . .").unwrap();

        assert_eq!(plain, decorated);
    }

    #[test]
    fn parse_skips_digits_beyond_grid_size() {
        // 7 and 9 cannot be cells of a 4x4 grid, so they act as separators
        let grid = Grid::parse_with_block_side(2, "712349....734127....9")
            .unwrap();

        assert_eq!("1234000034120000", grid.to_digit_string().as_str());
    }

    #[test]
    fn parse_ignores_trailing_input() {
        let grid =
            Grid::parse_with_block_side(2, "1234....3412....garbage 55")
                .unwrap();

        assert_eq!("1234000034120000", grid.to_digit_string().as_str());
    }

    #[test]
    fn parse_unexpected_end() {
        assert_eq!(Err(ParseError::UnexpectedEnd { cells_read: 2 }),
            Grid::parse("53"));
        assert_eq!(Err(ParseError::UnexpectedEnd { cells_read: 2 }),
            Grid::parse("53,,"));
        assert_eq!(Err(ParseError::UnexpectedEnd { cells_read: 0 }),
            Grid::parse(""));
    }

    #[test]
    fn parse_rejects_row_conflict() {
        let result = Grid::parse("500500000");

        if let Err(ParseError::MalformedPuzzle { row, col, partial }) = result {
            assert_eq!(0, row);
            assert_eq!(3, col);
            assert_eq!(5, partial.get(0, 0).value());
            assert!(partial.get(0, 0).is_fixed());
            assert!(partial.get(0, 3).is_empty());
            assert_eq!(80, partial.blank_count());
        }
        else {
            panic!("contradictory puzzle was not rejected");
        }
    }

    #[test]
    fn parse_rejects_column_conflict() {
        let result = Grid::parse("500000000500000000");

        if let Err(ParseError::MalformedPuzzle { row, col, .. }) = result {
            assert_eq!(1, row);
            assert_eq!(0, col);
        }
        else {
            panic!("contradictory puzzle was not rejected");
        }
    }

    #[test]
    fn parse_rejects_block_conflict() {
        let result = Grid::parse("500000000050000000");

        if let Err(ParseError::MalformedPuzzle { row, col, .. }) = result {
            assert_eq!(1, row);
            assert_eq!(1, col);
        }
        else {
            panic!("contradictory puzzle was not rejected");
        }
    }

    #[test]
    fn parse_invalid_block_side() {
        assert_eq!(Err(ParseError::InvalidBlockSide),
            Grid::parse_with_block_side(0, ""));
        assert_eq!(Err(ParseError::InvalidBlockSide),
            Grid::parse_with_block_side(4, ""));
    }

    #[test]
    fn new_grid_dimensions() {
        let grid1 = Grid::new(1).unwrap();
        let grid2 = Grid::new(2).unwrap();
        let grid3 = Grid::new(3).unwrap();

        assert_eq!(1, grid1.size());
        assert_eq!(4, grid2.size());
        assert_eq!(9, grid3.size());
        assert_eq!(1, grid1.blank_count());
        assert_eq!(16, grid2.blank_count());
        assert_eq!(81, grid3.blank_count());
    }

    #[test]
    fn new_grid_invalid_block_side() {
        assert_eq!(Err(GridError::InvalidBlockSide), Grid::new(0));
        assert_eq!(Err(GridError::InvalidBlockSide), Grid::new(4));
    }

    #[test]
    fn default_grid_is_standard() {
        let grid = Grid::default();

        assert_eq!(3, grid.block_side());
        assert_eq!(9, grid.size());
        assert_eq!(81, grid.count_empty());
    }

    #[test]
    fn place_and_get() {
        let mut grid = Grid::new(3).unwrap();

        assert!(grid.place(4, 6, 7));
        assert_eq!(7, grid.get(4, 6).value());
        assert!(!grid.get(4, 6).is_fixed());

        // overwriting with a conflict-free value is permitted
        assert!(grid.place(4, 6, 8));
        assert_eq!(8, grid.get(4, 6).value());
    }

    #[test]
    fn place_rejects_conflicts() {
        let mut grid = Grid::new(3).unwrap();
        grid.place(0, 0, 5);

        assert!(!grid.place(0, 8, 5));
        assert!(grid.get(0, 8).is_empty());
        assert!(!grid.place(8, 0, 5));
        assert!(grid.get(8, 0).is_empty());
        assert!(!grid.place(1, 1, 5));
        assert!(grid.get(1, 1).is_empty());

        // the same value is fine outside row, column, and block
        assert!(grid.place(1, 4, 5));
    }

    #[test]
    fn clear_leaves_cell_empty() {
        let mut grid = Grid::new(3).unwrap();
        grid.place(2, 3, 4);

        assert!(grid.clear(2, 3));
        assert!(grid.get(2, 3).is_empty());

        // clearing an empty cell is a permitted no-op
        assert!(grid.clear(2, 3));

        // placing the empty value clears as well
        grid.place(2, 3, 4);

        assert!(grid.place(2, 3, Grid::EMPTY_VALUE));
        assert!(grid.get(2, 3).is_empty());
    }

    #[test]
    fn fixed_cells_reject_changes() {
        let mut grid =
            Grid::parse_with_block_side(2, "1...............").unwrap();

        assert!(!grid.place(0, 0, 2));
        assert_eq!(1, grid.get(0, 0).value());
        assert!(!grid.clear(0, 0));
        assert_eq!(1, grid.get(0, 0).value());
        assert!(grid.get(0, 0).is_fixed());
    }

    #[test]
    fn mark_fixed_is_idempotent() {
        let mut grid = Grid::new(3).unwrap();
        grid.place(0, 0, 5);

        assert_eq!(81, grid.blank_count());

        grid.mark_fixed(0, 0);

        assert_eq!(80, grid.blank_count());

        grid.mark_fixed(0, 0);

        assert_eq!(80, grid.blank_count());
    }

    #[test]
    #[should_panic]
    fn mark_fixed_empty_cell_panics() {
        let mut grid = Grid::new(3).unwrap();
        grid.mark_fixed(0, 0);
    }

    #[test]
    fn can_place_sees_the_probed_cell_itself() {
        let mut grid = Grid::new(3).unwrap();
        grid.place(3, 3, 7);

        // the scan does not exempt the cell itself
        assert!(!grid.can_place(3, 3, 7));
        assert!(grid.can_place(3, 3, 8));
    }

    #[test]
    fn can_place_empty_value_is_always_allowed() {
        let mut grid =
            Grid::parse_with_block_side(2, "1...............").unwrap();
        grid.place(1, 0, 2);

        assert!(grid.can_place(1, 0, Grid::EMPTY_VALUE));

        // can_place ignores fixedness, but place does not
        assert!(grid.can_place(0, 0, Grid::EMPTY_VALUE));
        assert!(!grid.place(0, 0, Grid::EMPTY_VALUE));
    }

    #[test]
    #[should_panic]
    fn get_row_out_of_bounds_panics() {
        let grid = Grid::new(3).unwrap();
        grid.get(9, 0);
    }

    #[test]
    #[should_panic]
    fn get_column_out_of_bounds_panics() {
        // must panic even though row * size + col stays within the buffer
        let grid = Grid::new(3).unwrap();
        grid.get(0, 9);
    }

    #[test]
    #[should_panic]
    fn place_value_out_of_range_panics() {
        let mut grid = Grid::new(3).unwrap();
        grid.place(0, 0, 10);
    }

    #[test]
    fn count_empty_and_is_full() {
        let empty = Grid::new(3).unwrap();
        let partial = Grid::parse(CLASSIC_CODE).unwrap();
        let full = Grid::parse(CLASSIC_SOLUTION).unwrap();

        assert_eq!(81, empty.count_empty());
        assert_eq!(57, partial.count_empty());
        assert_eq!(0, full.count_empty());

        assert!(!empty.is_full());
        assert!(!partial.is_full());
        assert!(full.is_full());
        assert_eq!(0, full.blank_count());
    }

    #[test]
    fn is_valid_accepts_solution() {
        let empty = Grid::new(3).unwrap();
        let partial = Grid::parse(CLASSIC_CODE).unwrap();
        let full = Grid::parse(CLASSIC_SOLUTION).unwrap();

        assert!(empty.is_valid());
        assert!(partial.is_valid());
        assert!(full.is_valid());
    }

    #[test]
    fn is_valid_detects_duplicates() {
        // write to the cells directly, bypassing the placement guard
        let mut row_dup = Grid::new(3).unwrap();
        row_dup.cells[0].set_value(5);
        row_dup.cells[8].set_value(5);

        assert!(!row_dup.is_valid());

        let mut col_dup = Grid::new(3).unwrap();
        col_dup.cells[0].set_value(5);
        col_dup.cells[72].set_value(5);

        assert!(!col_dup.is_valid());

        let mut block_dup = Grid::new(3).unwrap();
        block_dup.cells[1].set_value(5);
        block_dup.cells[9].set_value(5);

        assert!(!block_dup.is_valid());
    }

    #[test]
    fn invariants_hold_through_placing_and_clearing() {
        let mut grid = Grid::new(3).unwrap();

        assert!(grid.place(0, 0, 1));
        assert!(grid.is_valid());
        assert!(grid.place(0, 1, 2));
        assert!(grid.is_valid());
        assert!(grid.place(1, 0, 3));
        assert!(grid.is_valid());
        assert!(!grid.place(0, 4, 1));
        assert!(grid.is_valid());
        assert!(grid.clear(0, 1));
        assert!(grid.is_valid());
        assert!(grid.place(4, 4, 1));
        assert!(grid.is_valid());
    }

    #[test]
    fn rows_iterate_in_reading_order() {
        let grid = Grid::parse_with_block_side(2, "1234....3412....")
            .unwrap();
        let rows: Vec<&[Cell]> = grid.rows().collect();

        assert_eq!(4, rows.len());
        assert_eq!(1, rows[0][0].value());
        assert_eq!(4, rows[0][3].value());
        assert_eq!(3, rows[2][0].value());
        assert!(rows[1][0].is_empty());
    }

    #[test]
    fn digit_string_round_trip() {
        let grid = Grid::parse(CLASSIC_CODE).unwrap();
        let code = grid.to_digit_string();

        assert_eq!(CLASSIC_CODE, code.as_str());

        let reparsed = Grid::parse(code.as_str()).unwrap();

        assert_eq!(grid, reparsed);
    }

    #[test]
    fn display_4x4() {
        let grid = Grid::parse_with_block_side(2, "1234....3412....")
            .unwrap();
        let expected = "1 2 | 3 4\n\
            0 0 | 0 0\n\
            ----+----\n\
            3 4 | 1 2\n\
            0 0 | 0 0";

        assert_eq!(expected, format!("{}", grid).as_str());
    }

    #[test]
    fn display_9x9() {
        let grid = Grid::parse(CLASSIC_CODE).unwrap();
        let expected = "0 0 0 | 0 8 1 | 0 0 0\n\
            0 0 2 | 0 0 7 | 8 0 0\n\
            0 5 3 | 0 0 0 | 1 7 0\n\
            ------+-------+------\n\
            3 7 0 | 0 0 0 | 0 0 0\n\
            6 0 0 | 0 0 0 | 0 0 3\n\
            0 0 0 | 0 0 0 | 0 2 4\n\
            ------+-------+------\n\
            0 6 9 | 0 0 0 | 2 3 0\n\
            0 0 5 | 9 0 0 | 4 0 0\n\
            0 0 0 | 6 5 0 | 0 0 0";

        assert_eq!(expected, format!("{}", grid).as_str());
    }

    #[test]
    fn display_1x1() {
        let empty = Grid::new(1).unwrap();
        let filled = Grid::parse_with_block_side(1, "1").unwrap();

        assert_eq!("0", format!("{}", empty).as_str());
        assert_eq!("1", format!("{}", filled).as_str());
    }

    #[test]
    fn try_from_string_infers_dimensions() {
        let grid = Grid::try_from(String::from("1234....3412...."))
            .unwrap();

        assert_eq!(2, grid.block_side());

        let grid = Grid::try_from(String::from(CLASSIC_CODE)).unwrap();

        assert_eq!(3, grid.block_side());
    }

    #[test]
    fn try_from_string_rejects_wrong_length() {
        assert_eq!(Err(ParseError::WrongNumberOfCells),
            Grid::try_from(String::from("123")));
        assert_eq!(Err(ParseError::WrongNumberOfCells),
            Grid::try_from(String::from("")));
    }

    #[test]
    fn serialize_to_digit_string() {
        let grid = Grid::parse(CLASSIC_CODE).unwrap();
        let json = serde_json::to_string(&grid).unwrap();

        assert_eq!(format!("\"{}\"", CLASSIC_CODE), json);
    }

    #[test]
    fn deserialize_from_digit_string() {
        let json = format!("\"{}\"", CLASSIC_CODE);
        let grid: Grid = serde_json::from_str(json.as_str()).unwrap();

        assert_eq!(CLASSIC_CODE, grid.to_digit_string().as_str());
        assert!(grid.get(0, 4).is_fixed());
    }

    #[test]
    fn deserialize_rejects_invalid_puzzles() {
        assert!(serde_json::from_str::<Grid>("\"123\"").is_err());
        assert!(serde_json::from_str::<Grid>(
            format!("\"{}\"", "5".repeat(81)).as_str()).is_err());
    }
}
