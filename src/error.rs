//! This module contains the error and result definitions used in this crate.

use crate::Grid;

use std::fmt::{self, Display, Formatter};

/// An enumeration of the errors that can occur when constructing a
/// [Grid](crate::Grid).
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GridError {

    /// Indicates that the block side length requested for a grid is invalid.
    /// It must be at least 1, and at most [Grid::MAX_BLOCK_SIDE], so that
    /// every value of the grid can be written as a single digit character.
    InvalidBlockSide
}

impl Display for GridError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidBlockSide =>
                write!(f, "the block side length must be between 1 and {}",
                    Grid::MAX_BLOCK_SIDE)
        }
    }
}

impl std::error::Error for GridError { }

/// Syntactic sugar for `Result<V, GridError>`.
pub type GridResult<V> = Result<V, GridError>;

/// An enumeration of the errors that may occur when parsing a
/// [Grid](crate::Grid) from puzzle text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {

    /// Indicates that the block side length requested for the parsed grid is
    /// invalid (see [GridError::InvalidBlockSide]).
    InvalidBlockSide,

    /// Indicates that the input ended before a digit was read for every
    /// cell.
    UnexpectedEnd {

        /// The number of cells that were assigned before the input ran out.
        cells_read: usize
    },

    /// Indicates that a given digit repeats an earlier given within the same
    /// row, column, or block, i.e. the puzzle is contradictory as stated.
    /// Parsing stops at the offending cell.
    MalformedPuzzle {

        /// The row of the offending cell.
        row: usize,

        /// The column of the offending cell.
        col: usize,

        /// The grid as filled up to, but excluding, the offending digit.
        /// Drivers can display this so users see where the contradiction
        /// arose.
        partial: Grid
    },

    /// Indicates that a puzzle code does not have the length of any
    /// supported grid's digit string (see
    /// [Grid::to_digit_string](crate::Grid::to_digit_string)). This is only
    /// raised when deserializing, where the grid dimensions are deduced from
    /// the length of the code.
    WrongNumberOfCells
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidBlockSide =>
                write!(f, "the block side length must be between 1 and {}",
                    Grid::MAX_BLOCK_SIDE),
            ParseError::UnexpectedEnd { cells_read } =>
                write!(f, "the puzzle input ended after only {} cells",
                    cells_read),
            ParseError::MalformedPuzzle { row, col, .. } =>
                write!(f,
                    "the clue at row {}, col {} conflicts with an earlier \
                    clue", row, col),
            ParseError::WrongNumberOfCells =>
                write!(f,
                    "the puzzle code has the wrong number of cells for every \
                    supported grid size")
        }
    }
}

impl From<GridError> for ParseError {
    fn from(_: GridError) -> ParseError {
        ParseError::InvalidBlockSide
    }
}

impl std::error::Error for ParseError { }

/// Syntactic sugar for `Result<V, ParseError>`.
pub type ParseResult<V> = Result<V, ParseError>;
