//! Error types for grid operations.
//!
//! "No match" and "no hint" are never errors; they are empty results.
//! An exhausted shuffle is reported through `ShuffleOutcome::Failed`.

use thiserror::Error;

use super::cell::Cell;

/// Errors returned by board and engine operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// A coordinate fell outside the `rows × columns` grid.
    #[error("cell {cell} is outside the {rows}x{columns} grid")]
    OutOfBounds {
        cell: Cell,
        rows: usize,
        columns: usize,
    },

    /// A swap between cells that are not adjacent, cross the section
    /// boundary, or include an empty cell. The board is left unchanged.
    #[error("cannot swap {a} with {b}: {reason}")]
    InvalidSwap {
        a: Cell,
        b: Cell,
        reason: SwapRejection,
    },

    /// Construction-time configuration failed validation.
    #[error("invalid grid configuration: {0}")]
    InvalidConfig(String),

    /// The engine is paused and does not accept moves.
    #[error("the engine is paused")]
    Paused,

    /// A section filled up and the session has ended.
    #[error("the game is over")]
    GameOver,

    /// Saved best scores could not be encoded or decoded.
    #[error("best-score table: {0}")]
    Persistence(String),
}

/// Why a swap request was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapRejection {
    /// The cells are not orthogonal neighbors.
    NotAdjacent,
    /// The cells are grid neighbors but lie in different sections.
    CrossSection,
    /// At least one of the cells holds no tile.
    EmptyCell,
}

impl std::fmt::Display for SwapRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SwapRejection::NotAdjacent => write!(f, "cells are not adjacent"),
            SwapRejection::CrossSection => write!(f, "cells are in different sections"),
            SwapRejection::EmptyCell => write!(f, "a cell is empty"),
        }
    }
}

/// Result alias used across the crate.
pub type GridResult<T> = Result<T, GridError>;
