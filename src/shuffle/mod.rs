//! Stalemate recovery.
//!
//! When no swap can produce a match, the kinds already on the board are
//! permuted across the occupied cells until a legal move appears or the retry
//! budget runs out. The set of occupied cells never changes, only which kind
//! sits where.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{Cell, RandomSource, TileKind};
use crate::events::TileDelta;
use crate::matching::has_any_legal_move;

/// Result of `shuffle_if_stuck`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShuffleOutcome {
    /// A legal move already existed; the board was not touched.
    NotNeeded,
    /// The board became solvable after this many attempts.
    Resolved { attempts: u32 },
    /// Every attempt in the budget left the board stuck. The board keeps the
    /// last permutation.
    Failed { attempts: u32 },
}

impl ShuffleOutcome {
    /// Number of permutations applied.
    #[must_use]
    pub fn attempts(self) -> u32 {
        match self {
            ShuffleOutcome::NotNeeded => 0,
            ShuffleOutcome::Resolved { attempts } | ShuffleOutcome::Failed { attempts } => attempts,
        }
    }
}

/// Shuffle a stuck board, trying at most `retry_budget` permutations.
pub fn shuffle_if_stuck<R: RandomSource>(
    board: &mut Board,
    retry_budget: u32,
    rng: &mut R,
) -> ShuffleOutcome {
    if has_any_legal_move(board) {
        return ShuffleOutcome::NotNeeded;
    }

    let cells = board.occupied_cells();
    let mut kinds: Vec<TileKind> = cells.iter().filter_map(|&cell| board.tile(cell)).collect();

    for attempt in 1..=retry_budget {
        rng.shuffle(&mut kinds);
        write_back(board, &cells, &kinds);
        if has_any_legal_move(board) {
            log::info!("board shuffled into a solvable state after {} attempts", attempt);
            return ShuffleOutcome::Resolved { attempts: attempt };
        }
    }

    log::warn!(
        "shuffle budget of {} attempts exhausted, board is still stuck",
        retry_budget
    );
    ShuffleOutcome::Failed {
        attempts: retry_budget,
    }
}

fn write_back(board: &mut Board, cells: &[Cell], kinds: &[TileKind]) {
    for (&cell, &kind) in cells.iter().zip(kinds) {
        // Cells come from `occupied_cells`, so they are in bounds.
        let _ = board.set(cell, Some(kind));
    }
}

/// `Reassigned` deltas for every cell whose kind differs between two boards
/// of the same shape.
#[must_use]
pub fn reassignments(before: &Board, after: &Board) -> Vec<TileDelta> {
    after
        .all_cells()
        .filter_map(|cell| match (before.tile(cell), after.tile(cell)) {
            (Some(old), Some(kind)) if old != kind => Some(TileDelta::Reassigned { cell, kind }),
            _ => None,
        })
        .collect()
}
