//! Removal, gravity and refill.
//!
//! `remove_and_collapse` is one Removing → Collapsing → Spawning pass of the
//! resolution cycle. Re-detection after the pass is the engine's job.

mod gravity;
mod spawn;

pub use gravity::{collapse, is_settled, remove_matches};
pub use spawn::{spawn_count, spawn_replacement_tiles, SPAWN_DIVISOR};

use crate::board::Board;
use crate::core::{Cell, Palette, RandomSource};
use crate::events::{GridObserver, TileDelta};
use crate::matching::MatchSet;

/// What one removal pass did to the board.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CollapseReport {
    /// Tiles removed (one score signal each).
    pub removed_count: usize,
    /// Cells that received new tiles.
    pub spawned: Vec<Cell>,
    /// Removals, shifts and spawns in application order.
    pub deltas: Vec<TileDelta>,
}

impl CollapseReport {
    /// True if the pass changed nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deltas.is_empty()
    }
}

/// Remove the matched tiles, collapse every row, then spawn replacements.
///
/// An empty match set is a no-op: nothing is removed, moved or spawned.
pub fn remove_and_collapse<R: RandomSource, O: GridObserver>(
    board: &mut Board,
    matches: &MatchSet,
    palette: &Palette,
    min_new_tiles: usize,
    rng: &mut R,
    observer: &mut O,
) -> CollapseReport {
    if matches.is_empty() {
        return CollapseReport::default();
    }

    let mut deltas = remove_matches(board, matches, observer);
    let removed_count = deltas.len();
    deltas.extend(collapse(board));

    let spawned_deltas = spawn_replacement_tiles(board, palette, min_new_tiles, rng);
    let spawned = spawned_deltas.iter().map(TileDelta::cell).collect();
    deltas.extend(spawned_deltas);

    CollapseReport {
        removed_count,
        spawned,
        deltas,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameRng;
    use crate::events::EventLog;
    use crate::matching::find_all_matches;

    #[test]
    fn test_empty_match_set_is_noop() {
        let mut board = Board::from_pattern(0, &["12.", "..."]).unwrap();
        let before = board.clone();
        let mut log = EventLog::new();
        let report = remove_and_collapse(
            &mut board,
            &MatchSet::new(),
            &Palette::with_size(3),
            1,
            &mut GameRng::new(0),
            &mut log,
        );
        assert!(report.is_empty());
        assert_eq!(board, before);
        assert!(log.events().is_empty());
    }

    #[test]
    fn test_remove_and_collapse_counts() {
        let mut board = Board::from_pattern(
            7,
            &["1112", "2323", "3232", "2323", "3232", "2323", "3232", "2323"],
        )
        .unwrap();
        let matches = find_all_matches(&board);
        assert_eq!(matches.len(), 3);

        let mut log = EventLog::new();
        let report = remove_and_collapse(
            &mut board,
            &matches,
            &Palette::with_size(3),
            0,
            &mut GameRng::new(3),
            &mut log,
        );

        assert_eq!(report.removed_count, 3);
        assert_eq!(log.removed_count(), 3);
        // The 2 at (0,3) fell to (0,0).
        assert!(report.deltas.contains(&TileDelta::Shifted {
            from: Cell::new(0, 3),
            to: Cell::new(0, 0),
            kind: crate::core::TileKind(2),
        }));
        // 3 empty cells: a fifth rounds down to zero spawns.
        assert!(report.spawned.is_empty());
        assert_eq!(board.empty_count(), 3);
    }
}
