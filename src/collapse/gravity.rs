//! Removal and gravity.
//!
//! Tiles fall toward `y = 0`. Each row `x` compacts on its own, and since a
//! row lies entirely inside one section, compaction never crosses the split.

use crate::board::Board;
use crate::core::Cell;
use crate::events::{GridObserver, TileDelta};
use crate::matching::MatchSet;

/// Empty every matched cell, notifying the observer once per removed tile.
///
/// Cells that are already empty are skipped and not counted.
pub fn remove_matches<O: GridObserver>(
    board: &mut Board,
    matches: &MatchSet,
    observer: &mut O,
) -> Vec<TileDelta> {
    let mut removed = Vec::with_capacity(matches.len());
    for cell in matches.iter() {
        let Some(kind) = board.tile(cell) else {
            continue;
        };
        if board.set(cell, None).is_ok() {
            observer.on_tile_removed(cell, kind);
            removed.push(TileDelta::Removed { cell, kind });
        }
    }
    removed
}

/// Compact every row so all gaps end up at the high-`y` end.
///
/// Tiles keep their relative order. Returns one `Shifted` delta per tile
/// that moved.
pub fn collapse(board: &mut Board) -> Vec<TileDelta> {
    let mut shifted = Vec::new();
    for x in 0..board.rows() {
        collapse_row(board, x, &mut shifted);
    }
    shifted
}

fn collapse_row(board: &mut Board, x: usize, shifted: &mut Vec<TileDelta>) {
    let mut write_y = 0;
    for read_y in 0..board.columns() {
        let from = Cell::new(x, read_y);
        let Some(kind) = board.tile(from) else {
            continue;
        };
        if read_y != write_y {
            let to = Cell::new(x, write_y);
            // Both cells are in bounds by construction.
            if board.swap_cells(from, to).is_ok() {
                shifted.push(TileDelta::Shifted { from, to, kind });
            }
        }
        write_y += 1;
    }
}

/// True if no row has an empty cell below an occupied one.
#[must_use]
pub fn is_settled(board: &Board) -> bool {
    (0..board.rows()).all(|x| {
        let occupied = |y| board.is_occupied(Cell::new(x, y));
        match (0..board.columns()).position(|y| !occupied(y)) {
            Some(gap) => (gap..board.columns()).all(|y| !occupied(y)),
            None => true,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TileKind;
    use crate::events::EventLog;

    #[test]
    fn test_single_gap_fills_from_above() {
        let mut board = Board::from_pattern(3, &["123", "456", ".78", "9.."]).unwrap();
        let shifted = collapse(&mut board);

        assert_eq!(board.tile(Cell::new(2, 0)), Some(TileKind(7)));
        assert_eq!(board.tile(Cell::new(2, 1)), Some(TileKind(8)));
        assert_eq!(board.tile(Cell::new(2, 2)), None);
        assert_eq!(shifted.len(), 2);
        assert_eq!(shifted[0].distance(), 1);
    }

    #[test]
    fn test_collapse_preserves_order() {
        let mut board = Board::from_pattern(0, &[".1.2..3"]).unwrap();
        collapse(&mut board);
        assert_eq!(board, Board::from_pattern(0, &["123...."]).unwrap());
        assert!(is_settled(&board));
    }

    #[test]
    fn test_collapse_settled_board_is_noop() {
        let mut board = Board::from_pattern(0, &["12.", "..."]).unwrap();
        let before = board.clone();
        assert!(collapse(&mut board).is_empty());
        assert_eq!(board, before);
    }

    #[test]
    fn test_remove_notifies_per_tile() {
        let mut board = Board::from_pattern(0, &["111."]).unwrap();
        let matches = MatchSet::from_cells([
            Cell::new(0, 0),
            Cell::new(0, 1),
            Cell::new(0, 2),
            Cell::new(0, 3),
        ]);
        let mut log = EventLog::new();
        let removed = remove_matches(&mut board, &matches, &mut log);

        assert_eq!(removed.len(), 3);
        assert_eq!(log.removed_count(), 3);
        assert_eq!(board.empty_count(), 4);
    }

    #[test]
    fn test_is_settled() {
        assert!(is_settled(&Board::from_pattern(0, &["11.", "...", "1.."]).unwrap()));
        assert!(!is_settled(&Board::from_pattern(0, &[".1."]).unwrap()));
    }
}
