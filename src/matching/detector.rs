//! Run detection and swap evaluation.
//!
//! ## Section rules
//!
//! Lines are scanned one section at a time. A column scan only walks the
//! rows of its own section, so two rows on either side of the split are never
//! compared, even though their coordinates are adjacent.
//!
//! ## Empty cells
//!
//! An empty cell never matches anything, including another empty cell.

use crate::board::Board;
use crate::core::{Cell, SectionId, TileKind};

use super::match_set::{Axis, MatchSet, Run};

/// Shortest line of equal tiles that counts as a match.
pub const MIN_RUN: usize = 3;

/// Find every run of three or more in both sections.
#[must_use]
pub fn find_all_matches(board: &Board) -> MatchSet {
    let mut runs = Vec::new();
    for section in board.sections() {
        collect_section_runs(board, section, &mut runs);
    }
    MatchSet::from_runs(runs)
}

/// Runs within a single section.
#[must_use]
pub fn find_section_matches(board: &Board, section: SectionId) -> MatchSet {
    let mut runs = Vec::new();
    collect_section_runs(board, section, &mut runs);
    MatchSet::from_runs(runs)
}

fn collect_section_runs(board: &Board, section: SectionId, runs: &mut Vec<Run>) {
    let rows = board.section_rows(section);
    for x in rows.clone() {
        let line = (0..board.columns()).map(|y| Cell::new(x, y));
        scan_line(board, line, Axis::Row, runs);
    }
    for y in 0..board.columns() {
        let line = rows.clone().map(|x| Cell::new(x, y));
        scan_line(board, line, Axis::Column, runs);
    }
}

/// Walk a line of cells and record every maximal run of `MIN_RUN` or more.
fn scan_line(
    board: &Board,
    line: impl Iterator<Item = Cell>,
    axis: Axis,
    runs: &mut Vec<Run>,
) {
    let mut current: Option<(Cell, TileKind)> = None;
    let mut len = 0;

    let mut flush = |current: Option<(Cell, TileKind)>, len: usize| {
        if let Some((start, kind)) = current {
            if len >= MIN_RUN {
                runs.push(Run { kind, start, len, axis });
            }
        }
    };

    for cell in line {
        let tile = board.tile(cell);
        match (tile, current) {
            (Some(kind), Some((_, run_kind))) if kind == run_kind => len += 1,
            _ => {
                flush(current, len);
                current = tile.map(|kind| (cell, kind));
                len = usize::from(tile.is_some());
            }
        }
    }
    flush(current, len);
}

/// Would swapping `a` and `b` create a run through either cell?
///
/// The swap is evaluated on a read-only view of the board, so the board is
/// never touched. Only the row and column windows of two cells either side of
/// each swapped position are inspected. Adjacency is the caller's concern.
#[must_use]
pub fn would_match(board: &Board, a: Cell, b: Cell) -> bool {
    let view = |cell: Cell| {
        if cell == a {
            board.tile(b)
        } else if cell == b {
            board.tile(a)
        } else {
            board.tile(cell)
        }
    };

    [(a, board.tile(b)), (b, board.tile(a))]
        .into_iter()
        .any(|(cell, kind)| match kind {
            Some(kind) => forms_run(board, &view, cell, kind),
            None => false,
        })
}

/// True if `kind` placed at `cell` would sit inside a run of `MIN_RUN`,
/// looking at most two cells along each direction.
fn forms_run(
    board: &Board,
    view: &impl Fn(Cell) -> Option<TileKind>,
    cell: Cell,
    kind: TileKind,
) -> bool {
    let reach = MIN_RUN as isize - 1;
    let extend = |dx: isize, dy: isize| -> usize {
        let mut count = 0;
        for step in 1..=reach {
            let Some(next) = board.offset(cell, dx * step, dy * step) else {
                break;
            };
            if !board.in_same_section(cell.x, next.x) || view(next) != Some(kind) {
                break;
            }
            count += 1;
        }
        count
    };

    let along_row = 1 + extend(0, -1) + extend(0, 1);
    let along_column = 1 + extend(-1, 0) + extend(1, 0);
    along_row >= MIN_RUN || along_column >= MIN_RUN
}

/// Adjacent, same-section, occupied cell pairs in hint order.
///
/// Sections in order, cells row-major within each, and for each cell the
/// right neighbor `(x + 1, y)` before the down neighbor `(x, y + 1)`. A right
/// neighbor across the split is skipped.
pub fn swap_candidates(board: &Board) -> impl Iterator<Item = (Cell, Cell)> + '_ {
    board
        .all_cells()
        .filter(move |&cell| board.is_occupied(cell))
        .flat_map(move |cell| {
            [cell.right(), cell.down()]
                .into_iter()
                .filter(move |&other| {
                    board.is_occupied(other) && board.in_same_section(cell.x, other.x)
                })
                .map(move |other| (cell, other))
        })
}

/// True iff some candidate swap would produce a match.
#[must_use]
pub fn has_any_legal_move(board: &Board) -> bool {
    swap_candidates(board).any(|(a, b)| would_match(board, a, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_three_by_three() {
        let board = Board::from_pattern(2, &["111", "111", "111"]).unwrap();
        let matches = find_all_matches(&board);
        assert_eq!(matches.len(), 9);
        assert_eq!(matches.runs().len(), 6);
    }

    #[test]
    fn test_row_run() {
        let board = Board::from_pattern(3, &["01110", "20202", "31313", "42424"]).unwrap();
        let matches = find_all_matches(&board);
        assert_eq!(
            matches.cells(),
            &[Cell::new(0, 1), Cell::new(0, 2), Cell::new(0, 3)]
        );
        assert_eq!(matches.runs()[0].axis, Axis::Row);
    }

    #[test]
    fn test_long_run_is_single_run() {
        let board = Board::from_pattern(0, &["22222"]).unwrap();
        let matches = find_all_matches(&board);
        assert_eq!(matches.len(), 5);
        assert_eq!(matches.runs().len(), 1);
        assert_eq!(matches.runs()[0].len, 5);
    }

    #[test]
    fn test_column_run_stops_at_split() {
        // Rows 1 and 2 straddle the split at row 1.
        let board = Board::from_pattern(1, &["1", "1", "1", "2"]).unwrap();
        assert!(find_all_matches(&board).is_empty());

        let board = Board::from_pattern(2, &["1", "1", "1", "2"]).unwrap();
        assert_eq!(find_all_matches(&board).len(), 3);
    }

    #[test]
    fn test_empty_cells_never_match() {
        let board = Board::from_pattern(0, &["...", "1.1"]).unwrap();
        assert!(find_all_matches(&board).is_empty());
    }

    #[test]
    fn test_section_matches() {
        let board = Board::from_pattern(0, &["111", "222"]).unwrap();
        assert_eq!(find_section_matches(&board, SectionId::Left).len(), 3);
        assert_eq!(
            find_section_matches(&board, SectionId::Right).cells(),
            &[Cell::new(1, 0), Cell::new(1, 1), Cell::new(1, 2)]
        );
    }

    #[test]
    fn test_would_match_row() {
        // Swapping (1,2) up into (0,2) completes 1 1 1 on row 0.
        let board = Board::from_pattern(1, &["112", "031"]).unwrap();
        assert!(would_match(&board, Cell::new(0, 2), Cell::new(1, 2)));
        assert!(!would_match(&board, Cell::new(0, 0), Cell::new(1, 0)));
    }

    #[test]
    fn test_would_match_centered_window() {
        // Moving the 1 into the middle of "1.1" style gap.
        let board = Board::from_pattern(1, &["121", "313"]).unwrap();
        assert!(would_match(&board, Cell::new(0, 1), Cell::new(1, 1)));
    }

    #[test]
    fn test_would_match_ignores_other_section() {
        // Moving the 1 down to row 1 would line it up with rows 2 and 3,
        // but those belong to the right section.
        let board = Board::from_pattern(1, &["1", "2", "1", "1"]).unwrap();
        assert!(!would_match(&board, Cell::new(0, 0), Cell::new(1, 0)));

        let single = Board::from_pattern(3, &["1", "2", "1", "1"]).unwrap();
        assert!(would_match(&single, Cell::new(0, 0), Cell::new(1, 0)));
    }

    #[test]
    fn test_would_match_leaves_board_untouched() {
        let board = Board::from_pattern(1, &["112", "031"]).unwrap();
        let before = board.clone();
        let _ = would_match(&board, Cell::new(0, 2), Cell::new(1, 2));
        let _ = would_match(&board, Cell::new(0, 0), Cell::new(0, 1));
        assert_eq!(board, before);
    }

    #[test]
    fn test_would_match_with_empty_cell() {
        let board = Board::from_pattern(0, &["11.", "..."]).unwrap();
        // Moving emptiness around never creates a match.
        assert!(!would_match(&board, Cell::new(0, 2), Cell::new(1, 2)));
    }

    #[test]
    fn test_swap_candidates_order() {
        let board = Board::from_pattern(0, &["12", "34"]).unwrap();
        let pairs: Vec<_> = swap_candidates(&board).collect();
        assert_eq!(
            pairs,
            vec![
                (Cell::new(0, 0), Cell::new(0, 1)),
                (Cell::new(1, 0), Cell::new(1, 1)),
            ]
        );

        let board = Board::from_pattern(1, &["12", "34"]).unwrap();
        let pairs: Vec<_> = swap_candidates(&board).collect();
        assert_eq!(
            pairs,
            vec![
                (Cell::new(0, 0), Cell::new(1, 0)),
                (Cell::new(0, 0), Cell::new(0, 1)),
                (Cell::new(0, 1), Cell::new(1, 1)),
                (Cell::new(1, 0), Cell::new(1, 1)),
            ]
        );
    }

    #[test]
    fn test_has_any_legal_move() {
        let stuck = Board::from_pattern(3, &["0123", "1230", "2301", "3012"]).unwrap();
        assert!(!has_any_legal_move(&stuck));

        let open = Board::from_pattern(1, &["112", "031"]).unwrap();
        assert!(has_any_legal_move(&open));
    }
}
