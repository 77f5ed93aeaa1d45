//! Move hints.
//!
//! `find_first_legal_move` scans in a fixed order (sections in turn,
//! row-major, next-row neighbor before next-column neighbor), so the hint for a given
//! board is always the same pair. `HintTimer` decides when to look.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::Cell;
use crate::matching::{swap_candidates, would_match};

/// Two adjacent cells whose swap produces a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HintPair {
    pub first: Cell,
    pub second: Cell,
}

impl HintPair {
    #[must_use]
    pub const fn new(first: Cell, second: Cell) -> Self {
        Self { first, second }
    }

    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        self.first == cell || self.second == cell
    }
}

/// First swap, in scan order, that would produce a match.
///
/// Returns `Some` whenever `has_any_legal_move` is true; both walk the same
/// candidate sequence.
#[must_use]
pub fn find_first_legal_move(board: &Board) -> Option<HintPair> {
    swap_candidates(board)
        .find(|&(a, b)| would_match(board, a, b))
        .map(|(a, b)| HintPair::new(a, b))
}

/// Inactivity timer and active-hint slot.
#[derive(Clone, Debug, PartialEq)]
pub struct HintTimer {
    threshold: f32,
    idle: f32,
    active: Option<HintPair>,
}

impl HintTimer {
    #[must_use]
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            idle: 0.0,
            active: None,
        }
    }

    /// Accumulate idle time. Returns true when a hint search is due: the
    /// threshold has been reached and no hint is showing.
    pub fn advance(&mut self, dt: f32) -> bool {
        self.idle += dt.max(0.0);
        self.idle >= self.threshold && self.active.is_none()
    }

    /// Restart the idle clock and clear the active hint, returning it.
    pub fn reset(&mut self) -> Option<HintPair> {
        self.idle = 0.0;
        self.active.take()
    }

    pub fn show(&mut self, hint: HintPair) {
        self.active = Some(hint);
    }

    #[must_use]
    pub fn active(&self) -> Option<HintPair> {
        self.active
    }

    /// Seconds since the last reset.
    #[must_use]
    pub fn idle(&self) -> f32 {
        self.idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::has_any_legal_move;

    #[test]
    fn test_prefers_right_neighbor() {
        // Both (0,0)-(1,0) and (0,0)-(0,1) would match.
        let board = Board::from_pattern(3, &["2122", "1...", "2...", "2..."]).unwrap();
        assert!(would_match(&board, Cell::new(0, 0), Cell::new(0, 1)));

        let hint = find_first_legal_move(&board);
        assert_eq!(hint, Some(HintPair::new(Cell::new(0, 0), Cell::new(1, 0))));
    }

    #[test]
    fn test_down_neighbor_when_right_fails() {
        let board = Board::from_pattern(3, &["2122", "1...", "3...", "...."]).unwrap();
        assert!(!would_match(&board, Cell::new(0, 0), Cell::new(1, 0)));

        let hint = find_first_legal_move(&board);
        assert_eq!(hint, Some(HintPair::new(Cell::new(0, 0), Cell::new(0, 1))));
    }

    #[test]
    fn test_right_neighbor_across_split_skipped() {
        // (1,0) and (2,0) touch but sit on opposite sides of the split.
        let board = Board::from_pattern(1, &["12", "21", "11", "03"]).unwrap();
        let pairs: Vec<_> = swap_candidates(&board).collect();
        assert!(pairs.contains(&(Cell::new(0, 0), Cell::new(1, 0))));
        assert!(!pairs.contains(&(Cell::new(1, 0), Cell::new(2, 0))));
        assert_eq!(find_first_legal_move(&board), None);
    }

    #[test]
    fn test_skips_stuck_left_section() {
        // The left section holds at most two of each kind.
        let board = Board::from_pattern(1, &["0123", "2301", "1101", "0210"]).unwrap();
        let hint = find_first_legal_move(&board).unwrap();
        assert_eq!(hint, HintPair::new(Cell::new(2, 2), Cell::new(3, 2)));
        assert_eq!(board.section_of(hint.first.x), crate::core::SectionId::Right);
    }

    #[test]
    fn test_none_on_stuck_board() {
        let board = Board::from_pattern(3, &["0123", "1230", "2301", "3012"]).unwrap();
        assert!(!has_any_legal_move(&board));
        assert_eq!(find_first_legal_move(&board), None);
    }

    #[test]
    fn test_timer() {
        let mut timer = HintTimer::new(5.0);
        assert!(!timer.advance(2.0));
        assert!(timer.advance(3.0));

        let hint = HintPair::new(Cell::new(0, 0), Cell::new(0, 1));
        timer.show(hint);
        assert!(!timer.advance(1.0));
        assert_eq!(timer.active(), Some(hint));

        assert_eq!(timer.reset(), Some(hint));
        assert_eq!(timer.idle(), 0.0);
        assert_eq!(timer.reset(), None);
    }
}
