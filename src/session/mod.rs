//! Scoring and best-score bookkeeping.
//!
//! `ScoreKeeper` is a `GridObserver`: plug it into the engine (alone or
//! paired with another observer) and it counts points per removed tile.
//! When a section fills up it records the final score under the
//! difficulty label, once.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{Cell, Difficulty, GridConfig, GridError, GridResult, SectionId, TileKind};
use crate::events::GridObserver;

/// Highest score reached per difficulty label.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestScores {
    scores: FxHashMap<String, u64>,
}

impl BestScores {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Best score for `label`, 0 if none was recorded.
    #[must_use]
    pub fn best(&self, label: &str) -> u64 {
        self.scores.get(label).copied().unwrap_or(0)
    }

    /// Record `score` under `label`. Returns true if it beat the previous best.
    pub fn record(&mut self, label: &str, score: u64) -> bool {
        if score <= self.best(label) {
            return false;
        }
        self.scores.insert(label.to_owned(), score);
        true
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn to_bytes(&self) -> GridResult<Vec<u8>> {
        bincode::serialize(self).map_err(|e| GridError::Persistence(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> GridResult<Self> {
        bincode::deserialize(bytes).map_err(|e| GridError::Persistence(e.to_string()))
    }
}

/// Running score for one session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreKeeper {
    label: String,
    points_per_tile: u64,
    score: u64,
    game_over: bool,
    best: BestScores,
}

impl ScoreKeeper {
    #[must_use]
    pub fn new(difficulty: Difficulty, points_per_tile: u64, best: BestScores) -> Self {
        Self {
            label: difficulty.label().to_owned(),
            points_per_tile,
            score: 0,
            game_over: false,
            best,
        }
    }

    #[must_use]
    pub fn for_config(config: &GridConfig, best: BestScores) -> Self {
        Self::new(config.difficulty, config.points_per_tile, best)
    }

    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Best score for this keeper's label, including the current session
    /// once it has ended.
    #[must_use]
    pub fn best(&self) -> u64 {
        self.best.best(&self.label)
    }

    #[must_use]
    pub fn best_scores(&self) -> &BestScores {
        &self.best
    }

    pub fn into_best_scores(self) -> BestScores {
        self.best
    }

    /// Zero the score for a new session. Best scores are kept.
    pub fn reset(&mut self) {
        self.score = 0;
        self.game_over = false;
    }
}

impl GridObserver for ScoreKeeper {
    fn on_tile_removed(&mut self, _cell: Cell, _kind: TileKind) {
        if !self.game_over {
            self.score += self.points_per_tile;
        }
    }

    fn on_board_full(&mut self, section: SectionId) {
        if self.game_over {
            return;
        }
        self.game_over = true;
        if self.best.record(&self.label, self.score) {
            log::info!("new best for {}: {} ({} filled)", self.label, self.score, section);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_keeps_maximum() {
        let mut best = BestScores::new();
        assert_eq!(best.best("Easy"), 0);
        assert!(best.record("Easy", 120));
        assert!(!best.record("Easy", 80));
        assert!(!best.record("Easy", 120));
        assert_eq!(best.best("Easy"), 120);
        assert_eq!(best.best("Hard"), 0);
    }

    #[test]
    fn test_zero_score_not_recorded() {
        let mut best = BestScores::new();
        assert!(!best.record("Medium", 0));
        assert!(best.is_empty());
    }

    #[test]
    fn test_bytes_round_trip() {
        let mut best = BestScores::new();
        best.record("Easy", 30);
        best.record("Hard", 500);
        let restored = BestScores::from_bytes(&best.to_bytes().unwrap()).unwrap();
        assert_eq!(restored, best);
    }

    #[test]
    fn test_garbage_bytes_rejected() {
        assert!(matches!(
            BestScores::from_bytes(&[0xff; 3]),
            Err(GridError::Persistence(_))
        ));
    }

    #[test]
    fn test_keeper_scores_and_records_once() {
        let mut keeper = ScoreKeeper::new(Difficulty::Hard, 10, BestScores::new());
        for y in 0..3 {
            keeper.on_tile_removed(Cell::new(0, y), TileKind::new(1));
        }
        assert_eq!(keeper.score(), 30);

        keeper.on_board_full(SectionId::Left);
        keeper.on_board_full(SectionId::Right);
        assert!(keeper.is_game_over());
        assert_eq!(keeper.best(), 30);

        // Removals after game over do not count.
        keeper.on_tile_removed(Cell::new(1, 0), TileKind::new(1));
        assert_eq!(keeper.score(), 30);
    }

    #[test]
    fn test_keeper_reset_keeps_best() {
        let mut keeper = ScoreKeeper::new(Difficulty::Easy, 5, BestScores::new());
        keeper.on_tile_removed(Cell::new(0, 0), TileKind::new(0));
        keeper.on_board_full(SectionId::Left);
        keeper.reset();
        assert_eq!(keeper.score(), 0);
        assert!(!keeper.is_game_over());
        assert_eq!(keeper.best(), 5);
        assert_eq!(keeper.label(), "Easy");
    }
}
