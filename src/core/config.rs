//! Engine configuration.
//!
//! Hosts configure the engine at construction time by providing a
//! `GridConfig`. Every field is immutable once the engine is built.
//!
//! - `GridConfig`: board shape, palette, timing and budgets
//! - `Difficulty`: named presets whose label keys the best-score table

use serde::{Deserialize, Serialize};

use super::error::{GridError, GridResult};
use super::tile::Palette;

/// Named difficulty presets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Label used as the best-score key.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Complete engine configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Number of rows (the axis the sections are split along).
    pub rows: usize,

    /// Number of columns (the axis tiles fall along).
    pub columns: usize,

    /// Last row of the left section. Rows above it form the right section.
    /// `split_row >= rows - 1` yields a single-section board.
    pub split_row: usize,

    /// Kinds new tiles are drawn from. At least 3 distinct kinds.
    pub palette: Palette,

    /// Lower bound on tiles spawned after a removal pass.
    pub min_new_tiles: usize,

    /// Seconds between periodic resolution ticks.
    pub tick_interval: f32,

    /// Seconds of inactivity before a hint is searched for.
    pub hint_inactivity_threshold: f32,

    /// Maximum shuffle attempts before reporting failure.
    pub shuffle_retry_budget: u32,

    /// Points awarded per removed tile.
    pub points_per_tile: u64,

    /// How long the "shuffling" notice should stay visible.
    pub shuffle_notice_duration: f32,

    /// Columns `0..initial_fill_columns` of every row are filled at start.
    pub initial_fill_columns: usize,

    /// Preset label this config was derived from.
    pub difficulty: Difficulty,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 16,
            columns: 8,
            split_row: 7,
            palette: Palette::with_size(5),
            min_new_tiles: 1,
            tick_interval: 0.5,
            hint_inactivity_threshold: 5.0,
            shuffle_retry_budget: 100,
            points_per_tile: 10,
            shuffle_notice_duration: 1.5,
            initial_fill_columns: 4,
            difficulty: Difficulty::Medium,
        }
    }
}

impl GridConfig {
    /// Default board tuned for a difficulty preset.
    #[must_use]
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        let (palette_size, min_new_tiles) = match difficulty {
            Difficulty::Easy => (4, 1),
            Difficulty::Medium => (5, 2),
            Difficulty::Hard => (6, 3),
        };
        Self {
            palette: Palette::with_size(palette_size),
            min_new_tiles,
            difficulty,
            ..Self::default()
        }
    }

    /// Set the board shape. Resets the initial fill to half the columns.
    #[must_use]
    pub fn with_size(mut self, rows: usize, columns: usize, split_row: usize) -> Self {
        self.rows = rows;
        self.columns = columns;
        self.split_row = split_row;
        self.initial_fill_columns = columns / 2;
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub fn with_min_new_tiles(mut self, min: usize) -> Self {
        self.min_new_tiles = min;
        self
    }

    #[must_use]
    pub fn with_tick_interval(mut self, seconds: f32) -> Self {
        self.tick_interval = seconds;
        self
    }

    #[must_use]
    pub fn with_hint_threshold(mut self, seconds: f32) -> Self {
        self.hint_inactivity_threshold = seconds;
        self
    }

    #[must_use]
    pub fn with_shuffle_budget(mut self, attempts: u32) -> Self {
        self.shuffle_retry_budget = attempts;
        self
    }

    #[must_use]
    pub fn with_initial_fill(mut self, columns: usize) -> Self {
        self.initial_fill_columns = columns;
        self
    }

    /// Check every constraint the engine relies on.
    pub fn validate(&self) -> GridResult<()> {
        if self.rows == 0 || self.columns == 0 {
            return Err(GridError::InvalidConfig(format!(
                "board must have at least one row and column, got {}x{}",
                self.rows, self.columns
            )));
        }
        if self.palette.len() < 3 {
            return Err(GridError::InvalidConfig(format!(
                "palette needs at least 3 distinct kinds, got {}",
                self.palette.len()
            )));
        }
        if !(self.tick_interval > 0.0) {
            return Err(GridError::InvalidConfig(format!(
                "tick interval must be positive, got {}",
                self.tick_interval
            )));
        }
        if !(self.hint_inactivity_threshold >= 0.0) {
            return Err(GridError::InvalidConfig(format!(
                "hint threshold must be non-negative, got {}",
                self.hint_inactivity_threshold
            )));
        }
        if self.shuffle_retry_budget == 0 {
            return Err(GridError::InvalidConfig(
                "shuffle retry budget must be at least 1".to_string(),
            ));
        }
        if self.initial_fill_columns > self.columns {
            return Err(GridError::InvalidConfig(format!(
                "initial fill of {} columns exceeds {} columns",
                self.initial_fill_columns, self.columns
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TileKind;

    #[test]
    fn test_default_is_valid() {
        let config = GridConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.rows, 16);
        assert_eq!(config.columns, 8);
        assert_eq!(config.split_row, 7);
        assert_eq!(config.shuffle_retry_budget, 100);
    }

    #[test]
    fn test_difficulty_presets() {
        let easy = GridConfig::for_difficulty(Difficulty::Easy);
        let hard = GridConfig::for_difficulty(Difficulty::Hard);
        assert_eq!(easy.palette.len(), 4);
        assert_eq!(hard.palette.len(), 6);
        assert!(hard.min_new_tiles > easy.min_new_tiles);
        assert_eq!(hard.difficulty.label(), "Hard");
        assert!(easy.validate().is_ok());
        assert!(hard.validate().is_ok());
    }

    #[test]
    fn test_small_palette_rejected() {
        let config = GridConfig::default()
            .with_palette(Palette::from_kinds([TileKind(0), TileKind(1), TileKind(1)]));
        assert!(matches!(config.validate(), Err(GridError::InvalidConfig(_))));
    }

    #[test]
    fn test_bad_timing_rejected() {
        assert!(GridConfig::default().with_tick_interval(0.0).validate().is_err());
        assert!(GridConfig::default().with_tick_interval(f32::NAN).validate().is_err());
        assert!(GridConfig::default().with_hint_threshold(-1.0).validate().is_err());
        assert!(GridConfig::default().with_shuffle_budget(0).validate().is_err());
    }

    #[test]
    fn test_with_size() {
        let config = GridConfig::default().with_size(6, 6, 2);
        assert_eq!(config.initial_fill_columns, 3);
        assert!(config.validate().is_ok());
        assert!(GridConfig::default().with_size(0, 6, 0).validate().is_err());
        assert!(GridConfig::default().with_initial_fill(9).validate().is_err());
    }

    #[test]
    fn test_config_serde() {
        let config = GridConfig::for_difficulty(Difficulty::Easy);
        let json = serde_json::to_string(&config).unwrap();
        let back: GridConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
