//! # collapse-grid
//!
//! A tick-driven match-3 engine for a board split into two independent
//! sections.
//!
//! ## Design Principles
//!
//! 1. **Sections are separate boards**: runs, swaps and legal-move checks
//!    never cross the split row. Gravity and spawning act on the whole grid.
//!
//! 2. **Deterministic by seed**: every random choice (generation, spawn
//!    count, spawn cells, tile kinds, shuffles) goes through one
//!    `RandomSource`, so a seed replays a session exactly.
//!
//! 3. **Presentation-agnostic**: the engine reports what happened through
//!    `GridObserver` callbacks and per-tile `TileDelta`s. It never sleeps,
//!    animates or renders.
//!
//! ## Modules
//!
//! - `core`: cells, sections, tile kinds, RNG, configuration, errors
//! - `board`: the grid store and initial population
//! - `matching`: run detection and swap evaluation
//! - `collapse`: removal, gravity and replacement spawning
//! - `shuffle`: stalemate recovery
//! - `hint`: first legal move and the inactivity timer
//! - `events`: observer trait, deltas and an event recorder
//! - `engine`: `GridEngine`, the tick/swap state machine
//! - `session`: score keeping and best scores

pub mod core;
pub mod board;
pub mod matching;
pub mod collapse;
pub mod shuffle;
pub mod hint;
pub mod events;
pub mod engine;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Cell, SectionId,
    TileKind, Palette,
    GameRng, RandomSource,
    Difficulty, GridConfig,
    GridError, GridResult, SwapRejection,
};

pub use crate::board::Board;

pub use crate::matching::{
    find_all_matches, would_match, has_any_legal_move,
    MatchSet, Run, Axis,
};

pub use crate::collapse::{remove_and_collapse, CollapseReport};

pub use crate::shuffle::{shuffle_if_stuck, ShuffleOutcome};

pub use crate::hint::{find_first_legal_move, HintPair};

pub use crate::events::{EventLog, GridEvent, GridObserver, ShuffleEvent, TileDelta};

pub use crate::engine::{GridEngine, ResolutionReport, SwapOutcome, TickReport};

pub use crate::session::{BestScores, ScoreKeeper};
