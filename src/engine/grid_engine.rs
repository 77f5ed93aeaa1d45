//! The engine: one board, one random source, one observer.
//!
//! ## Operations
//!
//! - `tick`: detect → resolve to a fixed point, or shuffle a stuck board;
//!   then report full sections
//! - `advance`: per-frame inactivity timer and hint search
//! - `update`: `advance` plus as many `tick`s as the elapsed time covers
//! - `swap`: validate, commit, resolve, report full sections
//!
//! Every mutating operation takes `&mut self` and runs to completion before
//! returning, so observers never see a half-resolved board.

use smallvec::SmallVec;

use crate::board::{populate, Board};
use crate::collapse::remove_and_collapse;
use crate::core::{Cell, GameRng, GridConfig, GridError, GridResult, RandomSource, SectionId};
use crate::events::{GridObserver, ShuffleEvent, TileDelta};
use crate::hint::{find_first_legal_move, HintPair, HintTimer};
use crate::matching::{find_all_matches, has_any_legal_move, would_match};
use crate::shuffle::{reassignments, shuffle_if_stuck, ShuffleOutcome};

use super::clock::FixedStep;
use super::report::{ResolutionReport, SwapOutcome, TickReport};

/// Match-3 engine for a split board.
pub struct GridEngine<O: GridObserver = (), R: RandomSource = GameRng> {
    config: GridConfig,
    board: Board,
    rng: R,
    observer: O,
    hint: HintTimer,
    clock: FixedStep,
    paused: bool,
    finished: bool,
}

impl<O: GridObserver> GridEngine<O, GameRng> {
    /// Create an engine with a freshly populated board.
    pub fn new(config: GridConfig, seed: u64, observer: O) -> GridResult<Self> {
        config.validate()?;
        let rng = GameRng::new(seed);
        let mut board = Board::new(config.rows, config.columns, config.split_row);
        populate(
            &mut board,
            &config.palette,
            config.initial_fill_columns,
            &mut rng.for_context("populate"),
        );
        Self::with_board(config, board, rng, observer)
    }
}

impl<O: GridObserver, R: RandomSource> GridEngine<O, R> {
    /// Create an engine around an existing board.
    ///
    /// The board's shape must agree with the config.
    pub fn with_board(config: GridConfig, board: Board, rng: R, observer: O) -> GridResult<Self> {
        config.validate()?;
        if (board.rows(), board.columns(), board.split_row())
            != (config.rows, config.columns, config.split_row)
        {
            return Err(GridError::InvalidConfig(format!(
                "board is {}x{} split at {}, config expects {}x{} split at {}",
                board.rows(),
                board.columns(),
                board.split_row(),
                config.rows,
                config.columns,
                config.split_row
            )));
        }
        Ok(Self {
            hint: HintTimer::new(config.hint_inactivity_threshold),
            clock: FixedStep::new(config.tick_interval),
            config,
            board,
            rng,
            observer,
            paused: false,
            finished: false,
        })
    }

    // === Accessors ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Consume the engine, returning its observer.
    pub fn into_observer(self) -> O {
        self.observer
    }

    #[must_use]
    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// The hint currently highlighted, if any.
    #[must_use]
    pub fn active_hint(&self) -> Option<HintPair> {
        self.hint.active()
    }

    /// Seconds since the last player move.
    #[must_use]
    pub fn idle_time(&self) -> f32 {
        self.hint.idle()
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// True once a section has filled up.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    // === Session control ===

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Start over with a freshly populated board.
    pub fn restart(&mut self) {
        self.board.clear();
        populate(
            &mut self.board,
            &self.config.palette,
            self.config.initial_fill_columns,
            &mut self.rng,
        );
        self.reset_inactivity_timer();
        self.clock.reset();
        self.paused = false;
        self.finished = false;
        log::info!("session restarted");
    }

    // === Player input ===

    /// Swap two cells on behalf of the player.
    ///
    /// Any attempt resets the inactivity timer and clears the hint. Invalid
    /// requests are rejected with `GridError::InvalidSwap` (or
    /// `OutOfBounds`) and leave the board unchanged. A valid swap that would
    /// not match is reported as `SwapOutcome::NoMatch`, also without
    /// touching the board.
    pub fn swap(&mut self, a: Cell, b: Cell) -> GridResult<SwapOutcome> {
        if self.finished {
            return Err(GridError::GameOver);
        }
        if self.paused {
            return Err(GridError::Paused);
        }
        self.reset_inactivity_timer();
        self.board.check_swap(a, b)?;

        if !would_match(&self.board, a, b) {
            log::debug!("swap {} <-> {} makes no match", a, b);
            return Ok(SwapOutcome::NoMatch);
        }

        self.board.swap_cells(a, b)?;
        self.observer.on_deltas(&[TileDelta::Swapped { a, b }]);
        let resolution = self.resolve();
        self.check_terminal();
        Ok(SwapOutcome::Matched(resolution))
    }

    /// Restart the inactivity clock and clear any highlighted hint.
    pub fn reset_inactivity_timer(&mut self) {
        if self.hint.reset().is_some() {
            self.observer.on_hint_changed(None);
        }
    }

    // === Time ===

    /// Per-frame update: accumulate idle time and surface a hint when due.
    ///
    /// Returns the hint if one was surfaced by this call.
    pub fn advance(&mut self, dt: f32) -> Option<HintPair> {
        if self.paused || self.finished {
            return None;
        }
        if !self.hint.advance(dt) {
            return None;
        }
        let hint = find_first_legal_move(&self.board)?;
        self.hint.show(hint);
        self.observer.on_hint_changed(Some(hint));
        Some(hint)
    }

    /// Frame update that also runs the periodic ticks the elapsed time
    /// covers. Returns how many ticks ran.
    pub fn update(&mut self, dt: f32) -> u32 {
        if self.paused || self.finished {
            return 0;
        }
        self.advance(dt);
        let due = self.clock.advance(dt);
        let mut ran = 0;
        for _ in 0..due {
            if self.finished {
                break;
            }
            self.tick();
            ran += 1;
        }
        ran
    }

    /// One periodic tick: resolve matches, or shuffle a stuck board, then
    /// check for full sections.
    pub fn tick(&mut self) -> TickReport {
        let mut report = TickReport::default();
        if self.paused || self.finished {
            return report;
        }

        let resolution = self.resolve();
        if resolution.is_empty() {
            report.shuffle = Some(self.recover_if_stuck());
        } else {
            report.resolution = Some(resolution);
        }
        report.full_sections = self.check_terminal();
        report
    }

    // === Pipeline ===

    /// Detect and remove matches until none remain.
    ///
    /// Idle → Detecting → (no match: Idle) | (match: Removing → Collapsing →
    /// Spawning → Detecting). Spawned tiles can form new matches, so the
    /// cycle repeats until a detection pass comes back empty. There is no
    /// pass cap: with a uniform random source the chain ends with
    /// probability one, but a source scripted to keep completing runs would
    /// loop forever.
    fn resolve(&mut self) -> ResolutionReport {
        let mut report = ResolutionReport::default();
        loop {
            let matches = find_all_matches(&self.board);
            if matches.is_empty() {
                break;
            }
            let pass = remove_and_collapse(
                &mut self.board,
                &matches,
                &self.config.palette,
                self.config.min_new_tiles,
                &mut self.rng,
                &mut self.observer,
            );
            log::debug!(
                "resolution pass {}: removed {}, spawned {}",
                report.passes + 1,
                pass.removed_count,
                pass.spawned.len()
            );
            self.observer.on_deltas(&pass.deltas);
            report.absorb(&pass);
        }
        report
    }

    fn recover_if_stuck(&mut self) -> ShuffleOutcome {
        if has_any_legal_move(&self.board) {
            return ShuffleOutcome::NotNeeded;
        }

        log::info!("no moves available, shuffling the board");
        let notice_ms = (self.config.shuffle_notice_duration.max(0.0) * 1000.0).round() as u32;
        self.observer.on_shuffle(ShuffleEvent::Started { notice_ms });

        let before = self.board.clone();
        let outcome = shuffle_if_stuck(&mut self.board, self.config.shuffle_retry_budget, &mut self.rng);
        let deltas = reassignments(&before, &self.board);
        if !deltas.is_empty() {
            self.observer.on_deltas(&deltas);
        }
        self.observer.on_shuffle(ShuffleEvent::Finished(outcome));
        outcome
    }

    /// Notify once for every section with no empty cell. Any full section
    /// ends the session.
    fn check_terminal(&mut self) -> SmallVec<[SectionId; 2]> {
        let full: SmallVec<[SectionId; 2]> = self
            .board
            .sections()
            .filter(|&section| self.board.is_section_full(section))
            .collect();

        for &section in &full {
            log::info!("{} is full, game over", section);
            self.observer.on_board_full(section);
        }
        if !full.is_empty() {
            self.finished = true;
        }
        full
    }
}

impl<O: GridObserver + std::fmt::Debug, R: RandomSource> std::fmt::Debug for GridEngine<O, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GridEngine")
            .field("board", &self.board)
            .field("observer", &self.observer)
            .field("hint", &self.hint)
            .field("paused", &self.paused)
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}
