//! Collaborator notifications.
//!
//! The engine reports what happened through a `GridObserver` injected at
//! construction. Score keeping, game-over handling and presentation are all
//! observers; the engine never looks them up at call time.
//!
//! - `TileDelta`: one animatable board change
//! - `ShuffleEvent`: shuffle notice and outcome
//! - `GridObserver`: the callback trait, every method defaulting to a no-op
//! - `EventLog`: an observer that records everything, for polling hosts and tests

use serde::{Deserialize, Serialize};

use crate::core::{Cell, SectionId, TileKind};
use crate::hint::HintPair;
use crate::shuffle::ShuffleOutcome;

/// A single board change for the presentation layer to animate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileDelta {
    /// A matched tile was removed.
    Removed { cell: Cell, kind: TileKind },
    /// A tile fell from `from` to `to` within its row.
    Shifted { from: Cell, to: Cell, kind: TileKind },
    /// A new tile appeared in an empty cell.
    Spawned { cell: Cell, kind: TileKind },
    /// A player swap was committed.
    Swapped { a: Cell, b: Cell },
    /// A shuffle wrote a new kind into an occupied cell.
    Reassigned { cell: Cell, kind: TileKind },
}

impl TileDelta {
    /// The cell whose contents are new after this delta.
    #[must_use]
    pub fn cell(&self) -> Cell {
        match *self {
            TileDelta::Removed { cell, .. }
            | TileDelta::Spawned { cell, .. }
            | TileDelta::Reassigned { cell, .. } => cell,
            TileDelta::Shifted { to, .. } => to,
            TileDelta::Swapped { a, .. } => a,
        }
    }

    /// How far a shifted tile fell; zero for every other delta.
    #[must_use]
    pub fn distance(&self) -> usize {
        match *self {
            TileDelta::Shifted { from, to, .. } => from.y.abs_diff(to.y),
            _ => 0,
        }
    }
}

/// Shuffle progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShuffleEvent {
    /// A stuck board is being shuffled; show the notice for this many
    /// milliseconds.
    Started { notice_ms: u32 },
    /// The shuffle finished.
    Finished(ShuffleOutcome),
}

/// Receives engine notifications.
///
/// Every method defaults to a no-op so collaborators implement only what
/// they care about.
pub trait GridObserver {
    /// Called once per removed tile.
    fn on_tile_removed(&mut self, _cell: Cell, _kind: TileKind) {}

    /// Called when a section has no empty cell after a resolution cycle.
    fn on_board_full(&mut self, _section: SectionId) {}

    /// Board changes produced by one operation, in application order.
    fn on_deltas(&mut self, _deltas: &[TileDelta]) {}

    /// The highlighted hint changed. `None` clears the highlight.
    fn on_hint_changed(&mut self, _hint: Option<HintPair>) {}

    fn on_shuffle(&mut self, _event: ShuffleEvent) {}
}

impl GridObserver for () {}

impl<O: GridObserver + ?Sized> GridObserver for &mut O {
    fn on_tile_removed(&mut self, cell: Cell, kind: TileKind) {
        (**self).on_tile_removed(cell, kind);
    }

    fn on_board_full(&mut self, section: SectionId) {
        (**self).on_board_full(section);
    }

    fn on_deltas(&mut self, deltas: &[TileDelta]) {
        (**self).on_deltas(deltas);
    }

    fn on_hint_changed(&mut self, hint: Option<HintPair>) {
        (**self).on_hint_changed(hint);
    }

    fn on_shuffle(&mut self, event: ShuffleEvent) {
        (**self).on_shuffle(event);
    }
}

/// Fan out to two observers, first `A` then `B`.
impl<A: GridObserver, B: GridObserver> GridObserver for (A, B) {
    fn on_tile_removed(&mut self, cell: Cell, kind: TileKind) {
        self.0.on_tile_removed(cell, kind);
        self.1.on_tile_removed(cell, kind);
    }

    fn on_board_full(&mut self, section: SectionId) {
        self.0.on_board_full(section);
        self.1.on_board_full(section);
    }

    fn on_deltas(&mut self, deltas: &[TileDelta]) {
        self.0.on_deltas(deltas);
        self.1.on_deltas(deltas);
    }

    fn on_hint_changed(&mut self, hint: Option<HintPair>) {
        self.0.on_hint_changed(hint);
        self.1.on_hint_changed(hint);
    }

    fn on_shuffle(&mut self, event: ShuffleEvent) {
        self.0.on_shuffle(event);
        self.1.on_shuffle(event);
    }
}

/// A recorded notification.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GridEvent {
    TileRemoved { cell: Cell, kind: TileKind },
    BoardFull(SectionId),
    Deltas(Vec<TileDelta>),
    HintChanged(Option<HintPair>),
    Shuffle(ShuffleEvent),
}

/// Observer that records every notification in order.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<GridEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> &[GridEvent] {
        &self.events
    }

    /// Take all recorded events.
    pub fn drain(&mut self) -> Vec<GridEvent> {
        std::mem::take(&mut self.events)
    }

    /// Number of `on_tile_removed` calls.
    #[must_use]
    pub fn removed_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, GridEvent::TileRemoved { .. }))
            .count()
    }

    /// Number of `on_board_full` calls for a section.
    #[must_use]
    pub fn board_full_count(&self, section: SectionId) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, GridEvent::BoardFull(s) if *s == section))
            .count()
    }

    /// Every delta across all recorded operations.
    pub fn deltas(&self) -> impl Iterator<Item = &TileDelta> {
        self.events.iter().flat_map(|e| match e {
            GridEvent::Deltas(deltas) => deltas.as_slice(),
            _ => <&[TileDelta]>::default(),
        })
    }

    /// The most recent hint notification, if any was recorded.
    #[must_use]
    pub fn last_hint(&self) -> Option<Option<HintPair>> {
        self.events.iter().rev().find_map(|e| match e {
            GridEvent::HintChanged(hint) => Some(*hint),
            _ => None,
        })
    }

    /// Shuffle notifications in order.
    pub fn shuffles(&self) -> impl Iterator<Item = ShuffleEvent> + '_ {
        self.events.iter().filter_map(|e| match e {
            GridEvent::Shuffle(event) => Some(*event),
            _ => None,
        })
    }
}

impl GridObserver for EventLog {
    fn on_tile_removed(&mut self, cell: Cell, kind: TileKind) {
        self.events.push(GridEvent::TileRemoved { cell, kind });
    }

    fn on_board_full(&mut self, section: SectionId) {
        self.events.push(GridEvent::BoardFull(section));
    }

    fn on_deltas(&mut self, deltas: &[TileDelta]) {
        self.events.push(GridEvent::Deltas(deltas.to_vec()));
    }

    fn on_hint_changed(&mut self, hint: Option<HintPair>) {
        self.events.push(GridEvent::HintChanged(hint));
    }

    fn on_shuffle(&mut self, event: ShuffleEvent) {
        self.events.push(GridEvent::Shuffle(event));
    }
}
