//! Operation results returned to the caller.

use smallvec::SmallVec;

use crate::collapse::CollapseReport;
use crate::core::SectionId;
use crate::shuffle::ShuffleOutcome;

/// Summary of a resolution cycle run to its fixed point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResolutionReport {
    /// Removal passes (1 for a plain match, more for chain reactions).
    pub passes: u32,
    /// Tiles removed across all passes.
    pub removed: usize,
    /// Tiles spawned across all passes.
    pub spawned: usize,
}

impl ResolutionReport {
    pub(crate) fn absorb(&mut self, pass: &CollapseReport) {
        self.passes += 1;
        self.removed += pass.removed_count;
        self.spawned += pass.spawned.len();
    }

    /// True if no match was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.passes == 0
    }
}

/// Result of a player swap that passed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwapOutcome {
    /// The swap would not create a match; the board is unchanged.
    NoMatch,
    /// The swap was committed and resolved.
    Matched(ResolutionReport),
}

impl SwapOutcome {
    #[must_use]
    pub fn is_match(&self) -> bool {
        matches!(self, SwapOutcome::Matched(_))
    }
}

/// What one periodic tick did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Set when matches were found and resolved.
    pub resolution: Option<ResolutionReport>,
    /// Set when the board had no match and the stalemate check ran.
    pub shuffle: Option<ShuffleOutcome>,
    /// Sections reported full at the end of the tick.
    pub full_sections: SmallVec<[SectionId; 2]>,
}

impl TickReport {
    /// True if the tick did nothing (paused, finished, or nothing to do).
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.resolution.is_none()
            && matches!(self.shuffle, None | Some(ShuffleOutcome::NotNeeded))
            && self.full_sections.is_empty()
    }
}
