//! Match results.
//!
//! A detection pass produces `Run`s (maximal lines of three or more equal
//! tiles) and the deduplicated union of their cells. Runs that overlap in an
//! L or T shape share cells; the cell set counts each cell once.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{Cell, TileKind};

/// Direction a run extends in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Along a row: fixed `x`, increasing `y`.
    Row,
    /// Along a column: fixed `y`, increasing `x`.
    Column,
}

/// A maximal line of equal tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    pub kind: TileKind,
    pub start: Cell,
    pub len: usize,
    pub axis: Axis,
}

impl Run {
    /// Cells covered by the run, from `start` onwards.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let Run { start, axis, .. } = *self;
        (0..self.len).map(move |i| match axis {
            Axis::Row => Cell::new(start.x, start.y + i),
            Axis::Column => Cell::new(start.x + i, start.y),
        })
    }
}

/// Cells found in one detection pass, deduplicated and row-major sorted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchSet {
    cells: Vec<Cell>,
    runs: Vec<Run>,
}

impl MatchSet {
    /// An empty match set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge runs into a match set.
    #[must_use]
    pub fn from_runs(runs: Vec<Run>) -> Self {
        let mut seen = FxHashSet::default();
        let mut cells: Vec<Cell> = runs
            .iter()
            .flat_map(Run::cells)
            .filter(|cell| seen.insert(*cell))
            .collect();
        cells.sort_unstable();
        Self { cells, runs }
    }

    /// A match set from explicit cells, with no run information.
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Self {
        let mut cells: Vec<Cell> = cells.into_iter().collect();
        cells.sort_unstable();
        cells.dedup();
        Self {
            cells,
            runs: Vec::new(),
        }
    }

    /// Number of distinct cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.binary_search(&cell).is_ok()
    }

    /// Matched cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The runs the cells came from.
    #[must_use]
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }
}

impl<'a> IntoIterator for &'a MatchSet {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
