//! Grid coordinates and board sections.
//!
//! ## Axes
//!
//! A `Cell` is `(x, y)` where `x` is the row and `y` the column. The board is
//! split into two sections along the row axis: rows `0..=split_row` form the
//! left section, the remaining rows form the right section.

use serde::{Deserialize, Serialize};

/// A grid coordinate: `x` is the row, `y` the column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl Cell {
    /// Create a new cell coordinate.
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// The cell in the next row, `(x + 1, y)`. It may lie in the other
    /// section.
    #[must_use]
    pub const fn right(self) -> Self {
        Self::new(self.x + 1, self.y)
    }

    /// The cell one column further along the row, `(x, y + 1)`.
    #[must_use]
    pub const fn down(self) -> Self {
        Self::new(self.x, self.y + 1)
    }

    /// True if the two cells are orthogonal neighbors (distance exactly 1).
    ///
    /// Says nothing about sections; see `Board::check_swap`.
    #[must_use]
    pub fn is_adjacent(self, other: Cell) -> bool {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) == 1
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(usize, usize)> for Cell {
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

/// One of the two independent sub-boards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionId {
    /// Rows `0..=split_row`.
    Left,
    /// Rows `split_row + 1..rows`.
    Right,
}

impl SectionId {
    /// Both sections, in traversal order.
    pub const ALL: [SectionId; 2] = [SectionId::Left, SectionId::Right];

    /// Section a row belongs to for the given split row.
    #[must_use]
    pub const fn of_row(x: usize, split_row: usize) -> Self {
        if x <= split_row {
            SectionId::Left
        } else {
            SectionId::Right
        }
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SectionId::Left => write!(f, "left section"),
            SectionId::Right => write!(f, "right section"),
        }
    }
}
