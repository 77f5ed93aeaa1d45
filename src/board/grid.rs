//! The tile grid.
//!
//! A `rows × columns` grid of optional tiles stored row-major in a flat `Vec`.
//! The grid is split into two sections along the row axis; section
//! membership is recomputed from `split_row` on every query.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::core::{Cell, GridError, GridResult, SectionId, SwapRejection, TileKind};

/// The split-board tile grid.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    rows: usize,
    columns: usize,
    split_row: usize,
    /// Row-major cells (x * columns + y).
    cells: Vec<Option<TileKind>>,
}

impl Board {
    /// Create an empty board.
    ///
    /// `split_row` is the last row of the left section; any value
    /// `>= rows - 1` makes the whole board a single section.
    #[must_use]
    pub fn new(rows: usize, columns: usize, split_row: usize) -> Self {
        assert!(rows > 0 && columns > 0, "Board must have at least one cell");
        Self {
            rows,
            columns,
            split_row,
            cells: vec![None; rows * columns],
        }
    }

    /// Build a board from explicit rows of cells.
    pub fn from_rows(split_row: usize, rows: Vec<Vec<Option<TileKind>>>) -> GridResult<Self> {
        let columns = rows.first().map_or(0, Vec::len);
        if rows.is_empty() || columns == 0 {
            return Err(GridError::InvalidConfig("board must not be empty".to_string()));
        }
        if let Some(bad) = rows.iter().position(|row| row.len() != columns) {
            return Err(GridError::InvalidConfig(format!(
                "row {} has {} cells, expected {}",
                bad,
                rows[bad].len(),
                columns
            )));
        }
        Ok(Self {
            rows: rows.len(),
            columns,
            split_row,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Build a board from a text pattern, one string per row.
    ///
    /// Digits `0`-`9` are tile kinds, `.` is an empty cell and whitespace is
    /// ignored.
    ///
    /// ```
    /// use collapse_grid::board::Board;
    /// use collapse_grid::core::{Cell, TileKind};
    ///
    /// let board = Board::from_pattern(0, &["01.", "112"]).unwrap();
    /// assert_eq!(board.tile(Cell::new(1, 2)), Some(TileKind(2)));
    /// assert_eq!(board.tile(Cell::new(0, 2)), None);
    /// ```
    pub fn from_pattern(split_row: usize, pattern: &[&str]) -> GridResult<Self> {
        let mut rows = Vec::with_capacity(pattern.len());
        for line in pattern {
            let mut row = Vec::new();
            for ch in line.chars().filter(|c| !c.is_whitespace()) {
                match ch {
                    '.' => row.push(None),
                    d if d.is_ascii_digit() => row.push(Some(TileKind(d as u8 - b'0'))),
                    other => {
                        return Err(GridError::InvalidConfig(format!(
                            "unexpected character {:?} in board pattern",
                            other
                        )))
                    }
                }
            }
            rows.push(row);
        }
        Self::from_rows(split_row, rows)
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Last row of the left section.
    #[must_use]
    pub fn split_row(&self) -> usize {
        self.split_row
    }

    #[inline]
    fn index(&self, cell: Cell) -> Option<usize> {
        if self.is_in_bounds(cell) {
            Some(cell.x * self.columns + cell.y)
        } else {
            None
        }
    }

    fn out_of_bounds(&self, cell: Cell) -> GridError {
        GridError::OutOfBounds {
            cell,
            rows: self.rows,
            columns: self.columns,
        }
    }

    // === Bounds and sections ===

    /// True iff `x < rows` and `y < columns`.
    #[inline]
    #[must_use]
    pub fn is_in_bounds(&self, cell: Cell) -> bool {
        cell.x < self.rows && cell.y < self.columns
    }

    /// Offset a cell, returning `None` if the result leaves the grid.
    #[must_use]
    pub fn offset(&self, cell: Cell, dx: isize, dy: isize) -> Option<Cell> {
        let x = cell.x.checked_add_signed(dx)?;
        let y = cell.y.checked_add_signed(dy)?;
        let moved = Cell::new(x, y);
        self.is_in_bounds(moved).then_some(moved)
    }

    /// Section of a row.
    #[inline]
    #[must_use]
    pub fn section_of(&self, x: usize) -> SectionId {
        SectionId::of_row(x, self.split_row)
    }

    /// True iff both rows fall on the same side of the split.
    #[inline]
    #[must_use]
    pub fn in_same_section(&self, x1: usize, x2: usize) -> bool {
        (x1 <= self.split_row) == (x2 <= self.split_row)
    }

    /// Rows belonging to a section. Empty for the right section of a
    /// single-section board.
    #[must_use]
    pub fn section_rows(&self, section: SectionId) -> Range<usize> {
        let boundary = (self.split_row + 1).min(self.rows);
        match section {
            SectionId::Left => 0..boundary,
            SectionId::Right => boundary..self.rows,
        }
    }

    /// Sections that contain at least one row.
    pub fn sections(&self) -> impl Iterator<Item = SectionId> + '_ {
        SectionId::ALL
            .into_iter()
            .filter(move |&section| !self.section_rows(section).is_empty())
    }

    /// Cells of a section in row-major order.
    pub fn section_cells(&self, section: SectionId) -> impl Iterator<Item = Cell> + '_ {
        let columns = self.columns;
        self.section_rows(section)
            .flat_map(move |x| (0..columns).map(move |y| Cell::new(x, y)))
    }

    /// Every cell, section by section, row-major within each.
    pub fn all_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.sections().flat_map(move |section| self.section_cells(section))
    }

    // === Cell access ===

    /// Contents of a cell.
    pub fn get(&self, cell: Cell) -> GridResult<Option<TileKind>> {
        match self.index(cell) {
            Some(idx) => Ok(self.cells[idx]),
            None => Err(self.out_of_bounds(cell)),
        }
    }

    /// Overwrite a cell.
    pub fn set(&mut self, cell: Cell, tile: Option<TileKind>) -> GridResult<()> {
        match self.index(cell) {
            Some(idx) => {
                self.cells[idx] = tile;
                Ok(())
            }
            None => {
                log::warn!("rejected write to {} outside the grid", cell);
                Err(self.out_of_bounds(cell))
            }
        }
    }

    /// Tile at a cell; `None` for empty and out-of-bounds cells alike.
    #[inline]
    #[must_use]
    pub fn tile(&self, cell: Cell) -> Option<TileKind> {
        self.index(cell).and_then(|idx| self.cells[idx])
    }

    #[must_use]
    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.tile(cell).is_some()
    }

    /// Exchange the contents of two in-bounds cells.
    ///
    /// Does not look at sections or adjacency; see `check_swap`.
    pub fn swap_cells(&mut self, a: Cell, b: Cell) -> GridResult<()> {
        let ia = self.index(a).ok_or_else(|| self.out_of_bounds(a))?;
        let ib = self.index(b).ok_or_else(|| self.out_of_bounds(b))?;
        self.cells.swap(ia, ib);
        Ok(())
    }

    /// Validate a player swap request without touching the board.
    ///
    /// The cells must be in bounds, orthogonally adjacent, in the same
    /// section and both occupied.
    pub fn check_swap(&self, a: Cell, b: Cell) -> GridResult<()> {
        if !self.is_in_bounds(a) {
            return Err(self.out_of_bounds(a));
        }
        if !self.is_in_bounds(b) {
            return Err(self.out_of_bounds(b));
        }
        let reject = |reason| Err(GridError::InvalidSwap { a, b, reason });
        if !a.is_adjacent(b) {
            return reject(SwapRejection::NotAdjacent);
        }
        if !self.in_same_section(a.x, b.x) {
            return reject(SwapRejection::CrossSection);
        }
        if !self.is_occupied(a) || !self.is_occupied(b) {
            return reject(SwapRejection::EmptyCell);
        }
        Ok(())
    }

    // === Occupancy ===

    /// Empty cells, section by section, row-major.
    #[must_use]
    pub fn empty_cells(&self) -> Vec<Cell> {
        self.all_cells().filter(|&cell| !self.is_occupied(cell)).collect()
    }

    /// Occupied cells, section by section, row-major.
    #[must_use]
    pub fn occupied_cells(&self) -> Vec<Cell> {
        self.all_cells().filter(|&cell| self.is_occupied(cell)).collect()
    }

    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.len() - self.empty_count()
    }

    /// True iff the section has rows and none of its cells is empty.
    #[must_use]
    pub fn is_section_full(&self, section: SectionId) -> bool {
        let rows = self.section_rows(section);
        !rows.is_empty() && self.section_cells(section).all(|cell| self.is_occupied(cell))
    }

    /// Remove every tile.
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for x in 0..self.rows {
            if x == self.split_row + 1 {
                writeln!(f, "{}", "-".repeat(self.columns))?;
            }
            for y in 0..self.columns {
                match self.tile(Cell::new(x, y)) {
                    Some(kind) if kind.0 < 10 => write!(f, "{}", kind.0)?,
                    Some(_) => write!(f, "#")?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        let board = Board::new(16, 8, 7);
        assert!(board.is_in_bounds(Cell::new(0, 0)));
        assert!(board.is_in_bounds(Cell::new(15, 7)));
        assert!(!board.is_in_bounds(Cell::new(16, 0)));
        assert!(!board.is_in_bounds(Cell::new(0, 8)));
    }

    #[test]
    fn test_offset() {
        let board = Board::new(4, 4, 1);
        assert_eq!(board.offset(Cell::new(0, 0), -1, 0), None);
        assert_eq!(board.offset(Cell::new(0, 0), 0, 1), Some(Cell::new(0, 1)));
        assert_eq!(board.offset(Cell::new(3, 3), 1, 0), None);
    }

    #[test]
    fn test_sections() {
        let board = Board::new(16, 8, 7);
        assert!(board.in_same_section(0, 7));
        assert!(board.in_same_section(8, 15));
        assert!(!board.in_same_section(7, 8));
        assert_eq!(board.section_rows(SectionId::Left), 0..8);
        assert_eq!(board.section_rows(SectionId::Right), 8..16);
        assert_eq!(board.sections().count(), 2);
    }

    #[test]
    fn test_single_section_board() {
        let board = Board::new(3, 3, 2);
        assert_eq!(board.section_rows(SectionId::Right), 3..3);
        assert_eq!(board.sections().collect::<Vec<_>>(), vec![SectionId::Left]);
        assert!(!board.is_section_full(SectionId::Right));
    }

    #[test]
    fn test_get_set() {
        let mut board = Board::new(4, 4, 1);
        board.set(Cell::new(2, 3), Some(TileKind(1))).unwrap();
        assert_eq!(board.get(Cell::new(2, 3)), Ok(Some(TileKind(1))));
        assert_eq!(board.get(Cell::new(0, 0)), Ok(None));
        assert!(matches!(
            board.set(Cell::new(4, 0), Some(TileKind(1))),
            Err(GridError::OutOfBounds { .. })
        ));
        assert!(board.get(Cell::new(0, 4)).is_err());
    }

    #[test]
    fn test_swap_cells() {
        let mut board = Board::from_pattern(0, &["12", "3."]).unwrap();
        board.swap_cells(Cell::new(0, 0), Cell::new(1, 1)).unwrap();
        assert_eq!(board.tile(Cell::new(0, 0)), None);
        assert_eq!(board.tile(Cell::new(1, 1)), Some(TileKind(1)));
        assert!(board.swap_cells(Cell::new(0, 0), Cell::new(2, 0)).is_err());
    }

    #[test]
    fn test_check_swap() {
        let board = Board::new(16, 8, 7);
        let mut full = board.clone();
        for cell in board.all_cells() {
            full.set(cell, Some(TileKind(0))).unwrap();
        }

        assert!(full.check_swap(Cell::new(0, 0), Cell::new(0, 1)).is_ok());
        assert!(matches!(
            full.check_swap(Cell::new(7, 3), Cell::new(8, 3)),
            Err(GridError::InvalidSwap { reason: SwapRejection::CrossSection, .. })
        ));
        assert!(matches!(
            full.check_swap(Cell::new(0, 0), Cell::new(1, 1)),
            Err(GridError::InvalidSwap { reason: SwapRejection::NotAdjacent, .. })
        ));
        assert!(matches!(
            board.check_swap(Cell::new(0, 0), Cell::new(0, 1)),
            Err(GridError::InvalidSwap { reason: SwapRejection::EmptyCell, .. })
        ));
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let rows = vec![vec![None, None], vec![None]];
        assert!(Board::from_rows(0, rows).is_err());
        assert!(Board::from_pattern(0, &["1x"]).is_err());
    }

    #[test]
    fn test_occupancy() {
        let board = Board::from_pattern(0, &["1.", "22"]).unwrap();
        assert_eq!(board.empty_count(), 1);
        assert_eq!(board.occupied_count(), 3);
        assert_eq!(board.empty_cells(), vec![Cell::new(0, 1)]);
        assert!(!board.is_section_full(SectionId::Left));
        assert!(board.is_section_full(SectionId::Right));
    }

    #[test]
    fn test_display() {
        let board = Board::from_pattern(0, &["1.", "22"]).unwrap();
        assert_eq!(board.to_string(), "1.\n--\n22\n");
    }
}
