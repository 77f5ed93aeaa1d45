//! Opening board generation.
//!
//! Fills the first `fill_columns` columns of every row. Each tile is drawn
//! from the palette minus any kind that would complete a run of three with
//! the two cells before it, so a fresh board never starts with a match.

use smallvec::SmallVec;

use crate::core::{Cell, Palette, RandomSource, TileKind};

use super::Board;

/// Populate an empty board. Returns the number of tiles placed.
///
/// Cells are filled row by row, so the two preceding cells along each axis
/// are already decided when a cell is chosen.
pub fn populate<R: RandomSource>(
    board: &mut Board,
    palette: &Palette,
    fill_columns: usize,
    rng: &mut R,
) -> usize {
    let fill_columns = fill_columns.min(board.columns());
    let mut placed = 0;

    for x in 0..board.rows() {
        for y in 0..fill_columns {
            let cell = Cell::new(x, y);
            let mut candidates: SmallVec<[TileKind; 8]> =
                palette.kinds().iter().copied().collect();

            for blocked in [
                completed_run(board, cell, 0, -1),
                completed_run(board, cell, -1, 0),
            ]
            .into_iter()
            .flatten()
            {
                candidates.retain(|kind| *kind != blocked);
            }

            if candidates.is_empty() {
                continue;
            }
            let kind = candidates[rng.gen_index(candidates.len())];
            if board.set(cell, Some(kind)).is_ok() {
                placed += 1;
            }
        }
    }

    log::debug!("populated board with {} tiles", placed);
    placed
}

/// Kind shared by the two cells preceding `cell` along `(dx, dy)`, if both
/// exist, are equal, and lie in `cell`'s section.
fn completed_run(board: &Board, cell: Cell, dx: isize, dy: isize) -> Option<TileKind> {
    let first = board.offset(cell, dx, dy)?;
    let second = board.offset(cell, 2 * dx, 2 * dy)?;
    if !board.in_same_section(cell.x, first.x) || !board.in_same_section(cell.x, second.x) {
        return None;
    }
    let kind = board.tile(first)?;
    (board.tile(second) == Some(kind)).then_some(kind)
}
