//! Replacement tile spawning.
//!
//! After a collapse, a random share of the empty cells receives new tiles:
//! at least `min_new_tiles`, at most a fifth of the empty cells. Spawned
//! kinds are uniform over the palette and may form new matches.

use crate::board::Board;
use crate::core::{Palette, RandomSource};
use crate::events::TileDelta;

/// Share of empty cells that may be refilled per pass, as `1 / SPAWN_DIVISOR`.
pub const SPAWN_DIVISOR: usize = 5;

/// How many tiles to spawn into `empty` cells.
///
/// With `max = empty / 5`: if `max <= min_new_tiles` the result is `max`,
/// otherwise a uniform draw from `min_new_tiles..max`. Never exceeds `max`,
/// so never exceeds the number of empty cells.
pub fn spawn_count<R: RandomSource>(empty: usize, min_new_tiles: usize, rng: &mut R) -> usize {
    let max = empty / SPAWN_DIVISOR;
    if max <= min_new_tiles {
        max
    } else {
        rng.gen_range_usize(min_new_tiles..max)
    }
}

/// Fill randomly chosen empty cells with random kinds.
///
/// Returns one `Spawned` delta per new tile. Spawns nothing when the count
/// comes out as zero.
pub fn spawn_replacement_tiles<R: RandomSource>(
    board: &mut Board,
    palette: &Palette,
    min_new_tiles: usize,
    rng: &mut R,
) -> Vec<TileDelta> {
    let mut empty = board.empty_cells();
    let count = spawn_count(empty.len(), min_new_tiles, rng);
    let mut spawned = Vec::with_capacity(count);

    for _ in 0..count {
        if empty.is_empty() {
            break;
        }
        let cell = empty.swap_remove(rng.gen_index(empty.len()));
        let Some(kind) = palette.pick(rng) else {
            break;
        };
        if board.set(cell, Some(kind)).is_ok() {
            spawned.push(TileDelta::Spawned { cell, kind });
        }
    }

    if !spawned.is_empty() {
        log::debug!("spawned {} tiles into {} empty cells", spawned.len(), empty.len() + spawned.len());
    }
    spawned
}
