//! Core engine types: coordinates, tiles, RNG, configuration, errors.
//!
//! This module contains the building blocks every other module depends on.
//! It knows nothing about matching or resolution.

pub mod cell;
pub mod tile;
pub mod rng;
pub mod config;
pub mod error;

pub use cell::{Cell, SectionId};
pub use tile::{Palette, TileKind};
pub use rng::{GameRng, RandomSource};
pub use config::{Difficulty, GridConfig};
pub use error::{GridError, GridResult, SwapRejection};
