//! Board: the split tile grid and opening-board generation.

mod grid;
pub mod generate;

pub use grid::Board;
pub use generate::populate;
