//! The tick-driven engine that ties board, matching, collapse, shuffle and
//! hints together behind `swap`, `tick`, `advance` and `update`.

mod clock;
mod grid_engine;
mod report;

pub use clock::FixedStep;
pub use grid_engine::GridEngine;
pub use report::{ResolutionReport, SwapOutcome, TickReport};
