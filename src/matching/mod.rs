//! Match detection.
//!
//! - `find_all_matches`: every run of three or more, per section
//! - `would_match`: evaluate a swap without mutating the board
//! - `has_any_legal_move`: is the board stuck?

mod detector;
mod match_set;

pub use detector::{
    find_all_matches, find_section_matches, has_any_legal_move, swap_candidates, would_match,
    MIN_RUN,
};
pub use match_set::{Axis, MatchSet, Run};
