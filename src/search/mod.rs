//! Turn search: enumerate every way to play a hand, score the results, and
//! drive a turn by committing the best one.
//!
//! - `enumerate`: `ways_to_play_hand`, the exhaustive branch enumeration
//! - `heuristic`: `expected_cash` and `best_hand`
//! - `driver`: `play_actions` and the `ReplacePolicy` seam

pub mod driver;
pub mod enumerate;
pub mod heuristic;

pub use driver::{play_actions, LowestValueReplace, ReplacePolicy};
pub use enumerate::ways_to_play_hand;
pub use heuristic::{best_hand, expected_cash};
