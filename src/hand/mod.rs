//! Per-turn hand state and deferred deck operations.

pub mod state;

pub use state::{DeckAction, HandState};
