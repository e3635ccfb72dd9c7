//! Effect system for action cards.
//!
//! - `Action`: closed set of composable effects
//! - `combinations`: k-subset enumeration behind "choose k" effects
//!
//! ## Design Philosophy
//!
//! Effects are values. They read and write a `HandState` and nothing else;
//! anything that would touch the deck is queued on the hand as a
//! `DeckAction`, which keeps branch exploration free of side effects.

mod action;
pub mod combinations;

pub use action::Action;
