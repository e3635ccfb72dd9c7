//! # deckbuild-sim
//!
//! A turn simulator for deck-building card games with chained action cards.
//!
//! ## Design Principles
//!
//! 1. **Enumerate, then choose**: Every way of sequencing and resolving the
//!    action cards in a hand is enumerated, then a heuristic picks one.
//!
//! 2. **Deferred deck effects**: Draws and put-backs are queued on the hand
//!    and only run against the real deck for the branch that is committed.
//!    Exploring a branch never shuffles or draws.
//!
//! 3. **Deterministic**: No global RNG. Each game seeds its own stream and
//!    forks one per deck, so runs are reproducible under a fixed seed.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) hand cloning via `im-rs` for the
//!   exponential enumeration path.
//!
//! - **Closed effect set**: `Action` is an enum; adding an effect kind means
//!   every capability (apply, enumerate, describe, human input) must handle it.
//!
//! ## Modules
//!
//! - `core`: Errors, RNG, configuration
//! - `cards`: Card ids, definitions and the catalog
//! - `effects`: Actions and choose-k combinations
//! - `hand`: Per-turn hand state and pending deck actions
//! - `zones`: Player decks and the supply table
//! - `search`: Enumeration engine, heuristic and turn driver
//! - `games`: Full games built on the engine

pub mod cards;
pub mod core;
pub mod effects;
pub mod games;
pub mod hand;
pub mod search;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{GameRng, Result, SimConfig, SimError};

pub use crate::cards::{CardCatalog, CardDefinition, CardId};

pub use crate::effects::Action;

pub use crate::hand::{DeckAction, HandState};

pub use crate::zones::{Deck, Table};

pub use crate::search::{
    best_hand, expected_cash, play_actions, ways_to_play_hand, LowestValueReplace, ReplacePolicy,
};

pub use crate::games::nobles::{
    best_of, play_game, BuyStrategy, GameOutcome, GameReport, MatchReport, NoblesBigMoney,
    Player, SpendReport,
};
