//! Nobles big money.
//!
//! The classic simulation: two players start with 5 coppers and 3 estates
//! and buy from silver, gold, nobles and province piles. Each hand plays its
//! actions greedily, then buys:
//! - province at $8 (after an optional number of skipped $8 hands)
//! - gold or nobles at $6, alternating
//! - silver at $3
//!
//! The game ends when provinces run out or two piles are empty, or times out
//! at the configured hand cap.

mod game;
mod player;
mod strategy;

pub use game::{best_of, play_game, GameOutcome, GameReport, MatchReport, PLAYER_COUNT};
pub use player::{Player, SpendReport};
pub use strategy::{BuyStrategy, NoblesBigMoney};
