//! Error types for the simulator.
//!
//! Two families share one enum:
//! - configuration errors, raised while building a catalog or config
//! - illegal operations, raised by mutators when a precondition fails
//!
//! Running out of cards is not an error: `Deck::draw` returns `None`.

use thiserror::Error;

use crate::cards::CardId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    #[error("card name registered twice: {0}")]
    DuplicateCard(String),

    #[error("unknown card: {0}")]
    UnknownCard(String),

    #[error("choose {k} from {choices} choices is impossible")]
    InvalidChoose { k: usize, choices: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("{0} is not in hand")]
    CardNotInHand(CardId),

    #[error("{0} is worth cash and cannot be discarded for cash")]
    NotDiscardable(CardId),

    #[error("supply pile for {0} is empty")]
    EmptyPile(CardId),

    #[error("cost {cost} exceeds available cash {cash}")]
    InsufficientCash { cost: u32, cash: i64 },

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, SimError>;
