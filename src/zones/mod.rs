//! Where cards live outside a hand: player decks and the supply table.

pub mod deck;
pub mod table;

pub use deck::Deck;
pub use table::Table;
