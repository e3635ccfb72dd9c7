//! Core building blocks: errors, RNG, configuration.

pub mod config;
pub mod error;
pub mod rng;

pub use config::SimConfig;
pub use error::{Result, SimError};
pub use rng::GameRng;
