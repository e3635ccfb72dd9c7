//! Complete games built on the turn engine.

pub mod nobles;
