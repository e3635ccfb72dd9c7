//! Card system: definitions and the catalog.
//!
//! ## Key Types
//!
//! - `CardId`: Dense identifier interned by the catalog
//! - `CardDefinition`: Cost, cash, victory points, optional action
//! - `CardCatalog`: Name and ID lookup, validated on registration

pub mod definition;
pub mod registry;

pub use definition::{CardDefinition, CardId};
pub use registry::CardCatalog;
