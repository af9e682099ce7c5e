//! Collection and relation descriptors, and the inventory that registers them.
//!
//! This crate provides:
//! - [`Collection`] - Named schema entity with typed fields
//! - [`CollectionKey`] - Unique key over a collection's fields
//! - [`Relation`] - Link from a tail collection to a head collection's key
//! - [`Inventory`] - Ordered, identity-checked registry of the above

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collection;
pub mod config;
pub mod inventory;
pub mod key;
pub mod relation;

pub use collection::{Collection, Field};
pub use config::InventoryConfig;
pub use inventory::Inventory;
pub use key::CollectionKey;
pub use relation::Relation;
