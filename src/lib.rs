//! Catalog - in-memory schema inventory
//!
//! This crate re-exports all layers of the catalog for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: catalog_inventory  - Collections, keys, relations, and the Inventory
//! Layer 0: catalog_foundation - Core types (Error, FieldType)
//! ```
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use catalog::foundation::FieldType;
//! use catalog::inventory::{Collection, CollectionKey, Field, Inventory, Relation};
//!
//! let people = Arc::new(Collection::new("people").with_field(Field::required("id", FieldType::Id)));
//! let posts = Arc::new(Collection::new("posts").with_field(Field::required("author_id", FieldType::Id)));
//! let people_pkey = CollectionKey::new(&people, "people_pkey", ["id"])?;
//!
//! let mut inventory = Inventory::new();
//! inventory
//!     .add_collection(Arc::clone(&people))?
//!     .add_collection(Arc::clone(&posts))?
//!     .add_relation(Relation::new("author", &posts, people_pkey))?;
//!
//! assert!(inventory.has_collection(&people));
//! assert_eq!(inventory.relations().count(), 1);
//! # Ok::<(), catalog::foundation::Error>(())
//! ```

pub use catalog_foundation as foundation;
pub use catalog_inventory as inventory;
