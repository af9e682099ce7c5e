//! Integration tests for Layer 1: Inventory
//!
//! Tests for collection registration, relation registration, and configuration.

mod config;

use std::sync::Arc;

use catalog_foundation::FieldType;
use catalog_inventory::{Collection, CollectionKey, Field, Relation};

/// Creates a collection with a single `id` field.
pub fn collection(name: &str) -> Arc<Collection> {
    Arc::new(Collection::new(name).with_field(Field::required("id", FieldType::Id)))
}

/// Creates a relation from `tail` to the `id` key of `head`.
pub fn relation(name: &str, tail: &Arc<Collection>, head: &Arc<Collection>) -> Relation {
    let key = CollectionKey::new(head, format!("{}_pkey", head.name()), ["id"]).unwrap();
    Relation::new(name, tail, key)
}
