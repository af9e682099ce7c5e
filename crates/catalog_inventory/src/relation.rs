//! Relation descriptors.
//!
//! A relation links a tail collection (the one holding the reference) to a
//! key of a head collection (the one being referenced).

use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::collection::Collection;
use crate::key::CollectionKey;

/// Descriptor for a relation between two collections.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Relation {
    /// Relation name (e.g. `author`, `post_author_fkey`).
    pub name: String,
    /// Human-readable description.
    pub description: Option<String>,
    tail_collection: Arc<Collection>,
    head_collection_key: CollectionKey,
}

impl Relation {
    /// Creates a relation from `tail_collection` to the collection owning
    /// `head_collection_key`.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        tail_collection: &Arc<Collection>,
        head_collection_key: CollectionKey,
    ) -> Self {
        Self {
            name: name.into(),
            description: None,
            tail_collection: Arc::clone(tail_collection),
            head_collection_key,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns the relation name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the collection holding the reference.
    #[must_use]
    pub fn tail_collection(&self) -> &Arc<Collection> {
        &self.tail_collection
    }

    /// Returns the key of the referenced collection.
    #[must_use]
    pub fn head_collection_key(&self) -> &CollectionKey {
        &self.head_collection_key
    }

    /// Returns the referenced collection.
    #[must_use]
    pub fn head_collection(&self) -> &Arc<Collection> {
        self.head_collection_key.collection()
    }

    /// Returns true if the relation starts and ends at the same collection.
    #[must_use]
    pub fn is_self_referential(&self) -> bool {
        Arc::ptr_eq(&self.tail_collection, self.head_collection())
    }
}

impl PartialEq for Relation {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.description == other.description
            && Arc::ptr_eq(&self.tail_collection, &other.tail_collection)
            && self.head_collection_key == other.head_collection_key
    }
}
