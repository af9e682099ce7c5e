//! The schema inventory.
//!
//! An [`Inventory`] registers collections and the relations between them.
//! Collections are unique by name. Relations may only reference collections
//! that were registered in the same inventory, checked by identity: a
//! structurally equal copy of a registered collection does not count.

use std::sync::Arc;

use catalog_foundation::{Endpoint, Error, ErrorContext, RegistryLimit, Result};
use im::{HashMap, Vector};
use tracing::debug;

use crate::collection::Collection;
use crate::config::InventoryConfig;
use crate::relation::Relation;

/// Ordered registry of collections and relations.
///
/// Backed by persistent structures, so `clone` is O(1) and yields an
/// independent snapshot. Mutation requires `&mut self`; share across threads
/// behind a lock or hand each thread its own clone.
#[derive(Clone, Debug, Default)]
pub struct Inventory {
    config: InventoryConfig,
    /// Collections in insertion order.
    collections: Vector<Arc<Collection>>,
    /// Collection name -> position in `collections`.
    by_name: HashMap<String, usize>,
    /// Relations in insertion order.
    relations: Vector<Relation>,
    /// Relation name -> position of the first relation with that name.
    relations_by_name: HashMap<String, usize>,
}

impl Inventory {
    /// Creates a new empty inventory with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new empty inventory with the given configuration.
    #[must_use]
    pub fn with_config(config: InventoryConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &InventoryConfig {
        &self.config
    }

    // --- Collections ---

    /// Registers a collection.
    ///
    /// Returns the inventory so calls can be chained with `?`. The inventory
    /// is unchanged when an error is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A collection with the same name is already registered
    /// - The configured collection limit is reached
    pub fn add_collection(&mut self, collection: impl Into<Arc<Collection>>) -> Result<&mut Self> {
        let collection = collection.into();

        if self.by_name.contains_key(collection.name()) {
            debug!(
                inventory = self.config.label_or_default(),
                collection = collection.name(),
                "rejected duplicate collection name"
            );
            return Err(self.reject(
                Error::duplicate_collection(collection.name()),
                "add_collection",
            ));
        }
        if let Some(limit) = self.config.max_collections {
            if self.collections.len() >= limit {
                debug!(
                    inventory = self.config.label_or_default(),
                    collection = collection.name(),
                    limit,
                    "rejected collection over limit"
                );
                return Err(self.reject(
                    Error::limit_exceeded(RegistryLimit::MaxCollections { limit }),
                    "add_collection",
                ));
            }
        }

        debug!(
            inventory = self.config.label_or_default(),
            collection = collection.name(),
            index = self.collections.len(),
            "registered collection"
        );
        self.by_name
            .insert(collection.name.clone(), self.collections.len());
        self.collections.push_back(collection);
        Ok(self)
    }

    /// Returns all registered collections in insertion order.
    pub fn collections(&self) -> impl Iterator<Item = &Arc<Collection>> + '_ {
        self.collections.iter()
    }

    /// Gets a collection by name.
    #[must_use]
    pub fn collection(&self, name: &str) -> Option<&Arc<Collection>> {
        self.by_name
            .get(name)
            .and_then(|&index| self.collections.get(index))
    }

    /// Checks if this exact collection was registered.
    ///
    /// Identity is the `Arc` allocation. A different `Arc` holding an equal
    /// collection is not considered registered.
    #[must_use]
    pub fn has_collection(&self, collection: &Arc<Collection>) -> bool {
        self.collection(collection.name())
            .is_some_and(|registered| Arc::ptr_eq(registered, collection))
    }

    /// Returns the number of registered collections.
    #[must_use]
    pub fn collection_count(&self) -> usize {
        self.collections.len()
    }

    // --- Relations ---

    /// Registers a relation.
    ///
    /// Both the tail collection and the collection owning the head key must
    /// already be registered in this inventory (by identity). Returns the
    /// inventory so calls can be chained with `?`. The inventory is unchanged
    /// when an error is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The tail or head collection is not registered
    /// - `unique_relation_names` is set and the name is taken
    /// - The configured relation limit is reached
    pub fn add_relation(&mut self, relation: Relation) -> Result<&mut Self> {
        let endpoints = [
            (Endpoint::Tail, relation.tail_collection()),
            (Endpoint::Head, relation.head_collection()),
        ];
        for (endpoint, collection) in endpoints {
            if !self.has_collection(collection) {
                debug!(
                    inventory = self.config.label_or_default(),
                    relation = relation.name(),
                    collection = collection.name(),
                    %endpoint,
                    "rejected relation with unregistered collection"
                );
                return Err(self.reject(
                    Error::missing_collection(relation.name(), collection.name(), endpoint),
                    "add_relation",
                ));
            }
        }

        if self.config.unique_relation_names && self.relations_by_name.contains_key(relation.name())
        {
            debug!(
                inventory = self.config.label_or_default(),
                relation = relation.name(),
                "rejected duplicate relation name"
            );
            return Err(self.reject(Error::duplicate_relation(relation.name()), "add_relation"));
        }
        if let Some(limit) = self.config.max_relations {
            if self.relations.len() >= limit {
                debug!(
                    inventory = self.config.label_or_default(),
                    relation = relation.name(),
                    limit,
                    "rejected relation over limit"
                );
                return Err(self.reject(
                    Error::limit_exceeded(RegistryLimit::MaxRelations { limit }),
                    "add_relation",
                ));
            }
        }

        debug!(
            inventory = self.config.label_or_default(),
            relation = relation.name(),
            tail = relation.tail_collection().name(),
            head = relation.head_collection().name(),
            "registered relation"
        );
        if !self.relations_by_name.contains_key(relation.name()) {
            self.relations_by_name
                .insert(relation.name.clone(), self.relations.len());
        }
        self.relations.push_back(relation);
        Ok(self)
    }

    /// Returns all registered relations in insertion order.
    pub fn relations(&self) -> impl Iterator<Item = &Relation> + '_ {
        self.relations.iter()
    }

    /// Gets the first registered relation with the given name.
    #[must_use]
    pub fn relation(&self, name: &str) -> Option<&Relation> {
        self.relations_by_name
            .get(name)
            .and_then(|&index| self.relations.get(index))
    }

    /// Returns relations whose tail is this exact collection, in insertion order.
    pub fn relations_from<'a>(
        &'a self,
        collection: &'a Arc<Collection>,
    ) -> impl Iterator<Item = &'a Relation> + 'a {
        self.relations
            .iter()
            .filter(move |r| Arc::ptr_eq(r.tail_collection(), collection))
    }

    /// Returns relations whose head key belongs to this exact collection, in
    /// insertion order.
    pub fn relations_to<'a>(
        &'a self,
        collection: &'a Arc<Collection>,
    ) -> impl Iterator<Item = &'a Relation> + 'a {
        self.relations
            .iter()
            .filter(move |r| Arc::ptr_eq(r.head_collection(), collection))
    }

    /// Returns the number of registered relations.
    #[must_use]
    pub fn relation_count(&self) -> usize {
        self.relations.len()
    }

    /// Returns true if no collections (and therefore no relations) are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }

    fn reject(&self, error: Error, operation: &str) -> Error {
        let mut context = ErrorContext::new().with_operation(operation);
        if let Some(label) = &self.config.label {
            context = context.with_inventory(label.as_str());
        }
        error.with_context(context)
    }
}
