//! Configuration for an inventory.

/// Configuration for an [`Inventory`](crate::Inventory).
///
/// Controls labelling, relation name uniqueness, and registry limits.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InventoryConfig {
    /// Name used for this inventory in log events and error context.
    pub label: Option<String>,

    /// Reject relations whose name is already registered.
    pub unique_relation_names: bool,

    /// Maximum number of collections (None = unbounded).
    pub max_collections: Option<usize>,

    /// Maximum number of relations (None = unbounded).
    pub max_relations: Option<usize>,
}

impl InventoryConfig {
    /// Creates a configuration that also rejects duplicate relation names.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            unique_relation_names: true,
            ..Self::default()
        }
    }

    /// Builder method to set the label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Builder method to set relation name uniqueness.
    #[must_use]
    pub fn with_unique_relation_names(mut self, unique: bool) -> Self {
        self.unique_relation_names = unique;
        self
    }

    /// Builder method to set the collection limit.
    #[must_use]
    pub fn with_max_collections(mut self, limit: usize) -> Self {
        self.max_collections = Some(limit);
        self
    }

    /// Builder method to set the relation limit.
    #[must_use]
    pub fn with_max_relations(mut self, limit: usize) -> Self {
        self.max_relations = Some(limit);
        self
    }

    /// Returns the label, or `"inventory"` when none is set.
    #[must_use]
    pub fn label_or_default(&self) -> &str {
        self.label.as_deref().unwrap_or("inventory")
    }
}
