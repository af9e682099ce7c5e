//! Error types for the catalog.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

/// Result alias used across the catalog crates.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for catalog operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a duplicate collection name error.
    #[must_use]
    pub fn duplicate_collection(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateCollection(name.into()))
    }

    /// Creates a duplicate relation name error.
    #[must_use]
    pub fn duplicate_relation(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateRelation(name.into()))
    }

    /// Creates a missing collection error for one endpoint of a relation.
    #[must_use]
    pub fn missing_collection(
        relation: impl Into<String>,
        collection: impl Into<String>,
        endpoint: Endpoint,
    ) -> Self {
        Self::new(ErrorKind::MissingCollection {
            relation: relation.into(),
            collection: collection.into(),
            endpoint,
        })
    }

    /// Creates an unknown field error.
    #[must_use]
    pub fn unknown_field(collection: impl Into<String>, field: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownField {
            collection: collection.into(),
            field: field.into(),
        })
    }

    /// Creates a registry limit exceeded error.
    #[must_use]
    pub fn limit_exceeded(limit: RegistryLimit) -> Self {
        Self::new(ErrorKind::LimitExceeded(limit))
    }

    /// Returns true if this error rejected a duplicate collection name.
    #[must_use]
    pub const fn is_duplicate_name(&self) -> bool {
        matches!(self.kind, ErrorKind::DuplicateCollection(_))
    }

    /// Returns true if this error rejected a relation with an unregistered endpoint.
    #[must_use]
    pub const fn is_missing_collection(&self) -> bool {
        matches!(self.kind, ErrorKind::MissingCollection { .. })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A collection with this name is already registered.
    #[error("collection name already registered: {0}")]
    DuplicateCollection(String),

    /// A relation endpoint is not registered in the inventory.
    #[error("relation {relation} references unregistered {endpoint} collection {collection}")]
    MissingCollection {
        /// The relation being added.
        relation: String,
        /// Name of the collection that was not found.
        collection: String,
        /// Which side of the relation the collection sits on.
        endpoint: Endpoint,
    },

    /// A relation with this name is already registered.
    #[error("relation name already registered: {0}")]
    DuplicateRelation(String),

    /// A key names a field its collection does not declare.
    #[error("unknown field: {field} on collection {collection}")]
    UnknownField {
        /// The collection that was queried.
        collection: String,
        /// The field name that was not found.
        field: String,
    },

    /// A key was declared without any fields.
    #[error("key {key} on collection {collection} has no fields")]
    EmptyKey {
        /// The collection the key belongs to.
        collection: String,
        /// The key name.
        key: String,
    },

    /// Registry limit exceeded.
    #[error("limit exceeded: {0}")]
    LimitExceeded(RegistryLimit),
}

/// The side of a relation a collection sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// The collection holding the reference.
    Tail,
    /// The collection whose key is referenced.
    Head,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tail => write!(f, "tail"),
            Self::Head => write!(f, "head"),
        }
    }
}

/// Registry limits that can be exceeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryLimit {
    /// Maximum number of collections exceeded.
    MaxCollections {
        /// The configured limit.
        limit: usize,
    },
    /// Maximum number of relations exceeded.
    MaxRelations {
        /// The configured limit.
        limit: usize,
    },
}

impl fmt::Display for RegistryLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MaxCollections { limit } => write!(f, "max collections ({limit}) exceeded"),
            Self::MaxRelations { limit } => write!(f, "max relations ({limit}) exceeded"),
        }
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Label of the inventory that rejected the operation.
    pub inventory: Option<String>,
    /// The operation that failed (e.g. `add_relation`).
    pub operation: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the inventory label.
    #[must_use]
    pub fn with_inventory(mut self, inventory: impl Into<String>) -> Self {
        self.inventory = Some(inventory.into());
        self
    }

    /// Sets the failed operation.
    #[must_use]
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Some(operation.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.operation, &self.inventory) {
            (Some(op), Some(inv)) => write!(f, "in {op} on inventory {inv}"),
            (Some(op), None) => write!(f, "in {op}"),
            (None, Some(inv)) => write!(f, "on inventory {inv}"),
            (None, None) => Ok(()),
        }
    }
}
