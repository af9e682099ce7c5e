//! Collection descriptors.
//!
//! A collection is a named schema entity, usually backed by a table or view.
//! The inventory only inspects its name; fields and description are carried
//! for consumers.

use catalog_foundation::FieldType;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Descriptor for a collection.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Collection {
    /// Collection name (e.g. `people`, `posts`).
    pub name: String,
    /// Human-readable description.
    pub description: Option<String>,
    /// Field definitions, in declaration order.
    pub fields: Vec<Field>,
}

impl Collection {
    /// Creates a new collection with no fields.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields: Vec::new(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds a field to the collection.
    #[must_use]
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Returns the collection name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Descriptor for a collection field.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Field {
    /// Field name.
    pub name: String,
    /// Field type.
    pub ty: FieldType,
    /// Human-readable description.
    pub description: Option<String>,
}

impl Field {
    /// Creates a non-nullable field.
    #[must_use]
    pub fn required(name: impl Into<String>, ty: FieldType) -> Self {
        Self {
            name: name.into(),
            ty: ty.non_null().clone(),
            description: None,
        }
    }

    /// Creates a nullable field.
    #[must_use]
    pub fn optional(name: impl Into<String>, ty: FieldType) -> Self {
        Self {
            name: name.into(),
            ty: FieldType::nullable(ty),
            description: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns true if the field may not be null.
    #[must_use]
    pub const fn is_required(&self) -> bool {
        !self.ty.is_nullable()
    }
}
