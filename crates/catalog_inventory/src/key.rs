//! Collection keys.
//!
//! A key names the fields of a collection that uniquely identify one of its
//! rows. Relations point at the head collection through one of its keys.

use std::sync::Arc;

use catalog_foundation::{Error, ErrorKind, Result};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::collection::Collection;

/// A named unique key on a collection.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CollectionKey {
    name: String,
    collection: Arc<Collection>,
    fields: Vec<String>,
}

impl CollectionKey {
    /// Creates a key over the given fields of `collection`.
    ///
    /// The key keeps a handle to the exact `collection` passed in, which is
    /// what the inventory checks when a relation uses this key.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `fields` is empty
    /// - A field is not declared on the collection
    pub fn new<I, S>(collection: &Arc<Collection>, name: impl Into<String>, fields: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let fields: Vec<String> = fields.into_iter().map(Into::into).collect();

        if fields.is_empty() {
            return Err(Error::new(ErrorKind::EmptyKey {
                collection: collection.name.clone(),
                key: name,
            }));
        }
        if let Some(unknown) = fields.iter().find(|f| collection.field(f).is_none()) {
            return Err(Error::unknown_field(&collection.name, unknown));
        }

        Ok(Self {
            name,
            collection: Arc::clone(collection),
            fields,
        })
    }

    /// Returns the key name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the collection this key belongs to.
    #[must_use]
    pub fn collection(&self) -> &Arc<Collection> {
        &self.collection
    }

    /// Returns the key's field names, in order.
    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }
}

impl PartialEq for CollectionKey {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && Arc::ptr_eq(&self.collection, &other.collection)
            && self.fields == other.fields
    }
}
