//! Type descriptors for collection fields.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Type descriptor for a collection field.
///
/// The inventory carries these for its consumers and never interprets them.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FieldType {
    /// Boolean type.
    Bool,
    /// 64-bit signed integer.
    Int,
    /// 64-bit floating point.
    Float,
    /// String type.
    String,
    /// Opaque identifier (e.g. a UUID or serial primary key).
    Id,
    /// Point in time.
    Timestamp,
    /// Arbitrary JSON document.
    Json,
    /// Closed set of string variants.
    Enum(Vec<String>),
    /// Homogeneous list type.
    List(Box<FieldType>),
    /// Nullable type (value or null).
    Nullable(Box<FieldType>),
}

impl FieldType {
    /// Creates a list type with the given element type.
    #[must_use]
    pub fn list(element: FieldType) -> Self {
        Self::List(Box::new(element))
    }

    /// Creates a nullable type.
    ///
    /// Wrapping an already nullable type is a no-op.
    #[must_use]
    pub fn nullable(inner: FieldType) -> Self {
        if inner.is_nullable() {
            inner
        } else {
            Self::Nullable(Box::new(inner))
        }
    }

    /// Creates an enum type from its variants.
    #[must_use]
    pub fn enumeration<I, S>(variants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Enum(variants.into_iter().map(Into::into).collect())
    }

    /// Returns true if this type can be null.
    #[must_use]
    pub const fn is_nullable(&self) -> bool {
        matches!(self, Self::Nullable(_))
    }

    /// Returns the type with any nullable wrapper removed.
    #[must_use]
    pub fn non_null(&self) -> &FieldType {
        match self {
            Self::Nullable(inner) => inner,
            other => other,
        }
    }
}

impl fmt::Debug for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => write!(f, "bool"),
            Self::Int => write!(f, "int"),
            Self::Float => write!(f, "float"),
            Self::String => write!(f, "string"),
            Self::Id => write!(f, "id"),
            Self::Timestamp => write!(f, "timestamp"),
            Self::Json => write!(f, "json"),
            Self::Enum(variants) => write!(f, "enum<{}>", variants.join("|")),
            Self::List(t) => write!(f, "list<{t:?}>"),
            Self::Nullable(t) => write!(f, "{t:?}?"),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
