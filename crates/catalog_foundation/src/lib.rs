//! Core types shared by every catalog layer.
//!
//! This crate provides:
//! - [`Error`] - Registry errors with kind and context
//! - [`FieldType`] - Type descriptors for collection fields

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod types;

pub use error::{Endpoint, Error, ErrorContext, ErrorKind, RegistryLimit, Result};
pub use types::FieldType;
