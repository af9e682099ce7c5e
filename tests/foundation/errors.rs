//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use catalog_foundation::{Endpoint, Error, ErrorContext, ErrorKind, RegistryLimit};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_duplicate_collection() {
    let err = Error::duplicate_collection("people");
    assert!(matches!(err.kind, ErrorKind::DuplicateCollection(ref name) if name == "people"));
    assert!(err.context.is_none());
}

#[test]
fn error_duplicate_relation() {
    let err = Error::duplicate_relation("author");
    assert!(matches!(err.kind, ErrorKind::DuplicateRelation(_)));
    assert!(!err.is_duplicate_name());
}

#[test]
fn error_missing_collection() {
    let err = Error::missing_collection("author", "people", Endpoint::Tail);
    match err.kind {
        ErrorKind::MissingCollection {
            relation,
            collection,
            endpoint,
        } => {
            assert_eq!(relation, "author");
            assert_eq!(collection, "people");
            assert_eq!(endpoint, Endpoint::Tail);
        }
        other => panic!("unexpected kind: {other:?}"),
    }
}

#[test]
fn error_unknown_field() {
    let err = Error::unknown_field("people", "nickname");
    assert!(matches!(err.kind, ErrorKind::UnknownField { .. }));
}

// =============================================================================
// Error Display
// =============================================================================

#[test]
fn error_display_duplicate_collection() {
    let msg = format!("{}", Error::duplicate_collection("people"));
    assert_eq!(msg, "collection name already registered: people");
}

#[test]
fn error_display_missing_collection() {
    let msg = format!(
        "{}",
        Error::missing_collection("author", "people", Endpoint::Head)
    );
    assert_eq!(
        msg,
        "relation author references unregistered head collection people"
    );
}

#[test]
fn error_display_unknown_field() {
    let msg = format!("{}", Error::unknown_field("people", "nickname"));
    assert!(msg.contains("people"));
    assert!(msg.contains("nickname"));
}

#[test]
fn error_display_limit() {
    let msg = format!(
        "{}",
        Error::limit_exceeded(RegistryLimit::MaxCollections { limit: 3 })
    );
    assert_eq!(msg, "limit exceeded: max collections (3) exceeded");
}

#[test]
fn endpoint_display() {
    assert_eq!(format!("{}", Endpoint::Tail), "tail");
    assert_eq!(format!("{}", Endpoint::Head), "head");
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn context_does_not_change_display() {
    let err = Error::duplicate_collection("a")
        .with_context(ErrorContext::new().with_operation("add_collection"));
    assert_eq!(format!("{err}"), "collection name already registered: a");
}

#[test]
fn context_display_variants() {
    assert_eq!(
        format!("{}", ErrorContext::new().with_operation("add_relation")),
        "in add_relation"
    );
    assert_eq!(
        format!("{}", ErrorContext::new().with_inventory("public")),
        "on inventory public"
    );
}

#[test]
fn error_is_std_error() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
    assert_error(&Error::duplicate_collection("a"));
}
