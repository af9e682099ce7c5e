//! Integration tests for inventory configuration

use std::sync::Arc;

use catalog_foundation::{ErrorKind, RegistryLimit};
use catalog_inventory::{Inventory, InventoryConfig};

use crate::{collection, relation};

#[test]
fn default_inventory_uses_default_config() {
    let inventory = Inventory::new();
    assert_eq!(inventory.config(), &InventoryConfig::default());
}

#[test]
fn labelled_inventory_reports_label_in_error_context() {
    let mut inventory = Inventory::with_config(InventoryConfig::default().with_label("public"));
    inventory.add_collection(collection("a")).unwrap();

    let err = inventory.add_collection(collection("a")).unwrap_err();
    let ctx = err.context.unwrap();
    assert_eq!(ctx.inventory.as_deref(), Some("public"));
    assert_eq!(ctx.operation.as_deref(), Some("add_collection"));
}

#[test]
fn unlabelled_inventory_still_reports_operation() {
    let mut inventory = Inventory::new();
    let a = collection("a");
    let err = inventory.add_relation(relation("r", &a, &a)).unwrap_err();

    let ctx = err.context.unwrap();
    assert!(ctx.inventory.is_none());
    assert_eq!(ctx.operation.as_deref(), Some("add_relation"));
}

#[test]
fn strict_inventory_rejects_duplicate_relation_names() {
    let mut inventory = Inventory::with_config(InventoryConfig::strict());
    let a = collection("a");
    let b = collection("b");
    inventory.add_collection(Arc::clone(&a)).unwrap();
    inventory.add_collection(Arc::clone(&b)).unwrap();

    inventory.add_relation(relation("link", &a, &b)).unwrap();
    let err = inventory.add_relation(relation("link", &b, &a)).unwrap_err();

    assert!(matches!(err.kind, ErrorKind::DuplicateRelation(ref name) if name == "link"));
    assert_eq!(inventory.relation_count(), 1);
}

#[test]
fn endpoint_check_runs_before_name_check() {
    let mut inventory = Inventory::with_config(InventoryConfig::strict());
    let a = collection("a");
    let stranger = collection("stranger");
    inventory.add_collection(Arc::clone(&a)).unwrap();
    inventory.add_relation(relation("link", &a, &a)).unwrap();

    let err = inventory
        .add_relation(relation("link", &stranger, &a))
        .unwrap_err();
    assert!(err.is_missing_collection());
}

#[test]
fn limits_leave_registry_unchanged() {
    let config = InventoryConfig::default()
        .with_max_collections(2)
        .with_max_relations(1);
    let mut inventory = Inventory::with_config(config);
    let a = collection("a");
    let b = collection("b");

    inventory.add_collection(Arc::clone(&a)).unwrap();
    inventory.add_collection(Arc::clone(&b)).unwrap();
    let err = inventory.add_collection(collection("c")).unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::LimitExceeded(RegistryLimit::MaxCollections { limit: 2 })
    ));

    inventory.add_relation(relation("ab", &a, &b)).unwrap();
    let err = inventory.add_relation(relation("ba", &b, &a)).unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::LimitExceeded(RegistryLimit::MaxRelations { limit: 1 })
    ));

    assert_eq!(inventory.collection_count(), 2);
    assert_eq!(inventory.relation_count(), 1);
}
