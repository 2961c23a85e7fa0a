//! Record Access Contract Tests
//!
//! The fail-soft contract: operations on a missing table degrade to
//! empty/none/outcome results, never errors. Malformed update patches are
//! the loud exception.

use csvstore::normalizer::normalize;
use csvstore::store::{MutationOutcome, StoreError, TableStore};

// =============================================================================
// Helper Functions
// =============================================================================

fn loaded_store() -> TableStore {
    let store = TableStore::new();
    let table = normalize(b"name,age,city\nJohn,30,Paris\nJane,25,London\nBob,30,Paris\n")
        .unwrap();
    store.rebuild_and_load(table).unwrap();
    store
}

fn patch(column: &str, value: &str) -> Vec<(String, String)> {
    vec![(column.to_string(), value.to_string())]
}

// =============================================================================
// Fail-Soft on Missing Table
// =============================================================================

/// Every data operation degrades quietly before the first upload.
#[test]
fn test_missing_table_degrades_to_empty_results() {
    let store = TableStore::new();
    let access = store.records();

    assert!(!store.exists());
    assert!(access.list(None).is_empty());
    assert!(access.list(Some(("name", "John"))).is_empty());
    assert!(access.get(1).is_none());
    assert_eq!(
        access.update(1, &patch("name", "X")).unwrap(),
        MutationOutcome::TableMissing
    );
    assert_eq!(access.delete(1), MutationOutcome::TableMissing);
}

// =============================================================================
// Get / Delete Lifecycle
// =============================================================================

/// An identity that was never assigned is not found.
#[test]
fn test_get_unassigned_identity() {
    let access = loaded_store().records();
    assert!(access.get(0).is_none());
    assert!(access.get(4).is_none());
    assert!(access.get(-1).is_none());
}

/// After delete, the identity is gone for good.
#[test]
fn test_delete_then_get_not_found() {
    let access = loaded_store().records();

    assert!(access.delete(1).applied());
    assert!(access.get(1).is_none());

    // Remaining identities are untouched
    assert!(access.get(2).is_some());
    assert!(access.get(3).is_some());
    assert_eq!(access.delete(1), MutationOutcome::RecordMissing);
}

// =============================================================================
// Update Semantics
// =============================================================================

/// Updating one column leaves every other field and record unchanged.
#[test]
fn test_update_is_surgical() {
    let access = loaded_store().records();
    assert!(access.update(2, &patch("city", "Berlin")).unwrap().applied());

    let updated = access.get(2).unwrap();
    assert_eq!(updated.value("city"), Some("Berlin"));
    assert_eq!(updated.value("name"), Some("Jane"));
    assert_eq!(updated.value("age"), Some("25"));

    assert_eq!(access.get(1).unwrap().value("city"), Some("Paris"));
    assert_eq!(access.get(3).unwrap().value("city"), Some("Paris"));
}

/// Multi-field patches apply together.
#[test]
fn test_update_multiple_fields() {
    let access = loaded_store().records();
    let fields = vec![
        ("name".to_string(), "Johnny".to_string()),
        ("age".to_string(), "31".to_string()),
    ];
    assert!(access.update(1, &fields).unwrap().applied());

    let record = access.get(1).unwrap();
    assert_eq!(record.value("name"), Some("Johnny"));
    assert_eq!(record.value("age"), Some("31"));
}

/// A patch naming an unknown column fails loudly and applies nothing.
#[test]
fn test_update_unknown_column_fails_loud() {
    let access = loaded_store().records();
    let fields = vec![
        ("age".to_string(), "99".to_string()),
        ("email".to_string(), "j@x".to_string()),
    ];

    let err = access.update(1, &fields).unwrap_err();
    assert!(matches!(err, StoreError::UnknownColumn(c) if c == "email"));
    assert_eq!(access.get(1).unwrap().value("age"), Some("30"));
}

// =============================================================================
// Filtered Listing
// =============================================================================

/// The filter returns exactly the records whose value matches, text-equal.
#[test]
fn test_filter_exact_text_equality() {
    let access = loaded_store().records();

    let paris = access.list(Some(("city", "Paris")));
    assert_eq!(paris.len(), 2);
    let names: Vec<_> = paris.iter().map(|r| r.value("name").unwrap()).collect();
    assert_eq!(names, vec!["John", "Bob"]);

    let age30 = access.list(Some(("age", "30")));
    assert_eq!(age30.len(), 2);
}

/// Case differences and partial matches do not count.
#[test]
fn test_filter_no_loose_matching() {
    let access = loaded_store().records();
    assert!(access.list(Some(("city", "paris"))).is_empty());
    assert!(access.list(Some(("city", "Par"))).is_empty());
}

/// Unknown filter columns yield empty, not an error.
#[test]
fn test_filter_unknown_column_is_empty() {
    let access = loaded_store().records();
    assert!(access.list(Some(("country", "France"))).is_empty());
}

/// Records list in identity order even after deletions.
#[test]
fn test_list_order_after_mutation() {
    let access = loaded_store().records();
    access.delete(2);

    let ids: Vec<_> = access.list(None).iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 3]);
}
