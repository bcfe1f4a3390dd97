//! `.fuzz` file round-trip integration tests.
//!
//! Run with: `cargo test --features json`
//!
//! Verifies that a registry saved to disk and loaded into a fresh registry
//! reproduces the same ordered sets, that derived kinds in legacy files are
//! ignored, and that a rejected record stops the load without rolling back.

#![cfg(feature = "json")]

use fuzzset_core::persist::{from_json, load_from_path, save_to_path, to_json, FILE_EXTENSION};
use fuzzset_core::{MembershipRegistry, PersistError, RegistryError, ShapeKind, ValidationError};

// ── Helpers ──────────────────────────────────────────────────────────────────

fn sample_registry() -> MembershipRegistry {
    let mut registry = MembershipRegistry::new();
    registry.add("Cold", -4.0, 0.0, 2.0, 4.0).unwrap();
    registry.add("Mild", 2.0, 4.0, 4.0, 8.0).unwrap();
    registry.add("Hot", 4.0, 8.0, 12.0, 14.0).unwrap();
    registry
}

// ── Round trip ───────────────────────────────────────────────────────────────

#[test]
fn test_save_then_load_reproduces_registry() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(format!("terms.{}", FILE_EXTENSION));

    let original = sample_registry();
    save_to_path(&original, &path).unwrap();

    let mut restored = MembershipRegistry::new();
    let loaded = load_from_path(&mut restored, &path).unwrap();

    assert_eq!(loaded, 3);
    assert_eq!(restored.sets(), original.sets());
    assert_eq!(restored.domain_bounds(), original.domain_bounds());
    let kinds: Vec<ShapeKind> = restored.iter().map(|s| s.shape_kind()).collect();
    assert_eq!(
        kinds,
        [ShapeKind::Trapezoidal, ShapeKind::Triangular, ShapeKind::Trapezoidal]
    );
}

#[test]
fn test_saved_file_has_no_derived_fields() {
    let json = to_json(&sample_registry()).unwrap();
    assert!(!json.contains("type"));
    assert!(!json.contains("kind"));

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let first = &value.as_array().unwrap()[0];
    assert_eq!(first["name"], "Cold");
    assert_eq!(first["b"], 0.0);
}

#[test]
fn test_legacy_type_field_is_recomputed() {
    // The stored kind is wrong on purpose; the registry must not trust it.
    let json = r#"[
        {"name": "Low",  "a": 0, "b": 2, "c": 2, "d": 4, "type": "Trapezoidalna"},
        {"name": "High", "a": 2, "b": 4, "c": 5, "d": 6, "type": "Trójkątna"}
    ]"#;
    let mut registry = MembershipRegistry::new();
    assert_eq!(from_json(&mut registry, json).unwrap(), 2);
    assert_eq!(registry.sets()[0].shape_kind(), ShapeKind::Triangular);
    assert_eq!(registry.sets()[1].shape_kind(), ShapeKind::Trapezoidal);
}

// ── Failure modes ────────────────────────────────────────────────────────────

#[test]
fn test_load_stops_at_first_rejected_record() {
    let json = r#"[
        {"name": "Low",   "a": 0, "b": 2, "c": 2, "d": 4},
        {"name": "Ghost", "a": 1, "b": 2, "c": 3, "d": 5},
        {"name": "High",  "a": 2, "b": 4, "c": 4, "d": 6}
    ]"#;
    let mut registry = MembershipRegistry::new();
    let err = from_json(&mut registry, json).unwrap_err();

    match err {
        PersistError::Registry(RegistryError::RecordRejected { index, source }) => {
            assert_eq!(index, 1);
            assert!(matches!(source, ValidationError::Overlap { .. }));
        }
        other => panic!("expected RecordRejected, got {:?}", other),
    }
    // no batch rollback: the first record stays
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.sets()[0].name(), "Low");
}

#[test]
fn test_load_into_occupied_registry_can_conflict() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("terms.fuzz");
    save_to_path(&sample_registry(), &path).unwrap();

    // loading the same file twice collides with itself on the first record
    let mut registry = sample_registry();
    let err = load_from_path(&mut registry, &path).unwrap_err();
    assert!(matches!(
        err,
        PersistError::Registry(RegistryError::RecordRejected { index: 0, .. })
    ));
    assert_eq!(registry.len(), 3);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut registry = MembershipRegistry::new();
    let err = load_from_path(&mut registry, dir.path().join("absent.fuzz")).unwrap_err();
    assert!(matches!(err, PersistError::Io(_)));
    assert!(registry.is_empty());
}

#[test]
fn test_non_list_document_is_json_error() {
    let mut registry = MembershipRegistry::new();
    let err = from_json(&mut registry, r#"{"name": "Low"}"#).unwrap_err();
    assert!(matches!(err, PersistError::Json(_)));
}

#[test]
fn test_empty_registry_round_trip() {
    let registry = MembershipRegistry::new();
    assert_eq!(to_json(&registry).unwrap(), "[]");
    let mut restored = MembershipRegistry::new();
    assert_eq!(from_json(&mut restored, "[]").unwrap(), 0);
    assert_eq!(restored.domain_bounds(), None);
}
