use std::sync::Arc;

use super::*;
use crate::state::test_helpers::{self, FixedDetector, area};

fn params(name: Option<&str>, left: &str, right: &str, top: &str, bottom: &str) -> AddAreaParams {
    AddAreaParams {
        name: name.map(str::to_owned),
        left: Some(left.to_owned()),
        right: Some(right.to_owned()),
        top: Some(top.to_owned()),
        bottom: Some(bottom.to_owned()),
    }
}

// =============================================================================
// AddAreaParams
// =============================================================================

#[test]
fn into_area_parses_integers() {
    let a = params(Some("A1"), "10", "110", "20", "70").into_area().unwrap();
    assert_eq!(a, area("A1", 10, 110, 20, 70));
}

#[test]
fn into_area_keeps_unsorted_coordinates() {
    let a = params(Some("rev"), "300", "100", "200", "50").into_area().unwrap();
    assert_eq!(a, area("rev", 300, 100, 200, 50));
}

#[test]
fn into_area_accepts_empty_name() {
    let a = params(Some(""), "0", "1", "0", "1").into_area().unwrap();
    assert!(a.name.is_empty());
}

#[test]
fn into_area_trims_whitespace() {
    let a = params(Some("A"), " 5", "6 ", "7", "8").into_area().unwrap();
    assert_eq!((a.left, a.right), (5, 6));
}

#[test]
fn into_area_rejects_missing_name() {
    let err = params(None, "0", "1", "0", "1").into_area().unwrap_err();
    assert_eq!(err, AreaError::MissingArgument("name"));
}

#[test]
fn into_area_rejects_missing_coordinate() {
    let mut p = params(Some("A"), "0", "1", "0", "1");
    p.bottom = None;
    assert_eq!(p.into_area().unwrap_err(), AreaError::MissingArgument("bottom"));
}

#[test]
fn into_area_rejects_fractional_coordinate() {
    let err = params(Some("A"), "0", "1.5", "0", "1").into_area().unwrap_err();
    assert_eq!(err, AreaError::InvalidCoordinate { field: "right", value: "1.5".to_owned() });
}

// =============================================================================
// AreaRegistry
// =============================================================================

#[test]
fn registry_keeps_insertion_order_and_duplicates() {
    let mut registry = AreaRegistry::new();
    registry.add(area("B", 0, 1, 0, 1));
    registry.add(area("A", 0, 1, 0, 1));
    registry.add(area("B", 2, 3, 2, 3));
    let names: Vec<&str> = registry.areas().iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, ["B", "A", "B"]);
}

#[test]
fn registry_clear_reports_removed_count() {
    let mut registry = AreaRegistry::new();
    registry.add(area("A", 0, 1, 0, 1));
    registry.add(area("B", 0, 1, 0, 1));
    assert_eq!(registry.clear(), 2);
    assert!(registry.areas().is_empty());
    assert_eq!(registry.clear(), 0);
}

// =============================================================================
// Operations
// =============================================================================

#[tokio::test]
async fn add_area_stores_valid_area() {
    let state = test_helpers::test_app_state();
    let added = add_area(&state, params(Some("A1"), "10", "110", "20", "70")).await.unwrap();
    assert_eq!(list_areas(&state).await, vec![added]);
}

#[tokio::test]
async fn add_area_rejects_without_storing() {
    let state = test_helpers::test_app_state();
    assert!(add_area(&state, params(Some("A1"), "x", "110", "20", "70")).await.is_err());
    assert!(list_areas(&state).await.is_empty());
}

#[tokio::test]
async fn clear_areas_empties_registry() {
    let state = test_helpers::test_app_state();
    test_helpers::seed_areas(&state, vec![area("A", 0, 1, 0, 1), area("B", 0, 1, 0, 1)]).await;
    assert_eq!(clear_areas(&state).await, 2);
    assert!(list_areas(&state).await.is_empty());
}

#[tokio::test]
async fn obscured_areas_asks_detector_for_current_areas() {
    let state = test_helpers::test_app_state_with_detector(Arc::new(FixedDetector::obscuring(&["A"])));
    test_helpers::seed_areas(&state, vec![area("A", 0, 1, 0, 1), area("B", 0, 1, 0, 1)]).await;
    let map = obscured_areas(&state).await;
    assert_eq!(map.get("A"), Some(&true));
    assert_eq!(map.get("B"), Some(&false));
}

#[tokio::test]
async fn obscured_areas_is_empty_after_clear() {
    let state = test_helpers::test_app_state_with_detector(Arc::new(FixedDetector::obscuring(&["A"])));
    test_helpers::seed_areas(&state, vec![area("A", 0, 1, 0, 1)]).await;
    clear_areas(&state).await;
    assert!(obscured_areas(&state).await.is_empty());
}

#[test]
fn snapshot_empty_state_reaches_detector() {
    let detector = Arc::new(FixedDetector::default());
    let state = test_helpers::test_app_state_with_detector(detector.clone());
    snapshot_empty_state(&state);
    snapshot_empty_state(&state);
    assert_eq!(*detector.snapshots.lock().unwrap(), 2);
}
