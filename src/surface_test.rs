#![allow(clippy::float_cmp)]

use uuid::Uuid;

use super::*;
use crate::geometry::Rect;

fn make_shape(left: f64, top: f64) -> Shape {
    Shape::new(Uuid::new_v4(), left, top, 100.0, 50.0)
}

// =============================================================
// Construction and dimensions
// =============================================================

#[test]
fn new_surface_is_empty() {
    let surface = Surface::new(800.0, 600.0).unwrap();
    assert!(surface.is_empty());
    assert_eq!(surface.len(), 0);
    assert_eq!(surface.width(), 800.0);
    assert_eq!(surface.height(), 600.0);
}

#[test]
fn zero_sized_surface_is_allowed() {
    assert!(Surface::new(0.0, 0.0).is_ok());
}

#[test]
fn new_rejects_negative_dimensions() {
    let err = Surface::new(-1.0, 600.0).unwrap_err();
    assert_eq!(err, SurfaceError::InvalidDimensions { width: -1.0, height: 600.0 });
}

#[test]
fn new_rejects_non_finite_dimensions() {
    assert!(Surface::new(f64::NAN, 600.0).is_err());
    assert!(Surface::new(800.0, f64::INFINITY).is_err());
}

#[test]
fn set_dimensions_returns_previous() {
    let mut surface = Surface::new(1000.0, 800.0).unwrap();
    let old = surface.set_dimensions(600.0, 800.0).unwrap();
    assert_eq!(old, Size::new(1000.0, 800.0));
    assert_eq!(surface.size(), Size::new(600.0, 800.0));
}

#[test]
fn set_dimensions_rejection_keeps_size() {
    let mut surface = Surface::new(1000.0, 800.0).unwrap();
    assert!(surface.set_dimensions(f64::NAN, 10.0).is_err());
    assert_eq!(surface.size(), Size::new(1000.0, 800.0));
}

#[test]
fn error_message_names_dimensions() {
    let err = Surface::new(-5.0, 3.0).unwrap_err();
    assert_eq!(err.to_string(), "invalid surface dimensions -5x3 (must be finite and non-negative)");
}

// =============================================================
// Shape store
// =============================================================

#[test]
fn insert_and_get() {
    let mut surface = Surface::new(800.0, 600.0).unwrap();
    let shape = make_shape(10.0, 20.0);
    let id = shape.id;
    surface.insert(shape);
    assert_eq!(surface.len(), 1);
    assert_eq!(surface.get(&id).map(|s| s.left), Some(10.0));
}

#[test]
fn insert_refreshes_coords() {
    let mut surface = Surface::new(800.0, 600.0).unwrap();
    let mut shape = make_shape(10.0, 20.0);
    shape.left = 40.0;
    let id = shape.id;
    surface.insert(shape);
    let rect = surface.get(&id).and_then(Shape::bounding_rect);
    assert_eq!(rect, Some(Rect::new(40.0, 20.0, 100.0, 50.0)));
}

#[test]
fn insert_replaces_same_id() {
    let mut surface = Surface::new(800.0, 600.0).unwrap();
    let shape = make_shape(10.0, 20.0);
    let id = shape.id;
    surface.insert(shape.clone());
    let mut moved = shape;
    moved.left = 99.0;
    surface.insert(moved);
    assert_eq!(surface.len(), 1);
    assert_eq!(surface.get(&id).map(|s| s.left), Some(99.0));
}

#[test]
fn remove_returns_shape() {
    let mut surface = Surface::new(800.0, 600.0).unwrap();
    let shape = make_shape(0.0, 0.0);
    let id = shape.id;
    surface.insert(shape);
    assert!(surface.remove(&id).is_some());
    assert!(surface.remove(&id).is_none());
    assert!(surface.is_empty());
}

#[test]
fn get_mut_allows_field_writes() {
    let mut surface = Surface::new(800.0, 600.0).unwrap();
    let shape = make_shape(0.0, 0.0);
    let id = shape.id;
    surface.insert(shape);
    if let Some(s) = surface.get_mut(&id) {
        s.top = 33.0;
    }
    assert_eq!(surface.get(&id).map(|s| s.top), Some(33.0));
}

#[test]
fn shapes_are_sorted_by_id() {
    let mut surface = Surface::new(800.0, 600.0).unwrap();
    for i in 0..5 {
        surface.insert(make_shape(f64::from(i), 0.0));
    }
    let ids: Vec<ShapeId> = surface.shapes().iter().map(|s| s.id).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);
}

#[test]
fn shapes_mut_visits_all() {
    let mut surface = Surface::new(800.0, 600.0).unwrap();
    for _ in 0..3 {
        surface.insert(make_shape(0.0, 0.0));
    }
    for s in surface.shapes_mut() {
        s.left = 5.0;
    }
    assert!(surface.shapes().iter().all(|s| s.left == 5.0));
}
