#![allow(clippy::float_cmp)]

use uuid::Uuid;

use super::*;

// =============================================================
// Helpers
// =============================================================

fn element(index: i64) -> BoardElement {
    let mut element = BoardElement::new(Uuid::new_v4());
    element.index = index;
    element
}

// =============================================================
// BoardElement defaults and validation
// =============================================================

#[test]
fn new_element_has_stock_defaults() {
    let element = BoardElement::new(Uuid::new_v4());
    assert_eq!(element.min_size, Size::new(100.0, 100.0));
    assert_eq!(element.size, Size::new(200.0, 200.0));
    assert_eq!(element.position, Point::new(0.0, 0.0));
    assert_eq!(element.bounds, Bounds::unbounded());
    assert!(element.grid.is_none());
    assert!(!element.active);
    assert_eq!(element.index, 0);
    assert_eq!(element.bar_thickness, 3.0);
}

#[test]
fn validate_accepts_the_defaults() {
    assert_eq!(BoardElement::new(Uuid::new_v4()).validate(), Ok(()));
}

#[test]
fn validate_rejects_zero_min_size() {
    let mut element = BoardElement::new(Uuid::new_v4());
    element.min_size = Size::new(100.0, 0.0);
    assert!(matches!(element.validate(), Err(ConfigError::NonPositiveMinSize { .. })));
}

#[test]
fn validate_rejects_negative_grid() {
    let mut element = BoardElement::new(Uuid::new_v4());
    element.grid = Some(Grid::new(-1.0, 10.0));
    assert!(matches!(element.validate(), Err(ConfigError::NonPositiveGrid { .. })));
}

#[test]
fn validate_tolerates_degenerate_bounds() {
    // Bounds smaller than the minimum size are clamped at interaction
    // time, not rejected here.
    let mut element = BoardElement::new(Uuid::new_v4());
    element.bounds = Bounds::new(0.0, 10.0, 10.0, 20.0);
    assert_eq!(element.validate(), Ok(()));
}

#[test]
fn element_serde_round_trip() {
    let mut element = element(3);
    element.class = "cla".to_owned();
    element.grid = Some(Grid::new(20.0, 20.0));
    element.data = serde_json::json!({ "label": "Notes" });
    let json = serde_json::to_string(&element).unwrap();
    let back: BoardElement = serde_json::from_str(&json).unwrap();
    assert_eq!(back.id, element.id);
    assert_eq!(back.class, "cla");
    assert_eq!(back.grid, Some(Grid::new(20.0, 20.0)));
    assert_eq!(back.index, 3);
    assert_eq!(back.data, element.data);
}

// =============================================================
// Stacking order
// =============================================================

#[test]
fn inactive_z_index_uses_the_low_base() {
    let element = element(2);
    assert_eq!(element.z_index(), 11);
}

#[test]
fn active_z_index_uses_the_high_base() {
    let mut element = element(2);
    element.active = true;
    assert_eq!(element.z_index(), 101);
}

#[test]
fn active_element_stacks_above_every_inactive_one() {
    // Activating A must raise it above B regardless of their indices.
    let mut a = element(1);
    let mut b = element(0);
    b.active = true;

    let mut board = Board::new();
    board.insert(a.clone());
    board.insert(b.clone());
    assert!(board.activate(&a.id));

    a.active = true;
    b.active = false;
    let z_a = board.get(&a.id).map(BoardElement::z_index);
    let z_b = board.get(&b.id).map(BoardElement::z_index);
    assert_eq!(z_a, Some(100));
    assert_eq!(z_b, Some(9));
    assert!(z_a > z_b);
}

// =============================================================
// Board: insert / remove / get
// =============================================================

#[test]
fn new_board_is_empty() {
    let board = Board::new();
    assert!(board.is_empty());
    assert_eq!(board.len(), 0);
    assert_eq!(board.active_id(), None);
}

#[test]
fn insert_and_get() {
    let mut board = Board::new();
    let element = element(0);
    let id = element.id;
    board.insert(element);
    assert_eq!(board.len(), 1);
    assert!(board.get(&id).is_some());
}

#[test]
fn insert_replaces_an_existing_record() {
    let mut board = Board::new();
    let mut element = element(0);
    let id = element.id;
    board.insert(element.clone());
    element.class = "clb".to_owned();
    board.insert(element);
    assert_eq!(board.len(), 1);
    assert_eq!(board.get(&id).map(|e| e.class.as_str()), Some("clb"));
}

#[test]
fn insert_active_element_takes_activation() {
    let mut board = Board::new();
    let a = element(0);
    let mut b = element(1);
    b.active = true;
    let (a_id, b_id) = (a.id, b.id);
    board.insert(a);
    board.insert(b);
    assert_eq!(board.active_id(), Some(b_id));
    assert_eq!(board.get(&a_id).map(|e| e.active), Some(false));
}

#[test]
fn remove_returns_the_element() {
    let mut board = Board::new();
    let element = element(0);
    let id = element.id;
    board.insert(element);
    assert!(board.remove(&id).is_some());
    assert!(board.is_empty());
    assert!(board.remove(&id).is_none());
}

#[test]
fn removing_the_active_element_clears_activation() {
    let mut board = Board::new();
    let mut element = element(0);
    element.active = true;
    let id = element.id;
    board.insert(element);
    assert_eq!(board.active_id(), Some(id));
    board.remove(&id);
    assert_eq!(board.active_id(), None);
}

// =============================================================
// Activation
// =============================================================

#[test]
fn activate_sets_exactly_one_flag() {
    let mut board = Board::new();
    let a = element(0);
    let b = element(1);
    let c = element(2);
    let (a_id, b_id, c_id) = (a.id, b.id, c.id);
    board.insert(a);
    board.insert(b);
    board.insert(c);

    assert!(board.activate(&b_id));
    assert_eq!(board.active_id(), Some(b_id));
    assert_eq!(board.get(&a_id).map(|e| e.active), Some(false));
    assert_eq!(board.get(&b_id).map(|e| e.active), Some(true));
    assert_eq!(board.get(&c_id).map(|e| e.active), Some(false));

    // Activating another element clears the previous one.
    assert!(board.activate(&c_id));
    assert_eq!(board.get(&b_id).map(|e| e.active), Some(false));
    assert_eq!(board.get(&c_id).map(|e| e.active), Some(true));
}

#[test]
fn activate_unknown_id_leaves_the_board_unchanged() {
    let mut board = Board::new();
    let element = element(0);
    let id = element.id;
    board.insert(element);
    board.activate(&id);
    assert!(!board.activate(&Uuid::new_v4()));
    assert_eq!(board.active_id(), Some(id));
}

// =============================================================
// Geometry notifications
// =============================================================

#[test]
fn apply_move_updates_the_record() {
    let mut board = Board::new();
    let element = element(0);
    let id = element.id;
    board.insert(element);
    assert!(board.apply_move(&id, Point::new(120.0, 80.0)));
    assert_eq!(board.get(&id).map(|e| e.position), Some(Point::new(120.0, 80.0)));
}

#[test]
fn apply_resize_updates_position_and_size() {
    let mut board = Board::new();
    let element = element(0);
    let id = element.id;
    board.insert(element);
    let geometry = Geometry::new(Point::new(60.0, 70.0), Size::new(250.0, 180.0));
    assert!(board.apply_resize(&id, geometry));
    assert_eq!(board.get(&id).map(|e| e.position), Some(Point::new(60.0, 70.0)));
    assert_eq!(board.get(&id).map(|e| e.size), Some(Size::new(250.0, 180.0)));
}

#[test]
fn geometry_notifications_for_unknown_ids_return_false() {
    let mut board = Board::new();
    assert!(!board.apply_move(&Uuid::new_v4(), Point::new(0.0, 0.0)));
    assert!(!board.apply_resize(
        &Uuid::new_v4(),
        Geometry::new(Point::new(0.0, 0.0), Size::new(100.0, 100.0))
    ));
}

// =============================================================
// Render order
// =============================================================

#[test]
fn sorted_orders_by_z_index() {
    let mut board = Board::new();
    let low = element(0);
    let high = element(5);
    let mut top = element(1);
    top.active = true;
    let (low_id, high_id, top_id) = (low.id, high.id, top.id);
    board.insert(low);
    board.insert(high);
    board.insert(top);

    let order: Vec<ElementId> = board.sorted().iter().map(|e| e.id).collect();
    assert_eq!(order, vec![low_id, high_id, top_id]);
}

#[test]
fn sorted_breaks_ties_by_id() {
    let mut board = Board::new();
    let a = element(0);
    let b = element(0);
    board.insert(a.clone());
    board.insert(b.clone());
    let order: Vec<ElementId> = board.sorted().iter().map(|e| e.id).collect();
    let mut expected = vec![a.id, b.id];
    expected.sort();
    assert_eq!(order, expected);
}
