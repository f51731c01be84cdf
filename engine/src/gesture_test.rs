use super::*;

#[test]
fn default_is_idle() {
    let state = GestureState::default();
    assert!(state.is_idle());
    assert!(!state.is_dragging());
    assert!(!state.is_resizing());
}

#[test]
fn dragging_predicates() {
    let state = GestureState::Dragging {
        last: Point::new(10.0, 10.0),
        live: Point::new(0.0, 0.0),
    };
    assert!(state.is_dragging());
    assert!(!state.is_idle());
    assert!(!state.is_resizing());
    assert_eq!(state.resize_direction(), None);
}

#[test]
fn resizing_predicates_and_direction() {
    let state = GestureState::Resizing {
        direction: Direction::TopLeft,
        last: Point::new(5.0, 5.0),
        live: Geometry::new(Point::new(0.0, 0.0), crate::geometry::Size::new(200.0, 200.0)),
    };
    assert!(state.is_resizing());
    assert!(!state.is_dragging());
    assert_eq!(state.resize_direction(), Some(Direction::TopLeft));
}

#[test]
fn idle_has_no_resize_direction() {
    assert_eq!(GestureState::Idle.resize_direction(), None);
}
