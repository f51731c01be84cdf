use super::*;

#[test]
fn demo_set_has_three_valid_elements() {
    let elements = demo_elements();
    assert_eq!(elements.len(), 3);
    for element in &elements {
        assert_eq!(element.validate(), Ok(()));
    }
}

#[test]
fn demo_set_has_exactly_one_active_element() {
    let elements = demo_elements();
    let active = elements.iter().filter(|e| e.active).count();
    assert_eq!(active, 1);
}

#[test]
fn demo_bounded_element_starts_inside_its_envelope() {
    let elements = demo_elements();
    let bounded = &elements[1];
    assert!(bounded.position.x >= bounded.bounds.left);
    assert!(bounded.position.y >= bounded.bounds.top);
    assert!(bounded.position.x + bounded.size.width <= bounded.bounds.right);
    assert!(bounded.position.y + bounded.size.height <= bounded.bounds.bottom);
}

#[test]
fn demo_stacking_indices_are_distinct() {
    let elements = demo_elements();
    let mut indices: Vec<i64> = elements.iter().map(|e| e.index).collect();
    indices.sort_unstable();
    indices.dedup();
    assert_eq!(indices.len(), elements.len());
}
