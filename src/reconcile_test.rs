use uuid::Uuid;

use super::*;
use crate::camera::Point;
use crate::layout::Category;

fn make_item(x: f64) -> FurnitureItem {
    FurnitureItem {
        id: Uuid::new_v4(),
        name: "Wardrobe".into(),
        category: Category::Wardrobe,
        x,
        y: 0.0,
        width: 1.2,
        depth: 0.6,
        rotation: 0.0,
        color: "#A0522D".into(),
        locked: false,
        light_range: None,
    }
}

#[test]
fn identical_layouts_produce_no_changes() {
    let layout = Layout::new(vec![make_item(0.0), make_item(2.0)]);
    assert!(diff(&layout, &layout.clone()).is_empty());
}

#[test]
fn added_item_is_created() {
    let a = make_item(0.0);
    let b = make_item(2.0);
    let prev = Layout::new(vec![a.clone()]);
    let next = Layout::new(vec![a, b.clone()]);
    assert_eq!(diff(&prev, &next), vec![LayoutChange::Created(b)]);
}

#[test]
fn moved_item_is_updated() {
    let a = make_item(0.0);
    let prev = Layout::new(vec![a.clone()]);
    let moved = a.moved_to(Point::new(1.0, 1.0));
    let next = prev.with_item(moved.clone());
    assert_eq!(diff(&prev, &next), vec![LayoutChange::Updated(moved)]);
}

#[test]
fn removed_item_is_deleted() {
    let a = make_item(0.0);
    let b = make_item(2.0);
    let prev = Layout::new(vec![a.clone(), b.clone()]);
    let next = prev.without(&b.id);
    assert_eq!(diff(&prev, &next), vec![LayoutChange::Deleted { id: b.id }]);
}

#[test]
fn mixed_changes_keep_order() {
    let a = make_item(0.0);
    let b = make_item(1.0);
    let c = make_item(2.0);
    let d = make_item(3.0);
    let prev = Layout::new(vec![a.clone(), b.clone(), c.clone()]);
    let a2 = a.moved_to(Point::new(0.5, 0.0));
    let next = Layout::new(vec![a2.clone(), c, d.clone()]);

    assert_eq!(
        diff(&prev, &next),
        vec![LayoutChange::Updated(a2), LayoutChange::Created(d), LayoutChange::Deleted { id: b.id }]
    );
}

#[test]
fn duplicate_ids_yield_one_change_using_last_entry() {
    let a = make_item(0.0);
    let later = a.moved_to(Point::new(2.0, 2.0));
    let next = Layout::new(vec![a, later.clone()]);
    assert_eq!(diff(&Layout::default(), &next), vec![LayoutChange::Created(later)]);
}

#[test]
fn change_serializes_with_op_tag() {
    let id = Uuid::new_v4();
    let value = serde_json::to_value(LayoutChange::Deleted { id }).unwrap();
    assert_eq!(value["op"], "deleted");
    assert_eq!(value["id"], id.to_string());
}
