use super::*;
use crate::composition::model::{Direction, StylePatch};
use crate::foundation::core::Point;

fn mixed_tree() -> RootFlexBox {
    let mut inner = FlexBox::new(0.0, 0.0, ContainerOptions::new().direction(Direction::Column));
    inner.add_element_child(StylePatch::new().grow(1.0));
    inner.add_element_child(StylePatch::new().grow(1.0).id("leaf"));

    let mut root = RootFlexBox::new(200.0, 100.0, ContainerOptions::new().id("root"));
    root.add_element_child(StylePatch::new().grow(1.0).id("a"));
    root.add_container_child(inner, Some(StylePatch::new().grow(1.0)));
    root.add_element_child(StylePatch::new().basis(20.0));
    root
}

#[test]
fn keys_follow_pre_order_and_exclude_root() {
    let mut root = mixed_tree();
    let layout = root.get_layout();

    let keys: Vec<&str> = layout.keys().collect();
    assert_eq!(keys, vec!["a", "_$$0", "_$$1", "leaf", "_$$2"]);
    assert!(!layout.contains_key("root"));
}

#[test]
fn key_count_matches_descendants_and_explicit_ids_are_verbatim() {
    let mut root = mixed_tree();
    let layout = root.get_layout();
    assert_eq!(layout.len(), 5);
    assert!(layout.contains_key("a"));
    assert!(layout.contains_key("leaf"));

    let mut keys: Vec<&str> = layout.keys().collect();
    keys.sort_unstable();
    keys.dedup();
    assert_eq!(keys.len(), 5);
}

#[test]
fn positions_stay_local_to_parent() {
    let mut root = mixed_tree();
    let layout = root.get_layout();

    // free = 200 - 20 = 180, split between "a" and the nested box
    let nested = layout.get("_$$0").unwrap();
    assert_eq!(nested.position, Point::new(90.0, 0.0));
    assert_eq!(nested.size, Size::new(90.0, 100.0));

    let first_inner = layout.get("_$$1").unwrap();
    assert_eq!(first_inner.position, Point::new(0.0, 0.0));
    let leaf = layout.get("leaf").unwrap();
    assert_eq!(leaf.position, Point::new(0.0, 50.0));
    assert_eq!(leaf.rect(), Rect::new(0.0, 50.0, 90.0, 100.0));
}

#[test]
fn generated_keys_skip_explicit_ids() {
    let mut root = RootFlexBox::new(100.0, 10.0, ContainerOptions::new());
    root.add_element_child(StylePatch::new());
    root.add_element_child(StylePatch::new().id("_$$1"));
    root.add_element_child(StylePatch::new());

    let layout = root.get_layout();
    let keys: Vec<&str> = layout.keys().collect();
    assert_eq!(keys, vec!["_$$0", "_$$1", "_$$2"]);
    assert_eq!(layout.len(), 3);
}

#[test]
fn explicit_id_later_in_tree_is_reserved_up_front() {
    let mut inner = FlexBox::new(0.0, 0.0, ContainerOptions::new());
    inner.add_element_child(StylePatch::new().id("_$$0"));

    let mut root = RootFlexBox::new(100.0, 10.0, ContainerOptions::new());
    root.add_element_child(StylePatch::new());
    root.add_container_child(inner, Some(StylePatch::new().id("box")));

    let layout = root.get_layout();
    let keys: Vec<&str> = layout.keys().collect();
    assert_eq!(keys, vec!["_$$1", "box", "_$$0"]);
}

#[test]
fn generated_keys_restart_per_extraction() {
    let mut root = mixed_tree();
    let first = root.get_layout();
    let second = root.get_layout();
    assert_eq!(first, second);
}

#[test]
fn duplicate_ids_collapse_into_one_entry() {
    let mut root = RootFlexBox::new(100.0, 10.0, ContainerOptions::new());
    root.add_element_child(StylePatch::new().id("dup").basis(10.0));
    root.add_element_child(StylePatch::new().id("dup").basis(30.0));

    let layout = root.get_layout();
    assert_eq!(layout.len(), 1);
    let entry = layout.get("dup").unwrap();
    assert_eq!(entry.size.width, 30.0);
    assert_eq!(entry.position.x, 10.0);
}

#[test]
fn empty_root_collects_nothing() {
    let mut root = RootFlexBox::new(10.0, 10.0, ContainerOptions::new());
    assert!(root.get_layout().is_empty());
}

#[test]
fn flatten_without_layout_reports_current_geometry() {
    let mut root = RootFlexBox::new(100.0, 10.0, ContainerOptions::new());
    root.add_element_child(StylePatch::new().grow(1.0).id("a"));

    let stale = flatten_layout(&root);
    assert_eq!(stale.get("a").unwrap().size, Size::ZERO);

    root.layout();
    let fresh = flatten_layout(&root);
    assert_eq!(fresh.get("a").unwrap().size, Size::new(100.0, 10.0));
}

#[test]
fn get_layout_lays_out_an_unbuilt_tree() {
    let mut root = RootFlexBox::new(200.0, 100.0, ContainerOptions::new());
    root.add_element_child(StylePatch::new().grow(1.0).id("a"));

    let layout = root.get_layout();
    let a = layout.get("a").unwrap();
    assert_eq!(a.size, Size::new(200.0, 100.0));
    assert_eq!(a.position, Point::ZERO);
    assert_eq!(layout, flatten_layout(&root));
}

#[test]
fn serializes_to_keyed_position_size_objects() {
    let mut root = RootFlexBox::new(200.0, 100.0, ContainerOptions::new());
    root.add_element_child(StylePatch::new().grow(1.0).id("a"));
    root.add_element_child(StylePatch::new().grow(1.0).id("b"));

    let json = serde_json::to_value(root.get_layout()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "a": {
                "position": { "x": 0.0, "y": 0.0 },
                "size": { "width": 100.0, "height": 100.0 }
            },
            "b": {
                "position": { "x": 100.0, "y": 0.0 },
                "size": { "width": 100.0, "height": 100.0 }
            },
        })
    );

    let back: LayoutMap = serde_json::from_value(json).unwrap();
    assert_eq!(back.keys().collect::<Vec<_>>(), vec!["a", "b"]);
}

#[test]
fn root_position_is_left_to_the_caller() {
    let mut root = RootFlexBox::new(100.0, 10.0, ContainerOptions::new());
    root.set_position(Point::new(7.0, 9.0));
    root.add_element_child(StylePatch::new().grow(1.0));
    root.layout();
    assert_eq!(root.position(), Point::new(7.0, 9.0));
    assert_eq!(root.size(), Size::new(100.0, 10.0));
}
