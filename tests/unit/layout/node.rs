use super::*;
use crate::composition::model::{AlignSelf, Direction};

#[test]
fn add_element_child_appends_in_order() {
    let mut root = FlexBox::new(100.0, 50.0, ContainerOptions::new());
    let a = root.add_element_child(StylePatch::new().id("a"));
    let b = root.add_element_child(StylePatch::new().id("b"));

    assert_eq!(a, ChildId(0));
    assert_eq!(b, ChildId(1));
    assert_eq!(root.len(), 2);
    assert_eq!(root.child(a).and_then(FlexNode::id), Some("a"));
    assert_eq!(root.child(b).and_then(FlexNode::id), Some("b"));
    assert!(root.child(ChildId(2)).is_none());
}

#[test]
fn container_child_keeps_internal_options_and_takes_external_style() {
    let mut nested = FlexBox::new(
        0.0,
        0.0,
        ContainerOptions::new().direction(Direction::Column).id("n"),
    );
    nested.add_element_child(StylePatch::new());

    let mut root = FlexBox::new(100.0, 50.0, ContainerOptions::new());
    let id = root.add_container_child(
        nested,
        Some(StylePatch::new().grow(2.0).align_self(AlignSelf::Center)),
    );

    let node = root.child(id).unwrap();
    let inner = node.as_container().unwrap();
    assert_eq!(inner.options().direction, Direction::Column);
    assert_eq!(inner.len(), 1);
    assert_eq!(node.style().flex_grow, 2.0);
    assert_eq!(node.style().align_self, AlignSelf::Center);
    assert_eq!(node.id(), Some("n"));
}

#[test]
fn container_child_without_style_keeps_existing_style() {
    let mut nested = FlexBox::new(0.0, 0.0, ContainerOptions::new());
    nested.set_style(StylePatch::new().basis(40.0));

    let mut root = FlexBox::new(100.0, 50.0, ContainerOptions::new());
    let id = root.add_container_child(nested, None);
    assert_eq!(root.child(id).unwrap().style().flex_basis, 40.0);
}

#[test]
fn container_id_falls_back_to_external_style_id() {
    let nested = FlexBox::new(0.0, 0.0, ContainerOptions::new());
    let mut root = FlexBox::new(100.0, 50.0, ContainerOptions::new());
    let id = root.add_container_child(nested, Some(StylePatch::new().id("from-style")));
    assert_eq!(root.child(id).unwrap().id(), Some("from-style"));
}

#[test]
fn element_build_is_a_noop() {
    let mut node = FlexNode::Element(FlexElement::new(StylePatch::new().basis(10.0)));
    node.build();
    assert_eq!(node.size(), Size::ZERO);
    assert_eq!(node.position(), Position::ZERO);
    assert!(node.as_container().is_none());
}

#[test]
fn resize_updates_preset() {
    let mut b = FlexBox::new(1.0, 2.0, ContainerOptions::new());
    b.resize(30.0, 40.0);
    assert_eq!(b.size(), Size::new(30.0, 40.0));
    assert_eq!(FlexNode::Container(b).preset_size(), Size::new(30.0, 40.0));
}

#[test]
fn nodes_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<FlexNode>();
    assert_send_sync::<FlexBox>();
}
