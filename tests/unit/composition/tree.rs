use super::*;
use crate::foundation::core::{Point, Size};

#[test]
fn parses_flat_style_and_container_fields() {
    let spec = TreeSpec::from_json_str(
        r#"{
            "id": "root", "width": 300, "height": 100,
            "direction": "column", "rowGap": 4, "justifyContent": "center",
            "children": [ { "id": "a", "flexGrow": 1, "alignSelf": "flex-end" } ]
        }"#,
    )
    .unwrap();

    assert_eq!(spec.style.id.as_deref(), Some("root"));
    assert_eq!(spec.style.width, Some(300.0));
    assert_eq!(spec.container.direction, Some(Direction::Column));
    assert_eq!(spec.container.row_gap, Some(4.0));
    assert_eq!(spec.container.justify_content, Some(JustifyContent::Center));
    assert_eq!(spec.children.len(), 1);
    assert_eq!(spec.children[0].style.flex_grow, Some(1.0));
    assert!(spec.is_container());
    assert!(!spec.children[0].is_container());
    assert_eq!(spec.descendant_count(), 1);
}

#[test]
fn into_root_uses_top_level_size_and_options() {
    let spec = TreeSpec::from_json_str(
        r#"{ "id": "root", "width": 200, "height": 100, "columnGap": 10,
             "children": [ { "id": "a", "flexGrow": 1 }, { "id": "b", "flexGrow": 1 } ] }"#,
    )
    .unwrap();
    let mut root = spec.into_root().unwrap();
    assert_eq!(root.size(), Size::new(200.0, 100.0));
    assert_eq!(root.id(), Some("root"));
    assert_eq!(root.options().column_gap, 10.0);

    let layout = root.get_layout();
    assert_eq!(layout.get("a").unwrap().size, Size::new(95.0, 100.0));
    assert_eq!(layout.get("b").unwrap().position, Point::new(105.0, 0.0));
}

#[test]
fn container_options_on_leaves_are_ignored() {
    let spec = TreeSpec::from_json_str(
        r#"{ "width": 100, "height": 10,
             "children": [ { "id": "leaf", "direction": "column", "flexGrow": 1 } ] }"#,
    )
    .unwrap();
    let root = spec.into_root().unwrap();
    let leaf = &root.children()[0];
    assert!(leaf.as_container().is_none());
    assert_eq!(leaf.style().flex_grow, 1.0);
}

#[test]
fn nested_nodes_become_containers_with_external_style() {
    let spec = TreeSpec::from_json_str(
        r#"{ "width": 100, "height": 50,
             "children": [ {
                 "id": "box", "flexGrow": 1, "height": 20, "direction": "column",
                 "children": [ { "id": "x", "flexGrow": 1 } ]
             } ] }"#,
    )
    .unwrap();
    let mut root = spec.into_root().unwrap();
    let layout = root.get_layout();

    let node = &root.children()[0];
    let inner = node.as_container().unwrap();
    assert_eq!(inner.options().direction, Direction::Column);
    assert_eq!(inner.id(), Some("box"));
    assert_eq!(node.style().flex_grow, 1.0);

    assert_eq!(layout.get("box").unwrap().size, Size::new(100.0, 20.0));
    assert_eq!(layout.get("x").unwrap().size, Size::new(100.0, 20.0));
}

#[test]
fn nested_container_preset_size_applies_when_not_stretched() {
    let spec = TreeSpec::from_json_str(
        r#"{ "width": 100, "height": 50, "alignItems": "center",
             "children": [ { "id": "box", "flexBasis": 30, "width": 999,
                             "children": [ { "flexGrow": 1 } ] } ] }"#,
    )
    .unwrap();
    let layout = flex_box_layout(&spec).unwrap();
    let b = layout.get("box").unwrap();
    // width is the main axis here, so the explicit width is not consulted
    assert_eq!(b.size, Size::new(30.0, 0.0));
    assert_eq!(b.position, Point::new(0.0, 25.0));
}

#[test]
fn validation_rejects_negative_grow_and_names_the_node() {
    let spec = TreeSpec::from_json_str(
        r#"{ "width": 100, "height": 10,
             "children": [ { "flexGrow": 1 }, { "flexGrow": -1 } ] }"#,
    )
    .unwrap();
    let err = spec.validate().unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("validation error:"), "{msg}");
    assert!(msg.contains("root.children[1]"), "{msg}");
    assert!(msg.contains("flexGrow"), "{msg}");
    assert!(spec.into_root().is_err());
}

#[test]
fn validation_prefers_id_in_messages_and_checks_gaps() {
    let spec = TreeSpec::from_json_str(
        r#"{ "width": 100, "height": 10,
             "children": [ { "id": "grid", "columnGap": -3, "children": [ {} ] } ] }"#,
    )
    .unwrap();
    let msg = spec.validate().unwrap_err().to_string();
    assert!(msg.contains("node 'grid'"), "{msg}");
    assert!(msg.contains("columnGap"), "{msg}");
}

#[test]
fn validation_accepts_negative_basis() {
    let spec = TreeSpec::from_json_str(
        r#"{ "width": 100, "height": 10, "children": [ { "flexBasis": -20 } ] }"#,
    )
    .unwrap();
    spec.validate().unwrap();
    let layout = flex_box_layout(&spec).unwrap();
    assert_eq!(layout.get("_$$0").unwrap().size.width, -20.0);
}

#[test]
fn validation_rejects_negative_explicit_size() {
    let mut spec = TreeSpec::default();
    spec.children.push(TreeSpec {
        style: StylePatch::new().height(-1.0),
        ..TreeSpec::default()
    });
    assert!(matches!(spec.validate(), Err(FlexError::Validation(_))));
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = TreeSpec::from_json_str("{ \"width\": ").unwrap_err();
    assert!(matches!(err, FlexError::Serde(_)));
    let err = TreeSpec::from_json_str(r#"{ "direction": "diagonal" }"#).unwrap_err();
    assert!(matches!(err, FlexError::Serde(_)));
}

#[test]
fn missing_file_is_reported() {
    let err = TreeSpec::from_path("does/not/exist.json").unwrap_err();
    assert!(err.to_string().contains("does/not/exist.json"));
}

#[test]
fn serializes_back_without_empty_fields() {
    let spec = TreeSpec {
        style: StylePatch::new().id("a").grow(1.0),
        ..TreeSpec::default()
    };
    let json = serde_json::to_value(&spec).unwrap();
    assert_eq!(json, serde_json::json!({ "id": "a", "flexGrow": 1.0 }));
}
