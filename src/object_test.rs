#![allow(clippy::float_cmp)]

use serde_json::json;

use super::*;

fn make_text() -> RenderObject {
    let mut obj = RenderObject::new("t1", ObjectKind::Text, Size::new(150.0, 70.0));
    obj.text = Some(TextData {
        content: "hi".into(),
        font_size: 60.0,
        font_weight: 400,
        font_family: "Arial".into(),
        char_spacing: 0.0,
    });
    obj
}

// =============================================================
// ObjectKind
// =============================================================

#[test]
fn kind_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&ObjectKind::Image).unwrap(), "\"image\"");
    assert_eq!(serde_json::to_string(&ObjectKind::Group).unwrap(), "\"group\"");
    let back: ObjectKind = serde_json::from_str("\"shape\"").unwrap();
    assert_eq!(back, ObjectKind::Shape);
}

#[test]
fn kind_deserialize_invalid_rejects() {
    assert!(serde_json::from_str::<ObjectKind>("\"hexagon\"").is_err());
}

#[test]
fn kind_as_str_matches_serde_name() {
    for kind in [ObjectKind::Image, ObjectKind::Text, ObjectKind::Shape, ObjectKind::Group] {
        assert_eq!(serde_json::to_string(&kind).unwrap(), format!("\"{}\"", kind.as_str()));
    }
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_object_defaults() {
    let obj = RenderObject::new("a", ObjectKind::Shape, Size::new(10.0, 20.0));
    assert_eq!(obj.position, Position::default());
    assert_eq!(obj.scale, Scale::uniform(1.0));
    assert!(obj.selectable);
    assert!(obj.asset.is_none());
    assert!(obj.children.is_empty());
}

#[test]
fn image_takes_natural_size() {
    let obj = RenderObject::image("img", ImageAsset::new("https://x/y.png", Size::new(320.0, 200.0)));
    assert_eq!(obj.kind, ObjectKind::Image);
    assert_eq!(obj.size, Size::new(320.0, 200.0));
    assert_eq!(obj.asset.as_ref().unwrap().source, "https://x/y.png");
}

#[test]
fn group_bounds_cover_scaled_children() {
    let mut a = RenderObject::new("a", ObjectKind::Shape, Size::new(100.0, 50.0));
    a.position = Position::new(10.0, 20.0);
    let mut b = RenderObject::new("b", ObjectKind::Shape, Size::new(100.0, 100.0));
    b.position = Position::new(200.0, 5.0);
    b.scale = Scale::uniform(0.5);

    let group = RenderObject::group("g", vec![a, b]);
    assert_eq!(group.kind, ObjectKind::Group);
    assert_eq!(group.position, Position::new(10.0, 5.0));
    assert_eq!(group.size, Size::new(240.0, 65.0));
    assert_eq!(group.children.len(), 2);
}

#[test]
fn empty_group_sits_at_origin() {
    let group = RenderObject::group("g", Vec::new());
    assert_eq!(group.position, Position::default());
    assert_eq!(group.size, Size::default());
}

#[test]
fn new_object_ids_are_unique() {
    let a = new_object_id();
    let b = new_object_id();
    assert_ne!(a, b);
    assert_eq!(a.len(), 32);
}

// =============================================================
// set
// =============================================================

#[test]
fn set_geometry_keys() {
    let mut obj = RenderObject::new("a", ObjectKind::Shape, Size::new(10.0, 10.0));
    assert!(obj.set("left", &json!(12.5)));
    assert!(obj.set("top", &json!(7)));
    assert!(obj.set("scaleX", &json!(2.0)));
    assert!(obj.set("scaleY", &json!(3.0)));
    assert_eq!(obj.position, Position::new(12.5, 7.0));
    assert_eq!(obj.scaled_size(), Size::new(20.0, 30.0));
}

#[test]
fn set_rejects_wrong_type_and_keeps_value() {
    let mut obj = RenderObject::new("a", ObjectKind::Shape, Size::new(10.0, 10.0));
    assert!(!obj.set("left", &json!("far")));
    assert!(!obj.set("selectable", &json!(1)));
    assert_eq!(obj.position.left, 0.0);
    assert!(obj.selectable);
}

#[test]
fn set_colors_and_clear_with_null() {
    let mut obj = RenderObject::new("a", ObjectKind::Shape, Size::new(10.0, 10.0));
    assert!(obj.set("fill", &json!("#f00")));
    assert_eq!(obj.style.fill.as_deref(), Some("#f00"));
    assert!(obj.set("fill", &json!(null)));
    assert!(obj.style.fill.is_none());
}

#[test]
fn set_shadow_and_reset() {
    let mut obj = RenderObject::new("a", ObjectKind::Shape, Size::new(10.0, 10.0));
    assert!(obj.set("shadow", &json!({"color": "#000", "offsetX": 3, "offsetY": 3, "blur": 0})));
    assert_eq!(obj.style.shadow.as_ref().and_then(|s| s.color.as_deref()), Some("#000"));
    assert!(obj.set("shadow", &json!({})));
    assert!(obj.style.shadow.is_none());
}

#[test]
fn set_unknown_key_goes_to_props() {
    let mut obj = RenderObject::new("a", ObjectKind::Shape, Size::new(10.0, 10.0));
    assert!(obj.set("opacity", &json!(0.5)));
    assert_eq!(obj.props.get("opacity"), Some(&json!(0.5)));
}

#[test]
fn set_text_attributes() {
    let mut obj = make_text();
    assert!(obj.set("text", &json!("bye")));
    assert!(obj.set("fontWeight", &json!(700)));
    assert!(obj.set("fontSize", &json!(24)));
    assert!(!obj.set("fontWeight", &json!(-1)));
    let text = obj.text.as_ref().unwrap();
    assert_eq!(text.content, "bye");
    assert_eq!(text.font_weight, 700);
    assert_eq!(text.font_size, 24.0);
}

#[test]
fn text_keys_on_non_text_objects_go_to_props() {
    let mut obj = RenderObject::new("a", ObjectKind::Shape, Size::new(10.0, 10.0));
    assert!(obj.set("fontSize", &json!(12)));
    assert_eq!(obj.props.get("fontSize"), Some(&json!(12)));
}

#[test]
fn object_serializes_camel_case() {
    let mut obj = RenderObject::new("a", ObjectKind::Shape, Size::new(10.0, 10.0));
    obj.style.stroke_width = 2.0;
    let value = serde_json::to_value(&obj).unwrap();
    assert_eq!(value["style"]["strokeWidth"], json!(2.0));
    assert!(value.get("asset").is_none());
    let back: RenderObject = serde_json::from_value(value).unwrap();
    assert_eq!(back, obj);
}
