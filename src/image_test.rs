use std::sync::Arc;

use super::*;
use crate::Canvas;
use crate::surface::ActiveSelection;
use crate::test_helpers::{MockFetcher, MockLoader, add_selected, editor_with, shape_at, text_object};

const WIDE: &str = "https://cdn/wide.png";
const SMALL: &str = "https://cdn/small.png";
const FLAT: &str = "https://cdn/flat.png";

fn setup() -> (Arc<MockLoader>, Editor<Canvas>) {
    let loader = Arc::new(
        MockLoader::new()
            .with(WIDE, Size::new(900.0, 400.0))
            .with(SMALL, Size::new(100.0, 100.0))
            .with(FLAT, Size::new(0.0, 100.0)),
    );
    let ed = editor_with(&loader, &Arc::new(MockFetcher::new()));
    (loader, ed)
}

// =============================================================
// effective_scale
// =============================================================

const CONTAINER: Size = Size { width: 1000.0, height: 1000.0 };

#[test]
fn oversized_image_shrinks_to_ratio() {
    let zoom = effective_scale(1.0, Size::new(900.0, 400.0), CONTAINER, 0.6, None);
    assert!((zoom - 0.6667).abs() < 1e-3, "zoom was {zoom}");
}

#[test]
fn tall_image_is_bounded_by_height() {
    let zoom = effective_scale(1.0, Size::new(100.0, 2000.0), CONTAINER, 0.6, None);
    assert!((zoom - 0.3).abs() < 1e-9);
}

#[test]
fn small_image_keeps_unit_scale() {
    assert_eq!(effective_scale(1.0, Size::new(600.0, 600.0), CONTAINER, 0.6, None), 1.0);
}

#[test]
fn explicit_scale_is_kept() {
    assert_eq!(effective_scale(0.25, Size::new(900.0, 400.0), CONTAINER, 0.6, Some(3.0)), 0.25);
}

#[test]
fn prior_scale_wins_unless_zero() {
    assert_eq!(effective_scale(1.0, Size::new(900.0, 400.0), CONTAINER, 0.6, Some(1.5)), 1.5);
    let zoom = effective_scale(1.0, Size::new(900.0, 400.0), CONTAINER, 0.6, Some(0.0));
    assert!((zoom - 0.6667).abs() < 1e-3);
}

// =============================================================
// insert_from_url
// =============================================================

#[tokio::test]
async fn wide_image_is_scaled_centered_and_selected() {
    let (_, mut ed) = setup();

    let id = ed.insert_from_url(ImageInsertOptions::new(WIDE)).await.unwrap();

    let img = ed.surface().object(&id).unwrap();
    assert_eq!(img.kind, ObjectKind::Image);
    assert!((img.scale.x - 0.6667).abs() < 1e-3);
    assert_eq!(img.scale.x, img.scale.y);
    assert!((img.position.left - 200.0).abs() < 1e-6);
    assert!((img.position.top - 366.6667).abs() < 1e-3);
    assert_eq!(img.asset.as_ref().unwrap().natural_size(), Size::new(900.0, 400.0));
    assert_eq!(ed.surface().active(), Some(ActiveSelection::Object(id.clone())));
    assert_eq!(ed.surface().render_count(), 1);
}

#[tokio::test]
async fn small_image_keeps_natural_scale() {
    let (_, mut ed) = setup();
    let id = ed.insert_from_url(ImageInsertOptions::new(SMALL)).await.unwrap();
    let img = ed.surface().object(&id).unwrap();
    assert_eq!(img.scale, Scale::uniform(1.0));
    assert_eq!(img.position, Position::new(450.0, 450.0));
}

#[tokio::test]
async fn text_selection_is_rejected_before_loading() {
    let (loader, mut ed) = setup();
    add_selected(&mut ed, text_object("t"));

    let err = ed.insert_from_url(ImageInsertOptions::new(SMALL)).await.unwrap_err();

    assert!(matches!(err, EditorError::IncompatibleSelectionType { selected: "text" }));
    assert!(loader.calls().is_empty());
    assert_eq!(ed.surface().objects().len(), 1);
    assert_eq!(ed.surface().active(), Some(ActiveSelection::Object("t".into())));
    assert_eq!(ed.surface().render_count(), 0);
}

#[tokio::test]
async fn replaces_selected_shape_in_place() {
    let (_, mut ed) = setup();
    let mut prior = shape_at("old", 30.0, 40.0);
    prior.scale = Scale::uniform(2.0);
    add_selected(&mut ed, prior);

    let id = ed.insert_from_url(ImageInsertOptions::new(SMALL)).await.unwrap();

    assert!(ed.surface().object("old").is_none());
    let img = ed.surface().object(&id).unwrap();
    assert_eq!(img.position, Position::new(30.0, 40.0));
    assert_eq!(img.scale, Scale::uniform(2.0));
    assert_eq!(ed.surface().objects().len(), 1);
}

#[tokio::test]
async fn selected_group_is_kept() {
    let (_, mut ed) = setup();
    let mut group = RenderObject::group("g", vec![shape_at("a", 0.0, 0.0)]);
    group.scale = Scale::uniform(3.0);
    add_selected(&mut ed, group);

    let id = ed.insert_from_url(ImageInsertOptions::new(SMALL)).await.unwrap();

    assert!(ed.surface().object("g").is_some());
    let img = ed.surface().object(&id).unwrap();
    assert_eq!(img.scale, Scale::uniform(1.0));
    assert_eq!(img.position, Position::new(450.0, 450.0));
}

#[tokio::test]
async fn multi_selection_is_not_replaced() {
    let (_, mut ed) = setup();
    ed.surface_mut().add_object(shape_at("a", 0.0, 0.0));
    ed.surface_mut().add_object(shape_at("b", 0.0, 0.0));
    ed.surface_mut().set_active_selection(vec!["a".into(), "b".into()]);

    ed.insert_from_url(ImageInsertOptions::new(SMALL)).await.unwrap();

    assert_eq!(ed.surface().objects().len(), 3);
}

#[tokio::test]
async fn load_failure_leaves_canvas_untouched() {
    let (_, mut ed) = setup();
    add_selected(&mut ed, shape_at("a", 1.0, 2.0));

    let err = ed.insert_from_url(ImageInsertOptions::new("https://cdn/missing.png")).await.unwrap_err();

    assert!(matches!(err, EditorError::AssetLoad { source: FetchError::Status(404), .. }));
    assert!(ed.surface().object("a").is_some());
    assert_eq!(ed.surface().active(), Some(ActiveSelection::Object("a".into())));
    assert_eq!(ed.surface().render_count(), 0);
}

#[tokio::test]
async fn image_without_area_is_a_load_failure() {
    let (_, mut ed) = setup();
    let err = ed.insert_from_url(ImageInsertOptions::new(FLAT)).await.unwrap_err();
    assert!(matches!(err, EditorError::AssetLoad { source: FetchError::Decode(_), .. }));
    assert!(ed.surface().objects().is_empty());
}

#[tokio::test]
async fn explicit_position_and_scale_are_honored() {
    let (_, mut ed) = setup();
    let options = ImageInsertOptions { scale: 0.5, position: Some(Position::new(5.0, 6.0)), ..ImageInsertOptions::new(WIDE) };

    let id = ed.insert_from_url(options).await.unwrap();

    let img = ed.surface().object(&id).unwrap();
    assert_eq!(img.scale, Scale::uniform(0.5));
    assert_eq!(img.position, Position::new(5.0, 6.0));
}

#[tokio::test]
async fn without_auto_focus_nothing_is_selected() {
    let (_, mut ed) = setup();
    let options = ImageInsertOptions { auto_focus: false, ..ImageInsertOptions::new(SMALL) };
    let id = ed.insert_from_url(options).await.unwrap();
    assert!(ed.surface().object(&id).is_some());
    assert!(ed.surface().active().is_none());
}

#[tokio::test]
async fn non_selectable_image_becomes_background() {
    let (_, mut ed) = setup();
    let options = ImageInsertOptions { selectable: false, ..ImageInsertOptions::new(WIDE) };

    ed.insert_from_url(options).await.unwrap();

    assert!(ed.surface().objects().is_empty());
    let Some(Background::Image(img)) = ed.surface().background() else {
        panic!("expected background image");
    };
    assert!(!img.selectable);
    assert!((img.scale.x - 1000.0 / 900.0).abs() < 1e-9);
    assert!((img.scale.y - 2.5).abs() < 1e-9);
}

// =============================================================
// background image
// =============================================================

#[tokio::test]
async fn background_image_stretches_to_canvas() {
    let (_, mut ed) = setup();
    ed.change_canvas_background_image(SMALL).await.unwrap();
    let Some(Background::Image(img)) = ed.surface().background() else {
        panic!("expected background image");
    };
    assert_eq!(img.scale, Scale { x: 10.0, y: 10.0 });
    assert_eq!(img.asset.as_ref().unwrap().source, SMALL);
}

#[tokio::test]
async fn failed_background_keeps_previous() {
    let (_, mut ed) = setup();
    ed.set_background_color("#fff");
    assert!(ed.change_canvas_background_image("https://cdn/missing.png").await.is_err());
    assert_eq!(ed.surface().background(), Some(&Background::Color("#fff".into())));
}

// =============================================================
// insert_rect
// =============================================================

#[test]
fn rect_gets_defaults_and_is_selected() {
    let (_, mut ed) = setup();
    let id = ed.insert_rect(&SemanticStyle::default());
    let rect = ed.surface().object(&id).unwrap();
    assert_eq!(rect.kind, ObjectKind::Shape);
    assert_eq!(rect.position, Position::new(100.0, 100.0));
    assert_eq!(rect.size, Size::new(400.0, 300.0));
    assert_eq!(rect.style.stroke.as_deref(), Some("pink"));
    assert_eq!(rect.style.stroke_width, 3.0);
    assert_eq!(ed.get_selected_type(None), "shape");
}

#[test]
fn rect_style_overrides_defaults() {
    let (_, mut ed) = setup();
    let style = SemanticStyle { border_color: Some("navy".into()), ..SemanticStyle::fill("gold") };
    let id = ed.insert_rect(&style);
    let rect = ed.surface().object(&id).unwrap();
    assert_eq!(rect.style.stroke.as_deref(), Some("navy"));
    assert_eq!(rect.style.fill.as_deref(), Some("gold"));
    assert_eq!(rect.style.stroke_width, 3.0);
}
