use super::*;
use crate::Canvas;
use crate::test_helpers::{add_selected, editor, shape_at};

fn stack(ids: &[&str]) -> Editor<Canvas> {
    let mut ed = editor();
    for id in ids {
        ed.surface_mut().add_object(shape_at(id, 0.0, 0.0));
    }
    ed
}

fn order(ed: &Editor<Canvas>) -> Vec<&str> {
    ed.surface().objects().iter().map(|o| o.id.as_str()).collect()
}

#[test]
fn tokens_parse() {
    assert_eq!("+1".parse::<ZDirection>().unwrap(), ZDirection::StepForward);
    assert_eq!("-1".parse::<ZDirection>().unwrap(), ZDirection::StepBackward);
    assert_eq!("top".parse::<ZDirection>().unwrap(), ZDirection::ToFront);
    assert_eq!("bottom".parse::<ZDirection>().unwrap(), ZDirection::ToBack);
    let err = "up".parse::<ZDirection>().unwrap_err();
    assert_eq!(err.to_string(), r#"unknown z-order token: "up""#);
}

#[test]
fn step_forward_and_back() {
    let mut ed = stack(&["a", "b", "c"]);
    ed.surface_mut().set_active_object("a");

    ed.move_along(ZDirection::StepForward);
    assert_eq!(order(&ed), vec!["b", "a", "c"]);

    ed.move_along(ZDirection::StepBackward);
    assert_eq!(order(&ed), vec!["a", "b", "c"]);
}

#[test]
fn steps_clamp_at_the_ends() {
    let mut ed = stack(&["a", "b"]);
    ed.surface_mut().set_active_object("b");
    ed.move_along(ZDirection::StepForward);
    assert_eq!(order(&ed), vec!["a", "b"]);

    ed.surface_mut().set_active_object("a");
    ed.move_along(ZDirection::StepBackward);
    assert_eq!(order(&ed), vec!["a", "b"]);
}

#[test]
fn front_and_back() {
    let mut ed = stack(&["a", "b", "c"]);
    ed.surface_mut().set_active_object("a");
    ed.move_along(ZDirection::ToFront);
    assert_eq!(order(&ed), vec!["b", "c", "a"]);

    ed.move_along(ZDirection::ToBack);
    assert_eq!(order(&ed), vec!["a", "b", "c"]);
    assert_eq!(ed.surface().render_count(), 2);
}

#[test]
fn multi_selection_keeps_relative_order() {
    let mut ed = stack(&["a", "b", "c", "d"]);
    ed.surface_mut().set_active_selection(vec!["b".into(), "a".into()]);

    ed.move_along(ZDirection::StepForward);
    assert_eq!(order(&ed), vec!["c", "a", "b", "d"]);

    ed.move_along(ZDirection::ToFront);
    assert_eq!(order(&ed), vec!["c", "d", "a", "b"]);

    ed.move_along(ZDirection::StepBackward);
    assert_eq!(order(&ed), vec!["c", "a", "b", "d"]);

    ed.move_along(ZDirection::ToBack);
    assert_eq!(order(&ed), vec!["a", "b", "c", "d"]);
}

#[test]
fn no_selection_is_noop() {
    let mut ed = stack(&["a", "b"]);
    ed.move_along(ZDirection::ToFront);
    assert_eq!(order(&ed), vec!["a", "b"]);
    assert_eq!(ed.surface().render_count(), 0);
}

#[test]
fn selection_survives_move() {
    let mut ed = editor();
    add_selected(&mut ed, shape_at("a", 0.0, 0.0));
    ed.surface_mut().add_object(shape_at("b", 0.0, 0.0));
    ed.move_along(ZDirection::ToFront);
    assert_eq!(ed.get_selected_type(None), "shape");
    assert_eq!(order(&ed), vec!["b", "a"]);
}
