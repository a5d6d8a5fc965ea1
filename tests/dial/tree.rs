use ratatui::style::Color;
use speeddial::dial::{render, ActionButton, ActionButtonProps, ActionItem, ActivationState, Anchor, Orientation, ResetToken};

fn items() -> ActionButtonProps {
    ActionButtonProps::new()
        .spacing(4)
        .child(ActionItem::new("Alpha", |_| {}))
        .maybe_child(None)
        .child(ActionItem::new("Hidden", |_| {}).enabled(false))
        .child(ActionItem::new("Gamma", |_| {}))
}

fn open() -> ActivationState {
    ActivationState::new(true, ResetToken::Null)
}

fn closed() -> ActivationState {
    ActivationState::new(false, ResetToken::Null)
}

#[test]
fn test_closed_tree_has_button_and_backdrop_only() {
    let tree = render(&closed(), &items());
    assert!(tree.stack.is_none());
    assert!(!tree.dismiss_layer);
    assert_eq!(tree.primary.icon, "+");
    assert_eq!(tree.primary.color, Color::Black);
    assert_eq!(tree.backdrop.color, Color::Reset);
}

#[test]
fn test_open_tree_filters_placeholders_and_disabled_items() {
    let tree = render(&open(), &items());
    assert_eq!(tree.labels(), vec!["Alpha", "Gamma"]);
    // Indices count non-placeholder children, disabled ones included
    let indices: Vec<usize> = tree
        .stack
        .iter()
        .flat_map(|stack| stack.entries.iter())
        .map(|entry| entry.index)
        .collect();
    assert_eq!(indices, vec![0, 2]);
}

#[test]
fn test_up_orientation_anchors_bottom_without_padding() {
    let tree = render(&open(), &items().orientation(Orientation::Up));
    let stack = tree.stack.expect("open stack");
    assert_eq!(stack.anchor, Anchor::Bottom);
    assert_eq!(stack.padding_top, 0);
    assert_eq!(tree.backdrop.anchor, Anchor::Bottom);
}

#[test]
fn test_down_orientation_pads_by_spacing() {
    let tree = render(&open(), &items().orientation(Orientation::Down));
    let stack = tree.stack.expect("open stack");
    assert_eq!(stack.anchor, Anchor::Top);
    assert_eq!(stack.padding_top, 4);
    assert_eq!(tree.backdrop.anchor, Anchor::Top);
}

#[test]
fn test_dismiss_layer_only_when_open_and_background_not_tappable() {
    assert!(render(&open(), &items()).dismiss_layer);
    assert!(!render(&open(), &items().background_tappable(true)).dismiss_layer);
    assert!(!render(&closed(), &items()).dismiss_layer);
}

#[test]
fn test_items_inherit_container_color() {
    let props = ActionButtonProps::new()
        .button_color(Color::Green)
        .child(ActionItem::new("Inherit", |_| {}))
        .child(ActionItem::new("Own", |_| {}).color(Color::Magenta));
    let tree = render(&open(), &props);
    let stack = tree.stack.expect("open stack");
    assert_eq!(stack.entries[0].node.tint, Color::Green);
    assert_eq!(stack.entries[1].node.tint, Color::Magenta);
}

#[test]
fn test_backdrop_passes_through_content() {
    let props = items().backdrop("dimmed").bg_color(Color::DarkGray).bg_opacity(0.5);
    let tree = render(&closed(), &props);
    assert_eq!(tree.backdrop.content.as_deref(), Some("dimmed"));
    assert_eq!(tree.backdrop.color, Color::DarkGray);
    assert_eq!(tree.backdrop.opacity, 0.5);
}

#[test]
fn test_container_render_matches_pure_render() {
    let dial = ActionButton::new(items().active(true));
    assert_eq!(dial.render(), render(dial.state(), dial.props()));
}
