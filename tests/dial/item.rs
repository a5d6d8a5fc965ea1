use ratatui::style::Color;
use speeddial::constants::{ITEM_LABEL_PADDING, ITEM_TAP_MARGIN};
use speeddial::dial::{render_item, ActionItem, ItemProps, SharedItemProps};

fn props(enabled: bool) -> ItemProps {
    ItemProps {
        enabled,
        label: "Share".to_string(),
        tint: Color::Blue,
        icon: Some("↗".to_string()),
        height: 2,
        offset_x: 3,
    }
}

#[test]
fn test_disabled_item_renders_nothing() {
    assert!(render_item(&props(false)).is_none());
}

#[test]
fn test_enabled_item_renders_label_and_swatch() {
    let node = render_item(&props(true)).expect("enabled item renders");
    assert_eq!(node.label, "Share");
    assert_eq!(node.tint, Color::Blue);
    assert_eq!(node.swatch_diameter, 2);
    assert_eq!(node.swatch_width, 4);
    assert_eq!(node.gap, 3);
    assert_eq!(node.unit_height, 2 + ITEM_TAP_MARGIN);
    assert_eq!(node.pill_width, 5 + ITEM_LABEL_PADDING * 2);
    assert_eq!(node.width(), node.pill_width + 3 + 4);
}

#[test]
fn test_item_render_is_pure() {
    let props = props(true);
    assert_eq!(render_item(&props), render_item(&props));
}

#[test]
fn test_descriptor_overrides_shared_props() {
    let shared = SharedItemProps {
        tint: Color::Black,
        height: 1,
        offset_x: 2,
    };

    let inherited = ActionItem::new("Plain", |_| {}).resolve(&shared);
    assert_eq!(inherited.tint, Color::Black);
    assert_eq!(inherited.height, 1);
    assert_eq!(inherited.offset_x, 2);

    let custom = ActionItem::new("Custom", |_| {})
        .color(Color::Red)
        .height(3)
        .offset_x(0)
        .resolve(&shared);
    assert_eq!(custom.tint, Color::Red);
    assert_eq!(custom.height, 3);
    assert_eq!(custom.offset_x, 0);
}
