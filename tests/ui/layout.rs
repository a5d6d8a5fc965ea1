use ratatui::layout::Rect;
use speeddial::dial::{ActionButton, ActionButtonProps, ActionItem, Orientation};
use speeddial::ui::layout::{DialLayout, Hit, LayoutManager};

fn props(orientation: Orientation) -> ActionButtonProps {
    ActionButtonProps::new()
        .orientation(orientation)
        .size(3)
        .offset_x(2)
        .offset_y(1)
        .spacing(2)
        .item_height(1)
        .child(ActionItem::new("One", |_| {}))
        .child(ActionItem::new("Two", |_| {}))
}

const AREA: Rect = Rect {
    x: 0,
    y: 0,
    width: 40,
    height: 20,
};

#[test]
fn test_main_layout_reserves_status_line() {
    let (dial, status) = LayoutManager::main_layout(Rect::new(0, 0, 80, 24));
    assert_eq!(dial, Rect::new(0, 0, 80, 23));
    assert_eq!(status, Rect::new(0, 23, 80, 1));
}

#[test]
fn test_up_layout_stacks_items_above_button() {
    let dial = ActionButton::new(props(Orientation::Up).active(true));
    let layout = DialLayout::compute(&dial.render(), AREA);

    // 6x3 button, 2 columns from the right, 1 row from the bottom
    assert_eq!(layout.primary, Rect::new(32, 16, 6, 3));

    assert_eq!(layout.items.len(), 2);
    let (one, two) = (layout.items[0], layout.items[1]);
    assert_eq!(one.index, 0);
    assert_eq!(two.index, 1);
    // Each unit is 2 rows tall and sits directly on top of the next
    assert_eq!(two.unit.bottom(), layout.primary.y);
    assert_eq!(one.unit.bottom(), two.unit.y);
    // Right edges line up with the primary button
    assert_eq!(one.unit.right(), layout.primary.right());
    assert_eq!(one.swatch.right(), layout.primary.right());
    assert!(one.pill.right() < one.swatch.x);
}

#[test]
fn test_down_layout_inserts_spacing_below_button() {
    let dial = ActionButton::new(props(Orientation::Down).active(true));
    let layout = DialLayout::compute(&dial.render(), AREA);

    assert_eq!(layout.primary, Rect::new(32, 1, 6, 3));
    assert_eq!(layout.items.len(), 2);
    assert_eq!(layout.items[0].unit.y, layout.primary.bottom() + 2);
    assert_eq!(layout.items[1].unit.y, layout.items[0].unit.bottom());
}

#[test]
fn test_items_that_do_not_fit_are_dropped_far_from_button() {
    let dial = ActionButton::new(props(Orientation::Up).active(true));
    // Button at rows 4..7, room for a single 2-row item between row 1 and 4
    let layout = DialLayout::compute(&dial.render(), Rect::new(0, 0, 40, 8));
    assert_eq!(layout.items.len(), 1);
    assert_eq!(layout.items[0].index, 1);
}

#[test]
fn test_hit_test_prefers_items_then_primary_then_dismiss() {
    let dial = ActionButton::new(props(Orientation::Up).active(true));
    let layout = DialLayout::compute(&dial.render(), AREA);

    let item = layout.items[1].unit;
    assert_eq!(layout.hit_test(item.x, item.y), Some(Hit::Item(1)));
    assert_eq!(layout.hit_test(layout.primary.x, layout.primary.y), Some(Hit::Primary));
    assert_eq!(layout.hit_test(0, 0), Some(Hit::Dismiss));
}

#[test]
fn test_closed_layout_has_no_items_or_dismiss_layer() {
    let dial = ActionButton::new(props(Orientation::Up));
    let layout = DialLayout::compute(&dial.render(), AREA);
    assert!(layout.items.is_empty());
    assert!(layout.dismiss.is_none());
    assert_eq!(layout.hit_test(0, 0), None);
}

#[test]
fn test_tappable_background_lets_clicks_fall_through() {
    let dial = ActionButton::new(props(Orientation::Up).active(true).background_tappable(true));
    let layout = DialLayout::compute(&dial.render(), AREA);
    assert_eq!(layout.hit_test(0, 0), None);
}
