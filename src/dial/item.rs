//! Stateless action item: a label pill next to a round colored swatch.

use super::props::ItemProps;
use crate::constants::{ITEM_LABEL_PADDING, ITEM_TAP_MARGIN};
use ratatui::style::Color;
use ratatui::text::Span;

/// Geometry and content of one rendered item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemNode {
    pub label: String,
    pub tint: Color,
    pub icon: Option<String>,
    /// Label width plus padding on both sides
    pub pill_width: u16,
    /// Swatch height in rows
    pub swatch_diameter: u16,
    /// Swatch width in columns, twice the diameter so it reads as round
    pub swatch_width: u16,
    /// Columns between pill and swatch
    pub gap: u16,
    /// Rows the item occupies in the stack, tap margin included
    pub unit_height: u16,
}

impl ItemNode {
    pub fn width(&self) -> u16 {
        self.pill_width.saturating_add(self.gap).saturating_add(self.swatch_width)
    }
}

/// Render an item from its resolved props.
///
/// Disabled items produce nothing at all, not an empty node, so they take
/// no room in the stack.
pub fn render_item(props: &ItemProps) -> Option<ItemNode> {
    if !props.enabled {
        return None;
    }

    let label_width = u16::try_from(Span::raw(props.label.as_str()).width()).unwrap_or(u16::MAX);
    let diameter = props.height.max(1);

    Some(ItemNode {
        label: props.label.clone(),
        tint: props.tint,
        icon: props.icon.clone(),
        pill_width: label_width.saturating_add(ITEM_LABEL_PADDING * 2),
        swatch_diameter: diameter,
        swatch_width: diameter.saturating_mul(2),
        gap: props.offset_x,
        unit_height: diameter.saturating_add(ITEM_TAP_MARGIN),
    })
}
