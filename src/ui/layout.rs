//! Layout management and calculations

use crate::dial::tree::{Anchor, DialTree};
use ratatui::layout::{Position, Rect};

/// Manages layout calculations and constraints for the demo screen
pub struct LayoutManager;

impl LayoutManager {
    /// Split the screen into the dial area and a one-line status bar below it
    #[must_use]
    pub fn main_layout(area: Rect) -> (Rect, Rect) {
        let top_height = area.height.saturating_sub(1);
        let dial_area = Rect::new(area.x, area.y, area.width, top_height);
        let status_area = Rect::new(area.x, area.y + top_height, area.width, area.height.min(1));
        (dial_area, status_area)
    }
}

/// Placement of one visible item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemArea {
    /// Descriptor index among the non-placeholder children
    pub index: usize,
    /// Whole tappable unit, tap margin included
    pub unit: Rect,
    pub pill: Rect,
    pub swatch: Rect,
}

/// What a click landed on, topmost layer first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Item(usize),
    Primary,
    Dismiss,
}

/// Cell geometry of a [`DialTree`] inside a given area
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialLayout {
    pub area: Rect,
    pub backdrop_content: Rect,
    pub dismiss: Option<Rect>,
    pub items: Vec<ItemArea>,
    pub primary: Rect,
}

impl DialLayout {
    /// Lay the tree out. Items that do not fit between the button and the
    /// far edge are dropped from the end farthest from the button.
    #[must_use]
    pub fn compute(tree: &DialTree, area: Rect) -> Self {
        let primary = Self::primary_rect(tree, area);
        let right_edge = primary.right();

        let mut items = Vec::new();
        if let Some(stack) = &tree.stack {
            match stack.anchor {
                Anchor::Bottom => {
                    let top = area.y.saturating_add(tree.offset_y);
                    let mut cursor = primary.y.saturating_sub(stack.padding_top);
                    for entry in stack.entries.iter().rev() {
                        let height = entry.node.unit_height;
                        if cursor < top.saturating_add(height) {
                            break;
                        }
                        cursor -= height;
                        items.push(Self::item_area(entry.index, &entry.node, right_edge, cursor, area));
                    }
                    items.reverse();
                }
                Anchor::Top => {
                    let bottom = area.bottom().saturating_sub(tree.offset_y);
                    let mut cursor = primary.bottom().saturating_add(stack.padding_top);
                    for entry in &stack.entries {
                        let height = entry.node.unit_height;
                        if cursor.saturating_add(height) > bottom {
                            break;
                        }
                        items.push(Self::item_area(entry.index, &entry.node, right_edge, cursor, area));
                        cursor += height;
                    }
                }
            }
        }

        let content_lines = tree
            .backdrop
            .content
            .as_deref()
            .map_or(0, |content| content.lines().count())
            .min(usize::from(area.height)) as u16;
        let backdrop_content = match tree.backdrop.anchor {
            Anchor::Bottom => Rect::new(area.x, area.bottom() - content_lines, area.width, content_lines),
            Anchor::Top => Rect::new(area.x, area.y, area.width, content_lines),
        };

        Self {
            area,
            backdrop_content,
            dismiss: tree.dismiss_layer.then_some(area),
            items,
            primary,
        }
    }

    fn primary_rect(tree: &DialTree, area: Rect) -> Rect {
        let height = tree.primary.size.min(area.height);
        let width = tree.primary.size.saturating_mul(2).min(area.width);
        let x = area
            .right()
            .saturating_sub(tree.primary.offset_x)
            .saturating_sub(width)
            .max(area.x);
        let y = match Anchor::from(tree.orientation) {
            Anchor::Bottom => area.bottom().saturating_sub(tree.offset_y).saturating_sub(height).max(area.y),
            Anchor::Top => area.y.saturating_add(tree.offset_y).min(area.bottom().saturating_sub(height)),
        };
        Rect::new(x, y, width, height)
    }

    fn item_area(index: usize, node: &crate::dial::ItemNode, right_edge: u16, y: u16, area: Rect) -> ItemArea {
        let width = node.width().min(right_edge.saturating_sub(area.x));
        let x = right_edge.saturating_sub(width);
        let unit = Rect::new(x, y, width, node.unit_height);

        let swatch_y = y + (node.unit_height - node.swatch_diameter) / 2;
        let swatch = Rect::new(
            right_edge.saturating_sub(node.swatch_width).max(x),
            swatch_y,
            node.swatch_width.min(width),
            node.swatch_diameter,
        );
        let pill_y = swatch_y + (node.swatch_diameter - 1) / 2;
        let pill = Rect::new(x, pill_y, node.pill_width.min(width), 1);

        ItemArea { index, unit, pill, swatch }
    }

    /// Resolve a click at `column`, `row`
    #[must_use]
    pub fn hit_test(&self, column: u16, row: u16) -> Option<Hit> {
        let position = Position::new(column, row);
        if let Some(item) = self.items.iter().find(|item| item.unit.contains(position)) {
            return Some(Hit::Item(item.index));
        }
        if self.primary.contains(position) {
            return Some(Hit::Primary);
        }
        match self.dismiss {
            Some(layer) if layer.contains(position) => Some(Hit::Dismiss),
            _ => None,
        }
    }
}
