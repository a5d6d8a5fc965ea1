//! Pure render tree of the speed dial.
//!
//! [`render`] turns state and props into a [`DialTree`] without touching the
//! terminal. The ratatui component lays this tree out and draws it, which
//! keeps every visible consequence of a transition testable without a
//! backend.

use super::item::{render_item, ItemNode};
use super::props::{ActionButtonProps, Orientation};
use super::state::ActivationState;
use ratatui::style::Color;

/// Edge a layer or the item stack is pinned to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Top,
    Bottom,
}

impl From<Orientation> for Anchor {
    fn from(orientation: Orientation) -> Self {
        match orientation {
            Orientation::Up => Anchor::Bottom,
            Orientation::Down => Anchor::Top,
        }
    }
}

/// Full-bleed decorative layer; never receives input
#[derive(Debug, Clone, PartialEq)]
pub struct BackdropNode {
    pub content: Option<String>,
    pub color: Color,
    pub opacity: f32,
    pub anchor: Anchor,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimaryButtonNode {
    pub color: Color,
    /// Height in rows; drawn twice as wide
    pub size: u16,
    pub icon: String,
    pub offset_x: u16,
}

/// A rendered item and the position of its descriptor among the
/// non-placeholder children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackEntry {
    pub index: usize,
    pub node: ItemNode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemStack {
    pub anchor: Anchor,
    pub padding_top: u16,
    pub entries: Vec<StackEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DialTree {
    pub orientation: Orientation,
    pub offset_y: u16,
    pub backdrop: BackdropNode,
    /// Invisible full-bleed layer above the backdrop whose only effect is a close
    pub dismiss_layer: bool,
    pub stack: Option<ItemStack>,
    pub primary: PrimaryButtonNode,
}

impl DialTree {
    /// Number of items that produced output
    pub fn visible_item_count(&self) -> usize {
        self.stack.as_ref().map_or(0, |stack| stack.entries.len())
    }

    pub fn labels(&self) -> Vec<&str> {
        self.stack
            .iter()
            .flat_map(|stack| stack.entries.iter())
            .map(|entry| entry.node.label.as_str())
            .collect()
    }
}

/// Build the tree for the given state and props
pub fn render(state: &ActivationState, props: &ActionButtonProps) -> DialTree {
    let anchor = Anchor::from(props.orientation);

    let stack = (state.is_open() && props.has_actions()).then(|| {
        let shared = props.shared_item_props();
        let entries = props
            .actions()
            .enumerate()
            .filter_map(|(index, item)| render_item(&item.resolve(&shared)).map(|node| StackEntry { index, node }))
            .collect();

        ItemStack {
            anchor,
            padding_top: match props.orientation {
                Orientation::Up => 0,
                Orientation::Down => props.spacing,
            },
            entries,
        }
    });

    DialTree {
        orientation: props.orientation,
        offset_y: props.offset_y,
        backdrop: BackdropNode {
            content: props.backdrop.clone(),
            color: props.bg_color,
            opacity: props.bg_opacity,
            anchor,
        },
        dismiss_layer: state.is_open() && !props.background_tappable,
        stack,
        primary: PrimaryButtonNode {
            color: props.button_color,
            size: props.size,
            icon: props.icon.clone(),
            offset_x: props.offset_x,
        },
    }
}
