//! Caller-facing configuration for the container and its action items.

use super::state::{ActivationState, ResetToken};
use crate::constants::{
    DEFAULT_BUTTON_SIZE, DEFAULT_ICON, DEFAULT_ITEM_HEIGHT, DEFAULT_OFFSET_X, DEFAULT_OFFSET_Y, DEFAULT_SPACING,
};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

/// Invoked on every primary button press
pub type PressCallback = Rc<dyn Fn()>;

/// Invoked when an item is selected, after any auto-close was requested.
/// The argument is the container state at the time of the call.
pub type SelectCallback = Rc<dyn Fn(&ActivationState)>;

/// Direction the item stack grows away from the primary button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Up,
    Down,
}

/// Descriptor for one secondary action.
///
/// Label and callback are required; everything else falls back to the
/// container's shared values when left unset.
#[derive(Clone)]
pub struct ActionItem {
    pub enabled: bool,
    pub label: String,
    pub color: Option<Color>,
    pub icon: Option<String>,
    pub height: Option<u16>,
    pub offset_x: Option<u16>,
    on_select: SelectCallback,
}

impl ActionItem {
    pub fn new(label: impl Into<String>, on_select: impl Fn(&ActivationState) + 'static) -> Self {
        Self {
            enabled: true,
            label: label.into(),
            color: None,
            icon: None,
            height: None,
            offset_x: None,
            on_select: Rc::new(on_select),
        }
    }

    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    #[must_use]
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    #[must_use]
    pub fn height(mut self, height: u16) -> Self {
        self.height = Some(height);
        self
    }

    #[must_use]
    pub fn offset_x(mut self, offset_x: u16) -> Self {
        self.offset_x = Some(offset_x);
        self
    }

    pub fn on_select(&self) -> &SelectCallback {
        &self.on_select
    }

    /// Merge the container's shared values with this descriptor's overrides
    pub fn resolve(&self, shared: &SharedItemProps) -> ItemProps {
        ItemProps {
            enabled: self.enabled,
            label: self.label.clone(),
            tint: self.color.unwrap_or(shared.tint),
            icon: self.icon.clone(),
            height: self.height.unwrap_or(shared.height),
            offset_x: self.offset_x.unwrap_or(shared.offset_x),
        }
    }
}

impl fmt::Debug for ActionItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionItem")
            .field("enabled", &self.enabled)
            .field("label", &self.label)
            .field("color", &self.color)
            .field("icon", &self.icon)
            .field("height", &self.height)
            .field("offset_x", &self.offset_x)
            .finish_non_exhaustive()
    }
}

/// Container values every item inherits unless it overrides them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SharedItemProps {
    pub tint: Color,
    pub height: u16,
    pub offset_x: u16,
}

/// Fully resolved input of the item render function
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemProps {
    pub enabled: bool,
    pub label: String,
    pub tint: Color,
    pub icon: Option<String>,
    pub height: u16,
    pub offset_x: u16,
}

/// Everything the container reads from its caller on each update
#[derive(Clone)]
pub struct ActionButtonProps {
    /// Desired open flag; the initial state, then re-applied on token change
    pub active: bool,
    pub reset_token: ResetToken,
    /// Close the stack when an item is selected
    pub auto_close: bool,
    /// Defer the auto-close instead of closing inside the selection handler.
    ///
    /// With a nonzero delay the item callback runs while the stack is still
    /// open and the close lands on a later [`tick`](super::ActionButton::tick).
    /// `None` or a zero delay closes before the callback runs.
    pub auto_close_delay: Option<Duration>,
    pub backdrop: Option<String>,
    pub bg_color: Color,
    pub bg_opacity: f32,
    /// When true, no dismiss layer is rendered and clicks fall through
    pub background_tappable: bool,
    pub orientation: Orientation,
    pub button_color: Color,
    pub size: u16,
    pub icon: String,
    pub spacing: u16,
    pub offset_x: u16,
    pub offset_y: u16,
    pub item_height: u16,
    pub on_press: PressCallback,
    /// Ordered children; `None` entries are placeholders and never render
    pub children: Vec<Option<ActionItem>>,
}

impl Default for ActionButtonProps {
    fn default() -> Self {
        Self {
            active: false,
            reset_token: ResetToken::Null,
            auto_close: true,
            auto_close_delay: None,
            backdrop: None,
            bg_color: Color::Reset,
            bg_opacity: 1.0,
            background_tappable: false,
            orientation: Orientation::Up,
            button_color: Color::Black,
            size: DEFAULT_BUTTON_SIZE,
            icon: DEFAULT_ICON.to_string(),
            spacing: DEFAULT_SPACING,
            offset_x: DEFAULT_OFFSET_X,
            offset_y: DEFAULT_OFFSET_Y,
            item_height: DEFAULT_ITEM_HEIGHT,
            on_press: Rc::new(|| {}),
            children: Vec::new(),
        }
    }
}

impl ActionButtonProps {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    #[must_use]
    pub fn reset_token(mut self, token: impl Into<ResetToken>) -> Self {
        self.reset_token = token.into();
        self
    }

    #[must_use]
    pub fn auto_close(mut self, auto_close: bool) -> Self {
        self.auto_close = auto_close;
        self
    }

    /// See [`ActionButtonProps::auto_close_delay`]: a nonzero delay means
    /// item callbacks observe the stack still open.
    #[must_use]
    pub fn auto_close_delay(mut self, delay: Option<Duration>) -> Self {
        self.auto_close_delay = delay;
        self
    }

    #[must_use]
    pub fn backdrop(mut self, content: impl Into<String>) -> Self {
        self.backdrop = Some(content.into());
        self
    }

    #[must_use]
    pub fn bg_color(mut self, color: Color) -> Self {
        self.bg_color = color;
        self
    }

    #[must_use]
    pub fn bg_opacity(mut self, opacity: f32) -> Self {
        self.bg_opacity = opacity.clamp(0.0, 1.0);
        self
    }

    #[must_use]
    pub fn background_tappable(mut self, tappable: bool) -> Self {
        self.background_tappable = tappable;
        self
    }

    #[must_use]
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    #[must_use]
    pub fn button_color(mut self, color: Color) -> Self {
        self.button_color = color;
        self
    }

    #[must_use]
    pub fn size(mut self, size: u16) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    #[must_use]
    pub fn spacing(mut self, spacing: u16) -> Self {
        self.spacing = spacing;
        self
    }

    #[must_use]
    pub fn offset_x(mut self, offset_x: u16) -> Self {
        self.offset_x = offset_x;
        self
    }

    #[must_use]
    pub fn offset_y(mut self, offset_y: u16) -> Self {
        self.offset_y = offset_y;
        self
    }

    #[must_use]
    pub fn item_height(mut self, height: u16) -> Self {
        self.item_height = height;
        self
    }

    #[must_use]
    pub fn on_press(mut self, on_press: impl Fn() + 'static) -> Self {
        self.on_press = Rc::new(on_press);
        self
    }

    #[must_use]
    pub fn child(mut self, item: ActionItem) -> Self {
        self.children.push(Some(item));
        self
    }

    /// Add a conditional child; `None` keeps its slot as a placeholder
    #[must_use]
    pub fn maybe_child(mut self, item: Option<ActionItem>) -> Self {
        self.children.push(item);
        self
    }

    #[must_use]
    pub fn children<I>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = ActionItem>,
    {
        self.children.extend(items.into_iter().map(Some));
        self
    }

    /// Renderable descriptors, placeholders dropped, in caller order
    pub fn actions(&self) -> impl Iterator<Item = &ActionItem> + '_ {
        self.children.iter().flatten()
    }

    pub fn has_actions(&self) -> bool {
        self.actions().next().is_some()
    }

    pub fn shared_item_props(&self) -> SharedItemProps {
        SharedItemProps {
            tint: self.button_color,
            height: self.item_height,
            offset_x: self.offset_x,
        }
    }
}

impl fmt::Debug for ActionButtonProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionButtonProps")
            .field("active", &self.active)
            .field("reset_token", &self.reset_token)
            .field("auto_close", &self.auto_close)
            .field("auto_close_delay", &self.auto_close_delay)
            .field("backdrop", &self.backdrop)
            .field("bg_color", &self.bg_color)
            .field("bg_opacity", &self.bg_opacity)
            .field("background_tappable", &self.background_tappable)
            .field("orientation", &self.orientation)
            .field("button_color", &self.button_color)
            .field("size", &self.size)
            .field("icon", &self.icon)
            .field("spacing", &self.spacing)
            .field("offset_x", &self.offset_x)
            .field("offset_y", &self.offset_y)
            .field("item_height", &self.item_height)
            .field("children", &self.children)
            .finish_non_exhaustive()
    }
}
