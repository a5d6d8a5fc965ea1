//! Speed-dial component for ratatui.
//!
//! Wraps an [`ActionButton`] and connects it to the terminal: it lays the
//! render tree out inside the area it is given, draws it, and turns mouse
//! clicks and key presses into container transitions. The layout of the
//! last frame is kept so clicks are hit-tested against what the user
//! actually saw.

use crate::dial::{ActionButton, ActionButtonProps, DialTree, SyncOutcome};
use crate::ui::components::action_item_widget::ActionItemWidget;
use crate::ui::core::{actions::Action, Component};
use crate::ui::layout::{DialLayout, Hit};
use crate::utils::color::{contrast_fg, is_transparent};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{block::BorderType, Block, Paragraph},
    Frame,
};
use std::time::Instant;

/// Floating action button with a stack of labeled actions.
///
/// Features:
/// - Click or Enter/Space/`+` on the primary button toggles the stack
/// - Click or `1`-`9` selects a visible action
/// - Click outside the stack or Esc dismisses it (unless the background is tappable)
/// - Deferred auto-close driven by [`Action::Tick`]
pub struct SpeedDialComponent {
    dial: ActionButton,
    layout: Option<DialLayout>,
}

impl SpeedDialComponent {
    pub fn new(props: ActionButtonProps) -> Self {
        Self {
            dial: ActionButton::new(props),
            layout: None,
        }
    }

    pub fn dial(&self) -> &ActionButton {
        &self.dial
    }

    /// Layout of the most recent render, if any
    pub fn layout(&self) -> Option<&DialLayout> {
        self.layout.as_ref()
    }

    /// Forward new props from the host and resync from their reset token
    pub fn set_props(&mut self, props: ActionButtonProps) -> SyncOutcome {
        let outcome = self.dial.on_props_changed(props);
        if outcome != SyncOutcome::Unchanged {
            self.layout = None;
        }
        outcome
    }

    fn press_primary(&mut self) -> Action {
        let engaged = self.dial.press_primary();
        Action::PrimaryPressed {
            engaged,
            open: self.dial.is_open(),
        }
    }

    fn select(&mut self, index: usize) -> Action {
        let label = match self.dial.props().actions().nth(index) {
            Some(item) => item.label.clone(),
            None => return Action::None,
        };
        if self.dial.select_item(index) {
            Action::ItemSelected { index, label }
        } else {
            Action::None
        }
    }

    fn dismiss(&mut self) -> Action {
        if !self.dial.is_open() {
            return Action::None;
        }
        self.dial.dismiss();
        Action::Dismissed
    }

    fn render_backdrop(f: &mut Frame, tree: &DialTree, layout: &DialLayout) {
        let backdrop = &tree.backdrop;
        if !is_transparent(backdrop.color) && backdrop.opacity > 0.0 {
            let mut style = Style::default().bg(backdrop.color);
            if backdrop.opacity < 1.0 {
                style = style.add_modifier(Modifier::DIM);
            }
            f.render_widget(Block::default().style(style), layout.area);
        }

        if let Some(content) = &backdrop.content {
            if !layout.backdrop_content.is_empty() {
                let lines: Vec<Line> = content.lines().map(|l| Line::from(l.to_string())).collect();
                f.render_widget(
                    Paragraph::new(lines).style(Style::default().fg(Color::DarkGray)),
                    layout.backdrop_content,
                );
            }
        }
    }

    fn render_primary(f: &mut Frame, tree: &DialTree, layout: &DialLayout) {
        let primary = &tree.primary;
        let area = layout.primary;
        if area.is_empty() {
            return;
        }

        let style = Style::default().bg(primary.color).fg(contrast_fg(primary.color));
        let icon_style = style.add_modifier(Modifier::BOLD);
        if area.height >= 3 && area.width >= 3 {
            let block = Block::bordered()
                .border_type(BorderType::Rounded)
                .style(style);
            let inner = block.inner(area);
            f.render_widget(block, area);
            let icon_row = Rect::new(inner.x, inner.y + inner.height / 2, inner.width, 1);
            f.render_widget(
                Paragraph::new(primary.icon.as_str()).alignment(Alignment::Center).style(icon_style),
                icon_row,
            );
        } else {
            f.render_widget(Block::default().style(style), area);
            let icon_row = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
            f.render_widget(
                Paragraph::new(primary.icon.as_str()).alignment(Alignment::Center).style(icon_style),
                icon_row,
            );
        }
    }
}

impl Component for SpeedDialComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('+') => self.press_primary(),
            KeyCode::Esc => {
                if self.dial.render().dismiss_layer {
                    self.dismiss()
                } else {
                    Action::None
                }
            }
            KeyCode::Char(c @ '1'..='9') => {
                let n = (c as usize) - ('1' as usize);
                // Number the items the user saw on the last frame
                let drawn = self.layout.as_ref().and_then(|layout| layout.items.get(n));
                match drawn.map(|area| area.index) {
                    Some(index) => self.select(index),
                    None => Action::None,
                }
            }
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Action::None;
        }
        let hit = match &self.layout {
            Some(layout) => layout.hit_test(mouse.column, mouse.row),
            None => return Action::None,
        };

        match hit {
            Some(Hit::Item(index)) => self.select(index),
            Some(Hit::Primary) => self.press_primary(),
            Some(Hit::Dismiss) => self.dismiss(),
            None => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::Tick => {
                if self.dial.tick(Instant::now()) {
                    Action::Dismissed
                } else {
                    Action::None
                }
            }
            other => other,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let tree = self.dial.render();
        let layout = DialLayout::compute(&tree, rect);

        Self::render_backdrop(f, &tree, &layout);

        if let Some(stack) = &tree.stack {
            for item_area in &layout.items {
                if let Some(entry) = stack.entries.iter().find(|entry| entry.index == item_area.index) {
                    f.render_widget(ActionItemWidget::new(&entry.node, *item_area), rect);
                }
            }
        }

        Self::render_primary(f, &tree, &layout);
        self.layout = Some(layout);
    }

    fn on_unmount(&mut self) {
        self.dial.unmount();
        self.layout = None;
    }
}
