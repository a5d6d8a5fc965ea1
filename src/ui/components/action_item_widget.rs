//! Drawing of a single action item: label pill plus colored swatch.

use crate::dial::ItemNode;
use crate::ui::layout::ItemArea;
use crate::utils::color::contrast_fg;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Paragraph, Widget},
};

/// Borrowing widget for one laid-out item
pub struct ActionItemWidget<'a> {
    node: &'a ItemNode,
    area: ItemArea,
}

impl<'a> ActionItemWidget<'a> {
    pub fn new(node: &'a ItemNode, area: ItemArea) -> Self {
        Self { node, area }
    }

    fn pill(&self) -> Paragraph<'a> {
        let style = Style::default().fg(Color::Black).bg(Color::White);
        Paragraph::new(Line::from(vec![Span::styled(format!(" {} ", self.node.label), style)]))
    }

    fn swatch(&self) -> Paragraph<'a> {
        let style = Style::default()
            .bg(self.node.tint)
            .fg(contrast_fg(self.node.tint))
            .add_modifier(Modifier::BOLD);
        let icon = self.node.icon.clone().unwrap_or_default();

        let paragraph = Paragraph::new(Line::from(icon)).alignment(Alignment::Center).style(style);
        if self.node.swatch_diameter >= 3 {
            paragraph.block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(self.node.tint)),
            )
        } else {
            paragraph
        }
    }
}

impl Widget for ActionItemWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let pill = self.area.pill.intersection(area);
        let swatch = self.area.swatch.intersection(area);

        if !pill.is_empty() {
            self.pill().render(pill, buf);
        }
        if !swatch.is_empty() {
            // Center the icon row inside the swatch
            let icon_row = Rect::new(swatch.x, swatch.y + swatch.height / 2, swatch.width, 1);
            if self.node.swatch_diameter >= 3 {
                self.swatch().render(swatch, buf);
            } else {
                Block::default().style(Style::default().bg(self.node.tint)).render(swatch, buf);
                self.swatch().render(icon_row, buf);
            }
        }
    }
}
