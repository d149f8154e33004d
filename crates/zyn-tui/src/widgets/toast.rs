//! Toast — the transient notification in the top-right corner.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Block, Clear, Paragraph, Widget},
};
use zyn_core::notify::Notification;

pub struct Toast<'a> {
    notification: &'a Notification,
    theme: &'a Theme,
}

impl<'a> Toast<'a> {
    pub fn new(notification: &'a Notification, theme: &'a Theme) -> Self {
        Self { notification, theme }
    }

    /// Box hugging the message, one row below the tab bar at the right edge.
    pub fn area(&self, screen: Rect) -> Rect {
        let width = (self.notification.message.chars().count() as u16 + 4).min(screen.width);
        Rect {
            x: screen.right().saturating_sub(width + 1),
            y: screen.y + 1,
            width,
            height: 3.min(screen.height),
        }
    }
}

impl Widget for Toast<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let style = self.theme.toast_style(self.notification.kind);
        let block = Block::bordered().style(style).border_style(style);
        let inner = block.inner(area);
        block.render(area, buf);
        Paragraph::new(Line::from(self.notification.message.as_str()))
            .style(style)
            .centered()
            .render(inner, buf);
    }
}
