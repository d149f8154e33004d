//! Service cards for the services tab. Each card is a title line, a
//! description line and a blank spacer.

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};
use zyn_core::services::ServicesState;

const CARD_HEIGHT: usize = 3;

#[derive(Debug, Default)]
pub struct ServiceListState {
    /// Index of the first card on screen.
    pub scroll: usize,
}

impl ServiceListState {
    pub fn handle(&mut self, event: &AppEvent, len: usize) {
        match event {
            AppEvent::Nav(Direction::Up) | AppEvent::ScrollUp => {
                self.scroll = self.scroll.saturating_sub(1);
            }
            AppEvent::Nav(Direction::Down) | AppEvent::ScrollDown => {
                if self.scroll + 1 < len {
                    self.scroll += 1;
                }
            }
            _ => {}
        }
    }
}

pub struct ServiceList<'a> {
    state: &'a ServiceListState,
    services: &'a ServicesState,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> ServiceList<'a> {
    pub fn new(
        state: &'a ServiceListState,
        services: &'a ServicesState,
        focused: bool,
        theme: &'a Theme,
    ) -> Self {
        Self { state, services, focused, theme }
    }
}

impl Widget for ServiceList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let visible = self.services.visible();
        let block = Block::bordered()
            .title(format!(" Services · {} ", visible.len()))
            .border_style(self.theme.border(self.focused));
        let inner = block.inner(area);
        block.render(area, buf);

        if visible.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                "No services match your search",
                self.theme.muted,
            )))
            .centered()
            .render(inner, buf);
            return;
        }

        let start = self.state.scroll.min(visible.len() - 1);
        let mut lines: Vec<Line> = Vec::with_capacity((visible.len() - start) * CARD_HEIGHT);
        for service in &visible[start..] {
            lines.push(Line::from(vec![
                Span::styled(service.title.as_str(), self.theme.title),
                Span::styled(format!("  [{}]", service.category), self.theme.brand),
            ]));
            lines.push(Line::from(Span::styled(
                service.description.as_str(),
                self.theme.text,
            )));
            lines.push(Line::default());
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
