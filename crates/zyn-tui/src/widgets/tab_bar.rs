//! Tab bar widget — the strip at the top of the screen.

use crate::app::Tab;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Tabs, Widget},
};

/// Renders the 1-line tab strip.
///
/// The active tab is highlighted. Wishlist and cart counters sit at the right
/// edge next to the theme toggle hint, like the header badges of a shop page.
pub struct TabBar<'a> {
    active: Tab,
    cart_count: u32,
    wishlist_count: usize,
    theme: &'a Theme,
}

impl<'a> TabBar<'a> {
    pub fn new(active: Tab, cart_count: u32, wishlist_count: usize, theme: &'a Theme) -> Self {
        Self { active, cart_count, wishlist_count, theme }
    }
}

impl Widget for TabBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let labels: Vec<Line> = Tab::ALL
            .iter()
            .enumerate()
            .map(|(i, tab)| Line::from(format!(" {}:{} ", i + 1, tab.label())))
            .collect();

        Tabs::new(labels)
            .select(self.active.index())
            .style(self.theme.muted)
            .highlight_style(self.theme.title.add_modifier(Modifier::REVERSED))
            .divider("")
            .render(area, buf);

        let badges = Line::from(vec![
            Span::styled(format!(" ♥ {} ", self.wishlist_count), self.theme.badge),
            Span::raw(" "),
            Span::styled(format!(" cart {} ", self.cart_count), self.theme.badge),
            Span::styled(
                format!("  t:{}  ?:help ", self.theme.mode.toggle_label()),
                self.theme.muted,
            ),
        ]);
        let width = badges.width() as u16;
        let x = area.right().saturating_sub(width);
        buf.set_line(x, area.y, &badges, width);
    }
}
