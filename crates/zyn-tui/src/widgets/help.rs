//! Help popup — centred floating overlay listing all keybindings.
//!
//! Toggle with `?`; close with `?` or `Escape`.

use super::centered_rect;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
};

const BINDINGS: &[(&str, &str)] = &[
    ("q  /  Ctrl+c", "Quit"),
    ("1  /  2", "Shop / Services tab"),
    ("Tab", "Cycle focus: categories → products → query"),
    ("/", "Focus query bar"),
    ("Escape", "Leave query bar (clears it on Services)"),
    ("↑ k  /  ↓ j", "Move cursor"),
    ("Enter", "Apply category / quick view / search now"),
    ("PageUp  /  Ctrl+u", "Page up"),
    ("PageDown / Ctrl+d", "Page down"),
    ("a", "Add product to cart"),
    ("w", "Add / remove from wishlist"),
    ("m", "Load more products"),
    ("c", "Cart summary"),
    ("b", "Show / hide categories"),
    ("t", "Toggle light / dark theme"),
    (":", "Command (:help for the list)"),
    ("?", "Toggle this help popup"),
];

const COMMANDS: &[(&str, &str)] = &[
    (":filter <category>", "Show a category"),
    (":search <text>", "Search now"),
    (":more", "Load more"),
    (":remove <id>", "Remove from cart"),
    (":subscribe <email>", "Newsletter signup"),
    (":contact n; e; msg", "Send the contact form"),
    (":theme [light|dark]", "Set or toggle theme"),
];

pub struct HelpPopup<'a> {
    theme: &'a Theme,
}

impl<'a> HelpPopup<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for HelpPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = (BINDINGS.len() + COMMANDS.len() + 5) as u16;
        let popup = centered_rect(72, height, area);
        Clear.render(popup, buf);

        let block = Block::bordered()
            .title(" zynshop — keybindings (? to close) ")
            .border_style(self.theme.border_focused);

        let inner = block.inner(popup);
        block.render(popup, buf);

        let row = |(key, desc): &(&str, &str)| {
            Line::from(vec![
                Span::styled(format!("  {key:<22}"), self.theme.title),
                Span::styled(desc.to_string(), self.theme.text),
            ])
        };

        let mut lines: Vec<Line> = BINDINGS.iter().map(row).collect();
        lines.push(Line::default());
        lines.push(Line::from(Span::styled("  Commands", self.theme.muted)));
        lines.extend(COMMANDS.iter().map(row));

        Paragraph::new(lines).render(inner, buf);
    }
}
