//! Cart summary overlay, opened with `c`.

use super::centered_rect;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
};
use zyn_core::display::format_price;
use zyn_core::ShopState;

pub struct CartSummary<'a> {
    shop: &'a ShopState,
    theme: &'a Theme,
}

impl<'a> CartSummary<'a> {
    pub fn new(shop: &'a ShopState, theme: &'a Theme) -> Self {
        Self { shop, theme }
    }
}

impl Widget for CartSummary<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let entries = self.shop.cart.entries();
        let height = (entries.len().max(1) + 6) as u16;
        let popup = centered_rect(66, height, area);
        Clear.render(popup, buf);

        let block = Block::bordered()
            .title(format!(" Cart · {} items ", self.shop.cart_count()))
            .title_bottom(" :remove <id>  Esc: close ")
            .border_style(self.theme.border_focused);
        let inner = block.inner(popup);
        block.render(popup, buf);

        let mut lines: Vec<Line> = Vec::with_capacity(entries.len() + 3);
        if entries.is_empty() {
            lines.push(Line::from(Span::styled("Your cart is empty", self.theme.muted)));
        }
        for entry in entries {
            lines.push(Line::from(vec![
                Span::styled(format!("{:>4}  ", entry.item.id), self.theme.muted),
                Span::styled(format!("{:<32}", entry.item.title), self.theme.text),
                Span::styled(format!(" x{:<3}", entry.quantity), self.theme.muted),
                Span::styled(format!("{:>10}", format_price(entry.line_total())), self.theme.price),
            ]));
        }
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled(format!("{:<45}", "Subtotal"), self.theme.title),
            Span::styled(
                format!("{:>10}", format_price(self.shop.cart_subtotal())),
                self.theme.price,
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("Wishlist: {} saved", self.shop.wishlist_count()),
            self.theme.in_wishlist,
        )));

        Paragraph::new(lines).render(inner, buf);
    }
}
