//! Quick-view modal — the full card for one product.

use super::centered_rect;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget, Wrap},
};
use zyn_core::display::{format_price, StarRating};
use zyn_core::state::QuickView;

pub struct QuickViewPopup<'a> {
    view: QuickView<'a>,
    theme: &'a Theme,
}

impl<'a> QuickViewPopup<'a> {
    pub fn new(view: QuickView<'a>, theme: &'a Theme) -> Self {
        Self { view, theme }
    }
}

impl Widget for QuickViewPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = centered_rect(64, 14, area);
        Clear.render(popup, buf);

        let item = self.view.item;
        let block = Block::bordered()
            .title(format!(" {} ", item.title))
            .title_bottom(" a: add to cart  w: wishlist  Esc: close ")
            .border_style(self.theme.border_focused);
        let inner = block.inner(popup);
        block.render(popup, buf);

        let wishlist = if self.view.in_wishlist {
            Span::styled("♥ In your wishlist", self.theme.in_wishlist)
        } else {
            Span::styled("♡ Not in wishlist", self.theme.muted)
        };
        let cart = if self.view.in_cart {
            Span::styled("✓ In your cart", self.theme.in_cart)
        } else {
            Span::styled("Not in cart", self.theme.muted)
        };

        let lines = vec![
            Line::from(Span::styled(item.brand.as_str(), self.theme.brand)),
            Line::from(Span::styled(item.category.as_str(), self.theme.muted)),
            Line::default(),
            Line::from(vec![
                Span::styled(format_price(item.price), self.theme.price),
                Span::raw("   "),
                Span::styled(StarRating::from_rating(item.rating).render(), self.theme.rating),
                Span::styled(format!(" {:.1}", item.rating), self.theme.muted),
            ]),
            Line::default(),
            Line::from(Span::styled(item.description.as_str(), self.theme.text)),
            Line::default(),
            Line::from(vec![wishlist, Span::raw("   "), cart]),
        ];

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
