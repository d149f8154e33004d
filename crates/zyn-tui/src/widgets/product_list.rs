//! Product list widget — the scrollable results pane on the right.
//!
//! # Navigation (when pane is focused)
//!
//! | Key | Action |
//! |-----|--------|
//! | `↑` / `k` | Move cursor up one row |
//! | `↓` / `j` | Move cursor down one row |
//! | `PageUp` / `Ctrl+u` | Move cursor up one screen |
//! | `PageDown` / `Ctrl+d` | Move cursor down one screen |
//!
//! # Scroll semantics
//!
//! `cursor` indexes into the *visible* (loaded so far) products. `offset` is
//! the first row on screen and is recomputed at render time so the cursor is
//! always in view.

use std::cell::Cell;

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{
        Block, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget,
    },
};
use zyn_core::display::{format_price, StarRating};
use zyn_core::state::ListSource;
use zyn_core::{Item, ShopState};

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct ProductListState {
    /// Index into `ShopState::visible()` of the highlighted row.
    pub cursor: usize,
    /// First row on screen. Cached from the last render.
    offset: Cell<usize>,
    /// Rows available for products. Cached from the last render.
    last_height: Cell<usize>,
}

impl ProductListState {
    fn page_step(&self) -> usize {
        self.last_height.get().max(1)
    }

    /// Handle a navigation event. `len` is the number of loaded products.
    pub fn handle(&mut self, event: &AppEvent, len: usize) {
        if len == 0 {
            self.cursor = 0;
            return;
        }
        match event {
            AppEvent::Nav(Direction::Up) => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            AppEvent::Nav(Direction::Down) => {
                if self.cursor + 1 < len {
                    self.cursor += 1;
                }
            }
            AppEvent::ScrollUp => {
                self.cursor = self.cursor.saturating_sub(self.page_step());
            }
            AppEvent::ScrollDown => {
                self.cursor = (self.cursor + self.page_step()).min(len - 1);
            }
            _ => return,
        }
        tracing::debug!(cursor = self.cursor, len, "products: cursor moved");
    }

    /// Back to the top, after the list was replaced.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.offset.set(0);
    }

    /// Keep the cursor inside a list that shrank.
    pub fn clamp(&mut self, len: usize) {
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    /// The product under the cursor.
    pub fn selected<'a>(&self, visible: &'a [Item]) -> Option<&'a Item> {
        visible.get(self.cursor)
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct ProductList<'a> {
    state: &'a ProductListState,
    shop: &'a ShopState,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> ProductList<'a> {
    pub fn new(state: &'a ProductListState, shop: &'a ShopState, focused: bool, theme: &'a Theme) -> Self {
        Self { state, shop, focused, theme }
    }

    fn title(&self) -> String {
        let shown = self.shop.visible().len();
        let total = self.shop.active().len();
        match self.shop.source {
            ListSource::Search => {
                format!(" Results for \"{}\" · {shown}/{total} ", self.shop.query)
            }
            ListSource::Category | ListSource::Everything => {
                format!(" Products · {} · {shown}/{total} ", self.shop.filter)
            }
        }
    }
}

impl Widget for ProductList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(self.title())
            .border_style(self.theme.border(self.focused));
        let inner = block.inner(area);
        block.render(area, buf);

        let visible = self.shop.visible();
        if visible.is_empty() {
            Paragraph::new(Line::from(Span::styled("No products found", self.theme.muted)))
                .centered()
                .render(inner, buf);
            return;
        }

        // Last row holds the load-more button when there is more to show
        let footer = self.shop.load_more_label();
        let list_height = (inner.height as usize).saturating_sub(usize::from(footer.is_some()));
        self.state.last_height.set(list_height);

        let cursor = self.state.cursor.min(visible.len() - 1);
        let mut offset = self.state.offset.get();
        if cursor < offset {
            offset = cursor;
        } else if list_height > 0 && cursor >= offset + list_height {
            offset = cursor + 1 - list_height;
        }
        self.state.offset.set(offset);

        let end = (offset + list_height).min(visible.len());
        let lines: Vec<Line<'static>> = visible[offset..end]
            .iter()
            .enumerate()
            .map(|(row, item)| {
                let line = render_item(item, self.shop, inner.width, self.theme);
                if self.focused && offset + row == cursor {
                    line.patch_style(self.theme.selected)
                } else {
                    line
                }
            })
            .collect();

        let text_area = Rect {
            width: inner.width.saturating_sub(1),
            height: list_height as u16,
            ..inner
        };
        let sb_area = Rect {
            x: inner.right().saturating_sub(1),
            width: 1,
            height: list_height as u16,
            ..inner
        };
        Paragraph::new(lines).render(text_area, buf);

        let mut sb_state = ScrollbarState::new(visible.len())
            .position(offset)
            .viewport_content_length(list_height);
        StatefulWidget::render(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None),
            sb_area,
            buf,
            &mut sb_state,
        );

        if let Some(label) = footer {
            let footer_area = Rect {
                y: inner.bottom().saturating_sub(1),
                height: 1,
                ..inner
            };
            Paragraph::new(Line::from(Span::styled(
                format!("▼ {label}  (m)"),
                self.theme.load_more,
            )))
            .centered()
            .render(footer_area, buf);
        }
    }
}

// ---------------------------------------------------------------------------
// Row rendering
// ---------------------------------------------------------------------------

fn render_item(item: &Item, shop: &ShopState, width: u16, theme: &Theme) -> Line<'static> {
    let in_wishlist = shop.wishlist.contains(item.id);
    let in_cart = shop.cart.quantity_of(item.id);

    let mut spans: Vec<Span<'static>> = vec![
        Span::styled(
            if in_wishlist { "♥ " } else { "  " },
            theme.in_wishlist,
        ),
        Span::styled(format!("{:<34} ", truncate(&item.title, 34)), theme.title),
    ];

    // Brand and category columns only when there is room for them
    if width > 90 {
        spans.push(Span::styled(format!("{:<14} ", truncate(&item.brand, 14)), theme.brand));
        spans.push(Span::styled(format!("{:<12} ", truncate(&item.category, 12)), theme.muted));
    }

    spans.push(Span::styled(format!("{:>9} ", format_price(item.price)), theme.price));
    spans.push(Span::styled(
        StarRating::from_rating(item.rating).render(),
        theme.rating,
    ));
    spans.push(Span::styled(format!(" {:.1}", item.rating), theme.muted));

    if in_cart > 0 {
        spans.push(Span::styled(
            format!("  [{in_cart} in cart]"),
            theme.in_cart.add_modifier(Modifier::BOLD),
        ));
    }

    Line::from(spans)
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}
