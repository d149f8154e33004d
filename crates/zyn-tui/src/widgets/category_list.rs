//! Category list widget — the filter tabs in the left pane.
//!
//! Used for the shop's product categories and the services page's filter
//! buttons alike.
//!
//! # Navigation
//! - `↑`/`k` and `↓`/`j` move the cursor.
//! - `Enter` or `→`/`l` applies the category under the cursor.

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, List, ListItem, ListState, StatefulWidget, Widget},
};
use zyn_core::search::ALL;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct CategoryListState {
    /// `"all"` first, then each category in catalog order.
    pub categories: Vec<String>,
    pub cursor: usize,
    /// The category currently applied to the list on the right.
    pub active: String,
}

impl CategoryListState {
    pub fn new(categories: Vec<String>) -> Self {
        Self { categories, cursor: 0, active: ALL.to_string() }
    }

    /// Handle an [`AppEvent`]. Returns the category to apply when the user
    /// picks one.
    pub fn handle(&mut self, event: &AppEvent) -> Option<String> {
        match event {
            AppEvent::Nav(Direction::Up) => {
                self.cursor = self.cursor.saturating_sub(1);
                tracing::debug!(cursor = self.cursor, "categories: cursor up");
                None
            }
            AppEvent::Nav(Direction::Down) => {
                let max = self.categories.len().saturating_sub(1);
                if self.cursor < max {
                    self.cursor += 1;
                }
                tracing::debug!(cursor = self.cursor, "categories: cursor down");
                None
            }
            AppEvent::Enter | AppEvent::Nav(Direction::Right) => {
                let picked = self.categories.get(self.cursor)?.clone();
                tracing::debug!(category = %picked, "categories: picked");
                self.active = picked.clone();
                Some(picked)
            }
            _ => None,
        }
    }

    /// Mark `category` active and move the cursor onto it, if listed.
    /// Used when a category is applied from the command bar.
    pub fn select(&mut self, category: &str) {
        self.active = category.to_string();
        if let Some(idx) = self.categories.iter().position(|c| c == category) {
            self.cursor = idx;
        }
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct CategoryList<'a> {
    state: &'a CategoryListState,
    focused: bool,
    title: &'a str,
    theme: &'a Theme,
}

impl<'a> CategoryList<'a> {
    pub fn new(state: &'a CategoryListState, focused: bool, title: &'a str, theme: &'a Theme) -> Self {
        Self { state, focused, title, theme }
    }
}

impl Widget for CategoryList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(self.title)
            .border_style(self.theme.border(self.focused));

        let inner = block.inner(area);
        block.render(area, buf);

        let items: Vec<ListItem> = self
            .state
            .categories
            .iter()
            .map(|cat| {
                let active = *cat == self.state.active;
                let marker = if active { "● " } else { "  " };
                let style = if active { self.theme.category_active } else { self.theme.text };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, style),
                    Span::styled(title_case(cat), style),
                ]))
            })
            .collect();

        let mut list = List::new(items);
        if self.focused {
            list = list.highlight_style(self.theme.selected);
        }

        let mut list_state = ListState::default().with_selected(Some(self.state.cursor));
        StatefulWidget::render(list, inner, buf, &mut list_state);
    }
}

/// `"home & garden"` → `"Home & Garden"`.
fn title_case(s: &str) -> String {
    s.split(' ')
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
