//! Query bar widget — text input at the bottom of the screen.
//!
//! # Editing
//!
//! - `Char(c)` inserts at the cursor.
//! - `Backspace` deletes the character before the cursor.
//! - `Nav(Left)` / `Nav(Right)` move the cursor.
//!
//! Every edit restarts the debounce window. The app shell polls
//! [`QueryBarState::take_due`] on each tick and runs the search once the
//! window has elapsed; `Enter` bypasses the wait via
//! [`QueryBarState::take_now`].

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};
use std::time::{Duration, Instant};

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct QueryBarState {
    /// The text typed by the user.
    pub query: String,
    /// Byte offset of the cursor within `query`.
    pub cursor: usize,
    /// When the last unsubmitted edit happened.
    pending_since: Option<Instant>,
}

impl QueryBarState {
    /// Handle a key event from the app shell. Returns true when the text
    /// changed.
    pub fn handle(&mut self, event: &AppEvent, now: Instant) -> bool {
        match event {
            AppEvent::Char(c) => {
                self.query.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                self.pending_since = Some(now);
                tracing::debug!(query = %self.query, cursor = self.cursor, "query: char inserted");
                true
            }
            AppEvent::Backspace => {
                if self.cursor == 0 {
                    return false;
                }
                let prev = self.query[..self.cursor]
                    .char_indices()
                    .last()
                    .map(|(i, _)| i)
                    .unwrap_or(0);
                self.query.remove(prev);
                self.cursor = prev;
                self.pending_since = Some(now);
                tracing::debug!(query = %self.query, cursor = self.cursor, "query: backspace");
                true
            }
            AppEvent::Nav(Direction::Left) => {
                if self.cursor > 0 {
                    self.cursor = self.query[..self.cursor]
                        .char_indices()
                        .last()
                        .map(|(i, _)| i)
                        .unwrap_or(0);
                }
                false
            }
            AppEvent::Nav(Direction::Right) => {
                if self.cursor < self.query.len() {
                    self.cursor = self.query[self.cursor..]
                        .char_indices()
                        .nth(1)
                        .map(|(i, _)| self.cursor + i)
                        .unwrap_or(self.query.len());
                }
                false
            }
            _ => false,
        }
    }

    /// The query, once `debounce` has passed since the last edit. Each edit
    /// yields at most one search.
    pub fn take_due(&mut self, now: Instant, debounce: Duration) -> Option<String> {
        let since = self.pending_since?;
        if now.saturating_duration_since(since) < debounce {
            return None;
        }
        self.pending_since = None;
        Some(self.query.clone())
    }

    /// The query right away, cancelling any pending debounce.
    pub fn take_now(&mut self) -> String {
        self.pending_since = None;
        self.query.clone()
    }

    pub fn is_pending(&self) -> bool {
        self.pending_since.is_some()
    }

    /// Replace the text without scheduling a search (used by `:search`).
    pub fn set(&mut self, text: &str) {
        self.query = text.to_string();
        self.cursor = self.query.len();
        self.pending_since = None;
    }

    pub fn clear(&mut self) {
        self.set("");
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct QueryBar<'a> {
    state: &'a QueryBarState,
    focused: bool,
    /// Items currently matched, shown at the right edge.
    results: usize,
    title: &'a str,
    theme: &'a Theme,
}

impl<'a> QueryBar<'a> {
    pub fn new(
        state: &'a QueryBarState,
        focused: bool,
        results: usize,
        title: &'a str,
        theme: &'a Theme,
    ) -> Self {
        Self { state, focused, results, title, theme }
    }

    /// Absolute terminal position of the text cursor within this widget's
    /// rendered area. Pass to `frame.set_cursor_position()` after rendering.
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        // The block adds 1-cell borders; text starts at (area.x+1, area.y+1).
        let col = self.state.query[..self.state.cursor].chars().count() as u16;
        let x = (area.x + 1 + col).min(area.right().saturating_sub(1));
        (x, area.y + 1)
    }
}

impl Widget for QueryBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(self.title)
            .border_style(self.theme.border(self.focused));

        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(LayoutDir::Horizontal)
            .constraints([Constraint::Fill(1), Constraint::Length(16)])
            .split(inner);

        let query_line = if self.state.query.is_empty() && !self.focused {
            Line::from(Span::styled("press / to search", self.theme.muted))
        } else {
            Line::from(Span::styled(self.state.query.as_str(), self.theme.text))
        };
        Paragraph::new(query_line).render(chunks[0], buf);

        let count = if self.state.is_pending() {
            "searching…".to_string()
        } else {
            format!("{} results", self.results)
        };
        Paragraph::new(Line::from(Span::styled(
            count,
            self.theme.muted.add_modifier(Modifier::ITALIC),
        )))
        .right_aligned()
        .render(chunks[1], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str, at: Instant) -> QueryBarState {
        let mut s = QueryBarState::default();
        for c in text.chars() {
            s.handle(&AppEvent::Char(c), at);
        }
        s
    }

    #[test]
    fn insert_and_backspace() {
        let now = Instant::now();
        let mut s = typed("shoe", now);
        assert_eq!(s.query, "shoe");
        assert!(s.handle(&AppEvent::Backspace, now));
        assert_eq!(s.query, "sho");
        assert_eq!(s.cursor, 3);
    }

    #[test]
    fn cursor_moves_insert_mid_string() {
        let now = Instant::now();
        let mut s = typed("ac", now);
        s.handle(&AppEvent::Nav(Direction::Left), now);
        s.handle(&AppEvent::Char('b'), now);
        assert_eq!(s.query, "abc");
    }

    #[test]
    fn backspace_at_start_is_not_an_edit() {
        let mut s = QueryBarState::default();
        assert!(!s.handle(&AppEvent::Backspace, Instant::now()));
        assert!(!s.is_pending());
    }

    #[test]
    fn search_waits_for_quiet_period() {
        let t0 = Instant::now();
        let debounce = Duration::from_millis(300);
        let mut s = typed("nike", t0);

        assert_eq!(s.take_due(t0 + Duration::from_millis(299), debounce), None);
        assert_eq!(
            s.take_due(t0 + Duration::from_millis(300), debounce).as_deref(),
            Some("nike")
        );
        // fired once
        assert_eq!(s.take_due(t0 + Duration::from_secs(5), debounce), None);
    }

    #[test]
    fn each_keystroke_restarts_the_window() {
        let t0 = Instant::now();
        let debounce = Duration::from_millis(300);
        let mut s = typed("ni", t0);
        let t1 = t0 + Duration::from_millis(200);
        s.handle(&AppEvent::Char('k'), t1);
        assert_eq!(s.take_due(t0 + Duration::from_millis(400), debounce), None);
        assert!(s.take_due(t1 + Duration::from_millis(300), debounce).is_some());
    }

    #[test]
    fn take_now_cancels_pending() {
        let t0 = Instant::now();
        let mut s = typed("bag", t0);
        assert_eq!(s.take_now(), "bag");
        assert!(!s.is_pending());
    }
}
