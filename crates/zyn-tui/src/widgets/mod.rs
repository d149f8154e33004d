//! Ratatui widgets for the zynshop TUI.

use ratatui::layout::Rect;

pub mod cart_summary;
pub mod category_list;
pub mod command_bar;
pub mod help;
pub mod product_list;
pub mod query_bar;
pub mod quick_view;
pub mod service_list;
pub mod tab_bar;
pub mod toast;

/// A `width` x `height` box centred in `area`, shrunk to fit.
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
