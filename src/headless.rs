//! Headless mode — run one search or category filter and print the result.
//!
//! Output goes to stdout; nothing here touches the terminal state, so it is
//! safe to pipe into other tools.

use clap::ValueEnum;
use serde_json::json;
use std::io::Write;
use zyn_core::{display, ShopState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One aligned line per product, then the load-more label.
    Text,
    /// A single JSON object with the shown items and paging counters.
    Json,
}

/// What to show. Query and filter are mutually exclusive at the CLI level.
#[derive(Debug, Clone, Default)]
pub struct HeadlessRequest {
    pub query: Option<String>,
    pub filter: Option<String>,
    pub pages: usize,
}

/// Apply `request` to `shop`, then load up to `pages` pages.
pub fn prepare(shop: &mut ShopState, request: &HeadlessRequest) {
    if let Some(query) = &request.query {
        shop.apply_query(query);
    } else if let Some(filter) = &request.filter {
        shop.apply_category(filter);
    }
    for _ in 1..request.pages.max(1) {
        if !shop.load_more() {
            break;
        }
    }
    tracing::debug!(
        shown = shop.visible().len(),
        total = shop.active().len(),
        page = shop.page,
        "headless result"
    );
}

pub fn write(shop: &ShopState, format: OutputFormat, out: &mut impl Write) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            for item in shop.visible() {
                writeln!(out, "{}", display::item_line(item))?;
            }
            if let Some(label) = shop.load_more_label() {
                writeln!(out, "{label}")?;
            }
        }
        OutputFormat::Json => {
            let doc = json!({
                "query": shop.query,
                "filter": shop.filter,
                "page": shop.page,
                "total": shop.active().len(),
                "remaining": shop.remaining(),
                "items": shop.visible(),
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&doc)?)?;
        }
    }
    Ok(())
}
