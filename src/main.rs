use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use zyn_core::{config::Config, Catalog, ShopState};

mod headless;

use headless::{HeadlessRequest, OutputFormat};

#[derive(Parser)]
#[command(name = "zynshop", about = "ZYNSHOP — terminal storefront")]
struct Cli {
    /// Write debug logs to /tmp/zynshop-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,

    /// Product catalog JSON file. Defaults to the built-in catalog.
    #[arg(long, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Config file. Defaults to ~/.config/zynshop/config.toml.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print results to stdout instead of starting the TUI.
    #[arg(long)]
    headless: bool,

    /// Search query (headless only).
    #[arg(long, requires = "headless", conflicts_with = "filter")]
    query: Option<String>,

    /// Category filter, `all` for everything (headless only).
    #[arg(long, requires = "headless")]
    filter: Option<String>,

    /// Number of pages to load (headless only).
    #[arg(
        long,
        default_value_t = 1,
        requires = "headless",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pages: u32,

    /// Output format (headless only).
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, requires = "headless")]
    format: OutputFormat,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/zynshop-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("zynshop debug log started — tail -f /tmp/zynshop-debug.log");
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::load().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "could not load config, using defaults");
            Config::defaults()
        }),
    };

    let catalog = match &cli.catalog {
        Some(path) => Catalog::from_path(path)
            .with_context(|| format!("loading catalog {}", path.display()))?,
        None => Catalog::load_default(),
    };
    tracing::debug!(products = catalog.len(), "catalog loaded");

    if cli.headless {
        let mut shop = ShopState::new(catalog, config.catalog.page_size);
        let request = HeadlessRequest {
            query: cli.query,
            filter: cli.filter,
            pages: cli.pages as usize,
        };
        headless::prepare(&mut shop, &request);
        let stdout = std::io::stdout();
        return headless::write(&shop, cli.format, &mut stdout.lock());
    }

    zyn_tui::run(catalog, config)
}
