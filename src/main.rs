mod config;
mod debounce;
mod logging;
mod nav;
mod rows;
mod tui;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use dotenvy::dotenv;
use tracing::info;

use crate::config::{AppConfig, FileConfig};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "searchbox",
    version,
    about = "Debounced search box over a URL-backed paginated list (TUI)"
)]
struct Cli {
    /// Start location, e.g. "/dashboard/invoices?query=abc&page=2"
    location: Option<String>,

    /// Input placeholder text
    #[arg(long)]
    placeholder: Option<String>,

    /// Debounce quiet interval in milliseconds
    #[arg(long)]
    debounce_ms: Option<u64>,

    /// Rows per page
    #[arg(long)]
    page_size: Option<usize>,

    /// Color theme (dark|light)
    #[arg(long)]
    theme: Option<String>,

    /// Rows file, one row per line (built-in sample data when omitted)
    #[arg(long)]
    rows_file: Option<PathBuf>,

    /// Log level (error,warn,info,debug,trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Cli {
    fn overrides(&self) -> FileConfig {
        FileConfig {
            placeholder: self.placeholder.clone(),
            debounce_ms: self.debounce_ms,
            page_size: self.page_size,
            theme: self.theme.clone(),
            rows_file: self.rows_file.clone(),
            start_location: self.location.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();
    logging::init_logging(&cli.log_level)?;

    let cfg = AppConfig::resolve(cli.overrides())?;
    info!(?cfg, "app config");

    tui::run(cfg)
}
