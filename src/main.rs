mod action;
mod app;
mod config;
mod event;
mod models;
mod panel;
mod publish;
mod tui;
mod ui;
mod utils;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::config::AppConfig;
use crate::models::dataset::Datasets;
use crate::models::state::ViewStateController;

#[derive(Parser, Debug)]
#[command(name = "socialdash", version, about = "A terminal dashboard for social media metrics")]
struct Cli {
    /// Tab to open on (overview, engagement, posts, trends, demographics, publish)
    #[arg(long)]
    tab: Option<String>,

    /// Start in dark mode
    #[arg(long)]
    dark: bool,

    /// Path to config.toml (defaults to ~/.config/socialdash/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = "error")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::load_or_default(cli.config.as_deref());
    let tab = match cli.tab.as_deref() {
        Some(id) => config::resolve_tab(id),
        None => config.initial_tab(),
    };
    let controller = ViewStateController::with_initial(tab, cli.dark || config.dark_mode);
    let datasets = Datasets::load_embedded()?;

    let mut terminal = tui::init()?;

    // Install a panic hook that restores the terminal before printing the panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = tui::restore();
        default_panic(info);
    }));

    let result = app::App::new(controller, datasets)
        .run(&mut terminal, config.tick_rate())
        .await;
    tui::restore()?;

    result
}
