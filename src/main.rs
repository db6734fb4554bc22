//! postpager - Entry Point

use clap::Parser;
use postpager::config::{
    apply_cli_overrides, apply_env_overrides, default_location_path, load_config_with_precedence,
    merge_config, LocationStore, PageSizing,
};
use postpager::model::{Route, SourceError, UserId};
use postpager::source::{JsonFileBackend, WorkerSource};
use postpager::state::AppState;
use postpager::view::{ColorConfig, Styles};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Width assumed when the terminal size cannot be read.
const FALLBACK_WIDTH: u16 = 80;

/// postpager - browse a blog's posts in the terminal
#[derive(Parser, Debug)]
#[command(name = "postpager")]
#[command(version)]
#[command(about = "Terminal front-end for browsing blog posts page by page")]
pub struct Args {
    /// JSON file holding an array of posts
    pub data_file: Option<PathBuf>,

    /// Signed-in user id for "my page"
    #[arg(short, long)]
    pub user: Option<String>,

    /// Location to open, e.g. "/" or "/mypage?tab=posts"
    #[arg(long)]
    pub location: Option<String>,

    /// Simulated latency added to every fetch, in milliseconds
    #[arg(long)]
    pub latency_ms: Option<u64>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = load_config_with_precedence(args.config.clone())?;
        let merged = merge_config(config_file);
        let with_env = apply_env_overrides(merged);
        apply_cli_overrides(
            with_env,
            args.data_file.clone(),
            args.user.clone(),
            args.latency_ms,
        )
    };

    postpager::logging::init(&config.log_file_path)?;
    info!(config = ?config, "Configuration loaded and resolved");

    let data_file = config.data_file.clone().ok_or(SourceError::NoData)?;
    let backend = Arc::new(JsonFileBackend::new(&data_file)?);
    let user = config.user_id.as_deref().map(UserId::new).transpose()?;

    // Page size is fixed for the session from the width at startup.
    let sizing = PageSizing::from_config(&config)?;
    let width = crossterm::terminal::size()
        .map(|(w, _)| w)
        .unwrap_or(FALLBACK_WIDTH);
    let page_size = sizing.page_size_for(width);
    info!(width, page_size = page_size.get(), class = ?sizing.classify(width), "page size chosen");

    let location_store = default_location_path().map(LocationStore::new);
    let initial = match &args.location {
        Some(location) => Route::parse(location)?,
        None => location_store
            .as_ref()
            .and_then(LocationStore::load)
            .unwrap_or_default(),
    };

    let latency = Duration::from_millis(config.fetch_latency_ms);
    let app_state = AppState::new(
        || WorkerSource::new(Arc::clone(&backend), latency),
        page_size,
        user,
        initial,
    );
    let styles = Styles::with_color_config(ColorConfig::from_env_and_args(args.no_color));

    postpager::view::run_with_state(app_state, styles, location_store)?;

    Ok(())
}
