use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use gameshell::config::Config;
use gameshell::logging;
use gameshell::router::{RouteTable, Router};
use gameshell::store::SessionStore;
use gameshell::ui;

/// Terminal application shell: a home screen, a game screen, and the
/// player name shared between them.
#[derive(Parser, Debug)]
#[command(name = "gameshell", version, about)]
struct Args {
    /// Config file path. Defaults to the platform config directory.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pre-seed the player name, overriding the config value.
    #[arg(long)]
    name: Option<String>,

    /// Append tracing output to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(args.log_file.as_deref())?;

    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let store = SessionStore::new();
    if let Some(name) = args.name.or_else(|| config.player_name.clone()) {
        store.set_name(name);
    }

    let router = Router::new(RouteTable::standard(), &config.start_path)
        .with_context(|| format!("start path '{}' is not routable", config.start_path))?;

    tracing::info!(start_path = %config.start_path, "starting ui");
    ui::run(router, store, Duration::from_millis(config.tick_rate_ms))
}
