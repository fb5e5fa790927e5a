//! findview - Entry Point

use clap::Parser;
use findview::model::AppError;
use findview::view::ColorConfig;
use std::path::PathBuf;
use tracing::info;

/// findview - browse `find` results in a full-screen terminal UI
#[derive(Parser, Debug)]
#[command(name = "findview")]
#[command(version)]
#[command(about = "Full-screen terminal browser for filesystem search results")]
pub struct Args {
    /// Directory to search from (default: /)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();
    run(args)
}

fn run(args: Args) -> Result<(), AppError> {
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = findview::config::load_config_with_precedence(args.config.clone())?;
        let merged = findview::config::merge_config(config_file);
        let with_env = findview::config::apply_env_overrides(merged);
        findview::config::apply_cli_overrides(with_env, args.root.clone())
    };

    findview::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let colors = ColorConfig::from_env_and_args(args.no_color);
    findview::view::run_with_config(&config, colors)?;

    info!("Exited cleanly");
    Ok(())
}
