//! xcompose-annotate: append codepoint and Unicode name comments to
//! single-character XCompose entries

use anyhow::Result;
use clap::Parser;
use owo_colors::OwoColorize;
use std::path::PathBuf;

use xcompose_annotate::{commands, config};

#[derive(Parser)]
#[command(name = "xcompose-annotate")]
#[command(about = "Annotate XCompose entries with codepoint and Unicode name", long_about = None)]
#[command(version)]
struct Cli {
    /// Compose file to annotate (default: ../dotfiles/.XCompose next to the executable)
    path: Option<PathBuf>,

    /// Show what would be changed without writing the file
    #[arg(short = 'n', long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let path = match cli.path {
        Some(path) => config::resolve(path),
        None => config::default_compose_path()?,
    };
    log::debug!("compose file: {}", path.display());

    if cli.dry_run {
        println!("{}", "(DRY-RUN MODE - no changes will be made)".blue());
    }
    commands::annotate::execute(&path, cli.dry_run)?;

    Ok(())
}
