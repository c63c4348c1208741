//! # Fastscroll
//!
//! Demo editor for the fast scroller: a thumb that appears while the text
//! scrolls, fades out after two seconds, and can be dragged to jump through
//! the file.
//!
//! ## Quick Start
//!
//! ```bash
//! # Run with generated sample text
//! cargo run
//!
//! # Run with a file
//! cargo run -- path/to/file.rs
//!
//! # Custom config and theme
//! cargo run -- --config scroller.toml --theme theme.json -vv
//! ```

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fastscroll_core::Config;
use fastscroll_ui::{run, Flags, Theme};

/// Fastscroll - a fast scroller demo editor
#[derive(Parser, Debug)]
#[command(name = "fastscroll")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File to open
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Config file (defaults to the user config directory)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Theme file (JSON)
    #[arg(short, long, value_name = "PATH")]
    theme: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    let log_level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    tracing::info!("Starting Fastscroll v{}", env!("CARGO_PKG_VERSION"));

    let flags = build_flags(&args)?;

    // Run the application
    run(flags).map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}

/// Resolves config, theme and initial text from the arguments.
fn build_flags(args: &Args) -> anyhow::Result<Flags> {
    let config = match &args.config {
        Some(path) => Config::load_from(path)
            .map_err(|e| anyhow::anyhow!("Failed to load config {}: {}", path.display(), e))?,
        None => Config::load(),
    };

    let theme = match &args.theme {
        Some(path) => Theme::load(path)
            .map_err(|e| anyhow::anyhow!("Failed to load theme {}: {}", path.display(), e))?,
        None => Theme::by_name(&config.editor.theme),
    };

    let (file_name, text) = match &args.file {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| path.display().to_string());
            (Some(name), Some(text))
        }
        None => (None, None),
    };

    Ok(Flags {
        file_name,
        text,
        config,
        theme,
    })
}
