use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use pkgdoc::cli::{Cli, Commands};
use pkgdoc::config::Config;
use pkgdoc::logging::init_logging;
use pkgdoc::metrics;
use pkgdoc::pages::PageKind;

#[tokio::main]
async fn main() -> Result<()> {
    let root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    // Load configuration (if available, otherwise use defaults)
    let config = Config::load(&root).unwrap_or_default();

    // The guard MUST be held until program exit to ensure logs are flushed
    let _logging_guard = init_logging(&config.logging, &root)?;

    tracing::debug!("Loaded configuration from: {}", root.display());

    metrics::register_metrics();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { force } => {
            pkgdoc::commands::init::run(force).await?;
        }
        Commands::Doc { args } => {
            pkgdoc::commands::doc::run(&config, &args).await?;
        }
        Commands::Funcs { package } => {
            pkgdoc::commands::pages::run(&config, &package, PageKind::Functions).await?;
        }
        Commands::Types { package } => {
            pkgdoc::commands::pages::run(&config, &package, PageKind::Types).await?;
        }
        Commands::Serve { host, port } => {
            pkgdoc::commands::serve::run(config, host, port).await?;
        }
    }

    Ok(())
}
