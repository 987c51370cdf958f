use anyhow::{bail, Result};
use std::env;
use tracing::info;

use crate::Config;

pub async fn run(force: bool) -> Result<()> {
    let root = env::current_dir()?;

    if Config::is_initialized(&root) && !force {
        bail!(
            "pkgdoc is already configured in {:?} (use --force to overwrite)",
            Config::pkgdoc_dir(&root)
        );
    }

    let config = Config::default();
    config.save(&root)?;

    info!("Wrote default configuration to {:?}", Config::config_path(&root));
    println!(
        "✓ Created {} with default configuration",
        Config::config_path(&root).display()
    );
    println!("\nNext steps:");
    println!("  1. Edit .pkgdoc/config.toml to customize settings");
    println!("  2. Run 'pkgdoc doc strings Builder' to query a package");
    println!("  3. Run 'pkgdoc serve' to start the HTTP API");

    Ok(())
}
