//! Interactive paging through a package's functions or types.

use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;
use uuid::Uuid;

use super::doc_service;
use crate::config::Config;
use crate::pages::{DismissOutcome, PageKind, PageOutcome, PageRegistry};

/// Owner identity of the terminal session
fn terminal_owner() -> String {
    std::env::var("USER").unwrap_or_else(|_| "terminal".to_string())
}

/// Run the funcs/types command
///
/// Reads `n` (next), `p` (previous) and `q` (quit) from stdin. A session left
/// idle past the configured timeout is expired by the sweeper and the command
/// ends on the next input.
pub async fn run(config: &Config, package: &str, kind: PageKind) -> Result<()> {
    let docs = doc_service(config)?;
    let doc = docs.get_doc(package).await?;

    let registry = Arc::new(PageRegistry::from_config(&config.pages));
    let sweeper = Arc::clone(&registry)
        .start_sweeper(Duration::from_secs(config.pages.sweep_interval_secs.max(1)));

    let key = Uuid::new_v4().to_string();
    let owner = terminal_owner();

    let first = registry.create(key.clone(), owner.clone(), kind, doc).await?;
    println!("{}", first.to_text());
    print_controls();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines
        .next_line()
        .await
        .context("Failed to read from stdin")?
    {
        let outcome = match line.trim() {
            "n" | "next" => registry.advance(&key, &owner).await,
            "p" | "prev" => registry.retreat(&key, &owner).await,
            "q" | "quit" => {
                if registry.dismiss(&key, &owner).await == DismissOutcome::Rejected {
                    debug!(key = %key, "Session already gone on dismissal");
                }
                break;
            }
            "" => continue,
            other => {
                println!("Unknown command `{}`", other);
                print_controls();
                continue;
            }
        };

        match outcome {
            PageOutcome::Moved(page) => println!("\n{}", page.to_text()),
            PageOutcome::Unchanged(page) => println!("{} (no further pages)", page.footer),
            PageOutcome::Rejected => {
                println!(
                    "Session expired after {}s of inactivity",
                    registry.idle_timeout().as_secs()
                );
                break;
            }
        }
    }

    sweeper.abort();
    Ok(())
}

fn print_controls() {
    println!("\n[n] next  [p] previous  [q] quit");
}
