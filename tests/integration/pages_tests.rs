use std::sync::Arc;
use std::time::Duration;

use pkgdoc::config::PagesConfig;
use pkgdoc::pages::{DismissOutcome, PageOutcome};
use pkgdoc::{PageKind, PageRegistry};

use crate::helpers::fixtures::strings_doc;

fn registry() -> PageRegistry {
    PageRegistry::from_config(&PagesConfig::default())
}

#[tokio::test]
async fn test_function_pages_of_strings() {
    let registry = registry();
    let first = registry
        .create("msg-1", "alice", PageKind::Functions, strings_doc())
        .await
        .unwrap();

    assert_eq!(first.title, "strings functions");
    assert_eq!(first.url, "https://pkg.go.dev/strings#pkg-functions");
    assert_eq!(first.page_limit, 3);
    assert_eq!(first.lines.len(), 10);
    assert_eq!(first.lines[0], "1. Clone");

    registry.advance("msg-1", "alice").await;
    let last = registry.advance("msg-1", "alice").await.into_page().unwrap();
    assert_eq!(last.footer, "Page 3/3");
    assert_eq!(last.lines, vec!["21. Replace", "22. WriteString"]);
}

#[tokio::test]
async fn test_type_pages_fit_on_one_page() {
    let registry = registry();
    let page = registry
        .create("msg-2", "alice", PageKind::Types, strings_doc())
        .await
        .unwrap();

    assert_eq!(page.url, "https://pkg.go.dev/strings#pkg-types");
    assert_eq!(page.lines, vec!["1. Builder", "2. Reader", "3. Replacer"]);
    assert_eq!(page.footer, "Page 1/1");

    let outcome = registry.advance("msg-2", "alice").await;
    assert!(matches!(outcome, PageOutcome::Unchanged(_)));
}

#[tokio::test]
async fn test_sessions_are_independent() {
    let registry = registry();
    registry
        .create("a", "alice", PageKind::Functions, strings_doc())
        .await
        .unwrap();
    registry
        .create("b", "bob", PageKind::Functions, strings_doc())
        .await
        .unwrap();

    registry.advance("a", "alice").await;
    assert_eq!(registry.get("a").await.unwrap().current_page, 2);
    assert_eq!(registry.get("b").await.unwrap().current_page, 1);

    // bob cannot move or close alice's listing
    assert_eq!(registry.advance("a", "bob").await, PageOutcome::Rejected);
    assert_eq!(registry.dismiss("a", "bob").await, DismissOutcome::Rejected);
    assert_eq!(registry.len().await, 2);
}

#[tokio::test]
async fn test_concurrent_owner_actions_stay_in_bounds() {
    let registry = Arc::new(registry());
    registry
        .create("m", "alice", PageKind::Functions, strings_doc())
        .await
        .unwrap();

    let tasks: Vec<_> = (0..16)
        .map(|i| {
            let registry = Arc::clone(&registry);
            tokio::spawn(async move {
                if i % 3 == 0 {
                    registry.retreat("m", "alice").await
                } else {
                    registry.advance("m", "alice").await
                }
            })
        })
        .collect();

    for task in tasks {
        let outcome = task.await.unwrap();
        let page = outcome.page().unwrap();
        assert!((1..=3).contains(&page.current_page));
    }
}

#[tokio::test(start_paused = true)]
async fn test_sweeper_expires_idle_listing() {
    let config = PagesConfig {
        page_size: 10,
        idle_timeout_secs: 60,
        sweep_interval_secs: 30,
    };
    let registry = Arc::new(PageRegistry::from_config(&config));
    registry
        .create("idle", "alice", PageKind::Functions, strings_doc())
        .await
        .unwrap();
    registry
        .create("busy", "bob", PageKind::Functions, strings_doc())
        .await
        .unwrap();

    let sweeper = Arc::clone(&registry)
        .start_sweeper(Duration::from_secs(config.sweep_interval_secs));

    for _ in 0..4 {
        tokio::time::sleep(Duration::from_secs(25)).await;
        registry.advance("busy", "bob").await;
    }

    assert!(registry.get("idle").await.is_none());
    assert!(registry.get("busy").await.is_some());
    assert_eq!(registry.advance("idle", "alice").await, PageOutcome::Rejected);

    sweeper.abort();
}
