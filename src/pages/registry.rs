use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, info};

use super::session::{PageSession, RenderedPage};
use super::PageKind;
use crate::config::PagesConfig;
use crate::docs::Doc;
use crate::error::PageError;
use crate::metrics;

/// Initial capacity of the session map
const SESSION_INITIAL_CAPACITY: usize = 16;

/// Result of a paging action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    /// The page changed
    Moved(RenderedPage),
    /// Already at the boundary, the page is shown again as is
    Unchanged(RenderedPage),
    /// Unknown key or not the owner; nothing happened
    Rejected,
}

impl PageOutcome {
    pub fn page(&self) -> Option<&RenderedPage> {
        match self {
            PageOutcome::Moved(page) | PageOutcome::Unchanged(page) => Some(page),
            PageOutcome::Rejected => None,
        }
    }

    pub fn into_page(self) -> Option<RenderedPage> {
        match self {
            PageOutcome::Moved(page) | PageOutcome::Unchanged(page) => Some(page),
            PageOutcome::Rejected => None,
        }
    }
}

/// Result of a dismissal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissOutcome {
    Dismissed,
    Rejected,
}

#[derive(Clone, Copy)]
enum Direction {
    Forward,
    Back,
}

/// Owner-guarded paging sessions keyed by an opaque display key.
///
/// All operations, including the idle sweep, go through one mutex, so actions
/// on the same key are serialized.
pub struct PageRegistry {
    sessions: Mutex<HashMap<String, PageSession>>,
    page_size: usize,
    idle_timeout: Duration,
}

impl PageRegistry {
    pub fn new(page_size: usize, idle_timeout: Duration) -> Self {
        Self {
            sessions: Mutex::new(HashMap::with_capacity(SESSION_INITIAL_CAPACITY)),
            page_size: page_size.max(1),
            idle_timeout,
        }
    }

    pub fn from_config(config: &PagesConfig) -> Self {
        Self::new(
            config.page_size,
            Duration::from_secs(config.idle_timeout_secs),
        )
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn idle_timeout(&self) -> Duration {
        self.idle_timeout
    }

    /// Open a session on page 1, replacing any session under the same key
    pub async fn create(
        &self,
        key: impl Into<String>,
        owner: impl Into<String>,
        kind: PageKind,
        doc: Arc<Doc>,
    ) -> Result<RenderedPage, PageError> {
        let key = key.into();
        let package = doc.name.clone();
        let session = PageSession::new(key.clone(), owner.into(), kind, doc, self.page_size)
            .ok_or(PageError::Empty { package, kind })?;
        let page = session.render();

        let mut sessions = self.sessions.lock().await;
        if sessions.insert(key.clone(), session).is_some() {
            debug!(key = %key, "Replaced existing page session");
        }
        metrics::PAGE_SESSIONS_ACTIVE.set(sessions.len() as f64);

        debug!(key = %key, kind = %kind, pages = page.page_limit, "Opened page session");
        Ok(page)
    }

    /// Move the owner's session one page forward
    pub async fn advance(&self, key: &str, requester: &str) -> PageOutcome {
        self.step(key, requester, Direction::Forward).await
    }

    /// Move the owner's session one page back
    pub async fn retreat(&self, key: &str, requester: &str) -> PageOutcome {
        self.step(key, requester, Direction::Back).await
    }

    async fn step(&self, key: &str, requester: &str, direction: Direction) -> PageOutcome {
        let mut sessions = self.sessions.lock().await;
        let Some(session) = sessions.get_mut(key) else {
            return PageOutcome::Rejected;
        };
        if !session.is_owned_by(requester) {
            debug!(key = %key, requester = %requester, "Ignoring paging action from non-owner");
            return PageOutcome::Rejected;
        }

        session.touch();
        let moved = match direction {
            Direction::Forward => session.next_page(),
            Direction::Back => session.previous_page(),
        };

        if moved {
            PageOutcome::Moved(session.render())
        } else {
            PageOutcome::Unchanged(session.render())
        }
    }

    /// Remove the owner's session
    pub async fn dismiss(&self, key: &str, requester: &str) -> DismissOutcome {
        let mut sessions = self.sessions.lock().await;
        match sessions.get(key) {
            Some(session) if session.is_owned_by(requester) => {
                sessions.remove(key);
                metrics::PAGE_SESSIONS_ACTIVE.set(sessions.len() as f64);
                debug!(key = %key, "Dismissed page session");
                DismissOutcome::Dismissed
            }
            _ => DismissOutcome::Rejected,
        }
    }

    /// Render the current page of a session without touching it
    pub async fn render(&self, key: &str) -> Option<RenderedPage> {
        let sessions = self.sessions.lock().await;
        sessions.get(key).map(PageSession::render)
    }

    /// Snapshot of a session
    pub async fn get(&self, key: &str) -> Option<PageSession> {
        let sessions = self.sessions.lock().await;
        sessions.get(key).cloned()
    }

    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.lock().await.is_empty()
    }

    /// Drop every session idle for longer than the timeout, returning how
    /// many were removed
    pub async fn sweep(&self) -> usize {
        let now = Instant::now();
        let mut sessions = self.sessions.lock().await;
        let before = sessions.len();

        sessions.retain(|key, session| {
            let keep = !session.is_idle(now, self.idle_timeout);
            if !keep {
                debug!(key = %key, "Expiring idle page session");
            }
            keep
        });

        let removed = before - sessions.len();
        metrics::PAGE_SESSIONS_ACTIVE.set(sessions.len() as f64);
        if removed > 0 {
            metrics::PAGE_SESSIONS_EXPIRED.inc_by(removed as f64);
            info!(removed, remaining = sessions.len(), "Swept idle page sessions");
        }
        removed
    }

    /// Spawn a task that sweeps every `interval` until the handle is aborted
    pub fn start_sweeper(self: Arc<Self>, interval: Duration) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                ticker.tick().await;
                self.sweep().await;
            }
        })
    }
}
