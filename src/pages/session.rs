use serde::Serialize;
use std::sync::Arc;
use tokio::time::Instant;

use super::PageKind;
use crate::docs::Doc;

/// Paging state of one displayed listing
#[derive(Debug, Clone)]
pub struct PageSession {
    pub key: String,
    pub kind: PageKind,
    /// 1-based, always within `1..=page_limit`
    pub current_page: usize,
    pub page_limit: usize,
    pub page_size: usize,
    pub owner: String,
    pub doc: Arc<Doc>,
    pub last_active: Instant,
}

impl PageSession {
    /// Open a session on the first page, `None` when there is nothing to page
    pub fn new(
        key: String,
        owner: String,
        kind: PageKind,
        doc: Arc<Doc>,
        page_size: usize,
    ) -> Option<Self> {
        let count = kind.count(&doc);
        if count == 0 {
            return None;
        }
        let page_size = page_size.max(1);

        Some(Self {
            key,
            kind,
            current_page: 1,
            page_limit: count.div_ceil(page_size),
            page_size,
            owner,
            doc,
            last_active: Instant::now(),
        })
    }

    pub fn is_owned_by(&self, requester: &str) -> bool {
        self.owner == requester
    }

    /// Mark the session as used now
    pub fn touch(&mut self) {
        self.last_active = Instant::now();
    }

    /// Move one page forward; false when already on the last page
    pub fn next_page(&mut self) -> bool {
        if self.current_page >= self.page_limit {
            return false;
        }
        self.current_page += 1;
        true
    }

    /// Move one page back; false when already on the first page
    pub fn previous_page(&mut self) -> bool {
        if self.current_page <= 1 {
            return false;
        }
        self.current_page -= 1;
        true
    }

    pub fn is_idle(&self, now: Instant, idle_timeout: std::time::Duration) -> bool {
        now.saturating_duration_since(self.last_active) > idle_timeout
    }

    /// Render the current page
    pub fn render(&self) -> RenderedPage {
        let start = (self.current_page - 1) * self.page_size;
        let lines = self
            .kind
            .names(&self.doc, start, start + self.page_size)
            .into_iter()
            .enumerate()
            .map(|(i, name)| format!("{}. {}", start + i + 1, name))
            .collect();

        RenderedPage {
            key: self.key.clone(),
            kind: self.kind,
            title: format!("{} {}", self.doc.name, self.kind),
            url: format!("{}{}", self.doc.url, self.kind.anchor()),
            current_page: self.current_page,
            page_limit: self.page_limit,
            footer: format!("Page {}/{}", self.current_page, self.page_limit),
            lines,
        }
    }
}

/// A page ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedPage {
    pub key: String,
    pub kind: PageKind,
    pub title: String,
    pub url: String,
    pub current_page: usize,
    pub page_limit: usize,
    pub footer: String,
    pub lines: Vec<String>,
}

impl RenderedPage {
    /// Lines followed by the footer, as shown on a terminal
    pub fn to_text(&self) -> String {
        let mut text = format!("{}\n{}\n\n", self.title, self.url);
        for line in &self.lines {
            text.push_str(line);
            text.push('\n');
        }
        text.push('\n');
        text.push_str(&self.footer);
        text
    }
}
