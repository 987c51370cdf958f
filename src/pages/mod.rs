//! Paged browsing of a package's functions or types.
//!
//! A [`PageRegistry`] tracks one [`PageSession`] per displayed listing. Only
//! the owner of a session may move it; sessions nobody touched for the idle
//! timeout are dropped by a periodic sweep.

pub mod registry;
pub mod session;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::docs::Doc;

pub use registry::{DismissOutcome, PageOutcome, PageRegistry};
pub use session::{PageSession, RenderedPage};

/// Which collection of a [`Doc`] a session pages through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    Functions,
    Types,
}

impl PageKind {
    /// Number of entries of this kind in `doc`
    pub fn count(&self, doc: &Doc) -> usize {
        match self {
            PageKind::Functions => doc.functions.len(),
            PageKind::Types => doc.types.len(),
        }
    }

    /// Names of the entries in `range`, clamped to the collection
    pub fn names(&self, doc: &Doc, start: usize, end: usize) -> Vec<String> {
        let end = end.min(self.count(doc));
        if start >= end {
            return Vec::new();
        }
        match self {
            PageKind::Functions => doc.functions[start..end]
                .iter()
                .map(|f| f.name.clone())
                .collect(),
            PageKind::Types => doc.types[start..end]
                .iter()
                .map(|t| t.name.clone())
                .collect(),
        }
    }

    /// Fragment of the package page listing this collection
    pub fn anchor(&self) -> &'static str {
        match self {
            PageKind::Functions => "#pkg-functions",
            PageKind::Types => "#pkg-types",
        }
    }
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageKind::Functions => write!(f, "functions"),
            PageKind::Types => write!(f, "types"),
        }
    }
}
