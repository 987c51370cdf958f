pub mod cli;
pub mod commands;
pub mod config;
pub mod docs;
pub mod error;
pub mod glob;
pub mod logging;
pub mod metrics;
pub mod pages;
pub mod query;
pub mod web;

pub use config::Config;
pub use docs::{Doc, DocService};
pub use error::{CompileError, DocError, PageError, QueryError};
pub use pages::{PageKind, PageRegistry};
