//! Query parsing, resolution against a [`Doc`](crate::docs::Doc), and
//! display formatting.

pub mod command;
pub mod format;
pub mod resolver;

pub use command::{help_text, Query};
pub use format::{Answer, MAX_RESPONSE_CHARS, TRUNCATION_NOTICE};
pub use resolver::{
    answer, package_summary, query_exact, query_glob, query_method, query_method_glob,
    PackageSummary,
};
