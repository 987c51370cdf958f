//! Error types shared across the documentation pipeline.

use thiserror::Error;

use crate::pages::PageKind;

/// Errors raised while obtaining a package's documentation
#[derive(Debug, Error)]
pub enum DocError {
    /// The page could not be retrieved (transport failure, timeout, bad body)
    #[error("could not retrieve package `{package}`: {reason}")]
    Fetch { package: String, reason: String },

    /// The package identifier is empty after normalization
    #[error("invalid package identifier `{0}`")]
    InvalidPackage(String),
}

/// A glob pattern the regex engine refused after translation
#[derive(Debug, Error)]
#[error("invalid pattern `{pattern}`")]
pub struct CompileError {
    pub pattern: String,
    #[source]
    pub source: regex::Error,
}

/// Errors and expected "nothing found" outcomes of a query
#[derive(Debug, Error)]
pub enum QueryError {
    #[error(transparent)]
    InvalidPattern(#[from] CompileError),

    /// The page had no documentation at all, usually an unknown package
    #[error("package `{0}` not found")]
    UnknownPackage(String),

    #[error("no type or function `{name}` found in package `{package}`")]
    NoSymbol { package: String, name: String },

    #[error("package `{package}` does not have `func ({receiver}) {name}`")]
    NoMethod {
        package: String,
        receiver: String,
        name: String,
    },

    #[error("no matches found for the pattern `{pattern}` in package `{package}`")]
    NoMatches { package: String, pattern: String },

    #[error("too many arguments ({0}), expected at most 3")]
    TooManyArguments(usize),
}

impl QueryError {
    /// True for outcomes where the query was valid but matched nothing
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            QueryError::UnknownPackage(_)
                | QueryError::NoSymbol { .. }
                | QueryError::NoMethod { .. }
                | QueryError::NoMatches { .. }
        )
    }
}

/// Errors raised when opening a paging session
#[derive(Debug, Error)]
pub enum PageError {
    #[error("package `{package}` has no {kind} to page through")]
    Empty { package: String, kind: PageKind },
}
