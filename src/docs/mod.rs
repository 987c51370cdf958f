//! Package documentation retrieval and extraction
//!
//! This module turns a pkg.go.dev page into a typed [`Doc`]: the page is
//! fetched once through a [`DocFetcher`], its markup is walked by the
//! extractor, and each declaration is classified by its signature shape.

pub mod extract;
pub mod fetch;
pub mod model;
pub mod service;
pub mod signature;

pub use extract::extract;
pub use fetch::{DocFetcher, FetchedPage, HttpFetcher};
pub use model::{Doc, Function, FunctionKind, Type, NO_INFORMATION};
pub use service::DocService;
pub use signature::{classify, Signature};
