//! Lookups against an extracted [`Doc`]

use serde::Serialize;
use tracing::debug;

use super::command::{help_text, Query};
use super::format::{function_entry, type_entry, Answer};
use crate::docs::{Doc, FunctionKind};
use crate::error::QueryError;
use crate::glob::{self, Pattern};
use crate::metrics;

/// Separator placed between the entries of a multi-match answer
const ENTRY_SEPARATOR: &str = "\n\n";

/// Counts and overview of a package
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageSummary {
    pub package: String,
    pub url: String,
    pub type_count: usize,
    pub function_count: usize,
    pub overview: String,
}

impl PackageSummary {
    pub fn to_answer(&self) -> Answer {
        let mut body = format!(
            "Types: {}\nFunctions: {}",
            self.type_count, self.function_count
        );
        if !self.overview.is_empty() {
            body.push_str(&format!("\nOverview: {}", self.overview));
        }
        Answer::new(format!("Info for {}", self.package), &self.url, body)
    }
}

/// Summarize a package
pub fn package_summary(doc: &Doc) -> PackageSummary {
    PackageSummary {
        package: doc.name.clone(),
        url: doc.url.clone(),
        type_count: doc.types.len(),
        function_count: doc.functions.len(),
        overview: doc.overview.clone(),
    }
}

/// Look up a plain function, or failing that a type, by case-insensitive name
///
/// ASCII case folding is enough: the signature classifier only admits ASCII
/// identifiers.
pub fn query_exact(doc: &Doc, name: &str) -> Result<Answer, QueryError> {
    let mut entries = Vec::new();
    let mut canonical = None;

    for function in doc
        .functions
        .iter()
        .filter(|f| f.kind == FunctionKind::Plain && f.name.eq_ignore_ascii_case(name))
    {
        canonical.get_or_insert(function.name.as_str());
        entries.push(function_entry(function));
    }

    if entries.is_empty() {
        for ty in doc.types.iter().filter(|t| t.name.eq_ignore_ascii_case(name)) {
            canonical.get_or_insert(ty.name.as_str());
            entries.push(type_entry(ty));
        }
    }

    let canonical = canonical.ok_or_else(|| QueryError::NoSymbol {
        package: doc.name.clone(),
        name: name.to_string(),
    })?;

    Ok(Answer::new(
        format!("{}: {}", doc.name, canonical),
        format!("{}#{}", doc.url, canonical),
        entries.join(ENTRY_SEPARATOR),
    ))
}

/// Look up a method by case-insensitive receiver type and name
pub fn query_method(doc: &Doc, receiver: &str, name: &str) -> Result<Answer, QueryError> {
    let matches: Vec<_> = doc
        .functions
        .iter()
        .filter(|f| {
            f.is_method()
                && f.method_of.eq_ignore_ascii_case(receiver)
                && f.name.eq_ignore_ascii_case(name)
        })
        .collect();

    let first = matches.first().ok_or_else(|| QueryError::NoMethod {
        package: doc.name.clone(),
        receiver: receiver.to_string(),
        name: name.to_string(),
    })?;

    let body = matches
        .iter()
        .map(|f| function_entry(f))
        .collect::<Vec<_>>()
        .join(ENTRY_SEPARATOR);

    Ok(Answer::new(
        format!("{}: func ({}) {}", doc.name, first.method_of, first.name),
        format!("{}#{}.{}", doc.url, first.method_of, first.name),
        body,
    ))
}

/// Plain functions and types whose names match a glob pattern
pub fn query_glob(doc: &Doc, pattern: &str) -> Result<Answer, QueryError> {
    let compiled = glob::compile(pattern)?;
    query_glob_compiled(doc, &compiled)
}

fn query_glob_compiled(doc: &Doc, pattern: &Pattern) -> Result<Answer, QueryError> {
    let functions = doc
        .functions
        .iter()
        .filter(|f| f.kind == FunctionKind::Plain && pattern.matches(&f.name))
        .map(function_entry);
    let types = doc
        .types
        .iter()
        .filter(|t| pattern.matches(&t.name))
        .map(type_entry);

    let entries: Vec<String> = functions.chain(types).collect();
    debug!(pattern = %pattern.as_str(), matches = entries.len(), "Glob query");

    if entries.is_empty() {
        return Err(QueryError::NoMatches {
            package: doc.name.clone(),
            pattern: pattern.as_str().to_string(),
        });
    }

    Ok(Answer::new(
        format!("Matches for `{}` in package {}", pattern.as_str(), doc.name),
        &doc.url,
        entries.join(ENTRY_SEPARATOR),
    ))
}

/// Methods whose receiver and name match two independent glob patterns
pub fn query_method_glob(
    doc: &Doc,
    receiver_pattern: &str,
    name_pattern: &str,
) -> Result<Answer, QueryError> {
    let receiver = glob::compile(receiver_pattern)?;
    let name = glob::compile(name_pattern)?;

    let entries: Vec<String> = doc
        .functions
        .iter()
        .filter(|f| f.is_method() && receiver.matches(&f.method_of) && name.matches(&f.name))
        .map(function_entry)
        .collect();

    if entries.is_empty() {
        return Err(QueryError::NoMatches {
            package: doc.name.clone(),
            pattern: format!("{}.{}", receiver_pattern, name_pattern),
        });
    }

    Ok(Answer::new(
        format!(
            "Matches for `{}.{}` in package {}",
            receiver_pattern, name_pattern, doc.name
        ),
        &doc.url,
        entries.join(ENTRY_SEPARATOR),
    ))
}

/// Answer a parsed query, choosing the glob variant when a name contains
/// pattern characters
pub fn answer(doc: &Doc, query: &Query) -> Result<Answer, QueryError> {
    metrics::QUERIES.inc();

    if doc.is_empty() && *query != Query::Help {
        return Err(QueryError::UnknownPackage(doc.name.clone()));
    }

    match query {
        Query::Help => Ok(Answer::new("Docs help", &doc.url, help_text(""))),
        Query::Package { .. } => Ok(package_summary(doc).to_answer()),
        Query::Symbol { name, .. } if glob::is_glob(name) => query_glob(doc, name),
        Query::Symbol { name, .. } => query_exact(doc, name),
        Query::Method { receiver, name, .. }
            if glob::is_glob(receiver) || glob::is_glob(name) =>
        {
            query_method_glob(doc, receiver, name)
        }
        Query::Method { receiver, name, .. } => query_method(doc, receiver, name),
    }
}
