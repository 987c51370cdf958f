//! Typed model of one package documentation page

use serde::Serialize;

/// Placeholder shown when an entry has no doc comment
pub const NO_INFORMATION: &str = "*no information available*";

/// Documentation snapshot of a single package.
///
/// Built once by the extractor and shared read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Doc {
    /// Canonical URL the page was fetched from
    pub url: String,
    /// Package identifier, e.g. `strings` or `github.com/user/repo`
    pub name: String,
    /// Overview paragraphs, each terminated by a line break
    pub overview: String,
    /// Functions and methods in markup order
    pub functions: Vec<Function>,
    /// Types in markup order
    pub types: Vec<Type>,
}

impl Doc {
    /// True when the page yielded no documentation at all
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty() && self.types.is_empty() && self.overview.is_empty()
    }
}

/// Whether a function is free-standing or bound to a receiver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FunctionKind {
    Plain,
    Method,
}

impl std::fmt::Display for FunctionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FunctionKind::Plain => write!(f, "function"),
            FunctionKind::Method => write!(f, "method"),
        }
    }
}

/// An exported function or method
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Function {
    pub name: String,
    pub kind: FunctionKind,
    /// Declaration on a single line
    pub signature: String,
    /// Receiver type name, empty for plain functions
    pub method_of: String,
    /// Runnable example code, empty if the page has none
    pub example: String,
    pub comments: Vec<String>,
}

impl Function {
    /// Create a plain function
    pub fn plain(name: impl Into<String>, signature: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: FunctionKind::Plain,
            signature: signature.into(),
            method_of: String::new(),
            example: String::new(),
            comments: Vec::new(),
        }
    }

    /// Create a method bound to `receiver`
    pub fn method(
        receiver: impl Into<String>,
        name: impl Into<String>,
        signature: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: FunctionKind::Method,
            signature: signature.into(),
            method_of: receiver.into(),
            example: String::new(),
            comments: Vec::new(),
        }
    }

    pub fn with_comments(mut self, comments: Vec<String>) -> Self {
        self.comments = comments;
        self
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = example.into();
        self
    }

    pub fn is_method(&self) -> bool {
        self.kind == FunctionKind::Method
    }

    /// First comment paragraph, or the no-information placeholder
    pub fn synopsis(&self) -> &str {
        self.comments
            .first()
            .map(String::as_str)
            .unwrap_or(NO_INFORMATION)
    }
}

/// An exported type declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Type {
    pub name: String,
    /// Keyword after the name: `struct`, `interface`, or an alias target
    pub kind: String,
    /// Full declaration, may span several lines
    pub signature: String,
    pub comments: Vec<String>,
}

impl Type {
    pub fn new(
        name: impl Into<String>,
        kind: impl Into<String>,
        signature: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            signature: signature.into(),
            comments: Vec::new(),
        }
    }

    pub fn with_comments(mut self, comments: Vec<String>) -> Self {
        self.comments = comments;
        self
    }

    /// First comment paragraph, or the no-information placeholder
    pub fn synopsis(&self) -> &str {
        self.comments
            .first()
            .map(String::as_str)
            .unwrap_or(NO_INFORMATION)
    }

    /// All comment paragraphs joined with line breaks
    pub fn full_comment(&self) -> String {
        match self.comments.len() {
            0 => format!("{}\n", NO_INFORMATION),
            1 => format!("{}\n", self.comments[0]),
            _ => self.comments.join("\n"),
        }
    }
}
