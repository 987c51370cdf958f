//! Formatting of query results into display text

use serde::Serialize;

use crate::docs::{Function, Type};

/// Hard ceiling of the display surface, in characters
pub const MAX_RESPONSE_CHARS: usize = 2000;

/// Characters kept from an over-long body before the notice is appended
pub const TRUNCATED_KEEP_CHARS: usize = 1900;

/// Appended to a body that was cut down to [`TRUNCATED_KEEP_CHARS`]
pub const TRUNCATION_NOTICE: &str =
    "\n\n*note: the message was trimmed to fit the 2k character limit*";

/// Formatted result of a query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Answer {
    pub title: String,
    /// Link to the documented symbol or package
    pub url: String,
    /// Display text, never longer than [`MAX_RESPONSE_CHARS`]
    pub body: String,
}

impl Answer {
    /// Build an answer, truncating the body to the display ceiling
    pub fn new(title: impl Into<String>, url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            body: truncate(body.into()),
        }
    }
}

/// Cut `text` down to the display ceiling.
///
/// Lengths are counted in characters, so a cut never splits one.
pub fn truncate(text: String) -> String {
    if text.chars().count() <= MAX_RESPONSE_CHARS {
        return text;
    }

    let mut truncated: String = text.chars().take(TRUNCATED_KEEP_CHARS).collect();
    truncated.push_str(TRUNCATION_NOTICE);
    truncated
}

/// `signature`, first comment paragraph, and the example if there is one
pub fn function_entry(function: &Function) -> String {
    let mut entry = format!("`{}`\n{}", function.signature, function.synopsis());
    if !function.example.is_empty() {
        entry.push_str(&format!("\n\nExample:\n```go\n{}\n```", function.example));
    }
    entry
}

/// Fenced declaration followed by the first comment paragraph
pub fn type_entry(ty: &Type) -> String {
    format!("```go\n{}\n```\n{}", ty.signature, ty.synopsis())
}
