//! Glob pattern compilation for fuzzy symbol lookups.
//!
//! Translates the small wildcard syntax accepted in queries into an anchored,
//! case-insensitive regular expression:
//!
//! | glob | regex           | meaning                          |
//! |------|-----------------|----------------------------------|
//! | `*`  | `[a-zA-Z0-9_]*` | zero or more identifier chars    |
//! | `?`  | `.*`            | any sequence (not a single char) |
//! | `.`  | `\.`            | a literal dot                    |
//! | `\x` | `\x`            | escape copied verbatim           |
//!
//! Every other character is copied as-is, so regex meta characters such as
//! `|` or `[` keep their regex meaning.

use regex::Regex;

use crate::error::CompileError;

/// Characters that turn a query into a glob query
const PATTERN_CHARS: &[char] = &['*', '?', '|', '[', ']', '(', ')', '+', '{', '}', '-'];

/// A compiled glob pattern
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    /// Whole-string, case-insensitive match
    pub fn matches(&self, s: &str) -> bool {
        self.regex.is_match(s)
    }

    /// The glob text this pattern was compiled from
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// The translated regular expression
    pub fn regex(&self) -> &Regex {
        &self.regex
    }
}

/// Compile a glob pattern into a [`Pattern`].
///
/// Fails only when the regex engine rejects the translation, e.g. for a
/// trailing `\` or an unbalanced `[`.
pub fn compile(pattern: &str) -> Result<Pattern, CompileError> {
    let translated = translate(pattern);
    let regex = Regex::new(&translated).map_err(|source| CompileError {
        pattern: pattern.to_string(),
        source,
    })?;

    Ok(Pattern {
        source: pattern.to_string(),
        regex,
    })
}

/// Report whether a query string should be treated as a glob
pub fn is_glob(s: &str) -> bool {
    s.contains(PATTERN_CHARS)
}

fn translate(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() * 2 + 12);
    out.push_str("(?i)^(?:");

    let mut chars = pattern.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '*' => out.push_str("[a-zA-Z0-9_]*"),
            '?' => out.push_str(".*"),
            '.' => out.push_str("\\."),
            '\\' => {
                out.push('\\');
                // A trailing backslash escapes the closing paren and the
                // regex engine reports the group as unclosed.
                if let Some(next) = chars.next() {
                    out.push(next);
                }
            }
            other => out.push(other),
        }
    }

    out.push_str(")$");
    out
}
