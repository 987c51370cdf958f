//! Shape-based classification of Go declaration lines.
//!
//! Signatures on documentation pages are rendered source text, so they are
//! matched against the three known shapes instead of being parsed.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref RE_FUNC: Regex = Regex::new(r"^func\s([a-zA-Z0-9_]+)\(.*\).*$")
        .expect("Failed to compile function signature regex");
    static ref RE_METHOD: Regex = Regex::new(r"^func\s\(([a-zA-Z0-9\*\s]+)\)\s([a-zA-Z0-9_]+).+$")
        .expect("Failed to compile method signature regex");
    static ref RE_TYPE: Regex = Regex::new(r"^type\s([a-zA-Z0-9_]+)\s([a-zA-Z0-9_]+)")
        .expect("Failed to compile type signature regex");
}

/// Result of classifying one declaration line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signature {
    /// `func Name(...)`
    Plain { name: String },
    /// `func (r *Receiver) Name(...)`
    Method { receiver: String, name: String },
    /// `type Name kind ...`
    TypeDecl { name: String, kind: String },
    Unrecognized,
}

/// Classify a declaration. Multi-line input is classified on its first line.
pub fn classify(line: &str) -> Signature {
    let line = line.lines().next().unwrap_or("").trim_end();

    if let Some(caps) = RE_FUNC.captures(line) {
        return Signature::Plain {
            name: caps[1].to_string(),
        };
    }

    if let Some(caps) = RE_METHOD.captures(line) {
        let receiver = receiver_type(&caps[1]);
        if receiver.is_empty() {
            return Signature::Unrecognized;
        }
        return Signature::Method {
            receiver: receiver.to_string(),
            name: caps[2].to_string(),
        };
    }

    if let Some(caps) = RE_TYPE.captures(line) {
        return Signature::TypeDecl {
            name: caps[1].to_string(),
            kind: caps[2].to_string(),
        };
    }

    Signature::Unrecognized
}

/// Reduce a receiver declaration to its bare type name
///
/// `t *Widget` -> `Widget`, `Widget` -> `Widget`
fn receiver_type(receiver: &str) -> &str {
    let receiver = receiver.trim_end();
    match receiver.rfind(|c: char| c.is_whitespace() || c == '*') {
        Some(idx) => &receiver[idx + 1..],
        None => receiver,
    }
}
