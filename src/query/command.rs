//! Parsing of query arguments into a typed [`Query`]

use serde::Serialize;

use crate::error::QueryError;

/// What a caller asked for, decided by the number and shape of arguments
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Query {
    /// No arguments: usage examples
    Help,
    /// `strings`
    Package { package: String },
    /// `strings Builder`, `strings Write*`
    Symbol { package: String, name: String },
    /// `strings Builder.WriteString`, `strings Builder WriteString`
    Method {
        package: String,
        receiver: String,
        name: String,
    },
}

impl Query {
    /// Parse the arguments that follow the command name.
    ///
    /// A single argument whose last path segment contains a dot is read as
    /// `package.Symbol` (`io.Reader`, `net/http.Client.Do`), unless the part
    /// after the dot is a major version suffix (`gopkg.in/yaml.v3`).
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<Self, QueryError> {
        let args: Vec<&str> = args
            .iter()
            .map(|a| a.as_ref().trim())
            .filter(|a| !a.is_empty())
            .collect();

        match args.as_slice() {
            [] => Ok(Query::Help),
            [single] => Ok(match split_qualified(single) {
                Some((package, symbol)) => symbol_query(package, symbol),
                None => Query::Package {
                    package: single.to_string(),
                },
            }),
            [package, name] => Ok(symbol_query(package, name)),
            [package, receiver, name] => Ok(Query::Method {
                package: package.to_string(),
                receiver: receiver.to_string(),
                name: name.to_string(),
            }),
            more => Err(QueryError::TooManyArguments(more.len())),
        }
    }

    /// Package the query is about, `None` for [`Query::Help`]
    pub fn package(&self) -> Option<&str> {
        match self {
            Query::Help => None,
            Query::Package { package }
            | Query::Symbol { package, .. }
            | Query::Method { package, .. } => Some(package),
        }
    }
}

fn symbol_query(package: &str, name: &str) -> Query {
    match name.split_once('.') {
        Some((receiver, method)) => Query::Method {
            package: package.to_string(),
            receiver: receiver.to_string(),
            name: method.to_string(),
        },
        None => Query::Symbol {
            package: package.to_string(),
            name: name.to_string(),
        },
    }
}

fn split_qualified(arg: &str) -> Option<(&str, &str)> {
    let segment_start = arg.rfind('/').map(|i| i + 1).unwrap_or(0);
    let dot = segment_start + arg[segment_start..].find('.')?;
    let (package, symbol) = (&arg[..dot], &arg[dot + 1..]);

    if package.is_empty() || symbol.is_empty() || is_version_suffix(symbol) {
        return None;
    }
    Some((package, symbol))
}

fn is_version_suffix(s: &str) -> bool {
    match s.strip_prefix('v') {
        Some(digits) => !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()),
        None => false,
    }
}

/// Usage examples shown for [`Query::Help`]
pub fn help_text(prefix: &str) -> String {
    [
        "strings",
        "strings EqualFold",
        "strings Builder",
        "strings Builder.WriteString",
        "strings Builder.*",
        "strings *.WriteString",
        "io.Reader",
    ]
    .iter()
    .map(|example| format!("{}{}", prefix, example))
    .collect::<Vec<_>>()
    .join("\n")
}
