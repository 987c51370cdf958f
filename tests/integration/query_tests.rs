use pkgdoc::query::{answer, help_text, Query, MAX_RESPONSE_CHARS};
use pkgdoc::{DocError, QueryError};

use crate::helpers::static_fetcher::fixture_service;

async fn ask(args: &[&str]) -> Result<pkgdoc::query::Answer, QueryError> {
    let (_, service) = fixture_service();
    let query = Query::parse(args)?;
    let package = query.package().expect("query names a package");
    let doc = service.get_doc(package).await.expect("fixture package");
    answer(&doc, &query)
}

#[tokio::test]
async fn test_package_info() {
    let answer = ask(&["strings"]).await.unwrap();
    assert_eq!(answer.title, "Info for strings");
    assert!(answer.body.starts_with("Types: 3\nFunctions: 22\nOverview: Package strings"));
}

#[tokio::test]
async fn test_exact_lookup_ignores_case() {
    let answer = ask(&["strings", "equalfold"]).await.unwrap();
    assert_eq!(answer.title, "strings: EqualFold");
    assert_eq!(answer.url, "https://pkg.go.dev/strings#EqualFold");
    assert!(answer.body.starts_with("`func EqualFold(s, t string) bool`\n"));
    assert!(answer.body.contains("```go\nfmt.Println(strings.EqualFold(\"Go\", \"GO\"))\n```"));
}

#[tokio::test]
async fn test_exact_lookup_of_type() {
    let answer = ask(&["strings", "Builder"]).await.unwrap();
    assert_eq!(answer.url, "https://pkg.go.dev/strings#Builder");
    assert!(answer.body.starts_with("```go\ntype Builder struct {\n"));
    assert!(answer.body.ends_with("A Builder is used to efficiently build a string using Write methods."));
}

#[tokio::test]
async fn test_qualified_single_argument() {
    let answer = ask(&["strings.Builder.Len"]).await.unwrap();
    assert_eq!(answer.title, "strings: func (Builder) Len");
    assert_eq!(answer.url, "https://pkg.go.dev/strings#Builder.Len");
    assert_eq!(
        answer.body,
        "`func (b *Builder) Len() int`\nLen returns the number of accumulated bytes."
    );
}

#[tokio::test]
async fn test_method_with_three_arguments() {
    let answer = ask(&["strings", "reader", "read"]).await.unwrap();
    assert_eq!(answer.title, "strings: func (Reader) Read");
}

#[tokio::test]
async fn test_method_glob_across_receivers() {
    let answer = ask(&["strings", "*.WriteString"]).await.unwrap();
    assert_eq!(answer.title, "Matches for `*.WriteString` in package strings");
    assert!(answer.body.contains("func (b *Builder) WriteString"));
    assert!(answer.body.contains("func (r *Replacer) WriteString"));
    assert_eq!(answer.body.matches("\n\n`func").count(), 1);
}

#[tokio::test]
async fn test_name_glob_lists_functions_and_types() {
    let answer = ask(&["strings", "Has*"]).await.unwrap();
    assert!(answer.body.contains("func HasPrefix"));
    assert!(answer.body.contains("func HasSuffix"));
    assert!(!answer.body.contains("func Index"));

    let answer = ask(&["strings", "Re*"]).await.unwrap();
    assert!(answer.body.contains("type Reader struct"));
    assert!(answer.body.contains("type Replacer struct"));
    // methods are only listed through a receiver pattern
    assert!(!answer.body.contains("func (r *Reader) Read"));
}

#[tokio::test]
async fn test_not_found_outcomes() {
    let err = ask(&["strings", "Nope"]).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(
        err.to_string(),
        "no type or function `Nope` found in package `strings`"
    );

    let err = ask(&["strings", "Builder.Nope"]).await.unwrap_err();
    assert!(matches!(err, QueryError::NoMethod { .. }));

    let err = ask(&["strings", "Zz*"]).await.unwrap_err();
    assert!(matches!(err, QueryError::NoMatches { .. }));
}

#[tokio::test]
async fn test_invalid_pattern_is_not_a_not_found() {
    let err = ask(&["strings", "Has("]).await.unwrap_err();
    assert!(matches!(err, QueryError::InvalidPattern(_)));
    assert!(!err.is_not_found());
}

#[tokio::test]
async fn test_answers_stay_within_limit() {
    let answer = ask(&["strings", "?"]).await.unwrap();
    assert!(answer.body.chars().count() <= MAX_RESPONSE_CHARS);
}

#[tokio::test]
async fn test_doc_is_fetched_once() {
    let (fetcher, service) = fixture_service();

    let first = service.get_doc("strings").await.unwrap();
    let second = service.get_doc("/strings/").await.unwrap();

    assert_eq!(fetcher.calls(), 1);
    assert_eq!(first.functions.len(), second.functions.len());
}

#[tokio::test]
async fn test_unknown_package_is_a_fetch_error() {
    let (_, service) = fixture_service();
    let err = service.get_doc("does/not/exist").await.unwrap_err();

    assert!(matches!(err, DocError::Fetch { .. }));
    assert!(err.to_string().starts_with("could not retrieve package `does/not/exist`"));
}

#[test]
fn test_help_lists_examples() {
    assert_eq!(Query::parse::<&str>(&[]).unwrap(), Query::Help);
    assert!(help_text("").lines().any(|l| l == "strings *.WriteString"));
}
