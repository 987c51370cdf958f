//! Extraction of a [`Doc`] from pkg.go.dev markup.
//!
//! The extractor reads four structural regions of the page:
//!
//! - `div.Documentation-function`: package level functions
//! - `div.Documentation-typeFunc`: constructors listed under a type
//! - `div.Documentation-typeMethod`: methods listed under a type
//! - `div.Documentation-type`: type declarations
//!
//! plus the paragraphs of `section.Documentation-overview`. Entries whose
//! signature does not classify are skipped individually.

use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, trace};

use super::model::{Doc, Function, Type};
use super::signature::{classify, Signature};

const FUNCTION_CLASS: &str = "Documentation-function";
const TYPE_FUNC_CLASS: &str = "Documentation-typeFunc";
const TYPE_METHOD_CLASS: &str = "Documentation-typeMethod";

lazy_static! {
    static ref FUNCTION_REGIONS: Selector = Selector::parse("div.Documentation-function")
        .expect("BUG: hardcoded function region selector is invalid");
    static ref TYPE_FUNC_REGIONS: Selector = Selector::parse("div.Documentation-typeFunc")
        .expect("BUG: hardcoded constructor region selector is invalid");
    static ref TYPE_METHOD_REGIONS: Selector = Selector::parse("div.Documentation-typeMethod")
        .expect("BUG: hardcoded method region selector is invalid");
    static ref TYPE_REGIONS: Selector = Selector::parse("div.Documentation-type")
        .expect("BUG: hardcoded type region selector is invalid");
    static ref OVERVIEW_PARAGRAPHS: Selector =
        Selector::parse("section.Documentation-overview > p")
            .expect("BUG: hardcoded overview selector is invalid");
    static ref PRE: Selector = Selector::parse("pre").expect("BUG: 'pre' selector is invalid");
    static ref PARAGRAPH: Selector = Selector::parse("p").expect("BUG: 'p' selector is invalid");
    static ref EXAMPLE_CODE: Selector = Selector::parse("textarea.Documentation-exampleCode")
        .expect("BUG: hardcoded example selector is invalid");
}

/// Build a [`Doc`] from the raw markup of a package page.
///
/// Parsing is lenient: markup without any documentation regions yields an
/// empty `Doc`, and it is up to the caller to treat that as "not found".
pub fn extract(markup: &str, source_url: &str, package: &str) -> Doc {
    let html = Html::parse_document(markup);

    // Package functions first, then all constructors, then all methods.
    let functions: Vec<Function> = html
        .select(&FUNCTION_REGIONS)
        .chain(html.select(&TYPE_FUNC_REGIONS))
        .chain(html.select(&TYPE_METHOD_REGIONS))
        .filter_map(extract_function)
        .collect();

    let types: Vec<Type> = html.select(&TYPE_REGIONS).filter_map(extract_type).collect();

    let mut overview = String::new();
    for p in html.select(&OVERVIEW_PARAGRAPHS) {
        let text = element_text(p);
        if !text.is_empty() {
            overview.push_str(&text);
            overview.push('\n');
        }
    }

    debug!(
        package = %package,
        functions = functions.len(),
        types = types.len(),
        "Extracted documentation"
    );

    Doc {
        url: source_url.to_string(),
        name: package.to_string(),
        overview,
        functions,
        types,
    }
}

fn extract_function(region: ElementRef<'_>) -> Option<Function> {
    let signature = first_signature(region)?.replace('\n', "");
    let expects_method = has_class(region, TYPE_METHOD_CLASS);

    let function = match (classify(&signature), expects_method) {
        (Signature::Plain { name }, false) => Function::plain(name, signature),
        (Signature::Method { receiver, name }, true) => Function::method(receiver, name, signature),
        (other, _) => {
            trace!(signature = %signature, classified = ?other, "Skipping function region");
            return None;
        }
    };

    let example = region
        .select(&EXAMPLE_CODE)
        .next()
        .map(|e| e.text().collect::<String>())
        .unwrap_or_default();

    Some(
        function
            .with_comments(paragraphs(region, &[]))
            .with_example(example),
    )
}

fn extract_type(region: ElementRef<'_>) -> Option<Type> {
    let signature = first_signature(region)?;

    match classify(&signature) {
        Signature::TypeDecl { name, kind } => {
            // Constructors and methods are nested inside the type region on
            // pkg.go.dev; their paragraphs are not part of the type's comment.
            let comments = paragraphs(
                region,
                &[FUNCTION_CLASS, TYPE_FUNC_CLASS, TYPE_METHOD_CLASS],
            );
            Some(Type::new(name, kind, signature).with_comments(comments))
        }
        other => {
            trace!(signature = %signature, classified = ?other, "Skipping type region");
            None
        }
    }
}

fn first_signature(region: ElementRef<'_>) -> Option<String> {
    region.select(&PRE).next().map(element_text_raw)
}

/// Non-empty paragraph texts inside `region`, skipping paragraphs nested in a
/// descendant carrying one of `excluded_classes`
fn paragraphs(region: ElementRef<'_>, excluded_classes: &[&str]) -> Vec<String> {
    region
        .select(&PARAGRAPH)
        .filter(|p| !nested_in(*p, region, excluded_classes))
        .map(element_text)
        .filter(|text| !text.is_empty())
        .collect()
}

fn nested_in(element: ElementRef<'_>, region: ElementRef<'_>, classes: &[&str]) -> bool {
    if classes.is_empty() {
        return false;
    }

    element
        .ancestors()
        .take_while(|node| node.id() != region.id())
        .filter_map(ElementRef::wrap)
        .any(|ancestor| classes.iter().any(|class| has_class(ancestor, class)))
}

fn has_class(element: ElementRef<'_>, class: &str) -> bool {
    element.value().classes().any(|c| c == class)
}

fn element_text_raw(element: ElementRef<'_>) -> String {
    element.text().collect()
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
