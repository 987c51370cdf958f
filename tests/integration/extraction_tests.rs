use pkgdoc::docs::{classify, extract, FunctionKind, Signature};

use crate::helpers::fixtures::{strings_doc, STRINGS_URL};

#[test]
fn test_strings_page_counts() {
    let doc = strings_doc();

    assert_eq!(doc.url, STRINGS_URL);
    assert_eq!(doc.name, "strings");
    assert_eq!(doc.functions.len(), 22);
    assert_eq!(doc.types.len(), 3);

    let methods = doc.functions.iter().filter(|f| f.is_method()).count();
    assert_eq!(methods, 8);
}

#[test]
fn test_overview_paragraphs() {
    let doc = strings_doc();
    assert!(doc
        .overview
        .starts_with("Package strings implements simple functions"));
    assert_eq!(doc.overview.lines().count(), 2);
}

#[test]
fn test_functions_then_constructors_then_methods() {
    let doc = strings_doc();
    let names: Vec<&str> = doc.functions.iter().map(|f| f.name.as_str()).collect();

    assert_eq!(names.len(), 22);
    assert_eq!(&names[..3], &["Clone", "Compare", "Contains"]);
    assert_eq!(names[11], "Join");
    // every constructor precedes every method, whatever type owns it
    assert_eq!(&names[12..14], &["NewReader", "NewReplacer"]);
    assert_eq!(&names[14..18], &["Grow", "Len", "String", "WriteString"]);
    assert_eq!(&names[18..], &["Len", "Read", "Replace", "WriteString"]);
}

#[test]
fn test_constructor_after_earlier_method_is_listed_first() {
    let markup = r#"<html><body>
        <div class="Documentation-function"><pre>func Foo()</pre></div>
        <div class="Documentation-type"><pre>type A struct{}</pre>
          <div class="Documentation-typeMethod"><pre>func (a *A) M()</pre></div>
        </div>
        <div class="Documentation-type"><pre>type B struct{}</pre>
          <div class="Documentation-typeFunc"><pre>func NewB() *B</pre></div>
        </div>
    </body></html>"#;
    let doc = extract(markup, "https://pkg.go.dev/x", "x");
    let names: Vec<&str> = doc.functions.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["Foo", "NewB", "M"]);
}

#[test]
fn test_method_without_receiver_type_is_skipped() {
    let markup = r#"<div class="Documentation-typeMethod"><pre>func ( *) Bar()</pre></div>"#;
    let doc = extract(markup, "https://pkg.go.dev/x", "x");
    assert!(doc.functions.is_empty());
}

#[test]
fn test_multi_line_function_signature_is_joined() {
    let doc = strings_doc();
    let join = doc.functions.iter().find(|f| f.name == "Join").unwrap();
    assert_eq!(join.signature, "func Join(elems []string,sep string) string");
}

#[test]
fn test_methods_carry_receiver_type() {
    let doc = strings_doc();
    let write_strings: Vec<&str> = doc
        .functions
        .iter()
        .filter(|f| f.name == "WriteString")
        .map(|f| f.method_of.as_str())
        .collect();
    assert_eq!(write_strings, vec!["Builder", "Replacer"]);

    let new_reader = doc.functions.iter().find(|f| f.name == "NewReader").unwrap();
    assert_eq!(new_reader.kind, FunctionKind::Plain);
    assert!(new_reader.method_of.is_empty());
}

#[test]
fn test_example_is_attached() {
    let doc = strings_doc();
    let equal_fold = doc.functions.iter().find(|f| f.name == "EqualFold").unwrap();
    assert_eq!(
        equal_fold.example,
        r#"fmt.Println(strings.EqualFold("Go", "GO"))"#
    );

    let compare = doc.functions.iter().find(|f| f.name == "Compare").unwrap();
    assert!(compare.example.is_empty());
}

#[test]
fn test_type_comments_exclude_methods() {
    let doc = strings_doc();
    let builder = &doc.types[0];

    assert_eq!(builder.name, "Builder");
    assert_eq!(builder.kind, "struct");
    assert!(builder.signature.starts_with("type Builder struct {\n"));
    assert_eq!(
        builder.comments,
        vec![
            "A Builder is used to efficiently build a string using Write methods.",
            "Do not copy a non-zero Builder.",
        ]
    );
    assert_eq!(
        builder.full_comment(),
        "A Builder is used to efficiently build a string using Write methods.\nDo not copy a non-zero Builder."
    );
}

#[test]
fn test_extracted_signatures_classify_back() {
    let doc = strings_doc();
    for function in &doc.functions {
        match classify(&function.signature) {
            Signature::Plain { name } => {
                assert!(!function.is_method());
                assert_eq!(name, function.name);
            }
            Signature::Method { receiver, name } => {
                assert!(function.is_method());
                assert_eq!(receiver, function.method_of);
                assert_eq!(name, function.name);
            }
            other => panic!("unexpected classification {:?}", other),
        }
    }
}
