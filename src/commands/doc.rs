use anyhow::Result;

use super::doc_service;
use crate::config::Config;
use crate::query::{self, help_text, Answer, Query};

/// Run the doc command
///
/// # Arguments
///
/// * `args` - Zero to three query arguments, e.g. `strings Builder.*`
pub async fn run(config: &Config, args: &[String]) -> Result<()> {
    let parsed = Query::parse(args)?;

    let Some(package) = parsed.package() else {
        println!("Usage examples:\n\n{}", help_text("pkgdoc doc "));
        return Ok(());
    };

    let docs = doc_service(config)?;
    let doc = docs.get_doc(package).await?;

    match query::answer(&doc, &parsed) {
        Ok(answer) => print_answer(&answer),
        Err(e) if e.is_not_found() => println!("{}", e),
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

fn print_answer(answer: &Answer) {
    println!("{}", answer.title);
    println!("{}\n", answer.url);
    println!("{}", answer.body);
}
