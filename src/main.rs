//! One-shot search from the command line.
//!
//! ```text
//! coursescout <term...> [--type free|paid|all]
//! ```

use anyhow::{Context, Result, bail};
use coursescout::{
    api::dtos::{DISPLAY_TITLE_CHARS, truncate_title},
    catalog::SourceRegistry,
    config::Config,
    init_tracing,
    search::{Aggregator, CourseType, SearchRequest},
};
use std::sync::Arc;

fn parse_args(args: impl Iterator<Item = String>) -> Result<(String, CourseType)> {
    let mut words = Vec::new();
    let mut course_type = CourseType::All;
    let mut args = args;
    while let Some(arg) = args.next() {
        if arg == "--type" {
            let value = args.next().context("--type needs a value")?;
            course_type = value.parse()?;
        } else {
            words.push(arg);
        }
    }
    let term = words.join(" ");
    if term.trim().is_empty() {
        bail!("usage: coursescout <term...> [--type free|paid|all]");
    }
    Ok((term, course_type))
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;
    init_tracing(config.log_format());

    let (term, course_type) = parse_args(std::env::args().skip(1))?;
    let aggregator = Aggregator::new(Arc::new(SourceRegistry::builtin()), config.fetch().clone())?;

    let listings = aggregator
        .search(&SearchRequest::new(term.clone(), course_type))
        .await;

    if listings.is_empty() {
        println!("No courses found for '{term}'.");
        return Ok(());
    }

    println!("{} courses for '{term}' ({course_type}):", listings.len());
    for (i, listing) in listings.iter().enumerate() {
        println!(
            "{:>3}. {}\n     {}",
            i + 1,
            truncate_title(&listing.title, DISPLAY_TITLE_CHARS),
            listing.url
        );
    }

    Ok(())
}
