use anyhow::Result;
use authorsearch_core::{AuthorDetail, AuthorSummary, SearchError, SearchField, SearchQuery};
use clap::ValueEnum;

use crate::config::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Json,
    Text,
}

pub(crate) struct SearchArgs {
    pub fragment: String,
    pub field: SearchField,
    pub offset: u32,
    pub limit: u32,
    pub detail: bool,
    pub format: OutputFormat,
}

pub(crate) async fn run_search(args: SearchArgs) -> Result<()> {
    let query = SearchQuery::new(args.fragment, args.field)?
        .with_offset(args.offset)
        .with_limit(args.limit)?;
    let client = Settings::from_env().build_client()?;

    if args.detail {
        if let Some(authors) = found(client.search_detailed(&query).await)? {
            match args.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&authors)?),
                OutputFormat::Text => print!("{}", render_details(&authors)),
            }
        }
    } else if let Some(authors) = found(client.search(&query).await)? {
        match args.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&authors)?),
            OutputFormat::Text => print!("{}", render_summaries(&authors)),
        }
    }
    Ok(())
}

/// `NotFound` is a normal outcome; everything else is a failure.
fn found<T>(result: Result<Vec<T>, SearchError>) -> Result<Option<Vec<T>>> {
    match result {
        Ok(authors) => Ok(Some(authors)),
        Err(SearchError::NotFound) => {
            println!("No authors found");
            Ok(None)
        },
        Err(e) => {
            if e.is_contract_violation() {
                tracing::error!(error = %e, "author directory response changed shape");
            } else {
                tracing::error!(error = %e, "author search failed");
            }
            Err(e.into())
        },
    }
}

fn render_summaries(authors: &[AuthorSummary]) -> String {
    authors.iter().map(|a| format!("{}\n", a.full_name())).collect()
}

fn render_details(authors: &[AuthorDetail]) -> String {
    let mut out = String::new();
    for author in authors {
        let summary = author.summary();
        out.push_str(&format!("{} (#{})\n", summary.full_name(), summary.id));
        if author.has_biography() {
            for line in author.biography_plain_text.lines() {
                out.push_str(&format!("  {line}\n"));
            }
        } else {
            out.push_str("  No description\n");
        }
        if !author.work_ids.is_empty() {
            let ids: Vec<String> = author.work_ids.iter().map(i64::to_string).collect();
            out.push_str(&format!("  Works: {}\n", ids.join(", ")));
        }
    }
    out
}
