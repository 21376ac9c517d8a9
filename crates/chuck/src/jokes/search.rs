use crate::api::ApiClient;
use crate::config::Config;
use crate::prelude::{eprintln, println, *};
use chuck_core::output::SearchOutput;
use colored::Colorize;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct SearchOptions {
    /// Search query string
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Max jokes to return; negative values return nothing
    #[arg(
        short = 'n',
        long,
        default_value_t = Config::DEFAULT_SEARCH_LIMIT,
        allow_negative_numbers = true
    )]
    pub limit: i64,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(
    options: SearchOptions,
    client: &ApiClient,
    global: &crate::Global,
) -> ChuckResult<()> {
    if global.verbose {
        eprintln!(
            "Searching jokes for {:?} (limit {})...",
            options.query, options.limit
        );
    }

    let jokes = client
        .search_jokes(&options.query, Some(options.limit))
        .await?;

    if options.json {
        let output = SearchOutput::new(options.query.trim(), jokes);
        println!("{}", super::to_json(&output));
    } else {
        println!("{}", format_search_text(&jokes));
    }

    Ok(())
}

/// Each joke on its own line behind a `- ` marker, or a notice when empty
fn format_search_text(jokes: &[String]) -> String {
    if jokes.is_empty() {
        return "No jokes found.".yellow().to_string();
    }

    jokes
        .iter()
        .map(|joke| f!("- {joke}"))
        .collect::<Vec<_>>()
        .join("\n")
}
