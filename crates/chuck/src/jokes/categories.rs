use crate::api::ApiClient;
use crate::prelude::{eprintln, println, *};
use chuck_core::output::CategoriesOutput;
use colored::Colorize;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct CategoriesOptions {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(
    options: CategoriesOptions,
    client: &ApiClient,
    global: &crate::Global,
) -> ChuckResult<()> {
    if global.verbose {
        eprintln!("Fetching categories...");
    }

    let categories = client.fetch_categories().await?;

    if options.json {
        println!("{}", super::to_json(&CategoriesOutput::from(categories)));
    } else {
        println!("{}", format_categories_text(&categories));
    }

    Ok(())
}

/// One category per line, or a notice when there are none
fn format_categories_text(categories: &[String]) -> String {
    if categories.is_empty() {
        return "No categories found.".yellow().to_string();
    }

    categories.join("\n")
}
