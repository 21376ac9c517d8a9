use crate::prelude::*;
use clap::Parser;
use std::process::ExitCode;

mod api;
mod config;
mod error;
mod jokes;
mod prelude;

#[cfg(test)]
mod testing;

#[derive(Debug, clap::Parser)]
#[command(
    name = "chuck",
    author,
    version,
    about,
    long_about = "Chuck Norris Jokes CLI - fetch random jokes, categories, and search results."
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, global = true, default_value = "false")]
    pub verbose: bool,

    /// Joke API base URL
    #[clap(long, global = true, hide = true)]
    pub api_base: Option<String>,

    /// Request timeout in seconds
    #[clap(long, global = true, hide = true)]
    pub timeout: Option<u64>,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Get a random joke
    Random(crate::jokes::random::RandomOptions),

    /// List all categories
    Categories(crate::jokes::categories::CategoriesOptions),

    /// Search jokes by keyword
    Search(crate::jokes::search::SearchOptions),

    /// Save a random joke to a file
    Save(crate::jokes::save::SaveOptions),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    let status = crate::jokes::dispatch(app.command, app.global).await;

    Ok(ExitCode::from(status))
}
