use crate::api::ApiClient;
use crate::prelude::{eprintln, println, *};
use chuck_core::output::JokeOutput;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct RandomOptions {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(
    options: RandomOptions,
    client: &ApiClient,
    global: &crate::Global,
) -> ChuckResult<()> {
    if global.verbose {
        eprintln!("Fetching a random joke...");
    }

    let joke = client.fetch_random_joke().await?;

    if options.json {
        println!("{}", super::to_json(&JokeOutput::from(joke)));
    } else {
        println!("{}", joke);
    }

    Ok(())
}
