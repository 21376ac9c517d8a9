use crate::api::ApiClient;
use crate::config::Config;
use crate::prelude::{eprintln, *};
use colored::Colorize;
use serde::Serialize;

pub mod categories;
pub mod random;
pub mod save;
pub mod search;

/// Exit status for a command that completed
pub const EXIT_SUCCESS: u8 = 0;

/// Exit status for a command that failed for any reason
pub const EXIT_FAILURE: u8 = 1;

/// Run one command and turn its outcome into an exit status.
///
/// This is the only place errors are recovered: any failure is printed as a
/// single `Error:` line on stderr.
pub async fn dispatch(command: crate::SubCommands, global: crate::Global) -> u8 {
    let config = Config::default().with_overrides(global.api_base.clone(), global.timeout);

    if global.verbose {
        eprintln!("Joke API Base: {}", config.base_url);
        eprintln!();
    }

    let result = async {
        let client = ApiClient::new(config)?;
        run(command, &client, &global).await
    }
    .await;

    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(err) => {
            log::debug!("Command failed: {err:?}");
            eprintln!("{} {}", "Error:".red().bold(), err);
            EXIT_FAILURE
        }
    }
}

async fn run(
    command: crate::SubCommands,
    client: &ApiClient,
    global: &crate::Global,
) -> ChuckResult<()> {
    match command {
        crate::SubCommands::Random(options) => random::run(options, client, global).await,
        crate::SubCommands::Categories(options) => {
            categories::run(options, client, global).await
        }
        crate::SubCommands::Search(options) => search::run(options, client, global).await,
        crate::SubCommands::Save(options) => save::run(options, client, global).await,
    }
}

/// Convert an output model to pretty JSON
fn to_json<T: Serialize>(output: &T) -> String {
    // Output models hold only strings and counts.
    serde_json::to_string_pretty(output).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{json_route, serve};
    use crate::SubCommands;
    use axum::http::StatusCode;

    fn global_for(base_url: String) -> crate::Global {
        crate::Global {
            verbose: false,
            api_base: Some(base_url),
            timeout: None,
        }
    }

    #[tokio::test]
    async fn test_dispatch_random_success() {
        let base = serve(json_route(
            "/jokes/random",
            StatusCode::OK,
            r#"{"value":"Chuck can divide by zero."}"#,
        ))
        .await;

        let command = SubCommands::Random(random::RandomOptions { json: false });
        assert_eq!(dispatch(command, global_for(base)).await, EXIT_SUCCESS);
    }

    #[tokio::test]
    async fn test_dispatch_empty_categories_is_success() {
        let base = serve(json_route("/jokes/categories", StatusCode::OK, "[]")).await;

        let command = SubCommands::Categories(categories::CategoriesOptions { json: false });
        assert_eq!(dispatch(command, global_for(base)).await, EXIT_SUCCESS);
    }

    #[tokio::test]
    async fn test_dispatch_blank_query_fails() {
        let command = SubCommands::Search(search::SearchOptions {
            query: "   ".to_string(),
            limit: Config::DEFAULT_SEARCH_LIMIT,
            json: false,
        });

        // No server: a blank query must fail before any request.
        let global = global_for("http://127.0.0.1:1".to_string());
        assert_eq!(dispatch(command, global).await, EXIT_FAILURE);
    }

    #[tokio::test]
    async fn test_dispatch_upstream_error_fails() {
        let base = serve(json_route(
            "/jokes/categories",
            StatusCode::SERVICE_UNAVAILABLE,
            "[]",
        ))
        .await;

        let command = SubCommands::Categories(categories::CategoriesOptions { json: true });
        assert_eq!(dispatch(command, global_for(base)).await, EXIT_FAILURE);
    }

    #[tokio::test]
    async fn test_dispatch_network_error_fails() {
        let command = SubCommands::Random(random::RandomOptions { json: false });
        let global = global_for("http://127.0.0.1:1".to_string());
        assert_eq!(dispatch(command, global).await, EXIT_FAILURE);
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&chuck_core::output::JokeOutput::from("A".to_string()));
        assert_eq!(json, "{\n  \"joke\": \"A\"\n}");
    }
}
