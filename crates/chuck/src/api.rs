use crate::config::Config;
use crate::prelude::*;
use chuck_core::jokes::{
    apply_limit, extract_categories, extract_random_joke, extract_search_results,
    normalize_query, parse_json,
};
use serde_json::Value;

const RANDOM_PATH: &str = "/jokes/random";
const CATEGORIES_PATH: &str = "/jokes/categories";
const SEARCH_PATH: &str = "/jokes/search";

/// Client for the joke API.
///
/// Each method sends exactly one GET request and checks, in order: transport
/// errors, HTTP status, JSON syntax, JSON shape. There are no retries.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    config: Config,
}

impl ApiClient {
    pub fn new(config: Config) -> ChuckResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| network_error("building the HTTP client", e))?;

        Ok(Self { client, config })
    }

    /// Fetch a single random joke
    pub async fn fetch_random_joke(&self) -> ChuckResult<String> {
        let data = self
            .get_json(RANDOM_PATH, &[], "fetching random joke")
            .await?;

        extract_random_joke(data).map_err(Error::MalformedResponse)
    }

    /// Fetch the list of joke categories, in upstream order
    pub async fn fetch_categories(&self) -> ChuckResult<Vec<String>> {
        let data = self
            .get_json(CATEGORIES_PATH, &[], "fetching categories")
            .await?;

        extract_categories(data).map_err(Error::MalformedResponse)
    }

    /// Search jokes containing `query`, keeping at most `limit` of them
    ///
    /// A blank query fails with [`Error::BadInput`] before any request is sent.
    pub async fn search_jokes(&self, query: &str, limit: Option<i64>) -> ChuckResult<Vec<String>> {
        let query = normalize_query(query).map_err(Error::BadInput)?;

        let data = self
            .get_json(SEARCH_PATH, &[("query", query)], "searching jokes")
            .await?;

        let results = extract_search_results(data).map_err(Error::MalformedResponse)?;
        if results.skipped > 0 {
            log::debug!("Skipped {} malformed search entries", results.skipped);
        }

        Ok(apply_limit(results.jokes, limit))
    }

    async fn get_json(
        &self,
        path: &str,
        params: &[(&str, &str)],
        action: &str,
    ) -> ChuckResult<Value> {
        let url = self.config.endpoint(path);
        log::debug!("GET {url} {params:?}");

        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(|e| network_error(action, e))?;

        let status = response.status();
        log::debug!("{url} responded with HTTP {status}");

        if !status.is_success() {
            return Err(Error::UpstreamHttp {
                status: status.as_u16(),
                detail: f!(
                    "{} for url: {}",
                    status.canonical_reason().unwrap_or("Unknown Status"),
                    response.url()
                ),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| network_error(action, e))?;

        parse_json(&body).map_err(Error::MalformedResponse)
    }
}

fn network_error(action: &str, err: reqwest::Error) -> Error {
    Error::Network {
        action: action.to_string(),
        message: err.to_string(),
    }
}
