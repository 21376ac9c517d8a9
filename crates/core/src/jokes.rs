use serde_json::Value;

/// Jokes extracted from a search response
///
/// `skipped` counts the entries of the `result` array that were not objects
/// with a string `value` and were therefore dropped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchResults {
    pub jokes: Vec<String>,
    pub skipped: usize,
}

/// Trim a search query and reject it if nothing is left
pub fn normalize_query(query: &str) -> Result<&str, String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err("Query cannot be empty.".to_string());
    }
    Ok(trimmed)
}

/// Parse a raw response body as JSON
pub fn parse_json(body: &[u8]) -> Result<Value, String> {
    serde_json::from_slice(body).map_err(|_| "API returned non-JSON response.".to_string())
}

/// Extract the joke text from a `/jokes/random` response
///
/// The body must be a JSON object whose `value` field is a string.
pub fn extract_random_joke(data: Value) -> Result<String, String> {
    match data {
        Value::Object(mut map) => match map.remove("value") {
            Some(Value::String(joke)) => Ok(joke),
            _ => Err("Unexpected API response: missing 'value' string.".to_string()),
        },
        _ => Err("Unexpected API response: missing 'value' string.".to_string()),
    }
}

/// Extract the category list from a `/jokes/categories` response
///
/// The body must be a JSON array of strings. Order is preserved.
pub fn extract_categories(data: Value) -> Result<Vec<String>, String> {
    let Value::Array(items) = data else {
        return Err("Unexpected API response: expected a list of strings.".to_string());
    };

    items
        .into_iter()
        .map(|item| match item {
            Value::String(category) => Ok(category),
            _ => Err("Unexpected API response: expected a list of strings.".to_string()),
        })
        .collect()
}

/// Extract joke texts from a `/jokes/search` response
///
/// The body must be a JSON object with a `result` array. Entries that are not
/// objects carrying a string `value` are skipped instead of failing the call.
pub fn extract_search_results(data: Value) -> Result<SearchResults, String> {
    let entries = match data {
        Value::Object(mut map) => match map.remove("result") {
            Some(Value::Array(entries)) => entries,
            _ => return Err("Unexpected API response: 'result' is not a list.".to_string()),
        },
        _ => return Err("Unexpected API response: expected a JSON object.".to_string()),
    };

    let total = entries.len();
    let jokes: Vec<String> = entries
        .into_iter()
        .filter_map(|entry| match entry {
            Value::Object(mut fields) => match fields.remove("value") {
                Some(Value::String(joke)) => Some(joke),
                _ => None,
            },
            _ => None,
        })
        .collect();

    Ok(SearchResults {
        skipped: total - jokes.len(),
        jokes,
    })
}

/// Keep the first `limit` jokes
///
/// Negative limits are clamped to zero. `None` means no truncation.
pub fn apply_limit(mut jokes: Vec<String>, limit: Option<i64>) -> Vec<String> {
    if let Some(limit) = limit {
        let limit = usize::try_from(limit.max(0)).unwrap_or(usize::MAX);
        jokes.truncate(limit);
    }
    jokes
}
