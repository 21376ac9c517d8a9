use serde::Serialize;

/// Output of the `random` command
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct JokeOutput {
    pub joke: String,
}

/// Output of the `categories` command
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct CategoriesOutput {
    pub total: usize,
    pub categories: Vec<String>,
}

/// Output of the `search` command
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct SearchOutput {
    pub query: String,
    pub total: usize,
    pub jokes: Vec<String>,
}

impl From<String> for JokeOutput {
    fn from(joke: String) -> Self {
        Self { joke }
    }
}

impl From<Vec<String>> for CategoriesOutput {
    fn from(categories: Vec<String>) -> Self {
        Self {
            total: categories.len(),
            categories,
        }
    }
}

impl SearchOutput {
    pub fn new(query: impl Into<String>, jokes: Vec<String>) -> Self {
        Self {
            query: query.into(),
            total: jokes.len(),
            jokes,
        }
    }
}
