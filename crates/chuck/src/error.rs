/// Every way a command can fail, as reported to the user.
///
/// The API client produces the first four variants. `LocalIo` only comes
/// from the `save` command.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub enum Error {
    #[error("Invalid input: {0}")]
    BadInput(String),

    #[error("Network error while {action}: {message}")]
    Network { action: String, message: String },

    #[error("HTTP error from API: {status} {detail}")]
    UpstreamHttp { status: u16, detail: String },

    #[error("{0}")]
    MalformedResponse(String),

    #[error("Failed to write to {path}: {message}")]
    LocalIo { path: String, message: String },
}

pub type ChuckResult<T> = std::result::Result<T, Error>;
