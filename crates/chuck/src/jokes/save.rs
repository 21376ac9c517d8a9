use crate::api::ApiClient;
use crate::prelude::{eprintln, println, *};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct SaveOptions {
    /// Path to output text file
    #[arg(value_name = "FILENAME")]
    pub filename: PathBuf,
}

pub async fn run(
    options: SaveOptions,
    client: &ApiClient,
    global: &crate::Global,
) -> ChuckResult<()> {
    if global.verbose {
        eprintln!("Saving a random joke to {}...", options.filename.display());
    }

    let joke = client.fetch_random_joke().await?;
    append_joke(&options.filename, &joke)?;

    println!("Saved joke to {}", options.filename.display());

    Ok(())
}

/// Append `joke` and a newline to `path`, creating the file if needed.
///
/// The file is closed before returning, on success and on error.
pub fn append_joke(path: &Path, joke: &str) -> ChuckResult<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| io_error(path, e))?;

    writeln!(file, "{joke}").map_err(|e| io_error(path, e))
}

fn io_error(path: &Path, err: std::io::Error) -> Error {
    Error::LocalIo {
        path: path.display().to_string(),
        message: err.to_string(),
    }
}
