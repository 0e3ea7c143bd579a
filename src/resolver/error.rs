use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("The file was not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("An error occurred while reading the file {}: {source}", path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Not a .txt file: {0}")]
    NotTextFile(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Failed to fetch page: {0}")]
    FetchFailed(#[from] reqwest::Error),

    #[error("HTTP {status} while fetching {url}")]
    HttpStatus { status: u16, url: String },
}
