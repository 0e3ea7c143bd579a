use std::io::ErrorKind;

use super::ResolveError;
use super::path::validate_text_path;

pub async fn read_text_file(raw_path: &str) -> Result<String, ResolveError> {
    let path = validate_text_path(raw_path)?;
    tracing::info!(path = %path.display(), "Reading text file");

    let contents = tokio::fs::read_to_string(&path).await;
    contents.map_err(|source| match source.kind() {
        ErrorKind::NotFound => ResolveError::FileNotFound { path },
        _ => ResolveError::ReadError { path, source },
    })
}
