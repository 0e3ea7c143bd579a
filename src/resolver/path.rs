use std::path::{Path, PathBuf};

use super::ResolveError;

/// Check a model-supplied file name before it touches the filesystem.
///
/// Only `.txt` files are readable; the extension check is case-insensitive.
pub fn validate_text_path(raw: &str) -> Result<PathBuf, ResolveError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(ResolveError::InvalidPath("Empty path".to_string()));
    }

    if trimmed.contains('\0') {
        return Err(ResolveError::InvalidPath(format!(
            "Path contains a NUL byte: {:?}",
            raw
        )));
    }

    let path = Path::new(trimmed);
    let is_txt = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("txt"));

    if !is_txt {
        return Err(ResolveError::NotTextFile(trimmed.to_string()));
    }

    Ok(path.to_path_buf())
}
