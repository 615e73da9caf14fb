use std::io;
use std::path::{Path, PathBuf};

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Could not read {}", .path.display())]
#[diagnostic(
    code(pointer::cli::input_read_failure),
    help("The input must be an existing, readable UTF-8 text file")
)]
pub struct InputReadFailure {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Read the whole file at `path` as UTF-8 text.
pub fn read_input(path: &Path) -> Result<String, InputReadFailure> {
    let text = std::fs::read_to_string(path).map_err(|source| InputReadFailure {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "read input");
    Ok(text)
}
