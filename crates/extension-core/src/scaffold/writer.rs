//! Idempotent file-writing primitives
//!
//! Every generated file goes through `write_if_absent`: existing files are
//! never overwritten, so re-running the creator in the same directory is a
//! no-op for anything already on disk.

use anyhow::{Context, Result};
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;

/// What happened to a single target path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    SkippedExisting,
}

/// Write `contents` to `path` unless the path already exists
pub async fn write_if_absent(path: &Path, contents: &str) -> Result<WriteOutcome> {
    let exists = fs::try_exists(path)
        .await
        .with_context(|| format!("Failed to check for {}", path.display()))?;
    if exists {
        return Ok(WriteOutcome::SkippedExisting);
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }

    fs::write(path, contents)
        .await
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    Ok(WriteOutcome::Written)
}

/// Create a directory, tolerating only the already-exists case
pub async fn ensure_dir(path: &Path) -> Result<()> {
    match fs::create_dir(path).await {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == ErrorKind::AlreadyExists => Ok(()),
        Err(err) => {
            Err(err).with_context(|| format!("Failed to create directory: {}", path.display()))
        }
    }
}
