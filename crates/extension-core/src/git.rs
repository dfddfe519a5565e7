//! Git backend: working-copy detection, init, and remote URL normalization

use crate::manifest::Repository;
use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;
use url::Url;

/// Check whether `dir` is already a git working copy
pub fn is_working_copy(dir: &Path) -> bool {
    dir.join(".git").exists()
}

/// Initialize a git repository in `dir`
pub fn init(dir: &Path) -> Result<()> {
    let output = Command::new("git")
        .arg("init")
        .current_dir(dir)
        .output()
        .context("Failed to run git init")?;

    if !output.status.success() {
        anyhow::bail!(
            "git init failed: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    Ok(())
}

/// Read the origin remote URL, if one is configured
pub fn origin_remote_url(dir: &Path) -> Option<String> {
    let output = Command::new("git")
        .args(["remote", "get-url", "origin"])
        .current_dir(dir)
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let url = String::from_utf8(output.stdout).ok()?;
    let url = url.trim();
    if url.is_empty() {
        None
    } else {
        Some(url.to_string())
    }
}

/// Derive a repository reference from the origin remote, normalized to the
/// HTTPS form. Any failure along the way degrades to `None`.
pub fn https_repository(dir: &Path) -> Option<Repository> {
    let raw = origin_remote_url(dir)?;
    let url = normalize_remote_url(&raw)?;
    Some(Repository {
        kind: "git".to_string(),
        url,
        directory: None,
    })
}

/// Normalize a git remote URL to `https://<host><path>`.
///
/// Handles the standard scheme forms (`https://`, `http://`, `ssh://`,
/// `git://`) and the scp-like `[user@]host:path` form git also accepts.
pub fn normalize_remote_url(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if raw.contains("://") {
        let parsed = Url::parse(raw).ok()?;
        let host = parsed.host_str()?;
        return Some(format!("https://{}{}", host, parsed.path()));
    }

    // scp-like syntax: git@github.com:owner/repo.git
    let (authority, path) = raw.split_once(':')?;
    let host = authority.rsplit('@').next()?;
    if host.is_empty() || path.is_empty() {
        return None;
    }
    Some(format!("https://{}/{}", host, path.trim_start_matches('/')))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_scp_like_remote() {
        assert_eq!(
            normalize_remote_url("git@github.com:alice/my-ext.git").as_deref(),
            Some("https://github.com/alice/my-ext.git")
        );
    }

    #[test]
    fn test_normalize_ssh_remote() {
        assert_eq!(
            normalize_remote_url("ssh://git@github.com/alice/my-ext.git").as_deref(),
            Some("https://github.com/alice/my-ext.git")
        );
    }

    #[test]
    fn test_normalize_https_remote_is_stable() {
        assert_eq!(
            normalize_remote_url("https://github.com/alice/my-ext").as_deref(),
            Some("https://github.com/alice/my-ext")
        );
    }

    #[test]
    fn test_normalize_git_protocol_remote() {
        assert_eq!(
            normalize_remote_url("git://github.com/alice/my-ext.git").as_deref(),
            Some("https://github.com/alice/my-ext.git")
        );
    }

    #[test]
    fn test_normalize_rejects_garbage() {
        assert_eq!(normalize_remote_url(""), None);
        assert_eq!(normalize_remote_url("   "), None);
        assert_eq!(normalize_remote_url("no-colon-anywhere"), None);
        assert_eq!(normalize_remote_url("git@github.com:"), None);
    }
}
