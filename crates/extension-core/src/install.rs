//! Dependency installation via the package manager
//!
//! The subprocess inherits stdio so its progress output streams straight to
//! the user's terminal. Each install is attempted exactly once.

use crate::error::UserError;
use crate::profile::ToolingProfile;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

/// Install the profile's dev dependencies in `dir`
pub async fn install_dev_dependencies(profile: &ToolingProfile, dir: &Path) -> Result<()> {
    let program = profile.package_manager.program();
    let mut args: Vec<String> = profile
        .package_manager
        .dev_install_args()
        .iter()
        .map(|arg| arg.to_string())
        .collect();
    args.extend(
        profile
            .dev_dependencies
            .iter()
            .map(|dependency| dependency.to_string()),
    );

    run_installer(program, &args, dir).await
}

/// Run an installer command with inherited stdio. A non-zero exit aborts
/// the run with a user-facing error carrying the exit code.
pub async fn run_installer(program: &str, args: &[String], dir: &Path) -> Result<()> {
    println!();
    println!(
        "{} {} {}",
        "Running:".dimmed(),
        program.yellow(),
        args.join(" ").yellow()
    );
    println!();

    let status = Command::new(program)
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .await
        .with_context(|| format!("Failed to run {program}"))?;

    if status.success() {
        return Ok(());
    }

    match status.code() {
        Some(code) => Err(UserError::InstallFailed(code).into()),
        None => Err(UserError::InstallInterrupted.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_successful_installer_run() {
        let dir = tempfile::tempdir().unwrap();
        run_installer("true", &[], dir.path()).await.unwrap();
    }

    #[tokio::test]
    async fn test_failing_installer_reports_exit_code() {
        let dir = tempfile::tempdir().unwrap();
        let err = run_installer(
            "sh",
            &["-c".to_string(), "exit 7".to_string()],
            dir.path(),
        )
        .await
        .unwrap_err();

        assert_eq!(
            err.downcast_ref::<UserError>(),
            Some(&UserError::InstallFailed(7))
        );
    }

    #[tokio::test]
    async fn test_missing_installer_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = run_installer("definitely-not-a-package-manager", &[], dir.path())
            .await
            .unwrap_err();
        assert!(err.downcast_ref::<UserError>().is_none());
    }
}
