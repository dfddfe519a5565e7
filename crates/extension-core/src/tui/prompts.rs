//! Charm-style CLI prompts using cliclack, and the top-level create flow

use crate::error::UserError;
use crate::git;
use crate::install;
use crate::manifest;
use crate::metadata::{self, License, Prompt, TextField};
use crate::profile::ToolingProfile;
use crate::scaffold::{self, WriteOutcome};
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::PathBuf;

/// CLI arguments for the create flow
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Directory to scaffold into (defaults to the current directory)
    pub directory: Option<PathBuf>,

    /// Tooling profile name
    pub profile: Option<String>,

    /// Skip the dependency install step
    pub skip_install: bool,
}

/// Run the creator with interactive prompts
pub async fn run(args: CreateArgs) -> Result<()> {
    let profile = match &args.profile {
        Some(name) => ToolingProfile::by_name(name)?,
        None => ToolingProfile::default_profile(),
    };

    cliclack::intro("Welcome to the Sourcegraph extension creator!")?;

    let dir = resolve_directory(&args)?;

    // Step 1: Seed metadata from an existing descriptor, if any
    let seed = manifest::read_seed(&dir)?;

    // Step 2: Make sure a git working copy exists before looking at remotes
    if !git::is_working_copy(&dir) {
        cliclack::log::step(".git directory not found, initializing git repository")?;
        git::init(&dir)?;
    }

    // Step 3: Resolve the remaining metadata, prompting where needed
    let mut prompt = CliclackPrompt;
    let metadata = metadata::resolve(seed, || git::https_repository(&dir), &mut prompt)?;

    // Step 4: Write the scaffold, skipping anything already present
    let files = scaffold::scaffold_files(&metadata, profile)?;
    let mut created_dirs: HashSet<PathBuf> = HashSet::new();
    for file in &files {
        if let Some(parent) = file.path.parent() {
            if !parent.as_os_str().is_empty() && created_dirs.insert(parent.to_path_buf()) {
                cliclack::log::step(format!("Creating {} directory", parent.display()))?;
                scaffold::ensure_dir(&dir.join(parent)).await?;
            }
        }

        match scaffold::write_if_absent(&dir.join(&file.path), &file.contents).await? {
            WriteOutcome::Written => {
                cliclack::log::step(format!("Adding {}", file.path.display()))?;
            }
            WriteOutcome::SkippedExisting => {
                cliclack::log::info(format!(
                    "{} already exists, skipping creation",
                    file.path.display()
                ))?;
            }
        }
    }

    // Step 5: Install dev dependencies
    if args.skip_install {
        cliclack::log::info("Skipping dependency install")?;
    } else {
        cliclack::log::step(format!(
            "Installing dependencies with {}",
            profile.package_manager.program()
        ))?;
        install::install_dev_dependencies(profile, &dir).await?;
    }

    // Step 6: The README comes last
    let readme = scaffold::readme(&metadata);
    match scaffold::write_if_absent(&dir.join(&readme.path), &readme.contents).await? {
        WriteOutcome::Written => cliclack::log::step("Adding README.md")?,
        WriteOutcome::SkippedExisting => {
            cliclack::log::info("README.md already exists, skipping creation")?;
        }
    }

    cliclack::log::warning(
        "Remove \"wip\": true from the package.json when this extension is ready for use.",
    )?;
    cliclack::outro("Happy extension authoring!")?;

    Ok(())
}

fn resolve_directory(args: &CreateArgs) -> Result<PathBuf> {
    let current_dir =
        std::env::current_dir().context("Failed to determine the current directory")?;

    let dir = match &args.directory {
        Some(dir) if dir.is_absolute() => dir.clone(),
        Some(dir) => current_dir.join(dir),
        None => return Ok(current_dir),
    };

    if !dir.exists() {
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    cliclack::log::info(format!("Scaffolding in {}", dir.display()))?;

    Ok(dir)
}

/// The interactive `Prompt` backend
pub struct CliclackPrompt;

impl Prompt for CliclackPrompt {
    fn input(&mut self, field: &TextField) -> Result<String> {
        let mut input = cliclack::input(field.question);
        if let Some(placeholder) = field.placeholder {
            input = input.placeholder(placeholder).default_input(placeholder);
        }

        let validate = field.validate;
        let answer: String = input
            .validate(move |value: &String| validate(value.as_str()))
            .interact()
            .map_err(map_cancel)?;
        Ok(answer)
    }

    fn pick_license(&mut self, choices: &[License], initial: &License) -> Result<License> {
        let mut select = cliclack::select("License?");
        for license in choices {
            select = select.item(license.clone(), license.to_string(), "");
        }

        let license = select
            .initial_value(initial.clone())
            .interact()
            .map_err(map_cancel)?;
        Ok(license)
    }

    fn status(&mut self, line: &str) -> Result<()> {
        cliclack::log::info(line)?;
        Ok(())
    }

    fn warn(&mut self, line: &str) -> Result<()> {
        cliclack::log::warning(line)?;
        Ok(())
    }
}

fn map_cancel(err: std::io::Error) -> anyhow::Error {
    if err.kind() == std::io::ErrorKind::Interrupted {
        UserError::Cancelled.into()
    } else {
        err.into()
    }
}
