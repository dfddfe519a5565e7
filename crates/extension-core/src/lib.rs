//! Extension Core - Shared library for the Sourcegraph extension creator
//!
//! This library holds everything behind the `create-extension` binary: the
//! metadata resolver, the idempotent scaffold writer, the dependency
//! installer, and the git and package-manager backends they talk to.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Backends** - git introspection, descriptor parsing, the
//!   package-manager subprocess, the write-if-absent file primitive
//! - **Layer 2: Resolution & Planning** - `ProjectMetadata` resolution
//!   behind the `Prompt` trait, and the generated-file plan derived from
//!   metadata plus a `ToolingProfile`
//! - **Layer 3: CLI/TUI Interface** - cliclack-based prompts and the
//!   top-level orchestrator (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based prompt backend and the
//!   `tui::run` orchestrator

pub mod error;
pub mod git;
pub mod install;
pub mod manifest;
pub mod metadata;
pub mod profile;
pub mod scaffold;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use error::UserError;
pub use manifest::{ExtensionManifest, ManifestSeed, Repository};
pub use metadata::{License, ProjectMetadata, Prompt};
pub use profile::{PackageManager, ToolingProfile};
pub use scaffold::{GeneratedFile, WriteOutcome};

#[cfg(feature = "tui")]
pub use tui::run;
