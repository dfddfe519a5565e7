//! User-facing error class
//!
//! Errors of this type are complete messages on their own: the binary
//! prints them without the surrounding context chain. Everything else is
//! reported through `anyhow` with its full chain.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UserError {
    /// The user backed out of an interactive prompt.
    #[error("Setup cancelled.")]
    Cancelled,

    /// The package manager exited with a failure code.
    #[error("Dependency install failed with exit code {0}. See the output above for details.")]
    InstallFailed(i32),

    /// The package manager was killed before reporting an exit code.
    #[error("Dependency install was terminated before it could finish.")]
    InstallInterrupted,

    /// An unrecognized `--profile` value.
    #[error("Unknown tooling profile \"{0}\". Expected one of: {1}.")]
    UnknownProfile(String, String),
}
