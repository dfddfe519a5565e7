//! Cliclack-based interactive interface

mod prompts;

pub use prompts::{run, CliclackPrompt, CreateArgs};
