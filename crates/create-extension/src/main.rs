//! create-extension - Interactive scaffolding for Sourcegraph extensions

use clap::Parser;
use colored::Colorize;
use extension_core::tui::{self, CreateArgs};
use extension_core::UserError;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "create-extension")]
#[command(about = "Interactive scaffolding for Sourcegraph extension projects")]
#[command(version)]
pub struct Args {
    /// Directory to scaffold the extension in (defaults to the current directory)
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Tooling profile to generate configs for (tslint or eslint)
    #[arg(short, long)]
    pub profile: Option<String>,

    /// Skip the dependency install step
    #[arg(long = "skip-install")]
    pub skip_install: bool,
}

impl From<Args> for CreateArgs {
    fn from(args: Args) -> Self {
        CreateArgs {
            directory: args.directory,
            profile: args.profile,
            skip_install: args.skip_install,
        }
    }
}

#[tokio::main]
async fn main() {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();

    let code = match tui::run(args.into()).await {
        Ok(()) => 0,
        Err(err) => {
            report(&err);
            1
        }
    };

    // Ensure cursor is visible and output has landed before exiting
    let _ = console::Term::stderr().show_cursor();
    let _ = std::io::stdout().flush();
    let _ = std::io::stderr().flush();
    std::process::exit(code);
}

/// Errors that are already user-facing print as a bare message; anything
/// else keeps its full context chain.
fn report(err: &anyhow::Error) {
    if let Some(user) = err.downcast_ref::<UserError>() {
        eprintln!("\n{}\n", user.to_string().red());
    } else {
        eprintln!("{err:?}");
    }
}
