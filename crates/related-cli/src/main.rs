//! goto-related CLI
//!
//! Lists, picks and opens the files related to the file being edited.

mod cli;
mod commands;
mod context;
mod error;
mod interactive;

use std::path::Path;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use commands::RelatedArgs;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(cmd) => execute_command(cmd, cli.settings.as_deref()),
        None => {
            // No command provided - show help hint
            println!(
                "{} Jump to related files",
                "goto-related".green().bold()
            );
            println!();
            println!("Run {} for available commands.", "goto-related --help".cyan());
            Ok(())
        }
    }
}

/// Logs go to stderr so stdout stays parseable. `--verbose` forces DEBUG,
/// otherwise `RUST_LOG` applies with WARN as the default.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
    if installed.is_ok() {
        tracing::debug!("Verbose mode enabled");
    }
}

fn execute_command(cmd: Commands, settings: Option<&Path>) -> Result<()> {
    let cwd = std::env::current_dir()?;
    match cmd {
        Commands::Related {
            file,
            json,
            pick,
            open,
            editor,
            case_sensitive,
        } => {
            let args = RelatedArgs {
                file,
                json,
                pick,
                open,
                editor,
                case_sensitive,
            };
            commands::run_related(&cwd, settings, &args)
        }
        Commands::Check { file } => commands::run_check(&cwd, settings, file.as_deref()),
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "goto-related",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    }
}
