//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::context::SETTINGS_ENV;

/// goto-related - Jump between a file and the files that belong with it
#[derive(Parser, Debug)]
#[command(name = "goto-related")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Settings file to use instead of the discovered one
    #[arg(short, long, global = true, env = SETTINGS_ENV)]
    pub settings: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List the files related to FILE
    ///
    /// Existing files are offered as "Open", missing files whose directory
    /// exists as "Create".
    ///
    /// Examples:
    ///   goto-related related app/views/users/show.py
    ///   goto-related related app/views/users/show.py --json
    ///   goto-related related app/views/users/show.py --open
    ///   goto-related related app/views/users/show.py --pick 0 --open --editor code
    Related {
        /// The file being edited
        file: PathBuf,

        /// Output as JSON for editor integrations
        #[arg(long, conflicts_with_all = ["pick", "open"])]
        json: bool,

        /// Select the candidate at this index
        #[arg(short, long)]
        pick: Option<usize>,

        /// Open the selected file; prompts for a choice without --pick
        #[arg(short, long)]
        open: bool,

        /// Editor command used by --open (defaults to $VISUAL, then $EDITOR)
        #[arg(short, long, requires = "open")]
        editor: Option<String>,

        /// Match file names case-sensitively
        #[arg(long)]
        case_sensitive: bool,
    },

    /// Validate the settings file
    ///
    /// With FILE, also show how FILE is resolved: the matched
    /// configuration, its root, the detected file type and the template
    /// variables.
    Check {
        /// File to explain
        file: Option<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
