//! Open command implementation
//!
//! Launches an editor on the selected related file.

use std::path::{Path, PathBuf};
use std::process::Command;

use colored::Colorize;
use related_core::Candidate;

use crate::error::{CliError, Result};

/// Environment variables naming the user's editor, in lookup order
const EDITOR_VARS: &[&str] = &["VISUAL", "EDITOR"];

/// An editor command line such as `code --wait`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl EditorCommand {
    /// Split a command line on whitespace. Returns `None` if it is blank.
    pub fn parse(command: &str) -> Option<Self> {
        let mut parts = command.split_whitespace();
        let program = parts.next()?.to_string();
        Some(Self {
            program,
            args: parts.map(str::to_string).collect(),
        })
    }

    /// Whether the program exists, as a path or on PATH.
    pub fn is_available(&self) -> bool {
        let program = Path::new(&self.program);
        if program.components().count() > 1 {
            program.is_file()
        } else {
            which(&self.program).is_some()
        }
    }

    /// Run the editor on `path` and wait for it to exit.
    pub fn launch(&self, path: &Path) -> Result<()> {
        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .status()
            .map_err(|e| CliError::user(format!("Failed to launch '{}': {}", self.program, e)))?;

        if !status.success() {
            return Err(CliError::user(format!(
                "Editor '{}' exited with {}",
                self.program, status
            )));
        }
        Ok(())
    }
}

/// Find the full path of a binary on PATH (cross-platform)
fn which(binary: &str) -> Option<PathBuf> {
    let path_var = std::env::var_os("PATH")?;
    let exts = if cfg!(windows) {
        vec![".exe", ".cmd", ".bat", ""]
    } else {
        vec![""]
    };

    for dir in std::env::split_paths(&path_var) {
        for ext in &exts {
            let candidate = dir.join(format!("{}{}", binary, ext));
            if candidate.is_file() {
                return Some(candidate);
            }
        }
    }
    None
}

/// Pick the editor: `--editor`, then `$VISUAL`, then `$EDITOR`.
pub fn resolve_editor(explicit: Option<&str>) -> Result<EditorCommand> {
    let configured = explicit.map(str::to_string).or_else(|| {
        EDITOR_VARS
            .iter()
            .find_map(|var| std::env::var(var).ok().filter(|value| !value.trim().is_empty()))
    });

    let Some(command) = configured else {
        return Err(CliError::user(
            "No editor configured. Pass --editor or set $VISUAL or $EDITOR.",
        ));
    };
    let editor = EditorCommand::parse(&command)
        .ok_or_else(|| CliError::user("Editor command is empty."))?;

    if !editor.is_available() {
        return Err(CliError::user(format!(
            "Editor '{}' is not installed or not on PATH.",
            editor.program
        )));
    }
    Ok(editor)
}

/// Run the open command for a selected candidate
///
/// The candidate's directory already exists; the editor creates the file
/// itself when it is saved.
pub fn run_open(editor: Option<&str>, candidate: &Candidate) -> Result<()> {
    let editor = resolve_editor(editor)?;

    println!(
        "{} {} {}",
        "=>".blue().bold(),
        candidate.kind.verb(),
        candidate.path.as_str().cyan()
    );
    editor.launch(&candidate.path.to_native())?;

    println!("{} Opened in {}.", "OK".green().bold(), editor.program);
    Ok(())
}
