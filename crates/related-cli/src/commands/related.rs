//! Related command implementation
//!
//! Resolves the related files of one file and lists, prints or opens them.

use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use colored::Colorize;
use related_core::{Candidate, RelatedFiles, ResolveOptions};
use related_fs::{NativeGlob, NormalizedPath};
use serde::Serialize;

use crate::commands::open;
use crate::context;
use crate::error::Result;
use crate::interactive;

const NOTHING_FOUND: &str = "No related files found.";

/// Arguments of the `related` command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelatedArgs {
    pub file: PathBuf,
    pub json: bool,
    pub pick: Option<usize>,
    pub open: bool,
    pub editor: Option<String>,
    pub case_sensitive: bool,
}

#[derive(Serialize)]
struct JsonItem<'a> {
    label: String,
    path: &'a NormalizedPath,
    exists: bool,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    found: bool,
    items: Vec<JsonItem<'a>>,
}

/// Run the related command from `cwd`.
pub fn run_related(cwd: &Path, settings: Option<&Path>, args: &RelatedArgs) -> Result<()> {
    let source = context::require_settings(settings, &context::start_dir(cwd, Some(&args.file)))?;
    let configs = source.load()?;

    let cwd = NormalizedPath::new(cwd);
    // Roots are matched below the first segment, so relative input is
    // anchored at the working directory first.
    let file = (!args.file.as_os_str().is_empty())
        .then(|| NormalizedPath::new(&args.file).absolutize(&cwd));
    let options = ResolveOptions {
        case_insensitive: !args.case_sensitive,
        base_dir: Some(cwd),
    };
    let related = RelatedFiles::resolve(file.as_ref(), &configs, &NativeGlob, options);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&json_output(&related))?);
        return Ok(());
    }

    if !related.files_found() {
        println!("{}", NOTHING_FOUND);
        return Ok(());
    }

    let selection = match args.pick {
        Some(index) => Some(index),
        None if args.open && std::io::stdout().is_terminal() => {
            match interactive::pick_candidate(&related)? {
                Some(index) => Some(index),
                None => {
                    println!("{}", "Cancelled.".dimmed());
                    return Ok(());
                }
            }
        }
        None => {
            print_candidates(related.candidates());
            return Ok(());
        }
    };

    let Some(chosen) = related.select(selection)? else {
        return Ok(());
    };
    if args.open {
        open::run_open(args.editor.as_deref(), chosen)
    } else {
        println!("{}", chosen.path);
        Ok(())
    }
}

fn json_output(related: &RelatedFiles) -> JsonOutput<'_> {
    JsonOutput {
        found: related.files_found(),
        items: related
            .candidates()
            .iter()
            .map(|candidate| JsonItem {
                label: candidate.label(),
                path: &candidate.path,
                exists: candidate.exists(),
            })
            .collect(),
    }
}

fn print_candidates(candidates: &[Candidate]) {
    for (index, candidate) in candidates.iter().enumerate() {
        let label = if candidate.exists() {
            candidate.label().normal()
        } else {
            candidate.label().yellow()
        };
        println!(
            "{} {}  {}",
            format!("[{index}]").dimmed(),
            label,
            candidate.path.as_str().cyan()
        );
    }
}
