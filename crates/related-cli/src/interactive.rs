//! Interactive prompts for CLI commands
//!
//! Uses dialoguer for terminal-based interactive selection.

use colored::Colorize;
use dialoguer::Select;
use related_core::RelatedFiles;

use crate::error::Result;

/// Menu entries for the candidates, in display order.
pub fn menu_items(related: &RelatedFiles) -> Vec<String> {
    related
        .candidates()
        .iter()
        .map(|candidate| format!("{}  {}", candidate.label(), candidate.path.as_str().dimmed()))
        .collect()
}

/// Let the user pick a related file.
///
/// Returns `None` when the prompt is dismissed with Esc or `q`.
pub fn pick_candidate(related: &RelatedFiles) -> Result<Option<usize>> {
    let items = menu_items(related);
    let choice = Select::new()
        .with_prompt("Related files")
        .items(&items)
        .default(0)
        .interact_opt()?;
    Ok(choice)
}
