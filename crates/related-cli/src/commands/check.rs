//! Check command implementation
//!
//! Validates the settings in use and, given a file, explains how that file
//! is resolved.

use std::path::Path;

use colored::Colorize;
use related_core::resolver::Template;
use related_core::{AppConfig, ConfigurationSet, Outcome, QueryState, RelatedFiles, ResolveOptions};
use related_fs::{NativeGlob, NormalizedPath};

use crate::context;
use crate::error::Result;

/// Run the check command from `cwd`.
pub fn run_check(cwd: &Path, settings: Option<&Path>, file: Option<&Path>) -> Result<()> {
    let source = context::require_settings(settings, &context::start_dir(cwd, file))?;
    let configs = source.load()?;

    println!("{} Settings: {}", "OK".green().bold(), source);
    println!();
    print_configurations(&configs);

    let Some(file) = file else {
        return Ok(());
    };

    let cwd = NormalizedPath::new(cwd);
    let file = NormalizedPath::new(file).absolutize(&cwd);
    let related = RelatedFiles::resolve(
        Some(&file),
        &configs,
        &NativeGlob,
        ResolveOptions {
            base_dir: Some(cwd),
            ..Default::default()
        },
    );

    println!();
    println!("{}: {}", "File".bold(), file);
    // Matching is lexical; a symlinked location can explain a miss.
    if let Ok(real) = file.canonicalize()
        && real != file
    {
        println!("  {}: {}", "Real path".dimmed(), real);
    }
    match related.outcome() {
        Outcome::NotFound { reason } => {
            println!("  {} {}", "Not resolved:".yellow(), reason);
        }
        Outcome::Resolved(state) => {
            print_state(state);
            println!("  {}: {}", "Candidates".dimmed(), related.candidates().len());
        }
    }
    Ok(())
}

fn print_configurations(configs: &ConfigurationSet) {
    println!("{}:", "Enabled configurations".bold());
    if configs.is_empty() {
        println!("  {}", "None".dimmed());
        return;
    }
    for config in configs.iter() {
        println!(
            "  {} {} ({} = {})",
            "+".green(),
            config.name.cyan(),
            "app_dir".dimmed(),
            config.configuration.app_dir
        );
        for (name, spec) in &config.configuration.file_types {
            let targets: Vec<&str> = spec.rel_patterns.keys().map(String::as_str).collect();
            let targets = if targets.is_empty() {
                "-".to_string()
            } else {
                targets.join(", ")
            };
            println!("      {} {} -> {}", name, spec.path.dimmed(), targets);
        }
        for problem in lint(config) {
            println!("      {} {}", "WARN".yellow().bold(), problem);
        }
    }
}

/// Problems that make a configuration silently produce fewer candidates.
fn lint(config: &AppConfig) -> Vec<String> {
    let mut problems = Vec::new();
    for (name, spec) in &config.configuration.file_types {
        for (target, template) in &spec.rel_patterns {
            if config.configuration.file_type(target).is_none() {
                problems.push(format!("{name} -> {target}: unknown file type"));
            }
            let parsed = Template::parse(template);
            for placeholder in parsed.unknown_placeholders() {
                problems.push(format!(
                    "{name} -> {target}: unknown placeholder ${{{placeholder}}}"
                ));
            }
        }
    }
    problems
}

fn print_state(state: &QueryState) {
    let vars = &state.variables;
    let rows = [
        ("Configuration", state.configuration.clone()),
        ("Root", state.root.to_string()),
        ("Module", state.module.clone().unwrap_or_else(|| "-".into())),
        ("File type", state.file_type.clone()),
        ("app_path", vars.app_path.clone()),
        ("base_filename", vars.base_filename.clone()),
        ("file_from_type_path", vars.file_from_type_path.clone()),
        ("file_from_app_path", vars.file_from_app_path.clone()),
        ("dir_from_type_path", vars.dir_from_type_path.clone()),
    ];
    for (label, value) in rows {
        println!("  {}: {}", label.dimmed(), value);
    }
}
