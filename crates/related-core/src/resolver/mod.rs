//! Path resolution for a matched configuration
//!
//! Given the configuration a file belongs to, [`PathResolver`] works out
//! which file type the file is, which path fragments it contributes to the
//! templates, and which files of every related type exist or could be
//! created.

pub mod template;
pub mod variables;

use std::collections::HashMap;

use related_fs::{Glob, NormalizedPath, split_extension};

use crate::candidate::Candidate;
use crate::config::{AppConfig, FileTypeSpec};
use crate::matcher::MatchedConfiguration;
use crate::pattern::{PathPattern, substitute_module};

pub use template::{KNOWN_PLACEHOLDERS, Template};
pub use variables::{VariableSet, extract_variables};

/// The file type a file was recognised as.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectedType<'a> {
    pub name: &'a str,
    pub spec: &'a FileTypeSpec,
    /// The type's directory for this file, wildcard instantiated.
    pub dir: NormalizedPath,
    /// Segment captured by a `{%}` in the type's own path.
    pub module: Option<String>,
}

/// Knobs for candidate resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Match file names ignoring case. On by default on every platform.
    pub case_insensitive: bool,
    /// Directory that relative patterns are resolved against. Defaults to
    /// the process working directory.
    pub base_dir: Option<NormalizedPath>,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            case_insensitive: true,
            base_dir: None,
        }
    }
}

/// Detect the type of `current_file` within a matched configuration.
///
/// Types are tried in declaration order. A type whose path has a `{%}`
/// matches any module at that position and records the captured value.
pub fn detect_type<'c>(
    matched: &MatchedConfiguration<'c>,
    current_file: &NormalizedPath,
) -> Option<DetectedType<'c>> {
    let config: &'c AppConfig = matched.config;
    let file = current_file.clean();
    let segments = file.segments();

    for (name, spec) in &config.configuration.file_types {
        let dir_raw = matched.root.join(&spec.path);
        let pattern = match PathPattern::parse(dir_raw.as_str()) {
            Ok(pattern) => pattern,
            Err(e) => {
                tracing::warn!(file_type = %name, error = %e, "skipping file type");
                continue;
            }
        };

        if let Some(found) = pattern.match_prefix(&segments) {
            let dir = NormalizedPath::new(pattern.render(found.module.as_deref()));
            tracing::debug!(file_type = %name, dir = %dir, "detected file type");
            return Some(DetectedType {
                name,
                spec,
                dir,
                module: found.module,
            });
        }
    }

    tracing::debug!(config = %matched.name(), file = %file, "no file type matches");
    None
}

/// Expands related-file templates and probes the filesystem for them.
pub struct PathResolver<'g, G: Glob + ?Sized> {
    glob: &'g G,
    options: ResolveOptions,
}

impl<'g, G: Glob + ?Sized> PathResolver<'g, G> {
    pub fn new(glob: &'g G, options: ResolveOptions) -> Self {
        Self { glob, options }
    }

    pub fn options(&self) -> &ResolveOptions {
        &self.options
    }

    pub fn detect_type<'c>(
        &self,
        matched: &MatchedConfiguration<'c>,
        current_file: &NormalizedPath,
    ) -> Option<DetectedType<'c>> {
        detect_type(matched, current_file)
    }

    pub fn extract_variables(
        &self,
        matched: &MatchedConfiguration<'_>,
        current_file: &NormalizedPath,
        detected: &DetectedType<'_>,
    ) -> VariableSet {
        extract_variables(&matched.root, current_file, detected)
    }

    /// Candidates for every `rel_patterns` entry of the detected type, in
    /// declaration order. A pair that cannot be expanded or probed yields
    /// nothing and the rest are still evaluated.
    pub fn resolve_related(
        &self,
        matched: &MatchedConfiguration<'_>,
        detected: &DetectedType<'_>,
        variables: &VariableSet,
    ) -> Vec<Candidate> {
        let mut candidates = Vec::new();
        for (target, template) in &detected.spec.rel_patterns {
            let Some(pattern) = self.expand_pattern(matched, detected, variables, target, template)
            else {
                continue;
            };

            match self.classify(target, &pattern) {
                Ok(found) => candidates.extend(found),
                Err(e) => {
                    tracing::warn!(file_type = %target, pattern = %pattern, error = %e, "glob failed");
                }
            }
        }
        candidates
    }

    /// Expand one template into an absolute glob pattern.
    ///
    /// Returns `None` if `target` is not a file type of the configuration.
    pub fn expand_pattern(
        &self,
        matched: &MatchedConfiguration<'_>,
        detected: &DetectedType<'_>,
        variables: &VariableSet,
        target: &str,
        template: &str,
    ) -> Option<NormalizedPath> {
        let Some(target_spec) = matched.config.configuration.file_type(target) else {
            tracing::warn!(
                config = %matched.name(),
                file_type = %target,
                "rel_patterns names an unknown file type"
            );
            return None;
        };

        let module = detected.module.as_deref().or(matched.module.as_deref());
        // With no module to fill in, any module will do.
        let type_path = substitute_module(&target_spec.path, module.unwrap_or("*"));

        let template = Template::parse(template);
        for name in template.unknown_placeholders() {
            tracing::debug!(placeholder = name, "leaving unknown placeholder in place");
        }

        let values: HashMap<&str, String> = HashMap::from([
            ("app_path", variables.app_path.clone()),
            ("type_path", type_path),
            ("base_filename", variables.base_filename.clone()),
            ("file_from_type_path", variables.file_from_type_path.clone()),
            ("file_from_app_path", variables.file_from_app_path.clone()),
            ("dir_from_type_path", variables.dir_from_type_path.clone()),
            ("prefix", target_spec.prefix().to_string()),
            ("suffix", target_spec.suffix().to_string()),
            ("module", module.unwrap_or("").to_string()),
        ]);
        let expanded = template.render(&values);

        let prefix = if template.references("prefix") { "" } else { target_spec.prefix() };
        let suffix = if template.references("suffix") { "" } else { target_spec.suffix() };
        let spliced = splice_affixes(&expanded, prefix, suffix);

        let pattern = self.absolutize(NormalizedPath::new(spliced));
        tracing::debug!(file_type = %target, pattern = %pattern, "expanded related pattern");
        Some(pattern)
    }

    /// Turn one expanded pattern into candidates.
    ///
    /// Existing regular files become `Open` candidates in glob order. With
    /// no match at all, a literal pattern whose directory exists becomes a
    /// single `Create` candidate.
    pub fn classify(&self, target: &str, pattern: &NormalizedPath) -> related_fs::Result<Vec<Candidate>> {
        let matches = self.glob.glob(pattern.as_str(), self.options.case_insensitive)?;

        if matches.is_empty() {
            if is_creatable(self.glob, pattern) {
                return Ok(vec![Candidate::create(target, pattern.clone())]);
            }
            return Ok(Vec::new());
        }

        Ok(matches
            .into_iter()
            .filter(|path| self.glob.is_file(path))
            .map(|path| Candidate::open(target, path))
            .collect())
    }

    fn absolutize(&self, path: NormalizedPath) -> NormalizedPath {
        match &self.options.base_dir {
            Some(base) => path.absolutize(base),
            None => path.absolutize_from_cwd().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "cannot read working directory; keeping relative pattern");
                path.clean()
            }),
        }
    }
}

/// A pattern without wildcards can be created when its directory exists.
fn is_creatable<G: Glob + ?Sized>(glob: &G, pattern: &NormalizedPath) -> bool {
    if pattern.as_str().contains('*') {
        return false;
    }
    pattern.parent().is_some_and(|parent| glob.is_dir(&parent))
}

/// Insert affixes around the stem of the final path component.
///
/// A final component whose stem is only `*` already covers every name and
/// is left alone.
pub fn splice_affixes(pattern: &str, prefix: &str, suffix: &str) -> String {
    if prefix.is_empty() && suffix.is_empty() {
        return pattern.to_string();
    }

    let (dir, name) = match pattern.rfind('/') {
        Some(idx) => pattern.split_at(idx + 1),
        None => ("", pattern),
    };
    let (stem, extension) = split_extension(name);
    if stem.is_empty() || stem.chars().all(|c| c == '*') {
        return pattern.to_string();
    }

    match extension {
        Some(ext) => format!("{dir}{prefix}{stem}{suffix}.{ext}"),
        None => format!("{dir}{prefix}{stem}{suffix}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/a/controllers/foo.js", "", "_controller", "/a/controllers/foo_controller.js")]
    #[case("/a/partials/row.html", "_", "", "/a/partials/_row.html")]
    #[case("/a/views/foo/*", "_", "_view", "/a/views/foo/*")]
    #[case("/a/views/foo/*.js", "", "_view", "/a/views/foo/*.js")]
    #[case("/a/specs/foo", "", "_spec", "/a/specs/foo_spec")]
    #[case("/a/x/foo.test.ts", "", "_b", "/a/x/foo.test_b.ts")]
    #[case("/a/x/foo.py", "", "", "/a/x/foo.py")]
    fn test_splice_affixes(
        #[case] pattern: &str,
        #[case] prefix: &str,
        #[case] suffix: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(splice_affixes(pattern, prefix, suffix), expected);
    }
}
