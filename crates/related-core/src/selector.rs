//! One related-files query, as seen by a host shell
//!
//! [`RelatedFiles`] runs the whole pipeline for the current file and keeps
//! the outcome: the ordered candidates, a found flag, and enough of the
//! query state to explain an empty result.

use related_fs::{Glob, NormalizedPath, io};
use serde::Serialize;

use crate::candidate::Candidate;
use crate::config::ConfigurationSet;
use crate::matcher::ConfigurationMatcher;
use crate::resolver::{PathResolver, ResolveOptions, VariableSet};
use crate::{Error, Result};

/// Why a query produced no candidates before reaching the filesystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotFound {
    NoCurrentFile,
    NoMatchingConfiguration,
    NoMatchingFileType,
}

impl std::fmt::Display for NotFound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            NotFound::NoCurrentFile => "no current file",
            NotFound::NoMatchingConfiguration => "no enabled configuration contains the file",
            NotFound::NoMatchingFileType => "the file does not belong to any configured file type",
        };
        f.write_str(text)
    }
}

/// State derived for the current file once its type is known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryState {
    pub configuration: String,
    pub root: NormalizedPath,
    /// Module value used for `{%}` in related type paths.
    pub module: Option<String>,
    pub file_type: String,
    pub variables: VariableSet,
}

/// How far a query got.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum Outcome {
    NotFound { reason: NotFound },
    Resolved(QueryState),
}

/// Result of resolving related files for one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedFiles {
    outcome: Outcome,
    candidates: Vec<Candidate>,
}

impl RelatedFiles {
    /// Resolve related files for `current_file`.
    ///
    /// Never fails: every failure mode reduces to an empty candidate list,
    /// with the reason kept in [`RelatedFiles::outcome`].
    pub fn resolve<G: Glob + ?Sized>(
        current_file: Option<&NormalizedPath>,
        configs: &ConfigurationSet,
        glob: &G,
        options: ResolveOptions,
    ) -> Self {
        let Some(current_file) = current_file.filter(|f| !f.is_empty()) else {
            return Self::not_found(NotFound::NoCurrentFile);
        };

        let Some(matched) = ConfigurationMatcher::new(configs).find(current_file) else {
            return Self::not_found(NotFound::NoMatchingConfiguration);
        };

        let resolver = PathResolver::new(glob, options);
        let Some(detected) = resolver.detect_type(&matched, current_file) else {
            return Self::not_found(NotFound::NoMatchingFileType);
        };

        let variables = resolver.extract_variables(&matched, current_file, &detected);
        let candidates = resolver.resolve_related(&matched, &detected, &variables);

        tracing::debug!(
            config = %matched.name(),
            file_type = detected.name,
            count = candidates.len(),
            "resolved related files"
        );

        let module = detected.module.clone().or_else(|| matched.module.clone());
        Self {
            outcome: Outcome::Resolved(QueryState {
                configuration: matched.name().to_string(),
                root: matched.root.clone(),
                module,
                file_type: detected.name.to_string(),
                variables,
            }),
            candidates,
        }
    }

    fn not_found(reason: NotFound) -> Self {
        tracing::debug!(%reason, "no related files");
        Self {
            outcome: Outcome::NotFound { reason },
            candidates: Vec::new(),
        }
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn files_found(&self) -> bool {
        !self.candidates.is_empty()
    }

    /// `(label, path)` pairs in display order.
    pub fn items(&self) -> Vec<(String, NormalizedPath)> {
        self.candidates
            .iter()
            .map(|c| (c.label(), c.path.clone()))
            .collect()
    }

    /// Handle the host's choice.
    ///
    /// `None` means the pick was cancelled. Otherwise the parent directories
    /// of the chosen path are created, so the host can open it even when it
    /// is a `Create` candidate, and the candidate is returned.
    pub fn select(&self, selection: Option<usize>) -> Result<Option<&Candidate>> {
        let Some(index) = selection else {
            return Ok(None);
        };
        let candidate = self
            .candidates
            .get(index)
            .ok_or(Error::SelectionOutOfRange {
                index,
                len: self.candidates.len(),
            })?;

        io::ensure_parent_dir(&candidate.path)?;
        Ok(Some(candidate))
    }
}
