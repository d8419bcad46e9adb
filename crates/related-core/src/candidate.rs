//! Related file candidates offered to the caller

use related_fs::NormalizedPath;
use serde::Serialize;

/// Whether a candidate already exists or would be created on selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CandidateKind {
    Open,
    Create,
}

impl CandidateKind {
    pub fn verb(&self) -> &'static str {
        match self {
            CandidateKind::Open => "Open",
            CandidateKind::Create => "Create",
        }
    }
}

/// A proposed related file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub kind: CandidateKind,
    /// Name of the related file type.
    pub file_type: String,
    pub path: NormalizedPath,
}

impl Candidate {
    pub fn open(file_type: impl Into<String>, path: NormalizedPath) -> Self {
        Self {
            kind: CandidateKind::Open,
            file_type: file_type.into(),
            path,
        }
    }

    pub fn create(file_type: impl Into<String>, path: NormalizedPath) -> Self {
        Self {
            kind: CandidateKind::Create,
            file_type: file_type.into(),
            path,
        }
    }

    /// `Open <type> (<basename>)` or `Create <type> (<basename>)`.
    pub fn label(&self) -> String {
        format!(
            "{} {} ({})",
            self.kind.verb(),
            self.file_type,
            self.path.file_name().unwrap_or("")
        )
    }

    pub fn exists(&self) -> bool {
        self.kind == CandidateKind::Open
    }
}

impl std::fmt::Display for Candidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}
