//! Error types for related-core

/// Result type for related-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in related-core operations
///
/// Resolution itself never fails: an unmatched file or a broken template
/// degrades to fewer candidates. These variants cover the settings boundary
/// and the selection step.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid configuration entry in the settings document
    #[error("Invalid configuration '{name}': {message}")]
    InvalidConfig { name: String, message: String },

    /// Selected index does not name a candidate
    #[error("Selection {index} is out of range ({len} candidates)")]
    SelectionOutOfRange { index: usize, len: usize },

    /// Filesystem error from related-fs
    #[error(transparent)]
    Fs(#[from] related_fs::Error),
}

impl Error {
    pub fn invalid_config(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            name: name.into(),
            message: message.into(),
        }
    }
}
