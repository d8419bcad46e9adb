//! Filesystem abstraction for goto-related
//!
//! Provides forward-slash path handling, the glob capability used to probe
//! candidate files, and settings loading.

pub mod config;
pub mod error;
pub mod glob;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use self::glob::{Glob, NativeGlob};
pub use path::{NormalizedPath, split_extension};
