//! Configuration-driven related file resolution
//!
//! Given the path of the file being edited and a set of application
//! configurations, this crate finds the files that belong with it by
//! convention: the controller for a view, the spec for a model, the
//! template for a component.
//!
//! # Pipeline
//!
//! ```text
//!  current file + ConfigurationSet
//!            |
//!   ConfigurationMatcher      -> configuration, resolved root, module
//!            |
//!   PathResolver::detect_type -> file type
//!            |
//!   extract_variables         -> ${app_path}, ${file_from_type_path}, ...
//!            |
//!   resolve_related           -> Open/Create candidates
//! ```
//!
//! Every query is a pure function of the file path, the configuration set
//! and the filesystem at call time. Nothing is cached between queries.
//!
//! # Example
//!
//! ```no_run
//! use related_core::{ConfigurationSet, RelatedFiles, ResolveOptions, Settings};
//! use related_fs::{NativeGlob, NormalizedPath};
//!
//! fn example() -> related_core::Result<()> {
//!     let settings = Settings::load(&NormalizedPath::new("goto-related.toml"))?;
//!     let configs = ConfigurationSet::from_settings(&settings)?;
//!     let file = NormalizedPath::new("/srv/app/application/views/foo/bar.py");
//!
//!     let related = RelatedFiles::resolve(Some(&file), &configs, &NativeGlob, ResolveOptions::default());
//!     for (label, path) in related.items() {
//!         println!("{label}: {path}");
//!     }
//!     Ok(())
//! }
//! ```

pub mod candidate;
pub mod config;
pub mod error;
pub mod matcher;
pub mod pattern;
pub mod resolver;
pub mod selector;

pub use candidate::{Candidate, CandidateKind};
pub use config::{AppConfig, Configuration, ConfigurationSet, FileTypeSpec, Settings};
pub use error::{Error, Result};
pub use matcher::{ConfigurationMatcher, MatchedConfiguration};
pub use pattern::{MODULE_WILDCARD, PathPattern};
pub use resolver::{DetectedType, PathResolver, ResolveOptions, VariableSet, detect_type};
pub use selector::{NotFound, Outcome, QueryState, RelatedFiles};
