//! Settings schema and the validated set of enabled configurations
//!
//! The settings document names the configurations to consider in
//! `enabled_configurations` and describes each one under its own key:
//!
//! ```toml
//! enabled_configurations = ["py"]
//!
//! [py]
//! app_dir = "application"
//!
//! [py.file_types.view]
//! path = "views"
//! rel_patterns = { controller = "${app_path}/${type_path}/${dir_from_type_path}.py" }
//!
//! [py.file_types.controller]
//! path = "controllers"
//! ```
//!
//! Declaration order of `file_types` and `rel_patterns` is kept; it decides
//! which type wins when several match and the order of the candidates.

use indexmap::IndexMap;
use related_fs::{ConfigStore, NormalizedPath};
use serde::{Deserialize, Serialize};

use crate::pattern::{MODULE_WILDCARD, PathPattern};
use crate::{Error, Result};

/// The whole settings document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Configuration names in priority order.
    #[serde(default)]
    pub enabled_configurations: Vec<String>,

    /// Every other top-level entry, unparsed. Disabled configurations and
    /// unrelated keys may hold anything.
    #[serde(flatten)]
    pub entries: IndexMap<String, serde_json::Value>,
}

impl Settings {
    /// Load settings from a TOML, JSON or YAML file.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        Ok(ConfigStore::new().load(path)?)
    }

    /// Parse the entry stored under `name` as a configuration.
    ///
    /// `Ok(None)` when there is no such entry.
    pub fn configuration(&self, name: &str) -> Result<Option<Configuration>> {
        let Some(value) = self.entries.get(name) else {
            return Ok(None);
        };
        Configuration::deserialize(value)
            .map(Some)
            .map_err(|e| Error::invalid_config(name, e.to_string()))
    }
}

/// One application structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    /// Root directory, possibly with one `{%}` segment.
    pub app_dir: String,

    #[serde(default)]
    pub file_types: IndexMap<String, FileTypeSpec>,
}

impl Configuration {
    pub fn file_type(&self, name: &str) -> Option<&FileTypeSpec> {
        self.file_types.get(name)
    }
}

/// A named category of file, identified by its directory.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FileTypeSpec {
    /// Directory relative to the application root.
    pub path: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,

    /// Target type name to path template.
    #[serde(default)]
    pub rel_patterns: IndexMap<String, String>,
}

impl FileTypeSpec {
    pub fn prefix(&self) -> &str {
        self.prefix.as_deref().unwrap_or("")
    }

    pub fn suffix(&self) -> &str {
        self.suffix.as_deref().unwrap_or("")
    }

    /// Remove this type's suffix, then its prefix, from a file stem.
    ///
    /// An affix is only removed when something is left afterwards.
    pub fn strip_affixes<'a>(&self, stem: &'a str) -> &'a str {
        let stem = match stem.strip_suffix(self.suffix()) {
            Some(rest) if !rest.is_empty() => rest,
            _ => stem,
        };
        match stem.strip_prefix(self.prefix()) {
            Some(rest) if !rest.is_empty() => rest,
            _ => stem,
        }
    }

    /// Wrap a base name in this type's prefix and suffix.
    pub fn apply_affixes(&self, base: &str) -> String {
        format!("{}{}{}", self.prefix(), base, self.suffix())
    }

    /// Whether the type's directory lies outside the application root.
    pub fn has_traversal(&self) -> bool {
        self.path.split('/').any(|segment| segment == "..")
    }
}

/// A root candidate for one configuration: the pattern searched for in the
/// current file, and what it was derived from.
#[derive(Debug, Clone, PartialEq)]
pub struct RootCandidate {
    pub pattern: PathPattern,
    /// `None` for `app_dir` itself, otherwise the file type whose `..` path
    /// produced this candidate.
    pub via_type: Option<String>,
}

/// A validated, enabled configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub name: String,
    pub configuration: Configuration,
    root: PathPattern,
    candidates: Vec<RootCandidate>,
}

impl AppConfig {
    /// Validate a configuration and precompute its root candidates.
    pub fn new(name: impl Into<String>, configuration: Configuration) -> Result<Self> {
        let name = name.into();
        let root = validate_app_dir(&name, &configuration.app_dir)?;

        for (type_name, spec) in &configuration.file_types {
            let pattern = PathPattern::parse(&spec.path).map_err(|e| {
                Error::invalid_config(&name, format!("file type '{type_name}': {e}"))
            })?;
            if pattern.module_count() > 1 {
                return Err(Error::invalid_config(
                    &name,
                    format!("file type '{type_name}' has more than one {MODULE_WILDCARD}"),
                ));
            }
            if spec.path.starts_with('/') {
                return Err(Error::invalid_config(
                    &name,
                    format!("file type '{type_name}' path must be relative"),
                ));
            }
        }

        let candidates = root_candidates(&name, &configuration, &root);
        Ok(Self {
            name,
            configuration,
            root,
            candidates,
        })
    }

    /// The parsed `app_dir`.
    pub fn root(&self) -> &PathPattern {
        &self.root
    }

    /// Root candidates in search order: `app_dir` first, then one per file
    /// type whose path climbs out of the root, in declaration order.
    pub fn candidates(&self) -> &[RootCandidate] {
        &self.candidates
    }
}

fn validate_app_dir(name: &str, app_dir: &str) -> Result<PathPattern> {
    if app_dir.trim_matches('/').is_empty() {
        return Err(Error::invalid_config(name, "app_dir must not be empty"));
    }
    let normalized = NormalizedPath::new(app_dir);
    if normalized.is_absolute() {
        return Err(Error::invalid_config(name, "app_dir must be relative"));
    }
    if normalized.segments().contains(&"..") {
        return Err(Error::invalid_config(name, "app_dir must not contain '..'"));
    }

    let pattern =
        PathPattern::parse(app_dir).map_err(|e| Error::invalid_config(name, e.to_string()))?;
    if pattern.module_count() > 1 {
        return Err(Error::invalid_config(
            name,
            format!("app_dir may contain at most one {MODULE_WILDCARD}"),
        ));
    }
    Ok(pattern)
}

fn root_candidates(name: &str, configuration: &Configuration, root: &PathPattern) -> Vec<RootCandidate> {
    let mut candidates = vec![RootCandidate {
        pattern: root.clone(),
        via_type: None,
    }];

    let app_dir = NormalizedPath::new(&configuration.app_dir);
    for (type_name, spec) in &configuration.file_types {
        if !spec.has_traversal() {
            continue;
        }
        let joined = app_dir.join(&spec.path);
        let Ok(pattern) = PathPattern::parse(joined.as_str()) else {
            continue;
        };
        if pattern.is_empty() || pattern.escapes_base() {
            tracing::debug!(
                config = name,
                file_type = %type_name,
                "type directory climbs above the application base; not usable as a root"
            );
            continue;
        }
        if root.has_module() && !pattern.has_module() {
            tracing::debug!(
                config = name,
                file_type = %type_name,
                "type directory drops the module wildcard; not usable as a root"
            );
            continue;
        }
        candidates.push(RootCandidate {
            pattern,
            via_type: Some(type_name.clone()),
        });
    }
    candidates
}

/// The enabled configurations, validated and in priority order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigurationSet {
    configs: Vec<AppConfig>,
}

impl ConfigurationSet {
    /// Select and validate the enabled configurations.
    ///
    /// Priority is the order of `enabled_configurations`; repeated names keep
    /// their first position. Names without a configuration are skipped.
    /// Entries that are not enabled are never parsed.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let mut configs: Vec<AppConfig> = Vec::new();
        for name in &settings.enabled_configurations {
            if configs.iter().any(|c| &c.name == name) {
                continue;
            }
            match settings.configuration(name)? {
                Some(configuration) => {
                    configs.push(AppConfig::new(name, configuration)?);
                }
                None => {
                    tracing::warn!(config = %name, "enabled configuration not found in settings");
                }
            }
        }
        Ok(Self { configs })
    }

    /// Build a set directly from named configurations, in the given order.
    pub fn from_configurations<I, S>(configurations: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Configuration)>,
        S: Into<String>,
    {
        let configs = configurations
            .into_iter()
            .map(|(name, configuration)| AppConfig::new(name, configuration))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { configs })
    }

    pub fn iter(&self) -> impl Iterator<Item = &AppConfig> {
        self.configs.iter()
    }

    pub fn get(&self, name: &str) -> Option<&AppConfig> {
        self.configs.iter().find(|c| c.name == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.configs.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }
}
