//! Selects the configuration whose application root contains a file

use related_fs::NormalizedPath;

use crate::config::{AppConfig, ConfigurationSet};

/// A configuration matched against a concrete file.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchedConfiguration<'a> {
    pub config: &'a AppConfig,
    /// Application root with the module wildcard instantiated.
    pub root: NormalizedPath,
    /// Segment captured by the root's `{%}`, if any.
    pub module: Option<String>,
}

impl MatchedConfiguration<'_> {
    pub fn name(&self) -> &str {
        &self.config.name
    }
}

/// Finds the first enabled configuration that structurally contains a file.
pub struct ConfigurationMatcher<'a> {
    configs: &'a ConfigurationSet,
}

impl<'a> ConfigurationMatcher<'a> {
    pub fn new(configs: &'a ConfigurationSet) -> Self {
        Self { configs }
    }

    /// Match `current_file` against every configuration in priority order.
    ///
    /// Within one configuration the `app_dir` candidate is tried before the
    /// candidates derived from `..` type paths; the first hit wins.
    pub fn find(&self, current_file: &NormalizedPath) -> Option<MatchedConfiguration<'a>> {
        let file = current_file.clean();
        let segments = file.segments();

        for config in self.configs.iter() {
            for candidate in config.candidates() {
                let Some(found) = candidate.pattern.find_in(&segments) else {
                    continue;
                };

                let module = found.module.as_deref();
                let base = segments[..found.start].join("/");
                let root = NormalizedPath::new(format!("{}/{}", base, config.root().render(module)));

                tracing::debug!(
                    config = %config.name,
                    via_type = candidate.via_type.as_deref().unwrap_or("-"),
                    root = %root,
                    module = module.unwrap_or("-"),
                    "matched configuration"
                );
                return Some(MatchedConfiguration {
                    config,
                    root,
                    module: found.module,
                });
            }
        }

        tracing::debug!(file = %file, "no configuration matches");
        None
    }
}
