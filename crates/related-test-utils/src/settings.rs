//! Canned settings documents.
//!
//! Each constant is a complete TOML settings file. They mirror the
//! application layouts the suites exercise: a Python MVC app, a JavaScript
//! app with per-module trees, and two overlapping PHP layouts.

/// Python layout: views map to a controller named after their directory.
pub const PYTHON_MVC: &str = r#"
enabled_configurations = ["py"]

[py]
app_dir = "application"

[py.file_types.controller]
path = "controllers"
rel_patterns = { view = "${app_path}/${type_path}/${file_from_type_path}/*" }

[py.file_types.view]
path = "views"
rel_patterns = { controller = "${app_path}/${type_path}/${dir_from_type_path}.py" }
"#;

/// JavaScript layout with a module wildcard root and suffixed controllers.
pub const JS_MODULES: &str = r#"
enabled_configurations = ["js"]

[js]
app_dir = "js/{%}"

[js.file_types.controller]
path = "controllers"
suffix = "_controller"
rel_patterns = { view = "${app_path}/${type_path}/${file_from_type_path}/*" }

[js.file_types.view]
path = "views"
rel_patterns = { controller = "${app_path}/${type_path}/${dir_from_type_path}.js" }
"#;

/// Two PHP configurations rooted at the same directory name.
pub const OVERLAPPING_PHP: &str = r#"
enabled_configurations = ["config2", "config3"]

[config2]
app_dir = "application"

[config2.file_types.controller]
path = "controllers"

[config2.file_types.view]
path = "views"
rel_patterns = { controller = "${app_path}/${type_path}/${file_from_type_path}.php" }

[config3]
app_dir = "application"

[config3.file_types.view]
path = "views"
"#;

/// Replace the `enabled_configurations` line of a canned document.
pub fn with_enabled(settings: &str, enabled: &[&str]) -> String {
    let list = enabled
        .iter()
        .map(|name| format!("\"{name}\""))
        .collect::<Vec<_>>()
        .join(", ");
    settings
        .lines()
        .map(|line| {
            if line.starts_with("enabled_configurations") {
                format!("enabled_configurations = [{list}]")
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
