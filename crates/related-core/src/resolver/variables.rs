//! Template variables derived from the current file's path

use related_fs::{NormalizedPath, split_extension};
use serde::Serialize;

use super::DetectedType;

/// Path fragments of the current file, available to `rel_patterns`.
///
/// All values use `/` separators. Relative values carry no leading or
/// trailing separator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VariableSet {
    /// Resolved application root.
    pub app_path: String,
    /// File name without extension and without the type's affixes.
    pub base_filename: String,
    /// Affix-stripped file path below the type directory, no extension.
    pub file_from_type_path: String,
    /// Affix-stripped file path below the application root, no extension.
    pub file_from_app_path: String,
    /// Directory part of `file_from_type_path`.
    pub dir_from_type_path: String,
    /// Extension of the current file, without the dot.
    pub extension: Option<String>,
}

/// Decompose `current_file` relative to its root and detected type.
///
/// The extension is dropped, then the type's suffix and prefix are removed
/// from the final component only; directory names are never touched.
pub fn extract_variables(
    root: &NormalizedPath,
    current_file: &NormalizedPath,
    detected: &DetectedType<'_>,
) -> VariableSet {
    let file = current_file.clean();
    let name = file.file_name().unwrap_or("");
    let (stem, extension) = split_extension(name);
    let base_filename = detected.spec.strip_affixes(stem);

    let stripped = match file.parent() {
        Some(parent) => parent.join(base_filename),
        None => NormalizedPath::new(base_filename),
    };

    let file_from_type_path = stripped
        .strip_dir_prefix(&detected.dir)
        .unwrap_or(stripped.as_str())
        .to_string();
    // A type directory outside the root leaves nothing to strip; keep the
    // full path rather than inventing a relative one.
    let file_from_app_path = stripped
        .strip_dir_prefix(root)
        .unwrap_or(stripped.as_str())
        .to_string();
    let dir_from_type_path = match file_from_type_path.rfind('/') {
        Some(idx) => file_from_type_path[..idx].trim_matches('/').to_string(),
        None => String::new(),
    };

    VariableSet {
        app_path: root.as_str().to_string(),
        base_filename: base_filename.to_string(),
        file_from_type_path,
        file_from_app_path,
        dir_from_type_path,
        extension: extension.map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FileTypeSpec;
    use pretty_assertions::assert_eq;

    fn detected<'a>(spec: &'a FileTypeSpec, dir: &str) -> DetectedType<'a> {
        DetectedType {
            name: "t",
            spec,
            dir: NormalizedPath::new(dir),
            module: None,
        }
    }

    #[test]
    fn test_view_in_subdirectory() {
        let spec = FileTypeSpec {
            path: "views".into(),
            ..Default::default()
        };
        let vars = extract_variables(
            &NormalizedPath::new("/root/application"),
            &NormalizedPath::new("/root/application/views/foo/bar.py"),
            &detected(&spec, "/root/application/views"),
        );

        assert_eq!(
            vars,
            VariableSet {
                app_path: "/root/application".into(),
                base_filename: "bar".into(),
                file_from_type_path: "foo/bar".into(),
                file_from_app_path: "views/foo/bar".into(),
                dir_from_type_path: "foo".into(),
                extension: Some("py".into()),
            }
        );
    }

    #[test]
    fn test_suffix_is_stripped_from_file_name_only() {
        let spec = FileTypeSpec {
            path: "controllers".into(),
            suffix: Some("_controller".into()),
            ..Default::default()
        };
        let vars = extract_variables(
            &NormalizedPath::new("/app"),
            &NormalizedPath::new("/app/controllers/foo_controller.js"),
            &detected(&spec, "/app/controllers"),
        );
        assert_eq!(vars.file_from_type_path, "foo");
        assert_eq!(vars.dir_from_type_path, "");
    }

    #[test]
    fn test_prefix_does_not_eat_directory_names() {
        let spec = FileTypeSpec {
            path: "tests".into(),
            prefix: Some("test_".into()),
            ..Default::default()
        };
        let vars = extract_variables(
            &NormalizedPath::new("/app"),
            &NormalizedPath::new("/app/tests/test_models/test_user.py"),
            &detected(&spec, "/app/tests"),
        );
        assert_eq!(vars.file_from_type_path, "test_models/user");
        assert_eq!(vars.base_filename, "user");
    }

    #[test]
    fn test_type_outside_root_keeps_full_app_path() {
        let spec = FileTypeSpec {
            path: "../shared".into(),
            ..Default::default()
        };
        let vars = extract_variables(
            &NormalizedPath::new("/srv/app/main"),
            &NormalizedPath::new("/srv/app/shared/row.html"),
            &detected(&spec, "/srv/app/shared"),
        );
        assert_eq!(vars.file_from_type_path, "row");
        assert_eq!(vars.file_from_app_path, "/srv/app/shared/row");
    }
}
