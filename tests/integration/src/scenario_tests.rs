//! End-to-end scenarios over the shipped sample settings
//!
//! Each test builds an application tree, loads
//! `test-fixtures/settings/goto-related.toml` and runs a full query:
//! settings -> configuration match -> type detection -> candidates.

use pretty_assertions::assert_eq;
use related_core::{ConfigurationSet, NotFound, Outcome, RelatedFiles, ResolveOptions, Settings};
use related_fs::{NativeGlob, NormalizedPath};
use related_test_utils::TestTree;
use rstest::rstest;

fn fixture_settings() -> ConfigurationSet {
    let path = NormalizedPath::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../test-fixtures/settings/goto-related.toml");
    let settings = Settings::load(&path).unwrap();
    ConfigurationSet::from_settings(&settings).unwrap()
}

fn query(file: &NormalizedPath) -> RelatedFiles {
    RelatedFiles::resolve(Some(file), &fixture_settings(), &NativeGlob, ResolveOptions::default())
}

fn labels(related: &RelatedFiles) -> Vec<String> {
    related.candidates().iter().map(|c| c.label()).collect()
}

#[test]
fn test_kohana_view_to_controller() {
    let tree = TestTree::new();
    let view = tree.file("application/views/users/list.php");
    let controller = tree.file("application/classes/controller/users.php");

    let related = query(&view);

    assert_eq!(related.items(), vec![("Open controller (users.php)".to_string(), controller)]);
}

#[test]
fn test_kohana_controller_lists_views_and_offers_model() {
    let tree = TestTree::new();
    let controller = tree.file("application/classes/controller/users.php");
    tree.file("application/views/users/list.php");
    tree.file("application/views/users/edit.php");
    tree.dir("application/classes/model");

    let related = query(&controller);

    assert_eq!(
        labels(&related),
        vec![
            "Open view (edit.php)",
            "Open view (list.php)",
            "Create model (users.php)",
        ]
    );
}

#[test]
fn test_angular_component_reaches_template_and_spec() {
    let tree = TestTree::new();
    let component = tree.file("src/app/heroes/components/hero.component.ts");
    let template = tree.file("src/app/heroes/templates/hero.html");
    tree.dir("test/heroes");

    let related = query(&component);

    assert_eq!(
        related.items(),
        vec![
            ("Open template (hero.html)".to_string(), template),
            ("Create spec (hero.spec.ts)".to_string(), tree.path("test/heroes/hero.spec.ts")),
        ]
    );
}

#[test]
fn test_angular_spec_finds_component_of_same_module() {
    let tree = TestTree::new();
    let spec = tree.file("test/heroes/hero.spec.ts");
    let component = tree.file("src/app/heroes/components/hero.component.ts");
    tree.file("src/app/villains/components/hero.component.ts");

    let related = query(&spec);

    assert_eq!(related.items(), vec![("Open component (hero.component.ts)".to_string(), component)]);
    let Outcome::Resolved(state) = related.outcome() else {
        panic!("spec should resolve");
    };
    assert_eq!(state.configuration, "angular");
    assert_eq!(state.module.as_deref(), Some("heroes"));
    assert_eq!(state.root, tree.path("src/app/heroes"));
}

#[test]
fn test_rails_controller_to_model_and_views() {
    let tree = TestTree::new();
    let controller = tree.file("app/controllers/users_controller.rb");
    tree.file("app/models/users.rb");
    tree.file("app/views/users/index.html.erb");

    let related = query(&controller);

    assert_eq!(
        labels(&related),
        vec!["Open model (users.rb)", "Open view (index.html.erb)"]
    );
}

#[test]
fn test_rails_spec_outside_app_dir() {
    let tree = TestTree::new();
    let spec = tree.file("spec/models/user_spec.rb");
    let model = tree.file("app/models/user.rb");

    let related = query(&spec);

    assert_eq!(related.items(), vec![("Open model (user.rb)".to_string(), model)]);
}

#[rstest]
#[case::unconfigured_tree("lib/tasks/seed.rb", NotFound::NoMatchingConfiguration)]
#[case::unconfigured_type("application/i18n/en.php", NotFound::NoMatchingFileType)]
fn test_files_without_related_files(#[case] rel: &str, #[case] reason: NotFound) {
    let tree = TestTree::new();
    let file = tree.file(rel);

    let related = query(&file);

    assert!(!related.files_found());
    assert_eq!(related.outcome(), &Outcome::NotFound { reason });
}

#[test]
fn test_selection_then_requery_opens_created_file() {
    let tree = TestTree::new();
    let view = tree.file("application/views/users/list.php");
    tree.dir("application/classes/controller");

    let first = query(&view);
    let chosen = first.select(Some(0)).unwrap().unwrap();
    assert_eq!(chosen.label(), "Create controller (users.php)");

    // The host writes the file after opening it.
    std::fs::write(chosen.path.to_native(), "<?php").unwrap();

    let second = query(&view);
    assert_eq!(labels(&second), vec!["Open controller (users.php)"]);
}
