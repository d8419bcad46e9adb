//! The same settings document in every supported format resolves alike.

use pretty_assertions::assert_eq;
use related_core::{ConfigurationSet, RelatedFiles, ResolveOptions, Settings};
use related_fs::{NativeGlob, NormalizedPath};
use related_test_utils::TestTree;
use rstest::rstest;

fn toml_fixture() -> Settings {
    let path = NormalizedPath::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../test-fixtures/settings/goto-related.toml");
    Settings::load(&path).unwrap()
}

fn render(settings: &Settings, extension: &str) -> String {
    match extension {
        "json" | "sublime-settings" => serde_json::to_string_pretty(settings).unwrap(),
        "yaml" | "yml" => serde_yaml::to_string(settings).unwrap(),
        other => panic!("no renderer for {other}"),
    }
}

#[rstest]
#[case("json")]
#[case("sublime-settings")]
#[case("yaml")]
#[case("yml")]
fn test_format_round_trip_keeps_order(#[case] extension: &str) {
    let expected = toml_fixture();
    let tree = TestTree::new();
    let path = tree.write(&format!("goto-related.{extension}"), &render(&expected, extension));

    let loaded = Settings::load(&path).unwrap();

    assert_eq!(loaded, expected);
    assert_eq!(
        loaded.entries.keys().collect::<Vec<_>>(),
        expected.entries.keys().collect::<Vec<_>>()
    );
}

#[rstest]
#[case("json")]
#[case("yaml")]
fn test_format_does_not_change_candidates(#[case] extension: &str) {
    let toml_settings = toml_fixture();
    let tree = TestTree::new();
    let path = tree.write(&format!("settings.{extension}"), &render(&toml_settings, extension));
    let other_settings = Settings::load(&path).unwrap();

    let component = tree.file("src/app/heroes/components/hero.component.ts");
    tree.file("src/app/heroes/templates/hero.html");
    tree.dir("test/heroes");

    let resolve = |settings: &Settings| {
        let configs = ConfigurationSet::from_settings(settings).unwrap();
        RelatedFiles::resolve(Some(&component), &configs, &NativeGlob, ResolveOptions::default())
            .items()
    };

    assert_eq!(resolve(&other_settings), resolve(&toml_settings));
    assert_eq!(resolve(&toml_settings).len(), 2);
}
