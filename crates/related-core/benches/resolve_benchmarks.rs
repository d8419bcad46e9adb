use criterion::{Criterion, black_box, criterion_group, criterion_main};
use related_core::{ConfigurationMatcher, ConfigurationSet, RelatedFiles, ResolveOptions, Settings};
use related_fs::{NativeGlob, NormalizedPath};
use std::fs;
use tempfile::tempdir;

const SETTINGS: &str = r#"
enabled_configurations = ["php", "js"]

[php]
app_dir = "application"

[php.file_types.controller]
path = "controllers"
rel_patterns = { view = "${app_path}/${type_path}/${file_from_type_path}/*" }

[php.file_types.view]
path = "views"
rel_patterns = { controller = "${app_path}/${type_path}/${dir_from_type_path}.php" }

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

fn configs() -> ConfigurationSet {
    let settings: Settings = toml::from_str(SETTINGS).unwrap();
    ConfigurationSet::from_settings(&settings).unwrap()
}

fn matcher_benchmark(c: &mut Criterion) {
    let set = configs();
    let matcher = ConfigurationMatcher::new(&set);

    c.bench_function("matcher::find (wildcard root)", |b| {
        let file = NormalizedPath::new("/srv/site/public/js/admin/views/users/list.js");
        b.iter(|| {
            let _ = matcher.find(black_box(&file)).unwrap();
        })
    });

    c.bench_function("matcher::find (no match)", |b| {
        let file = NormalizedPath::new("/srv/site/docs/guide/index.md");
        b.iter(|| {
            assert!(matcher.find(black_box(&file)).is_none());
        })
    });
}

fn resolve_benchmark(c: &mut Criterion) {
    let set = configs();

    c.bench_function("RelatedFiles::resolve (controller to views)", |b| {
        let dir = tempdir().unwrap();
        let views = dir.path().join("js/admin/views/users");
        fs::create_dir_all(&views).unwrap();
        for name in ["list.js", "show.js", "edit.js", "form.js"] {
            fs::write(views.join(name), "").unwrap();
        }
        let controller = dir.path().join("js/admin/controllers/users_controller.js");
        fs::create_dir_all(controller.parent().unwrap()).unwrap();
        fs::write(&controller, "").unwrap();
        let file = NormalizedPath::new(&controller);

        b.iter(|| {
            let related =
                RelatedFiles::resolve(Some(black_box(&file)), &set, &NativeGlob, ResolveOptions::default());
            assert_eq!(related.candidates().len(), 4);
        })
    });
}

criterion_group!(benches, matcher_benchmark, resolve_benchmark);
criterion_main!(benches);
