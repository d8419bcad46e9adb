use proptest::prelude::*;
use related_core::resolver::splice_affixes;
use related_core::{FileTypeSpec, PathPattern};
use related_fs::NormalizedPath;

fn affix() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("[a-z_]{1,8}")
}

proptest! {
    #[test]
    fn stripping_undoes_applying(base in "[a-zA-Z0-9_]{1,12}", prefix in affix(), suffix in affix()) {
        let spec = FileTypeSpec {
            path: "t".into(),
            prefix,
            suffix,
            ..Default::default()
        };
        let named = spec.apply_affixes(&base);
        prop_assert_eq!(spec.strip_affixes(&named), base.as_str());
    }

    #[test]
    fn stripping_never_empties_a_name(stem in "[a-z_]{1,10}", prefix in affix(), suffix in affix()) {
        let spec = FileTypeSpec {
            path: "t".into(),
            prefix,
            suffix,
            ..Default::default()
        };
        prop_assert!(!spec.strip_affixes(&stem).is_empty());
    }

    #[test]
    fn star_components_are_never_spliced(dir in "(/[a-z]{1,6}){1,4}", ext in proptest::option::of("[a-z]{1,3}")) {
        let pattern = match ext {
            Some(ext) => format!("{dir}/*.{ext}"),
            None => format!("{dir}/*"),
        };
        prop_assert_eq!(splice_affixes(&pattern, "pre_", "_suf"), pattern);
    }

    #[test]
    fn literal_patterns_render_to_their_clean_form(path in "[a-z]{1,5}(/[a-z.]{1,5}){0,5}") {
        let pattern = PathPattern::parse(&path).unwrap();
        let clean = NormalizedPath::new(&path).clean();
        prop_assert_eq!(pattern.render(None), clean.as_str());
    }
}
