use proptest::prelude::*;
use related_fs::NormalizedPath;

proptest! {
    #[test]
    fn test_normalization_invariants(s in "\\PC*") {
        let path = NormalizedPath::new(&s);
        prop_assert!(!path.as_str().contains('\\'));

        let native = path.to_native();
        let roundtripped = NormalizedPath::new(native);
        prop_assert_eq!(path, roundtripped);
    }

    #[test]
    fn test_clean_is_idempotent(segments in prop::collection::vec("(\\.\\.|\\.|[a-z]{1,4}|)", 0..8), absolute in any::<bool>()) {
        let raw = segments.join("/");
        let raw = if absolute { format!("/{raw}") } else { raw };
        let once = NormalizedPath::new(&raw).clean();
        let twice = once.clean();
        prop_assert_eq!(&once, &twice);

        // No empty or "." segments survive, and ".." only leads.
        let body = once.as_str().trim_start_matches('/');
        if body != "." && !body.is_empty() {
            let parts: Vec<&str> = body.split('/').collect();
            prop_assert!(parts.iter().all(|p| !p.is_empty() && *p != "."));
            let first_real = parts.iter().position(|p| *p != "..").unwrap_or(parts.len());
            prop_assert!(parts[first_real..].iter().all(|p| *p != ".."));
            if absolute {
                prop_assert_eq!(first_real, 0);
            }
        }
    }
}
