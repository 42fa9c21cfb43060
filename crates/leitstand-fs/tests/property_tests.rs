use leitstand_fs::NormalizedPath;
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_normalized_paths_have_no_backslashes(s in "\\PC*") {
        let path = NormalizedPath::new(&s);
        prop_assert!(!path.as_str().contains('\\'));

        let roundtripped = NormalizedPath::new(path.to_native());
        prop_assert_eq!(path, roundtripped);
    }

    #[test]
    fn test_relative_join_keeps_base_prefix(
        base in "[a-z]{1,8}(/[a-z]{1,8}){0,3}",
        segment in "[a-z]{1,8}(\\.yaml)?",
    ) {
        let joined = NormalizedPath::new(&base).join(&segment);
        prop_assert!(joined.as_str().starts_with(&base));
        prop_assert_eq!(joined.file_name(), Some(segment.as_str()));
        prop_assert_eq!(joined.parent().map(|p| p.as_str().to_string()), Some(base.clone()));
    }
}
