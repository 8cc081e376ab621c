//! Property-based tests for the path algebra.

use super::Path;
use proptest::prelude::*;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn hash_of(path: &Path) -> u64 {
    let mut hasher = DefaultHasher::new();
    path.hash(&mut hasher);
    hasher.finish()
}

fn component_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => "[a-z0-9_-]{1,8}",
        1 => Just(".".to_string()),
        1 => Just("..".to_string()),
        1 => Just(String::new()),
    ]
}

fn relative_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(component_strategy(), 1..8)
        .prop_map(|parts| parts.join("/"))
        .prop_filter("non-empty", |s| !s.is_empty() && !s.starts_with('/'))
}

fn path_strategy() -> impl Strategy<Value = String> {
    (any::<bool>(), relative_strategy())
        .prop_map(|(absolute, rest)| if absolute { format!("/{rest}") } else { rest })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 5000,
        .. ProptestConfig::default()
    })]

    // Normalization is idempotent: normalize(normalize(p)) == normalize(p)
    #[test]
    fn path_normalization_idempotent(raw in path_strategy()) {
        let once = Path::new(raw).normalize();
        prop_assert_eq!(once.normalize(), once);
    }

    // Making an absolute path absolute again changes nothing
    #[test]
    fn absolute_idempotent(rest in relative_strategy()) {
        let once = Path::new(format!("/{rest}")).absolute();
        prop_assert!(once.is_absolute());
        prop_assert_eq!(once.absolute(), once);
    }

    // Normalized absolute paths never contain ".."
    #[test]
    fn normalized_absolute_paths_no_parent_refs(rest in relative_strategy()) {
        let normalized = Path::new(format!("/{rest}")).normalize();
        prop_assert!(normalized.components().iter().all(|c| c != ".."));
    }

    // Normalized relative paths only keep ".." as a prefix
    #[test]
    fn normalized_relative_parent_refs_lead(raw in relative_strategy()) {
        let normalized = Path::new(raw).normalize();
        let components = normalized.components();
        let leading = components.iter().take_while(|c| *c == "..").count();
        prop_assert!(components[leading..].iter().all(|c| c != ".."));
        if normalized != "." {
            prop_assert!(components.iter().all(|c| !c.is_empty() && c != "."));
        }
    }

    // Splitting into components is lossless
    #[test]
    fn components_round_trip(raw in path_strategy()) {
        let path = Path::new(raw);
        prop_assert_eq!(Path::from_components(path.components()), path);
    }

    // Appending "." leaves a normalized path unchanged
    #[test]
    fn append_current_is_identity(raw in path_strategy()) {
        let normalized = Path::new(raw).normalize();
        prop_assert_eq!(&normalized + ".", normalized);
    }

    // Appending agrees with normalizing the textual concatenation
    #[test]
    fn append_matches_lexical_join(lhs in path_strategy(), rhs in relative_strategy()) {
        let appended = (Path::new(lhs.clone()) + rhs.as_str()).normalize();
        let joined = Path::new(format!("{lhs}/{rhs}")).normalize();
        prop_assert_eq!(appended, joined);
    }

    // An absolute right-hand side replaces the base
    #[test]
    fn append_absolute_replaces(lhs in path_strategy(), rest in relative_strategy()) {
        let rhs = format!("/{rest}");
        prop_assert_eq!(Path::new(lhs) + rhs.as_str(), Path::new(rhs));
    }

    // A leading "." adds nothing
    #[test]
    fn current_prefix_is_identity(raw in path_strategy()) {
        let normalized = Path::new(raw).normalize();
        prop_assert_eq!(Path::new(".") + &normalized, normalized);
    }

    // Equal paths hash equally
    #[test]
    fn hash_agrees_with_equality(a in path_strategy(), b in path_strategy()) {
        let (pa, pb) = (Path::new(a).normalize(), Path::new(b).normalize());
        if pa == pb {
            prop_assert_eq!(hash_of(&pa), hash_of(&pb));
        }
        prop_assert_eq!(hash_of(&pa), hash_of(&pa.clone()));
    }

    // Ordering and equality follow the underlying string
    #[test]
    fn ordering_matches_strings(a in path_strategy(), b in path_strategy()) {
        prop_assert_eq!(Path::new(a.clone()).cmp(&Path::new(b.clone())), a.cmp(&b));
        prop_assert_eq!(Path::new(a.clone()) == Path::new(b.clone()), a == b);
    }
}
