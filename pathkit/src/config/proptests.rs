//! Property-based tests for configuration merging.

use super::merger::ConfigMerger;
use super::schema::{Config, GlobConfig, OutputFormat, WalkConfig};
use proptest::prelude::*;

fn output_strategy() -> impl Strategy<Value = Option<OutputFormat>> {
    prop::option::of(prop_oneof![Just(OutputFormat::Plain), Just(OutputFormat::Json)])
}

fn walk_strategy() -> impl Strategy<Value = WalkConfig> {
    (
        prop::option::of(any::<bool>()),
        prop::option::of(any::<bool>()),
        prop::option::of(1usize..64),
    )
        .prop_map(|(include_hidden, follow_links, max_depth)| WalkConfig {
            include_hidden,
            follow_links,
            max_depth,
        })
}

fn glob_strategy() -> impl Strategy<Value = GlobConfig> {
    (
        prop::option::of(any::<bool>()),
        prop::option::of(any::<bool>()),
        prop::option::of(any::<bool>()),
    )
        .prop_map(|(case_sensitive, separator, leading_dot)| GlobConfig {
            case_sensitive,
            require_literal_separator: separator,
            require_literal_leading_dot: leading_dot,
        })
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        output_strategy(),
        prop::option::of(walk_strategy()),
        prop::option::of(glob_strategy()),
    )
        .prop_map(|(output, walk, glob)| Config { output, walk, glob })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Merging an empty layer changes nothing
    #[test]
    fn config_merge_empty_is_identity(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &Config::default());
        prop_assert_eq!(merged, config);
    }

    // Merging into an empty target yields the source
    #[test]
    fn config_merge_into_empty_yields_source(config in config_strategy()) {
        let mut merged = Config::default();
        ConfigMerger::merge_into(&mut merged, &config);
        prop_assert_eq!(merged, config);
    }

    // Set values in the higher layer always win; unset ones fall through
    #[test]
    fn config_merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut merged = low.clone();
        ConfigMerger::merge_into(&mut merged, &high);

        prop_assert_eq!(merged.output, high.output.or(low.output));

        let low_walk = low.walk.clone().unwrap_or_default();
        let high_walk = high.walk.clone().unwrap_or_default();
        let walk = merged.walk.clone().unwrap_or_default();
        prop_assert_eq!(walk.include_hidden, high_walk.include_hidden.or(low_walk.include_hidden));
        prop_assert_eq!(walk.follow_links, high_walk.follow_links.or(low_walk.follow_links));
        prop_assert_eq!(walk.max_depth, high_walk.max_depth.or(low_walk.max_depth));

        let low_glob = low.glob.clone().unwrap_or_default();
        let high_glob = high.glob.clone().unwrap_or_default();
        let glob = merged.glob.clone().unwrap_or_default();
        prop_assert_eq!(glob.case_sensitive, high_glob.case_sensitive.or(low_glob.case_sensitive));
    }

    // Merging the same layer twice is the same as merging it once
    #[test]
    fn config_merge_idempotent(low in config_strategy(), high in config_strategy()) {
        let mut once = low.clone();
        ConfigMerger::merge_into(&mut once, &high);
        let mut twice = once.clone();
        ConfigMerger::merge_into(&mut twice, &high);
        prop_assert_eq!(once, twice);
    }
}
