//! Property tests for the matcher algebra

use proptest::prelude::*;
use silence_acl_core::{CandidateMatcher, CompiledPattern, RequiredMatcher, any_match};

fn literal(name: &str, value: &str, is_regex: bool, is_equal: bool) -> RequiredMatcher {
    RequiredMatcher::builder()
        .name(name)
        .value(value)
        .is_regex(is_regex)
        .is_equal(is_equal)
        .build()
}

fn candidate(name: &str, value: &str, is_regex: bool, is_equal: bool) -> CandidateMatcher {
    CandidateMatcher::new(name, value)
        .with_regex(is_regex)
        .with_equal(is_equal)
}

proptest! {
    /// Identical literal fields and flags always match
    #[test]
    fn prop_literal_equality(
        name in ".*",
        value in ".*",
        is_regex in any::<bool>(),
        is_equal in any::<bool>(),
    ) {
        let required = literal(&name, &value, is_regex, is_equal);
        prop_assert!(required.is_match(&candidate(&name, &value, is_regex, is_equal)));
    }

    /// Changing the name on one side only flips the result
    #[test]
    fn prop_literal_name_mismatch(
        name in ".*",
        other in ".*",
        value in ".*",
    ) {
        prop_assume!(name != other);
        let required = literal(&name, &value, false, false);
        prop_assert!(!required.is_match(&candidate(&other, &value, false, false)));
    }

    /// Changing the value on one side only flips the result
    #[test]
    fn prop_literal_value_mismatch(
        name in ".*",
        value in ".*",
        other in ".*",
    ) {
        prop_assume!(value != other);
        let required = literal(&name, &value, true, true);
        prop_assert!(!required.is_match(&candidate(&name, &other, true, true)));
    }

    /// Flags must agree exactly, in both directions
    #[test]
    fn prop_flags_are_exact(
        name in "[a-z]{1,8}",
        value in "[a-z]{0,8}",
        required_regex in any::<bool>(),
        required_equal in any::<bool>(),
        candidate_regex in any::<bool>(),
        candidate_equal in any::<bool>(),
    ) {
        let required = literal(&name, &value, required_regex, required_equal);
        let expected = required_regex == candidate_regex && required_equal == candidate_equal;
        prop_assert_eq!(
            required.is_match(&candidate(&name, &value, candidate_regex, candidate_equal)),
            expected
        );
    }

    /// A name pattern makes the literal name irrelevant
    #[test]
    fn prop_pattern_ignores_literal(
        literal_name in ".*",
        name in "[a-z]{1,16}",
        value in "[a-z]{0,8}",
    ) {
        let required = RequiredMatcher::builder()
            .name(literal_name)
            .name_regex(CompiledPattern::new("^[a-z]+$").unwrap())
            .value(value.clone())
            .build();
        prop_assert!(required.is_match(&candidate(&name, &value, false, false)));
    }

    /// Anchored patterns never match a strict superstring
    #[test]
    fn prop_anchored_pattern_is_full_match(
        name in "[a-z]{1,8}",
        prefix in "[a-z]{1,4}",
    ) {
        let pattern = CompiledPattern::anchored(name.clone()).unwrap();
        prop_assert!(pattern.is_match(&name));
        let prefixed = format!("{}{}", prefix, name);
        prop_assert!(!pattern.is_match(&prefixed));
    }

    /// Evaluation is deterministic
    #[test]
    fn prop_deterministic(
        name in ".*",
        value in ".*",
        is_regex in any::<bool>(),
    ) {
        let required = RequiredMatcher::builder()
            .name_regex(CompiledPattern::new("^a").unwrap())
            .value(value.clone())
            .is_regex(is_regex)
            .build();
        let c = candidate(&name, &value, is_regex, false);
        prop_assert_eq!(required.is_match(&c), required.is_match(&c));
    }

    /// any_match is the OR of the individual decisions
    #[test]
    fn prop_any_match_is_or(
        names in proptest::collection::vec("[a-c]", 0..5),
        name in "[a-c]",
    ) {
        let rules: Vec<RequiredMatcher> =
            names.iter().map(|n| literal(n, "v", false, true)).collect();
        let c = candidate(&name, "v", false, true);
        prop_assert_eq!(any_match(&rules, &c), names.contains(&name));
    }
}
