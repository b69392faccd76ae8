//! Tests for classification module

use super::*;
use test_case::test_case;

// ============================================================================
// Canonicalizer Tests
// ============================================================================

#[test_case("Noble Gas", "noble-gas" ; "two words")]
#[test_case("Alkaline Earth Metal", "alkaline-earth-metal" ; "three words")]
#[test_case("Post-Transition Metal", "post-transition-metal" ; "inner hyphen kept")]
#[test_case("Lanthanide", "lanthanide" ; "single word")]
#[test_case("", "" ; "empty")]
fn test_to_token(input: &str, expected: &str) {
    assert_eq!(to_token(input), expected);
}

#[test_case("Noble Gas", "noble_gas" ; "two words")]
#[test_case("Post-Transition Metal", "post_transition_metal" ; "hyphen becomes underscore")]
#[test_case("Reactive Nonmetal", "reactive_nonmetal" ; "reactive nonmetal")]
#[test_case("", "" ; "empty")]
fn test_to_snake(input: &str, expected: &str) {
    assert_eq!(to_snake(input), expected);
}

#[test]
fn test_canonical_forms_collapse_repeated_spaces() {
    assert_eq!(to_token("  Noble   Gas "), "noble-gas");
    assert_eq!(to_snake("Noble \t Gas"), "noble_gas");
}

// ============================================================================
// Bucket Table Tests
// ============================================================================

#[test]
fn test_bucket_table_matches_enum_order() {
    for (index, classification) in Classification::ALL.into_iter().enumerate() {
        assert_eq!(classification.index(), index);
        assert_eq!(BUCKETS[index].classification, classification);
    }
}

#[test]
fn test_public_tokens_in_declared_order() {
    let tokens: Vec<String> = Classification::public()
        .map(|c| to_token(c.category()))
        .collect();

    assert_eq!(
        tokens,
        vec![
            "alkaline-metal",
            "alkaline-earth-metal",
            "lanthanide",
            "actinide",
            "transition-metal",
            "post-transition-metal",
            "metalloid",
            "reactive-nonmetal",
            "noble-gas",
        ]
    );
}

#[test]
fn test_serde_name_matches_token() {
    for classification in Classification::ALL {
        let json = serde_json::to_string(&classification).unwrap();
        assert_eq!(json, format!("\"{}\"", to_token(classification.category())));
    }
}

#[test]
fn test_only_unknown_is_fallback() {
    let fallbacks: Vec<_> = BUCKETS.iter().filter(|b| b.is_fallback()).collect();
    assert_eq!(fallbacks.len(), 1);
    assert_eq!(fallbacks[0].category, "Unknown");
    assert_eq!(Classification::public().count(), 9);
}

// ============================================================================
// Resolver Tests
// ============================================================================

#[test_case("noble_gas", Classification::NobleGas ; "exact")]
#[test_case("lanthanide_something", Classification::Lanthanide ; "suffix")]
#[test_case("post_transition_metal", Classification::PostTransitionMetal ; "hyphenated category")]
#[test_case("post-transition-metal", Classification::PostTransitionMetal ; "hyphenated code")]
#[test_case("alkaline_earth_metal", Classification::AlkalineEarthMetal ; "longer sibling name")]
#[test_case("transition_metal_group_4", Classification::TransitionMetal ; "transition metal")]
#[test_case("totally_unmatched_code", Classification::Unknown ; "fallback")]
#[test_case("", Classification::Unknown ; "empty code")]
fn test_resolve(code: &str, expected: Classification) {
    assert_eq!(resolve(code).classification, expected);
}

#[test]
fn test_resolve_every_bucket_with_suffix() {
    for classification in Classification::public() {
        let snake = to_snake(classification.category());
        assert_eq!(resolve(&snake).classification, classification);
        assert_eq!(
            resolve(&format!("{snake}_extra")).classification,
            classification
        );
    }
}

#[test]
fn test_resolve_is_prefix_not_contains() {
    assert_eq!(
        resolve("unstable_noble_gas").classification,
        Classification::Unknown
    );
}

// ============================================================================
// Parse Tests
// ============================================================================

#[test]
fn test_parse_round_trip_every_bucket() {
    for bucket in &BUCKETS {
        let parsed = parse(&to_token(bucket.category));
        assert_eq!(parsed, Some(bucket));
    }
}

#[test_case("Noble-Gas" ; "wrong case")]
#[test_case("noble_gas" ; "snake form")]
#[test_case("noble gas" ; "spaced")]
#[test_case("" ; "empty")]
#[test_case("halogen" ; "not a bucket")]
fn test_parse_rejects(token: &str) {
    assert!(parse(token).is_none());
}

// ============================================================================
// Selection Tests
// ============================================================================

#[test]
fn test_selection_toggle() {
    let selection = ClassificationSelection::none();
    assert_eq!(selection.selected(), None);

    let selection = selection.toggle(Classification::NobleGas);
    assert_eq!(selection.selected(), Some(Classification::NobleGas));

    let selection = selection.toggle(Classification::Metalloid);
    assert_eq!(selection.selected(), Some(Classification::Metalloid));

    let selection = selection.toggle(Classification::Metalloid);
    assert_eq!(selection.selected(), None);
}

#[test]
fn test_selection_highlight() {
    let selection = ClassificationSelection::of(Classification::NobleGas);
    assert!(selection.is_highlighted("noble_gas"));
    assert!(!selection.is_highlighted("metalloid"));
    assert!(!ClassificationSelection::none().is_highlighted("noble_gas"));

    let unknown = ClassificationSelection::of(Classification::Unknown);
    assert!(unknown.is_highlighted("no_such_category"));
    assert!(!unknown.is_highlighted("noble_gas"));
}
