//! Tests for URL state module

use super::*;
use crate::classification::{Classification, ClassificationSelection};
use crate::dataset::Dataset;
use crate::error::Error;
use crate::pagination::RowsPerPage;
use crate::search::SearchQuery;
use crate::types::{QueryParams, QueryValue};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use test_case::test_case;
use url::Url;

fn params(pairs: &[(&str, QueryValue)]) -> QueryParams {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), v.clone()))
        .collect()
}

// ============================================================================
// Encoding Tests
// ============================================================================

#[test]
fn test_encode_default_state() {
    let encoded = encode(&UrlState::default());
    assert_eq!(
        encoded,
        params(&[("page", QueryValue::Number(1)), ("rows", QueryValue::Number(10))])
    );
}

#[test]
fn test_encode_full_state() {
    let state = UrlState::new(3, RowsPerPage::TwentyFive)
        .with_classification(Some(Classification::NobleGas))
        .with_search(SearchQuery::text("ne"));

    assert_eq!(
        encode(&state),
        params(&[
            ("classification", QueryValue::from("noble-gas")),
            ("page", QueryValue::Number(3)),
            ("q", QueryValue::from("ne")),
            ("rows", QueryValue::Number(25)),
        ])
    );
    assert_eq!(
        encode_query(&state),
        "classification=noble-gas&page=3&q=ne&rows=25"
    );
}

#[test]
fn test_fallback_is_never_selected() {
    let state = UrlState::default().with_classification(Some(Classification::Unknown));
    assert_eq!(state.classification, None);
    assert!(!encode(&state).contains_key(CLASSIFICATION_PARAM));
}

#[test]
fn test_encode_query_escapes_search() {
    let state = UrlState::default().with_search(SearchQuery::text("iron & oxide"));
    assert_eq!(encode_query(&state), "page=1&q=iron+%26+oxide&rows=10");
    assert_eq!(decode_query(&encode_query(&state)).unwrap(), state);
}

// ============================================================================
// Decoding Tests
// ============================================================================

#[test]
fn test_decode_empty_is_default() {
    assert_eq!(decode(&QueryParams::new()).unwrap(), UrlState::default());
    assert_eq!(decode_query("").unwrap(), UrlState::default());
    assert_eq!(decode_query("?").unwrap(), UrlState::default());
}

#[test]
fn test_decode_query_string() {
    let state = decode_query("?page=4&rows=5&classification=lanthanide&utm_source=x").unwrap();
    assert_eq!(state.page, 4);
    assert_eq!(state.rows, RowsPerPage::Five);
    assert_eq!(state.classification, Some(Classification::Lanthanide));
    assert_eq!(state.search, SearchQuery::none());
}

#[test]
fn test_decode_url() {
    let url = Url::parse("https://example.com/compounds?page=2&rows=25&q=salt").unwrap();
    let state = decode_url(&url).unwrap();
    assert_eq!(state.page, 2);
    assert_eq!(state.rows, RowsPerPage::TwentyFive);
    assert_eq!(state.search, SearchQuery::text("salt"));

    let bare = Url::parse("https://example.com/compounds").unwrap();
    assert_eq!(decode_url(&bare).unwrap(), UrlState::default());
}

#[test]
fn test_decode_numeric_values() {
    let state = decode(&params(&[
        ("page", QueryValue::Number(7)),
        ("rows", QueryValue::Number(5)),
    ]))
    .unwrap();
    assert_eq!(state.page, 7);
    assert_eq!(state.rows, RowsPerPage::Five);
}

#[test_case("page=abc" ; "alphabetic page")]
#[test_case("page=" ; "empty page")]
#[test_case("page=-1" ; "negative page")]
#[test_case("page=0" ; "zero page")]
#[test_case("page=1.5" ; "fractional page")]
#[test_case("rows=ten" ; "alphabetic rows")]
fn test_decode_malformed(query: &str) {
    let err = decode_query(query).unwrap_err();
    assert!(matches!(err, Error::MalformedQueryParameter { .. }), "{err}");
    assert!(err.is_user_facing());
}

#[test]
fn test_decode_rows_outside_set() {
    let err = decode_query("rows=7").unwrap_err();
    assert!(matches!(err, Error::InvalidRowsPerPage { value: 7 }));
}

#[test]
fn test_decode_out_of_range_page_is_not_an_error() {
    let state = decode_query("page=999").unwrap();
    assert_eq!(state.page, 999);
    assert_eq!(state.clamped(6).page, 6);
}

#[test_case("halogen" ; "not a bucket")]
#[test_case("unknown" ; "fallback token")]
#[test_case("Noble-Gas" ; "wrong case")]
#[test_case("" ; "empty")]
fn test_decode_unknown_classification_is_no_selection(token: &str) {
    let query = format!("classification={token}");
    assert_eq!(decode_query(&query).unwrap().classification, None);
}

#[test]
fn test_decode_repeated_parameter() {
    let err = decode_query("classification=lanthanide&classification=actinide").unwrap_err();
    assert!(matches!(
        err,
        Error::RepeatedQueryParameter { ref param } if param == "classification"
    ));
}

#[test_case("page=1&rows=5&rows=10", "rows")]
#[test_case("q=ne&page=2&q=ar", "q")]
#[test_case("page=1&page=2", "page")]
fn test_repeated_state_parameter_is_rejected(query: &str, param: &str) {
    let err = parse_query(query).unwrap_err();
    assert!(matches!(
        err,
        Error::RepeatedQueryParameter { param: ref p } if p == param
    ));
}

#[test]
fn test_repeated_untracked_parameter_keeps_first() {
    let parsed = parse_query("page=1&utm=a&utm=b").unwrap();
    assert_eq!(parsed.get("utm"), Some(&QueryValue::Text("a".to_string())));

    let state = decode_query("page=2&utm=a&utm=b&ref=x&ref=y").unwrap();
    assert_eq!(state.page, 2);
}

#[test]
fn test_decode_classification_token() {
    assert_eq!(
        decode_classification("noble-gas"),
        Some(Classification::NobleGas)
    );
    assert_eq!(decode_classification("halogen"), None);
    assert_eq!(decode_classification("unknown"), None);
}

#[test]
fn test_decode_with_default_rows() {
    let parsed = parse_query("page=2").unwrap();
    let state = decode_with(&parsed, RowsPerPage::TwentyFive).unwrap();
    assert_eq!(state.rows, RowsPerPage::TwentyFive);

    let parsed = parse_query("page=2&rows=5").unwrap();
    let state = decode_with(&parsed, RowsPerPage::TwentyFive).unwrap();
    assert_eq!(state.rows, RowsPerPage::Five);
}

#[test]
fn test_parse_query_keeps_text() {
    let parsed = parse_query("?page=2&extra=a%20b").unwrap();
    assert_eq!(parsed.get("page"), Some(&QueryValue::from("2")));
    assert_eq!(parsed.get("extra"), Some(&QueryValue::from("a b")));
}

#[test]
fn test_decode_empty_search_kept() {
    let state = decode_query("q=").unwrap();
    assert_eq!(state.search, SearchQuery::text(""));
}

// ============================================================================
// Round Trip Tests
// ============================================================================

fn classification_strategy() -> impl Strategy<Value = Option<Classification>> {
    prop_oneof![
        Just(None),
        proptest::sample::select(Classification::public().collect::<Vec<_>>()).prop_map(Some),
    ]
}

fn rows_strategy() -> impl Strategy<Value = RowsPerPage> {
    proptest::sample::select(RowsPerPage::ALL.to_vec())
}

fn search_strategy() -> impl Strategy<Value = SearchQuery> {
    proptest::option::of(".{0,12}").prop_map(SearchQuery::new)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn prop_params_round_trip(
        page in 1u32..10_000,
        rows in rows_strategy(),
        classification in classification_strategy(),
    ) {
        let state = UrlState::new(page, rows).with_classification(classification);
        prop_assert_eq!(decode(&encode(&state)).unwrap(), state);
    }

    #[test]
    fn prop_query_string_round_trip(
        page in 1u32..10_000,
        rows in rows_strategy(),
        classification in classification_strategy(),
        search in search_strategy(),
    ) {
        let state = UrlState::new(page, rows)
            .with_classification(classification)
            .with_search(search);
        prop_assert_eq!(decode_query(&encode_query(&state)).unwrap(), state);
    }
}

// ============================================================================
// Route Tests
// ============================================================================

#[test]
fn test_classification_paths() {
    let paths = classification_paths();
    assert_eq!(paths.len(), 10);
    assert_eq!(paths[0], "/classifications/alkaline-metal");
    assert_eq!(paths[5], "/classifications/post-transition-metal");
    assert_eq!(paths[9], "/classifications/unknown");
}

#[test]
fn test_element_paths() {
    let dataset = Dataset::builtin().unwrap();
    let neon = dataset.by_number(10).unwrap();
    assert_eq!(element_path(neon), "/elements/neon");
    assert_eq!(compounds_path(neon), "/elements/neon/list-of-compounds");
}

#[test]
fn test_select_classification_navigation() {
    let selected = ClassificationSelection::none().toggle(Classification::Actinide);
    let nav = select_classification(selected);
    assert_eq!(nav.path, "/classifications/actinide");
    assert!(nav.shallow);
    assert_eq!(nav.href(), "/classifications/actinide");

    let cleared = select_classification(selected.toggle(Classification::Actinide));
    assert_eq!(cleared.path, "/");
    assert!(cleared.shallow);
}

#[test]
fn test_navigation_href_matches_encode_query() {
    let state = UrlState::new(2, RowsPerPage::Five).with_search(SearchQuery::text("a b"));
    let nav = Navigation::with_state("/compounds", &state);
    assert!(!nav.shallow);
    assert_eq!(nav.href(), format!("/compounds?{}", encode_query(&state)));
}
