//! Configuration capture/parse round-trips and wire compatibility.

use certkit_element_programs::{FieldSelector, ProgramFieldConfig};
use certkit_element_sdk::{ElementError, dates};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

// ================================================================
// Capture
// ================================================================

#[test]
fn capture_bare_selector_stores_its_token() {
    let config = ProgramFieldConfig::capture(FieldSelector::IdNumber, None).unwrap();
    assert_eq!(config.to_stored(), "idnumber");
    assert_eq!(config.date_format(), None);
}

#[test]
fn capture_completion_with_format_packs_json() {
    let config = ProgramFieldConfig::capture(
        FieldSelector::TimeCompleted,
        Some(dates::FORMAT_DATE_FULL_SHORT_LEADING_ZERO.to_string()),
    )
    .unwrap();
    let stored = config.to_stored();
    let value: serde_json::Value = serde_json::from_str(&stored).unwrap();
    assert_eq!(value["dateitem"], "timecompleted");
    assert_eq!(value["dateformat"], dates::FORMAT_DATE_FULL_SHORT_LEADING_ZERO);
}

#[test]
fn capture_rejects_format_on_non_completion_selector() {
    let err = ProgramFieldConfig::capture(
        FieldSelector::IdNumber,
        Some(dates::FORMAT_DATE.to_string()),
    )
    .unwrap_err();
    match err {
        ElementError::DateFormatNotApplicable { selector, format } => {
            assert_eq!(selector, "idnumber");
            assert_eq!(format, dates::FORMAT_DATE);
        }
        other => panic!("unexpected error: {other}"),
    }
}

// ================================================================
// Parse
// ================================================================

#[test]
fn parse_bare_tokens() {
    assert_eq!(
        ProgramFieldConfig::parse("fullname"),
        ProgramFieldConfig::Bare(FieldSelector::FullName)
    );
    assert_eq!(
        ProgramFieldConfig::parse("timecompleted"),
        ProgramFieldConfig::Bare(FieldSelector::TimeCompleted)
    );
}

#[test]
fn parse_packed_completion_config() {
    let config =
        ProgramFieldConfig::parse(r#"{"dateitem":"timecompleted","dateformat":"strftimedate"}"#);
    assert_eq!(
        config,
        ProgramFieldConfig::DatedCompletion {
            format: "strftimedate".to_string()
        }
    );
    assert_eq!(config.selector(), FieldSelector::TimeCompleted);
}

#[test]
fn parse_drops_format_for_non_completion_dateitem() {
    let config =
        ProgramFieldConfig::parse(r#"{"dateitem":"fullname","dateformat":"strftimedate"}"#);
    assert_eq!(config, ProgramFieldConfig::Bare(FieldSelector::FullName));
    assert_eq!(config.date_format(), None);
}

#[test]
fn parse_treats_garbage_as_bare_selector() {
    let config = ProgramFieldConfig::parse("{not valid json");
    assert_eq!(
        config,
        ProgramFieldConfig::Bare(FieldSelector::Other("{not valid json".to_string()))
    );
}

#[test]
fn parse_is_not_fooled_by_tokens_containing_the_completion_word() {
    // The old substring probe would have tried to unpack this as JSON.
    let config = ProgramFieldConfig::parse("timecompleted2");
    assert_eq!(
        config,
        ProgramFieldConfig::Bare(FieldSelector::Other("timecompleted2".to_string()))
    );
}

// ================================================================
// Round-trips
// ================================================================

#[test]
fn completion_config_round_trips_through_storage() {
    let original = ProgramFieldConfig::capture(
        FieldSelector::TimeCompleted,
        Some(dates::FORMAT_DATE_FULL_SHORT_LEADING_ZERO.to_string()),
    )
    .unwrap();
    let restored = ProgramFieldConfig::parse(&original.to_stored());
    assert_eq!(restored, original);
    assert_eq!(
        restored.date_format(),
        Some(dates::FORMAT_DATE_FULL_SHORT_LEADING_ZERO)
    );
}

#[test]
fn bare_selectors_round_trip_with_no_format() {
    for token in ["fullname", "idnumber", "url", "custom"] {
        let original =
            ProgramFieldConfig::capture(FieldSelector::from(token), None).unwrap();
        let restored = ProgramFieldConfig::parse(&original.to_stored());
        assert_eq!(restored, original, "token {token}");
        assert_eq!(restored.date_format(), None, "token {token}");
    }
}

proptest! {
    #[test]
    fn any_lowercase_token_round_trips(token in "[a-z]{1,16}") {
        let original = ProgramFieldConfig::Bare(FieldSelector::from(token.as_str()));
        let restored = ProgramFieldConfig::parse(&original.to_stored());
        prop_assert_eq!(restored, original);
    }
}
