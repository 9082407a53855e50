//! Tests for the SDK seams: issue snapshot access, date formats, text
//! helpers, and the built-in English catalog.

use certkit_element_sdk::*;
use pretty_assertions::assert_eq;

// 2024-03-03 02:30:00 UTC — a Sunday with a single-digit day of month.
const MARCH_THIRD: i64 = 1_709_433_000;

// ================================================================
// Issue snapshot access
// ================================================================

#[test]
fn issue_record_reads_string_fields() {
    let issue = IssueRecord::from_json(r#"{"programfullname":"Program 001","programid":7}"#);
    assert_eq!(issue.get_str("programfullname"), Some("Program 001"));
    assert_eq!(issue.get_str("missing"), None);
}

#[test]
fn issue_record_accepts_numeric_strings() {
    let issue = IssueRecord::from_json(r#"{"programid":"42","programtimecompleted":1700000000}"#);
    assert_eq!(issue.get_i64("programid"), Some(42));
    assert_eq!(issue.get_i64("programtimecompleted"), Some(1_700_000_000));
}

#[test]
fn issue_record_display_coerces_numbers() {
    let issue = IssueRecord::from_json(r#"{"programid":7,"programidnumber":"P001"}"#);
    assert_eq!(issue.get_display("programid"), Some("7".to_string()));
    assert_eq!(issue.get_display("programidnumber"), Some("P001".to_string()));
}

#[test]
fn malformed_issue_json_degrades_to_empty_record() {
    let issue = IssueRecord::from_json("this is not json");
    assert!(issue.is_empty());
    assert_eq!(issue.get_str("programfullname"), None);
}

#[test]
fn non_object_issue_json_degrades_to_empty_record() {
    let issue = IssueRecord::from_json(r#"[1,2,3]"#);
    assert!(issue.is_empty());
    assert_eq!(issue.get_i64("programid"), None);
}

// ================================================================
// Date formats
// ================================================================

#[test]
fn registered_formats_resolve_to_patterns() {
    assert_eq!(dates::pattern(dates::FORMAT_DATE), Some("%-d %B %Y"));
    assert_eq!(dates::pattern(dates::FORMAT_DATE_FULL_SHORT), Some("%-d/%m/%y"));
    assert_eq!(dates::pattern("nosuchformat"), None);
    // The leading-zero alias is not a registered name.
    assert_eq!(dates::pattern(dates::FORMAT_DATE_FULL_SHORT_LEADING_ZERO), None);
}

#[test]
fn chrono_renderer_formats_utc() {
    let renderer = ChronoDateRenderer;
    assert_eq!(renderer.render(MARCH_THIRD, "%-d %B %Y"), "3 March 2024");
    assert_eq!(renderer.render(MARCH_THIRD, "%A, %-d %B %Y"), "Sunday, 3 March 2024");
}

#[test]
fn leading_zero_pattern_differs_from_default_short() {
    let renderer = ChronoDateRenderer;
    let with_zero = renderer.render(MARCH_THIRD, dates::LEADING_ZERO_SHORT_PATTERN);
    let without = renderer.render(
        MARCH_THIRD,
        dates::pattern(dates::FORMAT_DATE_FULL_SHORT).unwrap(),
    );
    assert_eq!(with_zero, "03/03/24");
    assert_eq!(without, "3/03/24");
    assert_ne!(with_zero, without);
}

#[test]
fn format_options_use_example_labels() {
    let renderer = ChronoDateRenderer;
    let options = dates::format_options(&renderer, MARCH_THIRD);
    assert_eq!(options.len(), 6);
    assert!(options.iter().any(|o| o.label == "3 March 2024"));
    let zero = options
        .iter()
        .find(|o| o.value == dates::FORMAT_DATE_FULL_SHORT_LEADING_ZERO)
        .expect("leading-zero option present");
    assert_eq!(zero.label, "03/03/24");
}

// ================================================================
// Text helpers
// ================================================================

#[test]
fn escape_html_covers_markup_characters() {
    assert_eq!(
        text::escape_html(r#"<b>"P&Q's"</b>"#),
        "&lt;b&gt;&quot;P&amp;Q&#39;s&quot;&lt;/b&gt;"
    );
}

#[test]
fn anchor_escapes_href_and_text() {
    assert_eq!(
        text::anchor("https://x.test/?a=1&b=2", "see & click"),
        "<a href=\"https://x.test/?a=1&amp;b=2\">see &amp; click</a>"
    );
}

// ================================================================
// Catalog
// ================================================================

#[test]
fn english_catalog_carries_field_labels() {
    let catalog = EnglishCatalog;
    assert_eq!(catalog.string(keys::PROGRAM_NAME), Some("Program name"));
    assert_eq!(catalog.string(keys::ERROR), Some("Error"));
    assert_eq!(catalog.string("nonexistent"), None);
}

#[test]
fn string_or_key_falls_back_to_key() {
    let catalog = EnglishCatalog;
    assert_eq!(catalog.string_or_key("custom_token"), "custom_token");
    assert_eq!(catalog.string_or_key(keys::PROGRAM_URL), "Program URL");
}

// ================================================================
// Form submission
// ================================================================

#[test]
fn form_submission_roundtrips_values() {
    let submission = FormSubmission::new()
        .with("programfield", "timecompleted")
        .with("dateformat", "strftimedate");
    assert_eq!(submission.get("programfield"), Some("timecompleted"));
    assert_eq!(submission.get("dateformat"), Some("strftimedate"));
    assert_eq!(submission.get("other"), None);
}
