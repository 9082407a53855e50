//! Named date formats and the locale-aware rendering seam.
//!
//! The host exposes date formats by name (a convention inherited from its
//! language packs); elements store the chosen name and resolve it to a
//! strftime pattern at render time. Default formats render the day of
//! month without a leading zero; the one legacy alias keeps it.

use chrono::{TimeZone, Utc};

use crate::form::SelectOption;

/// Default format: "3 March 2024".
pub const FORMAT_DATE: &str = "strftimedate";
/// "3 March".
pub const FORMAT_DATE_SHORT: &str = "strftimedateshort";
/// "3/03/24".
pub const FORMAT_DATE_FULL_SHORT: &str = "strftimedatefullshort";
/// "3 March 2024, 10:05 AM".
pub const FORMAT_DATETIME: &str = "strftimedatetime";
/// "Sunday, 3 March 2024".
pub const FORMAT_DAY_DATE: &str = "strftimedaydate";

/// Legacy alias: the short format with the day's leading zero kept
/// ("03/03/24"). Not a registered format name; resolved specially.
pub const FORMAT_DATE_FULL_SHORT_LEADING_ZERO: &str = "strftimedatefullshortwleadingzero";

/// Pattern behind [`FORMAT_DATE_FULL_SHORT_LEADING_ZERO`].
pub const LEADING_ZERO_SHORT_PATTERN: &str = "%d/%m/%y";

const REGISTRY: &[(&str, &str)] = &[
    (FORMAT_DATE, "%-d %B %Y"),
    (FORMAT_DATE_SHORT, "%-d %B"),
    (FORMAT_DATE_FULL_SHORT, "%-d/%m/%y"),
    (FORMAT_DATETIME, "%-d %B %Y, %I:%M %p"),
    (FORMAT_DAY_DATE, "%A, %-d %B %Y"),
];

/// Resolves a registered format name to its strftime pattern.
#[must_use]
pub fn pattern(name: &str) -> Option<&'static str> {
    REGISTRY
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, p)| *p)
}

/// Pattern for the default format, used as the fallback for unknown names.
#[must_use]
pub fn default_pattern() -> &'static str {
    REGISTRY[0].1
}

/// Select options for a date-format field, labeled with the given
/// timestamp rendered in each format (the designer sees examples, not
/// format names).
#[must_use]
pub fn format_options(renderer: &dyn DateRenderer, example: i64) -> Vec<SelectOption> {
    let mut options: Vec<SelectOption> = REGISTRY
        .iter()
        .map(|(name, pat)| SelectOption::new(*name, renderer.render(example, pat)))
        .collect();
    options.push(SelectOption::new(
        FORMAT_DATE_FULL_SHORT_LEADING_ZERO,
        renderer.render(example, LEADING_ZERO_SHORT_PATTERN),
    ));
    options
}

/// Locale-aware date rendering supplied by the host.
pub trait DateRenderer {
    /// Renders a Unix timestamp (seconds) using a strftime pattern.
    fn render(&self, timestamp: i64, pattern: &str) -> String;
}

/// UTC renderer backed by chrono, used when the host does not supply a
/// locale-specific one.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChronoDateRenderer;

impl DateRenderer for ChronoDateRenderer {
    fn render(&self, timestamp: i64, pattern: &str) -> String {
        Utc.timestamp_opt(timestamp, 0)
            .single()
            .map(|dt| dt.format(pattern).to_string())
            .unwrap_or_default()
    }
}
