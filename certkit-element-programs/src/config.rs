//! Element configuration: which program field to show, and how to format
//! it when the field is the completion date.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use certkit_element_sdk::ElementError;

/// The program attribute this element displays.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldSelector {
    FullName,
    IdNumber,
    Url,
    TimeCompleted,
    /// Anything else the host stored; rendered as its raw token.
    Other(String),
}

impl FieldSelector {
    /// Tokens of the four known selectors, in form-display order.
    pub const KNOWN_TOKENS: [&'static str; 4] = ["fullname", "idnumber", "url", "timecompleted"];

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::FullName => "fullname",
            Self::IdNumber => "idnumber",
            Self::Url => "url",
            Self::TimeCompleted => "timecompleted",
            Self::Other(token) => token,
        }
    }
}

impl From<&str> for FieldSelector {
    fn from(token: &str) -> Self {
        match token {
            "fullname" => Self::FullName,
            "idnumber" => Self::IdNumber,
            "url" => Self::Url,
            "timecompleted" => Self::TimeCompleted,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for FieldSelector {
    fn from(token: String) -> Self {
        Self::from(token.as_str())
    }
}

impl From<FieldSelector> for String {
    fn from(selector: FieldSelector) -> Self {
        selector.as_str().to_string()
    }
}

impl fmt::Display for FieldSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persisted shape of a completion-date config.
#[derive(Serialize, Deserialize)]
struct StoredDated {
    dateitem: String,
    dateformat: String,
}

/// Parsed element configuration.
///
/// A date format only exists together with the completion-date selector;
/// the type makes any other combination unrepresentable. The stored wire
/// format stays compatible with older installs: a bare selector token, or
/// the packed JSON object `{"dateitem": ..., "dateformat": ...}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgramFieldConfig {
    Bare(FieldSelector),
    DatedCompletion { format: String },
}

impl Default for ProgramFieldConfig {
    fn default() -> Self {
        Self::Bare(FieldSelector::FullName)
    }
}

impl ProgramFieldConfig {
    /// Packs a designer's choices into a config value.
    ///
    /// Supplying a date format with any selector other than the completion
    /// date is a configuration error, not a silent drop.
    pub fn capture(
        selector: FieldSelector,
        date_format: Option<String>,
    ) -> Result<Self, ElementError> {
        match (selector, date_format) {
            (selector, None) => Ok(Self::Bare(selector)),
            (FieldSelector::TimeCompleted, Some(format)) => Ok(Self::DatedCompletion { format }),
            (selector, Some(format)) => Err(ElementError::DateFormatNotApplicable {
                selector: selector.to_string(),
                format,
            }),
        }
    }

    /// Restores a config from its persisted string. Never fails: anything
    /// that is not the packed JSON shape is taken as a bare selector, and
    /// a packed config whose selector is not the completion date keeps the
    /// selector but drops the format.
    #[must_use]
    pub fn parse(stored: &str) -> Self {
        if let Ok(packed) = serde_json::from_str::<StoredDated>(stored) {
            let selector = FieldSelector::from(packed.dateitem);
            if selector == FieldSelector::TimeCompleted {
                return Self::DatedCompletion {
                    format: packed.dateformat,
                };
            }
            warn!(
                selector = %selector,
                "stored config packs a date format with a non-completion selector, dropping the format"
            );
            return Self::Bare(selector);
        }
        Self::Bare(FieldSelector::from(stored))
    }

    /// The persisted representation.
    #[must_use]
    pub fn to_stored(&self) -> String {
        match self {
            Self::Bare(selector) => selector.as_str().to_string(),
            Self::DatedCompletion { format } => serde_json::json!({
                "dateitem": FieldSelector::TimeCompleted.as_str(),
                "dateformat": format,
            })
            .to_string(),
        }
    }

    /// The effective selector.
    #[must_use]
    pub fn selector(&self) -> FieldSelector {
        match self {
            Self::Bare(selector) => selector.clone(),
            Self::DatedCompletion { .. } => FieldSelector::TimeCompleted,
        }
    }

    /// The date format name, present only for a dated completion config.
    #[must_use]
    pub fn date_format(&self) -> Option<&str> {
        match self {
            Self::Bare(_) => None,
            Self::DatedCompletion { format } => Some(format),
        }
    }
}
