//! Error types for element configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ElementError {
    #[error("missing form field: {0}")]
    MissingFormField(String),

    #[error("date format '{format}' only applies to the completion date selector, got '{selector}'")]
    DateFormatNotApplicable { selector: String, format: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
