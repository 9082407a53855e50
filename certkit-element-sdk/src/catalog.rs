//! Localized string lookup seam.
//!
//! Real localization lives in the host; elements only ask for strings by
//! key. The built-in [`EnglishCatalog`] carries the English pack so the
//! crate is usable (and testable) without a host.

/// Localized string lookup supplied by the host.
pub trait MessageCatalog {
    /// Returns the localized string for `key`, or `None` if the catalog
    /// does not carry it.
    fn string(&self, key: &str) -> Option<&str>;

    /// Lookup that falls back to the key itself, for labels that must
    /// always show something.
    fn string_or_key<'a>(&'a self, key: &'a str) -> &'a str {
        self.string(key).unwrap_or(key)
    }
}

/// Well-known catalog keys used by the bundled elements.
pub mod keys {
    pub const PLUGIN_NAME: &str = "pluginname";
    pub const PROGRAM_FIELD: &str = "programfield";
    pub const PROGRAM_FIELD_HELP: &str = "programfield_help";
    pub const DATE_FORMAT: &str = "dateformat";
    pub const DATE_FORMAT_HELP: &str = "dateformat_help";
    pub const PROGRAM_NAME: &str = "programname";
    pub const PROGRAM_ID_NUMBER: &str = "programidnumber";
    pub const PROGRAM_URL: &str = "programurl";
    pub const PROGRAM_COMPLETION: &str = "programcompletion";
    pub const ERROR: &str = "error";
}

/// English string pack.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishCatalog;

impl MessageCatalog for EnglishCatalog {
    fn string(&self, key: &str) -> Option<&str> {
        let s = match key {
            keys::PLUGIN_NAME => "Program field",
            keys::PROGRAM_FIELD => "Program field",
            keys::PROGRAM_FIELD_HELP => {
                "This is the program field that will be displayed on the PDF."
            }
            keys::DATE_FORMAT => "Date format",
            keys::DATE_FORMAT_HELP => "The format used when displaying the completion date.",
            keys::PROGRAM_NAME => "Program name",
            keys::PROGRAM_ID_NUMBER => "Program idnumber",
            keys::PROGRAM_URL => "Program URL",
            keys::PROGRAM_COMPLETION => "Program completion date",
            keys::ERROR => "Error",
            _ => return None,
        };
        Some(s)
    }
}
