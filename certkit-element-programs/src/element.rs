use tracing::{debug, warn};

use certkit_element_sdk::{
    Element, ElementError, ElementMetadata, FormSubmission, FormSurface, IssueRecord,
    RenderContext, RenderedValue, dates, keys, text,
};

use crate::config::{FieldSelector, ProgramFieldConfig};

/// Element type token registered with the host.
pub const ELEMENT_TYPE: &str = "programs";

/// Form field names.
pub const FIELD_PROGRAM_FIELD: &str = "programfield";
pub const FIELD_DATE_FORMAT: &str = "dateformat";

/// Keys of the issue snapshot produced by the host issuance process.
/// `programallocationid` is also present but unused by this element.
pub const ISSUE_FULL_NAME: &str = "programfullname";
pub const ISSUE_ID_NUMBER: &str = "programidnumber";
pub const ISSUE_PROGRAM_ID: &str = "programid";
pub const ISSUE_TIME_COMPLETED: &str = "programtimecompleted";

/// Site-relative path of the program catalogue page.
pub const CATALOGUE_PATH: &str = "/enrol/programs/catalogue/program";

/// The "program field" element: resolves one configured program attribute
/// (name, ID number, catalogue URL, or completion date) into its display
/// string, from fixed preview samples or from an issue snapshot.
#[derive(Debug, Clone, Default)]
pub struct ProgramsElement {
    config: ProgramFieldConfig,
}

impl ProgramsElement {
    #[must_use]
    pub fn new(config: ProgramFieldConfig) -> Self {
        Self { config }
    }

    /// Builds an element directly from a persisted configuration string.
    #[must_use]
    pub fn from_stored(stored: &str) -> Self {
        Self::new(ProgramFieldConfig::parse(stored))
    }

    #[must_use]
    pub fn config(&self) -> &ProgramFieldConfig {
        &self.config
    }

    fn catalogue_url(base_url: &str, program_id: &str) -> String {
        format!("{base_url}{CATALOGUE_PATH}?id={program_id}")
    }

    /// Resolves the configured format name and renders the timestamp.
    /// The legacy leading-zero alias maps to its fixed pattern; unknown
    /// names fall back to the default date format.
    fn format_date(&self, ctx: &RenderContext<'_>, timestamp: i64) -> String {
        let name = self.config.date_format().unwrap_or(dates::FORMAT_DATE);
        let pattern = if name == dates::FORMAT_DATE_FULL_SHORT_LEADING_ZERO {
            dates::LEADING_ZERO_SHORT_PATTERN
        } else if let Some(pattern) = dates::pattern(name) {
            pattern
        } else {
            debug!(format = name, "unknown date format, using the default");
            dates::default_pattern()
        };
        ctx.dates.render(timestamp, pattern)
    }

    fn error_value(&self, ctx: &RenderContext<'_>) -> String {
        ctx.strings.string_or_key(keys::ERROR).to_string()
    }
}

impl Element for ProgramsElement {
    fn metadata(&self) -> ElementMetadata {
        ElementMetadata {
            element_type: ELEMENT_TYPE.into(),
            name: "Program field".into(),
            version: env!("CARGO_PKG_VERSION").into(),
            stores_personal_data: false,
        }
    }

    fn build_form(&self, form: &mut dyn FormSurface, ctx: &RenderContext<'_>) {
        let labels = [
            keys::PROGRAM_NAME,
            keys::PROGRAM_ID_NUMBER,
            keys::PROGRAM_URL,
            keys::PROGRAM_COMPLETION,
        ];
        let options = FieldSelector::KNOWN_TOKENS
            .iter()
            .zip(labels)
            .map(|(token, key)| {
                certkit_element_sdk::SelectOption::new(*token, ctx.strings.string_or_key(key))
            })
            .collect();

        form.add_select(
            FIELD_PROGRAM_FIELD,
            ctx.strings.string_or_key(keys::PROGRAM_FIELD),
            options,
        );
        form.add_help(
            FIELD_PROGRAM_FIELD,
            ctx.strings.string_or_key(keys::PROGRAM_FIELD_HELP),
        );

        form.add_select(
            FIELD_DATE_FORMAT,
            ctx.strings.string_or_key(keys::DATE_FORMAT),
            dates::format_options(ctx.dates, ctx.now),
        );
        form.add_help(
            FIELD_DATE_FORMAT,
            ctx.strings.string_or_key(keys::DATE_FORMAT_HELP),
        );
        form.hide_unless_equals(
            FIELD_DATE_FORMAT,
            FIELD_PROGRAM_FIELD,
            FieldSelector::TimeCompleted.as_str(),
        );
    }

    fn capture_config(&self, submission: &FormSubmission) -> Result<String, ElementError> {
        let selector = submission
            .get(FIELD_PROGRAM_FIELD)
            .ok_or_else(|| ElementError::MissingFormField(FIELD_PROGRAM_FIELD.into()))?;
        let date_format = submission.get(FIELD_DATE_FORMAT).map(str::to_owned);
        let config = ProgramFieldConfig::capture(FieldSelector::from(selector), date_format)?;
        Ok(config.to_stored())
    }

    fn parse_config(&mut self, stored: &str) -> Result<(), ElementError> {
        self.config = ProgramFieldConfig::parse(stored);
        Ok(())
    }

    fn prepare_form_data(&self) -> FormSubmission {
        let mut data =
            FormSubmission::new().with(FIELD_PROGRAM_FIELD, self.config.selector().as_str());
        if let Some(format) = self.config.date_format() {
            data.set(FIELD_DATE_FORMAT, format);
        }
        data
    }

    fn render_preview(&self, ctx: &RenderContext<'_>) -> RenderedValue {
        debug!(selector = %self.config.selector(), "rendering preview sample");
        let value = match &self.config {
            ProgramFieldConfig::Bare(FieldSelector::FullName) => text::escape_html("Program 001"),
            ProgramFieldConfig::Bare(FieldSelector::IdNumber) => text::escape_html("P001"),
            ProgramFieldConfig::Bare(FieldSelector::Url) => {
                let url = Self::catalogue_url(ctx.base_url, "1");
                text::anchor(&url, &url)
            }
            ProgramFieldConfig::Bare(FieldSelector::TimeCompleted)
            | ProgramFieldConfig::DatedCompletion { .. } => self.format_date(ctx, ctx.now),
            ProgramFieldConfig::Bare(FieldSelector::Other(token)) => text::escape_html(token),
        };
        RenderedValue::new(value)
    }

    fn render_issued(&self, ctx: &RenderContext<'_>, issue: &IssueRecord) -> RenderedValue {
        let value = match &self.config {
            ProgramFieldConfig::Bare(FieldSelector::FullName) => {
                issue.get_str(ISSUE_FULL_NAME).map(text::escape_html)
            }
            ProgramFieldConfig::Bare(FieldSelector::IdNumber) => {
                issue.get_str(ISSUE_ID_NUMBER).map(text::escape_html)
            }
            ProgramFieldConfig::Bare(FieldSelector::Url) => {
                issue.get_display(ISSUE_PROGRAM_ID).map(|id| {
                    let url = Self::catalogue_url(ctx.base_url, &id);
                    text::anchor(&url, &url)
                })
            }
            ProgramFieldConfig::Bare(FieldSelector::TimeCompleted)
            | ProgramFieldConfig::DatedCompletion { .. } => issue
                .get_i64(ISSUE_TIME_COMPLETED)
                .map(|ts| self.format_date(ctx, ts)),
            // Unknown selectors have no issue counterpart.
            ProgramFieldConfig::Bare(FieldSelector::Other(_)) => None,
        };

        let value = value.unwrap_or_else(|| {
            warn!(
                selector = %self.config.selector(),
                "issue snapshot has no value for this field, rendering the error placeholder"
            );
            self.error_value(ctx)
        });
        RenderedValue::new(value)
    }

    fn render_html(&self, ctx: &RenderContext<'_>) -> RenderedValue {
        // Always show something so the element can be repositioned.
        let value = match &self.config {
            ProgramFieldConfig::Bare(FieldSelector::FullName) => {
                ctx.strings.string_or_key(keys::PROGRAM_NAME).to_string()
            }
            ProgramFieldConfig::Bare(FieldSelector::IdNumber) => ctx
                .strings
                .string_or_key(keys::PROGRAM_ID_NUMBER)
                .to_string(),
            ProgramFieldConfig::Bare(FieldSelector::Url) => {
                ctx.strings.string_or_key(keys::PROGRAM_URL).to_string()
            }
            ProgramFieldConfig::Bare(FieldSelector::TimeCompleted) => ctx
                .strings
                .string_or_key(keys::PROGRAM_COMPLETION)
                .to_string(),
            ProgramFieldConfig::DatedCompletion { .. } => self.format_date(ctx, ctx.now),
            ProgramFieldConfig::Bare(FieldSelector::Other(token)) => token.clone(),
        };
        RenderedValue::new(text::escape_html(&value))
    }
}
