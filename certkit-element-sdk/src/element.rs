use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::MessageCatalog;
use crate::dates::DateRenderer;
use crate::error::ElementError;
use crate::form::{FormSubmission, FormSurface};
use crate::issue::IssueRecord;

/// Descriptive metadata for an element type, surfaced by the host in its
/// template designer and plugin listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementMetadata {
    /// Stable element type token (e.g. "programs").
    pub element_type: String,
    pub name: String,
    pub version: String,
    /// Whether rendered output may contain personal data the host must
    /// account for in privacy exports.
    pub stores_personal_data: bool,
}

impl Default for ElementMetadata {
    fn default() -> Self {
        Self {
            element_type: String::new(),
            name: String::new(),
            version: "0.1.0".into(),
            stores_personal_data: false,
        }
    }
}

/// Host context borrowed for the duration of one render call.
///
/// Rendering is pure computation over this context plus the element's own
/// parsed configuration; nothing here is retained between calls.
pub struct RenderContext<'a> {
    /// Site root used to build absolute links (no trailing slash).
    pub base_url: &'a str,
    /// Current time as seconds since the Unix epoch, for preview renders.
    pub now: i64,
    /// Locale-aware date renderer supplied by the host.
    pub dates: &'a dyn DateRenderer,
    /// Localized string lookup supplied by the host.
    pub strings: &'a dyn MessageCatalog,
}

/// The final display string produced by a render call.
///
/// May be a plain escaped string or an HTML fragment (e.g. an anchor).
/// Transient: recomputed on every render, never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedValue(String);

impl RenderedValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for RenderedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for RenderedValue {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Capability set implemented by every certificate element.
///
/// The host drives the full lifecycle through this trait: it builds the
/// designer form with `build_form`, persists the string returned by
/// `capture_config`, feeds it back through `parse_config` on load, and
/// calls one of the render methods per output surface.
pub trait Element {
    fn metadata(&self) -> ElementMetadata;

    /// Registers this element's form fields into the host's form surface.
    /// The context supplies localized labels and lets option labels show
    /// example values (e.g. dates rendered in each selectable format).
    fn build_form(&self, form: &mut dyn FormSurface, ctx: &RenderContext<'_>);

    /// Packs a designer form submission into the persisted configuration
    /// string. Rejects combinations the element considers illegal.
    fn capture_config(&self, submission: &FormSubmission) -> Result<String, ElementError>;

    /// Restores the element's configuration from the persisted string.
    fn parse_config(&mut self, stored: &str) -> Result<(), ElementError>;

    /// Decomposes the current configuration back into form values so the
    /// host can pre-fill the edit form.
    fn prepare_form_data(&self) -> FormSubmission;

    /// Renders fixed sample data, used while designing a template.
    fn render_preview(&self, ctx: &RenderContext<'_>) -> RenderedValue;

    /// Renders real values from one certificate issue.
    fn render_issued(&self, ctx: &RenderContext<'_>, issue: &IssueRecord) -> RenderedValue;

    /// Renders a label-style placeholder for the drag-and-drop positioning
    /// view. Always produces something visible.
    fn render_html(&self, ctx: &RenderContext<'_>) -> RenderedValue;
}
