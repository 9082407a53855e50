//! SDK for building CertKit certificate template elements.
//!
//! An element is a placeable field on a certificate template that knows how
//! to render itself. Element authors implement the [`Element`] capability
//! set; the host invokes it through that trait rather than inheritance.
//! Everything the host owns — form rendering, PDF drawing, localization,
//! persistence — stays behind the narrow seams defined here
//! ([`FormSurface`], [`MessageCatalog`], [`DateRenderer`]).
//!
//! # Example
//!
//! ```
//! use certkit_element_sdk::{
//!     ChronoDateRenderer, Element, EnglishCatalog, IssueRecord, RenderContext,
//! };
//!
//! fn render_issue(element: &dyn Element, issue_json: &str) -> String {
//!     let catalog = EnglishCatalog;
//!     let dates = ChronoDateRenderer;
//!     let ctx = RenderContext {
//!         base_url: "https://learn.example.com",
//!         now: 1_700_000_000,
//!         dates: &dates,
//!         strings: &catalog,
//!     };
//!     let issue = IssueRecord::from_json(issue_json);
//!     element.render_issued(&ctx, &issue).into_inner()
//! }
//! ```

pub mod dates;
pub mod text;

mod catalog;
mod element;
mod error;
mod form;
mod issue;

pub use catalog::{EnglishCatalog, MessageCatalog, keys};
pub use dates::{ChronoDateRenderer, DateRenderer};
pub use element::{Element, ElementMetadata, RenderContext, RenderedValue};
pub use error::ElementError;
pub use form::{FormSubmission, FormSurface, SelectOption};
pub use issue::IssueRecord;
