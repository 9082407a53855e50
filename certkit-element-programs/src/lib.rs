//! The "program field" certificate element.
//!
//! A placeable template field that shows one attribute of the program a
//! certificate was issued for: its name, ID number, catalogue URL, or
//! completion date. In preview mode it renders fixed sample data; for a
//! real issue it reads the JSON snapshot the issuance process attached to
//! the certificate. The completion date can carry a named date format,
//! captured together with the selector in one persisted config value.
//!
//! The element implements [`certkit_element_sdk::Element`] and is driven
//! entirely by the host through that capability set.

mod config;
mod element;

pub use config::{FieldSelector, ProgramFieldConfig};
pub use element::{
    CATALOGUE_PATH, ELEMENT_TYPE, FIELD_DATE_FORMAT, FIELD_PROGRAM_FIELD, ISSUE_FULL_NAME,
    ISSUE_ID_NUMBER, ISSUE_PROGRAM_ID, ISSUE_TIME_COMPLETED, ProgramsElement,
};
