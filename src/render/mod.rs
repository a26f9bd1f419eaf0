//! Rendering module for writing extracted records in various output formats.

mod json;
mod tabular;
mod text;

use serde::Serialize;

use crate::model::ResumeRecord;

pub use json::{record_to_json, sections_to_json, to_json, JsonFormat};
pub use tabular::{to_csv, to_csv_with_source};
pub use text::to_text;

/// A record tagged with the file it was extracted from.
///
/// Serializes as a flat object with a leading `File` field.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SourcedRecord<'a> {
    #[serde(rename = "File")]
    pub source: &'a str,
    #[serde(flatten)]
    pub record: &'a ResumeRecord,
}

impl<'a> SourcedRecord<'a> {
    pub fn new(source: &'a str, record: &'a ResumeRecord) -> Self {
        Self { source, record }
    }
}
