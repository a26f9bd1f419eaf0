//! JSON rendering for records and section maps.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::model::{ResumeRecord, SectionMap};

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serialize any record collection to JSON.
///
/// Records keep their field order (`Name` first, `Awards` last).
pub fn to_json<T: Serialize + ?Sized>(value: &T, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value),
        JsonFormat::Compact => serde_json::to_string(value),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

/// Convert a single record to a JSON object.
pub fn record_to_json(record: &ResumeRecord, format: JsonFormat) -> Result<String> {
    to_json(record, format)
}

/// Convert a section map to a JSON object keyed by section name.
pub fn sections_to_json(sections: &SectionMap<'_>, format: JsonFormat) -> Result<String> {
    to_json(sections, format)
}
