//! The per-résumé output row.

use serde::{Deserialize, Serialize};

/// Sentinel returned for the certifications field when nothing was captured.
///
/// Callers must treat this exact string as "no data", not as parsed content.
pub const NO_CERTIFICATION_DATA: &str = "No certification data available";

/// One extracted row: nine string fields, serialized in this order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeRecord {
    /// Candidate name in title case
    #[serde(rename = "Name")]
    pub name: String,

    /// First gmail/hotmail/yahoo address
    #[serde(rename = "Email")]
    pub email: String,

    /// Ten-digit mobile number
    #[serde(rename = "Mobile")]
    pub mobile: String,

    /// Sorted, comma-joined skill terms
    #[serde(rename = "Skills")]
    pub skills: String,

    /// Newline-joined "<label> <score>" lines
    #[serde(rename = "Education")]
    pub education: String,

    /// Newline-joined certification lines, or [`NO_CERTIFICATION_DATA`]
    #[serde(rename = "Certifications")]
    pub certifications: String,

    /// Experience section text
    #[serde(rename = "Experience")]
    pub experience: String,

    /// Publications section text
    #[serde(rename = "Publications")]
    pub publications: String,

    /// Filtered award lines
    #[serde(rename = "Awards")]
    pub awards: String,
}

impl ResumeRecord {
    /// Field names in output order.
    pub const FIELD_NAMES: [&'static str; 9] = [
        "Name",
        "Email",
        "Mobile",
        "Skills",
        "Education",
        "Certifications",
        "Experience",
        "Publications",
        "Awards",
    ];

    /// Field values paired with their names, in output order.
    pub fn fields(&self) -> [(&'static str, &str); 9] {
        [
            ("Name", self.name.as_str()),
            ("Email", self.email.as_str()),
            ("Mobile", self.mobile.as_str()),
            ("Skills", self.skills.as_str()),
            ("Education", self.education.as_str()),
            ("Certifications", self.certifications.as_str()),
            ("Experience", self.experience.as_str()),
            ("Publications", self.publications.as_str()),
            ("Awards", self.awards.as_str()),
        ]
    }

    /// Look up a field by its output name.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields()
            .into_iter()
            .find(|(name, _)| *name == field)
            .map(|(_, value)| value)
    }

    /// True when the certifications field holds captured lines, not the
    /// sentinel or an empty string.
    pub fn has_certifications(&self) -> bool {
        !self.certifications.is_empty() && self.certifications != NO_CERTIFICATION_DATA
    }
}
