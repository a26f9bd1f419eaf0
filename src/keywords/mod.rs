//! Keyword registries driving the rule-based extractors.
//!
//! Every vocabulary the extractors consult lives in [`KeywordRegistry`]:
//! section header synonyms, degree keywords and label rules, the skill
//! vocabulary, certification start/stop/reject tables and the award/activity
//! sentiment words. The built-in tables are returned by
//! [`KeywordRegistry::default`]; a JSON file can replace any subset of them.
//!
//! # Example
//!
//! ```
//! use unresume::KeywordRegistry;
//!
//! let registry = KeywordRegistry::from_json(r#"{ "skills": ["python", "sql"] }"#)?;
//! assert_eq!(registry.skills, vec!["python", "sql"]);
//! // Tables missing from the JSON keep their built-in values.
//! assert!(!registry.degree_keywords.is_empty());
//! # Ok::<(), unresume::Error>(())
//! ```

mod defaults;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::SectionKind;
use crate::render::JsonFormat;

/// All keyword tables used during extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordRegistry {
    /// Header synonyms per section
    pub section_headers: SectionHeaders,

    /// Words that must appear for an awards line to be kept
    pub award_positive_words: Vec<String>,

    /// Words that mark an awards line as a mere activity
    pub activity_negative_words: Vec<String>,

    /// Substrings that mark a line as describing a degree
    pub degree_keywords: Vec<String>,

    /// Substrings that make the education scan skip a line
    pub education_stop_headers: Vec<String>,

    /// Ordered rules mapping a degree line to a normalized label
    pub degree_labels: Vec<DegreeLabelRule>,

    /// Known skill terms, matched as whole words
    pub skills: Vec<String>,

    /// Tables for the certification scan
    pub certifications: CertificationKeywords,
}

impl KeywordRegistry {
    /// Create a registry holding the built-in tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a registry from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let registry: KeywordRegistry = serde_json::from_str(json)?;
        registry.validate()?;
        Ok(registry)
    }

    /// Load a registry from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        log::debug!("Loading keyword registry from {}", path.display());
        Self::from_json(&json)
    }

    /// Serialize the registry to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        let json = match format {
            JsonFormat::Pretty => serde_json::to_string_pretty(self)?,
            JsonFormat::Compact => serde_json::to_string(self)?,
        };
        Ok(json)
    }

    /// Reject blank keywords.
    ///
    /// A blank substring matches every line, which would silently turn a
    /// filter into a no-op (or a stop header into "stop immediately").
    pub fn validate(&self) -> Result<()> {
        for (kind, headers) in self.section_headers.iter() {
            check_table(&format!("section_headers.{}", kind.as_str()), headers)?;
        }
        check_table("award_positive_words", &self.award_positive_words)?;
        check_table("activity_negative_words", &self.activity_negative_words)?;
        check_table("degree_keywords", &self.degree_keywords)?;
        check_table("education_stop_headers", &self.education_stop_headers)?;
        for rule in &self.degree_labels {
            if rule.label.trim().is_empty() {
                return Err(Error::InvalidRegistry(
                    "degree_labels contains a rule with an empty label".to_string(),
                ));
            }
            check_table(&format!("degree_labels.{}", rule.label), &rule.any_of)?;
        }
        check_table("skills", &self.skills)?;
        self.certifications.validate()
    }
}

impl Default for KeywordRegistry {
    fn default() -> Self {
        Self {
            section_headers: defaults::section_headers(),
            award_positive_words: defaults::award_positive_words(),
            activity_negative_words: defaults::activity_negative_words(),
            degree_keywords: defaults::degree_keywords(),
            education_stop_headers: defaults::education_stop_headers(),
            degree_labels: defaults::degree_labels(),
            skills: defaults::skills(),
            certifications: defaults::certifications(),
        }
    }
}

fn check_table(name: &str, keywords: &[String]) -> Result<()> {
    if keywords.iter().any(|k| k.trim().is_empty()) {
        return Err(Error::InvalidRegistry(format!(
            "{} contains an empty keyword",
            name
        )));
    }
    Ok(())
}

/// Header synonyms for each section the splitter recognizes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionHeaders {
    pub experience: Vec<String>,
    pub projects: Vec<String>,
    pub awards: Vec<String>,
    pub publications: Vec<String>,
    pub certifications: Vec<String>,
}

impl SectionHeaders {
    /// Get the synonyms for a section.
    pub fn get(&self, kind: SectionKind) -> &[String] {
        match kind {
            SectionKind::Experience => &self.experience,
            SectionKind::Projects => &self.projects,
            SectionKind::Awards => &self.awards,
            SectionKind::Publications => &self.publications,
            SectionKind::Certifications => &self.certifications,
        }
    }

    /// Iterate over sections in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (SectionKind, &[String])> {
        SectionKind::ALL.iter().map(move |&kind| (kind, self.get(kind)))
    }
}

impl Default for SectionHeaders {
    fn default() -> Self {
        defaults::section_headers()
    }
}

/// Maps degree lines containing any of `any_of` to `label`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DegreeLabelRule {
    /// Normalized label (e.g. "BCA", "12th")
    pub label: String,
    /// Substrings, any of which selects this label
    pub any_of: Vec<String>,
}

impl DegreeLabelRule {
    /// Create a rule from a label and its substrings.
    pub fn new(label: impl Into<String>, any_of: &[&str]) -> Self {
        Self {
            label: label.into(),
            any_of: any_of.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Tables for the certification scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CertificationKeywords {
    /// Lines containing any of these start (or restart) capturing
    pub start_headers: Vec<String>,
    /// Lines containing any of these end capturing
    pub stop_headers: Vec<String>,
    /// Captured lines containing personal data are dropped
    pub personal_keywords: Vec<String>,
    /// Captured lines describing competitions or volunteering are dropped
    pub activity_keywords: Vec<String>,
    /// Known certificate issuers
    pub issuer_hints: Vec<String>,
    /// Words typical of certificate titles
    pub title_hints: Vec<String>,
}

impl CertificationKeywords {
    fn validate(&self) -> Result<()> {
        check_table("certifications.start_headers", &self.start_headers)?;
        check_table("certifications.stop_headers", &self.stop_headers)?;
        check_table("certifications.personal_keywords", &self.personal_keywords)?;
        check_table("certifications.activity_keywords", &self.activity_keywords)?;
        check_table("certifications.issuer_hints", &self.issuer_hints)?;
        check_table("certifications.title_hints", &self.title_hints)
    }
}

impl Default for CertificationKeywords {
    fn default() -> Self {
        defaults::certifications()
    }
}

/// Lowercased keyword list matched by substring against lowercased text.
#[derive(Debug, Clone, Default)]
pub(crate) struct KeywordSet {
    needles: Vec<String>,
}

impl KeywordSet {
    pub(crate) fn new(keywords: &[String]) -> Self {
        Self {
            needles: keywords.iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    /// `lower` must already be lowercased.
    pub(crate) fn matches(&self, lower: &str) -> bool {
        self.needles.iter().any(|n| lower.contains(n.as_str()))
    }
}
