//! # unresume
//!
//! Rule-based extraction of candidate fields from plain-text résumés.
//!
//! This library turns the text of a résumé into a flat record of nine
//! string fields (name, contact details, skills, education, certifications,
//! experience, publications, awards) using keyword tables and regular
//! expressions. No model, no network, no I/O during extraction.
//!
//! ## Quick Start
//!
//! ```
//! use unresume::extract_row;
//!
//! let text = "Jane Doe\njane.doe@gmail.com\nMobile: 9876543210\nSkills: Python, SQL";
//! let record = extract_row(text);
//!
//! assert_eq!(record.name, "Jane Doe");
//! assert_eq!(record.mobile, "9876543210");
//! assert_eq!(record.skills, "python, sql");
//! ```
//!
//! ## Features
//!
//! - **Section splitting**: experience, projects, awards, publications and
//!   certifications by header synonyms
//! - **Configurable vocabularies**: every keyword table can be replaced from JSON
//! - **Batch extraction**: uses Rayon for many résumés at once
//! - **Multiple output formats**: JSON, CSV, plain text
//! - **Never fails on input**: missing data is an empty field

pub mod error;
pub mod extract;
pub mod keywords;
pub mod model;
pub mod normalize;
pub mod render;

#[cfg(feature = "ffi")]
pub mod ffi;

// Re-export commonly used types
pub use error::{Error, Result};
pub use extract::{
    confidence_from_text, Analysis, CaptureState, ExtractOptions, LineEvent, ResumeExtractor,
    SectionConfidence,
};
pub use keywords::{CertificationKeywords, DegreeLabelRule, KeywordRegistry, SectionHeaders};
pub use model::{
    DegreeRecord, EducationRecords, ResumeRecord, SectionKind, SectionMap, NO_CERTIFICATION_DATA,
};
pub use normalize::{safe_value, InputCleanup};
pub use render::{JsonFormat, SourcedRecord};

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// Shared extractor built from the built-in keyword tables.
fn default_extractor() -> &'static ResumeExtractor {
    static EXTRACTOR: OnceLock<ResumeExtractor> = OnceLock::new();
    EXTRACTOR.get_or_init(ResumeExtractor::default)
}

/// Extract a record from résumé text using the built-in keyword tables.
///
/// # Example
///
/// ```
/// use unresume::{extract_row, NO_CERTIFICATION_DATA};
///
/// let record = extract_row("");
/// assert_eq!(record.name, "");
/// assert_eq!(record.certifications, NO_CERTIFICATION_DATA);
/// ```
pub fn extract_row(text: &str) -> ResumeRecord {
    default_extractor().extract_row(text)
}

/// Split résumé text into sections using the built-in header synonyms.
///
/// # Example
///
/// ```
/// use unresume::{split_sections, SectionKind};
///
/// let sections = split_sections("Jane Doe\nProjects\nA compiler\n");
/// assert_eq!(sections.get(SectionKind::Projects), "Projects\nA compiler");
/// assert_eq!(sections.get(SectionKind::Experience), "");
/// ```
pub fn split_sections(text: &str) -> SectionMap<'_> {
    default_extractor().split_sections(text)
}

/// Extract one record per text, in input order, in parallel.
pub fn extract_rows<S: AsRef<str> + Sync>(texts: &[S]) -> Vec<ResumeRecord> {
    default_extractor().extract_rows(texts)
}

/// Read a UTF-8 text file and extract its record.
///
/// # Example
///
/// ```no_run
/// use unresume::extract_file;
///
/// let record = extract_file("resume.txt")?;
/// println!("{}", record.name);
/// # Ok::<(), unresume::Error>(())
/// ```
pub fn extract_file<P: AsRef<Path>>(path: P) -> Result<ResumeRecord> {
    let text = fs::read_to_string(path)?;
    Ok(extract_row(&text))
}

/// Builder for configuring an extractor.
///
/// # Example
///
/// ```
/// use unresume::{KeywordRegistry, Unresume};
///
/// let keywords = KeywordRegistry {
///     skills: vec!["rust".to_string(), "tokio".to_string()],
///     ..Default::default()
/// };
/// let record = Unresume::new()
///     .with_keywords(keywords)
///     .sequential()
///     .extract("Jane Doe\nRust and Tokio developer")?;
///
/// assert_eq!(record.skills, "rust, tokio");
/// # Ok::<(), unresume::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Unresume {
    options: ExtractOptions,
}

impl Unresume {
    /// Create a new Unresume builder.
    pub fn new() -> Self {
        Self {
            options: ExtractOptions::default(),
        }
    }

    /// Use a custom keyword registry.
    pub fn with_keywords(mut self, keywords: KeywordRegistry) -> Self {
        self.options = self.options.with_keywords(keywords);
        self
    }

    /// Load the keyword registry from a JSON file.
    pub fn with_keywords_file<P: AsRef<Path>>(self, path: P) -> Result<Self> {
        let keywords = KeywordRegistry::from_path(path)?;
        Ok(self.with_keywords(keywords))
    }

    /// Disable parallel batch extraction.
    pub fn sequential(mut self) -> Self {
        self.options = self.options.sequential();
        self
    }

    /// Normalize input text before extraction.
    pub fn with_input_cleanup(mut self, clean: bool) -> Self {
        self.options = self.options.with_input_cleanup(clean);
        self
    }

    /// Compile the configured extractor.
    pub fn build(self) -> Result<ResumeExtractor> {
        ResumeExtractor::new(self.options)
    }

    /// Build and extract a single record.
    pub fn extract(self, text: &str) -> Result<ResumeRecord> {
        Ok(self.build()?.extract_row(text))
    }

    /// Build and extract a record from a UTF-8 text file.
    pub fn extract_file<P: AsRef<Path>>(self, path: P) -> Result<ResumeRecord> {
        let text = fs::read_to_string(path)?;
        self.extract(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unresume_builder_default() {
        let builder = Unresume::default();
        assert!(builder.options.parallel);
        assert!(!builder.options.clean_input);
    }

    #[test]
    fn test_unresume_builder_chained() {
        let builder = Unresume::new().sequential().with_input_cleanup(true);
        assert!(!builder.options.parallel);
        assert!(builder.options.clean_input);
    }

    #[test]
    fn test_unresume_builder_invalid_keywords() {
        let keywords = KeywordRegistry {
            skills: vec!["".to_string()],
            ..Default::default()
        };
        let result = Unresume::new().with_keywords(keywords).build();
        assert!(matches!(result, Err(Error::InvalidRegistry(_))));
    }

    #[test]
    fn test_with_keywords_file_missing() {
        let result = Unresume::new().with_keywords_file("/nonexistent/keywords.json");
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_extract_file_missing() {
        assert!(matches!(
            extract_file("/nonexistent/resume.txt"),
            Err(Error::Io(_))
        ));
    }

    #[test]
    fn test_default_extractor_is_shared() {
        assert!(std::ptr::eq(default_extractor(), default_extractor()));
    }

    #[test]
    fn test_convenience_matches_extractor() {
        let text = "John Roe\njohn@hotmail.com\nExperience\nIntern at Acme\n";
        assert_eq!(extract_row(text), ResumeExtractor::default().extract_row(text));
        assert_eq!(extract_rows(&[text]), vec![extract_row(text)]);
    }
}
