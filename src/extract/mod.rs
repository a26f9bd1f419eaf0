//! Rule-based field extraction.
//!
//! [`ResumeExtractor`] compiles every pattern once from a
//! [`KeywordRegistry`] and then turns plain résumé text into a
//! [`ResumeRecord`]. Extraction never fails: a field with no match is an
//! empty string, except certifications which fall back to
//! [`NO_CERTIFICATION_DATA`](crate::model::NO_CERTIFICATION_DATA).

mod achievements;
mod certifications;
mod confidence;
mod contact;
mod education;
mod options;
mod sections;
mod skills;

pub use achievements::AchievementsCleaner;
pub use certifications::{CaptureState, CertificationExtractor, LineEvent};
pub use confidence::{confidence_from_text, SectionConfidence};
pub use contact::ContactExtractor;
pub use education::EducationExtractor;
pub use options::ExtractOptions;
pub use sections::SectionSplitter;
pub use skills::SkillMatcher;

use std::borrow::Cow;

use rayon::prelude::*;
use serde::Serialize;

use crate::error::Result;
use crate::keywords::KeywordRegistry;
use crate::model::{EducationRecords, ResumeRecord, SectionKind, SectionMap};
use crate::normalize::InputCleanup;

/// Trimmed, non-empty lines of `text`.
pub(crate) fn non_empty_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Strip leading bullet characters and spaces.
pub(crate) fn strip_bullets(line: &str) -> &str {
    line.trim_start_matches(&['•', '-', '*', ' '][..])
}

/// A record together with the confidence of its section slices.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub record: ResumeRecord,
    pub confidence: SectionConfidence,
}

/// Extracts résumé records from plain text.
///
/// Construction compiles all patterns; extraction itself is cheap and the
/// extractor can be shared across threads.
#[derive(Debug, Clone)]
pub struct ResumeExtractor {
    options: ExtractOptions,
    sections: SectionSplitter,
    contact: ContactExtractor,
    skills: SkillMatcher,
    education: EducationExtractor,
    certifications: CertificationExtractor,
    achievements: AchievementsCleaner,
    cleanup: Option<InputCleanup>,
}

impl ResumeExtractor {
    /// Build an extractor, validating the registry first.
    pub fn new(options: ExtractOptions) -> Result<Self> {
        let registry = &options.keywords;
        registry.validate()?;

        let extractor = Self {
            sections: SectionSplitter::new(registry)?,
            contact: ContactExtractor::new()?,
            skills: SkillMatcher::new(registry)?,
            education: EducationExtractor::new(registry)?,
            certifications: CertificationExtractor::new(registry),
            achievements: AchievementsCleaner::new(registry)?,
            cleanup: options.clean_input.then(InputCleanup::new),
            options,
        };
        log::debug!(
            "Extractor ready: {} skills, {} degree rules, parallel={}",
            extractor.options.keywords.skills.len(),
            extractor.options.keywords.degree_labels.len(),
            extractor.options.parallel
        );
        Ok(extractor)
    }

    /// Build an extractor with a custom registry and default options.
    pub fn with_keywords(keywords: KeywordRegistry) -> Result<Self> {
        Self::new(ExtractOptions::new().with_keywords(keywords))
    }

    /// Options this extractor was built with.
    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Keyword registry in use.
    pub fn registry(&self) -> &KeywordRegistry {
        &self.options.keywords
    }

    /// Apply input cleanup when enabled.
    pub fn prepare<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match &self.cleanup {
            Some(cleanup) => Cow::Owned(cleanup.process(text)),
            None => Cow::Borrowed(text),
        }
    }

    /// Split text into sections.
    ///
    /// Input cleanup is not applied here, the slices borrow from `text`.
    pub fn split_sections<'a>(&self, text: &'a str) -> SectionMap<'a> {
        self.sections.split(text)
    }

    pub fn extract_name(&self, text: &str) -> String {
        self.contact.extract_name(text)
    }

    pub fn extract_email(&self, text: &str) -> String {
        self.contact.extract_email(text)
    }

    pub fn extract_mobile(&self, text: &str) -> String {
        self.contact.extract_mobile(text)
    }

    pub fn extract_skills(&self, text: &str) -> String {
        self.skills.extract(text)
    }

    pub fn extract_education(&self, text: &str) -> String {
        self.education.extract(text)
    }

    /// Education records before rendering.
    pub fn education_records(&self, text: &str) -> EducationRecords {
        self.education.extract_records(text)
    }

    pub fn extract_certifications(&self, text: &str) -> String {
        self.certifications.extract(text)
    }

    /// Filter an awards section down to actual awards.
    pub fn clean_achievements(&self, text: &str) -> String {
        self.achievements.clean(text)
    }

    /// Extract one record.
    pub fn extract_row(&self, text: &str) -> ResumeRecord {
        let text = self.prepare(text);
        let sections = self.sections.split(&text);
        self.assemble(&text, &sections)
    }

    /// Extract one record along with per-section confidence.
    pub fn analyze(&self, text: &str) -> Analysis {
        let text = self.prepare(text);
        let sections = self.sections.split(&text);
        Analysis {
            record: self.assemble(&text, &sections),
            confidence: SectionConfidence::from_sections(&sections),
        }
    }

    /// Extract one record per input, in input order.
    pub fn extract_rows<S>(&self, texts: &[S]) -> Vec<ResumeRecord>
    where
        S: AsRef<str> + Sync,
    {
        log::debug!(
            "Extracting {} résumés ({})",
            texts.len(),
            if self.options.parallel { "parallel" } else { "sequential" }
        );

        if self.options.parallel {
            texts
                .par_iter()
                .map(|text| self.extract_row(text.as_ref()))
                .collect()
        } else {
            texts
                .iter()
                .map(|text| self.extract_row(text.as_ref()))
                .collect()
        }
    }

    fn assemble(&self, text: &str, sections: &SectionMap<'_>) -> ResumeRecord {
        ResumeRecord {
            name: self.contact.extract_name(text),
            email: self.contact.extract_email(text),
            mobile: self.contact.extract_mobile(text),
            skills: self.skills.extract(text),
            education: self.education.extract(text),
            certifications: self.certifications.extract(text),
            experience: sections.get(SectionKind::Experience).to_string(),
            publications: sections.get(SectionKind::Publications).to_string(),
            awards: self.achievements.clean(sections.get(SectionKind::Awards)),
        }
    }
}

impl Default for ResumeExtractor {
    fn default() -> Self {
        Self::new(ExtractOptions::default()).expect("built-in keyword tables are valid")
    }
}
