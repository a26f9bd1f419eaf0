//! Length-based confidence for section slices.

use serde::Serialize;

use crate::model::{SectionKind, SectionMap};

/// Word count at which a slice reaches full confidence.
const FULL_CONFIDENCE_WORDS: f32 = 50.0;

/// Confidence in `[0, 1]` proportional to word count, saturating at 50 words.
pub fn confidence_from_text(text: &str) -> f32 {
    let words = text.split_whitespace().count();
    if words == 0 {
        return 0.0;
    }
    (words as f32 / FULL_CONFIDENCE_WORDS).min(1.0)
}

/// Confidence of the free-text sections copied into a record.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SectionConfidence {
    pub experience: f32,
    pub projects: f32,
    pub awards: f32,
    pub publications: f32,
}

impl SectionConfidence {
    /// Score each section slice.
    pub fn from_sections(sections: &SectionMap<'_>) -> Self {
        Self {
            experience: confidence_from_text(sections.get(SectionKind::Experience)),
            projects: confidence_from_text(sections.get(SectionKind::Projects)),
            awards: confidence_from_text(sections.get(SectionKind::Awards)),
            publications: confidence_from_text(sections.get(SectionKind::Publications)),
        }
    }
}
