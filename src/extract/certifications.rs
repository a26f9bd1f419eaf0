//! Certification extraction.
//!
//! A line-by-line capture scan: a certification/training header starts
//! capturing, the next header of another section stops it, and captured
//! lines pass through a few rejection filters.

use crate::keywords::{KeywordRegistry, KeywordSet};
use crate::model::NO_CERTIFICATION_DATA;

use super::{non_empty_lines, strip_bullets};

/// Minimum number of words a captured line needs to be kept.
const MIN_WORDS: usize = 3;

/// State of the certification capture scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptureState {
    /// No certification header seen yet
    #[default]
    Idle,
    /// Inside the certification block
    Capturing,
    /// Another section started; the scan is over
    Stopped,
}

/// Classification of a line for the capture scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEvent {
    /// Line contains a certification/training header keyword
    StartHeader,
    /// Line contains a header keyword of another section
    StopHeader,
    /// Any other line
    Content,
}

impl CaptureState {
    /// Next state after seeing a line.
    ///
    /// Start headers (re)enter capturing from any live state. Stop headers
    /// only matter while capturing.
    pub fn transition(self, event: LineEvent) -> CaptureState {
        match (self, event) {
            (CaptureState::Stopped, _) => CaptureState::Stopped,
            (_, LineEvent::StartHeader) => CaptureState::Capturing,
            (CaptureState::Capturing, LineEvent::StopHeader) => CaptureState::Stopped,
            (state, _) => state,
        }
    }
}

/// Extracts certification and training lines.
#[derive(Debug, Clone)]
pub struct CertificationExtractor {
    start_headers: KeywordSet,
    stop_headers: KeywordSet,
    personal: KeywordSet,
    activity: KeywordSet,
}

impl CertificationExtractor {
    /// Create an extractor from the registry's certification tables.
    pub fn new(registry: &KeywordRegistry) -> Self {
        let tables = &registry.certifications;
        Self {
            start_headers: KeywordSet::new(&tables.start_headers),
            stop_headers: KeywordSet::new(&tables.stop_headers),
            personal: KeywordSet::new(&tables.personal_keywords),
            activity: KeywordSet::new(&tables.activity_keywords),
        }
    }

    /// Classify a lowercased line.
    ///
    /// Start headers take precedence, so "Certifications & Achievements"
    /// starts capturing rather than stopping it.
    pub fn classify(&self, lower: &str) -> LineEvent {
        if self.start_headers.matches(lower) {
            LineEvent::StartHeader
        } else if self.stop_headers.matches(lower) {
            LineEvent::StopHeader
        } else {
            LineEvent::Content
        }
    }

    /// Captured lines that survived filtering, in document order.
    pub fn extract_lines<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut state = CaptureState::Idle;
        let mut lines = Vec::new();

        for line in non_empty_lines(text) {
            let event = self.classify(&line.to_lowercase());
            let next = state.transition(event);
            if next != state {
                log::trace!("Certifications: {:?} -> {:?} at {:?}", state, next, line);
            }
            state = next;

            match (state, event) {
                (CaptureState::Stopped, _) => break,
                (CaptureState::Capturing, LineEvent::Content) => {
                    if let Some(clean) = self.keep_line(line) {
                        lines.push(clean);
                    }
                }
                _ => {}
            }
        }

        lines
    }

    /// Newline-joined certification lines, or [`NO_CERTIFICATION_DATA`].
    pub fn extract(&self, text: &str) -> String {
        let lines = self.extract_lines(text);
        if lines.is_empty() {
            return NO_CERTIFICATION_DATA.to_string();
        }
        lines.join("\n")
    }

    fn keep_line<'a>(&self, line: &'a str) -> Option<&'a str> {
        let clean = strip_bullets(line).trim();
        if clean.split_whitespace().count() < MIN_WORDS {
            return None;
        }

        let lower = clean.to_lowercase();
        if self.personal.matches(&lower) || self.activity.matches(&lower) {
            return None;
        }
        Some(clean)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> CertificationExtractor {
        CertificationExtractor::new(&KeywordRegistry::default())
    }

    #[test]
    fn test_transitions() {
        use CaptureState::*;
        use LineEvent::*;

        assert_eq!(Idle.transition(Content), Idle);
        assert_eq!(Idle.transition(StopHeader), Idle);
        assert_eq!(Idle.transition(StartHeader), Capturing);
        assert_eq!(Capturing.transition(Content), Capturing);
        assert_eq!(Capturing.transition(StartHeader), Capturing);
        assert_eq!(Capturing.transition(StopHeader), Stopped);
        assert_eq!(Stopped.transition(StartHeader), Stopped);
    }

    #[test]
    fn test_classify_start_wins() {
        let e = extractor();
        assert_eq!(e.classify("certifications & achievements"), LineEvent::StartHeader);
        assert_eq!(e.classify("projects"), LineEvent::StopHeader);
        assert_eq!(e.classify("aws cloud practitioner"), LineEvent::Content);
    }

    #[test]
    fn test_no_header_gives_sentinel() {
        let text = "Jane Doe\nAWS Certified Cloud Practitioner from Amazon\n";
        assert_eq!(extractor().extract(text), NO_CERTIFICATION_DATA);
    }

    #[test]
    fn test_captures_until_stop_header() {
        let text = "Certifications\n\
                    • AWS Certified Cloud Practitioner (Amazon)\n\
                    - Python for Data Science by IBM\n\
                    Projects\n\
                    Built a compiler in Rust\n";
        assert_eq!(
            extractor().extract(text),
            "AWS Certified Cloud Practitioner (Amazon)\nPython for Data Science by IBM"
        );
    }

    #[test]
    fn test_filters() {
        let text = "CERTIFICATIONS:\n\
                    Oracle SQL\n\
                    Email me at x@gmail.com please\n\
                    Winner of state coding competition\n\
                    Hackathon participant at HackFest 2023\n\
                    Google Data Analytics Professional Certificate\n";
        assert_eq!(
            extractor().extract(text),
            "Google Data Analytics Professional Certificate"
        );
    }

    #[test]
    fn test_header_line_is_not_emitted() {
        let text = "Training and certifications completed this year\nDjango web development course\n";
        assert_eq!(extractor().extract(text), "Django web development course");
    }

    #[test]
    fn test_everything_filtered_gives_sentinel() {
        let text = "Certification\nIBM\nDOB 01/01/2000 Mumbai\n";
        assert_eq!(extractor().extract(text), NO_CERTIFICATION_DATA);
    }

    #[test]
    fn test_stop_header_before_capture_is_ignored() {
        let text = "Education\nBCA 2022\nCertifications\nMicrosoft Azure Fundamentals AZ-900\n";
        assert_eq!(
            extractor().extract(text),
            "Microsoft Azure Fundamentals AZ-900"
        );
    }
}
