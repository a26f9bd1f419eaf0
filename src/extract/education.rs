//! Education extraction.
//!
//! Degree lines are found by keyword, labelled through the registry's
//! ordered label rules, and paired with the first score found on the line
//! itself or on one of the next three lines. Each label is recorded once.
//!
//! Scores are recognized in this order, after removing year ranges such as
//! `2018-2021` so they are not mistaken for numbers:
//!
//! 1. `Percentage 82.5` → `82.5%`
//! 2. `8.4 CGPA` → `8.4 CGPA`
//! 3. `82.5%`
//! 4. `82%`

use regex::Regex;

use crate::error::Result;
use crate::keywords::{KeywordRegistry, KeywordSet};
use crate::model::{DegreeRecord, EducationRecords};

use super::non_empty_lines;

/// How many lines after a degree line may carry its score.
const SCORE_LOOKAHEAD: usize = 3;

/// Extracts degree labels and scores.
#[derive(Debug, Clone)]
pub struct EducationExtractor {
    degree_keywords: KeywordSet,
    stop_headers: KeywordSet,
    labels: Vec<(String, KeywordSet)>,
    year_range: Regex,
    percentage_keyword: Regex,
    cgpa: Regex,
    percent_decimal: Regex,
    percent_int: Regex,
    label_delimiter: Regex,
    whitespace: Regex,
}

impl EducationExtractor {
    /// Create an extractor from the registry's education tables.
    pub fn new(registry: &KeywordRegistry) -> Result<Self> {
        Ok(Self {
            degree_keywords: KeywordSet::new(&registry.degree_keywords),
            stop_headers: KeywordSet::new(&registry.education_stop_headers),
            labels: registry
                .degree_labels
                .iter()
                .map(|rule| (rule.label.clone(), KeywordSet::new(&rule.any_of)))
                .collect(),
            year_range: Regex::new(r"\b\d{4}\s*[-–]\s*\d{4}\b")?,
            percentage_keyword: Regex::new(r"(?i)percentage\s*(\d+(?:\.\d+)?)")?,
            cgpa: Regex::new(r"(?i)\b\d+\.\d+\s*cgpa\b")?,
            percent_decimal: Regex::new(r"\b\d+\.\d+%")?,
            percent_int: Regex::new(r"\b\d+%")?,
            label_delimiter: Regex::new(r"\||–|-")?,
            whitespace: Regex::new(r"\s+")?,
        })
    }

    /// Collect one record per degree label, first occurrence wins.
    pub fn extract_records(&self, text: &str) -> EducationRecords {
        let lines = non_empty_lines(text);
        let mut records = EducationRecords::new();

        for (i, line) in lines.iter().enumerate() {
            let lower = line.to_lowercase();

            // Skips only this line, the scan goes on
            if self.stop_headers.matches(&lower) {
                continue;
            }
            if !self.degree_keywords.matches(&lower) {
                continue;
            }

            let label = self.normalize_label(line, &lower);
            if records.contains(&label) {
                continue;
            }

            let score = self
                .extract_score(line)
                .or_else(|| self.score_from_following(&lines[i + 1..]));

            match score {
                Some(score) => {
                    log::trace!("Education: {} -> {}", label, score);
                    records.insert(DegreeRecord::new(label, score));
                }
                None => log::trace!("Education: no score found for {}", label),
            }
        }

        records
    }

    /// Records rendered as newline-joined "<label> <score>" lines, school
    /// levels first.
    pub fn extract(&self, text: &str) -> String {
        self.extract_records(text).render()
    }

    /// Map a degree line to its label.
    ///
    /// The first registry rule with a matching substring wins. Otherwise the
    /// label is the text before the first `|`, `–`, `-` or `,`.
    pub fn normalize_label(&self, line: &str, lower: &str) -> String {
        if let Some((label, _)) = self.labels.iter().find(|(_, set)| set.matches(lower)) {
            return label.clone();
        }

        let head = self.label_delimiter.split(line).next().unwrap_or("").trim();
        let head = head.split(',').next().unwrap_or("").trim();
        self.whitespace.replace_all(head, " ").into_owned()
    }

    /// Find a score on a single line.
    pub fn extract_score(&self, line: &str) -> Option<String> {
        let line = self.year_range.replace_all(line, "");

        if let Some(caps) = self.percentage_keyword.captures(&line) {
            return Some(format!("{}%", &caps[1]));
        }
        if let Some(m) = self.cgpa.find(&line) {
            return Some(m.as_str().to_uppercase());
        }
        if let Some(m) = self.percent_decimal.find(&line) {
            return Some(m.as_str().to_string());
        }
        self.percent_int.find(&line).map(|m| m.as_str().to_string())
    }

    fn score_from_following(&self, following: &[&str]) -> Option<String> {
        for line in following.iter().take(SCORE_LOOKAHEAD) {
            let lower = line.to_lowercase();
            // Another degree or a new section owns whatever follows
            if self.degree_keywords.matches(&lower) || self.stop_headers.matches(&lower) {
                return None;
            }
            if let Some(score) = self.extract_score(line) {
                return Some(score);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> EducationExtractor {
        EducationExtractor::new(&KeywordRegistry::default()).unwrap()
    }

    #[test]
    fn test_score_on_same_line() {
        let text = "BCA | XYZ College | 2019-2022 | 78.5%";
        assert_eq!(extractor().extract(text), "BCA 78.5%");
    }

    #[test]
    fn test_score_patterns_in_order() {
        let e = extractor();
        assert_eq!(e.extract_score("Percentage 82.4, 9.1 CGPA").as_deref(), Some("82.4%"));
        assert_eq!(e.extract_score("8.2 cgpa (76%)").as_deref(), Some("8.2 CGPA"));
        assert_eq!(e.extract_score("76% or 76.5%").as_deref(), Some("76.5%"));
        assert_eq!(e.extract_score("scored 91%").as_deref(), Some("91%"));
        assert_eq!(e.extract_score("CGPA: 8.5").as_deref(), None);
    }

    #[test]
    fn test_year_range_removed_before_scoring() {
        let e = extractor();
        assert_eq!(e.extract_score("2018 - 2020"), None);
        assert_eq!(e.extract_score("2018–2020 Percentage 67").as_deref(), Some("67%"));
    }

    #[test]
    fn test_score_on_following_lines() {
        let text = "MCA\nABC University\n2020-2022\nCGPA 8.7 overall, 8.70 cgpa\n";
        assert_eq!(extractor().extract(text), "MCA 8.70 CGPA");
    }

    #[test]
    fn test_lookahead_stops_at_next_degree() {
        let text = "MCA\nABC University\nBCA\n81%\n";
        // MCA gets nothing, BCA finds 81% on the next line
        assert_eq!(extractor().extract(text), "BCA 81%");
    }

    #[test]
    fn test_lookahead_stops_at_stop_header() {
        let text = "Master of Arts\nSkills\n88%\n";
        assert_eq!(extractor().extract(text), "");
    }

    #[test]
    fn test_lookahead_limited_to_three_lines() {
        let text = "HSC\nline one\nline two\nline three\n90%\n";
        assert_eq!(extractor().extract(text), "");
    }

    #[test]
    fn test_stop_header_line_skipped_not_halting() {
        let text = "Personal: BCA 70%\nSSC 85%\n";
        assert_eq!(extractor().extract(text), "10th 85%");
    }

    #[test]
    fn test_first_label_wins() {
        let text = "BCA 65%\nBCA (second attempt) 90%\n";
        assert_eq!(extractor().extract(text), "BCA 65%");
    }

    #[test]
    fn test_label_without_score_can_be_filled_later() {
        let text = "BCA\nSkills\nBCA 72%\n";
        assert_eq!(extractor().extract(text), "BCA 72%");
    }

    #[test]
    fn test_school_labels_first() {
        let text = "MSc CS | 2022-2024 | 8.9 CGPA\nHSC | 2017 | 74%\nSSC | 2015 | 88%\n";
        assert_eq!(extractor().extract(text), "10th 88%\n12th 74%\nMSc 8.9 CGPA");
    }

    #[test]
    fn test_label_precedence() {
        let e = extractor();
        let line = "MCA after BCA";
        assert_eq!(e.normalize_label(line, &line.to_lowercase()), "MCA");
        let line = "Class 12 (HSC)";
        assert_eq!(e.normalize_label(line, &line.to_lowercase()), "12th");
    }

    #[test]
    fn test_free_text_label() {
        let e = extractor();
        let line = "Bachelor of   Science, Physics – Delhi University";
        assert_eq!(
            e.normalize_label(line, &line.to_lowercase()),
            "Bachelor of Science"
        );
        let line = "Diploma in Mechanical Engineering | 2016 | 69%";
        assert_eq!(
            e.normalize_label(line, &line.to_lowercase()),
            "Diploma in Mechanical Engineering"
        );
    }

    #[test]
    fn test_no_degree_lines() {
        assert_eq!(extractor().extract("Hello\nWorld 99%\n"), "");
        assert_eq!(extractor().extract(""), "");
    }
}
