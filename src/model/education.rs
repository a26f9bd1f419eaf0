//! Degree records collected by the education extractor.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A normalized degree label with its score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DegreeRecord {
    /// Normalized label ("10th", "12th", "BCA", or free text)
    pub label: String,
    /// Formatted score ("85%", "8.5 CGPA")
    pub score: String,
}

impl DegreeRecord {
    /// Create a new record.
    pub fn new(label: impl Into<String>, score: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            score: score.into(),
        }
    }
}

impl fmt::Display for DegreeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.label, self.score)
    }
}

/// Degree records keyed by label, first insert wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationRecords {
    records: Vec<DegreeRecord>,
}

impl EducationRecords {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a label already has a score.
    pub fn contains(&self, label: &str) -> bool {
        self.records.iter().any(|r| r.label == label)
    }

    /// Insert a record unless its label is already present.
    ///
    /// Returns `false` when the record was rejected.
    pub fn insert(&mut self, record: DegreeRecord) -> bool {
        if self.contains(&record.label) {
            return false;
        }
        self.records.push(record);
        true
    }

    /// Get the score recorded for a label.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.records
            .iter()
            .find(|r| r.label == label)
            .map(|r| r.score.as_str())
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in output order: "10th", then "12th", then the rest in
    /// insertion order.
    pub fn ordered(&self) -> Vec<&DegreeRecord> {
        let school = ["10th", "12th"];
        let mut ordered: Vec<&DegreeRecord> = school
            .iter()
            .filter_map(|label| self.records.iter().find(|r| r.label == *label))
            .collect();
        ordered.extend(
            self.records
                .iter()
                .filter(|r| !school.contains(&r.label.as_str())),
        );
        ordered
    }

    /// Render as newline-joined "<label> <score>" lines in output order.
    pub fn render(&self) -> String {
        self.ordered()
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
