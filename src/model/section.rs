//! Section names and the section map produced by the splitter.

use std::fmt;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Sections the splitter can attribute text to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Experience,
    Projects,
    Awards,
    Publications,
    Certifications,
}

impl SectionKind {
    /// All sections, in registry order.
    pub const ALL: [SectionKind; 5] = [
        SectionKind::Experience,
        SectionKind::Projects,
        SectionKind::Awards,
        SectionKind::Publications,
        SectionKind::Certifications,
    ];

    /// Lowercase section name.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Experience => "experience",
            SectionKind::Projects => "projects",
            SectionKind::Awards => "awards",
            SectionKind::Publications => "publications",
            SectionKind::Certifications => "certifications",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text attributed to each section, borrowed from the résumé.
///
/// Every [`SectionKind`] has an entry. Sections whose header was found come
/// first, in document order; the rest follow in registry order with empty
/// text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionMap<'a> {
    entries: Vec<(SectionKind, &'a str)>,
}

impl<'a> SectionMap<'a> {
    /// Build a map from the detected sections, in document order.
    ///
    /// Sections missing from `detected` get an empty entry. A section listed
    /// twice keeps its first text.
    pub fn from_detected(detected: Vec<(SectionKind, &'a str)>) -> Self {
        let mut entries: Vec<(SectionKind, &'a str)> = Vec::with_capacity(SectionKind::ALL.len());
        for (kind, text) in detected {
            if !entries.iter().any(|(k, _)| *k == kind) {
                entries.push((kind, text));
            }
        }
        for kind in SectionKind::ALL {
            if !entries.iter().any(|(k, _)| *k == kind) {
                entries.push((kind, ""));
            }
        }
        Self { entries }
    }

    /// Attribute the whole text to experience.
    pub fn experience_only(text: &'a str) -> Self {
        Self::from_detected(vec![(SectionKind::Experience, text)])
    }

    /// Get the text of a section (empty if the section was not found).
    pub fn get(&self, kind: SectionKind) -> &'a str {
        self.entries
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, text)| *text)
            .unwrap_or("")
    }

    /// Iterate over all entries in map order.
    pub fn iter(&self) -> impl Iterator<Item = (SectionKind, &'a str)> + '_ {
        self.entries.iter().copied()
    }

    /// True when every section is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|(_, text)| text.is_empty())
    }
}

impl Serialize for SectionMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (kind, text) in &self.entries {
            map.serialize_entry(kind.as_str(), text)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_detected_fills_missing() {
        let map = SectionMap::from_detected(vec![
            (SectionKind::Awards, "Awards\nWinner"),
            (SectionKind::Experience, "Experience\nDev"),
        ]);

        let kinds: Vec<SectionKind> = map.iter().map(|(k, _)| k).collect();
        assert_eq!(
            kinds,
            vec![
                SectionKind::Awards,
                SectionKind::Experience,
                SectionKind::Projects,
                SectionKind::Publications,
                SectionKind::Certifications,
            ]
        );
        assert_eq!(map.get(SectionKind::Awards), "Awards\nWinner");
        assert_eq!(map.get(SectionKind::Projects), "");
    }

    #[test]
    fn test_experience_only() {
        let map = SectionMap::experience_only("whole text");
        assert_eq!(map.get(SectionKind::Experience), "whole text");
        assert!(SectionKind::ALL
            .iter()
            .filter(|k| **k != SectionKind::Experience)
            .all(|k| map.get(*k).is_empty()));
    }

    #[test]
    fn test_serialize_preserves_order() {
        let map = SectionMap::from_detected(vec![(SectionKind::Publications, "Pubs")]);
        let json = serde_json::to_string(&map).unwrap();
        assert!(json.starts_with(r#"{"publications":"Pubs","experience":"""#));
    }

    #[test]
    fn test_section_kind_display() {
        assert_eq!(SectionKind::Certifications.to_string(), "certifications");
    }
}
