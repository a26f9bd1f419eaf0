//! Section splitter.
//!
//! Finds the first header line for each configured section and slices the
//! text between consecutive headers.

use regex::Regex;

use crate::error::Result;
use crate::keywords::KeywordRegistry;
use crate::model::{SectionKind, SectionMap};

/// Splits résumé text into named sections.
#[derive(Debug, Clone)]
pub struct SectionSplitter {
    headers: Vec<(SectionKind, Vec<Regex>)>,
}

impl SectionSplitter {
    /// Compile header patterns for every section in the registry.
    pub fn new(registry: &KeywordRegistry) -> Result<Self> {
        let mut headers = Vec::with_capacity(SectionKind::ALL.len());
        for (kind, synonyms) in registry.section_headers.iter() {
            let patterns = synonyms
                .iter()
                .map(|kw| header_pattern(kw))
                .collect::<Result<Vec<_>>>()?;
            headers.push((kind, patterns));
        }
        Ok(Self { headers })
    }

    /// Split text into sections.
    ///
    /// A header is a synonym alone on its line, optionally followed by a
    /// colon. Each section runs from its header to the next detected header.
    /// Without any header the whole text is attributed to experience.
    pub fn split<'a>(&self, text: &'a str) -> SectionMap<'a> {
        let mut found: Vec<(usize, SectionKind)> = Vec::new();

        for (kind, patterns) in &self.headers {
            // First synonym that matches wins for this section
            if let Some(m) = patterns.iter().find_map(|re| re.find(text)) {
                found.push((m.start(), *kind));
            }
        }

        if found.is_empty() {
            log::debug!("No section headers found, attributing text to experience");
            return SectionMap::experience_only(text);
        }

        found.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.as_str().cmp(b.1.as_str())));
        log::debug!(
            "Detected sections: {:?}",
            found.iter().map(|(_, k)| k.as_str()).collect::<Vec<_>>()
        );

        let detected = found
            .iter()
            .enumerate()
            .map(|(i, &(start, kind))| {
                let end = found.get(i + 1).map_or(text.len(), |&(next, _)| next);
                (kind, text[start..end].trim())
            })
            .collect();

        SectionMap::from_detected(detected)
    }
}

fn header_pattern(keyword: &str) -> Result<Regex> {
    let pattern = format!(r"(?i)(?:\n|^)\s*{}\s*(?:\n|:)", regex::escape(keyword));
    Ok(Regex::new(&pattern)?)
}
