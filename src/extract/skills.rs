//! Skill vocabulary matching.

use std::collections::BTreeSet;

use regex::RegexSet;

use crate::error::Result;
use crate::keywords::KeywordRegistry;

/// Matches the skill vocabulary as whole words, case-insensitively.
#[derive(Debug, Clone)]
pub struct SkillMatcher {
    skills: Vec<String>,
    patterns: RegexSet,
}

impl SkillMatcher {
    /// Compile one whole-word pattern per vocabulary term.
    pub fn new(registry: &KeywordRegistry) -> Result<Self> {
        let patterns = RegexSet::new(
            registry
                .skills
                .iter()
                .map(|skill| format!(r"(?i)\b{}\b", regex::escape(skill))),
        )?;
        Ok(Self {
            skills: registry.skills.clone(),
            patterns,
        })
    }

    /// Matching vocabulary terms, deduplicated and sorted.
    pub fn matches<'s>(&'s self, text: &str) -> BTreeSet<&'s str> {
        self.patterns
            .matches(text)
            .into_iter()
            .map(|i| self.skills[i].as_str())
            .collect()
    }

    /// Matching terms joined with ", ".
    pub fn extract(&self, text: &str) -> String {
        self.matches(text).into_iter().collect::<Vec<_>>().join(", ")
    }
}
