//! Awards section cleanup.

use regex::Regex;

use crate::error::Result;
use crate::keywords::{KeywordRegistry, KeywordSet};

use super::{non_empty_lines, strip_bullets};

/// Keeps award lines from the awards section and drops plain activities.
#[derive(Debug, Clone)]
pub struct AchievementsCleaner {
    positive: KeywordSet,
    negative: KeywordSet,
    whitespace: Regex,
}

impl AchievementsCleaner {
    /// Create a cleaner from the registry's award and activity words.
    pub fn new(registry: &KeywordRegistry) -> Result<Self> {
        Ok(Self {
            positive: KeywordSet::new(&registry.award_positive_words),
            negative: KeywordSet::new(&registry.activity_negative_words),
            whitespace: Regex::new(r"\s+")?,
        })
    }

    /// Surviving lines, normalized.
    ///
    /// A line is dropped when it mentions an activity word, or when it
    /// mentions no award word. Kept lines get spaced `|` separators,
    /// collapsed whitespace and no leading bullets.
    pub fn clean_lines(&self, text: &str) -> Vec<String> {
        non_empty_lines(text)
            .into_iter()
            .filter(|line| {
                let lower = line.to_lowercase();
                !self.negative.matches(&lower) && self.positive.matches(&lower)
            })
            .map(|line| {
                let spaced = line.replace('|', " | ");
                let collapsed = self.whitespace.replace_all(&spaced, " ");
                strip_bullets(&collapsed).to_string()
            })
            .collect()
    }

    /// Surviving lines joined with newlines; empty when nothing survives.
    pub fn clean(&self, text: &str) -> String {
        self.clean_lines(text).join("\n")
    }
}
