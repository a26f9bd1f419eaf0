//! Extraction options and configuration.

use crate::keywords::KeywordRegistry;

/// Options for building a [`ResumeExtractor`](super::ResumeExtractor).
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Keyword tables consulted by every extractor
    pub keywords: KeywordRegistry,

    /// Whether batch extraction runs in parallel
    pub parallel: bool,

    /// Normalize input text (NFC, ligatures, bullets) before extraction
    pub clean_input: bool,
}

impl ExtractOptions {
    /// Create new extract options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the keyword registry.
    pub fn with_keywords(mut self, keywords: KeywordRegistry) -> Self {
        self.keywords = keywords;
        self
    }

    /// Enable or disable parallel batch extraction.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel batch extraction.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Enable or disable input cleanup.
    pub fn with_input_cleanup(mut self, clean: bool) -> Self {
        self.clean_input = clean;
        self
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            keywords: KeywordRegistry::default(),
            parallel: true,
            clean_input: false,
        }
    }
}
