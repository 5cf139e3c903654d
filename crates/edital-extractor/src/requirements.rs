//! Habilitação requirement extraction

use edital_domain::{DocumentType, ExtractedRequirement};
use edital_patterns::PatternTable;
use std::sync::Arc;
use tracing::debug;

/// Descriptions shorter than this (in characters, after trimming) are dropped
pub const MIN_DESCRIPTION_CHARS: usize = 5;

/// Finds obligation phrases ("apresentar ...", "certidão ...") and tags them
#[derive(Debug, Clone)]
pub struct RequirementExtractor {
    patterns: Arc<PatternTable>,
}

impl RequirementExtractor {
    /// Create an extractor over a shared pattern table
    pub fn new(patterns: Arc<PatternTable>) -> Self {
        Self { patterns }
    }

    /// Every requirement in `text`, in rule order and then match order
    ///
    /// A sentence matched by more than one rule yields one requirement per
    /// rule.
    pub fn extract(&self, text: &str) -> Vec<ExtractedRequirement> {
        let mut requirements = Vec::new();

        for rule in &self.patterns.requirement_rules {
            for captures in rule.regex.captures_iter(text) {
                let Some(matched) = captures.get(1) else {
                    continue;
                };
                let description = matched.as_str().trim();
                if !self.keep_description(description) {
                    debug!("Discarded {} description '{}'", rule.kind, description);
                    continue;
                }

                requirements.push(ExtractedRequirement {
                    kind: rule.kind,
                    description: description.to_string(),
                    document_type: self.map_document_type(description),
                    mandatory: true,
                });
            }
        }

        debug!("Extracted {} requirements", requirements.len());
        requirements
    }

    fn keep_description(&self, description: &str) -> bool {
        if description.chars().count() < MIN_DESCRIPTION_CHARS {
            return false;
        }
        let lowered = description.to_lowercase();
        !self.patterns.stop_words.iter().any(|w| *w == lowered)
    }

    /// Document type whose vocabulary phrase is contained in `description`
    pub fn map_document_type(&self, description: &str) -> Option<DocumentType> {
        self.patterns
            .document_types
            .find_in(&description.to_lowercase())
    }
}
