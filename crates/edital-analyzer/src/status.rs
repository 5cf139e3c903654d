//! Readiness and health reporting

use edital_patterns::PatternCounts;
use serde::Serialize;

/// Snapshot of the analyzer's readiness
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyzerStatus {
    /// A language model is loaded
    pub model_loaded: bool,

    /// Identifier of the loaded (or configured) model
    pub model_name: String,

    /// The cache backend answered a ping
    pub cache_connected: bool,

    /// Name of the cache backend, when caching is active
    pub cache_backend: Option<String>,

    /// The pattern table is loaded
    pub patterns_loaded: bool,

    /// Number of document-type vocabulary entries
    pub document_types_loaded: usize,

    /// Matchers per pattern group, when the table is loaded
    pub pattern_counts: Option<PatternCounts>,
}

impl AnalyzerStatus {
    /// Ready to analyze: model and patterns are loaded
    ///
    /// The cache is not required; an analyzer without one runs uncached.
    pub fn is_ready(&self) -> bool {
        self.model_loaded && self.patterns_loaded
    }
}
